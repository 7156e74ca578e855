use tango_types::{SortKey, UiEvent};

/// A parsed line from the terminal
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Send(UiEvent),
    /// Needs a confirmation before it is sent
    Delete(i64),
    SwipeRight,
    SwipeLeft,
    Help,
    Quit,
    Invalid(String),
}

pub const HELP: &str = "\
Translate:  translate <text> | save
Word list:  words | refresh | sort <id|english|japanese|known> | delete <id>
Flashcards: cards | flip | right | left | swipe <dx>
Other:      help | quit";

pub fn parse_command(line: &str) -> Option<Command> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let (name, rest) = match line.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, rest.trim()),
        None => (line, ""),
    };

    let command = match name.to_ascii_lowercase().as_str() {
        "translate" | "t" => {
            if rest.is_empty() {
                Command::Invalid("Usage: translate <text>".to_string())
            } else {
                Command::Send(UiEvent::Translate(rest.to_string()))
            }
        }
        "save" => Command::Send(UiEvent::SaveWord),
        "words" | "list" => Command::Send(UiEvent::LoadWords),
        "refresh" => Command::Send(UiEvent::RefreshWords),
        "sort" => match SortKey::parse(rest) {
            Some(key) => Command::Send(UiEvent::SortWords(key)),
            None => Command::Invalid("Usage: sort <id|english|japanese|known>".to_string()),
        },
        "delete" | "rm" => match rest.parse::<i64>() {
            Ok(id) => Command::Delete(id),
            Err(_) => Command::Invalid("Usage: delete <id>".to_string()),
        },
        "cards" | "review" => Command::Send(UiEvent::LoadCards),
        "flip" | "tap" => Command::Send(UiEvent::FlipCard),
        "right" => Command::SwipeRight,
        "left" => Command::SwipeLeft,
        "swipe" => match rest.parse::<f32>() {
            Ok(dx) if dx.is_finite() => Command::Send(UiEvent::SwipeCard(dx)),
            _ => Command::Invalid("Usage: swipe <dx>".to_string()),
        },
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        other => Command::Invalid(format!("Unknown command '{other}', try 'help'")),
    };

    Some(command)
}

/// Answer to the delete confirmation
pub fn is_confirmation(line: &str) -> bool {
    matches!(line.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
