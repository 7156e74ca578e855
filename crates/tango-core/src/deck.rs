use rand::Rng;
use rand::seq::SliceRandom;
use tango_types::{CardView, ReviewState, WordRecord};

use crate::gesture::classify_swipe;

/// `known` update produced by a counted swipe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KnownUpdate {
    pub id: i64,
    pub known: bool,
}

/// One pass over the saved words, front side first
#[derive(Debug, Clone, Default)]
pub struct FlashcardDeck {
    cards: Vec<WordRecord>,
    index: usize,
    showing_answer: bool,
}

impl FlashcardDeck {
    /// Deck in the given order
    pub fn new(cards: Vec<WordRecord>) -> Self {
        Self {
            cards,
            index: 0,
            showing_answer: false,
        }
    }

    pub fn shuffled<R: Rng + ?Sized>(mut cards: Vec<WordRecord>, rng: &mut R) -> Self {
        cards.shuffle(rng);
        Self::new(cards)
    }

    pub fn is_finished(&self) -> bool {
        self.index >= self.cards.len()
    }

    pub fn remaining(&self) -> usize {
        self.cards.len().saturating_sub(self.index)
    }

    pub fn current(&self) -> ReviewState {
        let Some(card) = self.cards.get(self.index) else {
            return ReviewState::Finished;
        };

        let text = if self.showing_answer {
            &card.translated_text
        } else {
            &card.source_text
        };

        ReviewState::Card(CardView {
            id: card.id,
            text: text.clone(),
            showing_answer: self.showing_answer,
            position: self.index,
            total: self.cards.len(),
        })
    }

    /// Tap on the card
    pub fn flip(&mut self) {
        if !self.is_finished() {
            self.showing_answer = !self.showing_answer;
        }
    }

    /// Release of a drag. A counted swipe moves to the next card with the
    /// front side up; a short drag leaves the card as it is.
    pub fn swipe(&mut self, displacement: f32, threshold: f32) -> Option<KnownUpdate> {
        let card = self.cards.get(self.index)?;
        let known = classify_swipe(displacement, threshold).known()?;

        let update = KnownUpdate { id: card.id, known };
        self.index += 1;
        self.showing_answer = false;

        Some(update)
    }
}
