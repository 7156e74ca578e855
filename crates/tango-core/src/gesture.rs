/// Outcome of a horizontal drag on a flashcard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swipe {
    /// Memorised
    Right,
    /// Not yet
    Left,
    None,
}

impl Swipe {
    /// Value to store in the `known` column, if the swipe counts
    pub fn known(self) -> Option<bool> {
        match self {
            Swipe::Right => Some(true),
            Swipe::Left => Some(false),
            Swipe::None => None,
        }
    }
}

pub const DEFAULT_SWIPE_THRESHOLD: f32 = 100.0;

/// Classify the drag distance at release. Both boundaries are inclusive.
pub fn classify_swipe(displacement: f32, threshold: f32) -> Swipe {
    if !displacement.is_finite() {
        return Swipe::None;
    }

    let threshold = threshold.abs();

    if displacement >= threshold {
        Swipe::Right
    } else if displacement <= -threshold {
        Swipe::Left
    } else {
        Swipe::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thresholds_are_inclusive() {
        assert_eq!(classify_swipe(100.0, DEFAULT_SWIPE_THRESHOLD), Swipe::Right);
        assert_eq!(classify_swipe(-100.0, DEFAULT_SWIPE_THRESHOLD), Swipe::Left);
        assert_eq!(classify_swipe(99.9, DEFAULT_SWIPE_THRESHOLD), Swipe::None);
        assert_eq!(classify_swipe(-99.9, DEFAULT_SWIPE_THRESHOLD), Swipe::None);
        assert_eq!(classify_swipe(0.0, DEFAULT_SWIPE_THRESHOLD), Swipe::None);
    }

    #[test]
    fn test_far_drags() {
        assert_eq!(classify_swipe(420.0, DEFAULT_SWIPE_THRESHOLD), Swipe::Right);
        assert_eq!(classify_swipe(-1e6, DEFAULT_SWIPE_THRESHOLD), Swipe::Left);
    }

    #[test]
    fn test_non_finite_is_ignored() {
        assert_eq!(classify_swipe(f32::NAN, DEFAULT_SWIPE_THRESHOLD), Swipe::None);
        assert_eq!(classify_swipe(f32::INFINITY, DEFAULT_SWIPE_THRESHOLD), Swipe::None);
    }

    #[test]
    fn test_known_mapping() {
        assert_eq!(Swipe::Right.known(), Some(true));
        assert_eq!(Swipe::Left.known(), Some(false));
        assert_eq!(Swipe::None.known(), None);
    }
}
