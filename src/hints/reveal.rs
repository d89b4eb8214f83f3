use serde::{Deserialize, Serialize};

/// Tracks how many solution steps the player can see.
///
/// ## Example
///
/// ```
/// use liquid_puzzle::hints::HintRevealController;
///
/// let mut hints = HintRevealController::new(2);
/// hints.request_first_reveal();
/// assert_eq!(hints.revealed_count(), 1);
///
/// assert!(hints.reveal_next());
/// assert!(!hints.reveal_next()); // all steps visible
/// assert_eq!(hints.revealed_count(), 2);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HintRevealController {
    revealed: usize,
    total: usize,
}

impl HintRevealController {
    /// Nothing revealed, `total` steps available.
    #[must_use]
    pub fn new(total: usize) -> Self {
        Self { revealed: 0, total }
    }

    /// Hide everything again, for a new attempt with `total` steps.
    pub fn reset(&mut self, total: usize) {
        *self = Self::new(total);
    }

    /// Reveal the first step if nothing is visible yet.
    ///
    /// Called when the hint panel is opened. Does nothing for a level
    /// without solution steps.
    pub fn request_first_reveal(&mut self) {
        if self.revealed == 0 && self.total > 0 {
            self.revealed = 1;
        }
    }

    /// Reveal one more step. Returns false if all steps were visible.
    pub fn reveal_next(&mut self) -> bool {
        if self.revealed >= self.total {
            return false;
        }
        self.revealed += 1;
        true
    }

    #[must_use]
    pub fn revealed_count(&self) -> usize {
        self.revealed
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    /// Check if a step (0-based) is visible.
    #[must_use]
    pub fn is_revealed(&self, step: usize) -> bool {
        step < self.revealed
    }

    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.revealed >= self.total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_hides_everything() {
        let hints = HintRevealController::new(3);
        assert_eq!(hints.revealed_count(), 0);
        assert_eq!(hints.total(), 3);
        assert!(!hints.is_revealed(0));
        assert!(!hints.is_exhausted());
    }

    #[test]
    fn test_first_reveal_only_once() {
        let mut hints = HintRevealController::new(3);
        hints.request_first_reveal();
        hints.reveal_next();
        hints.request_first_reveal();

        assert_eq!(hints.revealed_count(), 2);
        assert!(hints.is_revealed(1));
        assert!(!hints.is_revealed(2));
    }

    #[test]
    fn test_reveal_next_stops_at_total() {
        let mut hints = HintRevealController::new(2);
        assert!(hints.reveal_next());
        assert!(hints.reveal_next());
        assert!(!hints.reveal_next());

        assert_eq!(hints.revealed_count(), 2);
        assert!(hints.is_exhausted());
    }

    #[test]
    fn test_no_steps() {
        let mut hints = HintRevealController::new(0);
        hints.request_first_reveal();
        assert!(!hints.reveal_next());
        assert_eq!(hints.revealed_count(), 0);
        assert!(hints.is_exhausted());
    }

    #[test]
    fn test_reset() {
        let mut hints = HintRevealController::new(4);
        hints.request_first_reveal();
        hints.reveal_next();

        hints.reset(5);

        assert_eq!(hints.revealed_count(), 0);
        assert_eq!(hints.total(), 5);
    }
}
