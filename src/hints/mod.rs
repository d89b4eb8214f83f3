//! Progressive hint reveal.
//!
//! Hints are the level's worked solution, revealed one step at a time.
//! Reveal is monotonic within a level attempt; only loading or resetting
//! the level hides the steps again.

mod reveal;

pub use reveal::HintRevealController;
