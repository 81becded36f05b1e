//! Restyle Classifier
//!
//! Scans a free-text style prompt for theme keywords, mood words, and
//! explicit color names, and maps them to a set of [`StyleTag`]s drawn
//! from a fixed vocabulary.
//!
//! Classification is a pure, total function: it never fails, never blocks,
//! and an unmatched prompt simply yields an empty tag set.
//!
//! # Example
//!
//! ```
//! use restyle_classifier::classify;
//!
//! let tags = classify("Give everything a retro-gaming flair");
//! assert_eq!(tags.len(), 1);
//! ```

pub mod scanner;
pub mod tag;

pub use scanner::classify;
pub use tag::{Hue, MoodTag, StyleTag, TagSet, ThemeTag};
