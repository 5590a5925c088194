//! Text analysis for the tagging engine.
//!
//! This module provides the preprocessing that turns raw text into a
//! boundary-marked string and a stopword-free token stream, and the stemmers
//! used to build single-word identities.

pub mod preprocess;
pub mod stemmer;

// Re-export commonly used types
pub use preprocess::*;
pub use stemmer::*;
