//! # Autotag
//!
//! Unsupervised tag suggestion for arbitrary English text.
//!
//! ## Features
//!
//! - Single words, bigrams, capitalised phrases and acronyms as candidates
//! - Snowball (Porter2) stemming for single-word deduplication
//! - Configurable boosts, cutoffs and word lists
//! - Thread-safe engine with parallel batch analysis
//!
//! ```
//! use autotag::prelude::*;
//!
//! let tagger = Tagger::new(TaggerConfig::default()).unwrap();
//! let tags = tagger
//!     .analyze("I love New York. The city of york is old.", 5)
//!     .unwrap();
//! assert_eq!(tags[0].value, "new york");
//! ```

pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod lexicon;
pub mod tagging;

pub mod prelude {
    pub use crate::config::{BoostConfig, TaggerConfig};
    pub use crate::error::AutotagError;
    pub use crate::lexicon::Lexicon;
    pub use crate::tagging::{Tag, Tagger, TermType};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
