//! # rslp
//!
//! The RSLP suffix-stripping stemmer for Portuguese, with a small text
//! analysis pipeline around it.
//!
//! ## Features
//!
//! - Rule-table-driven reduction of plural, adverb, feminine, augmentative,
//!   noun, verb and vowel endings
//! - Immutable, shareable rule catalogue with validation
//! - Tokenizers, token filters and a ready-made Portuguese analyzer
//!
//! ```
//! assert_eq!(rslp::stem("casas").unwrap(), "cas");
//! assert_eq!(rslp::stem("cantaremos").unwrap(), "cant");
//! ```

pub mod analysis;
pub mod error;

pub use analysis::token_filter::stem::rslp::stem;

pub mod prelude {
    pub use crate::analysis::analyzer::{Analyzer, PortugueseAnalyzer, PortugueseAnalyzerConfig};
    pub use crate::analysis::token_filter::stem::rslp::{RslpStemmer, StemTrace};
    pub use crate::analysis::token_filter::{Filter, StemFilter, Stemmer};
    pub use crate::error::{Result, RslpError};
    pub use crate::stem;
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
