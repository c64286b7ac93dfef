//! Core analyzer trait definition.
//!
//! An analyzer is the complete text processing pipeline:
//!
//! ```text
//! Raw Text → Tokenizer → Filter 1 → ... → Filter N → Token Stream
//! ```
//!
//! # Examples
//!
//! ```
//! use rslp::analysis::analyzer::{Analyzer, PortugueseAnalyzer};
//!
//! let analyzer = PortugueseAnalyzer::new().unwrap();
//! let tokens: Vec<_> = analyzer.analyze("As meninas cantando").unwrap().collect();
//!
//! assert_eq!(tokens[0].text, "menin");
//! assert_eq!(tokens[1].text, "cant");
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for analyzers that convert text into processed tokens.
///
/// The trait requires `Send + Sync` so an analyzer can be shared across
/// threads.
pub trait Analyzer: Send + Sync {
    /// Analyze the given text and return a stream of tokens.
    fn analyze(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this analyzer (for debugging and configuration).
    fn name(&self) -> &'static str;
}
