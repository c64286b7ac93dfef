//! Text analysis module for rslp.
//!
//! Tokenizers split text into words, token filters normalise them and
//! analyzers chain both into a pipeline ending in the RSLP stemmer.

pub mod analyzer;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

// Re-export commonly used types
pub use analyzer::*;
pub use token::*;
pub use token_filter::*;
pub use tokenizer::*;
