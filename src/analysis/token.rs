//! Token types for the analysis pipeline.
//!
//! A [`Token`] is one word cut out of the input text by a tokenizer, carried
//! through the token filters. Filters rewrite `text`; the byte offsets keep
//! pointing at the span the word came from.
//!
//! # Examples
//!
//! ```
//! use rslp::analysis::token::Token;
//!
//! let token = Token::with_offsets("meninas", 1, 4, 11);
//! assert_eq!(token.text, "meninas");
//! assert_eq!(token.start_offset, 4);
//!
//! let stemmed = token.with_text("menin").with_original_text("meninas");
//! assert_eq!(stemmed.text, "menin");
//! assert_eq!(stemmed.original_text.as_deref(), Some("meninas"));
//! assert_eq!(stemmed.end_offset, 11);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single unit of text after tokenization.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The text content of the token
    pub text: String,

    /// The position of the token in the token stream (0-based)
    pub position: usize,

    /// The byte offset where this token starts in the original text
    pub start_offset: usize,

    /// The byte offset where this token ends in the original text
    pub end_offset: usize,

    /// Whether this token has been marked as stopped by a filter
    #[serde(default)]
    pub stopped: bool,

    /// The surface form before a filter rewrote `text` (useful for highlighting)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_text: Option<String>,
}

impl Token {
    /// Create a new token with the given text and position.
    pub fn new<S: Into<String>>(text: S, position: usize) -> Self {
        Self::with_offsets(text, position, 0, 0)
    }

    /// Create a new token with text, position, and byte offsets.
    pub fn with_offsets<S: Into<String>>(
        text: S,
        position: usize,
        start_offset: usize,
        end_offset: usize,
    ) -> Self {
        Token {
            text: text.into(),
            position,
            start_offset,
            end_offset,
            stopped: false,
            original_text: None,
        }
    }

    /// Get the length of the token text in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Check if the token is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Mark this token as stopped.
    pub fn stop(mut self) -> Self {
        self.stopped = true;
        self
    }

    /// Check if this token is stopped.
    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// Replace the token text.
    pub fn with_text<S: Into<String>>(mut self, text: S) -> Self {
        self.text = text.into();
        self
    }

    /// Record the surface form, keeping the first one recorded.
    pub fn with_original_text<S: Into<String>>(mut self, original: S) -> Self {
        if self.original_text.is_none() {
            self.original_text = Some(original.into());
        }
        self
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// A token stream represents a sequence of tokens from the analysis pipeline.
pub type TokenStream = Box<dyn Iterator<Item = Token>>;
