//! RSLP stemmer for Portuguese.
//!
//! Implementation of the *Removedor de Sufixos da Língua Portuguesa* by
//! Viviane Moreira Orengo and Christian Huyck ("A Stemmer Algorithm for the
//! Portuguese Language"). A word is lowercased and then reduced by the
//! groups of the [`CATALOGUE`]:
//!
//! 1. plural, adverb, feminine and augmentative, each tried once;
//! 2. noun, verb and vowel, tried in that order until one of them fires.
//!
//! # Examples
//!
//! ```
//! use rslp::analysis::token_filter::stem::Stemmer;
//! use rslp::analysis::token_filter::stem::rslp::RslpStemmer;
//!
//! let stemmer = RslpStemmer::new();
//!
//! assert_eq!(stemmer.stem("casas"), "cas");
//! assert_eq!(stemmer.stem("Brasileiros"), "brasil");
//! assert_eq!(stemmer.stem("cantando"), "cant");
//! ```

use log::debug;
use rayon::prelude::*;

use crate::analysis::token_filter::stem::Stemmer;
use crate::error::{Result, RslpError};

pub mod catalogue;
pub mod reduction;
pub mod token;

pub use catalogue::{CATALOGUE, Catalogue};
pub use reduction::{Condition, ExceptionMode, ReductionGroup, ReductionRule};
pub use token::{Region, StemToken};

/// A stem together with the groups that produced it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StemTrace {
    /// The stemmed word.
    pub stem: String,
    /// Names of the groups that rewrote the word, in application order.
    pub applied: Vec<&'static str>,
}

/// RSLP stemmer driven by a reduction rule catalogue.
#[derive(Clone, Copy, Debug)]
pub struct RslpStemmer {
    catalogue: &'static Catalogue,
}

impl RslpStemmer {
    /// Create a stemmer over the Portuguese catalogue.
    pub fn new() -> Self {
        RslpStemmer {
            catalogue: &CATALOGUE,
        }
    }

    /// The catalogue this stemmer applies.
    pub fn catalogue(&self) -> &'static Catalogue {
        self.catalogue
    }

    /// Stem a single word.
    ///
    /// Fails with [`RslpError::InvalidArgument`] if the word is empty or
    /// only whitespace.
    pub fn try_stem(&self, word: &str) -> Result<String> {
        let token = self.reduce(word, |_| {})?;
        Ok(token.into_string())
    }

    /// Stem a single word and report which groups fired.
    pub fn stem_with_trace(&self, word: &str) -> Result<StemTrace> {
        let mut applied = Vec::new();
        let token = self.reduce(word, |name| applied.push(name))?;

        Ok(StemTrace {
            stem: token.into_string(),
            applied,
        })
    }

    /// Stem many words in parallel, keeping their order.
    pub fn stem_batch<S>(&self, words: &[S]) -> Result<Vec<String>>
    where
        S: AsRef<str> + Sync,
    {
        words
            .par_iter()
            .map(|word| self.try_stem(word.as_ref()))
            .collect()
    }

    fn reduce<F>(&self, word: &str, mut on_applied: F) -> Result<StemToken>
    where
        F: FnMut(&'static str),
    {
        if word.trim().is_empty() {
            return Err(RslpError::invalid_argument("cannot stem an empty word"));
        }

        let mut token = StemToken::with_default_regions(word.to_lowercase());

        for group in self.catalogue.always {
            if group.apply(&mut token) {
                on_applied(group.name);
            }
        }

        if let Some(group) = self
            .catalogue
            .exclusive
            .iter()
            .find(|group| group.apply(&mut token))
        {
            on_applied(group.name);
        }

        Ok(token)
    }
}

impl Default for RslpStemmer {
    fn default() -> Self {
        Self::new()
    }
}

impl Stemmer for RslpStemmer {
    fn stem(&self, word: &str) -> String {
        match self.try_stem(word) {
            Ok(stem) => stem,
            Err(e) => {
                debug!("rslp: leaving '{word}' unstemmed: {e}");
                word.to_string()
            }
        }
    }

    fn name(&self) -> &'static str {
        "rslp"
    }
}

/// Stem a word with the Portuguese RSLP catalogue.
///
/// ```
/// assert_eq!(rslp::stem("meninas").unwrap(), "menin");
/// assert!(rslp::stem("").is_err());
/// ```
pub fn stem(word: &str) -> Result<String> {
    RslpStemmer::new().try_stem(word)
}
