//! Working token for the RSLP reduction engine.
//!
//! A [`StemToken`] carries the lowercased input word, the mutable form the
//! reduction groups rewrite, and a table of named minimum-stem-length
//! thresholds ([`Region`]s). It has no linguistic knowledge of its own.
//!
//! All lengths are measured in characters, so `"ções"` counts as four.
//!
//! # Examples
//!
//! ```
//! use rslp::analysis::token_filter::stem::rslp::{Region, StemToken};
//!
//! let mut token = StemToken::with_default_regions("casas");
//! assert!(token.has_suffix_in_region("s", Region::R2));
//! assert!(!token.has_suffix_in_region("casas", Region::R1));
//!
//! token.replace_suffix_in_region("s", "", Region::R0);
//! assert_eq!(token.as_str(), "casa");
//! assert_eq!(token.original(), "casas");
//! ```

use std::fmt;

use ahash::AHashMap;

/// Named minimum-stem-length threshold.
///
/// A suffix match in region `RN` is accepted only when at least `N`
/// characters remain in front of the suffix.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Region {
    R0,
    R1,
    R2,
    R3,
    R4,
    R5,
    R6,
}

impl Region {
    /// All regions in increasing threshold order.
    pub const ALL: [Region; 7] = [
        Region::R0,
        Region::R1,
        Region::R2,
        Region::R3,
        Region::R4,
        Region::R5,
        Region::R6,
    ];

    /// The threshold a region is marked with by default (`rN` → `N`).
    pub const fn default_threshold(self) -> usize {
        self as usize
    }

    /// The region label, `"r0"` through `"r6"`.
    pub const fn label(self) -> &'static str {
        match self {
            Region::R0 => "r0",
            Region::R1 => "r1",
            Region::R2 => "r2",
            Region::R3 => "r3",
            Region::R4 => "r4",
            Region::R5 => "r5",
            Region::R6 => "r6",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A word being reduced by the RSLP engine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StemToken {
    /// The input word, never modified after construction. Only group
    /// length conditions read it.
    original: String,

    /// The current working form.
    string: String,

    /// Region thresholds, fixed once construction is done.
    regions: AHashMap<Region, usize>,
}

impl StemToken {
    /// Create a token with no regions marked.
    ///
    /// Unmarked regions behave as threshold 0.
    pub(crate) fn new<S: Into<String>>(word: S) -> Self {
        let original = word.into();
        StemToken {
            string: original.clone(),
            original,
            regions: AHashMap::with_capacity(Region::ALL.len()),
        }
    }

    /// Create a token with every region `rN` marked with threshold `N`.
    ///
    /// This is the only public constructor, so every token handed out has
    /// all seven regions marked.
    pub fn with_default_regions<S: Into<String>>(word: S) -> Self {
        Region::ALL.iter().fold(Self::new(word), |token, &region| {
            token.mark_region(region, region.default_threshold())
        })
    }

    /// Set the threshold of a region.
    pub fn mark_region(mut self, region: Region, threshold: usize) -> Self {
        self.regions.insert(region, threshold);
        self
    }

    /// The threshold of a region, 0 if it was never marked.
    pub fn region(&self, region: Region) -> usize {
        self.regions.get(&region).copied().unwrap_or(0)
    }

    /// The word this token was created from.
    pub fn original(&self) -> &str {
        &self.original
    }

    /// The current working form.
    pub fn as_str(&self) -> &str {
        &self.string
    }

    /// Consume the token, yielding the current working form.
    pub fn into_string(self) -> String {
        self.string
    }

    /// Length of the original word in characters.
    pub fn original_len(&self) -> usize {
        self.original.chars().count()
    }

    /// Check whether the current form ends with `suffix`.
    pub fn has_suffix(&self, suffix: &str) -> bool {
        self.string.ends_with(suffix)
    }

    /// Check whether the current form ends with `suffix` and stripping it
    /// would leave at least the region's threshold of characters.
    pub fn has_suffix_in_region(&self, suffix: &str, region: Region) -> bool {
        match self.string.strip_suffix(suffix) {
            Some(stem) => stem.chars().count() >= self.region(region),
            None => false,
        }
    }

    /// Replace a trailing `suffix` with `replacement`.
    ///
    /// The region is not re-checked here; callers are expected to have
    /// matched with [`has_suffix_in_region`](Self::has_suffix_in_region)
    /// first. A suffix the current form does not end with leaves the token
    /// untouched.
    pub fn replace_suffix_in_region(&mut self, suffix: &str, replacement: &str, _region: Region) {
        if !self.string.ends_with(suffix) {
            return;
        }

        let cut = self.string.len() - suffix.len();
        self.string.truncate(cut);
        self.string.push_str(replacement);
    }
}

impl fmt::Display for StemToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_regions() {
        let token = StemToken::with_default_regions("palavra");

        for region in Region::ALL {
            assert_eq!(token.region(region), region.default_threshold());
        }
        assert_eq!(token.region(Region::R6), 6);
    }

    #[test]
    fn test_unmarked_region_is_zero() {
        let token = StemToken::new("casa").mark_region(Region::R3, 3);

        assert_eq!(token.region(Region::R3), 3);
        assert_eq!(token.region(Region::R5), 0);
        assert!(token.has_suffix_in_region("casa", Region::R5));
    }

    #[test]
    fn test_has_suffix() {
        let token = StemToken::new("meninas");

        assert!(token.has_suffix("s"));
        assert!(token.has_suffix("inas"));
        assert!(token.has_suffix("meninas"));
        assert!(!token.has_suffix("ãs"));
        assert!(!token.has_suffix("xmeninas"));
    }

    #[test]
    fn test_region_counts_characters_not_bytes() {
        // "ações" is 5 characters but 7 bytes.
        let token = StemToken::with_default_regions("ações");

        assert!(token.has_suffix_in_region("ões", Region::R2));
        assert!(!token.has_suffix_in_region("ões", Region::R3));
        assert!(token.has_suffix_in_region("s", Region::R4));
        assert!(!token.has_suffix_in_region("s", Region::R5));
    }

    #[test]
    fn test_region_uses_current_string() {
        let mut token = StemToken::with_default_regions("gatos");
        token.replace_suffix_in_region("os", "", Region::R0);

        assert_eq!(token.as_str(), "gat");
        assert_eq!(token.original_len(), 5);
        assert!(!token.has_suffix_in_region("t", Region::R3));
        assert!(token.has_suffix_in_region("t", Region::R2));
    }

    #[test]
    fn test_replace_suffix() {
        let mut token = StemToken::with_default_regions("pães");
        token.replace_suffix_in_region("ães", "ão", Region::R0);

        assert_eq!(token.as_str(), "pão");
        assert_eq!(token.original(), "pães");
        assert_eq!(token.to_string(), "pão");
    }

    #[test]
    fn test_replace_missing_suffix_is_noop() {
        let mut token = StemToken::with_default_regions("mesa");
        token.replace_suffix_in_region("ão", "", Region::R0);

        assert_eq!(token.as_str(), "mesa");
    }

    #[test]
    fn test_empty_token_matches_nothing() {
        let token = StemToken::with_default_regions("");

        assert!(!token.has_suffix_in_region("s", Region::R0));
        assert!(token.has_suffix(""));
        assert_eq!(token.into_string(), "");
    }

    #[test]
    fn test_region_labels() {
        assert_eq!(Region::R0.label(), "r0");
        assert_eq!(Region::R4.to_string(), "r4");
    }
}
