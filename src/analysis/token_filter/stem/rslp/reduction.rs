//! Reduction rules, reduction groups and group application.

use log::trace;

use super::token::{Region, StemToken};

/// How a group compares a rule's exceptions against the token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExceptionMode {
    /// An exception blocks a rule when the current form ends with it.
    Suffix,
    /// An exception blocks a rule when it equals the whole current form.
    Exact,
}

/// Gate that must hold before any rule of a group is considered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Condition {
    /// Alternative suffixes; the current form must end with at least one.
    pub suffixes: &'static [&'static str],
    /// Minimum length of the original word, in characters.
    pub min_length: usize,
}

/// A single suffix rewrite.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReductionRule {
    pub suffix: &'static str,
    pub replacement: &'static str,
    /// Minimum stem length required in front of `suffix`.
    pub region: Region,
    pub exceptions: Option<&'static [&'static str]>,
}

impl ReductionRule {
    /// Create a rule without exceptions.
    pub const fn new(suffix: &'static str, replacement: &'static str, region: Region) -> Self {
        ReductionRule {
            suffix,
            replacement,
            region,
            exceptions: None,
        }
    }

    /// Attach an exception list to this rule.
    pub const fn except(mut self, exceptions: &'static [&'static str]) -> Self {
        self.exceptions = Some(exceptions);
        self
    }
}

/// A named, ordered set of rules applied together.
///
/// Rules are scanned in order and at most one of them fires, so longer
/// suffixes are listed before the shorter ones they end with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReductionGroup {
    pub name: &'static str,
    pub condition: Option<Condition>,
    pub exception_mode: ExceptionMode,
    pub rules: &'static [ReductionRule],
}

impl ReductionGroup {
    /// Apply the first matching, non-excepted rule of this group.
    ///
    /// Returns `true` if the token was rewritten.
    pub fn apply(&self, token: &mut StemToken) -> bool {
        if !self.condition_holds(token) {
            return false;
        }

        for rule in self.rules {
            if !token.has_suffix_in_region(rule.suffix, rule.region) {
                continue;
            }
            if self.is_excepted(rule, token) {
                continue;
            }

            trace!(
                "{}: '{}' -> '{}' ({}) on '{}'",
                self.name,
                rule.suffix,
                rule.replacement,
                rule.region,
                token.as_str()
            );
            token.replace_suffix_in_region(rule.suffix, rule.replacement, Region::R0);
            return true;
        }

        false
    }

    fn condition_holds(&self, token: &StemToken) -> bool {
        match &self.condition {
            None => true,
            Some(condition) => {
                token.original_len() >= condition.min_length
                    && condition.suffixes.iter().any(|s| token.has_suffix(s))
            }
        }
    }

    fn is_excepted(&self, rule: &ReductionRule, token: &StemToken) -> bool {
        let Some(exceptions) = rule.exceptions else {
            return false;
        };

        match self.exception_mode {
            ExceptionMode::Suffix => exceptions.iter().any(|e| token.has_suffix(e)),
            ExceptionMode::Exact => exceptions.iter().any(|e| *e == token.as_str()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOY_RULES: &[ReductionRule] = &[
        ReductionRule::new("inhos", "", Region::R3),
        ReductionRule::new("os", "", Region::R2).except(&["ossos", "patos"]),
        ReductionRule::new("s", "", Region::R1),
    ];

    const SUFFIX_GROUP: ReductionGroup = ReductionGroup {
        name: "toy_suffix",
        condition: None,
        exception_mode: ExceptionMode::Suffix,
        rules: TOY_RULES,
    };

    const EXACT_GROUP: ReductionGroup = ReductionGroup {
        name: "toy_exact",
        condition: None,
        exception_mode: ExceptionMode::Exact,
        rules: TOY_RULES,
    };

    const GATED_GROUP: ReductionGroup = ReductionGroup {
        name: "toy_gated",
        condition: Some(Condition {
            suffixes: &["a", "ã"],
            min_length: 4,
        }),
        exception_mode: ExceptionMode::Suffix,
        rules: &[
            ReductionRule::new("a", "o", Region::R2),
            ReductionRule::new("ã", "ão", Region::R2),
        ],
    };

    fn apply(group: &ReductionGroup, word: &str) -> (bool, String) {
        let mut token = StemToken::with_default_regions(word);
        let changed = group.apply(&mut token);
        (changed, token.into_string())
    }

    #[test]
    fn test_first_matching_rule_wins() {
        assert_eq!(apply(&SUFFIX_GROUP, "gatinhos"), (true, "gat".to_string()));
        assert_eq!(apply(&SUFFIX_GROUP, "gatos"), (true, "gat".to_string()));
    }

    #[test]
    fn test_only_one_rule_fires() {
        // "os" fires and the shorter "s" rule is not applied on top of it.
        assert_eq!(apply(&SUFFIX_GROUP, "ratos"), (true, "rat".to_string()));
    }

    #[test]
    fn test_region_rejects_short_stem() {
        // "inhos" needs 3 characters in front; "os" then matches instead.
        assert_eq!(apply(&SUFFIX_GROUP, "vinhos"), (true, "vinh".to_string()));
        // "s" alone would leave an empty stem, below R1.
        assert_eq!(apply(&SUFFIX_GROUP, "s"), (false, "s".to_string()));
    }

    #[test]
    fn test_suffix_exception_skips_to_next_rule() {
        // Blocked on "os", then the general "s" rule still applies.
        assert_eq!(apply(&SUFFIX_GROUP, "patos"), (true, "pato".to_string()));
        assert_eq!(apply(&SUFFIX_GROUP, "carrapatos"), (true, "carrapato".to_string()));
    }

    #[test]
    fn test_exact_exception_needs_whole_word() {
        assert_eq!(apply(&EXACT_GROUP, "patos"), (true, "pato".to_string()));
        // A longer word ending in an exception is not blocked in exact mode.
        assert_eq!(apply(&EXACT_GROUP, "carrapatos"), (true, "carrapat".to_string()));
    }

    #[test]
    fn test_exact_exception_compares_current_form() {
        let mut token = StemToken::with_default_regions("gatos");
        token.replace_suffix_in_region("gatos", "patos", Region::R0);

        // An earlier group turned "gatos" into the protected "patos".
        assert!(EXACT_GROUP.apply(&mut token));
        assert_eq!(token.as_str(), "pato");
        assert_eq!(token.original(), "gatos");
    }

    #[test]
    fn test_condition_requires_suffix() {
        assert_eq!(apply(&GATED_GROUP, "menina"), (true, "menino".to_string()));
        assert_eq!(apply(&GATED_GROUP, "irmã"), (true, "irmão".to_string()));
        assert_eq!(apply(&GATED_GROUP, "menino"), (false, "menino".to_string()));
    }

    #[test]
    fn test_condition_requires_original_length() {
        assert_eq!(apply(&GATED_GROUP, "asa"), (false, "asa".to_string()));
    }

    #[test]
    fn test_empty_word_matches_nothing() {
        assert_eq!(apply(&SUFFIX_GROUP, ""), (false, String::new()));
        assert_eq!(apply(&GATED_GROUP, ""), (false, String::new()));
    }
}
