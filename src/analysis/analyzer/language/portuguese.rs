//! Portuguese analyzer.
//!
//! # Pipeline
//!
//! 1. RegexTokenizer (Unicode word characters)
//! 2. LowercaseFilter
//! 3. StopFilter (Portuguese stop words)
//! 4. StemFilter (RSLP)
//!
//! # Examples
//!
//! ```
//! use rslp::analysis::analyzer::{Analyzer, PortugueseAnalyzer};
//!
//! let analyzer = PortugueseAnalyzer::new().unwrap();
//! let tokens: Vec<_> = analyzer
//!     .analyze("Os jornalistas brasileiros")
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(tokens.len(), 2);
//! assert_eq!(tokens[0].text, "jornal");
//! assert_eq!(tokens[1].text, "brasil");
//! ```

use std::fmt::{Debug, Formatter};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::analyzer::Analyzer;
use crate::analysis::analyzer::pipeline::PipelineAnalyzer;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::lowercase::LowercaseFilter;
use crate::analysis::token_filter::stem::StemFilter;
use crate::analysis::token_filter::stop::StopFilter;
use crate::analysis::tokenizer::regex::{DEFAULT_TOKEN_PATTERN, RegexTokenizer};
use crate::error::Result;

/// Configuration for [`PortugueseAnalyzer`].
///
/// Every field has a default, so a partial JSON document is enough:
///
/// ```
/// use rslp::analysis::analyzer::PortugueseAnalyzerConfig;
///
/// let config: PortugueseAnalyzerConfig =
///     serde_json::from_str(r#"{ "stem": false }"#).unwrap();
///
/// assert!(!config.stem);
/// assert_eq!(config.token_pattern, r"\w+");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortugueseAnalyzerConfig {
    /// Regex matching one token.
    pub token_pattern: String,

    /// Stop words; `None` uses the built-in Portuguese list and an empty
    /// list disables stop word filtering.
    pub stop_words: Option<Vec<String>>,

    /// Keep stop words in the stream, marked as stopped, instead of
    /// dropping them.
    pub keep_stopped: bool,

    /// Reduce words with the RSLP stemmer.
    pub stem: bool,
}

impl Default for PortugueseAnalyzerConfig {
    fn default() -> Self {
        PortugueseAnalyzerConfig {
            token_pattern: DEFAULT_TOKEN_PATTERN.to_string(),
            stop_words: None,
            keep_stopped: false,
            stem: true,
        }
    }
}

/// Analyzer for Portuguese text.
pub struct PortugueseAnalyzer {
    inner: PipelineAnalyzer,
    config: PortugueseAnalyzerConfig,
}

impl PortugueseAnalyzer {
    /// Create a Portuguese analyzer with the default configuration.
    pub fn new() -> Result<Self> {
        Self::with_config(PortugueseAnalyzerConfig::default())
    }

    /// Create a Portuguese analyzer from a configuration.
    ///
    /// Fails if `token_pattern` is not a valid regex.
    pub fn with_config(config: PortugueseAnalyzerConfig) -> Result<Self> {
        let tokenizer = Arc::new(RegexTokenizer::with_pattern(&config.token_pattern)?);
        let mut analyzer = PipelineAnalyzer::new(tokenizer)
            .add_filter(Arc::new(LowercaseFilter::new()))
            .with_name("portuguese");

        let stop_filter = match &config.stop_words {
            None => Some(StopFilter::new()),
            Some(words) if words.is_empty() => None,
            Some(words) => Some(StopFilter::from_words(words.iter().cloned())),
        };
        if let Some(filter) = stop_filter {
            analyzer = analyzer.add_filter(Arc::new(filter.remove_stopped(!config.keep_stopped)));
        }

        if config.stem {
            analyzer = analyzer.add_filter(Arc::new(StemFilter::new()));
        }

        Ok(PortugueseAnalyzer {
            inner: analyzer,
            config,
        })
    }

    /// The configuration this analyzer was built from.
    pub fn config(&self) -> &PortugueseAnalyzerConfig {
        &self.config
    }

    /// Get the inner pipeline analyzer.
    pub fn inner(&self) -> &PipelineAnalyzer {
        &self.inner
    }
}

impl Default for PortugueseAnalyzer {
    fn default() -> Self {
        Self::new().expect("Portuguese analyzer should be creatable with default settings")
    }
}

impl Analyzer for PortugueseAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        self.inner.analyze(text)
    }

    fn name(&self) -> &'static str {
        "portuguese"
    }
}

impl Debug for PortugueseAnalyzer {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PortugueseAnalyzer")
            .field("inner", &self.inner)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;
    use crate::error::RslpError;

    fn texts(analyzer: &PortugueseAnalyzer, text: &str) -> Vec<String> {
        analyzer.analyze(text).unwrap().map(|t| t.text).collect()
    }

    #[test]
    fn test_portuguese_analyzer() {
        let analyzer = PortugueseAnalyzer::new().unwrap();

        let tokens: Vec<Token> = analyzer
            .analyze("As meninas e os meninos cantando")
            .unwrap()
            .collect();

        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].text, "menin");
        assert_eq!(tokens[0].original_text.as_deref(), Some("meninas"));
        assert_eq!(tokens[0].start_offset, 3);
        assert_eq!(tokens[1].text, "menin");
        assert_eq!(tokens[2].text, "cant");
    }

    #[test]
    fn test_capitalised_word_keeps_surface_form() {
        let analyzer = PortugueseAnalyzer::new().unwrap();
        let tokens: Vec<Token> = analyzer.analyze("Ações").unwrap().collect();

        assert_eq!(tokens[0].text, "açõ");
        assert_eq!(tokens[0].original_text.as_deref(), Some("Ações"));
    }

    #[test]
    fn test_without_stemming() {
        let config = PortugueseAnalyzerConfig {
            stem: false,
            ..Default::default()
        };
        let analyzer = PortugueseAnalyzer::with_config(config).unwrap();

        assert_eq!(texts(&analyzer, "Os Gatos"), vec!["gatos"]);
    }

    #[test]
    fn test_custom_and_disabled_stop_words() {
        let config = PortugueseAnalyzerConfig {
            stop_words: Some(vec!["gatos".to_string()]),
            ..Default::default()
        };
        let analyzer = PortugueseAnalyzer::with_config(config).unwrap();
        assert_eq!(texts(&analyzer, "os gatos"), vec!["os"]);

        let config = PortugueseAnalyzerConfig {
            stop_words: Some(Vec::new()),
            ..Default::default()
        };
        let analyzer = PortugueseAnalyzer::with_config(config).unwrap();
        assert_eq!(texts(&analyzer, "os gatos"), vec!["os", "gat"]);
    }

    #[test]
    fn test_keep_stopped() {
        let config = PortugueseAnalyzerConfig {
            keep_stopped: true,
            ..Default::default()
        };
        let analyzer = PortugueseAnalyzer::with_config(config).unwrap();
        let tokens: Vec<Token> = analyzer.analyze("os gatos").unwrap().collect();

        assert_eq!(tokens.len(), 2);
        assert!(tokens[0].is_stopped());
        assert_eq!(tokens[0].text, "os");
        assert_eq!(tokens[1].text, "gat");
    }

    #[test]
    fn test_invalid_token_pattern() {
        let config = PortugueseAnalyzerConfig {
            token_pattern: "[".to_string(),
            ..Default::default()
        };

        assert!(matches!(
            PortugueseAnalyzer::with_config(config),
            Err(RslpError::Analysis(_))
        ));
    }

    #[test]
    fn test_config_from_json() {
        let config: PortugueseAnalyzerConfig = serde_json::from_str(
            r#"{ "stop_words": ["de"], "keep_stopped": true }"#,
        )
        .unwrap();

        assert_eq!(config.stop_words, Some(vec!["de".to_string()]));
        assert!(config.keep_stopped);
        assert!(config.stem);

        let analyzer = PortugueseAnalyzer::with_config(config.clone()).unwrap();
        assert_eq!(analyzer.config(), &config);
    }

    #[test]
    fn test_portuguese_analyzer_name() {
        let analyzer = PortugueseAnalyzer::new().unwrap();

        assert_eq!(analyzer.name(), "portuguese");
        assert_eq!(analyzer.inner().pipeline_name(), "portuguese");
    }
}
