//! Analyzer implementations that combine tokenizers and filters.

mod analyzer;
pub mod language;
mod pipeline;

pub use analyzer::Analyzer;
pub use language::portuguese::{PortugueseAnalyzer, PortugueseAnalyzerConfig};
pub use pipeline::PipelineAnalyzer;
