//! Integration tests for the Portuguese analysis pipeline.

use std::sync::Arc;

use rslp::analysis::analyzer::PipelineAnalyzer;
use rslp::analysis::token::Token;
use rslp::analysis::token_filter::{IdentityStemmer, LowercaseFilter, StemFilter};
use rslp::analysis::tokenizer::WhitespaceTokenizer;
use rslp::prelude::*;

#[test]
fn test_sentence_is_reduced_to_stems() {
    let analyzer = PortugueseAnalyzer::new().unwrap();

    let tokens: Vec<Token> = analyzer
        .analyze("Os jornalistas brasileiros falaram com as professoras.")
        .unwrap()
        .collect();
    let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();

    assert_eq!(texts, vec!["jornal", "brasil", "fal", "profes"]);
    assert_eq!(tokens[0].original_text.as_deref(), Some("jornalistas"));
    assert_eq!(tokens[0].start_offset, 3);
    assert_eq!(tokens[0].end_offset, 14);
}

#[test]
fn test_analyzer_agrees_with_stemmer() {
    let analyzer = PortugueseAnalyzer::new().unwrap();
    let stemmer = RslpStemmer::new();

    for word in ["casas", "felizmente", "nacionalidade", "cantaremos", "papéis"] {
        let tokens: Vec<Token> = analyzer.analyze(word).unwrap().collect();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].text, stemmer.try_stem(word).unwrap());
    }
}

#[test]
fn test_custom_pipeline_with_identity_stemmer() {
    let analyzer = PipelineAnalyzer::new(Arc::new(WhitespaceTokenizer::new()))
        .add_filter(Arc::new(LowercaseFilter::new()))
        .add_filter(Arc::new(StemFilter::with_stemmer(Arc::new(IdentityStemmer::new()))));

    let texts: Vec<String> = analyzer
        .analyze("Meninas Cantando")
        .unwrap()
        .map(|t| t.text)
        .collect();

    assert_eq!(texts, vec!["meninas", "cantando"]);
}

#[test]
fn test_empty_text_yields_no_tokens() {
    let analyzer = PortugueseAnalyzer::new().unwrap();

    assert_eq!(analyzer.analyze("").unwrap().count(), 0);
    assert_eq!(analyzer.analyze("  \n\t").unwrap().count(), 0);
}
