//! Tagging from previously recorded `DetectSyntax` responses.
//!
//! The recordings file is a JSON object mapping sentence text to the
//! response the service returned for it. Lookups ignore case and
//! surrounding whitespace.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use inversion::{InversionError, InversionResult, TokenSequence};

use crate::syntax::DetectSyntaxResponse;
use crate::Tagger;

fn lookup_key(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

#[derive(Debug, Clone, Default)]
pub struct RecordedTagger {
    recordings: HashMap<String, DetectSyntaxResponse>,
}

impl RecordedTagger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json_str(content: &str) -> InversionResult<Self> {
        let raw: HashMap<String, DetectSyntaxResponse> =
            serde_json::from_str(content).map_err(|e| InversionError::Config {
                message: format!("invalid recordings: {}", e),
            })?;

        let mut tagger = Self::new();
        for (text, response) in raw {
            tagger.insert(&text, response);
        }
        Ok(tagger)
    }

    pub fn load(path: &Path) -> InversionResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| InversionError::Config {
            message: format!("failed to read {}: {}", path.display(), e),
        })?;
        Self::from_json_str(&content)
    }

    pub fn insert(&mut self, text: &str, response: DetectSyntaxResponse) {
        self.recordings.insert(lookup_key(text), response);
    }

    pub fn len(&self) -> usize {
        self.recordings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recordings.is_empty()
    }
}

impl Tagger for RecordedTagger {
    fn detect_syntax(&self, text: &str, _language_code: &str) -> InversionResult<TokenSequence> {
        let response = self.recordings.get(&lookup_key(text)).ok_or_else(|| {
            InversionError::tagging_unavailable(format!("no recorded response for {:?}", text))
        })?;
        tracing::info!(
            "detected {} syntax tokens (recorded)",
            response.syntax_tokens.len()
        );
        response.to_sequence(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use inversion::Tag;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const RECORDINGS: &str = r#"{
        "Tu viens ?": {"SyntaxTokens": [
            {"TokenId": 1, "Text": "Tu", "BeginOffset": 0, "EndOffset": 2,
             "PartOfSpeech": {"Tag": "PRON", "Score": 0.99}},
            {"TokenId": 2, "Text": "viens", "BeginOffset": 3, "EndOffset": 8,
             "PartOfSpeech": {"Tag": "VERB", "Score": 0.97}},
            {"TokenId": 3, "Text": "?", "BeginOffset": 9, "EndOffset": 10,
             "PartOfSpeech": {"Tag": "PUNCT", "Score": 1.0}}
        ]}
    }"#;

    #[test]
    fn looks_up_ignoring_case_and_spacing() {
        let tagger = RecordedTagger::from_json_str(RECORDINGS).unwrap();
        assert_eq!(tagger.len(), 1);

        let seq = tagger.detect_syntax("  tu   viens ? ", "fr").unwrap();
        assert_eq!(seq.len(), 3);
        assert_eq!(seq.tokens()[1].tag(), Tag::Verb);
    }

    #[test]
    fn unknown_sentence_is_tagging_unavailable() {
        let tagger = RecordedTagger::from_json_str(RECORDINGS).unwrap();
        assert!(matches!(
            tagger.detect_syntax("Il pleut", "fr"),
            Err(InversionError::TaggingUnavailable { .. })
        ));
    }

    #[test]
    fn loads_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(RECORDINGS.as_bytes()).unwrap();
        let tagger = RecordedTagger::load(file.path()).unwrap();
        assert!(!tagger.is_empty());
    }

    #[test]
    fn invalid_json_is_config_error() {
        assert!(matches!(
            RecordedTagger::from_json_str("[1, 2]"),
            Err(InversionError::Config { .. })
        ));
    }
}
