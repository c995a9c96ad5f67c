//! `DetectSyntax` request and response bodies.
//!
//! ```json
//! {"SyntaxTokens": [
//!   {"TokenId": 1, "Text": "Bonjour", "BeginOffset": 0, "EndOffset": 7,
//!    "PartOfSpeech": {"Tag": "INTJ", "Score": 0.9786997437477112}}
//! ]}
//! ```

use inversion::{InversionResult, Tag, Token, TokenSequence};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DetectSyntaxRequest<'a> {
    pub text: &'a str,
    pub language_code: &'a str,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DetectSyntaxResponse {
    #[serde(default)]
    pub syntax_tokens: Vec<SyntaxToken>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SyntaxToken {
    #[serde(default)]
    pub token_id: Option<u32>,
    pub text: String,
    #[serde(default)]
    pub begin_offset: Option<usize>,
    #[serde(default)]
    pub end_offset: Option<usize>,
    pub part_of_speech: PartOfSpeech,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PartOfSpeech {
    pub tag: String,
    pub score: f64,
}

impl SyntaxToken {
    pub fn to_token(&self) -> InversionResult<Token> {
        let tag: Tag = self.part_of_speech.tag.parse()?;
        Ok(Token::new(
            self.text.as_str(),
            tag,
            self.part_of_speech.score,
        ))
    }
}

impl DetectSyntaxResponse {
    /// Convert to the rewriter's tokens, keeping `text` as the sentence.
    pub fn to_sequence(&self, text: &str) -> InversionResult<TokenSequence> {
        let tokens = self
            .syntax_tokens
            .iter()
            .map(SyntaxToken::to_token)
            .collect::<InversionResult<Vec<_>>>()?;
        Ok(TokenSequence::new(text, tokens))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use inversion::InversionError;

    const BONJOUR: &str = r#"{
        "SyntaxTokens": [
            {"TokenId": 1, "Text": "Bonjour", "BeginOffset": 0, "EndOffset": 7,
             "PartOfSpeech": {"Tag": "INTJ", "Score": 0.9786997437477112}},
            {"TokenId": 2, "Text": "je", "BeginOffset": 8, "EndOffset": 10,
             "PartOfSpeech": {"Tag": "PRON", "Score": 1.0}},
            {"TokenId": 3, "Text": "suis", "BeginOffset": 11, "EndOffset": 15,
             "PartOfSpeech": {"Tag": "AUX", "Score": 0.9963362216949463}},
            {"TokenId": 4, "Text": "content", "BeginOffset": 16, "EndOffset": 23,
             "PartOfSpeech": {"Tag": "ADJ", "Score": 0.9582428932189941}}
        ]
    }"#;

    #[test]
    fn decodes_response() {
        let response: DetectSyntaxResponse = serde_json::from_str(BONJOUR).unwrap();
        assert_eq!(response.syntax_tokens.len(), 4);
        assert_eq!(response.syntax_tokens[2].begin_offset, Some(11));

        let seq = response.to_sequence("Bonjour je suis content").unwrap();
        assert_eq!(seq.text(), "Bonjour je suis content");
        assert_eq!(seq.tokens()[2].tag(), Tag::Aux);
        assert!((seq.tokens()[0].score() - 0.9787).abs() < 1e-3);
    }

    #[test]
    fn other_tag_is_o() {
        let token: SyntaxToken = serde_json::from_str(
            r#"{"Text": "@", "PartOfSpeech": {"Tag": "O", "Score": 0.5}}"#,
        )
        .unwrap();
        assert_eq!(token.to_token().unwrap().tag(), Tag::Other);
    }

    #[test]
    fn unknown_tag_is_an_error() {
        let response = DetectSyntaxResponse {
            syntax_tokens: vec![SyntaxToken {
                token_id: None,
                text: "x".to_string(),
                begin_offset: None,
                end_offset: None,
                part_of_speech: PartOfSpeech {
                    tag: "GERUND".to_string(),
                    score: 1.0,
                },
            }],
        };
        assert!(matches!(
            response.to_sequence("x"),
            Err(InversionError::UnknownTag { .. })
        ));
    }

    #[test]
    fn request_uses_service_field_names() {
        let body = serde_json::to_string(&DetectSyntaxRequest {
            text: "Tu viens",
            language_code: "fr",
        })
        .unwrap();
        assert_eq!(body, r#"{"Text":"Tu viens","LanguageCode":"fr"}"#);
    }

    #[test]
    fn empty_response_has_no_tokens() {
        let response: DetectSyntaxResponse = serde_json::from_str("{}").unwrap();
        assert!(response.to_sequence("").unwrap().is_empty());
    }
}
