//! Core types for parsed fixture files.
//!
//! A fixture is one tagged sentence and what rewriting it should produce:
//!
//! ```toml
//! title = "Euphonic t before a synthesized pronoun"
//! text = "Marie chante bien"
//! gender = "fem"
//! tokens = [
//!     { text = "Marie", tag = "PROPN", score = 0.99 },
//!     { text = "chante", tag = "VERB", score = 0.97 },
//!     { text = "bien", tag = "ADV" },
//! ]
//!
//! [expect]
//! question = "Marie chante-t-elle bien ?"
//! prompts = 1
//! ```

use std::fmt;

use inversion::{Gender, InversionError, Token, TokenSequence};
use serde::{Deserialize, Deserializer};

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InversionFixture {
    #[serde(default)]
    pub title: Option<String>,
    /// The sentence the tokens were tagged from. Defaults to the tokens
    /// joined with spaces.
    #[serde(default)]
    pub text: Option<String>,
    /// Answer given when a subject pronoun must be synthesized. Without one
    /// the prompt is closed.
    #[serde(default, deserialize_with = "deserialize_gender")]
    pub gender: Option<Gender>,
    #[serde(default)]
    pub tokens: Vec<Token>,
    pub expect: Expectation,
}

/// What the rewrite should produce. Unset fields are not checked.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Expectation {
    #[serde(default)]
    pub question: Option<String>,
    /// Number of low-confidence disclaimers.
    #[serde(default)]
    pub disclaimers: Option<usize>,
    /// Number of times the gender prompt is asked.
    #[serde(default)]
    pub prompts: Option<usize>,
    #[serde(default)]
    pub error: Option<ExpectedError>,
}

/// Rewrite failures a fixture can expect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExpectedError {
    UnrecognizableSentence,
    GenderPromptClosed,
}

impl ExpectedError {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExpectedError::UnrecognizableSentence => "unrecognizable-sentence",
            ExpectedError::GenderPromptClosed => "gender-prompt-closed",
        }
    }

    pub fn matches(&self, err: &InversionError) -> bool {
        matches!(
            (self, err),
            (
                ExpectedError::UnrecognizableSentence,
                InversionError::UnrecognizableSentence { .. }
            ) | (
                ExpectedError::GenderPromptClosed,
                InversionError::GenderPromptClosed
            )
        )
    }
}

impl fmt::Display for ExpectedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl InversionFixture {
    /// The tokens as the rewriter receives them.
    pub fn sequence(&self) -> TokenSequence {
        match &self.text {
            Some(text) => TokenSequence::new(text.as_str(), self.tokens.clone()),
            None => TokenSequence::from_tokens(self.tokens.clone()),
        }
    }

    /// Title if present, otherwise the sentence.
    pub fn label(&self) -> String {
        self.title
            .clone()
            .unwrap_or_else(|| self.sequence().text().to_string())
    }
}

fn deserialize_gender<'de, D>(deserializer: D) -> Result<Option<Gender>, D::Error>
where
    D: Deserializer<'de>,
{
    let answer: Option<String> = Option::deserialize(deserializer)?;
    answer
        .map(|answer| answer.parse().map_err(serde::de::Error::custom))
        .transpose()
}
