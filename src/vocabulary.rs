//! Fixed French word lists the rewriter consults.
//!
//! The lists are plain data: [`Vocabulary::french`] builds them from the
//! constants below and a TOML file can replace any of them.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{InversionError, InversionResult};

/// Question words that front an inverted question.
const INTERROGATIVES: &[&str] = &[
    "comment", "quand", "qui", "où", "d'où", "combien", "quel", "quelle", "quels", "quelles",
    "pourquoi",
];

/// Object pronouns, which sit before the verb.
const OBJECT_PRONOUNS: &[&str] = &[
    "me", "m'", "t'", "se", "s'", "te", "nous", "vous", "le", "la", "l'", "les", "lui", "leur",
    "y", "en",
];

/// First person singular subject forms; no euphonic "t" before these.
const FIRST_PERSON: &[&str] = &["je", "j'"];

/// Second person singular subject forms; the inverted verb takes an "s".
const SECOND_PERSON: &[&str] = &["tu"];

/// Rewrites applied to the raw sentence before tagging, in order.
const CONTRACTIONS: &[(&str, &str)] = &[
    ("qu'est-ce que", "que"),
    ("qu'est-ce qu'", "que "),
    ("est-ce que", ""),
    ("est-ce qu'", ""),
    ("je peux", "je puis"),
];

/// A literal, case-insensitive text substitution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContractionRule {
    pub pattern: String,
    #[serde(default)]
    pub replacement: String,
}

impl ContractionRule {
    pub fn new(pattern: impl Into<String>, replacement: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            replacement: replacement.into(),
        }
    }
}

/// Word lists used by the rewrite stages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Vocabulary {
    pub interrogatives: Vec<String>,
    pub object_pronouns: Vec<String>,
    pub first_person: Vec<String>,
    pub second_person: Vec<String>,
    pub contractions: Vec<ContractionRule>,
}

fn owned(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

/// Case-insensitive on both sides, so overrides may be written capitalized.
fn contains_word(words: &[String], word: &str) -> bool {
    let lower = word.to_lowercase();
    words.iter().any(|w| w.to_lowercase() == lower)
}

impl Vocabulary {
    pub fn french() -> Self {
        Self {
            interrogatives: owned(INTERROGATIVES),
            object_pronouns: owned(OBJECT_PRONOUNS),
            first_person: owned(FIRST_PERSON),
            second_person: owned(SECOND_PERSON),
            contractions: CONTRACTIONS
                .iter()
                .map(|(pattern, replacement)| ContractionRule::new(*pattern, *replacement))
                .collect(),
        }
    }

    /// Parse a vocabulary from TOML; omitted lists keep their French defaults.
    pub fn from_toml_str(content: &str) -> InversionResult<Self> {
        toml::from_str(content).map_err(|e| InversionError::Config {
            message: e.to_string(),
        })
    }

    /// Load from a TOML file. A missing file yields the defaults.
    pub fn load(path: &Path) -> InversionResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| InversionError::Config {
            message: format!("failed to read {}: {}", path.display(), e),
        })?;

        Self::from_toml_str(&content)
    }

    pub fn is_interrogative(&self, word: &str) -> bool {
        contains_word(&self.interrogatives, word)
    }

    pub fn is_object_pronoun(&self, word: &str) -> bool {
        contains_word(&self.object_pronouns, word)
    }

    pub fn is_first_person(&self, word: &str) -> bool {
        contains_word(&self.first_person, word)
    }

    pub fn is_second_person(&self, word: &str) -> bool {
        contains_word(&self.second_person, word)
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::french()
    }
}
