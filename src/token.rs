//! Tagged tokens as reported by a part-of-speech tagger.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::InversionError;

/// Universal part-of-speech tags.
///
/// The tagger spells "other" as `O`; `OTHER` is accepted as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Tag {
    Adj,
    Adp,
    Adv,
    Aux,
    Cconj,
    Det,
    Intj,
    Noun,
    Num,
    #[serde(rename = "O", alias = "OTHER")]
    Other,
    Part,
    Pron,
    Propn,
    Punct,
    Sconj,
    Sym,
    Verb,
}

impl Tag {
    pub const ALL: [Tag; 17] = [
        Tag::Adj,
        Tag::Adp,
        Tag::Adv,
        Tag::Aux,
        Tag::Cconj,
        Tag::Det,
        Tag::Intj,
        Tag::Noun,
        Tag::Num,
        Tag::Other,
        Tag::Part,
        Tag::Pron,
        Tag::Propn,
        Tag::Punct,
        Tag::Sconj,
        Tag::Sym,
        Tag::Verb,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tag::Adj => "ADJ",
            Tag::Adp => "ADP",
            Tag::Adv => "ADV",
            Tag::Aux => "AUX",
            Tag::Cconj => "CCONJ",
            Tag::Det => "DET",
            Tag::Intj => "INTJ",
            Tag::Noun => "NOUN",
            Tag::Num => "NUM",
            Tag::Other => "O",
            Tag::Part => "PART",
            Tag::Pron => "PRON",
            Tag::Propn => "PROPN",
            Tag::Punct => "PUNCT",
            Tag::Sconj => "SCONJ",
            Tag::Sym => "SYM",
            Tag::Verb => "VERB",
        }
    }

    /// VERB and AUX both carry the clause's conjugated verb.
    pub fn is_verb(&self) -> bool {
        matches!(self, Tag::Verb | Tag::Aux)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tag {
    type Err = InversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_uppercase();
        if upper == "OTHER" {
            return Ok(Tag::Other);
        }
        Tag::ALL
            .iter()
            .copied()
            .find(|tag| tag.as_str() == upper)
            .ok_or_else(|| InversionError::UnknownTag { tag: s.to_string() })
    }
}

fn full_confidence() -> f64 {
    1.0
}

/// A word or punctuation unit with its tag and tagging confidence.
///
/// Deserialized through [`Token::new`], so scores read from a file are
/// clamped like any other.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawToken")]
pub struct Token {
    text: String,
    tag: Tag,
    score: f64,
}

#[derive(Deserialize)]
struct RawToken {
    text: String,
    tag: Tag,
    #[serde(default = "full_confidence")]
    score: f64,
}

impl From<RawToken> for Token {
    fn from(raw: RawToken) -> Self {
        Token::new(raw.text, raw.tag, raw.score)
    }
}

impl Token {
    pub fn new(text: impl Into<String>, tag: Tag, score: f64) -> Self {
        Self {
            text: text.into(),
            tag,
            score: score.clamp(0.0, 1.0),
        }
    }

    /// A token we produced ourselves rather than the tagger (score 1.0).
    pub fn certain(text: impl Into<String>, tag: Tag) -> Self {
        Self::new(text, tag, 1.0)
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn tag(&self) -> Tag {
        self.tag
    }

    pub fn score(&self) -> f64 {
        self.score
    }

    pub fn is_verb(&self) -> bool {
        self.tag.is_verb()
    }

    /// Elided forms such as `j'`, `l'`, `m'`.
    pub fn ends_with_apostrophe(&self) -> bool {
        self.text.ends_with('\'')
    }

    /// Non-comma punctuation closes a clause.
    pub fn is_clause_boundary(&self) -> bool {
        self.tag == Tag::Punct && self.text != ","
    }
}

/// The tokens of one sentence, in order, with the text they were tagged from.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TokenSequence {
    text: String,
    tokens: Vec<Token>,
}

impl TokenSequence {
    pub fn new(text: impl Into<String>, tokens: Vec<Token>) -> Self {
        Self {
            text: text.into(),
            tokens,
        }
    }

    /// Rebuild the sentence text by joining token texts with spaces.
    pub fn from_tokens(tokens: Vec<Token>) -> Self {
        let text = tokens
            .iter()
            .map(Token::text)
            .collect::<Vec<_>>()
            .join(" ");
        Self { text, tokens }
    }

    /// Fully confident tokens from `(text, tag)` pairs.
    pub fn from_pairs(pairs: &[(&str, Tag)]) -> Self {
        Self::from_tokens(
            pairs
                .iter()
                .map(|(text, tag)| Token::certain(*text, *tag))
                .collect(),
        )
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }
}

impl<'a> IntoIterator for &'a TokenSequence {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
