//! Normalization of the raw sentence before it is tagged.
//!
//! Question scaffolding ("est-ce que", "qu'est-ce que") is dropped or reduced
//! so the tagger sees a declarative sentence, and "je peux" becomes the
//! invertible "je puis".

use regex::{NoExpand, Regex, RegexBuilder};

use crate::vocabulary::{ContractionRule, Vocabulary};
use crate::{InversionError, InversionResult};

/// Upper bound on rewrite passes; every built-in rule shortens or settles the text well before this.
const MAX_PASSES: usize = 16;

#[derive(Debug, Clone)]
struct CompiledRule {
    regex: Regex,
    replacement: String,
}

/// Applies the vocabulary's contraction rules until the text stops changing.
#[derive(Debug, Clone)]
pub struct ContractionNormalizer {
    rules: Vec<CompiledRule>,
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn compile(rule: &ContractionRule) -> InversionResult<CompiledRule> {
    let pattern = rule.pattern.trim();
    if pattern.is_empty() {
        return Err(InversionError::Config {
            message: "contraction rule with an empty pattern".to_string(),
        });
    }

    let mut source = regex::escape(pattern);
    // Anchor on word boundaries only where the pattern itself starts/ends with a letter.
    if pattern.chars().next().map_or(false, is_word_char) {
        source.insert_str(0, r"\b");
    }
    if pattern.chars().last().map_or(false, is_word_char) {
        source.push_str(r"\b");
    }

    let regex = RegexBuilder::new(&source)
        .case_insensitive(true)
        .build()
        .map_err(|e| InversionError::Config {
            message: format!("contraction rule {:?}: {}", rule.pattern, e),
        })?;

    Ok(CompiledRule {
        regex,
        replacement: rule.replacement.clone(),
    })
}

/// Fold typographic apostrophes and collapse runs of whitespace.
fn tidy(text: &str) -> String {
    text.replace(['\u{2019}', '\u{02BC}'], "'")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

impl ContractionNormalizer {
    pub fn new(vocabulary: &Vocabulary) -> InversionResult<Self> {
        let rules = vocabulary
            .contractions
            .iter()
            .map(compile)
            .collect::<InversionResult<Vec<_>>>()?;
        Ok(Self { rules })
    }

    /// Rewrite `text`; applying this to its own output changes nothing.
    pub fn normalize(&self, text: &str) -> String {
        let mut current = tidy(text);
        for _ in 0..MAX_PASSES {
            let next = self.apply_once(&current);
            if next == current {
                break;
            }
            current = next;
        }
        current
    }

    fn apply_once(&self, text: &str) -> String {
        let mut out = text.to_string();
        for rule in &self.rules {
            out = rule
                .regex
                .replace_all(&out, NoExpand(&rule.replacement))
                .into_owned();
        }
        tidy(&out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalizer() -> ContractionNormalizer {
        ContractionNormalizer::new(&Vocabulary::french()).unwrap()
    }

    #[test]
    fn drops_est_ce_que() {
        let n = normalizer();
        assert_eq!(n.normalize("Est-ce que tu viens ?"), "tu viens ?");
        assert_eq!(n.normalize("Quand est-ce que tu pars ?"), "Quand tu pars ?");
        assert_eq!(n.normalize("Est-ce qu'il mange ?"), "il mange ?");
    }

    #[test]
    fn reduces_qu_est_ce_que() {
        let n = normalizer();
        assert_eq!(n.normalize("Qu'est-ce que tu fais ?"), "que tu fais ?");
        assert_eq!(n.normalize("Qu'est-ce qu'elle mange ?"), "que elle mange ?");
    }

    #[test]
    fn je_peux_becomes_je_puis() {
        let n = normalizer();
        assert_eq!(
            n.normalize("Je peux aller au magasin"),
            "je puis aller au magasin"
        );
        // Only the first-person form is touched.
        assert_eq!(n.normalize("Il peux venir"), "Il peux venir");
    }

    #[test]
    fn folds_typographic_apostrophes() {
        let n = normalizer();
        assert_eq!(n.normalize("Est-ce qu\u{2019}il  dort"), "il dort");
    }

    #[test]
    fn leaves_plain_sentences_alone() {
        let n = normalizer();
        assert_eq!(n.normalize("Bonjour je suis content"), "Bonjour je suis content");
    }

    #[test]
    fn normalization_is_idempotent() {
        let n = normalizer();
        for text in [
            "Est-ce que tu viens ?",
            "Qu'est-ce que tu fais ? Est-ce que je peux venir ?",
            "Qu'est-ce qu'il a dit, est-ce qu'elle sait ?",
            "Je peux, je peux, je peux",
            "  Bonjour   tout le monde  ",
            "",
        ] {
            let once = n.normalize(text);
            assert_eq!(n.normalize(&once), once, "not idempotent for {:?}", text);
        }
    }

    #[test]
    fn empty_pattern_is_rejected() {
        let mut vocab = Vocabulary::french();
        vocab.contractions.push(ContractionRule::new("  ", "x"));
        assert!(matches!(
            ContractionNormalizer::new(&vocab),
            Err(InversionError::Config { .. })
        ));
    }
}
