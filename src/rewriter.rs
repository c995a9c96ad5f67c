//! Declarative-to-interrogative rewriting over tagged tokens.
//!
//! The rewrite is a straight pipeline; each stage takes the token list the
//! previous one produced:
//!
//! ```text
//! Pourquoi  Marie  le  mange  .
//! ├ interrogative   "Pourquoi "      Marie le mange .
//! ├ object pronouns "le "            Marie mange .
//! ├ pairing         +il (gender)     Marie il mange .
//! ├ swap                             Marie mange il .
//! ├ lead-in         "Marie "         mange il .
//! └ render          "mange-t-il ?"
//! => "Pourquoi Marie le mange-t-il ?"
//! ```
//!
//! Contraction rules ("est-ce que", "je peux") apply to the raw text before
//! tagging, through [`InterrogativeRewriter::normalize`].

use serde::{Deserialize, Serialize};

use crate::contraction::ContractionNormalizer;
use crate::disclaimer::{low_confidence_disclaimers, DEFAULT_CONFIDENCE_THRESHOLD};
use crate::gender::{resolve_gender, GenderPrompt};
use crate::vocabulary::Vocabulary;
use crate::{InversionError, InversionResult, Tag, Token, TokenSequence};

/// Output of one rewrite.
#[derive(Debug, Clone, PartialEq)]
pub struct RewriteResult {
    /// The inverted question. Clauses after the first are on their own lines.
    pub rendered_question: String,
    /// Low-confidence warnings, in token order.
    pub disclaimers: Vec<String>,
    /// The sentence the tokens were tagged from.
    pub original_text: String,
}

/// Settings for [`InterrogativeRewriter`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RewriterConfig {
    pub vocabulary: Vocabulary,
    /// Tokens scored strictly below this get a disclaimer.
    pub confidence_threshold: f64,
}

impl Default for RewriterConfig {
    fn default() -> Self {
        Self {
            vocabulary: Vocabulary::french(),
            confidence_threshold: DEFAULT_CONFIDENCE_THRESHOLD,
        }
    }
}

/// Subject pronoun and verb of one clause, as indices into the token list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ClausePair {
    subject: usize,
    verb: usize,
}

/// Verb and subject found so far in the clause being scanned.
#[derive(Debug, Default)]
struct ClauseScan {
    subject: Option<usize>,
    verb: Option<usize>,
}

pub struct InterrogativeRewriter {
    config: RewriterConfig,
    normalizer: ContractionNormalizer,
}

impl InterrogativeRewriter {
    pub fn new(config: RewriterConfig) -> InversionResult<Self> {
        let normalizer = ContractionNormalizer::new(&config.vocabulary)?;
        Ok(Self { config, normalizer })
    }

    /// A rewriter over the built-in French vocabulary.
    pub fn french() -> InversionResult<Self> {
        Self::new(RewriterConfig::default())
    }

    pub fn config(&self) -> &RewriterConfig {
        &self.config
    }

    fn vocabulary(&self) -> &Vocabulary {
        &self.config.vocabulary
    }

    /// Apply the contraction rules to raw text. Run this before tagging.
    pub fn normalize(&self, text: &str) -> String {
        self.normalizer.normalize(text)
    }

    /// Invert `sequence` into a question.
    ///
    /// `prompt` is asked for a gender once per clause that has a verb but no
    /// subject pronoun; invalid answers are asked again.
    pub fn rewrite(
        &self,
        sequence: &TokenSequence,
        prompt: &mut dyn GenderPrompt,
    ) -> InversionResult<RewriteResult> {
        if sequence.is_empty() {
            return Err(InversionError::unrecognizable("empty token sequence"));
        }

        let disclaimers =
            low_confidence_disclaimers(sequence.tokens(), self.config.confidence_threshold);

        let (interrogative, tokens) = self.extract_interrogative(sequence.tokens().to_vec());
        let (object_pronouns, tokens) = self.extract_object_pronouns(tokens);
        let (mut tokens, pairs) = self.pair_clauses(tokens, prompt)?;

        let lead_len = pairs
            .first()
            .map(|pair| pair.subject)
            .ok_or_else(|| InversionError::unrecognizable("no verb found"))?;

        for pair in &pairs {
            tokens.swap(pair.subject, pair.verb);
        }
        tracing::debug!(clauses = pairs.len(), "swapped subject pronouns and verbs");

        let lead = render_lead(&tokens[..lead_len]);
        let tail_pairs: Vec<ClausePair> = pairs
            .iter()
            .map(|pair| ClausePair {
                subject: pair.subject - lead_len,
                verb: pair.verb - lead_len,
            })
            .collect();
        let tail = self.render_tail(&tokens[lead_len..], &tail_pairs)?;

        let rendered_question = format!(
            "{}{}{}{}",
            interrogative,
            lead,
            object_pronouns,
            tail.to_lowercase()
        );
        tracing::debug!(question = %rendered_question, "rendered question");

        Ok(RewriteResult {
            rendered_question,
            disclaimers,
            original_text: sequence.text().to_string(),
        })
    }

    /// Remove the first interrogative word; it is returned with a trailing space.
    fn extract_interrogative(&self, tokens: Vec<Token>) -> (String, Vec<Token>) {
        let found = tokens
            .iter()
            .position(|token| self.vocabulary().is_interrogative(token.text()));

        match found {
            Some(found) => {
                let mut prefix = String::new();
                let rest = tokens
                    .into_iter()
                    .enumerate()
                    .filter_map(|(idx, token)| {
                        if idx == found {
                            prefix = format!("{} ", token.text());
                            None
                        } else {
                            Some(token)
                        }
                    })
                    .collect();
                tracing::debug!(interrogative = %prefix.trim_end(), "extracted interrogative");
                (prefix, rest)
            }
            None => (String::new(), tokens),
        }
    }

    /// Pull object pronouns sitting between the first word and the first verb.
    fn extract_object_pronouns(&self, tokens: Vec<Token>) -> (String, Vec<Token>) {
        let first_verb = tokens
            .iter()
            .position(Token::is_verb)
            .unwrap_or(tokens.len());

        let mut prefix = String::new();
        let rest = tokens
            .into_iter()
            .enumerate()
            .filter_map(|(idx, token)| {
                let is_object = idx > 0
                    && idx < first_verb
                    && token.tag() != Tag::Det
                    && self.vocabulary().is_object_pronoun(token.text());
                if !is_object {
                    return Some(token);
                }
                prefix.push_str(token.text());
                if !token.ends_with_apostrophe() {
                    prefix.push(' ');
                }
                None
            })
            .collect();

        if !prefix.is_empty() {
            tracing::debug!(object_pronouns = %prefix.trim_end(), "extracted object pronouns");
        }
        (prefix, rest)
    }

    /// Find each clause's first verb and first pronoun.
    ///
    /// Non-comma punctuation starts a new clause. A pronoun found after the
    /// verb is moved right before it; a clause with a verb and no pronoun at
    /// all gets "il"/"elle" inserted there instead. Every pair therefore has
    /// its subject immediately before its verb.
    fn pair_clauses(
        &self,
        tokens: Vec<Token>,
        prompt: &mut dyn GenderPrompt,
    ) -> InversionResult<(Vec<Token>, Vec<ClausePair>)> {
        let mut output = Vec::with_capacity(tokens.len() + 1);
        let mut pairs = Vec::new();
        let mut scan = ClauseScan::default();

        for token in tokens {
            if token.is_clause_boundary() {
                close_clause(&mut output, &mut pairs, std::mem::take(&mut scan), prompt)?;
                output.push(token);
                continue;
            }

            let idx = output.len();
            if token.is_verb() {
                scan.verb.get_or_insert(idx);
            } else if token.tag() == Tag::Pron {
                scan.subject.get_or_insert(idx);
            }
            output.push(token);
        }
        close_clause(&mut output, &mut pairs, scan, prompt)?;

        Ok((output, pairs))
    }

    /// Render everything from the first inverted verb on.
    ///
    /// `pairs` index into `tail`, after the swap: the verb sits at `subject`
    /// and the pronoun at `verb`.
    fn render_tail(&self, tail: &[Token], pairs: &[ClausePair]) -> InversionResult<String> {
        let vocab = self.vocabulary();
        let mut out = String::new();

        for (idx, token) in tail.iter().enumerate() {
            if token.tag() == Tag::Punct {
                if token.text() == "?" {
                    out.push_str("?\n");
                } else {
                    trim_trailing_spaces(&mut out);
                    if token.text() == "," {
                        out.push_str(", ");
                    } else {
                        out.push_str(" ?\n");
                    }
                }
                continue;
            }

            if let Some(pair) = pairs.iter().find(|pair| pair.subject == idx) {
                let subject = tail.get(pair.verb).ok_or_else(|| {
                    InversionError::unrecognizable("inverted verb lost its subject pronoun")
                })?;
                let mut verb = token.text().to_string();
                if vocab.is_second_person(subject.text()) && ends_in_a_or_e(&verb) {
                    verb.push('s');
                }
                out.push_str(&verb);
                out.push('-');
                if ends_in_a_or_e(&verb) && !vocab.is_first_person(subject.text()) {
                    out.push_str("t-");
                }
                continue;
            }

            if token.text().to_lowercase() == "j'" {
                out.push_str("je ");
                continue;
            }

            out.push_str(token.text());
            if !(token.ends_with_apostrophe() && vocab.is_object_pronoun(token.text())) {
                out.push(' ');
            }
        }

        let mut rendered = out.trim_end().to_string();
        if !rendered.ends_with('?') {
            if !rendered.is_empty() {
                rendered.push(' ');
            }
            rendered.push('?');
        }
        Ok(rendered)
    }
}

fn close_clause(
    output: &mut Vec<Token>,
    pairs: &mut Vec<ClausePair>,
    scan: ClauseScan,
    prompt: &mut dyn GenderPrompt,
) -> InversionResult<()> {
    match (scan.subject, scan.verb) {
        (Some(subject), Some(verb)) if subject < verb => pairs.push(ClausePair { subject, verb }),
        (Some(subject), Some(verb)) => {
            let pronoun = output.remove(subject);
            tracing::debug!(pronoun = pronoun.text(), "moving subject pronoun before its verb");
            output.insert(verb, pronoun);
            pairs.push(ClausePair {
                subject: verb,
                verb: verb + 1,
            });
        }
        (None, Some(verb)) => {
            let gender = resolve_gender(prompt)?;
            tracing::debug!(pronoun = gender.pronoun(), "inserting subject pronoun");
            output.insert(verb, Token::certain(gender.pronoun(), Tag::Pron));
            pairs.push(ClausePair {
                subject: verb,
                verb: verb + 1,
            });
        }
        (_, None) => {}
    }
    Ok(())
}

/// The words before the first inverted verb, kept as written.
fn render_lead(tokens: &[Token]) -> String {
    let mut out = String::new();
    for token in tokens {
        if token.tag() == Tag::Punct && token.text() == "," {
            trim_trailing_spaces(&mut out);
            out.push_str(", ");
            continue;
        }
        out.push_str(token.text());
        let elided = token.ends_with_apostrophe()
            && matches!(token.tag(), Tag::Det | Tag::Adp | Tag::Pron);
        if !elided {
            out.push(' ');
        }
    }
    out
}

fn trim_trailing_spaces(out: &mut String) {
    let trimmed = out.trim_end_matches(' ').len();
    out.truncate(trimmed);
}

fn ends_in_a_or_e(word: &str) -> bool {
    matches!(
        word.chars().last().map(|c| c.to_ascii_lowercase()),
        Some('a') | Some('e')
    )
}
