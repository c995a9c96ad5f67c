//! One tagger and one rewriter, shared by every phrase of a run.

use inversion::{
    GenderPrompt, InterrogativeRewriter, InversionError, InversionResult, RewriteResult,
    TokenSequence,
};
use inversion_tagger::{ComprehendTagger, RecordedTagger, Tagger};

use crate::config::AppConfig;

pub struct Session {
    tagger: Box<dyn Tagger>,
    rewriter: InterrogativeRewriter,
    language_code: String,
}

impl Session {
    pub fn new(
        tagger: Box<dyn Tagger>,
        rewriter: InterrogativeRewriter,
        language_code: impl Into<String>,
    ) -> Self {
        Self {
            tagger,
            rewriter,
            language_code: language_code.into(),
        }
    }

    /// Build the tagger the configuration names: recordings win over an
    /// endpoint.
    pub fn from_config(config: &AppConfig) -> InversionResult<Self> {
        let rewriter = InterrogativeRewriter::new(config.rewriter_config())?;

        let tagger: Box<dyn Tagger> = match (&config.tagger.recordings, &config.tagger.endpoint) {
            (Some(recordings), _) => {
                let tagger = RecordedTagger::load(recordings)?;
                tracing::info!(
                    path = %recordings.display(),
                    phrases = tagger.len(),
                    "replaying recorded tagging"
                );
                Box::new(tagger)
            }
            (None, Some(endpoint)) => {
                tracing::info!(%endpoint, "tagging through DetectSyntax");
                Box::new(ComprehendTagger::new(endpoint.as_str())?)
            }
            (None, None) => {
                return Err(InversionError::Config {
                    message: "no tagger configured: set tagger.recordings or tagger.endpoint"
                        .to_string(),
                })
            }
        };

        Ok(Self::new(tagger, rewriter, config.tagger.language_code.as_str()))
    }

    /// Normalize contractions, then tag.
    pub fn tag(&self, phrase: &str) -> InversionResult<TokenSequence> {
        let normalized = self.rewriter.normalize(phrase);
        if normalized != phrase.trim() {
            tracing::debug!(%normalized, "normalized contractions");
        }
        self.tagger.detect_syntax(&normalized, &self.language_code)
    }

    /// Rewrite an already tagged phrase; the result keeps `phrase` as its
    /// original text.
    pub fn rewrite(
        &self,
        phrase: &str,
        sequence: &TokenSequence,
        prompt: &mut dyn GenderPrompt,
    ) -> InversionResult<RewriteResult> {
        let mut result = self.rewriter.rewrite(sequence, prompt)?;
        result.original_text = phrase.to_string();
        Ok(result)
    }

    pub fn process(
        &self,
        phrase: &str,
        prompt: &mut dyn GenderPrompt,
    ) -> InversionResult<RewriteResult> {
        let sequence = self.tag(phrase)?;
        self.rewrite(phrase, &sequence, prompt)
    }

    /// Process phrases in order. A phrase that fails to tag or rewrite is
    /// reported in its own slot; only a closed gender prompt or a
    /// configuration error stops the batch.
    pub fn process_batch<S: AsRef<str>>(
        &self,
        phrases: &[S],
        prompt: &mut dyn GenderPrompt,
    ) -> InversionResult<Vec<InversionResult<RewriteResult>>> {
        let mut results = Vec::with_capacity(phrases.len());
        for phrase in phrases {
            match self.process(phrase.as_ref(), prompt) {
                Err(err) if !err.is_recoverable() => return Err(err),
                outcome => results.push(outcome),
            }
        }
        Ok(results)
    }
}
