//! Part-of-speech tagging for the inversion rewriter.
//!
//! ## Taggers
//!
//! - [`ComprehendTagger`] - calls a `DetectSyntax` endpoint over HTTP
//! - [`RecordedTagger`] - replays recorded `DetectSyntax` responses
//!
//! Both return an [`inversion::TokenSequence`] ready for
//! [`inversion::InterrogativeRewriter::rewrite`].

mod comprehend;
mod recorded;
pub mod syntax;

pub use comprehend::ComprehendTagger;
pub use recorded::RecordedTagger;
pub use syntax::{DetectSyntaxRequest, DetectSyntaxResponse, PartOfSpeech, SyntaxToken};

use inversion::{InversionResult, TokenSequence};

/// Language code for French.
pub const FRENCH: &str = "fr";

/// Splits a sentence into tagged tokens.
///
/// Calls block until the tagger answers; a failure is reported as
/// [`inversion::InversionError::TaggingUnavailable`].
pub trait Tagger {
    fn detect_syntax(&self, text: &str, language_code: &str) -> InversionResult<TokenSequence>;
}

impl<T: Tagger + ?Sized> Tagger for Box<T> {
    fn detect_syntax(&self, text: &str, language_code: &str) -> InversionResult<TokenSequence> {
        (**self).detect_syntax(text, language_code)
    }
}
