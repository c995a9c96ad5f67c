//! Heuristic inversion of French declarative sentences into questions.
//!
//! The input is a sentence already split into part-of-speech tagged tokens
//! (see the `inversion-tagger` crate). The output is the inverted question:
//!
//! ```text
//! Tu  aime  aller  au  magasin  ?      =>  aimes-tu aller au magasin ?
//! Bonjour  je  suis  content           =>  Bonjour suis-je content ?
//! Quand  tu  viens  ?                  =>  Quand viens-tu ?
//! Marie  le  mange  .   (gender: fem)  =>  Marie le mange-t-elle ?
//! ```
//!
//! ## Modules
//!
//! - [`Token`], [`Tag`], [`TokenSequence`] - tagged input
//! - [`Vocabulary`] - interrogatives, object pronouns and contraction rules
//! - [`ContractionNormalizer`] - "est-ce que" / "je peux" rewrites on raw text
//! - [`InterrogativeRewriter`] - the rewrite pipeline
//! - [`GenderPrompt`] - supplies "masc"/"fem" when a subject pronoun is missing
//! - [`TokenLineDisplay`] - tokens with their tags drawn underneath
//!
//! ## Example
//!
//! ```
//! use inversion::{FixedGender, Gender, InterrogativeRewriter, Tag, TokenSequence};
//!
//! let rewriter = InterrogativeRewriter::french().unwrap();
//! let tokens = TokenSequence::from_pairs(&[
//!     ("Bonjour", Tag::Intj),
//!     ("je", Tag::Pron),
//!     ("suis", Tag::Aux),
//!     ("content", Tag::Adj),
//! ]);
//! let result = rewriter
//!     .rewrite(&tokens, &mut FixedGender(Gender::Masculine))
//!     .unwrap();
//! assert_eq!(result.rendered_question, "Bonjour suis-je content ?");
//! ```

mod contraction;
mod disclaimer;
mod display;
mod errors;
mod gender;
mod rewriter;
mod token;
mod vocabulary;

pub use contraction::ContractionNormalizer;
pub use disclaimer::{low_confidence_disclaimers, DEFAULT_CONFIDENCE_THRESHOLD};
pub use display::TokenLineDisplay;
pub use errors::{InversionError, InversionResult, APOLOGY_MESSAGE};
pub use gender::{FixedGender, Gender, GenderPrompt, NoGenderPrompt};
pub use rewriter::{InterrogativeRewriter, RewriteResult, RewriterConfig};
pub use token::{Tag, Token, TokenSequence};
pub use vocabulary::{ContractionRule, Vocabulary};

#[cfg(test)]
mod tests {
    mod inversion;
    mod properties;
}
