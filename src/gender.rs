//! Gender of a synthesized subject pronoun, and the prompt that supplies it.
//!
//! When a clause has a verb but no subject pronoun ("Marie chante"), the
//! rewriter has to insert "il" or "elle". It cannot know which, so it asks a
//! [`GenderPrompt`]. The console wires a terminal prompt in; tests pass a
//! closure.

use std::str::FromStr;

use crate::{InversionError, InversionResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Masculine,
    Feminine,
}

impl Gender {
    /// The third-person subject pronoun for this gender.
    pub fn pronoun(&self) -> &'static str {
        match self {
            Gender::Masculine => "il",
            Gender::Feminine => "elle",
        }
    }

    /// The answer a prompt gives for this gender.
    pub fn answer(&self) -> &'static str {
        match self {
            Gender::Masculine => "masc",
            Gender::Feminine => "fem",
        }
    }
}

impl FromStr for Gender {
    type Err = InversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "masc" => Ok(Gender::Masculine),
            "fem" => Ok(Gender::Feminine),
            _ => Err(InversionError::InvalidGenderInput {
                answer: s.to_string(),
            }),
        }
    }
}

/// Source of answers to "masc or fem?".
///
/// `None` means no further answer will come (closed input).
pub trait GenderPrompt {
    fn ask(&mut self) -> Option<String>;
}

impl<F> GenderPrompt for F
where
    F: FnMut() -> Option<String>,
{
    fn ask(&mut self) -> Option<String> {
        self()
    }
}

/// Always answers with the same gender.
#[derive(Debug, Clone, Copy)]
pub struct FixedGender(pub Gender);

impl GenderPrompt for FixedGender {
    fn ask(&mut self) -> Option<String> {
        Some(self.0.answer().to_string())
    }
}

/// Never answers; any clause needing a synthesized pronoun fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoGenderPrompt;

impl GenderPrompt for NoGenderPrompt {
    fn ask(&mut self) -> Option<String> {
        None
    }
}

/// Ask until the prompt gives a valid answer or closes.
pub(crate) fn resolve_gender(prompt: &mut dyn GenderPrompt) -> InversionResult<Gender> {
    loop {
        let answer = prompt.ask().ok_or(InversionError::GenderPromptClosed)?;
        match answer.parse::<Gender>() {
            Ok(gender) => return Ok(gender),
            Err(err) => tracing::warn!(%err, "asking again for the subject's gender"),
        }
    }
}
