//! Terminal gender prompt.

use dialoguer::Input;
use inversion::GenderPrompt;

/// Asks on the terminal whether a synthesized subject is "masc" or "fem".
pub struct TerminalGenderPrompt {
    question: String,
}

impl TerminalGenderPrompt {
    pub fn new() -> Self {
        Self {
            question: "Le sujet est-il masculin ou féminin ? (masc/fem)".to_string(),
        }
    }
}

impl Default for TerminalGenderPrompt {
    fn default() -> Self {
        Self::new()
    }
}

impl GenderPrompt for TerminalGenderPrompt {
    fn ask(&mut self) -> Option<String> {
        match Input::<String>::new()
            .with_prompt(&self.question)
            .interact_text()
        {
            Ok(answer) => Some(answer),
            Err(err) => {
                tracing::warn!(error = %err, "gender prompt closed");
                None
            }
        }
    }
}
