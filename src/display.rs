use crate::Token;
use std::fmt::{self, Write};
use unicode_width::UnicodeWidthStr;

/// Renders a tagged sentence with each token's tag drawn underneath it.
///
/// ```text
/// Bonjour  je  suis  content
/// ╰─────╯INTJ
///          ╰╯PRON
///              ╰──╯AUX
///                    ╰─────╯ADJ
/// ```
pub struct TokenLineDisplay<'a> {
    tokens: &'a [Token],
    show_scores: bool,
    flag_below: Option<f64>,
}

impl<'a> fmt::Display for TokenLineDisplay<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const SPACE_PADDING: usize = 2;
        let mut token_idx_to_start_display_char_idx = Vec::with_capacity(self.tokens.len());
        let mut token_idx_to_end_display_char_idx = Vec::with_capacity(self.tokens.len());

        let mut opening_line = String::new();
        for (idx, token) in self.tokens.iter().enumerate() {
            if idx > 0 {
                opening_line.extend(std::iter::repeat(' ').take(SPACE_PADDING));
            }
            token_idx_to_start_display_char_idx.push(UnicodeWidthStr::width(&*opening_line));
            opening_line.push_str(token.text());
            token_idx_to_end_display_char_idx.push(UnicodeWidthStr::width(&*opening_line));
        }

        f.write_str(&opening_line)?;

        for (idx, token) in self.tokens.iter().enumerate() {
            f.write_char('\n')?;

            let start_char_idx = token_idx_to_start_display_char_idx[idx];
            for _ in 0..start_char_idx {
                f.write_char(' ')?;
            }

            f.write_char('╰')?;

            let end_char_idx = token_idx_to_end_display_char_idx[idx];
            let char_len = end_char_idx - start_char_idx;
            for _ in (start_char_idx + 1)..end_char_idx.saturating_sub(1) {
                f.write_char('─')?;
            }

            if char_len > 1 {
                f.write_char('╯')?;
            }

            f.write_str(token.tag().as_str())?;

            if self.show_scores {
                write!(f, " {:.2}", token.score())?;
            }

            if let Some(threshold) = self.flag_below {
                if token.score() < threshold {
                    f.write_str(" (!)")?;
                }
            }
        }

        Ok(())
    }
}

impl<'a> TokenLineDisplay<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        TokenLineDisplay {
            tokens,
            show_scores: false,
            flag_below: None,
        }
    }

    /// Print each token's confidence next to its tag.
    pub fn with_scores(mut self) -> Self {
        self.show_scores = true;
        self
    }

    /// Mark tokens scored below `threshold` with `(!)`.
    pub fn flag_below(mut self, threshold: f64) -> Self {
        self.flag_below = Some(threshold);
        self
    }
}
