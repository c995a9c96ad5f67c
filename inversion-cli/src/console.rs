//! Interactive loop and phrase files.
//!
//! Phrases are read one per line until a line reading `END`. Each one is
//! answered with its disclaimers followed by the inverted question, or with
//! an apology when it cannot be inverted. A phrase the tagger cannot handle
//! gets the tagging error and the loop moves on.

use std::io::{self, BufRead, Write};

use colored::Colorize;
use inversion::{GenderPrompt, RewriteResult, TokenLineDisplay, DEFAULT_CONFIDENCE_THRESHOLD};

use crate::session::Session;

/// Line that ends the input.
pub const END_SENTINEL: &str = "END";

const BANNER_WIDTH: usize = 88;

/// Read phrases until `END` or end of input, skipping blank lines.
pub fn read_phrases<R: BufRead>(input: R) -> io::Result<Vec<String>> {
    let mut phrases = Vec::new();
    for line in input.lines() {
        let line = line?;
        let phrase = line.trim();
        if phrase == END_SENTINEL {
            break;
        }
        if !phrase.is_empty() {
            phrases.push(phrase.to_string());
        }
    }
    Ok(phrases)
}

pub struct Console<'a, W> {
    session: &'a Session,
    output: W,
    show_tags: bool,
}

impl<'a, W: Write> Console<'a, W> {
    pub fn new(session: &'a Session, output: W) -> Self {
        Self {
            session,
            output,
            show_tags: false,
        }
    }

    /// Print each phrase's tagged tokens before its question.
    pub fn show_tags(mut self, show: bool) -> Self {
        self.show_tags = show;
        self
    }

    pub fn into_inner(self) -> W {
        self.output
    }

    pub fn welcome(&mut self) -> io::Result<()> {
        self.banner("Bienvenue ! Tapez une phrase affirmative, ou END pour quitter.")
    }

    pub fn farewell(&mut self) -> io::Result<()> {
        self.banner("Merci et à bientôt !")
    }

    fn banner(&mut self, message: &str) -> io::Result<()> {
        let rule = "-".repeat(BANNER_WIDTH);
        writeln!(self.output, "{}", rule.dimmed())?;
        writeln!(self.output, "{}", message)?;
        writeln!(self.output, "{}", rule.dimmed())
    }

    /// Prompt for phrases on `input` until `END` or end of input.
    pub fn run_interactive<R: BufRead>(
        &mut self,
        mut input: R,
        prompt: &mut dyn GenderPrompt,
    ) -> anyhow::Result<()> {
        self.welcome()?;
        loop {
            write!(self.output, "{} ", ">".bold())?;
            self.output.flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                break;
            }
            let phrase = line.trim();
            if phrase == END_SENTINEL {
                break;
            }
            if phrase.is_empty() {
                continue;
            }
            self.answer(phrase, prompt)?;
        }
        self.farewell()?;
        Ok(())
    }

    /// Answer every phrase in order.
    pub fn run_batch(
        &mut self,
        phrases: &[String],
        prompt: &mut dyn GenderPrompt,
    ) -> anyhow::Result<()> {
        self.welcome()?;
        for phrase in phrases {
            writeln!(self.output, "{} {}", ">".bold(), phrase)?;
            self.answer(phrase, prompt)?;
        }
        self.farewell()?;
        Ok(())
    }

    /// Print the answer to one phrase. Only errors that end the run (a
    /// closed gender prompt, bad configuration) are returned.
    pub fn answer(&mut self, phrase: &str, prompt: &mut dyn GenderPrompt) -> anyhow::Result<()> {
        let outcome = match self.session.tag(phrase) {
            Ok(sequence) => {
                if self.show_tags {
                    let display = TokenLineDisplay::new(sequence.tokens())
                        .with_scores()
                        .flag_below(DEFAULT_CONFIDENCE_THRESHOLD);
                    writeln!(self.output, "{}", display)?;
                }
                self.session.rewrite(phrase, &sequence, prompt)
            }
            Err(err) => Err(err),
        };

        match outcome {
            Ok(result) => self.print_result(&result)?,
            Err(err) if err.is_recoverable() => {
                tracing::debug!(error = %err, phrase, "phrase not inverted");
                writeln!(self.output, "{}", err.user_message().red())?;
            }
            Err(err) => return Err(err.into()),
        }
        Ok(())
    }

    fn print_result(&mut self, result: &RewriteResult) -> io::Result<()> {
        for disclaimer in &result.disclaimers {
            writeln!(self.output, "{}", disclaimer.yellow())?;
        }
        writeln!(self.output, "{}", result.rendered_question.green().bold())
    }
}
