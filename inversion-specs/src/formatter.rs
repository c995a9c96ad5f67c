//! Failure reports for fixture checks.

use std::fmt::Write;

use inversion::TokenLineDisplay;

use crate::fixture::InversionFixture;
use crate::runner::CheckFailure;

/// Format a failed check with the fixture's tagged tokens for context.
pub fn format_failure(
    fixture_name: &str,
    fixture: &InversionFixture,
    failure: &CheckFailure,
) -> String {
    let mut output = String::new();

    // Writing to a String cannot fail.
    let _ = writeln!(output, "\nFAIL: {} [{}]", fixture_name, failure.check);
    if let Some(title) = &fixture.title {
        let _ = writeln!(output, "  {}", title);
    }
    let _ = writeln!(output);

    if !fixture.tokens.is_empty() {
        let display = TokenLineDisplay::new(&fixture.tokens).with_scores();
        for line in display.to_string().lines() {
            let _ = writeln!(output, "  {}", line);
        }
        let _ = writeln!(output);
    }

    let _ = writeln!(output, "  \u{2717} {}", failure.check);
    let _ = writeln!(output, "    expected: {}", failure.expected);
    let _ = writeln!(output, "    found:    {}", failure.actual);

    if let Some(hint) = generate_hint(fixture, failure) {
        let _ = writeln!(output);
        let _ = writeln!(output, "  hint: {}", hint);
    }

    output
}

/// Format the one-line summary for a fixture.
pub fn format_summary(
    fixture_name: &str,
    passed: usize,
    failed: usize,
    expected_failures: usize,
    regressions: usize,
) -> String {
    let status = if regressions > 0 { "FAIL" } else { "PASS" };
    format!(
        "{}: {} ({} passed, {} failed ({} expected, {} regressions))\n",
        status, fixture_name, passed, failed, expected_failures, regressions
    )
}

fn generate_hint(fixture: &InversionFixture, failure: &CheckFailure) -> Option<&'static str> {
    let has_verb = fixture.tokens.iter().any(|token| token.is_verb());
    match failure.check {
        "question" | "error" if !has_verb => {
            Some("no token is tagged VERB or AUX, so there is nothing to invert")
        }
        "question" if failure.expected.contains("-ils") || failure.expected.contains("-elles") => {
            Some("a synthesized subject pronoun is always singular")
        }
        "prompts" => Some("the gender prompt is asked once per clause without a subject pronoun"),
        "disclaimers" => Some("tokens scored below the confidence threshold get one disclaimer each"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_fixture;

    fn fixture() -> InversionFixture {
        parse_fixture(
            r#"
title = "Plural subject"
gender = "masc"
tokens = [
    { text = "Les", tag = "DET" },
    { text = "enfants", tag = "NOUN", score = 0.93 },
    { text = "jouent", tag = "VERB" },
]

[expect]
question = "Les enfants jouent-ils ?"
"#,
        )
        .unwrap()
    }

    #[test]
    fn test_format_failure() {
        let failure = CheckFailure {
            check: "question",
            expected: "Les enfants jouent-ils ?".to_string(),
            actual: "Les enfants jouent-il ?".to_string(),
        };
        let output = format_failure("plural-subject.toml", &fixture(), &failure);
        insta::assert_snapshot!(output.trim(), @r###"
        FAIL: plural-subject.toml [question]
          Plural subject

          Les  enfants  jouent
          ╰─╯DET 1.00
               ╰─────╯NOUN 0.93
                        ╰────╯VERB 1.00

          ✗ question
            expected: Les enfants jouent-ils ?
            found:    Les enfants jouent-il ?

          hint: a synthesized subject pronoun is always singular
        "###);
    }

    #[test]
    fn test_hint_without_verb() {
        let mut fixture = fixture();
        fixture.tokens.pop();
        let failure = CheckFailure {
            check: "error",
            expected: "gender-prompt-closed".to_string(),
            actual: "error: ...".to_string(),
        };
        let output = format_failure("x.toml", &fixture, &failure);
        assert!(output.contains("hint: no token is tagged VERB or AUX"));
    }

    #[test]
    fn test_format_summary_pass() {
        let output = format_summary("second-person.toml", 3, 0, 0, 0);
        assert_eq!(
            output,
            "PASS: second-person.toml (3 passed, 0 failed (0 expected, 0 regressions))\n"
        );
    }

    #[test]
    fn test_format_summary_with_regressions() {
        let output = format_summary("second-person.toml", 1, 2, 1, 1);
        assert!(output.starts_with("FAIL: second-person.toml"));
        assert!(output.contains("1 regressions"));
    }
}
