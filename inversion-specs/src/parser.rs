//! Parsing of fixture TOML.

use crate::errors::{SpecError, SpecResult};
use crate::fixture::InversionFixture;

/// Count lines up to a byte position (for error messages).
fn count_lines(input: &str, byte_pos: usize) -> usize {
    input
        .get(..byte_pos.min(input.len()))
        .unwrap_or(input)
        .chars()
        .filter(|&c| c == '\n')
        .count()
        + 1
}

/// Parse a full fixture file.
pub fn parse_fixture(input: &str) -> SpecResult<InversionFixture> {
    let fixture: InversionFixture = toml::from_str(input).map_err(|e| SpecError::Parse {
        line: e.span().map_or(1, |span| count_lines(input, span.start)),
        message: e.message().to_string(),
    })?;

    let expect = &fixture.expect;
    if expect.question.is_none() && expect.error.is_none() {
        return Err(SpecError::Parse {
            line: 1,
            message: "[expect] needs a question or an error".to_string(),
        });
    }
    if expect.question.is_some() && expect.error.is_some() {
        return Err(SpecError::Parse {
            line: 1,
            message: "[expect] cannot have both a question and an error".to_string(),
        });
    }

    Ok(fixture)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture::ExpectedError;
    use inversion::{Gender, Tag};

    #[test]
    fn parses_tokens_and_expectation() {
        let fixture = parse_fixture(
            r#"
title = "Second person"
tokens = [
    { text = "Tu", tag = "PRON", score = 0.99 },
    { text = "viens", tag = "VERB" },
]

[expect]
question = "viens-tu ?"
disclaimers = 0
"#,
        )
        .unwrap();

        assert_eq!(fixture.title.as_deref(), Some("Second person"));
        assert_eq!(fixture.tokens.len(), 2);
        assert_eq!(fixture.tokens[1].tag(), Tag::Verb);
        assert_eq!(fixture.tokens[1].score(), 1.0);
        assert_eq!(fixture.sequence().text(), "Tu viens");
        assert_eq!(fixture.expect.disclaimers, Some(0));
        assert_eq!(fixture.gender, None);
    }

    #[test]
    fn parses_gender_and_error() {
        let fixture = parse_fixture(
            r#"
gender = "fem"
tokens = [{ text = "Bonjour", tag = "INTJ" }]

[expect]
error = "unrecognizable-sentence"
"#,
        )
        .unwrap();

        assert_eq!(fixture.gender, Some(Gender::Feminine));
        assert_eq!(
            fixture.expect.error,
            Some(ExpectedError::UnrecognizableSentence)
        );
    }

    #[test]
    fn reports_the_failing_line() {
        let err = parse_fixture(
            r#"title = "Missing comma"
tokens = [
    { text = "Tu" tag = "PRON" },
]

[expect]
question = "?"
"#,
        )
        .unwrap_err();

        match err {
            SpecError::Parse { line, .. } => assert_eq!(line, 3),
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn rejects_invalid_gender() {
        assert!(matches!(
            parse_fixture("gender = \"neutre\"\n[expect]\nquestion = \"?\"\n"),
            Err(SpecError::Parse { .. })
        ));
    }

    #[test]
    fn expectation_is_required() {
        let err = parse_fixture("tokens = []\n[expect]\n").unwrap_err();
        assert!(err.to_string().contains("needs a question or an error"));
    }
}
