//! Runs fixtures through the rewriter and checks their expectations.

use inversion::{InterrogativeRewriter, InversionResult, RewriteResult};

use crate::errors::{SpecError, SpecResult};
use crate::failures::{ExpectedFailures, FailureState, HarnessResult};
use crate::fixture::InversionFixture;
use crate::formatter::{format_failure, format_summary};

/// What one rewrite of a fixture produced.
#[derive(Debug)]
pub struct FixtureRun {
    pub result: InversionResult<RewriteResult>,
    /// How many times the gender prompt was asked.
    pub prompts: usize,
}

/// A check whose expected and actual values differ.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckFailure {
    pub check: &'static str,
    pub expected: String,
    pub actual: String,
}

#[derive(Debug, Clone, Default)]
pub struct MatchResult {
    pub passed: Vec<&'static str>,
    pub failed: Vec<CheckFailure>,
}

impl MatchResult {
    pub fn all_passed(&self) -> bool {
        self.failed.is_empty()
    }

    fn check(&mut self, check: &'static str, expected: String, actual: String) {
        if expected == actual {
            self.passed.push(check);
        } else {
            self.failed.push(CheckFailure {
                check,
                expected,
                actual,
            });
        }
    }
}

/// Rewrite the fixture's tokens, answering the gender prompt from the fixture.
pub fn run_fixture(fixture: &InversionFixture, rewriter: &InterrogativeRewriter) -> FixtureRun {
    let gender = fixture.gender;
    let mut prompts = 0;
    let mut prompt = || {
        prompts += 1;
        gender.map(|gender| gender.answer().to_string())
    };
    let result = rewriter.rewrite(&fixture.sequence(), &mut prompt);
    FixtureRun { result, prompts }
}

/// Compare a run against the fixture's `[expect]` table.
pub fn check_fixture(fixture: &InversionFixture, run: &FixtureRun) -> MatchResult {
    let expect = &fixture.expect;
    let mut result = MatchResult::default();

    let outcome = match &run.result {
        Ok(rewrite) => rewrite.rendered_question.clone(),
        Err(err) => format!("error: {}", err),
    };

    if let Some(question) = &expect.question {
        result.check("question", question.clone(), outcome.clone());
    }

    if let Some(error) = expect.error {
        let actual = match &run.result {
            Err(err) if error.matches(err) => error.to_string(),
            _ => outcome.clone(),
        };
        result.check("error", error.to_string(), actual);
    }

    if let Some(disclaimers) = expect.disclaimers {
        let actual = match &run.result {
            Ok(rewrite) => rewrite.disclaimers.len().to_string(),
            Err(_) => outcome.clone(),
        };
        result.check("disclaimers", disclaimers.to_string(), actual);
    }

    if let Some(prompts) = expect.prompts {
        result.check("prompts", prompts.to_string(), run.prompts.to_string());
    }

    result
}

/// Run and check one fixture, failing with every mismatch.
pub fn assert_fixture(
    name: &str,
    fixture: &InversionFixture,
    rewriter: &InterrogativeRewriter,
) -> SpecResult<()> {
    let run = run_fixture(fixture, rewriter);
    let checked = check_fixture(fixture, &run);
    if checked.all_passed() {
        return Ok(());
    }

    let message = checked
        .failed
        .iter()
        .map(|failure| format_failure(name, fixture, failure))
        .collect::<String>();
    Err(SpecError::Assertion { message })
}

/// Run every fixture, classifying failures against `expected`.
///
/// Returns the tally and a report listing each failure and a summary line
/// per fixture.
pub fn run_all(
    fixtures: &[(String, InversionFixture)],
    rewriter: &InterrogativeRewriter,
    expected: &ExpectedFailures,
) -> (HarnessResult, String) {
    let mut harness = HarnessResult::new();
    let mut report = String::new();

    for (name, fixture) in fixtures {
        let run = run_fixture(fixture, rewriter);
        let checked = check_fixture(fixture, &run);

        let mut expected_failures = 0;
        let mut regressions = 0;
        for _ in &checked.passed {
            harness.record_pass();
        }
        for failure in &checked.failed {
            let state = expected.is_expected(name, failure.check);
            harness.record_failure(state);
            match state {
                FailureState::Regression => {
                    regressions += 1;
                    report.push_str(&format_failure(name, fixture, failure));
                }
                FailureState::Known | FailureState::Pending => expected_failures += 1,
            }
        }

        report.push_str(&format_summary(
            name,
            checked.passed.len(),
            checked.failed.len(),
            expected_failures,
            regressions,
        ));
    }

    (harness, report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_fixture;

    fn rewriter() -> InterrogativeRewriter {
        InterrogativeRewriter::french().unwrap()
    }

    const MARIE: &str = r#"
title = "Synthesized pronoun"
gender = "fem"
tokens = [
    { text = "Marie", tag = "PROPN" },
    { text = "chante", tag = "VERB", score = 0.5 },
    { text = "bien", tag = "ADV" },
]

[expect]
question = "Marie chante-t-elle bien ?"
disclaimers = 1
prompts = 1
"#;

    #[test]
    fn passing_fixture_checks_everything() {
        let fixture = parse_fixture(MARIE).unwrap();
        let run = run_fixture(&fixture, &rewriter());
        assert_eq!(run.prompts, 1);

        let checked = check_fixture(&fixture, &run);
        assert!(checked.all_passed(), "{:?}", checked.failed);
        assert_eq!(checked.passed, vec!["question", "disclaimers", "prompts"]);
    }

    #[test]
    fn mismatch_names_the_check() {
        let fixture = parse_fixture(&MARIE.replace("prompts = 1", "prompts = 2")).unwrap();
        let checked = check_fixture(&fixture, &run_fixture(&fixture, &rewriter()));
        assert_eq!(
            checked.failed,
            vec![CheckFailure {
                check: "prompts",
                expected: "2".to_string(),
                actual: "1".to_string(),
            }]
        );
    }

    #[test]
    fn closed_prompt_is_an_expected_error() {
        let fixture = parse_fixture(
            r#"
tokens = [{ text = "Paul", tag = "PROPN" }, { text = "dort", tag = "VERB" }]

[expect]
error = "gender-prompt-closed"
prompts = 1
"#,
        )
        .unwrap();
        assert!(assert_fixture("paul.toml", &fixture, &rewriter()).is_ok());
    }

    #[test]
    fn unexpected_success_fails_the_error_check() {
        let fixture = parse_fixture(
            r#"
tokens = [{ text = "Tu", tag = "PRON" }, { text = "dors", tag = "VERB" }]

[expect]
error = "unrecognizable-sentence"
"#,
        )
        .unwrap();
        let err = assert_fixture("tu.toml", &fixture, &rewriter()).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("FAIL: tu.toml [error]"), "{}", message);
        assert!(message.contains("dors-tu ?"), "{}", message);
    }

    #[test]
    fn expected_failures_are_not_regressions() {
        let broken = parse_fixture(&MARIE.replace("t-elle", "t-il")).unwrap();
        let fixtures = vec![("marie.toml".to_string(), broken)];

        let (harness, report) = run_all(&fixtures, &rewriter(), &ExpectedFailures::default());
        assert_eq!(harness.regressions, 1);
        assert!(report.contains("FAIL: marie.toml"));

        let expected: ExpectedFailures = toml::from_str(
            "[[known]]\nfixture = \"marie.toml\"\ncheck = \"question\"\n",
        )
        .unwrap();
        let (harness, report) = run_all(&fixtures, &rewriter(), &expected);
        assert!(harness.success());
        assert_eq!(harness.expected_failures, 1);
        assert_eq!(harness.passed, 2);
        assert!(report.contains("PASS: marie.toml"));
    }
}
