//! Expected failures tracking via TOML file.
//!
//! ```toml
//! [[known]]
//! fixture = "plural-subject.toml"
//! check = "question"
//! reason = "Inserted pronouns are always singular"
//! ```

use crate::errors::{SpecError, SpecResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExpectedFailures {
    /// Known failures (won't fix soon).
    #[serde(default)]
    pub known: Vec<FailureEntry>,
    /// Pending failures (awaiting fix).
    #[serde(default)]
    pub pending: Vec<FailureEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FailureEntry {
    /// Fixture path relative to the fixtures directory.
    pub fixture: String,
    /// Name of the failing check: "question", "error", "disclaimers" or "prompts".
    pub check: String,
    #[serde(default)]
    pub reason: Option<String>,
    /// Date added (YYYY-MM-DD).
    #[serde(default)]
    pub added: Option<String>,
    #[serde(default)]
    pub issue: Option<String>,
}

/// Failure lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureState {
    /// Known limitation, won't fix soon.
    Known,
    /// Awaiting fix, not blocking.
    Pending,
    /// Expected to pass - failure is a regression.
    Regression,
}

impl ExpectedFailures {
    /// Load from a TOML file; a missing file means no expected failures.
    pub fn load(path: &Path) -> SpecResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let load_error = |message: String| SpecError::Load {
            path: path.display().to_string(),
            message,
        };
        let content = fs::read_to_string(path).map_err(|e| load_error(e.to_string()))?;
        toml::from_str(&content).map_err(|e| load_error(e.to_string()))
    }

    pub fn is_expected(&self, fixture: &str, check: &str) -> FailureState {
        if self.find(&self.known, fixture, check).is_some() {
            return FailureState::Known;
        }
        if self.find(&self.pending, fixture, check).is_some() {
            return FailureState::Pending;
        }
        FailureState::Regression
    }

    fn find<'a>(
        &self,
        entries: &'a [FailureEntry],
        fixture: &str,
        check: &str,
    ) -> Option<&'a FailureEntry> {
        entries
            .iter()
            .find(|e| e.fixture == fixture && e.check == check)
    }

    pub fn count(&self) -> usize {
        self.known.len() + self.pending.len()
    }

    pub fn get_entry(&self, fixture: &str, check: &str) -> Option<&FailureEntry> {
        self.find(&self.known, fixture, check)
            .or_else(|| self.find(&self.pending, fixture, check))
    }
}

/// Result of running the harness.
#[derive(Debug, Clone, Default)]
pub struct HarnessResult {
    /// Total checks run.
    pub total: usize,
    pub passed: usize,
    /// Expected failures (known + pending).
    pub expected_failures: usize,
    /// Regressions (unexpected failures).
    pub regressions: usize,
}

impl HarnessResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the exit code (0 = pass, 1 = regressions).
    pub fn exit_code(&self) -> i32 {
        if self.regressions > 0 {
            1
        } else {
            0
        }
    }

    pub fn success(&self) -> bool {
        self.regressions == 0
    }

    pub fn record_pass(&mut self) {
        self.total += 1;
        self.passed += 1;
    }

    pub fn record_failure(&mut self, state: FailureState) {
        self.total += 1;
        match state {
            FailureState::Known | FailureState::Pending => {
                self.expected_failures += 1;
            }
            FailureState::Regression => {
                self.regressions += 1;
            }
        }
    }
}
