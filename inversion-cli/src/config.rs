//! Console configuration file.
//!
//! ```toml
//! [tagger]
//! endpoint = "http://localhost:4566/"
//! language_code = "fr"
//! recordings = "data/recordings.json"
//!
//! [rewriter]
//! confidence_threshold = 0.9
//!
//! [vocabulary]
//! interrogatives = ["comment", "quand", "pourquoi"]
//! ```
//!
//! Every section is optional.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use inversion::{RewriterConfig, Vocabulary, DEFAULT_CONFIDENCE_THRESHOLD};
use inversion_tagger::FRENCH;
use serde::Deserialize;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub tagger: TaggerConfig,
    pub rewriter: RewriterSection,
    pub vocabulary: Vocabulary,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TaggerConfig {
    /// `DetectSyntax` endpoint. Ignored when `recordings` is set.
    pub endpoint: Option<String>,
    pub language_code: String,
    /// Recorded responses to replay instead of calling the endpoint.
    pub recordings: Option<PathBuf>,
}

impl Default for TaggerConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            language_code: FRENCH.to_string(),
            recordings: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RewriterSection {
    pub confidence_threshold: f64,
}

impl Default for RewriterSection {
    fn default() -> Self {
        Self {
            confidence_threshold: DEFAULT_CONFIDENCE_THRESHOLD,
        }
    }
}

impl AppConfig {
    /// Load from a TOML file. A missing file yields the defaults.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))
    }

    pub fn rewriter_config(&self) -> RewriterConfig {
        RewriterConfig {
            vocabulary: self.vocabulary.clone(),
            confidence_threshold: self.rewriter.confidence_threshold,
        }
    }
}
