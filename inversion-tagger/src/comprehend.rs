//! Tagging through a Comprehend-compatible `DetectSyntax` endpoint.
//!
//! Requests are sent unsigned; point the endpoint at a signing proxy or a
//! local emulator.

use std::time::Duration;

use inversion::{InversionError, InversionResult, TokenSequence};
use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;

use crate::syntax::{DetectSyntaxRequest, DetectSyntaxResponse};
use crate::Tagger;

const TARGET_HEADER: &str = "X-Amz-Target";
const DETECT_SYNTAX_TARGET: &str = "Comprehend_20171127.DetectSyntax";
const AMZ_JSON: &str = "application/x-amz-json-1.1";

/// Blocking `DetectSyntax` client.
pub struct ComprehendTagger {
    client: Client,
    endpoint: String,
}

impl ComprehendTagger {
    pub fn new(endpoint: impl Into<String>) -> InversionResult<Self> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .build()
            .map_err(InversionError::tagging_unavailable)?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Tagger for ComprehendTagger {
    fn detect_syntax(&self, text: &str, language_code: &str) -> InversionResult<TokenSequence> {
        let body = serde_json::to_vec(&DetectSyntaxRequest {
            text,
            language_code,
        })
        .map_err(InversionError::tagging_unavailable)?;

        let response = self
            .client
            .post(&self.endpoint)
            .header(TARGET_HEADER, DETECT_SYNTAX_TARGET)
            .header(CONTENT_TYPE, AMZ_JSON)
            .body(body)
            .send()
            .and_then(|response| response.error_for_status())
            .map_err(|e| {
                tracing::error!(endpoint = %self.endpoint, error = %e, "couldn't detect syntax");
                InversionError::tagging_unavailable(e)
            })?;

        let parsed: DetectSyntaxResponse = response
            .json()
            .map_err(InversionError::tagging_unavailable)?;
        tracing::info!("detected {} syntax tokens", parsed.syntax_tokens.len());

        parsed.to_sequence(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unreachable_endpoint_is_tagging_unavailable() {
        // Nothing listens on the discard port locally.
        let tagger = ComprehendTagger::new("http://127.0.0.1:9/").unwrap();
        let err = tagger.detect_syntax("Tu viens", "fr").unwrap_err();
        assert!(matches!(err, InversionError::TaggingUnavailable { .. }));
        assert!(err.is_recoverable());
    }
}
