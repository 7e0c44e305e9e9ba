// Remote validator
//
// POSTs the candidate note to the validation service and parses the
// verdict. The service answers 200 for both valid and invalid notes;
// anything else (or any transport failure) is a ValidationError and is
// left to the fallback policy to absorb.

use async_trait::async_trait;
use caselog_utils::data::{CreateSessionNoteInput, ValidationVerdict};
use isahc::config::Configurable;
use isahc::{AsyncReadResponseExt, Request};
use log::debug;
use std::time::Duration;

use super::error::{ValidationError, ValidationResult};
use super::validator::{Validator, ValidatorConfig};

/// HTTP-backed implementation of [`Validator`].
pub struct RemoteValidator {
    config: ValidatorConfig,
}

impl RemoteValidator {
    /// Create a remote validator for the given endpoint with the default
    /// call timeout.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_config(ValidatorConfig {
            endpoint: endpoint.into(),
            ..ValidatorConfig::default()
        })
    }

    pub fn with_config(config: ValidatorConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl Validator for RemoteValidator {
    async fn validate(
        &self,
        input: &CreateSessionNoteInput,
    ) -> ValidationResult<ValidationVerdict> {
        let body = serde_json::to_vec(input)?;

        let request = Request::post(self.config.endpoint.as_str())
            .timeout(Duration::from_secs(self.config.call_timeout_secs))
            .header("content-type", "application/json")
            .body(body)
            .map_err(|e| ValidationError::Unreachable(format!("invalid endpoint: {}", e)))?;

        let mut response = isahc::send_async(request).await.map_err(|e| {
            if e == isahc::error::ErrorKind::Timeout {
                ValidationError::Timeout {
                    duration_secs: self.config.call_timeout_secs,
                }
            } else {
                ValidationError::Unreachable(e.to_string())
            }
        })?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ValidationError::Unreachable(e.to_string()))?;

        if !status.is_success() {
            debug!(
                "caselog: validation service returned {} with body {:?}",
                status, text
            );
            return Err(ValidationError::UnexpectedStatus {
                status: status.as_u16(),
            });
        }

        let verdict: ValidationVerdict = serde_json::from_str(&text)?;
        Ok(verdict)
    }

    fn name(&self) -> &str {
        "remote"
    }
}
