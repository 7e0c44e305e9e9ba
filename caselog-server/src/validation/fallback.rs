// Fallback policy
//
// Try the primary validator; on any error use the fallback and keep the
// failure out of the user's way. With the local validator as fallback
// the composite never fails to judge.

use async_trait::async_trait;
use caselog_utils::data::{CreateSessionNoteInput, ValidationVerdict};
use log::warn;

use super::error::ValidationResult;
use super::local::LocalValidator;
use super::remote::RemoteValidator;
use super::validator::{Validator, ValidatorConfig};

/// Composite [`Validator`] implementing the fallback policy of record.
pub struct FallbackValidator {
    primary: Box<dyn Validator>,
    fallback: Box<dyn Validator>,
}

impl FallbackValidator {
    pub fn new(primary: Box<dyn Validator>, fallback: Box<dyn Validator>) -> Self {
        Self { primary, fallback }
    }

    /// The standard arrangement: remote service first, local rule as the
    /// fallback of record.
    pub fn remote_with_local(config: ValidatorConfig) -> Self {
        Self::new(
            Box::new(RemoteValidator::with_config(config)),
            Box::new(LocalValidator::new()),
        )
    }
}

#[async_trait]
impl Validator for FallbackValidator {
    async fn validate(
        &self,
        input: &CreateSessionNoteInput,
    ) -> ValidationResult<ValidationVerdict> {
        match self.primary.validate(input).await {
            Ok(verdict) => Ok(verdict),
            Err(e) => {
                warn!(
                    "caselog: {} validator unavailable, falling back to {}: {}",
                    self.primary.name(),
                    self.fallback.name(),
                    e
                );
                self.fallback.validate(input).await
            }
        }
    }

    fn name(&self) -> &str {
        "fallback"
    }
}
