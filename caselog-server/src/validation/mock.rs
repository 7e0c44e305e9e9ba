// Mock validator
//
// Test double for gateway and policy tests: returns a configured
// response and records every call. The counter and last-input slot are
// shared handles, so they stay observable after the mock moves into a
// composite or a gateway.

use async_trait::async_trait;
use caselog_utils::data::{CreateSessionNoteInput, ValidationVerdict};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use super::error::ValidationResult;
use super::validator::Validator;

pub struct MockValidator {
    name: String,

    /// Response to return from `validate()`
    response: Mutex<ValidationResult<ValidationVerdict>>,

    /// Count of `validate()` invocations
    call_count: Arc<AtomicUsize>,

    /// Last input passed to `validate()`
    last_input: Arc<Mutex<Option<CreateSessionNoteInput>>>,
}

impl MockValidator {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            response: Mutex::new(Ok(ValidationVerdict::pass())),
            call_count: Arc::new(AtomicUsize::new(0)),
            last_input: Arc::new(Mutex::new(None)),
        }
    }

    /// Set the response that `validate()` will return.
    pub fn set_response(&self, response: ValidationResult<ValidationVerdict>) {
        *self.response.lock().unwrap() = response;
    }

    /// Get the number of times `validate()` was invoked.
    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::Relaxed)
    }

    /// Shared handle to the invocation counter; survives moving the mock
    /// into a `Box<dyn Validator>`.
    pub fn call_counter(&self) -> Arc<AtomicUsize> {
        self.call_count.clone()
    }

    /// Get the last input passed to `validate()`.
    pub fn last_input(&self) -> Option<CreateSessionNoteInput> {
        self.last_input.lock().unwrap().clone()
    }
}

#[async_trait]
impl Validator for MockValidator {
    async fn validate(
        &self,
        input: &CreateSessionNoteInput,
    ) -> ValidationResult<ValidationVerdict> {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        *self.last_input.lock().unwrap() = Some(input.clone());

        self.response.lock().unwrap().clone()
    }

    fn name(&self) -> &str {
        &self.name
    }
}
