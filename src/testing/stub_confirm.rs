use std::sync::{Arc, Mutex};

use crate::domain::AppError;
use crate::ports::ConfirmPrompt;

/// Confirmation double with a canned answer, recording every prompt.
#[derive(Clone)]
pub struct StubConfirm {
    answer: bool,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl StubConfirm {
    pub fn answering(answer: bool) -> Self {
        Self { answer, prompts: Arc::new(Mutex::new(Vec::new())) }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

impl ConfirmPrompt for StubConfirm {
    fn confirm(&self, message: &str) -> Result<bool, AppError> {
        self.prompts.lock().unwrap().push(message.to_string());
        Ok(self.answer)
    }
}
