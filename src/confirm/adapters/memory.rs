//! Scripted confirmation host for tests and headless use.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;

use crate::confirm::{
    domain::ConfirmOptions,
    ports::{ConfirmationHost, ConfirmationResult},
};

/// Answers prompts from a queue of scripted decisions.
///
/// When the queue is empty the fallback answer is used. Every prompt is
/// recorded so callers can assert on what was asked.
#[derive(Debug, Clone, Default)]
pub struct ScriptedConfirmationHost {
    state: Arc<Mutex<ScriptState>>,
}

#[derive(Debug, Default)]
struct ScriptState {
    answers: VecDeque<bool>,
    fallback: bool,
    asked: Vec<ConfirmOptions>,
}

impl ScriptedConfirmationHost {
    /// Creates a host that declines every prompt.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a host that confirms every prompt.
    #[must_use]
    pub fn always_confirm() -> Self {
        let host = Self::new();
        host.lock_state().fallback = true;
        host
    }

    /// Creates a host that declines every prompt.
    #[must_use]
    pub fn always_decline() -> Self {
        Self::new()
    }

    /// Queues answers to use before falling back.
    #[must_use]
    pub fn with_answers(self, answers: impl IntoIterator<Item = bool>) -> Self {
        self.lock_state().answers.extend(answers);
        self
    }

    /// Queues one more answer.
    pub fn push_answer(&self, answer: bool) {
        self.lock_state().answers.push_back(answer);
    }

    /// Returns every prompt shown so far, oldest first.
    #[must_use]
    pub fn asked(&self) -> Vec<ConfirmOptions> {
        self.lock_state().asked.clone()
    }

    /// Returns how many prompts have been shown.
    #[must_use]
    pub fn prompt_count(&self) -> usize {
        self.lock_state().asked.len()
    }

    fn lock_state(&self) -> MutexGuard<'_, ScriptState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl ConfirmationHost for ScriptedConfirmationHost {
    async fn confirm(&self, options: ConfirmOptions) -> ConfirmationResult<bool> {
        let mut state = self.lock_state();
        state.asked.push(options);
        let fallback = state.fallback;
        Ok(state.answers.pop_front().unwrap_or(fallback))
    }
}
