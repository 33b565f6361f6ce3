//! Single-slot confirmation gate backed by tokio channels.

use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use tokio::sync::{oneshot, watch};
use tracing::debug;

use crate::confirm::{
    domain::{ConfirmDecision, ConfirmOptions, ConfirmationError, Prompt, PromptId},
    ports::{ConfirmationHost, ConfirmationResult},
};

/// Confirmation gate with capacity for exactly one open prompt.
///
/// The caller side awaits [`ConfirmationHost::confirm`]. The presentation
/// side watches [`ChannelConfirmationGate::subscribe`] for the open prompt,
/// keeps scroll and focus locked while [`ChannelConfirmationGate::is_open`]
/// holds, and answers with [`ChannelConfirmationGate::respond`].
///
/// Dropping the awaiting future withdraws its prompt.
#[derive(Debug)]
pub struct ChannelConfirmationGate {
    slot: Mutex<Option<PendingPrompt>>,
    announcer: watch::Sender<Option<Prompt>>,
}

#[derive(Debug)]
struct PendingPrompt {
    prompt_id: PromptId,
    responder: oneshot::Sender<ConfirmDecision>,
}

/// Withdraws an unanswered prompt when its caller stops waiting.
struct PromptGuard<'gate> {
    gate: &'gate ChannelConfirmationGate,
    prompt_id: PromptId,
}

impl Drop for PromptGuard<'_> {
    fn drop(&mut self) {
        self.gate.withdraw(self.prompt_id);
    }
}

impl Default for ChannelConfirmationGate {
    fn default() -> Self {
        Self::new()
    }
}

impl ChannelConfirmationGate {
    /// Creates a gate with no open prompt.
    #[must_use]
    pub fn new() -> Self {
        let (announcer, _initial_receiver) = watch::channel(None);
        Self {
            slot: Mutex::new(None),
            announcer,
        }
    }

    /// Subscribes to the open prompt. The value is `None` while idle.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Option<Prompt>> {
        self.announcer.subscribe()
    }

    /// Returns the open prompt, if any.
    #[must_use]
    pub fn pending(&self) -> Option<Prompt> {
        self.announcer.borrow().clone()
    }

    /// Returns `true` while a prompt waits for an answer.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.announcer.borrow().is_some()
    }

    /// Answers the open prompt.
    ///
    /// # Errors
    ///
    /// Returns [`ConfirmationError::NoPendingPrompt`] when nothing is open and
    /// [`ConfirmationError::StalePrompt`] when `prompt_id` is not the open
    /// prompt.
    pub fn respond(&self, prompt_id: PromptId, decision: ConfirmDecision) -> ConfirmationResult<()> {
        let open = {
            let mut slot = self.lock_slot();
            let current = slot
                .as_ref()
                .map(|pending| pending.prompt_id)
                .ok_or(ConfirmationError::NoPendingPrompt)?;
            if current != prompt_id {
                return Err(ConfirmationError::StalePrompt(prompt_id));
            }
            let taken = slot.take().ok_or(ConfirmationError::NoPendingPrompt)?;
            self.announcer.send_replace(None);
            taken
        };

        if open.responder.send(decision).is_err() {
            debug!(%prompt_id, "confirmation caller stopped waiting before the answer");
        }
        Ok(())
    }

    /// Dismisses whichever prompt is open, as an escape key would.
    ///
    /// # Errors
    ///
    /// Returns [`ConfirmationError::NoPendingPrompt`] when nothing is open.
    pub fn dismiss(&self) -> ConfirmationResult<()> {
        let prompt_id = self
            .pending()
            .map(|prompt| prompt.id())
            .ok_or(ConfirmationError::NoPendingPrompt)?;
        self.respond(prompt_id, ConfirmDecision::Dismissed)
    }

    fn open_prompt(
        &self,
        options: ConfirmOptions,
    ) -> ConfirmationResult<(PromptId, oneshot::Receiver<ConfirmDecision>)> {
        let mut slot = self.lock_slot();
        if let Some(open) = slot.as_ref() {
            return Err(ConfirmationError::AlreadyPending(open.prompt_id));
        }

        let prompt = Prompt::new(options);
        let prompt_id = prompt.id();
        let (responder, receiver) = oneshot::channel();
        *slot = Some(PendingPrompt {
            prompt_id,
            responder,
        });
        debug!(
            %prompt_id,
            kind = prompt.options().kind().as_str(),
            title = prompt.options().title(),
            "confirmation prompt opened"
        );
        self.announcer.send_replace(Some(prompt));
        Ok((prompt_id, receiver))
    }

    fn withdraw(&self, prompt_id: PromptId) {
        let mut slot = self.lock_slot();
        if slot
            .as_ref()
            .is_some_and(|pending| pending.prompt_id == prompt_id)
        {
            *slot = None;
            self.announcer.send_replace(None);
            debug!(%prompt_id, "confirmation prompt withdrawn");
        }
    }

    fn lock_slot(&self) -> MutexGuard<'_, Option<PendingPrompt>> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl ConfirmationHost for ChannelConfirmationGate {
    async fn confirm(&self, options: ConfirmOptions) -> ConfirmationResult<bool> {
        let (prompt_id, receiver) = self.open_prompt(options)?;
        let _guard = PromptGuard {
            gate: self,
            prompt_id,
        };
        let decision = receiver.await.unwrap_or(ConfirmDecision::Dismissed);
        debug!(%prompt_id, decision = decision.as_str(), "confirmation prompt resolved");
        Ok(decision.is_confirmed())
    }
}
