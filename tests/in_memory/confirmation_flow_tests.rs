//! Destructive operations answered through the channel gate.

use std::sync::Arc;

use crate::in_memory::helpers::{Collaborators, GatedEngine, GatedStore, gated};
use rstest::rstest;
use taskflow::{
    board::{
        domain::{BoardId, CardId, DeletionOutcome, ListId},
        services::{BoardEngine, BoardEngineError, BoardStoreError, BoardStoreResult},
    },
    confirm::{
        adapters::ChannelConfirmationGate,
        domain::{ConfirmDecision, ConfirmKind, ConfirmationError, Prompt},
    },
};
use tokio::sync::watch;

async fn next_prompt(receiver: &mut watch::Receiver<Option<Prompt>>) -> Prompt {
    loop {
        if let Some(prompt) = receiver.borrow_and_update().clone() {
            return prompt;
        }
        receiver
            .changed()
            .await
            .expect("gate should outlive the subscriber");
    }
}

async fn answer(gate: &ChannelConfirmationGate, decision: ConfirmDecision) -> Prompt {
    let mut receiver = gate.subscribe();
    let prompt = next_prompt(&mut receiver).await;
    gate.respond(prompt.id(), decision)
        .expect("open prompt should accept an answer");
    prompt
}

async fn open_sample(collaborators: &Collaborators<ChannelConfirmationGate>) -> GatedEngine {
    let store = collaborators
        .open_store()
        .await
        .expect("store should open");
    BoardEngine::open(store, &BoardId::from("1")).expect("sample board exists")
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn confirming_a_list_delete_applies_it(gated: Collaborators<ChannelConfirmationGate>) {
    let mut engine = open_sample(&gated).await;
    let list_id = ListId::from("list-1-1");

    let (outcome, prompt) = tokio::join!(
        engine.delete_list(&list_id),
        answer(&gated.confirmer, ConfirmDecision::Confirmed)
    );

    assert_eq!(outcome.expect("delete should succeed"), DeletionOutcome::Deleted);
    assert_eq!(prompt.options().title(), "Delete List");
    assert_eq!(prompt.options().kind(), ConfirmKind::Danger);
    assert!(engine.board().list(&list_id).is_none());
    assert!(!gated.confirmer.is_open());
}

#[rstest]
#[case(ConfirmDecision::Cancelled)]
#[case(ConfirmDecision::Dismissed)]
#[tokio::test(flavor = "multi_thread")]
async fn cancelling_a_card_delete_keeps_the_card(
    gated: Collaborators<ChannelConfirmationGate>,
    #[case] decision: ConfirmDecision,
) {
    let mut engine = open_sample(&gated).await;
    let list_id = ListId::from("list-1-3");
    let card_id = CardId::from("card-1-3-1");
    let before = gated.storage.raw();

    let (outcome, _) = tokio::join!(
        engine.delete_card(&list_id, &card_id),
        answer(&gated.confirmer, decision)
    );

    assert_eq!(outcome.expect("cancel is not an error"), DeletionOutcome::Declined);
    assert!(engine.board().card(&list_id, &card_id).is_some());
    assert_eq!(gated.storage.raw(), before);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn a_second_destructive_request_is_rejected_while_one_is_open(
    gated: Collaborators<ChannelConfirmationGate>,
) {
    let store = gated.open_store().await.expect("store should open");
    let mut engine =
        BoardEngine::open(Arc::clone(&store), &BoardId::from("1")).expect("board exists");

    let second = async {
        let mut receiver = gated.confirmer.subscribe();
        let prompt = next_prompt(&mut receiver).await;
        let rejected = delete_other_board(&store).await;
        gated
            .confirmer
            .respond(prompt.id(), ConfirmDecision::Cancelled)
            .expect("first prompt is still open");
        rejected
    };
    let list_id = ListId::from("list-1-1");
    let (first, rejected) = tokio::join!(engine.delete_list(&list_id), second);

    assert_eq!(first.expect("cancel is not an error"), DeletionOutcome::Declined);
    assert!(matches!(
        rejected,
        Err(BoardStoreError::Confirmation(
            ConfirmationError::AlreadyPending(_)
        ))
    ));
}

async fn delete_other_board(store: &GatedStore) -> BoardStoreResult<DeletionOutcome> {
    store.delete_board(&BoardId::from("2")).await
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deleting_a_missing_list_never_opens_a_prompt(
    gated: Collaborators<ChannelConfirmationGate>,
) {
    let mut engine = open_sample(&gated).await;

    let result = engine.delete_list(&ListId::from("missing")).await;

    assert!(matches!(result, Err(BoardEngineError::ListNotFound(_))));
    assert!(!gated.confirmer.is_open());
}
