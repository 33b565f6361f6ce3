//! Board collection lifecycle across store instances.

use crate::in_memory::helpers::{Collaborators, confirming};
use rstest::rstest;
use taskflow::{
    board::{
        adapters::InMemoryBoardStorage,
        domain::{BoardId, DeletionOutcome},
        services::BoardStore,
    },
    confirm::adapters::ScriptedConfirmationHost,
    notify::{adapters::RecordingNotifier, domain::NotificationLevel},
};
use mockable::DefaultClock;
use std::sync::Arc;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn created_boards_survive_a_restart(confirming: Collaborators<ScriptedConfirmationHost>) {
    let store = confirming.open_store().await.expect("store should open");
    let created = store
        .create_board("Release", "Cut 1.0")
        .await
        .expect("board should be created");
    drop(store);

    let reopened = confirming.open_store().await.expect("store should reopen");

    let boards = reopened.boards().expect("state readable");
    assert_eq!(boards.len(), 3);
    assert_eq!(boards.last(), Some(&created));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deleted_boards_stay_deleted_after_a_restart(
    confirming: Collaborators<ScriptedConfirmationHost>,
) {
    let store = confirming.open_store().await.expect("store should open");
    let outcome = store
        .delete_board(&BoardId::from("2"))
        .await
        .expect("delete should succeed");
    assert_eq!(outcome, DeletionOutcome::Deleted);

    let reopened = confirming.open_store().await.expect("store should reopen");

    let ids: Vec<_> = reopened
        .list_boards()
        .expect("state readable")
        .into_iter()
        .map(|summary| summary.id)
        .collect();
    assert_eq!(ids, [BoardId::from("1")]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn an_emptied_collection_is_not_reseeded(
    confirming: Collaborators<ScriptedConfirmationHost>,
) {
    let store = confirming.open_store().await.expect("store should open");
    for id in ["1", "2"] {
        store
            .delete_board(&BoardId::from(id))
            .await
            .expect("delete should succeed");
    }

    let reopened = confirming.open_store().await.expect("store should reopen");

    assert!(reopened.boards().expect("state readable").is_empty());
    assert_eq!(confirming.storage.raw().as_deref(), Some("[]"));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn custom_storage_keys_are_isolated() {
    let storage = InMemoryBoardStorage::with_key("other-boards");
    let notifier = RecordingNotifier::new();
    let store = BoardStore::open(
        Arc::new(storage.clone()),
        Arc::new(ScriptedConfirmationHost::new()),
        Arc::new(notifier.clone()),
        Arc::new(DefaultClock),
    )
    .await
    .expect("store should open");

    store
        .create_board("Side project", "")
        .await
        .expect("board should be created");

    assert_eq!(storage.key(), "other-boards");
    assert!(storage.raw().is_some());
    assert_eq!(
        notifier.messages_at(NotificationLevel::Success),
        ["New board created!"]
    );
}
