//! End-to-end flows on an open board.

use crate::in_memory::helpers::{Collaborators, card_ids, confirming};
use rstest::rstest;
use taskflow::{
    board::{
        domain::{BoardId, DropOutcome, ListId},
        services::BoardEngine,
    },
    confirm::adapters::ScriptedConfirmationHost,
    notify::domain::NotificationLevel,
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn a_new_board_supports_a_full_card_lifecycle(
    confirming: Collaborators<ScriptedConfirmationHost>,
) {
    let store = confirming.open_store().await.expect("store should open");
    let board = store
        .create_board("Sprint", "Two weeks")
        .await
        .expect("board should be created");
    let mut engine = BoardEngine::open(store, board.id()).expect("board should open");
    let todo = board.lists().first().expect("default lists").id().clone();
    let done = board.lists().last().expect("default lists").id().clone();

    let card = engine
        .add_card(&todo, "Write tests", "")
        .await
        .expect("card should be added");
    engine
        .add_label(&todo, card.id(), "quality")
        .await
        .expect("label should be added");
    engine.begin_drag(&todo, card.id()).expect("card exists");
    engine.hover(&done);
    let outcome = engine.drop_on(&done).await.expect("drop should succeed");

    assert_eq!(outcome, DropOutcome::Moved);
    let persisted = confirming
        .persisted_board(board.id())
        .expect("board persisted");
    assert_eq!(&persisted, engine.board());
    assert!(card_ids(&persisted, todo.as_str()).is_empty());
    let moved = persisted.card(&done, card.id()).expect("card moved");
    assert_eq!(moved.labels(), ["quality"]);
    assert_eq!(
        confirming.notifier.messages_at(NotificationLevel::Success),
        ["New board created!", "New card added"]
    );
    assert_eq!(
        confirming.notifier.messages_at(NotificationLevel::Info),
        ["Card moved to new list"]
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn engine_changes_are_visible_through_the_store(
    confirming: Collaborators<ScriptedConfirmationHost>,
) {
    let store = confirming.open_store().await.expect("store should open");
    let board_id = BoardId::from("2");
    let mut engine =
        BoardEngine::open(std::sync::Arc::clone(&store), &board_id).expect("board should open");

    engine
        .rename_list(&ListId::from("list-2-3"), "Shipped")
        .await
        .expect("rename should succeed");
    engine
        .add_list("Ideas")
        .await
        .expect("list should be added");

    let stored = store
        .board(&board_id)
        .expect("state readable")
        .expect("board exists");
    assert_eq!(&stored, engine.board());
    let titles: Vec<_> = stored.lists().iter().map(|list| list.title()).collect();
    assert_eq!(titles, ["To Do", "In Progress", "Shipped", "Ideas"]);
    let summary = store
        .list_boards()
        .expect("state readable")
        .into_iter()
        .find(|summary| summary.id == board_id)
        .expect("summary exists");
    assert_eq!(summary.list_count, 4);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn moving_every_card_keeps_the_card_count(
    confirming: Collaborators<ScriptedConfirmationHost>,
) {
    let store = confirming.open_store().await.expect("store should open");
    let mut engine = BoardEngine::open(store, &BoardId::from("1")).expect("board should open");
    let target = ListId::from("list-1-4");
    let before = engine.board().card_count();
    let sources: Vec<_> = engine
        .lists()
        .iter()
        .filter(|list| list.id() != &target)
        .flat_map(|list| {
            list.cards()
                .iter()
                .map(|card| (list.id().clone(), card.id().clone()))
                .collect::<Vec<_>>()
        })
        .collect();

    for (source, card_id) in &sources {
        engine.begin_drag(source, card_id).expect("card exists");
        engine.drop_on(&target).await.expect("drop should succeed");
    }

    assert_eq!(engine.board().card_count(), before);
    let target_list = engine.board().list(&target).expect("target exists");
    assert_eq!(target_list.cards().len(), before);
}
