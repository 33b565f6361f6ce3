//! Then steps for board BDD scenarios.

use super::world::{BoardWorld, split_list};
use rstest_bdd_macros::then;
use taskflow::{
    board::domain::{DropOutcome, ListId},
    notify::domain::NotificationLevel,
};

#[then(r#"the drop outcome is "{outcome}""#)]
fn drop_outcome_is(world: &BoardWorld, outcome: String) -> Result<(), eyre::Report> {
    let expected = match outcome.as_str() {
        "moved" => DropOutcome::Moved,
        "unchanged" => DropOutcome::Unchanged,
        other => return Err(eyre::eyre!("unknown drop outcome in scenario: {other}")),
    };
    if world.last_drop != Some(expected) {
        return Err(eyre::eyre!(
            "expected drop outcome {expected:?}, found {:?}",
            world.last_drop
        ));
    }
    Ok(())
}

#[then(r#"list "{list_id}" holds cards "{card_ids}""#)]
fn list_holds_cards(
    world: &BoardWorld,
    list_id: String,
    card_ids: String,
) -> Result<(), eyre::Report> {
    let board = world.engine()?.board();
    let list = board
        .list(&ListId::from(list_id.as_str()))
        .ok_or_else(|| eyre::eyre!("list {list_id} not on the open board"))?;
    let actual: Vec<_> = list
        .cards()
        .iter()
        .map(|card| card.id().as_str().to_owned())
        .collect();
    let expected = split_list(&card_ids);
    if actual != expected {
        return Err(eyre::eyre!(
            "expected cards {expected:?} in {list_id}, found {actual:?}"
        ));
    }
    Ok(())
}

#[then("no card is being dragged")]
fn no_card_is_dragged(world: &BoardWorld) -> Result<(), eyre::Report> {
    let engine = world.engine()?;
    if engine.drag_state().is_dragging() || engine.hovered_list().is_some() {
        return Err(eyre::eyre!("drag is still in progress"));
    }
    Ok(())
}

#[then(r#"the notification "{message}" was shown"#)]
fn notification_was_shown(world: &BoardWorld, message: String) -> Result<(), eyre::Report> {
    let shown = world
        .notifier
        .notifications()
        .iter()
        .any(|notification| notification.message() == message);
    if !shown {
        return Err(eyre::eyre!("notification {message:?} was not shown"));
    }
    Ok(())
}

#[then(r#"the error "{message}" was shown"#)]
fn error_was_shown(world: &BoardWorld, message: String) -> Result<(), eyre::Report> {
    let errors = world.notifier.messages_at(NotificationLevel::Error);
    if !errors.contains(&message) {
        return Err(eyre::eyre!("error {message:?} not among {errors:?}"));
    }
    Ok(())
}

#[then(r#"the new board has lists "{titles}""#)]
fn new_board_has_lists(world: &BoardWorld, titles: String) -> Result<(), eyre::Report> {
    let board = world
        .created_board
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing created board in scenario world"))?;
    let actual: Vec<_> = board
        .lists()
        .iter()
        .map(|list| list.title().to_owned())
        .collect();
    let expected = split_list(&titles);
    if actual != expected {
        return Err(eyre::eyre!("expected lists {expected:?}, found {actual:?}"));
    }
    Ok(())
}

#[then("there are {count:usize} boards")]
fn there_are_boards(world: &BoardWorld, count: usize) -> Result<(), eyre::Report> {
    let actual = world
        .store()?
        .boards()
        .map_err(|err| eyre::eyre!("read boards: {err}"))?
        .len();
    if actual != count {
        return Err(eyre::eyre!("expected {count} boards, found {actual}"));
    }
    Ok(())
}

#[then("the open board has {lists:usize} lists and {cards:usize} cards")]
fn open_board_has(world: &BoardWorld, lists: usize, cards: usize) -> Result<(), eyre::Report> {
    let board = world.engine()?.board();
    if board.lists().len() != lists || board.card_count() != cards {
        return Err(eyre::eyre!(
            "expected {lists} lists and {cards} cards, found {} and {}",
            board.lists().len(),
            board.card_count()
        ));
    }
    Ok(())
}
