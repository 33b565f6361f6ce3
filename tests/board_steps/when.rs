//! When steps for board BDD scenarios.

use super::world::{BoardWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::when;
use taskflow::board::domain::{BoardId, CardId, ListId};

#[when(r#"card "{card_id}" is dragged from list "{list_id}""#)]
fn card_is_dragged(
    world: &mut BoardWorld,
    card_id: String,
    list_id: String,
) -> Result<(), eyre::Report> {
    world
        .engine_mut()?
        .begin_drag(&ListId::from(list_id), &CardId::from(card_id))
        .wrap_err("begin dragging card")
}

#[when(r#"the card hovers over list "{list_id}""#)]
fn card_hovers(world: &mut BoardWorld, list_id: String) -> Result<(), eyre::Report> {
    world.engine_mut()?.hover(&ListId::from(list_id));
    Ok(())
}

#[when(r#"the card is dropped on list "{list_id}""#)]
fn card_is_dropped(world: &mut BoardWorld, list_id: String) -> Result<(), eyre::Report> {
    let target = ListId::from(list_id);
    let outcome = run_async(world.engine_mut()?.drop_on(&target)).wrap_err("drop card")?;
    world.last_drop = Some(outcome);
    Ok(())
}

#[when("the drag is cancelled")]
fn drag_is_cancelled(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    world.engine_mut()?.cancel_drag();
    Ok(())
}

#[when(r#"a board titled "{title}" is created"#)]
fn board_is_created(world: &mut BoardWorld, title: String) -> Result<(), eyre::Report> {
    let board = run_async(world.store()?.create_board(title, "")).wrap_err("create board")?;
    world.created_board = Some(board);
    Ok(())
}

#[when("a board with a blank title is created")]
fn blank_board_is_created(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    let result = run_async(world.store()?.create_board("   ", ""));
    if result.is_ok() {
        return Err(eyre::eyre!("blank board title was accepted"));
    }
    Ok(())
}

#[when(r#"list "{list_id}" is deleted"#)]
fn list_is_deleted(world: &mut BoardWorld, list_id: String) -> Result<(), eyre::Report> {
    let target = ListId::from(list_id);
    run_async(world.engine_mut()?.delete_list(&target)).wrap_err("delete list")?;
    Ok(())
}

#[when(r#"board "{board_id}" is deleted"#)]
fn board_is_deleted(world: &mut BoardWorld, board_id: String) -> Result<(), eyre::Report> {
    let target = BoardId::from(board_id);
    run_async(world.store()?.delete_board(&target)).wrap_err("delete board")?;
    Ok(())
}
