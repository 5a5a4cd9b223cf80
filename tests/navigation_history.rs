//! Movement, missing doors, and the go-back history stack.

mod common;

use common::{run, started, text};

#[test]
fn go_without_direction_prompts() {
    let mut session = started("Al");
    assert_eq!(run(&mut session, &["go"]), "Go where?");
}

#[test]
fn undefined_exit_leaves_player_in_place() {
    let mut session = started("Al");
    let before = run(&mut session, &["look"]);
    assert_eq!(run(&mut session, &["go north"]), "There is no door!");
    let after = run(&mut session, &["look"]);
    assert_eq!(before, after);
    assert!(after.contains("You are in the Physics Lab."));
}

#[test]
fn movement_emits_the_new_room_description() {
    let mut session = started("Al");
    let arrival = run(&mut session, &["go east"]);
    assert!(arrival.contains("You are in the Hallway (Lower Ground)."));
    assert!(arrival.contains("Items in the room: Flashlight"));
}

#[test]
fn back_pops_one_room_at_a_time() {
    let mut session = started("Al");
    run(&mut session, &["go east", "go east"]);
    let first = run(&mut session, &["back"]);
    assert!(first.contains("You are in the Hallway (Lower Ground)."));
    let second = run(&mut session, &["back"]);
    assert!(second.contains("You are in the Physics Lab."));
    assert_eq!(run(&mut session, &["back"]), "You can't go back to nothing");
}

#[test]
fn back_with_empty_history_is_narrated() {
    let mut session = started("Al");
    assert_eq!(run(&mut session, &["back"]), "You can't go back to nothing");
    let here = run(&mut session, &["look"]);
    assert!(here.contains("You are in the Physics Lab."));
}

#[test]
fn back_with_arguments_reprompts() {
    let mut session = started("Al");
    assert_eq!(run(&mut session, &["back home"]), "Back where?");
}

#[test]
fn back_does_not_repush_the_room_being_left() {
    let mut session = started("Al");
    // lab -> hallway, back to lab; history must now be empty rather than
    // holding the hallway.
    run(&mut session, &["go east", "back"]);
    assert_eq!(run(&mut session, &["back"]), "You can't go back to nothing");
}

#[test]
fn garden_hole_is_a_one_way_shortcut() {
    let mut session = started("Al");
    let garden = run(&mut session, &["go east", "go upstairs", "go east", "go east"]);
    assert!(garden.contains("You are in the Garden."));
    let dropped = run(&mut session, &["go hole"]);
    assert!(dropped.contains("You are in the Computing Lab."));
    assert_eq!(run(&mut session, &["go hole"]), "There is no door!");
}

#[test]
fn look_is_idempotent() {
    let mut session = started("Al");
    run(&mut session, &["go east"]);
    let first = text(&session.process_line("look"));
    let second = text(&session.process_line("look"));
    assert_eq!(first, second);
}
