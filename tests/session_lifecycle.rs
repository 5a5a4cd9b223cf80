//! The naming handshake, quitting, and end-of-session behavior.

mod common;

use common::{run, text};
use otherworld::game::session::{GamePhase, GameSession, Update, QUIT_SHUTDOWN_SECS};

#[test]
fn welcome_asks_for_a_name() {
    let session = GameSession::new(false);
    let banner = text(&session.welcome());
    assert!(banner.contains("Welcome to the World of Tomorrow, stranger."));
    assert!(banner.contains("What would you like to be called?"));
    assert_eq!(session.phase(), GamePhase::NotStarted);
}

#[test]
fn first_line_is_a_name_not_a_command() {
    let mut session = GameSession::new(false);
    // "look" here is a name, not the look command.
    let updates = session.process_line("look");
    let greeting = text(&updates);
    assert!(greeting.contains("Enjoy your stay in the World of Tomorrow, look!"));
    assert!(greeting.contains("You are in the Physics Lab."));
    assert_eq!(session.phase(), GamePhase::Active);
}

#[test]
fn the_first_room_is_announced_to_the_presentation() {
    let mut session = GameSession::new(false);
    let updates = session.process_line("Al");
    assert!(updates.iter().any(|update| matches!(
        update,
        Update::RoomChanged { name, .. } if name == "Physics Lab"
    )));
}

#[test]
fn bare_quit_ends_the_session_with_a_delay() {
    let mut session = GameSession::new(false);
    session.process_line("Al");
    let updates = session.process_line("quit");
    assert!(text(&updates).contains("Thank you for playing. Good bye."));
    assert!(updates.contains(&Update::Shutdown {
        delay_secs: QUIT_SHUTDOWN_SECS
    }));
    assert_eq!(session.phase(), GamePhase::Ended);
}

#[test]
fn quit_with_arguments_is_ambiguous() {
    let mut session = GameSession::new(false);
    session.process_line("Al");
    assert_eq!(run(&mut session, &["quit now"]), "Quit what?");
    assert_eq!(session.phase(), GamePhase::Active);
}

#[test]
fn ended_sessions_ignore_all_input() {
    let mut session = GameSession::new(false);
    session.process_line("Al");
    session.process_line("quit");
    for input in ["look", "go east", "quit", ""] {
        assert!(session.process_line(input).is_empty());
    }
}

#[test]
fn fullscreen_round_trips_through_the_notification() {
    let mut session = GameSession::new(true);
    session.process_line("Al");
    // Session started fullscreen, so the first toggle goes windowed.
    let updates = session.process_line("fullscreen");
    assert!(text(&updates).contains("Entered Windowed Mode."));
    assert!(updates.contains(&Update::DisplayMode(false)));
}

#[test]
fn help_narrates_the_goal_and_the_vocabulary() {
    let mut session = GameSession::new(false);
    session.process_line("Al");
    let help = run(&mut session, &["help"]);
    assert!(help.contains("You are lost in a strange world"));
    assert!(help.contains("go back look talk bag take give drop quit help fullscreen use"));
}
