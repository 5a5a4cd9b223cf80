//! Test utilities shared by the integration suites.

use otherworld::game::session::{GameSession, Update};

/// Starts a fresh session and consumes the naming handshake.
#[allow(dead_code)] // Each test binary compiles this file; not all use every helper.
pub fn started(name: &str) -> GameSession {
    let mut session = GameSession::new(false);
    session.process_line(name);
    session
}

/// All narrative text from a batch of updates, newline-joined.
#[allow(dead_code)]
pub fn text(updates: &[Update]) -> String {
    updates
        .iter()
        .filter_map(|update| match update {
            Update::Line(line) => Some(line.as_str()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Runs a scripted command sequence, returning the final batch's text.
#[allow(dead_code)]
pub fn run(session: &mut GameSession, commands: &[&str]) -> String {
    let mut last = String::new();
    for command in commands {
        last = text(&session.process_line(command));
    }
    last
}
