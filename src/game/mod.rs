//! Command layer: vocabulary, parsing, dialogue scripts, and the session
//! state machine that dispatches parsed commands against the world.

pub mod dialogue;
pub mod parser;
pub mod session;
pub mod vocab;

pub use dialogue::{script_for, DialogueEffect, DialogueScript, SCRIPTS};
pub use parser::{Command, Parser};
pub use session::{
    GamePhase, GameSession, Update, QUIT_SHUTDOWN_SECS, WIN_SHUTDOWN_SECS,
};
pub use vocab::{CommandWord, Vocabulary};
