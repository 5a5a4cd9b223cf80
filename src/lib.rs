//! # Otherworld - a text adventure engine
//!
//! Otherworld is a small text adventure: the player wakes up stranded in
//! the World of Tomorrow, wanders a fixed graph of rooms, barters items
//! with its inhabitants, and works a short quest chain toward the portal
//! home. Commands are two or three words ("go east", "give money
//! banker"); everything else is narrative output.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use otherworld::game::session::GameSession;
//!
//! let mut session = GameSession::new(false);
//! for update in session.welcome() {
//!     // hand updates to your presentation layer
//!     let _ = update;
//! }
//! let _updates = session.process_line("Al"); // first line is the name
//! let _updates = session.process_line("go east");
//! ```
//!
//! ## Module Organization
//!
//! - [`world`] - rooms, items, characters, the player, and the canonical
//!   authored campaign
//! - [`game`] - vocabulary, parser, dialogue scripts, and the session
//!   state machine
//! - [`ui`] - the default terminal presentation for session updates
//! - [`config`] - TOML configuration (display mode, logging)
//! - [`logutil`] - log sanitization for free-text player input
//!
//! ## Architecture
//!
//! ```text
//! raw input line
//!       |
//!   Parser ──> Command ──> GameSession dispatch
//!                               |
//!                 Room graph / Player / Characters
//!                               |
//!                        Vec<Update> ──> presentation
//! ```
//!
//! The core is synchronous and single-threaded: one input line produces
//! one complete dispatch-and-respond cycle. The binary wraps it in an
//! async stdin loop and handles the delayed process teardown that `quit`
//! and the win sequence request.

pub mod config;
pub mod game;
pub mod logutil;
pub mod ui;
pub mod world;
