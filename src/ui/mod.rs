//! Terminal presentation layer.
//!
//! The session core never prints; it emits [`Update`] events and this
//! module turns them into terminal output. Shutdown requests are not
//! acted on here either - the binary owns process lifecycle, so
//! `render` only reports the requested delay back to the caller.

use log::debug;

use crate::game::session::Update;

/// Minimal terminal renderer for session updates.
pub struct TerminalUi {
    fullscreen: bool,
}

impl TerminalUi {
    pub fn new(fullscreen: bool) -> Self {
        Self { fullscreen }
    }

    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    /// Renders updates in order. Returns the teardown delay if any
    /// update requested a shutdown.
    pub fn render(&mut self, updates: &[Update]) -> Option<u64> {
        let mut shutdown_delay = None;
        for update in updates {
            match update {
                Update::Line(text) => println!("{text}"),
                Update::RoomChanged { name, scene } => {
                    debug!("scene changed: name={name} scene={scene}");
                    if self.fullscreen && !name.is_empty() {
                        println!("=== {name} ===");
                    }
                }
                Update::DisplayMode(on) => {
                    self.fullscreen = *on;
                }
                Update::Shutdown { delay_secs } => {
                    shutdown_delay = Some(*delay_secs);
                }
            }
        }
        shutdown_delay
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_shutdown_delay() {
        let mut ui = TerminalUi::new(false);
        assert_eq!(ui.render(&[Update::Line("bye".to_string())]), None);
        assert_eq!(
            ui.render(&[
                Update::Line("bye".to_string()),
                Update::Shutdown { delay_secs: 3 },
            ]),
            Some(3)
        );
    }

    #[test]
    fn tracks_display_mode() {
        let mut ui = TerminalUi::new(false);
        ui.render(&[Update::DisplayMode(true)]);
        assert!(ui.is_fullscreen());
        ui.render(&[Update::DisplayMode(false)]);
        assert!(!ui.is_fullscreen());
    }
}
