//! Game session lifecycle and command dispatch.
//!
//! A session moves through three phases: awaiting the player's name,
//! actively dispatching gameplay commands, and ended. One input line
//! produces one complete dispatch-and-respond cycle; all output goes to
//! the presentation layer as an ordered list of [`Update`] events, and
//! no handler ever surfaces a raw error.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use log::{debug, info};

use crate::game::dialogue::{self, DialogueEffect};
use crate::game::parser::{Command, Parser};
use crate::game::vocab::CommandWord;
use crate::logutil::escape_log;
use crate::world::errors::WorldError;
use crate::world::graph::World;
use crate::world::player::Player;
use crate::world::seed::{
    canonical_world, combo_effect, ComboEffect, MACHINE_ITEM, PORTAL_DIRECTION, START_ROOM_ID,
    TERMINAL_ROOM_ID,
};
use crate::world::types::{DialogueState, StoryFlags};

/// Seconds between a bare `quit` and process teardown.
pub const QUIT_SHUTDOWN_SECS: u64 = 3;

/// Seconds between the win screen and process teardown.
pub const WIN_SHUTDOWN_SECS: u64 = 7;

/// Fallback narration when the player's room id resolves to nothing.
const LOST_LINE: &str = "You seem to be lost! This place is not on any map.";

/// Lifecycle of one interactive game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// The next input line is the player's chosen name, not a command.
    NotStarted,
    /// Gameplay commands are being dispatched.
    Active,
    /// Terminal. Input is ignored while teardown is pending.
    Ended,
}

/// Events handed to the presentation layer, in emission order.
#[derive(Debug, Clone, PartialEq)]
pub enum Update {
    /// A block of narrative text.
    Line(String),
    /// The player's room changed; carries the scene reference so the
    /// presentation can redraw.
    RoomChanged { name: String, scene: String },
    /// The display-mode flag was toggled.
    DisplayMode(bool),
    /// Process teardown was requested after the given delay.
    Shutdown { delay_secs: u64 },
}

fn line(text: impl Into<String>) -> Update {
    Update::Line(text.into())
}

/// One interactive game from greeting to teardown.
pub struct GameSession {
    phase: GamePhase,
    parser: Parser,
    fullscreen: bool,
    game: Option<ActiveGame>,
}

/// World and story state that only exists once the player is named.
struct ActiveGame {
    world: World,
    player: Player,
    flags: StoryFlags,
    dialogue: HashMap<String, DialogueState>,
    started_at: DateTime<Utc>,
}

impl GameSession {
    pub fn new(fullscreen: bool) -> Self {
        Self {
            phase: GamePhase::NotStarted,
            parser: Parser::new(),
            fullscreen,
            game: None,
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Opening banner shown before the first input line.
    pub fn welcome(&self) -> Vec<Update> {
        vec![
            line(""),
            line("Welcome to the World of Tomorrow, stranger."),
            line("What would you like to be called?"),
        ]
    }

    /// Feeds one raw input line through the session state machine.
    pub fn process_line(&mut self, raw: &str) -> Vec<Update> {
        match self.phase {
            GamePhase::Ended => Vec::new(),
            GamePhase::NotStarted => self.start_game(raw),
            GamePhase::Active => {
                let cmd = self.parser.parse(raw);
                debug!(
                    "command dispatched: input={} parsed={:?}",
                    escape_log(raw),
                    cmd.word()
                );
                self.dispatch(&cmd)
            }
        }
    }

    /// Consumes the player's chosen name and builds the world. The name
    /// is taken verbatim; even an empty string is accepted.
    fn start_game(&mut self, name: &str) -> Vec<Update> {
        info!("game started: player={}", escape_log(name));
        let game = ActiveGame::new(name);
        let mut updates = Vec::new();
        if let Ok(update) = game.room_update() {
            updates.push(update);
        }
        updates.push(line(format!(
            "Enjoy your stay in the World of Tomorrow, {}!",
            game.player.name
        )));
        updates.push(line("Type 'fullscreen' to toggle Fullscreen mode."));
        updates.push(line("Type 'help' if you need help."));
        updates.push(line(""));
        match game.long_description() {
            Ok(text) => updates.push(line(text)),
            Err(_) => updates.push(line(LOST_LINE)),
        }
        self.game = Some(game);
        self.phase = GamePhase::Active;
        updates
    }

    fn dispatch(&mut self, cmd: &Command) -> Vec<Update> {
        match cmd.word() {
            CommandWord::Unknown => vec![line("I don't know what you mean...")],
            CommandWord::Go => self.handle_go(cmd),
            CommandWord::Back => self.handle_back(cmd),
            CommandWord::Look => self.handle_look(),
            CommandWord::Talk => self.handle_talk(cmd),
            CommandWord::Bag => self.handle_bag(),
            CommandWord::Take => self.handle_take(cmd),
            CommandWord::Drop => self.handle_drop(cmd),
            CommandWord::Give => self.handle_give(cmd),
            CommandWord::Use => self.handle_use(cmd),
            CommandWord::Quit => self.handle_quit(cmd),
            CommandWord::Help => self.handle_help(),
            CommandWord::Fullscreen => self.handle_fullscreen(),
        }
    }

    fn handle_go(&mut self, cmd: &Command) -> Vec<Update> {
        let Some(direction) = cmd.second_word().map(str::to_string) else {
            return vec![line("Go where?")];
        };
        let Some(game) = self.game.as_mut() else {
            return Vec::new();
        };
        let destination = {
            let room = match game.world.room(&game.player.location) {
                Ok(room) => room,
                Err(_) => return vec![line(LOST_LINE)],
            };
            match room.exit(&direction) {
                Some(dest) => dest.to_string(),
                None => return vec![line("There is no door!")],
            }
        };

        if destination == TERMINAL_ROOM_ID {
            // The portal exit only exists after the fuel combo, but the
            // precondition is checked here as well so a stray exit can
            // never skip the quest.
            if !game.flags.portal_usable() {
                return vec![line("The machine has no fuel.")];
            }
            game.player.push_history();
            game.player.enter(&destination);
            let mut updates = Vec::new();
            if let Ok(update) = game.room_update() {
                updates.push(update);
            }
            updates.push(line("Congratulations!!!!!!!"));
            let tally = if game.flags.side_story_complete() {
                "Yes"
            } else {
                "No"
            };
            updates.push(line(format!(
                "You have escaped the World of Tomorrow and returned to your world!\n\n\
Sidestory completed: {tally}"
            )));
            updates.push(line(format!("\n\nTime taken: {}", game.elapsed_display())));
            updates.push(line("\n\nThank you for playing. Good bye."));
            updates.push(Update::Shutdown {
                delay_secs: WIN_SHUTDOWN_SECS,
            });
            info!(
                "game won: player={} elapsed={}",
                escape_log(&game.player.name),
                game.elapsed_display()
            );
            self.phase = GamePhase::Ended;
            return updates;
        }

        game.player.push_history();
        game.player.enter(&destination);
        let mut updates = Vec::new();
        if let Ok(update) = game.room_update() {
            updates.push(update);
        }
        match game.long_description() {
            Ok(text) => updates.push(line(text)),
            Err(_) => updates.push(line(LOST_LINE)),
        }
        updates
    }

    fn handle_back(&mut self, cmd: &Command) -> Vec<Update> {
        if cmd.has_second_word() {
            return vec![line("Back where?")];
        }
        let Some(game) = self.game.as_mut() else {
            return Vec::new();
        };
        match game.player.pop_history() {
            None => vec![line("You can't go back to nothing")],
            Some(previous) => {
                game.player.enter(&previous);
                let mut updates = Vec::new();
                if let Ok(update) = game.room_update() {
                    updates.push(update);
                }
                match game.long_description() {
                    Ok(text) => updates.push(line(text)),
                    Err(_) => updates.push(line(LOST_LINE)),
                }
                updates
            }
        }
    }

    fn handle_look(&mut self) -> Vec<Update> {
        let Some(game) = self.game.as_ref() else {
            return Vec::new();
        };
        match game.long_description() {
            Ok(text) => vec![line(text)],
            Err(_) => vec![line(LOST_LINE)],
        }
    }

    fn handle_bag(&mut self) -> Vec<Update> {
        let Some(game) = self.game.as_ref() else {
            return Vec::new();
        };
        vec![line(game.player.carried_summary())]
    }

    fn handle_take(&mut self, cmd: &Command) -> Vec<Update> {
        let Some(item_name) = cmd.second_word().map(str::to_string) else {
            return vec![line("What do you want to take?")];
        };
        let Some(game) = self.game.as_mut() else {
            return Vec::new();
        };
        let room = match game.world.room_mut(&game.player.location) {
            Ok(room) => room,
            Err(_) => return vec![line(LOST_LINE)],
        };
        match game.player.pick_up(room, &item_name) {
            Ok(item) => vec![line(format!("Picked up {}.", item.description))],
            Err(WorldError::ItemNotHere(name)) => {
                vec![line(format!("There is no item called {name} here."))]
            }
            Err(WorldError::OverCapacity(_)) => {
                vec![line("You cannot fit this item into your bag.")]
            }
            Err(_) => vec![line(LOST_LINE)],
        }
    }

    fn handle_drop(&mut self, cmd: &Command) -> Vec<Update> {
        let Some(item_name) = cmd.second_word().map(str::to_string) else {
            return vec![line("What do you want to drop?")];
        };
        let Some(game) = self.game.as_mut() else {
            return Vec::new();
        };
        let room = match game.world.room_mut(&game.player.location) {
            Ok(room) => room,
            Err(_) => return vec![line(LOST_LINE)],
        };
        match game.player.drop_item(room, &item_name) {
            Ok(()) => vec![line(format!("Dropped {item_name}."))],
            Err(_) => vec![line(format!("You don't carry the item: {item_name}."))],
        }
    }

    fn handle_give(&mut self, cmd: &Command) -> Vec<Update> {
        let Some(item_name) = cmd.second_word().map(str::to_string) else {
            return vec![line("What do you want to give?")];
        };
        let Some(target_name) = cmd.third_word().map(str::to_string) else {
            return vec![line("Who do you want to give the item to?")];
        };
        let Some(game) = self.game.as_mut() else {
            return Vec::new();
        };
        let room = match game.world.room_mut(&game.player.location) {
            Ok(room) => room,
            Err(_) => return vec![line(LOST_LINE)],
        };
        let Some(target) = room.characters.get_mut(&target_name) else {
            return vec![line(format!(
                "There is no-one called {target_name} in this room."
            ))];
        };
        if !game.player.bag.contains(&item_name) {
            return vec![line(format!("You do not have {item_name}."))];
        }
        match target.wants.as_deref() {
            None => vec![line(format!("{} does not want any item.", target.name))],
            Some(wanted) if wanted != item_name => {
                vec![line(format!("{} does not want {item_name}.", target.name))]
            }
            Some(_) => match game.player.give(target, &item_name) {
                Ok(()) => {
                    target.wants = None;
                    vec![line(format!(
                        "You have given {item_name} to {}.",
                        target.name
                    ))]
                }
                Err(_) => vec![line(format!("You do not have {item_name}."))],
            },
        }
    }

    fn handle_talk(&mut self, cmd: &Command) -> Vec<Update> {
        let Some(actor_name) = cmd.second_word().map(str::to_string) else {
            return vec![line("Who do you want to talk to?")];
        };
        let Some(game) = self.game.as_mut() else {
            return Vec::new();
        };
        game.talk_to(&actor_name)
    }

    fn handle_use(&mut self, cmd: &Command) -> Vec<Update> {
        let Some(item_name) = cmd.second_word().map(str::to_string) else {
            return vec![line("What do you want to use?")];
        };
        let Some(target_name) = cmd.third_word().map(str::to_string) else {
            return vec![line("What do you want to use the item on?")];
        };
        let Some(game) = self.game.as_mut() else {
            return Vec::new();
        };
        match game.player.bag.get(&item_name) {
            None => return vec![line(format!("You do not have {item_name}."))],
            Some(item) if !item.usable => {
                return vec![line(format!("{item_name} cannot be used."))];
            }
            Some(_) => {}
        }
        {
            let room = match game.world.room(&game.player.location) {
                Ok(room) => room,
                Err(_) => return vec![line(LOST_LINE)],
            };
            match room.items.get(&target_name) {
                None => {
                    return vec![line(format!("The room does not contain {target_name}."))];
                }
                Some(target) if !target.usable_on => {
                    return vec![line(format!("You cannot use an item on {target_name}."))];
                }
                Some(_) => {}
            }
        }

        // The item is spent whether or not the pair is an authored combo.
        let mut updates = Vec::new();
        if game.player.consume(&item_name).is_ok() {
            if let Some(effect) = combo_effect(&item_name, &target_name) {
                match effect {
                    ComboEffect::OpenPortal => {
                        let location = game.player.location.clone();
                        if game
                            .world
                            .add_exit(&location, PORTAL_DIRECTION, TERMINAL_ROOM_ID)
                            .is_ok()
                        {
                            updates.push(line("You have created a portal!"));
                        }
                    }
                }
            }
        }
        updates
    }

    fn handle_quit(&mut self, cmd: &Command) -> Vec<Update> {
        if cmd.has_second_word() {
            return vec![line("Quit what?")];
        }
        info!("game quit by player");
        self.phase = GamePhase::Ended;
        vec![
            line("Thank you for playing. Good bye."),
            Update::Shutdown {
                delay_secs: QUIT_SHUTDOWN_SECS,
            },
        ]
    }

    fn handle_help(&mut self) -> Vec<Update> {
        vec![
            line("You are lost in a strange world, hoping to find a way back to the real world."),
            line(""),
            line(format!(
                "Your command words are: {}",
                self.parser.command_list()
            )),
        ]
    }

    fn handle_fullscreen(&mut self) -> Vec<Update> {
        self.fullscreen = !self.fullscreen;
        let text = if self.fullscreen {
            "Entered Fullscreen Mode."
        } else {
            "Entered Windowed Mode."
        };
        vec![line(text), Update::DisplayMode(self.fullscreen)]
    }
}

impl ActiveGame {
    fn new(player_name: &str) -> Self {
        Self {
            world: canonical_world(),
            player: Player::new(player_name, START_ROOM_ID),
            flags: StoryFlags::default(),
            dialogue: HashMap::new(),
            started_at: Utc::now(),
        }
    }

    fn room_update(&self) -> Result<Update, WorldError> {
        let room = self.world.room(&self.player.location)?;
        Ok(Update::RoomChanged {
            name: room.name.clone(),
            scene: room.scene.clone(),
        })
    }

    /// Current room description plus the carried-items summary.
    fn long_description(&self) -> Result<String, WorldError> {
        let room = self.world.room(&self.player.location)?;
        Ok(format!("{}\n{}", room.describe(), self.player.carried_summary()))
    }

    fn elapsed_display(&self) -> String {
        let seconds = Utc::now()
            .signed_duration_since(self.started_at)
            .num_seconds()
            .max(0);
        format!(
            "{:02}:{:02}:{:02}",
            seconds / 3600,
            (seconds / 60) % 60,
            seconds % 60
        )
    }

    fn advance_dialogue(&mut self, actor_key: &str, to: DialogueState) {
        let entry = self.dialogue.entry(actor_key.to_string()).or_default();
        if *entry < to {
            *entry = to;
        }
    }

    /// Runs one conversation beat with the named actor.
    fn talk_to(&mut self, actor_key: &str) -> Vec<Update> {
        let location = self.player.location.clone();
        let (display, still_wanting) = {
            let room = match self.world.room(&location) {
                Ok(room) => room,
                Err(_) => return vec![line(LOST_LINE)],
            };
            match room.characters.get(actor_key) {
                Some(actor) => (actor.name.clone(), actor.wants.is_some()),
                None => {
                    return vec![line(format!(
                        "There is no-one called {actor_key} in this room."
                    ))]
                }
            }
        };
        let Some(script) = dialogue::script_for(actor_key) else {
            return vec![line(format!("{display} has nothing to say."))];
        };
        let state = self.dialogue.get(actor_key).copied().unwrap_or_default();
        let player_name = self.player.name.clone();

        if still_wanting {
            let template = if state == DialogueState::Stranger {
                script.wants_first
            } else {
                script.wants_repeat
            };
            self.advance_dialogue(actor_key, DialogueState::Acquainted);
            return vec![line(dialogue::render(template, &player_name, ""))];
        }

        if state == DialogueState::Rewarded {
            return vec![line(dialogue::render(
                script.acknowledgement,
                &player_name,
                "",
            ))];
        }

        // First satisfied visit: apply the one-time effects in authored
        // order, then narrate the reward followed by any handoff receipt.
        let mut gift_label = String::new();
        let mut receipt_updates = Vec::new();
        for effect in script.reward_effects {
            match effect {
                DialogueEffect::Regift(item_key) => {
                    if let Ok(room) = self.world.room_mut(&location) {
                        if let Some(actor) = room.characters.get_mut(actor_key) {
                            actor.stage_gift(item_key);
                        }
                    }
                }
                DialogueEffect::EnablePortalFuel => {
                    if let Ok(room) = self.world.room_mut(&location) {
                        if let Some(actor) = room.characters.get_mut(actor_key) {
                            if let Some(gift) = actor.gift.as_mut() {
                                gift.usable = true;
                            }
                        }
                    }
                    if let Some(machine) = self.world.find_room_item_mut(MACHINE_ITEM) {
                        machine.usable_on = true;
                    }
                    self.flags.unlock_portal();
                }
                DialogueEffect::CompleteSideStory(story) => {
                    self.flags.complete(*story);
                }
                DialogueEffect::HandOverGift => {
                    let gift = match self.world.room_mut(&location) {
                        Ok(room) => room
                            .characters
                            .get_mut(actor_key)
                            .and_then(|actor| actor.take_gift()),
                        Err(_) => None,
                    };
                    if let Some(item) = gift {
                        let Ok(room) = self.world.room_mut(&location) else {
                            continue;
                        };
                        let receipt = self.player.accept(room, item);
                        gift_label = receipt.name.clone();
                        if receipt.left_on_floor {
                            receipt_updates.push(line(format!(
                                "\nYou do not have space in your bag. \
You leave the {} on the floor.",
                                receipt.name
                            )));
                        } else {
                            receipt_updates.push(line(format!(
                                "You receive {}.",
                                receipt.description
                            )));
                        }
                    }
                }
            }
        }
        self.advance_dialogue(actor_key, DialogueState::Rewarded);

        let mut updates = vec![line(dialogue::render(
            script.reward,
            &player_name,
            &gift_label,
        ))];
        updates.extend(receipt_updates);
        updates
    }
}
