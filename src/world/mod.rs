//! World-state core: rooms, items, characters, the player, and the
//! canonical authored campaign. The command layer in [`crate::game`]
//! drives everything here; nothing in this module does IO.

pub mod errors;
pub mod graph;
pub mod player;
pub mod registry;
pub mod room;
pub mod seed;
pub mod types;

pub use errors::WorldError;
pub use graph::World;
pub use player::{GiftReceipt, Player};
pub use registry::{DisplayNamed, Registry};
pub use room::Room;
pub use seed::{
    canonical_world, combo_effect, ComboEffect, UseCombo, FUEL_ITEM, MACHINE_ITEM,
    PORTAL_DIRECTION, START_ROOM_ID, TERMINAL_ROOM_ID, USE_COMBOS,
};
pub use types::{Character, DialogueState, Item, SideStory, StoryFlags, CARRY_CAPACITY};
