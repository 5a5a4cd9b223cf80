//! Canonical authored world for the stock "World of Tomorrow" campaign.
//!
//! Everything a fresh game needs lives here: rooms and their exit
//! topology, the item set, the cast, and the declarative use-combo table.
//! The ids are stable keys; display names are what the player sees.

use crate::world::graph::World;
use crate::world::room::Room;
use crate::world::types::{Character, Item};

/// Room the player wakes up in.
pub const START_ROOM_ID: &str = "physics_lab";

/// Designated win-condition destination. Moving here ends the game.
pub const TERMINAL_ROOM_ID: &str = "beyond_portal";

/// Direction word for the exit the fuel/machine combo creates.
pub const PORTAL_DIRECTION: &str = "portal";

/// Item key of the portal-making machine.
pub const MACHINE_ITEM: &str = "machine";

/// Item key of the portal fuel.
pub const FUEL_ITEM: &str = "fuel";

/// What a successful `use <item> <target>` does beyond consuming the item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComboEffect {
    /// Adds the portal exit from the target's room to the terminal room.
    OpenPortal,
}

/// Declarative table of (usable item, target item) pairs with an effect.
///
/// Pairs not listed here still consume the item but do nothing else.
#[derive(Debug, Clone, Copy)]
pub struct UseCombo {
    pub item: &'static str,
    pub target: &'static str,
    pub effect: ComboEffect,
}

pub const USE_COMBOS: &[UseCombo] = &[UseCombo {
    item: FUEL_ITEM,
    target: MACHINE_ITEM,
    effect: ComboEffect::OpenPortal,
}];

/// Looks up the effect for a (item, target) pair, if any is authored.
pub fn combo_effect(item: &str, target: &str) -> Option<ComboEffect> {
    USE_COMBOS
        .iter()
        .find(|combo| combo.item == item && combo.target == target)
        .map(|combo| combo.effect)
}

/// Builds the canonical world: eleven rooms plus the terminal room, nine
/// items, and eight characters, wired the way the stock campaign expects.
///
/// Gift-slot items (money, food, fuel, wallet) are stocked on their
/// actors at construction so every item has exactly one owner from the
/// first turn onward.
pub fn canonical_world() -> World {
    let mut world = World::new();

    world.insert(
        Room::new(START_ROOM_ID, "Physics Lab", "images/rooms/physlab.png")
            .with_exit("east", "hallway_lower")
            .with_item(Item::new("Machine", "", 100))
            .with_character(
                Character::new("Scientist", "images/characters/scientist.png")
                    .wanting(FUEL_ITEM),
            ),
    );

    world.insert(
        Room::new(
            "hallway_lower",
            "Hallway (Lower Ground)",
            "images/rooms/hallwaylower.png",
        )
        .with_exit("east", "computing_lab")
        .with_exit("west", START_ROOM_ID)
        .with_exit("upstairs", "hallway_south")
        .with_item(Item::new("Flashlight", "a bright flashlight", 15)),
    );

    world.insert(
        Room::new("computing_lab", "Computing Lab", "images/rooms/complab.png")
            .with_exit("west", "hallway_lower")
            .with_item(Item::new("Ball", "a football", 30)),
    );

    world.insert(
        Room::new("library", "Library", "images/rooms/library.png")
            .with_exit("east", "hallway_south")
            .with_character(
                Character::new("Librarian", "images/characters/librarian.png").wanting("book"),
            ),
    );

    world.insert(
        Room::new(
            "hallway_south",
            "Hallway (South Side)",
            "images/rooms/hallwaysouth.png",
        )
        .with_exit("north", "hallway_north")
        .with_exit("east", "lobby")
        .with_exit("west", "library")
        .with_exit("downstairs", "hallway_lower")
        .with_character(
            Character::new("Thief", "images/characters/thief.png")
                .wanting("food")
                .with_gift(Item::new("Wallet", "a lost wallet", 20)),
        ),
    );

    world.insert(
        Room::new("lobby", "Lobby", "images/rooms/lobby.png")
            .with_exit("north", "cafeteria")
            .with_exit("east", "garden")
            .with_exit("west", "hallway_south"),
    );

    world.insert(
        Room::new("garden", "Garden", "images/rooms/garden.png")
            .with_exit("west", "lobby")
            // one-way shortcut down into the computing lab
            .with_exit("hole", "computing_lab")
            .with_character(
                Character::new("Child", "images/characters/child.png").wanting("ball"),
            ),
    );

    world.insert(
        Room::new("shop", "Shop", "images/rooms/shop.png")
            .with_exit("east", "hallway_north")
            .with_item(Item::new("Cheese", "a fragrant block of cheese", 25))
            .with_character(
                Character::new("Salesman", "images/characters/salesman.png")
                    .wanting("money")
                    .with_gift(Item::new("Fuel", "strange looking, neon blue fuel", 50)),
            ),
    );

    world.insert(
        Room::new(
            "hallway_north",
            "Hallway (North Side)",
            "images/rooms/hallwaynorth.png",
        )
        .with_exit("north", "bank")
        .with_exit("east", "cafeteria")
        .with_exit("south", "hallway_south")
        .with_exit("west", "shop"),
    );

    world.insert(
        Room::new("cafeteria", "Cafeteria", "images/rooms/cafeteria.png")
            .with_exit("south", "lobby")
            .with_exit("west", "hallway_north")
            .with_item(Item::new("Book", "a heavy book", 35))
            .with_character(
                Character::new("Chef", "images/characters/chef.png")
                    .wanting("cheese")
                    .with_gift(Item::new("Food", "a mouth-watering pizza", 30)),
            ),
    );

    world.insert(
        Room::new("bank", "Bank", "images/rooms/bank.png")
            .with_exit("south", "hallway_north")
            .with_character(
                Character::new("Banker", "images/characters/banker.png")
                    .wanting("wallet")
                    .with_gift(Item::new("Money", "a large amount of money", 15)),
            )
            .with_character(
                Character::new("Guard", "images/characters/guard.png").wanting("flashlight"),
            ),
    );

    // The terminal room has no exits back; the game ends on arrival.
    world.insert(Room::new(
        TERMINAL_ROOM_ID,
        "",
        "images/other/winscreen.png",
    ));

    world
}
