use serde::{Deserialize, Serialize};

use crate::world::registry::Registry;
use crate::world::types::{Character, Item};

/// One location in the world.
///
/// Exits are one-way directed edges keyed by a lowercase direction word;
/// nothing implies a reverse edge. Exit listings follow insertion order,
/// and re-adding a direction silently overwrites the old destination, so
/// gameplay events can repoint or add doors after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub id: String,
    /// Display name; the terminal room is deliberately unnamed.
    pub name: String,
    /// Opaque scene reference for the presentation layer.
    pub scene: String,
    exits: Registry<String>,
    pub items: Registry<Item>,
    pub characters: Registry<Character>,
}

impl Room {
    pub fn new(id: &str, name: &str, scene: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            scene: scene.to_string(),
            exits: Registry::new(),
            items: Registry::new(),
            characters: Registry::new(),
        }
    }

    pub fn with_exit(mut self, direction: &str, destination: &str) -> Self {
        self.add_exit(direction, destination);
        self
    }

    pub fn with_item(mut self, item: Item) -> Self {
        self.items.put(&item.key(), item);
        self
    }

    pub fn with_character(mut self, who: Character) -> Self {
        self.characters.put(&who.key(), who);
        self
    }

    pub fn add_exit(&mut self, direction: &str, destination: &str) {
        self.exits.put(direction, destination.to_string());
    }

    /// Destination room id for a direction, or `None` if there is no door.
    pub fn exit(&self, direction: &str) -> Option<&str> {
        self.exits.get(direction).map(String::as_str)
    }

    pub fn exit_directions(&self) -> impl Iterator<Item = &str> {
        self.exits.keys()
    }

    /// "Exits: East West Upstairs" with each direction capitalized, in
    /// insertion order.
    pub fn exit_line(&self) -> String {
        let mut line = String::from("Exits:");
        for direction in self.exits.keys() {
            line.push(' ');
            line.push_str(&capitalize(direction));
        }
        line
    }

    /// Long description: location, exits, item list, character list.
    pub fn describe(&self) -> String {
        let item_line = if self.items.is_empty() {
            "No items in the room.".to_string()
        } else {
            format!("Items in the room: {}", self.items.display_names())
        };
        let character_line = if self.characters.is_empty() {
            "No characters in the room.".to_string()
        } else {
            format!("Characters in the room: {}", self.characters.display_names())
        };
        format!(
            "You are in the {}.\n{}\n{}\n{}",
            self.name,
            self.exit_line(),
            item_line,
            character_line
        )
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
