use crate::world::errors::WorldError;
use crate::world::registry::Registry;
use crate::world::room::Room;
use crate::world::types::{Character, Item, CARRY_CAPACITY};

/// Outcome of a character handing their gift-slot item to the player.
///
/// When the bag cannot hold the item it ends up on the floor of the
/// current room instead; `left_on_floor` drives the narration for that.
#[derive(Debug, Clone, PartialEq)]
pub struct GiftReceipt {
    pub name: String,
    pub description: String,
    pub left_on_floor: bool,
}

/// The user-controlled actor.
///
/// Owns the bag, the current room id, and the stack of rooms visited by
/// movement commands. All item transfers are remove-then-put, so an item
/// is never owned by two containers at once.
#[derive(Debug, Clone)]
pub struct Player {
    pub name: String,
    pub location: String,
    history: Vec<String>,
    pub bag: Registry<Item>,
}

impl Player {
    pub fn new(name: &str, start_room: &str) -> Self {
        Self {
            name: name.to_string(),
            location: start_room.to_string(),
            history: Vec::new(),
            bag: Registry::new(),
        }
    }

    /// Relocates without touching history. Movement handlers decide
    /// whether to push first.
    pub fn enter(&mut self, room_id: &str) {
        self.location = room_id.to_string();
    }

    /// Records the current room so `back` can return to it.
    pub fn push_history(&mut self) {
        self.history.push(self.location.clone());
    }

    pub fn pop_history(&mut self) -> Option<String> {
        self.history.pop()
    }

    pub fn carried_weight(&self) -> u32 {
        self.bag.total_weight()
    }

    /// Moves an item from the room into the bag.
    ///
    /// Rejects without any state change when the item is absent or when
    /// its weight would push the bag over capacity.
    pub fn pick_up(&mut self, room: &mut Room, item_name: &str) -> Result<&Item, WorldError> {
        let weight = room
            .items
            .get(item_name)
            .map(|item| item.weight)
            .ok_or_else(|| WorldError::ItemNotHere(item_name.to_string()))?;
        if self.carried_weight() + weight > CARRY_CAPACITY {
            return Err(WorldError::OverCapacity(item_name.to_string()));
        }
        let item = room
            .items
            .remove(item_name)
            .ok_or_else(|| WorldError::ItemNotHere(item_name.to_string()))?;
        let key = item.key();
        self.bag.put(&key, item);
        self.bag
            .get(&key)
            .ok_or(WorldError::ItemNotHere(key))
    }

    /// Moves an item from the bag onto the floor of the room.
    pub fn drop_item(&mut self, room: &mut Room, item_name: &str) -> Result<(), WorldError> {
        let item = self
            .bag
            .remove(item_name)
            .ok_or_else(|| WorldError::NotCarried(item_name.to_string()))?;
        room.items.put(&item.key(), item);
        Ok(())
    }

    /// Moves an item from the bag into a character's inventory.
    ///
    /// Whether the character actually wants the item is the session's
    /// concern; this primitive only transfers ownership.
    pub fn give(&mut self, target: &mut Character, item_name: &str) -> Result<(), WorldError> {
        let item = self
            .bag
            .remove(item_name)
            .ok_or_else(|| WorldError::NotCarried(item_name.to_string()))?;
        target.inventory.put(&item.key(), item);
        Ok(())
    }

    /// Accepts an item handed over by a character. Falls back to the
    /// floor of the room when the bag is too full.
    pub fn accept(&mut self, room: &mut Room, item: Item) -> GiftReceipt {
        let receipt = GiftReceipt {
            name: item.name.clone(),
            description: item.description.clone(),
            left_on_floor: self.carried_weight() + item.weight > CARRY_CAPACITY,
        };
        if receipt.left_on_floor {
            room.items.put(&item.key(), item);
        } else {
            self.bag.put(&item.key(), item);
        }
        receipt
    }

    /// Removes a carried item from the world entirely (the `use` verb).
    pub fn consume(&mut self, item_name: &str) -> Result<Item, WorldError> {
        self.bag
            .remove(item_name)
            .ok_or_else(|| WorldError::NotCarried(item_name.to_string()))
    }

    /// "You are carrying: ..." line, or the empty-bag sentinel.
    pub fn carried_summary(&self) -> String {
        if self.bag.is_empty() {
            "You are not carrying any items.".to_string()
        } else {
            format!("You are carrying: {}", self.bag.display_names())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn room_with(items: &[(&str, u32)]) -> Room {
        let mut room = Room::new("lab", "Lab", "lab.png");
        for (name, weight) in items {
            room.items
                .put(name, Item::new(name, &format!("a {name}"), *weight));
        }
        room
    }

    #[test]
    fn pick_up_moves_ownership() {
        let mut room = room_with(&[("flashlight", 15)]);
        let mut player = Player::new("Al", "lab");
        let picked = player.pick_up(&mut room, "flashlight").unwrap();
        assert_eq!(picked.name, "flashlight");
        assert!(room.items.is_empty());
        assert_eq!(player.carried_weight(), 15);
    }

    #[test]
    fn pick_up_missing_item_is_not_found() {
        let mut room = room_with(&[]);
        let mut player = Player::new("Al", "lab");
        assert_eq!(
            player.pick_up(&mut room, "fuel"),
            Err(WorldError::ItemNotHere("fuel".to_string()))
        );
    }

    #[test]
    fn pick_up_over_capacity_leaves_item_in_room() {
        let mut room = room_with(&[("machine", 100)]);
        let mut player = Player::new("Al", "lab");
        assert_eq!(
            player.pick_up(&mut room, "machine"),
            Err(WorldError::OverCapacity("machine".to_string()))
        );
        assert!(room.items.contains("machine"));
        assert!(player.bag.is_empty());
    }

    #[test]
    fn capacity_counts_existing_load() {
        let mut room = room_with(&[("fuel", 50), ("machine", 100), ("ball", 30), ("book", 35)]);
        let mut player = Player::new("Al", "lab");
        player.pick_up(&mut room, "fuel").unwrap();
        player.pick_up(&mut room, "ball").unwrap();
        // 50 + 30 + 35 = 115 > 99
        assert_eq!(
            player.pick_up(&mut room, "book"),
            Err(WorldError::OverCapacity("book".to_string()))
        );
        assert_eq!(player.carried_weight(), 80);
    }

    #[test]
    fn drop_returns_item_to_room() {
        let mut room = room_with(&[("ball", 30)]);
        let mut player = Player::new("Al", "lab");
        player.pick_up(&mut room, "ball").unwrap();
        player.drop_item(&mut room, "ball").unwrap();
        assert!(room.items.contains("ball"));
        assert!(player.bag.is_empty());
        assert_eq!(
            player.drop_item(&mut room, "ball"),
            Err(WorldError::NotCarried("ball".to_string()))
        );
    }

    #[test]
    fn give_transfers_to_character_inventory() {
        let mut room = room_with(&[("cheese", 25)]);
        let mut chef = Character::new("Chef", "chef.png").wanting("cheese");
        let mut player = Player::new("Al", "lab");
        player.pick_up(&mut room, "cheese").unwrap();
        player.give(&mut chef, "cheese").unwrap();
        assert!(player.bag.is_empty());
        assert!(chef.inventory.contains("cheese"));
    }

    #[test]
    fn accept_overflows_to_floor() {
        let mut room = room_with(&[("fuel", 50), ("ball", 30)]);
        let mut player = Player::new("Al", "lab");
        player.pick_up(&mut room, "fuel").unwrap();
        player.pick_up(&mut room, "ball").unwrap();
        let receipt = player.accept(&mut room, Item::new("Book", "a heavy book", 35));
        assert!(receipt.left_on_floor);
        assert!(room.items.contains("book"));
        assert!(!player.bag.contains("book"));

        let receipt = player.accept(&mut room, Item::new("Wallet", "a lost wallet", 19));
        assert!(!receipt.left_on_floor);
        assert!(player.bag.contains("wallet"));
    }

    #[test]
    fn history_is_a_stack() {
        let mut player = Player::new("Al", "lab");
        assert_eq!(player.pop_history(), None);
        player.push_history();
        player.enter("hall");
        player.push_history();
        player.enter("lobby");
        assert_eq!(player.pop_history(), Some("hall".to_string()));
        assert_eq!(player.pop_history(), Some("lab".to_string()));
        assert_eq!(player.pop_history(), None);
    }

    #[test]
    fn carried_summary_lists_bag() {
        let mut room = room_with(&[("ball", 30)]);
        let mut player = Player::new("Al", "lab");
        assert_eq!(player.carried_summary(), "You are not carrying any items.");
        player.pick_up(&mut room, "ball").unwrap();
        assert_eq!(player.carried_summary(), "You are carrying: ball");
    }
}
