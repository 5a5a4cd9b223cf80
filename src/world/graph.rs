use serde::{Deserialize, Serialize};

use crate::world::errors::WorldError;
use crate::world::registry::Registry;
use crate::world::room::Room;
use crate::world::types::Item;

/// The directed multigraph of rooms, together with every item and
/// character instance they own.
///
/// The graph is not guaranteed strongly connected and exits may be
/// one-way; reachability is an authoring concern, not an invariant.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct World {
    rooms: Registry<Room>,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, room: Room) {
        let key = room.id.clone();
        self.rooms.put(&key, room);
    }

    pub fn room(&self, id: &str) -> Result<&Room, WorldError> {
        self.rooms
            .get(id)
            .ok_or_else(|| WorldError::UnknownRoom(id.to_string()))
    }

    pub fn room_mut(&mut self, id: &str) -> Result<&mut Room, WorldError> {
        self.rooms
            .get_mut(id)
            .ok_or_else(|| WorldError::UnknownRoom(id.to_string()))
    }

    /// Adds (or repoints) an exit on an existing room.
    pub fn add_exit(
        &mut self,
        room_id: &str,
        direction: &str,
        destination: &str,
    ) -> Result<(), WorldError> {
        self.room_mut(room_id)?.add_exit(direction, destination);
        Ok(())
    }

    pub fn rooms(&self) -> impl Iterator<Item = &Room> {
        self.rooms.values()
    }

    /// Locates an item lying in some room, scanning rooms in insertion
    /// order. Items in actor inventories or gift slots are not visible
    /// to this lookup.
    pub fn find_room_item_mut(&mut self, item_name: &str) -> Option<&mut Item> {
        let room_id = self
            .rooms
            .values()
            .find(|room| room.items.contains(item_name))
            .map(|room| room.id.clone())?;
        self.rooms
            .get_mut(&room_id)
            .and_then(|room| room.items.get_mut(item_name))
    }
}
