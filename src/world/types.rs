use serde::{Deserialize, Serialize};

use crate::world::registry::{DisplayNamed, Registry};

/// Total weight the player's bag can hold. The portal machine is authored
/// at weight 100 so it can never be carried, only used in place.
pub const CARRY_CAPACITY: u32 = 99;

/// A portable (or deliberately non-portable) object in the world.
///
/// Identity is the lowercase form of `name`. The two usability flags start
/// false and are flipped by story events; everything else is fixed at
/// authoring time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub description: String,
    pub weight: u32,
    #[serde(default)]
    pub usable: bool,
    #[serde(default)]
    pub usable_on: bool,
}

impl Item {
    pub fn new(name: &str, description: &str, weight: u32) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            weight,
            usable: false,
            usable_on: false,
        }
    }

    /// Canonical lookup key.
    pub fn key(&self) -> String {
        Registry::<Item>::canonical(&self.name)
    }
}

impl DisplayNamed for Item {
    fn display_name(&self) -> &str {
        &self.name
    }
}

impl Registry<Item> {
    /// Sum of the weights of every contained item.
    pub fn total_weight(&self) -> u32 {
        self.values().map(|item| item.weight).sum()
    }
}

/// A non-player actor. Lives in exactly one room's character registry.
///
/// `wants` names the one item the actor is after; it is cleared once the
/// player hands that item over. The gift slot stages the item the actor
/// will hand back, separate from the general inventory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    pub name: String,
    /// Opaque portrait reference for the presentation layer.
    pub portrait: String,
    pub wants: Option<String>,
    pub inventory: Registry<Item>,
    pub gift: Option<Item>,
}

impl Character {
    pub fn new(name: &str, portrait: &str) -> Self {
        Self {
            name: name.to_string(),
            portrait: portrait.to_string(),
            wants: None,
            inventory: Registry::new(),
            gift: None,
        }
    }

    pub fn wanting(mut self, item_name: &str) -> Self {
        self.wants = Some(Registry::<Item>::canonical(item_name));
        self
    }

    pub fn with_gift(mut self, item: Item) -> Self {
        self.gift = Some(item);
        self
    }

    pub fn key(&self) -> String {
        Registry::<Character>::canonical(&self.name)
    }

    /// Empties the gift slot, handing ownership to the caller.
    pub fn take_gift(&mut self) -> Option<Item> {
        self.gift.take()
    }

    /// Moves an inventory item into the gift slot. No-op if absent.
    pub fn stage_gift(&mut self, item_name: &str) {
        if let Some(item) = self.inventory.remove(item_name) {
            self.gift = Some(item);
        }
    }
}

impl DisplayNamed for Character {
    fn display_name(&self) -> &str {
        &self.name
    }
}

/// Optional story threads the player can resolve for the win-screen tally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SideStory {
    Child,
    Guard,
    Librarian,
}

/// One-way story milestones. Each flag flips false -> true at most once
/// and never resets.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoryFlags {
    portal_usable: bool,
    child_helped: bool,
    guard_helped: bool,
    librarian_helped: bool,
}

impl StoryFlags {
    pub fn unlock_portal(&mut self) {
        self.portal_usable = true;
    }

    pub fn portal_usable(&self) -> bool {
        self.portal_usable
    }

    pub fn complete(&mut self, story: SideStory) {
        match story {
            SideStory::Child => self.child_helped = true,
            SideStory::Guard => self.guard_helped = true,
            SideStory::Librarian => self.librarian_helped = true,
        }
    }

    /// True once every optional story thread has been resolved.
    pub fn side_story_complete(&self) -> bool {
        self.child_helped && self.guard_helped && self.librarian_helped
    }
}

/// Per-actor dialogue progress. Only ever advances.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum DialogueState {
    /// The player has not spoken to this actor yet.
    #[default]
    Stranger,
    /// At least one conversation has happened.
    Acquainted,
    /// The actor's one-time reward has been handed out.
    Rewarded,
}
