//! Insertion-ordered name registries backing rooms, bags, and exit tables.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Entities that expose a player-facing display name.
pub trait DisplayNamed {
    fn display_name(&self) -> &str;
}

/// Key-unique mapping from canonical lowercase names to entities.
///
/// Iteration follows the order keys were first inserted, which keeps room
/// listings deterministic. Re-adding an existing key overwrites the value
/// but keeps the key's original position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Registry<V> {
    order: Vec<String>,
    entries: HashMap<String, V>,
}

impl<V> Default for Registry<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Registry<V> {
    pub fn new() -> Self {
        Self {
            order: Vec::new(),
            entries: HashMap::new(),
        }
    }

    /// Canonical key form: lowercase of the given name.
    pub fn canonical(name: &str) -> String {
        name.to_lowercase()
    }

    pub fn put(&mut self, name: &str, value: V) {
        let key = Self::canonical(name);
        if self.entries.insert(key.clone(), value).is_none() {
            self.order.push(key);
        }
    }

    pub fn get(&self, name: &str) -> Option<&V> {
        self.entries.get(&Self::canonical(name))
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut V> {
        self.entries.get_mut(&Self::canonical(name))
    }

    /// Removes and returns the entity, or `None` if the name is absent.
    pub fn remove(&mut self, name: &str) -> Option<V> {
        let key = Self::canonical(name);
        let removed = self.entries.remove(&key);
        if removed.is_some() {
            self.order.retain(|k| k != &key);
        }
        removed
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(&Self::canonical(name))
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Values in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.order.iter().filter_map(|k| self.entries.get(k))
    }
}

impl<V: DisplayNamed> Registry<V> {
    /// Space-joined display names in insertion order.
    pub fn display_names(&self) -> String {
        self.values()
            .map(DisplayNamed::display_name)
            .collect::<Vec<_>>()
            .join(" ")
    }
}
