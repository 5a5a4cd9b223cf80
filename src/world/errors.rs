use thiserror::Error;

/// Faults raised by world-state transactions.
///
/// Every variant resolves to a narrative line at the session layer; none
/// of them aborts the process or reaches the presentation layer raw.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WorldError {
    /// The named item is not present in the current room.
    #[error("there is no item called {0} here")]
    ItemNotHere(String),

    /// The player is not carrying the named item.
    #[error("not carrying {0}")]
    NotCarried(String),

    /// Picking up the named item would exceed the carrying capacity.
    #[error("{0} does not fit in the bag")]
    OverCapacity(String),

    /// An exit or handler referenced a room id that does not exist.
    #[error("unknown room: {0}")]
    UnknownRoom(String),
}
