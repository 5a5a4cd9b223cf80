//! Fixed vocabulary of recognized command words.

use std::collections::HashMap;

/// Symbolic kinds for the first word of a command.
///
/// `Unknown` is what every unrecognized word maps to; it is never listed
/// in help output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandWord {
    Go,
    Back,
    Look,
    Talk,
    Bag,
    Take,
    Give,
    Drop,
    Quit,
    Help,
    Fullscreen,
    Use,
    Unknown,
}

impl CommandWord {
    /// Every recognized word, in the order help lists them.
    pub const ALL: [CommandWord; 12] = [
        CommandWord::Go,
        CommandWord::Back,
        CommandWord::Look,
        CommandWord::Talk,
        CommandWord::Bag,
        CommandWord::Take,
        CommandWord::Give,
        CommandWord::Drop,
        CommandWord::Quit,
        CommandWord::Help,
        CommandWord::Fullscreen,
        CommandWord::Use,
    ];

    /// Canonical lowercase string form.
    pub fn as_str(self) -> &'static str {
        match self {
            CommandWord::Go => "go",
            CommandWord::Back => "back",
            CommandWord::Look => "look",
            CommandWord::Talk => "talk",
            CommandWord::Bag => "bag",
            CommandWord::Take => "take",
            CommandWord::Give => "give",
            CommandWord::Drop => "drop",
            CommandWord::Quit => "quit",
            CommandWord::Help => "help",
            CommandWord::Fullscreen => "fullscreen",
            CommandWord::Use => "use",
            CommandWord::Unknown => "?",
        }
    }
}

/// Lookup table from canonical word to command kind.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    words: HashMap<&'static str, CommandWord>,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::new()
    }
}

impl Vocabulary {
    pub fn new() -> Self {
        let words = CommandWord::ALL
            .iter()
            .map(|word| (word.as_str(), *word))
            .collect();
        Self { words }
    }

    /// Maps a lowercase word to its kind; anything unrecognized is
    /// `Unknown`.
    pub fn lookup(&self, word: &str) -> CommandWord {
        self.words.get(word).copied().unwrap_or(CommandWord::Unknown)
    }

    pub fn is_command(&self, word: &str) -> bool {
        self.words.contains_key(word)
    }

    /// Space-joined list of every recognized word for help output.
    pub fn command_list(&self) -> String {
        CommandWord::ALL
            .iter()
            .map(|word| word.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
