//! Two/three-word command parsing.
//!
//! The parser is a pure function over its input: it never consults world
//! state, and all semantic validation of arguments belongs to the
//! individual command handlers.

use crate::game::vocab::{CommandWord, Vocabulary};

/// A parsed player command: one recognized keyword plus up to two
/// arguments. Absent words are `None`, never empty strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    word: CommandWord,
    second: Option<String>,
    third: Option<String>,
}

impl Command {
    pub fn word(&self) -> CommandWord {
        self.word
    }

    pub fn second_word(&self) -> Option<&str> {
        self.second.as_deref()
    }

    pub fn third_word(&self) -> Option<&str> {
        self.third.as_deref()
    }

    pub fn has_second_word(&self) -> bool {
        self.second.is_some()
    }

    pub fn has_third_word(&self) -> bool {
        self.third.is_some()
    }

    pub fn is_unknown(&self) -> bool {
        self.word == CommandWord::Unknown
    }
}

#[derive(Debug, Clone, Default)]
pub struct Parser {
    vocab: Vocabulary,
}

impl Parser {
    pub fn new() -> Self {
        Self {
            vocab: Vocabulary::new(),
        }
    }

    /// Tokenizes one input line into a [`Command`].
    ///
    /// Splits on whitespace, lowercases, and keeps at most three tokens;
    /// anything past the third is silently discarded. An empty line
    /// yields an unknown command with no arguments.
    pub fn parse(&self, input: &str) -> Command {
        let mut tokens = input.split_whitespace();
        let word = match tokens.next() {
            Some(first) => self.vocab.lookup(&first.to_lowercase()),
            None => CommandWord::Unknown,
        };
        let second = tokens.next().map(str::to_lowercase);
        let third = tokens.next().map(str::to_lowercase);
        Command {
            word,
            second,
            third,
        }
    }

    /// Space-joined list of recognized command words for help output.
    pub fn command_list(&self) -> String {
        self.vocab.command_list()
    }
}
