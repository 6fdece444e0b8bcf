//! Error types for parsing hands.

use alloc::string::String;

use thiserror::Error;

/// Errors that can occur while parsing a single card token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CardError {
    /// The token is empty.
    #[error("empty card token")]
    Empty,
    /// The value part is not a face letter or a base-10 integer that fits `i32`.
    #[error("invalid card value `{0}`")]
    InvalidValue(String),
    /// The suit letter is not one of C, D, H, S.
    #[error("invalid card suit `{0}`")]
    InvalidSuit(char),
}

/// Errors that can occur while turning input text into players.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// The input does not have one line per player.
    #[error("input must contain exactly {expected} lines, found {found}")]
    LineCount {
        /// Required number of lines.
        expected: usize,
        /// Number of lines present.
        found: usize,
    },
    /// A line has no `:` between the player name and the cards.
    #[error("line {line}: missing `:` between player name and cards")]
    MissingSeparator {
        /// 1-based line number.
        line: usize,
    },
    /// A line has a blank player name.
    #[error("line {line}: player name is empty")]
    EmptyName {
        /// 1-based line number.
        line: usize,
    },
    /// A player holds the wrong number of cards.
    #[error("{name} does not have exactly {expected} cards")]
    CardCount {
        /// The player's name.
        name: String,
        /// Required number of cards.
        expected: usize,
        /// Number of card tokens present.
        found: usize,
    },
    /// One of a player's cards failed to parse.
    #[error("{name}: {source}")]
    Card {
        /// The player's name.
        name: String,
        /// The underlying card error.
        source: CardError,
    },
}
