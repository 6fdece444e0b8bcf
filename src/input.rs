//! Parsing of the hand file format.
//!
//! One line per player, `Name:card,card,card,card,card`.

use alloc::vec::Vec;

use crate::error::InputError;
use crate::player::Player;

/// Number of players in every game.
pub const PLAYER_COUNT: usize = 5;

const BOM: char = '\u{feff}';

/// Parses one `Name:card,card,card,card,card` line.
///
/// `line_number` is 1-based and only used in error messages.
///
/// # Errors
///
/// Returns [`InputError::MissingSeparator`] when there is no `:`,
/// [`InputError::EmptyName`] for a blank name, and any error from
/// [`Player::from_tokens`].
pub fn parse_line(line: &str, line_number: usize) -> Result<Player, InputError> {
    let (name, hand) = line
        .split_once(':')
        .ok_or(InputError::MissingSeparator { line: line_number })?;
    let name = name.trim();
    if name.is_empty() {
        return Err(InputError::EmptyName { line: line_number });
    }

    let tokens: Vec<&str> = hand.split(',').collect();
    Player::from_tokens(name, &tokens)
}

/// Parses a whole hand file into the five players, in input order.
///
/// A leading byte order mark is ignored and a trailing newline does not count
/// as an extra line.
///
/// # Errors
///
/// Returns [`InputError::LineCount`] unless the text has exactly
/// [`PLAYER_COUNT`] lines, otherwise the first error from [`parse_line`].
pub fn parse_players(text: &str) -> Result<[Player; PLAYER_COUNT], InputError> {
    let text = text.strip_prefix(BOM).unwrap_or(text);
    let lines: Vec<&str> = text.lines().collect();
    if lines.len() != PLAYER_COUNT {
        return Err(InputError::LineCount {
            expected: PLAYER_COUNT,
            found: lines.len(),
        });
    }

    let players = lines
        .iter()
        .enumerate()
        .map(|(i, line)| parse_line(line, i + 1))
        .collect::<Result<Vec<_>, _>>()?;
    players.try_into().map_err(|rest: Vec<Player>| InputError::LineCount {
        expected: PLAYER_COUNT,
        found: rest.len(),
    })
}
