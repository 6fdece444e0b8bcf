//! Players and their scored hands.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use tracing::debug;

use crate::card::Card;
use crate::error::InputError;

/// Number of cards in every hand.
pub const HAND_SIZE: usize = 5;

/// Sums the card values of a hand.
#[must_use]
pub fn hand_score(cards: &[Card]) -> i64 {
    cards.iter().map(|card| i64::from(card.value)).sum()
}

/// Multiplies the suit weights of a hand.
#[must_use]
pub fn suit_score(cards: &[Card]) -> u32 {
    cards.iter().map(|card| card.suit.weight()).product()
}

/// A player and their scored hand.
///
/// Both scores are computed once on construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    cards: [Card; HAND_SIZE],
    score: i64,
    suit_score: u32,
}

impl Player {
    /// Creates a player from already parsed cards.
    #[must_use]
    pub fn new(name: impl Into<String>, cards: [Card; HAND_SIZE]) -> Self {
        Self {
            name: name.into(),
            score: hand_score(&cards),
            suit_score: suit_score(&cards),
            cards,
        }
    }

    /// Creates a player from raw card tokens.
    ///
    /// Each token is trimmed before it is parsed.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::CardCount`] unless exactly [`HAND_SIZE`] tokens
    /// are given, and [`InputError::Card`] for the first token that fails to
    /// parse.
    pub fn from_tokens<S: AsRef<str>>(name: &str, tokens: &[S]) -> Result<Self, InputError> {
        if tokens.len() != HAND_SIZE {
            return Err(InputError::CardCount {
                name: name.to_string(),
                expected: HAND_SIZE,
                found: tokens.len(),
            });
        }

        let cards = tokens
            .iter()
            .map(|token| Card::parse(token.as_ref().trim()))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|source| InputError::Card {
                name: name.to_string(),
                source,
            })?;
        let cards: [Card; HAND_SIZE] = cards
            .try_into()
            .map_err(|rest: Vec<Card>| InputError::CardCount {
                name: name.to_string(),
                expected: HAND_SIZE,
                found: rest.len(),
            })?;

        let player = Self::new(name, cards);
        debug!(
            player = %player.name,
            score = player.score,
            suit_score = player.suit_score,
            "built player"
        );
        Ok(player)
    }

    /// Returns the player's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the cards in the hand, in input order.
    #[must_use]
    pub const fn cards(&self) -> &[Card; HAND_SIZE] {
        &self.cards
    }

    /// Returns the sum of the card values.
    #[must_use]
    pub const fn score(&self) -> i64 {
        self.score
    }

    /// Returns the product of the suit weights.
    #[must_use]
    pub const fn suit_score(&self) -> u32 {
        self.suit_score
    }

    /// Computes the suit score again from the cards.
    ///
    /// Always equal to [`Player::suit_score`].
    #[must_use]
    pub fn recompute_suit_score(&self) -> u32 {
        suit_score(&self.cards)
    }
}
