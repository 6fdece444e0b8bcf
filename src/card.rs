//! Card types and card token parsing.

use core::str::FromStr;

use alloc::string::ToString;

use crate::error::CardError;

/// Value of an Ace.
///
/// Aces score the same as Jacks in this game.
pub const ACE_VALUE: i32 = 11;
/// Value of a Jack.
pub const JACK_VALUE: i32 = 11;
/// Value of a Queen.
pub const QUEEN_VALUE: i32 = 12;
/// Value of a King.
pub const KING_VALUE: i32 = 13;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Clubs.
    Clubs,
    /// Diamonds.
    Diamonds,
    /// Hearts.
    Hearts,
    /// Spades.
    Spades,
}

impl Suit {
    /// Returns the suit weight used by the suit-score tie-break (1 to 4).
    #[must_use]
    pub const fn weight(self) -> u32 {
        match self {
            Self::Clubs => 1,
            Self::Diamonds => 2,
            Self::Hearts => 3,
            Self::Spades => 4,
        }
    }

    /// Looks up a suit by its letter, ignoring case.
    #[must_use]
    pub const fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_uppercase() {
            'C' => Some(Self::Clubs),
            'D' => Some(Self::Diamonds),
            'H' => Some(Self::Hearts),
            'S' => Some(Self::Spades),
            _ => None,
        }
    }

    /// Returns the upper-case letter of the suit.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::Clubs => 'C',
            Self::Diamonds => 'D',
            Self::Hearts => 'H',
            Self::Spades => 'S',
        }
    }
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The point value of the card (2..=10, 11 for Ace and Jack, 12 Queen, 13 King).
    ///
    /// Other numbers in a token are taken as written, including negative ones.
    pub value: i32,
}

impl Card {
    /// Creates a new card.
    ///
    /// Note: This function does not validate the value.
    #[must_use]
    pub const fn new(suit: Suit, value: i32) -> Self {
        Self { suit, value }
    }

    /// Parses a card token such as `AH`, `10c` or `KS`.
    ///
    /// Everything but the last character is the value, the last character is
    /// the suit. Both parts are case-insensitive. The value is checked before
    /// the suit, so `XZ` reports a bad value rather than a bad suit.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::Empty`] for an empty token,
    /// [`CardError::InvalidValue`] when the value is neither a face letter nor
    /// a base-10 integer, and [`CardError::InvalidSuit`] for a suit letter outside
    /// `C`, `D`, `H`, `S`.
    pub fn parse(token: &str) -> Result<Self, CardError> {
        let Some((split, suit_letter)) = token.char_indices().next_back() else {
            return Err(CardError::Empty);
        };
        let value = parse_value(&token[..split])?;
        let suit = Suit::from_letter(suit_letter).ok_or(CardError::InvalidSuit(suit_letter))?;
        Ok(Self::new(suit, value))
    }
}

fn parse_value(raw: &str) -> Result<i32, CardError> {
    let mut chars = raw.chars();
    if let (Some(letter), None) = (chars.next(), chars.next()) {
        match letter.to_ascii_uppercase() {
            'A' => return Ok(ACE_VALUE),
            'J' => return Ok(JACK_VALUE),
            'Q' => return Ok(QUEEN_VALUE),
            'K' => return Ok(KING_VALUE),
            _ => {}
        }
    }
    raw.parse()
        .map_err(|_| CardError::InvalidValue(raw.to_string()))
}

impl FromStr for Card {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
