//! Winner resolution for a five-player, five-card scoring game, with optional
//! `no_std` support.
//!
//! Each player's hand is scored by summing card values. The highest score
//! wins; a score tie is broken by the product of the suit weights (Clubs 1,
//! Diamonds 2, Hearts 3, Spades 4). Players still level share the win.
//!
//! # Example
//!
//! ```
//! use fivecard::{parse_players, resolve};
//!
//! let text = "\
//! Ann:2C,3D,5H,10S,10C
//! Bob:10D,10D,5D,3C,2C
//! Cid:2C,2C,2C,2C,2C
//! Dee:3C,3C,3C,3C,3C
//! Eve:4C,4C,4C,4C,4C
//! ";
//! let players = parse_players(text).unwrap();
//! let outcome = resolve(&players);
//! assert_eq!(outcome.to_string(), "Ann:30");
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
#[cfg(feature = "cli")]
#[cfg_attr(docsrs, doc(cfg(feature = "cli")))]
pub mod cli;
pub mod error;
pub mod input;
pub mod player;
pub mod resolver;
pub mod result;

// Re-export main types
pub use card::{ACE_VALUE, Card, JACK_VALUE, KING_VALUE, QUEEN_VALUE, Suit};
pub use error::{CardError, InputError};
pub use input::{PLAYER_COUNT, parse_line, parse_players};
pub use player::{HAND_SIZE, Player, hand_score, suit_score};
pub use resolver::resolve;
pub use result::Outcome;
