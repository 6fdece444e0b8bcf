//! Result of a resolved game.

use core::fmt;

use alloc::string::String;
use alloc::vec::Vec;

/// The winner of a game, or the players sharing the win.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A single player won.
    Winner {
        /// The winner's name.
        name: String,
        /// The winner's point score.
        score: i64,
    },
    /// Several players tied on both score and suit score.
    Tie {
        /// Names of the tied players, in input order.
        names: Vec<String>,
        /// The shared suit score.
        suit_score: u32,
    },
}

impl Outcome {
    /// Returns the winning names, in input order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        match self {
            Self::Winner { name, .. } => alloc::vec![name.as_str()],
            Self::Tie { names, .. } => names.iter().map(String::as_str).collect(),
        }
    }

    /// Returns the number written after the names: the point score for a
    /// single winner, the suit score for a tie.
    #[must_use]
    pub fn value(&self) -> i64 {
        match self {
            Self::Winner { score, .. } => *score,
            Self::Tie { suit_score, .. } => i64::from(*suit_score),
        }
    }

    /// Returns whether more than one player shares the win.
    #[must_use]
    pub const fn is_tie(&self) -> bool {
        matches!(self, Self::Tie { .. })
    }
}

/// Renders the result line, `Name:Score` or `A,B:SuitScore`, without a newline.
impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Winner { name, score } => write!(f, "{name}:{score}"),
            Self::Tie { names, suit_score } => {
                for (i, name) in names.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    f.write_str(name)?;
                }
                write!(f, ":{suit_score}")
            }
        }
    }
}
