//! Winner resolution.

use alloc::string::ToString;
use alloc::vec::Vec;

use tracing::debug;

use crate::input::PLAYER_COUNT;
use crate::player::Player;
use crate::result::Outcome;

/// Picks the winner of a game.
///
/// The highest point score wins. When several players share it, the highest
/// suit score among them wins. Players still level after that share the win
/// and are reported with their suit score, in input order. A single player
/// left after the tie-break is reported with the point score.
#[must_use]
pub fn resolve(players: &[Player; PLAYER_COUNT]) -> Outcome {
    let max_score = players.iter().map(Player::score).max().unwrap_or_default();
    let leaders: Vec<&Player> = players
        .iter()
        .filter(|player| player.score() == max_score)
        .collect();

    if let [winner] = leaders.as_slice() {
        return Outcome::Winner {
            name: winner.name().to_string(),
            score: max_score,
        };
    }

    debug!(
        score = max_score,
        tied = leaders.len(),
        "score tie, comparing suit scores"
    );

    let suit_scores: Vec<(&Player, u32)> = leaders
        .into_iter()
        .map(|player| {
            let recomputed = player.recompute_suit_score();
            debug_assert_eq!(recomputed, player.suit_score());
            (player, recomputed)
        })
        .collect();
    let max_suit_score = suit_scores
        .iter()
        .map(|&(_, suit_score)| suit_score)
        .max()
        .unwrap_or_default();
    let finalists: Vec<&Player> = suit_scores
        .into_iter()
        .filter(|&(_, suit_score)| suit_score == max_suit_score)
        .map(|(player, _)| player)
        .collect();

    match finalists.as_slice() {
        [winner] => Outcome::Winner {
            name: winner.name().to_string(),
            score: winner.score(),
        },
        _ => Outcome::Tie {
            names: finalists
                .iter()
                .map(|player| player.name().to_string())
                .collect(),
            suit_score: max_suit_score,
        },
    }
}
