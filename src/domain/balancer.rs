//! Greedy rating balancer that splits a batch into two teams.
//!
//! The batch is sorted by rating, highest first (stable, so equal ratings
//! keep their queue order). Each player then joins the team with the lower
//! running rating sum, ties going to `team1`. A team that already holds
//! `ceil(n / 2)` players is full and the remaining players go to the other
//! team, so team sizes never differ by more than one. For an odd batch the
//! last player therefore lands on whichever team is strictly lower, or on
//! `team1` on a tie.
//!
//! This is a heuristic, not an optimal partition. For non-negative ratings
//! the final gap never exceeds the highest rating in the batch.

use super::{Match, Player};

/// Splits `players` into two rating-balanced teams.
///
/// Pure and deterministic: the same batch in the same order always yields
/// the same split. Every input player appears in exactly one team.
#[must_use]
pub fn split(mut players: Vec<Player>) -> Match {
    players.sort_by(|a, b| b.rating.cmp(&a.rating));

    let capacity = players.len().div_ceil(2);
    let mut team1 = Vec::with_capacity(capacity);
    let mut team2 = Vec::with_capacity(capacity);
    let mut sum1: i128 = 0;
    let mut sum2: i128 = 0;

    for player in players {
        let to_team1 = if team1.len() >= capacity {
            false
        } else if team2.len() >= capacity {
            true
        } else {
            sum1 <= sum2
        };

        if to_team1 {
            sum1 += i128::from(player.rating);
            team1.push(player);
        } else {
            sum2 += i128::from(player.rating);
            team2.push(player);
        }
    }

    tracing::debug!(
        team1_size = team1.len(),
        team2_size = team2.len(),
        team1_rating = %sum1,
        team2_rating = %sum2,
        "teams balanced"
    );

    Match { team1, team2 }
}
