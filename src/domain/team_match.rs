//! A formed match and the result of a pool submission.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::Player;

/// Two teams built from one batch of players.
///
/// This is the exact payload pushed to clients and returned by the
/// submission endpoint: `{"team1": [...], "team2": [...]}`. Produced once,
/// notified once, then dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Match {
    /// First team, in assignment order.
    pub team1: Vec<Player>,
    /// Second team, in assignment order.
    pub team2: Vec<Player>,
}

impl Match {
    /// Iterates over every participant, `team1` first.
    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.team1.iter().chain(self.team2.iter())
    }

    /// Total number of participants.
    #[must_use]
    pub fn len(&self) -> usize {
        self.team1.len() + self.team2.len()
    }

    /// Returns `true` if neither team has players.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.team1.is_empty() && self.team2.is_empty()
    }

    /// Sum of ratings for `(team1, team2)`.
    #[must_use]
    pub fn rating_totals(&self) -> (i128, i128) {
        (team_total(&self.team1), team_total(&self.team2))
    }
}

fn team_total(team: &[Player]) -> i128 {
    team.iter().map(|p| i128::from(p.rating)).sum()
}

/// Outcome of submitting one player to the pool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchOutcome {
    /// The submission completed a batch and this match was formed.
    Formed(Match),
    /// The player is queued until enough players arrive.
    Waiting,
}

impl MatchOutcome {
    /// Returns the formed match, if any.
    #[must_use]
    pub fn into_match(self) -> Option<Match> {
        match self {
            Self::Formed(m) => Some(m),
            Self::Waiting => None,
        }
    }

    /// Returns `true` for [`MatchOutcome::Formed`].
    #[must_use]
    pub const fn is_formed(&self) -> bool {
        matches!(self, Self::Formed(_))
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn sample() -> Match {
        Match {
            team1: vec![Player::new("a", 10, "tank"), Player::new("b", 5, "dps")],
            team2: vec![Player::new("c", 8, "healer"), Player::new("d", 7, "dps")],
        }
    }

    #[test]
    fn wire_shape_has_two_named_teams() {
        let Ok(json) = serde_json::to_value(sample()) else {
            panic!("serialization failed");
        };
        let Some(obj) = json.as_object() else {
            panic!("expected object");
        };
        assert_eq!(obj.len(), 2);
        assert_eq!(json["team1"][0]["id"], "a");
        assert_eq!(json["team2"][1]["rating"], 7);
        assert_eq!(json["team2"][0]["role"], "healer");
    }

    #[test]
    fn players_iterates_team1_then_team2() {
        let ids: Vec<_> = sample().players().map(|p| p.id.to_string()).collect();
        assert_eq!(ids, ["a", "b", "c", "d"]);
    }

    #[test]
    fn totals_and_len() {
        let m = sample();
        assert_eq!(m.len(), 4);
        assert!(!m.is_empty());
        assert_eq!(m.rating_totals(), (15, 15));
    }

    #[test]
    fn outcome_accessors() {
        assert!(!MatchOutcome::Waiting.is_formed());
        assert!(MatchOutcome::Waiting.into_match().is_none());
        let formed = MatchOutcome::Formed(sample());
        assert!(formed.is_formed());
        assert_eq!(formed.into_match(), Some(sample()));
    }
}
