//! Shared queue of players waiting for a match.
//!
//! [`PlayerPool`] keeps submissions in FIFO order behind a single
//! [`tokio::sync::Mutex`]. The append, the threshold check and the batch
//! extraction happen under one lock acquisition, so two concurrent callers
//! can never both observe a full batch and consume the same players.

use std::fmt;

use tokio::sync::Mutex;

use super::{MatchOutcome, Player, balancer};

/// Number of players consumed to form one match.
///
/// Always at least 2 so both teams are populated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BatchSize(usize);

impl BatchSize {
    /// Smallest accepted batch size.
    pub const MIN: usize = 2;

    /// Returns `None` if `size` is below [`BatchSize::MIN`].
    #[must_use]
    pub const fn new(size: usize) -> Option<Self> {
        if size >= Self::MIN {
            Some(Self(size))
        } else {
            None
        }
    }

    /// Returns the inner size.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0
    }
}

impl Default for BatchSize {
    fn default() -> Self {
        Self(10)
    }
}

impl fmt::Display for BatchSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// FIFO queue of players that forms a match every [`BatchSize`] players.
#[derive(Debug)]
pub struct PlayerPool {
    batch_size: BatchSize,
    waiting: Mutex<Vec<Player>>,
}

impl PlayerPool {
    /// Creates an empty pool.
    #[must_use]
    pub fn new(batch_size: BatchSize) -> Self {
        Self {
            batch_size,
            waiting: Mutex::new(Vec::new()),
        }
    }

    /// Returns the configured batch size.
    #[must_use]
    pub const fn batch_size(&self) -> BatchSize {
        self.batch_size
    }

    /// Queues `player` and forms a match once a full batch is waiting.
    ///
    /// The first `batch_size` queued players (oldest first) are removed and
    /// split into teams; anyone queued beyond them stays for the next round.
    /// The lock is released before returning, so callers can notify
    /// participants without blocking other submissions.
    pub async fn submit(&self, player: Player) -> MatchOutcome {
        let batch_size = self.batch_size.get();
        let batch = {
            let mut waiting = self.waiting.lock().await;
            tracing::debug!(player = %player.id, rating = player.rating, "player queued");
            waiting.push(player);
            if waiting.len() < batch_size {
                return MatchOutcome::Waiting;
            }
            waiting.drain(..batch_size).collect::<Vec<_>>()
        };

        let formed = balancer::split(batch);
        let (team1_rating, team2_rating) = formed.rating_totals();
        tracing::info!(
            players = formed.len(),
            %team1_rating,
            %team2_rating,
            "match formed"
        );
        MatchOutcome::Formed(formed)
    }

    /// Number of players currently waiting.
    pub async fn waiting(&self) -> usize {
        self.waiting.lock().await.len()
    }
}

impl Default for PlayerPool {
    fn default() -> Self {
        Self::new(BatchSize::default())
    }
}
