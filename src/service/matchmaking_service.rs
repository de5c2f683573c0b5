//! Matchmaking service: queues players and notifies formed matches.

use std::sync::Arc;

use crate::domain::{
    BatchSize, ConnectionRegistry, MatchNotifier, MatchOutcome, Player, PlayerPool,
};

/// Orchestration layer for player submissions.
///
/// Owns the [`PlayerPool`] and a [`MatchNotifier`] bound to the shared
/// [`ConnectionRegistry`]. A submission first mutates the pool under its
/// lock, then, with the lock released, pushes any formed match to the
/// connected participants.
#[derive(Debug)]
pub struct MatchmakingService {
    pool: PlayerPool,
    notifier: MatchNotifier,
    connections: Arc<ConnectionRegistry>,
}

impl MatchmakingService {
    /// Creates a new `MatchmakingService`.
    #[must_use]
    pub fn new(batch_size: BatchSize, connections: Arc<ConnectionRegistry>) -> Self {
        Self {
            pool: PlayerPool::new(batch_size),
            notifier: MatchNotifier::new(Arc::clone(&connections)),
            connections,
        }
    }

    /// Returns a reference to the shared [`ConnectionRegistry`].
    #[must_use]
    pub fn connections(&self) -> &Arc<ConnectionRegistry> {
        &self.connections
    }

    /// Returns the configured batch size.
    #[must_use]
    pub const fn batch_size(&self) -> BatchSize {
        self.pool.batch_size()
    }

    /// Queues `player` and, if that completes a batch, notifies every
    /// connected participant before returning the match.
    pub async fn submit(&self, player: Player) -> MatchOutcome {
        let outcome = self.pool.submit(player).await;
        if let MatchOutcome::Formed(formed) = &outcome {
            let delivered = self.notifier.notify(formed).await;
            tracing::info!(
                participants = formed.len(),
                delivered,
                "match notifications sent"
            );
        }
        outcome
    }

    /// Number of players waiting in the pool.
    pub async fn waiting(&self) -> usize {
        self.pool.waiting().await
    }
}
