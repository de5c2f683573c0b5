//! Best-effort delivery of formed matches to connected participants.
//!
//! [`MatchNotifier`] serializes a [`Match`] once and queues it on the
//! connection of every participant that is currently registered. Each
//! connection receives the match at most once, even if its identity appears
//! more than once in the batch. Missing connections, closed connections and
//! full queues are skipped: there is no acknowledgement, retry or
//! redelivery.

use std::collections::HashSet;
use std::sync::Arc;

use super::{ConnectionRegistry, Match};

/// Pushes formed matches to participants over their live connections.
#[derive(Debug, Clone)]
pub struct MatchNotifier {
    registry: Arc<ConnectionRegistry>,
}

impl MatchNotifier {
    /// Creates a notifier that resolves participants through `registry`.
    #[must_use]
    pub fn new(registry: Arc<ConnectionRegistry>) -> Self {
        Self { registry }
    }

    /// Delivers `formed` to every connected participant.
    ///
    /// Returns the number of connections the payload was queued on. Each
    /// lookup takes the registry lock on its own; the lock is never held
    /// while queuing.
    pub async fn notify(&self, formed: &Match) -> usize {
        let payload: Arc<str> = match serde_json::to_string(formed) {
            Ok(json) => Arc::from(json),
            Err(err) => {
                tracing::error!(error = %err, "failed to serialize match");
                return 0;
            }
        };

        let mut delivered = 0;
        let mut seen = HashSet::new();
        for player in formed.players() {
            if !seen.insert(&player.id) {
                continue;
            }
            let Some(handle) = self.registry.resolve(&player.id).await else {
                tracing::debug!(player = %player.id, "player not connected, skipping");
                continue;
            };
            match handle.send(Arc::clone(&payload)) {
                Ok(()) => {
                    delivered += 1;
                    tracing::info!(player = %player.id, "notified player about the match");
                }
                Err(err) => {
                    tracing::warn!(
                        player = %player.id,
                        connection = %handle.id(),
                        error = %err,
                        "match notification dropped"
                    );
                }
            }
        }
        delivered
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::{ConnectionHandle, Outbound, Player, PlayerId};

    fn sample_match(team1: &[&str], team2: &[&str]) -> Match {
        Match {
            team1: team1.iter().map(|id| Player::new(*id, 10, "")).collect(),
            team2: team2.iter().map(|id| Player::new(*id, 10, "")).collect(),
        }
    }

    #[tokio::test]
    async fn no_registered_participants_means_no_sends() {
        let notifier = MatchNotifier::new(Arc::new(ConnectionRegistry::new()));
        let delivered = notifier.notify(&sample_match(&["a", "b"], &["c", "d"])).await;
        assert_eq!(delivered, 0);
    }

    #[tokio::test]
    async fn registered_participant_receives_full_match() {
        let registry = Arc::new(ConnectionRegistry::new());
        let (handle, mut rx) = ConnectionHandle::channel(4);
        let _ = registry.register(handle, PlayerId::new("p1")).await;
        let notifier = MatchNotifier::new(Arc::clone(&registry));

        let formed = sample_match(&["p1", "p2"], &["p3", "p4"]);
        assert_eq!(notifier.notify(&formed).await, 1);

        let Ok(Outbound::Text(text)) = rx.try_recv() else {
            panic!("expected a text frame");
        };
        let Ok(received) = serde_json::from_str::<Match>(&text) else {
            panic!("payload is not a match");
        };
        assert_eq!(received, formed);
        assert!(rx.try_recv().is_err(), "exactly one frame expected");
    }

    #[tokio::test]
    async fn repeated_identity_is_notified_once() {
        let registry = Arc::new(ConnectionRegistry::new());
        let (handle, mut rx) = ConnectionHandle::channel(4);
        let _ = registry.register(handle, PlayerId::new("p1")).await;
        let notifier = MatchNotifier::new(registry);

        let formed = sample_match(&["p1"], &["p1"]);
        assert_eq!(notifier.notify(&formed).await, 1);
        assert!(matches!(rx.try_recv(), Ok(Outbound::Text(_))));
        assert!(rx.try_recv().is_err(), "exactly one frame expected");
    }

    #[tokio::test]
    async fn unregistered_participant_is_skipped() {
        let registry = Arc::new(ConnectionRegistry::new());
        let (handle, mut rx) = ConnectionHandle::channel(4);
        let id = handle.id();
        let _ = registry.register(handle, PlayerId::new("p1")).await;
        registry.unregister(id).await;

        let notifier = MatchNotifier::new(registry);
        let delivered = notifier.notify(&sample_match(&["p1"], &["p2"])).await;
        assert_eq!(delivered, 0);
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn closed_or_full_connections_do_not_stop_the_rest() {
        let registry = Arc::new(ConnectionRegistry::new());

        let (closed, closed_rx) = ConnectionHandle::channel(1);
        drop(closed_rx);
        let (full, _full_rx) = ConnectionHandle::channel(1);
        assert!(full.send(Arc::from("filler")).is_ok());
        let (live, mut live_rx) = ConnectionHandle::channel(1);

        let _ = registry.register(closed, PlayerId::new("a")).await;
        let _ = registry.register(full, PlayerId::new("b")).await;
        let _ = registry.register(live, PlayerId::new("c")).await;

        let notifier = MatchNotifier::new(registry);
        let delivered = notifier.notify(&sample_match(&["a", "b"], &["c", "d"])).await;
        assert_eq!(delivered, 1);
        assert!(matches!(live_rx.try_recv(), Ok(Outbound::Text(_))));
    }
}
