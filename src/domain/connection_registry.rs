//! Registry of live connections keyed by player identity.
//!
//! [`ConnectionRegistry`] maps each open [`ConnectionId`] to the identity it
//! was opened for, and each identity to its current [`ConnectionHandle`].
//! Both maps live behind one [`tokio::sync::RwLock`]: registration and
//! removal take the write lock, lookups take the read lock, and no lock is
//! ever held across a socket write.

use std::collections::HashMap;

use tokio::sync::RwLock;

use super::{ConnectionHandle, ConnectionId, PlayerId};

#[derive(Debug, Default)]
struct Entries {
    by_connection: HashMap<ConnectionId, PlayerId>,
    by_player: HashMap<PlayerId, ConnectionHandle>,
}

/// Concurrent store of open connections.
///
/// # Invariants
///
/// - An identity resolves to at most one handle.
/// - A connection id is present only while its task is running; the task
///   unregisters itself on close.
#[derive(Debug, Default)]
pub struct ConnectionRegistry {
    entries: RwLock<Entries>,
}

impl ConnectionRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `player` to `handle`.
    ///
    /// If the identity was already bound to a different connection, that
    /// mapping is replaced and the superseded handle is returned so the
    /// caller can close it. Re-registering a connection under another
    /// identity moves it.
    pub async fn register(
        &self,
        handle: ConnectionHandle,
        player: PlayerId,
    ) -> Option<ConnectionHandle> {
        let connection_id = handle.id();
        let mut entries = self.entries.write().await;

        if let Some(previous_player) = entries.by_connection.remove(&connection_id)
            && entries
                .by_player
                .get(&previous_player)
                .is_some_and(|h| h.id() == connection_id)
        {
            entries.by_player.remove(&previous_player);
        }

        let superseded = entries
            .by_player
            .insert(player.clone(), handle)
            .filter(|old| old.id() != connection_id);
        if let Some(old) = &superseded {
            entries.by_connection.remove(&old.id());
        }
        entries.by_connection.insert(connection_id, player.clone());
        drop(entries);

        match &superseded {
            Some(old) => tracing::info!(
                %player,
                connection = %connection_id,
                superseded = %old.id(),
                "connection registered, replacing previous"
            ),
            None => tracing::info!(%player, connection = %connection_id, "connection registered"),
        }
        superseded
    }

    /// Removes the connection if present. Returns `true` if it was removed.
    ///
    /// Idempotent. A connection that was already superseded only drops its
    /// own entry and never touches the newer connection for its identity.
    pub async fn unregister(&self, connection_id: ConnectionId) -> bool {
        let mut entries = self.entries.write().await;
        let Some(player) = entries.by_connection.remove(&connection_id) else {
            return false;
        };
        if entries
            .by_player
            .get(&player)
            .is_some_and(|h| h.id() == connection_id)
        {
            entries.by_player.remove(&player);
        }
        drop(entries);

        tracing::info!(%player, connection = %connection_id, "connection unregistered");
        true
    }

    /// Returns the live handle for `player`, if connected.
    pub async fn resolve(&self, player: &PlayerId) -> Option<ConnectionHandle> {
        self.entries.read().await.by_player.get(player).cloned()
    }

    /// Returns the number of registered connections.
    pub async fn len(&self) -> usize {
        self.entries.read().await.by_connection.len()
    }

    /// Returns `true` if no connection is registered.
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.by_connection.is_empty()
    }
}
