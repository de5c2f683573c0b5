//! Domain layer: players, matches, the waiting pool, team balancing and
//! connection bookkeeping.
//!
//! Nothing in here knows about HTTP. The pool and the connection registry
//! are the only shared mutable state, each behind its own lock, and no code
//! path holds both.

pub mod balancer;
pub mod connection;
pub mod connection_registry;
pub mod notifier;
pub mod player;
pub mod player_pool;
pub mod team_match;

pub use connection::{ConnectionHandle, ConnectionId, DeliveryError, Outbound};
pub use connection_registry::ConnectionRegistry;
pub use notifier::MatchNotifier;
pub use player::{Player, PlayerId};
pub use player_pool::{BatchSize, PlayerPool};
pub use team_match::{Match, MatchOutcome};
