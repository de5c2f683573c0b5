//! Service layer: matchmaking orchestration.
//!
//! Ties the player pool to match notification. Handlers call into the
//! service and never touch the pool directly.

pub mod matchmaking_service;

pub use matchmaking_service::MatchmakingService;
