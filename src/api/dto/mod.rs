//! Data Transfer Objects for REST request/response serialization.
//!
//! The match payload itself is the domain [`crate::domain::Match`], which
//! already has the wire shape clients depend on.

pub mod player_dto;

pub use player_dto::*;
