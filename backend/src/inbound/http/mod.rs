//! HTTP inbound adapter exposing REST endpoints.

pub mod cache_control;
pub mod health;
pub mod roster;
pub mod state;
