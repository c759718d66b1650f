//! Application layer - use cases

pub mod config;
pub mod issue_challenge;
pub mod verify;
