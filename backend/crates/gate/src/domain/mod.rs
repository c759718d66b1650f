//! Domain layer - pure gate logic

pub mod signals;
pub mod token;
