//! Application layer with deck navigation and icon resolution services.

/// Application services.
pub mod services;

pub use services::{IconResolver, SlideDeck};
