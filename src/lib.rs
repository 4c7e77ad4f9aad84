//! Moskva - a terminal slideshow on the development of Moscow.
//!
//! Five historical periods are shown one slide at a time with wrap-around
//! navigation, per-slide stat cards, and chart panels for the later periods.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Application layer with deck navigation and icon resolution.
pub mod application;
/// Domain layer containing entities, errors, and port definitions.
pub mod domain;
/// Infrastructure layer containing configuration, content and icon adapters.
pub mod infrastructure;
/// Presentation layer containing UI components and event handling.
pub mod presentation;

/// Current version of the application.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name.
pub const NAME: &str = "moskva";
