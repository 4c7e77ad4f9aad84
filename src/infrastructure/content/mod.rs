//! Compiled-in presentation content.

mod moscow;

pub use moscow::{SUBTITLE, TITLE, moscow_catalog};
