//! Domain model types (pure).
//!
//! All types in this module are plain data; behaviour lives in `reveal` and
//! `layout`.

pub mod error;
pub mod geometry;
pub mod key_action;
pub mod metrics;

// Re-export for convenience
pub use error::{AppError, ConfigError};
pub use geometry::{ClipRegion, Point};
pub use key_action::KeyAction;
pub use metrics::{LayoutMetrics, PanelMetrics};
