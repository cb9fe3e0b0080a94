//! # segtab - animated segmented control for the terminal
//!
//! This library exposes internal components for testing purposes.
//! The public API is primarily intended for integration tests and is not
//! guaranteed to be stable.

pub mod animator;
pub mod app;
pub mod config;
pub mod control;
pub mod easing;
pub mod geometry;
pub mod ui;

// Re-export commonly used types for testing
pub use animator::{AnimState, HighlightAnimator, TRANSITION_DURATION};
pub use app::{Action, App};
pub use config::DemoConfig;
pub use control::{ControlError, SegmentedControl, Tab, TabId};
pub use geometry::{GeometryBox, GeometryStore};
