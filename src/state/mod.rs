//! Annotation storage and editor state types.
//!
//! This module contains:
//! - The per-frame annotation store
//! - The editor state machine states and pointer events

mod store;
mod types;

pub use store::*;
pub use types::*;
