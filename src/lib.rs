//! Bounding-box annotation of captured frames and COCO dataset export.
//!
//! Pointer events go through an [`editor::AnnotationEditor`] into a panel's
//! [`state::AnnotationStore`]; [`export::CocoExporter`] turns the store and
//! the panel's frames into a dataset document.

pub mod config;
pub mod editor;
pub mod error;
pub mod export;
pub mod frames;
pub mod geometry;
pub mod panel;
pub mod session;
pub mod state;

pub use error::{AnnotatorError, Result};
