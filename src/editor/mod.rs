//! Annotation editor state machine.
//!
//! Turns pointer input on the current frame into stored boxes:
//! - `drawing`: start, preview and commit of new boxes
//! - `resize`: corner grab and corner-anchored resize of existing boxes
//! - `navigation`: frame selection, clearing and cancelling a gesture

mod drawing;
mod navigation;
mod resize;

use crate::error::{AnnotatorError, Result};
use crate::geometry::{BoundingBox, Point};
use crate::state::{AnnotationStore, EditOutcome, EditorState, PointerEvent};
use tracing::debug;

/// Control-point grab tolerance in pixels.
pub const DEFAULT_GRAB_RADIUS: f64 = 10.0;

/// One editing surface. It never owns the boxes; every handler takes the
/// store of the panel it edits.
#[derive(Debug, Clone)]
pub struct AnnotationEditor {
    state: EditorState,
    current_frame: usize,
    grab_radius: f64,
}

impl Default for AnnotationEditor {
    fn default() -> Self {
        Self::new(DEFAULT_GRAB_RADIUS)
    }
}

impl AnnotationEditor {
    pub fn new(grab_radius: f64) -> Self {
        Self {
            state: EditorState::Idle,
            current_frame: 0,
            grab_radius,
        }
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn current_frame(&self) -> usize {
        self.current_frame
    }

    pub fn grab_radius(&self) -> f64 {
        self.grab_radius
    }

    /// The uncommitted box being drawn, if any.
    pub fn preview(&self) -> Option<BoundingBox> {
        match self.state {
            EditorState::Drawing { preview, .. } => preview,
            _ => None,
        }
    }

    pub fn handle(&mut self, event: PointerEvent, store: &mut AnnotationStore) -> Result<EditOutcome> {
        let outcome = match event {
            PointerEvent::Down(p) => self.pointer_down(ensure_finite(p)?, store),
            PointerEvent::Move(p) => self.pointer_move(ensure_finite(p)?, store),
            PointerEvent::Up => self.pointer_up(store),
        };
        debug!(
            frame = self.current_frame,
            state = self.state.name(),
            ?event,
            ?outcome,
            "pointer event handled"
        );
        Ok(outcome)
    }

    fn pointer_down(&mut self, p: Point, store: &AnnotationStore) -> EditOutcome {
        if !self.state.is_idle() {
            return EditOutcome::Ignored;
        }
        match self.grab_corner(p, store) {
            Some(outcome) => outcome,
            None => self.start_drawing(p),
        }
    }

    fn pointer_move(&mut self, p: Point, store: &mut AnnotationStore) -> EditOutcome {
        match self.state {
            EditorState::Idle => EditOutcome::Ignored,
            EditorState::Drawing { anchor, .. } => self.update_drawing(anchor, p),
            EditorState::Editing {
                box_index, corner, ..
            } => self.update_resize(box_index, corner, p, store),
        }
    }

    fn pointer_up(&mut self, store: &mut AnnotationStore) -> EditOutcome {
        match self.state {
            EditorState::Idle => EditOutcome::Ignored,
            EditorState::Drawing { preview, .. } => self.finish_drawing(preview, store),
            EditorState::Editing { .. } => self.finish_resize(),
        }
    }

    /// Refuses frame-level commands unless no gesture is in progress.
    fn ensure_idle(&self, action: &'static str) -> Result<()> {
        if self.state.is_idle() {
            Ok(())
        } else {
            Err(AnnotatorError::EditInProgress { action })
        }
    }
}

fn ensure_finite(p: Point) -> Result<Point> {
    if p.is_finite() {
        Ok(p)
    } else {
        Err(AnnotatorError::NonFiniteCoordinate { x: p.x, y: p.y })
    }
}
