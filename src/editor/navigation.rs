//! Frame-level commands: next, previous, clear and cancel.
//!
//! Navigation and clearing are refused while a box is being drawn or
//! resized, so a drag can never continue against another frame's boxes.

use super::AnnotationEditor;
use crate::error::Result;
use crate::state::{AnnotationStore, EditorState};
use tracing::{debug, info};

impl AnnotationEditor {
    /// Moves to the next frame, stopping at the last one.
    pub fn next_frame(&mut self, frame_count: usize) -> Result<usize> {
        self.ensure_idle("change frame")?;
        if self.current_frame + 1 < frame_count {
            self.current_frame += 1;
        }
        debug!(frame = self.current_frame, "next frame");
        Ok(self.current_frame)
    }

    /// Moves to the previous frame, stopping at the first one.
    pub fn previous_frame(&mut self) -> Result<usize> {
        self.ensure_idle("change frame")?;
        self.current_frame = self.current_frame.saturating_sub(1);
        debug!(frame = self.current_frame, "previous frame");
        Ok(self.current_frame)
    }

    /// Clears every box on the current frame.
    pub fn clear_current_frame(&mut self, store: &mut AnnotationStore) -> Result<()> {
        self.ensure_idle("clear annotations")?;
        store.clear(self.current_frame);
        info!(frame = self.current_frame, "annotations cleared");
        Ok(())
    }

    /// Jumps back to frame 0. Used when the panel's frames are discarded.
    pub fn reset_frame(&mut self) -> Result<()> {
        self.ensure_idle("reset frames")?;
        self.current_frame = 0;
        Ok(())
    }

    /// Ensures no gesture is in progress, e.g. before capturing or exporting.
    pub fn require_idle(&self, action: &'static str) -> Result<()> {
        self.ensure_idle(action)
    }

    /// Abandons the current gesture. A cancelled resize puts the box back the
    /// way it was when the drag started.
    pub fn cancel(&mut self, store: &mut AnnotationStore) {
        if let EditorState::Editing {
            box_index,
            original,
            ..
        } = self.state
        {
            store.replace_at(self.current_frame, box_index, original);
        }
        if !self.state.is_idle() {
            debug!(frame = self.current_frame, state = self.state.name(), "gesture cancelled");
        }
        self.state = EditorState::Idle;
    }
}
