//! Drawing handlers: start_drawing, update_drawing, finish_drawing.

use super::AnnotationEditor;
use crate::geometry::{BoundingBox, Point};
use crate::state::{AnnotationStore, EditOutcome, EditorState};
use tracing::info;

impl AnnotationEditor {
    pub(super) fn start_drawing(&mut self, anchor: Point) -> EditOutcome {
        self.state = EditorState::Drawing {
            anchor,
            preview: None,
        };
        EditOutcome::DrawingStarted
    }

    pub(super) fn update_drawing(&mut self, anchor: Point, p: Point) -> EditOutcome {
        let preview = BoundingBox::from_drag(anchor, p);
        self.state = EditorState::Drawing {
            anchor,
            preview: Some(preview),
        };
        EditOutcome::Previewed(preview)
    }

    /// Stores the preview as drawn; normalization happens at export.
    pub(super) fn finish_drawing(
        &mut self,
        preview: Option<BoundingBox>,
        store: &mut AnnotationStore,
    ) -> EditOutcome {
        self.state = EditorState::Idle;
        let Some(bbox) = preview else {
            return EditOutcome::Finished;
        };

        let frame = self.current_frame;
        store.append(frame, bbox);
        let position = store.get(frame).len() - 1;
        info!(
            frame,
            position,
            x = bbox.x,
            y = bbox.y,
            width = bbox.width,
            height = bbox.height,
            "box committed"
        );
        EditOutcome::Committed { position, bbox }
    }
}
