//! Resize handlers: corner grab, update_resize, finish_resize.

use super::AnnotationEditor;
use crate::geometry::{Corner, Point, hit_test_corner, resize_from_corner};
use crate::state::{AnnotationStore, EditOutcome, EditorState};
use tracing::{debug, warn};

impl AnnotationEditor {
    /// Looks for a control point under `p` on the current frame.
    ///
    /// Boxes are scanned in creation order and the top-left corner of each box
    /// is tried before its bottom-right, so the first match wins.
    pub(super) fn grab_corner(&mut self, p: Point, store: &AnnotationStore) -> Option<EditOutcome> {
        let (box_index, corner, original) = store
            .get(self.current_frame)
            .iter()
            .enumerate()
            .find_map(|(i, bbox)| {
                Corner::ALL
                    .into_iter()
                    .find(|c| hit_test_corner(p, bbox.corner(*c), self.grab_radius))
                    .map(|c| (i, c, *bbox))
            })?;

        debug!(
            frame = self.current_frame,
            box_index,
            corner = corner.as_str(),
            "start resize"
        );
        self.state = EditorState::Editing {
            box_index,
            corner,
            original,
        };
        Some(EditOutcome::EditStarted { box_index, corner })
    }

    /// Writes the resized box straight into the store.
    pub(super) fn update_resize(
        &mut self,
        box_index: usize,
        corner: Corner,
        p: Point,
        store: &mut AnnotationStore,
    ) -> EditOutcome {
        let frame = self.current_frame;
        let Some(current) = store.get(frame).get(box_index).copied() else {
            warn!(frame, box_index, "resize target vanished");
            return EditOutcome::Ignored;
        };

        let bbox = resize_from_corner(&current, corner, p);
        if store.replace_at(frame, box_index, bbox) {
            EditOutcome::Resized { box_index, bbox }
        } else {
            EditOutcome::Ignored
        }
    }

    pub(super) fn finish_resize(&mut self) -> EditOutcome {
        if let EditorState::Editing {
            box_index, corner, ..
        } = self.state
        {
            debug!(
                frame = self.current_frame,
                box_index,
                corner = corner.as_str(),
                "resize finished"
            );
        }
        self.state = EditorState::Idle;
        EditOutcome::Finished
    }
}
