use crate::geometry::{BoundingBox, Corner, Point};
use serde::{Deserialize, Serialize};

/// The editing surface's current gesture.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum EditorState {
    #[default]
    Idle,
    /// A new box is being dragged out from `anchor`. `preview` stays `None`
    /// until the pointer has moved at least once.
    Drawing {
        anchor: Point,
        preview: Option<BoundingBox>,
    },
    /// A corner of an existing box is being dragged. `original` is the box
    /// as it was when the drag started, used to undo a cancelled edit.
    Editing {
        box_index: usize,
        corner: Corner,
        original: BoundingBox,
    },
}

impl EditorState {
    pub fn is_idle(&self) -> bool {
        matches!(self, EditorState::Idle)
    }

    pub fn name(&self) -> &'static str {
        match self {
            EditorState::Idle => "idle",
            EditorState::Drawing { .. } => "drawing",
            EditorState::Editing { .. } => "editing",
        }
    }
}

/// Pointer input, already translated into frame pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PointerEvent {
    Down(Point),
    Move(Point),
    Up,
}

/// What a handled event did to the store.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EditOutcome {
    /// Nothing changed.
    Ignored,
    DrawingStarted,
    EditStarted { box_index: usize, corner: Corner },
    /// The live preview moved; nothing is stored yet.
    Previewed(BoundingBox),
    /// A new box was appended to the frame at `position`.
    Committed { position: usize, bbox: BoundingBox },
    /// An existing box was rewritten in place.
    Resized { box_index: usize, bbox: BoundingBox },
    /// The pointer was released; the state machine is idle again.
    Finished,
}
