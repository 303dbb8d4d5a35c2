//! Scripted editing sessions.
//!
//! A session file names the stills to capture into one category panel and
//! the pointer and keyboard events to play back against them.

use crate::error::{AnnotatorError, Result};
use crate::geometry::Point;
use crate::panel::CategoryPanel;
use crate::state::{EditOutcome, PointerEvent};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SessionEvent {
    PointerDown { x: f64, y: f64 },
    PointerMove { x: f64, y: f64 },
    PointerUp,
    NextFrame,
    PreviousFrame,
    ClearFrame,
    Cancel,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionScript {
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub images: Vec<PathBuf>,
    #[serde(default)]
    pub events: Vec<SessionEvent>,
}

impl SessionScript {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let mut script: SessionScript = serde_json::from_str(&content)?;
        // Relative image paths are resolved against the script's folder.
        let base_dir = path.parent().unwrap_or(Path::new("."));
        for image in &mut script.images {
            if image.is_relative() {
                *image = base_dir.join(&*image);
            }
        }
        Ok(script)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplaySummary {
    pub events: usize,
    pub commits: usize,
    /// Commands refused because a gesture was still in progress.
    pub rejected: usize,
}

/// Plays `events` against `panel` in order.
///
/// Commands refused mid-gesture are counted and skipped; anything else that
/// fails, such as a non-finite coordinate, stops the replay.
pub fn replay(panel: &mut CategoryPanel, events: &[SessionEvent]) -> Result<ReplaySummary> {
    let mut summary = ReplaySummary::default();
    for event in events {
        summary.events += 1;
        let result = match *event {
            SessionEvent::PointerDown { x, y } => {
                panel.handle_pointer(PointerEvent::Down(Point::new(x, y))).map(Some)
            }
            SessionEvent::PointerMove { x, y } => {
                panel.handle_pointer(PointerEvent::Move(Point::new(x, y))).map(Some)
            }
            SessionEvent::PointerUp => panel.handle_pointer(PointerEvent::Up).map(Some),
            SessionEvent::NextFrame => panel.next_frame().map(|_| None),
            SessionEvent::PreviousFrame => panel.previous_frame().map(|_| None),
            SessionEvent::ClearFrame => panel.clear_current_frame().map(|_| None),
            SessionEvent::Cancel => {
                panel.cancel_edit();
                Ok(None)
            }
        };

        match result {
            Ok(Some(EditOutcome::Committed { .. })) => summary.commits += 1,
            Ok(_) => {}
            Err(AnnotatorError::EditInProgress { action }) => {
                warn!(panel = panel.id(), ?event, action, "command refused mid-gesture");
                summary.rejected += 1;
            }
            Err(e) => return Err(e),
        }
    }
    info!(
        panel = panel.id(),
        events = summary.events,
        commits = summary.commits,
        rejected = summary.rejected,
        "session replayed"
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_parse_from_tagged_json() {
        let events: Vec<SessionEvent> = serde_json::from_str(
            r#"[
                {"type": "pointer_down", "x": 5, "y": 5},
                {"type": "pointer_move", "x": 20.5, "y": 15},
                {"type": "pointer_up"},
                {"type": "next_frame"},
                {"type": "clear_frame"}
            ]"#,
        )
        .unwrap();

        assert_eq!(
            events,
            vec![
                SessionEvent::PointerDown { x: 5.0, y: 5.0 },
                SessionEvent::PointerMove { x: 20.5, y: 15.0 },
                SessionEvent::PointerUp,
                SessionEvent::NextFrame,
                SessionEvent::ClearFrame,
            ]
        );
    }

    #[test]
    fn script_resolves_relative_images() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(
            &path,
            r#"{"category": "dog", "images": ["a.png", "/abs/b.png"], "events": []}"#,
        )
        .unwrap();

        let script = SessionScript::load(&path).unwrap();
        assert_eq!(script.category.as_deref(), Some("dog"));
        assert_eq!(script.images[0], dir.path().join("a.png"));
        assert_eq!(script.images[1], PathBuf::from("/abs/b.png"));
    }
}
