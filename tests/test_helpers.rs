// Test helper functions for creating test scenarios
#![allow(dead_code)]

use frame_annotator::config::AppConfig;
use frame_annotator::frames::FrameSource;
use frame_annotator::geometry::{BoundingBox, Point};
use frame_annotator::panel::CategoryPanel;
use frame_annotator::session::SessionEvent;
use frame_annotator::state::{AnnotationStore, PointerEvent};
use image::{Rgba, RgbaImage};

/// Frame source that always returns a solid gray picture
pub struct GraySource {
    pub width: u32,
    pub height: u32,
}

impl FrameSource for GraySource {
    fn capture_frame(&mut self) -> Option<RgbaImage> {
        Some(RgbaImage::from_pixel(self.width, self.height, Rgba([90, 90, 90, 255])))
    }
}

/// Config with a small capture size so tests stay fast
pub fn small_config() -> AppConfig {
    let mut config = AppConfig::default();
    config.capture.width = 100;
    config.capture.height = 80;
    config
}

/// Create a panel with `frames` captured frames
pub fn panel_with_frames(category: &str, frames: usize) -> CategoryPanel {
    let mut panel = CategoryPanel::new(1, category, &small_config());
    let mut source = GraySource {
        width: 200,
        height: 160,
    };
    for _ in 0..frames {
        panel.capture(&mut source).unwrap();
    }
    panel
}

/// Pointer events for one drag from `from` to `to`
pub fn drag(from: (f64, f64), to: (f64, f64)) -> Vec<PointerEvent> {
    vec![
        PointerEvent::Down(Point::new(from.0, from.1)),
        PointerEvent::Move(Point::new(to.0, to.1)),
        PointerEvent::Up,
    ]
}

/// Session events for one drag from `from` to `to`
pub fn drag_events(from: (f64, f64), to: (f64, f64)) -> Vec<SessionEvent> {
    vec![
        SessionEvent::PointerDown {
            x: from.0,
            y: from.1,
        },
        SessionEvent::PointerMove { x: to.0, y: to.1 },
        SessionEvent::PointerUp,
    ]
}

/// Store with a few boxes spread over three frames, some drawn backwards
pub fn mixed_store() -> AnnotationStore {
    let mut store = AnnotationStore::new();
    store.append(0, BoundingBox::new(10.0, 10.0, 20.0, 20.0));
    store.append(0, BoundingBox::new(60.0, 50.0, -20.0, -10.0));
    store.append(2, BoundingBox::new(5.0, 5.0, 1.0, -3.0));
    store.append(1, BoundingBox::new(0.0, 0.0, 99.0, 79.0));
    store.append(2, BoundingBox::new(30.0, 30.0, 0.0, 0.0));
    store
}
