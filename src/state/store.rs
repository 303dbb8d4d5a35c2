//! Per-frame annotation storage.

use crate::geometry::BoundingBox;
use std::collections::BTreeMap;
use tracing::warn;

/// Boxes keyed by frame index, in creation order within each frame.
///
/// A frame with no entry and a frame mapped to an empty list both mean
/// "no annotations".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnnotationStore {
    frames: BTreeMap<usize, Vec<BoundingBox>>,
}

impl AnnotationStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, frame_index: usize, bbox: BoundingBox) {
        self.frames.entry(frame_index).or_default().push(bbox);
    }

    /// Replaces the box at `position`. Returns `false` and leaves the store
    /// untouched when the position does not exist for that frame.
    pub fn replace_at(&mut self, frame_index: usize, position: usize, bbox: BoundingBox) -> bool {
        match self
            .frames
            .get_mut(&frame_index)
            .and_then(|boxes| boxes.get_mut(position))
        {
            Some(slot) => {
                *slot = bbox;
                true
            }
            None => {
                warn!(frame_index, position, "replace ignored: no such box");
                false
            }
        }
    }

    /// Empties the frame's list; the key is kept.
    pub fn clear(&mut self, frame_index: usize) {
        self.frames.entry(frame_index).or_default().clear();
    }

    pub fn get(&self, frame_index: usize) -> &[BoundingBox] {
        self.frames
            .get(&frame_index)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// All frames that have an entry, in ascending index order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &[BoundingBox])> {
        self.frames
            .iter()
            .map(|(index, boxes)| (*index, boxes.as_slice()))
    }

    pub fn box_count(&self) -> usize {
        self.frames.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.box_count() == 0
    }

    /// Drops every frame entry.
    pub fn reset(&mut self) {
        self.frames.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bbox(x: f64) -> BoundingBox {
        BoundingBox::new(x, 0.0, 10.0, 10.0)
    }

    #[test]
    fn append_keeps_insertion_order() {
        let mut store = AnnotationStore::new();
        store.append(2, bbox(1.0));
        store.append(2, bbox(2.0));
        store.append(0, bbox(3.0));

        assert_eq!(store.get(2), &[bbox(1.0), bbox(2.0)]);
        assert_eq!(store.get(0), &[bbox(3.0)]);
        assert_eq!(store.box_count(), 3);
    }

    #[test]
    fn get_missing_frame_is_empty() {
        let store = AnnotationStore::new();
        assert!(store.get(7).is_empty());
    }

    #[test]
    fn replace_at_out_of_range_is_reported() {
        let mut store = AnnotationStore::new();
        store.append(0, bbox(1.0));

        assert!(!store.replace_at(0, 1, bbox(9.0)));
        assert!(!store.replace_at(4, 0, bbox(9.0)));
        assert_eq!(store.get(0), &[bbox(1.0)]);

        assert!(store.replace_at(0, 0, bbox(9.0)));
        assert_eq!(store.get(0), &[bbox(9.0)]);
    }

    #[test]
    fn clear_keeps_key_with_empty_list() {
        let mut store = AnnotationStore::new();
        store.append(1, bbox(1.0));
        store.clear(1);

        assert!(store.get(1).is_empty());
        let keys: Vec<usize> = store.iter().map(|(i, _)| i).collect();
        assert_eq!(keys, vec![1]);
        assert!(store.is_empty());
    }

    #[test]
    fn iter_is_sorted_by_frame() {
        let mut store = AnnotationStore::new();
        store.append(5, bbox(1.0));
        store.append(1, bbox(2.0));
        store.append(3, bbox(3.0));

        let keys: Vec<usize> = store.iter().map(|(i, _)| i).collect();
        assert_eq!(keys, vec![1, 3, 5]);
    }
}
