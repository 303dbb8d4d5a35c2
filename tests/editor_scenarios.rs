// Editor scenarios: drawing, corner edits and frame commands driven through a panel.

mod test_helpers;

use assert_matches::assert_matches;
use frame_annotator::AnnotatorError;
use frame_annotator::editor::AnnotationEditor;
use frame_annotator::geometry::{BoundingBox, Corner, Point};
use frame_annotator::state::{AnnotationStore, EditOutcome, EditorState, PointerEvent};
use test_helpers::{drag, mixed_store, panel_with_frames};

#[test]
fn drag_commits_box_and_returns_to_idle() {
    let mut panel = panel_with_frames("dog", 1);
    for event in drag((5.0, 5.0), (20.0, 15.0)) {
        panel.handle_pointer(event).unwrap();
    }

    assert_eq!(panel.store().get(0), &[BoundingBox::new(5.0, 5.0, 15.0, 10.0)]);
    assert!(panel.editor().state().is_idle());
}

#[test]
fn grabbing_bottom_right_edits_existing_box() {
    let mut panel = panel_with_frames("dog", 1);
    for event in drag((0.0, 0.0), (10.0, 10.0)) {
        panel.handle_pointer(event).unwrap();
    }

    panel
        .handle_pointer(PointerEvent::Down(Point::new(10.0, 10.0)))
        .unwrap();
    assert_matches!(
        panel.editor().state(),
        EditorState::Editing {
            box_index: 0,
            corner: Corner::BottomRight,
            ..
        }
    );

    panel
        .handle_pointer(PointerEvent::Move(Point::new(20.0, 20.0)))
        .unwrap();
    panel.handle_pointer(PointerEvent::Up).unwrap();

    assert_eq!(panel.store().get(0), &[BoundingBox::new(0.0, 0.0, 20.0, 20.0)]);
}

#[test]
fn top_left_drag_past_opposite_corner_goes_negative() {
    let mut store = AnnotationStore::new();
    store.append(0, BoundingBox::new(10.0, 10.0, 20.0, 20.0));
    let mut editor = AnnotationEditor::default();

    editor
        .handle(PointerEvent::Down(Point::new(12.0, 8.0)), &mut store)
        .unwrap();
    let outcome = editor
        .handle(PointerEvent::Move(Point::new(50.0, 45.0)), &mut store)
        .unwrap();

    let expected = BoundingBox::new(50.0, 45.0, -20.0, -15.0);
    assert_eq!(
        outcome,
        EditOutcome::Resized {
            box_index: 0,
            bbox: expected
        }
    );
    assert_eq!(store.get(0)[0].bottom_right(), Point::new(30.0, 30.0));
}

#[test]
fn resize_of_cleared_box_is_a_no_op() {
    let mut store = AnnotationStore::new();
    store.append(0, BoundingBox::new(0.0, 0.0, 10.0, 10.0));
    let mut editor = AnnotationEditor::default();

    editor
        .handle(PointerEvent::Down(Point::new(0.0, 0.0)), &mut store)
        .unwrap();
    // The box disappears underneath the gesture.
    store.clear(0);

    let outcome = editor
        .handle(PointerEvent::Move(Point::new(5.0, 5.0)), &mut store)
        .unwrap();
    assert_eq!(outcome, EditOutcome::Ignored);
    assert!(store.get(0).is_empty());

    editor.handle(PointerEvent::Up, &mut store).unwrap();
    assert!(editor.state().is_idle());
}

#[test]
fn navigation_waits_for_gesture_to_end() {
    let mut panel = panel_with_frames("dog", 3);
    panel
        .handle_pointer(PointerEvent::Down(Point::new(40.0, 40.0)))
        .unwrap();

    assert_matches!(
        panel.next_frame(),
        Err(AnnotatorError::EditInProgress { .. })
    );
    assert_matches!(
        panel.clear_current_frame(),
        Err(AnnotatorError::EditInProgress { .. })
    );

    panel
        .handle_pointer(PointerEvent::Move(Point::new(60.0, 70.0)))
        .unwrap();
    panel.handle_pointer(PointerEvent::Up).unwrap();
    assert_eq!(panel.next_frame().unwrap(), 1);
    assert_eq!(panel.store().get(0).len(), 1);
}

#[test]
fn same_events_give_same_store() {
    let events: Vec<PointerEvent> = [
        drag((5.0, 5.0), (30.0, 25.0)),
        drag((30.0, 25.0), (45.0, 50.0)),
        drag((70.0, 70.0), (60.0, 50.0)),
        drag((5.0, 6.0), (1.0, 2.0)),
    ]
    .concat();

    let run = || {
        let mut store = mixed_store();
        let mut editor = AnnotationEditor::default();
        for event in &events {
            editor.handle(*event, &mut store).unwrap();
        }
        store
    };

    let first = run();
    assert_eq!(first, run());
    assert_ne!(first, mixed_store());
}
