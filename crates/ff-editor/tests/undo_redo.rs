//! Integration tests: session history (ff-editor ↔ ff-core).
//!
//! Verifies that gestures land as single history entries and that undo /
//! redo restore deep-equal state without aliasing the stored snapshots.

use ff_core::{Point, Snapshot, StepCatalog, StepId, TemplateId};
use ff_editor::{DragEvent, EditorConfig, EditorSession, SeedKind};
use pretty_assertions::assert_eq;

fn empty_session() -> EditorSession {
    EditorSession::new(StepCatalog::builtin(), EditorConfig::default())
}

fn demo_session() -> EditorSession {
    let config = EditorConfig {
        seed: SeedKind::Demo,
        ..EditorConfig::default()
    };
    EditorSession::new(StepCatalog::builtin(), config)
}

fn snapshot(s: &EditorSession) -> Snapshot {
    Snapshot::capture(s.canvas(), s.graph())
}

fn drop_template(s: &mut EditorSession, template: u32, x: f64, y: f64) -> StepId {
    s.handle_drag_event(&DragEvent::start_template(TemplateId::from_raw(template), x, y));
    s.handle_drag_event(&DragEvent::drop_at(x, y));
    s.steps().last().unwrap().instance_id
}

// ─── Scenarios ──────────────────────────────────────────────────────────

#[test]
fn place_then_undo_leaves_empty_canvas() {
    let mut s = empty_session();
    drop_template(&mut s, 1, 10.0, 10.0);
    assert_eq!(s.steps().len(), 1);
    assert_eq!(s.steps()[0].position(), Point::new(10.0, 10.0));
    assert_eq!(s.history().len(), 2);

    assert!(s.undo());
    assert!(s.steps().is_empty());
}

#[test]
fn place_connect_remove_source() {
    let mut s = empty_session();
    let a = drop_template(&mut s, 1, 0.0, 0.0);
    let b = drop_template(&mut s, 2, 100.0, 0.0);
    assert!(s.connect(a, b).is_some());
    assert!(s.remove_step(a));

    assert!(s.connections().is_empty());
    let ids: Vec<StepId> = s.steps().iter().map(|st| st.instance_id).collect();
    assert_eq!(ids, vec![b]);
}

#[test]
fn fifty_moves_make_one_history_entry() {
    let mut s = empty_session();
    let a = drop_template(&mut s, 1, 0.0, 0.0);
    let before = s.history().len();

    s.handle_drag_event(&DragEvent::start_instance(a, 0.0, 0.0));
    for i in 1..=50 {
        s.handle_drag_event(&DragEvent::drag_move(i as f64 * 2.0, i as f64));
    }
    s.handle_drag_event(&DragEvent::drag_end(100.0, 50.0));

    assert_eq!(s.history().len(), before + 1);
    assert_eq!(s.canvas().get_step(a).unwrap().position(), Point::new(100.0, 50.0));

    // One undo reverses the whole gesture.
    assert!(s.undo());
    assert_eq!(s.canvas().get_step(a).unwrap().position(), Point::new(0.0, 0.0));
}

// ─── Properties ─────────────────────────────────────────────────────────

#[test]
fn undo_restores_previous_snapshot_and_redo_reapplies() {
    let mut s = demo_session();
    let seed = snapshot(&s);

    let [a, _, c] = ff_editor::session::DEMO_STEP_IDS;
    s.connect(c, a).unwrap();
    let after = snapshot(&s);

    assert!(s.undo());
    assert_eq!(snapshot(&s), seed);
    assert!(s.redo());
    assert_eq!(snapshot(&s), after);
}

#[test]
fn every_step_of_a_session_unwinds_in_order() {
    let mut s = demo_session();
    let mut states = vec![snapshot(&s)];

    let placed = drop_template(&mut s, 3, 500.0, 300.0);
    states.push(snapshot(&s));
    s.connect(StepId::from_raw(1003), placed).unwrap();
    states.push(snapshot(&s));
    s.select(StepId::from_raw(1002));
    assert!(s.remove_selected());
    states.push(snapshot(&s));
    let conn = s.connections()[0].connection_id;
    assert!(s.disconnect(conn));
    states.push(snapshot(&s));

    for expected in states.iter().rev().skip(1) {
        assert!(s.undo());
        assert_eq!(&snapshot(&s), expected);
    }
    assert!(!s.undo());

    for expected in states.iter().skip(1) {
        assert!(s.redo());
        assert_eq!(&snapshot(&s), expected);
    }
    assert!(!s.redo());
}

#[test]
fn push_after_undo_discards_redo_branch() {
    let mut s = empty_session();
    drop_template(&mut s, 1, 0.0, 0.0);
    assert!(s.undo());
    assert!(s.history().can_redo());

    drop_template(&mut s, 2, 50.0, 50.0);
    assert!(!s.history().can_redo());
    assert!(!s.redo());
    assert_eq!(s.steps().len(), 1);
    assert_eq!(s.steps()[0].name(), "Upload File");
}

#[test]
fn editing_after_undo_does_not_corrupt_history() {
    let mut s = empty_session();
    let a = drop_template(&mut s, 1, 10.0, 10.0);
    drop_template(&mut s, 2, 20.0, 20.0);

    assert!(s.undo());
    let one_step = snapshot(&s);

    // Live moves act on the restored copy, not the stored entry.
    s.handle_drag_event(&DragEvent::start_instance(a, 0.0, 0.0));
    s.handle_drag_event(&DragEvent::drag_move(400.0, 400.0));
    s.handle_drag_event(&DragEvent::drag_end(400.0, 400.0));
    assert!(!s.history().can_redo());

    assert!(s.undo());
    assert_eq!(snapshot(&s), one_step);
    assert_eq!(s.canvas().get_step(a).unwrap().position(), Point::new(10.0, 10.0));
}

#[test]
fn history_depth_bounds_memory() {
    let config = EditorConfig {
        history_depth: 4,
        ..EditorConfig::default()
    };
    let mut s = EditorSession::new(StepCatalog::builtin(), config);
    for i in 0..10 {
        drop_template(&mut s, 1, i as f64, 0.0);
    }
    assert_eq!(s.history().len(), 4);

    let mut undos = 0;
    while s.undo() {
        undos += 1;
    }
    assert_eq!(undos, 3);
    assert_eq!(s.steps().len(), 7);
}

#[test]
fn ids_stay_unique_across_undo() {
    let mut s = empty_session();
    let first = drop_template(&mut s, 1, 0.0, 0.0);
    s.undo();
    let second = drop_template(&mut s, 1, 0.0, 0.0);
    assert_ne!(first, second);
}
