//! Integration tests: canvas model + connection graph + export.
//!
//! Exercises removal cascades, edge invariants, curve geometry, and the
//! document format across module boundaries.

use ff_core::{
    CanvasModel, ConnectionGraph, Document, Point, StepCatalog, StepId, TemplateId, path_between,
    path_for,
};
use pretty_assertions::assert_eq;

fn place(canvas: &mut CanvasModel, catalog: &StepCatalog, template: u32, x: f64, y: f64) -> StepId {
    let t = catalog.get(TemplateId::from_raw(template)).unwrap();
    canvas.place_step(t, Point::new(x, y)).instance_id
}

/// Mirrors the session's removal cascade.
fn remove(canvas: &mut CanvasModel, graph: &mut ConnectionGraph, id: StepId) {
    if canvas.remove_step(id).is_some() {
        graph.remove_incident(id);
    }
}

// ─── Removal cascade ────────────────────────────────────────────────────

#[test]
fn removing_source_drops_its_connections() {
    let catalog = StepCatalog::builtin();
    let mut canvas = CanvasModel::new();
    let mut graph = ConnectionGraph::new();
    let a = place(&mut canvas, &catalog, 1, 0.0, 0.0);
    let b = place(&mut canvas, &catalog, 2, 100.0, 0.0);

    assert!(graph.add_connection(a, b, &canvas).is_some());
    remove(&mut canvas, &mut graph, a);

    assert!(graph.is_empty());
    let ids: Vec<StepId> = canvas.steps().iter().map(|s| s.instance_id).collect();
    assert_eq!(ids, vec![b]);
}

#[test]
fn removal_touches_only_referencing_entities() {
    let catalog = StepCatalog::builtin();
    let mut canvas = CanvasModel::new();
    let mut graph = ConnectionGraph::new();
    let ids: Vec<StepId> = (0..5)
        .map(|i| place(&mut canvas, &catalog, 1 + (i % 3), i as f64 * 50.0, 0.0))
        .collect();
    for w in ids.windows(2) {
        graph.add_connection(w[0], w[1], &canvas);
    }
    graph.add_connection(ids[4], ids[0], &canvas);
    let before: Vec<_> = graph.connections().to_vec();

    remove(&mut canvas, &mut graph, ids[2]);

    let expected_steps: Vec<StepId> = [0, 1, 3, 4].iter().map(|&i| ids[i]).collect();
    let steps: Vec<StepId> = canvas.steps().iter().map(|s| s.instance_id).collect();
    assert_eq!(steps, expected_steps);

    let expected_conns: Vec<_> = before.into_iter().filter(|c| !c.touches(ids[2])).collect();
    assert_eq!(graph.connections().to_vec(), expected_conns);
}

// ─── Curve geometry ─────────────────────────────────────────────────────

#[test]
fn path_for_horizontal_pair() {
    let catalog = StepCatalog::builtin();
    let mut canvas = CanvasModel::new();
    let a = place(&mut canvas, &catalog, 1, 0.0, 0.0);
    let b = place(&mut canvas, &catalog, 2, 100.0, 0.0);

    let path = path_for(canvas.get_step(a).unwrap(), canvas.get_step(b).unwrap());
    assert_eq!(path.control(), Point::new(50.0, -30.0));
    assert_eq!(path.start(), Point::new(0.0, 0.0));
    assert_eq!(path.end(), Point::new(100.0, 0.0));
}

#[test]
fn path_follows_live_positions() {
    let catalog = StepCatalog::builtin();
    let mut canvas = CanvasModel::new();
    let a = place(&mut canvas, &catalog, 1, 0.0, 0.0);
    let b = place(&mut canvas, &catalog, 2, 100.0, 0.0);
    canvas.update_position(b, 200.0, 40.0);

    let path = path_between(canvas.get_step(a), canvas.get_step(b)).unwrap();
    assert_eq!(path.control(), Point::new(100.0, -60.0));
    assert_eq!(path.to_svg(), "M 0 0 Q 100 -60, 200 40");

    assert!(path_between(canvas.get_step(a), None).is_none());
}

// ─── Document ───────────────────────────────────────────────────────────

#[test]
fn fixture_document_parses() {
    let doc = Document::from_json(include_str!("fixtures/demo_workflow.json")).unwrap();
    assert_eq!(doc.steps.len(), 3);
    assert_eq!(doc.connections.len(), 2);
    assert_eq!(doc.connections[1].connection_id.to_string(), "conn-2");
    assert_eq!(doc.steps[2].name(), "Post to Slack");
    assert_eq!(doc.saved_at.to_rfc3339(), "2025-06-01T12:00:00+00:00");
}

#[test]
fn fixture_document_loads_into_model() {
    let doc = Document::from_json(include_str!("fixtures/demo_workflow.json")).unwrap();
    let mut canvas = CanvasModel::new();
    let mut graph = ConnectionGraph::new();
    canvas.replace_steps(doc.steps.clone());
    graph.replace_connections(doc.connections.clone(), &canvas);

    let exported = ff_core::export_at(&canvas, &graph, doc.saved_at);
    assert_eq!(exported, doc);

    // New ids continue past the loaded ones.
    let catalog = StepCatalog::builtin();
    let next = place(&mut canvas, &catalog, 1, 0.0, 0.0);
    assert_eq!(next, StepId::from_raw(1004));
    let a = StepId::from_raw(1001);
    let conn = graph.add_connection(next, a, &canvas).unwrap();
    assert_eq!(conn.connection_id.to_string(), "conn-3");
}
