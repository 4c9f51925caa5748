use approx::assert_abs_diff_eq;
use bezier_spline_editor::core::bezier;
use bezier_spline_editor::{
    sample_count, tessellate, total_arc_length, ControlPoint, ControlPointStore, Quality,
    Tessellator,
};
use glam::Vec2;

const CURVE: [u8; 4] = [180, 255, 180, 255];

fn points(coords: &[(f32, f32)]) -> Vec<ControlPoint> {
    coords
        .iter()
        .map(|&(x, y)| ControlPoint::new(Vec2::new(x, y), [255, 255, 255, 255]))
        .collect()
}

fn wavy_polygon() -> Vec<ControlPoint> {
    points(&[
        (20.0, 300.0),
        (120.0, 40.0),
        (260.0, 520.0),
        (400.0, 80.0),
        (560.0, 450.0),
        (700.0, 200.0),
    ])
}

#[test]
fn test_evaluator_on_line_is_linear() {
    let line = points(&[(10.0, 20.0), (110.0, 220.0)]);
    for i in 0..=10 {
        let t = i as f32 / 10.0;
        let p = bezier::evaluate(&line, t).expect("zwei Punkte");
        assert_abs_diff_eq!(p.x, 10.0 + 100.0 * t, epsilon = 1e-3);
        assert_abs_diff_eq!(p.y, 20.0 + 200.0 * t, epsilon = 1e-3);
    }
}

#[test]
fn test_endpoints_match_first_and_last_control_point() {
    let polygon = wavy_polygon();
    for q in 1..=6 {
        let vertices = tessellate(&polygon, Quality::clamped(q), CURVE);
        let first = vertices.first().expect("Samples vorhanden");
        let last = vertices.last().expect("Samples vorhanden");
        assert!((first.position - polygon[0].position).length() < 1e-3);
        assert!((last.position - polygon[5].position).length() < 1e-2);
        assert_eq!(first.arc_length, 0.0);
    }
}

#[test]
fn test_arc_length_is_non_decreasing() {
    let vertices = tessellate(&wavy_polygon(), Quality::clamped(8), CURVE);
    assert!(vertices
        .windows(2)
        .all(|pair| pair[1].arc_length >= pair[0].arc_length));
    assert_abs_diff_eq!(
        total_arc_length(&vertices),
        vertices.last().map_or(0.0, |v| v.arc_length)
    );
}

#[test]
fn test_arc_length_equals_polyline_length() {
    let vertices = tessellate(&wavy_polygon(), Quality::clamped(5), CURVE);
    let polyline: f32 = vertices
        .windows(2)
        .map(|pair| pair[0].position.distance(pair[1].position))
        .sum();
    assert_abs_diff_eq!(total_arc_length(&vertices), polyline, epsilon = 1e-2);
}

#[test]
fn test_density_invariant_holds_for_all_sizes() {
    let polygon = wavy_polygon();
    for count in 0..=polygon.len() {
        for q in 1..=5 {
            let quality = Quality::clamped(q);
            let vertices = tessellate(&polygon[..count], quality, CURVE);
            let expected = if count < 2 { 0 } else { count * q as usize };
            assert_eq!(vertices.len(), expected);
            assert_eq!(sample_count(count, quality), expected);
        }
    }
}

#[test]
fn test_degenerate_inputs_yield_no_samples() {
    assert!(tessellate(&[], Quality::clamped(10), CURVE).is_empty());
    assert!(tessellate(&points(&[(5.0, 5.0)]), Quality::clamped(10), CURVE).is_empty());
}

#[test]
fn test_coincident_points_have_zero_length() {
    let vertices = tessellate(&points(&[(7.0, 7.0), (7.0, 7.0)]), Quality::clamped(3), CURVE);
    assert_eq!(vertices.len(), 6);
    assert!(vertices.iter().all(|v| v.arc_length == 0.0));
    assert!(vertices.iter().all(|v| v.position.x.is_finite()));
}

#[test]
fn test_quality_rejects_zero() {
    assert!(Quality::new(0).is_err());
    assert_eq!(Quality::clamped(0), Quality::MIN);

    let mut quality = Quality::MIN;
    assert!(!quality.decrease());
    assert_eq!(quality.get(), 1);
    quality.increase();
    assert_eq!(quality.get(), 2);
}

#[test]
fn test_tessellator_rebuild_follows_store_edits() {
    let mut store = ControlPointStore::new();
    let mut tessellator = Tessellator::new();
    let mut out = Vec::new();

    for p in wavy_polygon().into_iter().take(3) {
        store.append(p);
    }
    tessellator.rebuild_into(store.points(), Quality::clamped(4), CURVE, &mut out);
    assert_eq!(out.len(), 12);

    store.remove_last();
    store.remove_last();
    tessellator.rebuild_into(store.points(), Quality::clamped(4), CURVE, &mut out);
    assert_eq!(store.count(), 1);
    assert!(out.is_empty());
}
