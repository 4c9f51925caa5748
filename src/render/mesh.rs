//! Mesh-Aufbau: dicke Linien als Quads (je zwei Dreiecke pro Segment).

use super::types::{PointVertex, SplineGpuVertex};
use crate::core::{ControlPoint, SplineVertex};
use glam::Vec2;

/// Halbe Breite senkrecht zum Segment, `None` bei Segmenten der Länge 0.
fn half_width_offset(start: Vec2, end: Vec2, thickness: f32) -> Option<Vec2> {
    let dir = (end - start).normalize_or_zero();
    if dir == Vec2::ZERO {
        return None;
    }
    Some(dir.perp() * (thickness * 0.5))
}

/// Erweitert den Linienzug der Kontrollpunkte zu Quads.
pub(super) fn build_polygon_mesh(
    vertices: &mut Vec<PointVertex>,
    points: &[ControlPoint],
    thickness: f32,
) {
    vertices.clear();
    for pair in points.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        let Some(perp) = half_width_offset(a.position, b.position, thickness) else {
            continue;
        };

        let v0 = PointVertex {
            position: (a.position + perp).to_array(),
            color: a.color,
        };
        let v1 = PointVertex {
            position: (a.position - perp).to_array(),
            color: a.color,
        };
        let v2 = PointVertex {
            position: (b.position + perp).to_array(),
            color: b.color,
        };
        let v3 = PointVertex {
            position: (b.position - perp).to_array(),
            color: b.color,
        };

        vertices.extend_from_slice(&[v0, v1, v2, v2, v1, v3]);
    }
}

/// Erweitert die Kurven-Samples zu Quads.
///
/// Beide Kanten eines Quads tragen die Bogenlänge ihres Samples, damit das
/// Strichmuster entlang des Segments interpoliert wird.
pub(super) fn build_spline_mesh(
    vertices: &mut Vec<SplineGpuVertex>,
    spline: &[SplineVertex],
    thickness: f32,
) {
    vertices.clear();
    for pair in spline.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        let Some(perp) = half_width_offset(a.position, b.position, thickness) else {
            continue;
        };

        let at = |position: Vec2, sample: &SplineVertex| SplineGpuVertex {
            position: position.to_array(),
            color: sample.color,
            arc_length: sample.arc_length,
        };
        let v0 = at(a.position + perp, a);
        let v1 = at(a.position - perp, a);
        let v2 = at(b.position + perp, b);
        let v3 = at(b.position - perp, b);

        vertices.extend_from_slice(&[v0, v1, v2, v2, v1, v3]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(x: f32, y: f32, arc_length: f32) -> SplineVertex {
        SplineVertex {
            position: Vec2::new(x, y),
            color: [180, 255, 180, 255],
            arc_length,
        }
    }

    #[test]
    fn horizontal_segment_expands_to_quad_of_given_width() {
        let mut mesh = Vec::new();
        build_spline_mesh(
            &mut mesh,
            &[sample(0.0, 10.0, 0.0), sample(40.0, 10.0, 40.0)],
            5.0,
        );

        assert_eq!(mesh.len(), 6);
        for v in &mesh {
            assert!((v.position[1] - 10.0).abs() > 2.49 && (v.position[1] - 10.0).abs() < 2.51);
            if v.position[0] == 0.0 {
                assert_eq!(v.arc_length, 0.0);
            } else {
                assert_eq!(v.position[0], 40.0);
                assert_eq!(v.arc_length, 40.0);
            }
        }
    }

    #[test]
    fn polyline_yields_two_triangles_per_segment() {
        let points = [
            ControlPoint::new(Vec2::new(0.0, 0.0), [255; 4]),
            ControlPoint::new(Vec2::new(30.0, 0.0), [255; 4]),
            ControlPoint::new(Vec2::new(30.0, 30.0), [255; 4]),
        ];
        let mut mesh = vec![PointVertex {
            position: [9.0, 9.0],
            color: [0; 4],
        }];

        build_polygon_mesh(&mut mesh, &points, 4.0);

        assert_eq!(mesh.len(), 12);
        // zweites Segment ist vertikal: x-Versatz ±2
        assert!(mesh[6..].iter().all(|v| (v.position[0] - 30.0).abs() == 2.0));
    }

    #[test]
    fn zero_length_segments_are_skipped() {
        let mut mesh = Vec::new();
        build_spline_mesh(
            &mut mesh,
            &[sample(5.0, 5.0, 0.0), sample(5.0, 5.0, 0.0)],
            5.0,
        );
        assert!(mesh.is_empty());

        build_spline_mesh(&mut mesh, &[sample(5.0, 5.0, 0.0)], 5.0);
        assert!(mesh.is_empty());
    }
}
