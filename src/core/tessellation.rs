//! Tessellierung der Bézier-Kurve in eine Polyline mit Bogenlängen.
//!
//! Die Bogenlänge jedes Samples treibt das Strichmuster im Spline-Shader.
//! Sie ist monoton steigend und in denselben Screen-Space-Einheiten wie die
//! Positionen angegeben.

use super::bezier::BezierEvaluator;
use super::{ControlPoint, Quality};
use glam::Vec2;

/// Obergrenze der Vorab-Reservierung; größere Folgen wachsen beim Einfügen.
const MAX_RESERVE: usize = 1 << 16;

/// Ein Sample der tessellierten Kurve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplineVertex {
    /// Position in Viewport-Pixeln
    pub position: Vec2,
    /// RGBA-Farbe (konstante Kurvenfarbe)
    pub color: [u8; 4],
    /// Kumulierte Bogenlänge vom ersten Sample bis hierher
    pub arc_length: f32,
}

/// Anzahl der Samples für `point_count` Kontrollpunkte bei gegebener Qualität.
///
/// Liefert 0, wenn keine Kurve entsteht (weniger als 2 Kontrollpunkte).
pub fn sample_count(point_count: usize, quality: Quality) -> usize {
    if point_count < 2 {
        return 0;
    }
    point_count.saturating_mul(quality.get() as usize)
}

/// Tessellierer mit wiederverwendbarem Evaluator.
#[derive(Debug, Default)]
pub struct Tessellator {
    evaluator: BezierEvaluator,
}

impl Tessellator {
    /// Erstellt einen neuen Tessellierer.
    pub fn new() -> Self {
        Self {
            evaluator: BezierEvaluator::new(),
        }
    }

    /// Baut die Sample-Folge neu in `out` auf (vorheriger Inhalt wird verworfen).
    ///
    /// `t_i = i / (N - 1)` schließt beide Endpunkte ein. Bei N ≤ 1 bleibt
    /// `out` leer, statt durch null zu teilen.
    pub fn rebuild_into(
        &mut self,
        points: &[ControlPoint],
        quality: Quality,
        color: [u8; 4],
        out: &mut Vec<SplineVertex>,
    ) {
        out.clear();

        let n = sample_count(points.len(), quality);
        if n <= 1 {
            return;
        }
        out.reserve(n.min(MAX_RESERVE));

        let denominator = (n - 1) as f32;
        let mut arc_length = 0.0f32;
        let mut previous: Option<Vec2> = None;

        for i in 0..n {
            let t = i as f32 / denominator;
            let Some(position) = self.evaluator.evaluate(points, t) else {
                return;
            };
            if let Some(prev) = previous {
                arc_length += prev.distance(position);
            }
            log::trace!("Sample {i}: t={t:.4}, Bogenlänge={arc_length:.3}");

            out.push(SplineVertex {
                position,
                color,
                arc_length,
            });
            previous = Some(position);
        }
    }

    /// Wie [`Self::rebuild_into`], liefert aber einen neuen Vec.
    pub fn rebuild(
        &mut self,
        points: &[ControlPoint],
        quality: Quality,
        color: [u8; 4],
    ) -> Vec<SplineVertex> {
        let mut out = Vec::new();
        self.rebuild_into(points, quality, color, &mut out);
        out
    }
}

/// Tessellierung ohne wiederverwendeten Zustand.
pub fn tessellate(points: &[ControlPoint], quality: Quality, color: [u8; 4]) -> Vec<SplineVertex> {
    Tessellator::new().rebuild(points, quality, color)
}

/// Gesamtlänge der Polyline (Bogenlänge des letzten Samples).
pub fn total_arc_length(vertices: &[SplineVertex]) -> f32 {
    vertices.last().map_or(0.0, |v| v.arc_length)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const CURVE: [u8; 4] = [180, 255, 180, 255];

    fn cp(x: f32, y: f32) -> ControlPoint {
        ControlPoint::new(Vec2::new(x, y), [255, 255, 255, 255])
    }

    #[test]
    fn fewer_than_two_points_yield_nothing() {
        for q in [1, 2, 7] {
            let quality = Quality::clamped(q);
            assert!(tessellate(&[], quality, CURVE).is_empty());
            assert!(tessellate(&[cp(1.0, 1.0)], quality, CURVE).is_empty());
        }
    }

    #[test]
    fn sample_count_follows_density_rule() {
        assert_eq!(sample_count(0, Quality::clamped(5)), 0);
        assert_eq!(sample_count(1, Quality::clamped(5)), 0);
        assert_eq!(sample_count(2, Quality::MIN), 2);
        assert_eq!(sample_count(3, Quality::clamped(4)), 12);
    }

    #[test]
    fn straight_segment_quality_one() {
        let vertices = tessellate(&[cp(0.0, 0.0), cp(100.0, 0.0)], Quality::MIN, CURVE);

        assert_eq!(vertices.len(), 2);
        assert_eq!(vertices[0].position, Vec2::new(0.0, 0.0));
        assert_eq!(vertices[0].arc_length, 0.0);
        assert_eq!(vertices[1].position, Vec2::new(100.0, 0.0));
        assert_abs_diff_eq!(vertices[1].arc_length, 100.0, epsilon = 1e-4);
        assert!(vertices.iter().all(|v| v.color == CURVE));
    }

    #[test]
    fn arc_length_accumulates_segment_distances() {
        let vertices = tessellate(
            &[cp(0.0, 0.0), cp(100.0, 0.0), cp(100.0, 100.0)],
            Quality::clamped(4),
            CURVE,
        );

        let mut expected = 0.0f32;
        for pair in vertices.windows(2) {
            expected += pair[0].position.distance(pair[1].position);
            assert_abs_diff_eq!(pair[1].arc_length, expected, epsilon = 1e-3);
        }
        assert_abs_diff_eq!(total_arc_length(&vertices), expected, epsilon = 1e-3);
    }

    #[test]
    fn rebuild_into_replaces_previous_content() {
        let mut tessellator = Tessellator::new();
        let mut out = Vec::new();
        tessellator.rebuild_into(
            &[cp(0.0, 0.0), cp(10.0, 0.0)],
            Quality::clamped(3),
            CURVE,
            &mut out,
        );
        assert_eq!(out.len(), 6);

        tessellator.rebuild_into(&[cp(0.0, 0.0)], Quality::clamped(3), CURVE, &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn total_length_of_empty_polyline_is_zero() {
        assert_eq!(total_arc_length(&[]), 0.0);
    }
}
