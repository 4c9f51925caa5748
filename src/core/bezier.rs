//! Auswertung von Bézier-Kurven beliebigen Grades (de Casteljau).

use super::ControlPoint;
use glam::Vec2;

/// Wertet eine Bézier-Kurve per de-Casteljau-Algorithmus aus.
///
/// Hält einen wiederverwendbaren Scratch-Buffer, damit eine komplette
/// Tessellierung nur einmal allokiert.
#[derive(Debug, Default)]
pub struct BezierEvaluator {
    scratch: Vec<Vec2>,
}

impl BezierEvaluator {
    /// Erstellt einen Evaluator mit leerem Scratch-Buffer.
    pub fn new() -> Self {
        Self {
            scratch: Vec::new(),
        }
    }

    /// Berechnet den Kurvenpunkt bei `t` ∈ [0, 1].
    ///
    /// Gibt `None` zurück, wenn `points` leer ist. Bei genau einem Punkt
    /// wird dieser unverändert geliefert.
    pub fn evaluate(&mut self, points: &[ControlPoint], t: f32) -> Option<Vec2> {
        if points.is_empty() {
            return None;
        }

        self.scratch.clear();
        self.scratch.extend(points.iter().map(|p| p.position));

        // Runde k reduziert die aktiven Punkte von n-k auf n-k-1
        let n = self.scratch.len();
        for k in 0..n - 1 {
            for i in 0..n - 1 - k {
                self.scratch[i] = self.scratch[i].lerp(self.scratch[i + 1], t);
            }
        }

        Some(self.scratch[0])
    }
}

/// Einmal-Auswertung ohne wiederverwendeten Scratch-Buffer.
pub fn evaluate(points: &[ControlPoint], t: f32) -> Option<Vec2> {
    BezierEvaluator::new().evaluate(points, t)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn cp(x: f32, y: f32) -> ControlPoint {
        ControlPoint::new(Vec2::new(x, y), [255, 255, 255, 255])
    }

    #[test]
    fn empty_input_yields_none() {
        assert!(evaluate(&[], 0.5).is_none());
    }

    #[test]
    fn single_point_is_returned_unchanged() {
        let p = evaluate(&[cp(7.0, -3.0)], 0.42).expect("ein Punkt");
        assert_eq!(p, Vec2::new(7.0, -3.0));
    }

    #[test]
    fn two_points_interpolate_linearly() {
        let points = [cp(10.0, 20.0), cp(30.0, -20.0)];
        for i in 0..=10 {
            let t = i as f32 / 10.0;
            let p = evaluate(&points, t).expect("Kurvenpunkt");
            let expected = Vec2::new(10.0, 20.0).lerp(Vec2::new(30.0, -20.0), t);
            assert_abs_diff_eq!(p.x, expected.x, epsilon = 1e-4);
            assert_abs_diff_eq!(p.y, expected.y, epsilon = 1e-4);
        }
        assert_eq!(evaluate(&points, 0.0), Some(Vec2::new(10.0, 20.0)));
        assert_eq!(evaluate(&points, 1.0), Some(Vec2::new(30.0, -20.0)));
    }

    #[test]
    fn quadratic_midpoint_matches_bernstein_form() {
        // B(0.5) = 0.25·P0 + 0.5·P1 + 0.25·P2
        let points = [cp(0.0, 0.0), cp(100.0, 0.0), cp(100.0, 100.0)];
        let p = evaluate(&points, 0.5).expect("Kurvenpunkt");
        assert_abs_diff_eq!(p.x, 75.0, epsilon = 1e-4);
        assert_abs_diff_eq!(p.y, 25.0, epsilon = 1e-4);
    }

    #[test]
    fn cubic_matches_bernstein_form() {
        let (p0, p1, p2, p3) = (
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 40.0),
            Vec2::new(50.0, -10.0),
            Vec2::new(60.0, 30.0),
        );
        let points = [cp(p0.x, p0.y), cp(p1.x, p1.y), cp(p2.x, p2.y), cp(p3.x, p3.y)];
        let mut evaluator = BezierEvaluator::new();
        for &t in &[0.1_f32, 0.33, 0.5, 0.8] {
            let inv = 1.0 - t;
            let expected = inv * inv * inv * p0
                + 3.0 * inv * inv * t * p1
                + 3.0 * inv * t * t * p2
                + t * t * t * p3;
            let p = evaluator.evaluate(&points, t).expect("Kurvenpunkt");
            assert_abs_diff_eq!(p.x, expected.x, epsilon = 1e-3);
            assert_abs_diff_eq!(p.y, expected.y, epsilon = 1e-3);
        }
    }
}
