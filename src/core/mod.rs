//! Core-Domain: Kontrollpunkte, Bézier-Auswertung, Tessellierung, Qualität.
//!
//! Enthält keine GPU- oder UI-Typen.

pub mod bezier;
mod control_point;
mod quality;
pub mod tessellation;

pub use bezier::BezierEvaluator;
pub use control_point::{ControlPoint, ControlPointStore};
pub use quality::{InvalidQuality, Quality};
pub use tessellation::{sample_count, tessellate, total_arc_length, SplineVertex, Tessellator};
