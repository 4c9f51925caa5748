//! Bézier-Spline-Editor Library.
//! Core-Funktionalität als Library exportiert für Tests und Benchmarks.

pub mod app;
pub mod core;
pub mod render;
pub mod shared;
pub mod ui;

pub use app::{AppCommand, AppController, AppIntent, AppState, CurveState, RenderSync, ViewState};
pub use core::{
    sample_count, tessellate, total_arc_length, BezierEvaluator, ControlPoint, ControlPointStore,
    InvalidQuality, Quality, SplineVertex, Tessellator,
};
pub use shared::{DashStyle, EditorOptions, RenderScene, UploadError, VertexUpload};
