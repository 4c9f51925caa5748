//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Typen, die zwischen `app` und `render` geteilt werden,
//! um direkte Abhängigkeiten zu vermeiden.

pub mod options;
mod render_scene;
mod upload;

pub use options::EditorOptions;
pub use render_scene::{DashStyle, RenderScene};
pub use upload::{UploadError, VertexUpload};
