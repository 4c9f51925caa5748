//! wgpu Custom Render Callback für egui-Integration.

use super::Renderer;
use crate::shared::RenderScene;
use std::sync::{Arc, Mutex};

/// Render-Daten für den wgpu Callback
pub struct WgpuRenderData {
    /// Per-Frame-Parameter (Viewport, Strichmuster, Punktgröße)
    pub scene: RenderScene,
}

/// Custom wgpu Render Callback – zeichnet Polygon und Kurve in den egui-Pass
pub struct WgpuRenderCallback {
    /// Geteilter Renderer-Zustand (thread-safe)
    pub renderer: Arc<Mutex<Renderer>>,
    /// Render-Daten für diesen Frame
    pub render_data: WgpuRenderData,
    /// wgpu Queue für das Uniform-Update
    pub queue: wgpu::Queue,
}

impl egui_wgpu::CallbackTrait for WgpuRenderCallback {
    fn paint<'b>(
        &'b self,
        _info: egui::PaintCallbackInfo,
        render_pass: &mut wgpu::RenderPass<'static>,
        _callback_resources: &'b egui_wgpu::CallbackResources,
    ) {
        match self.renderer.lock() {
            Ok(mut renderer) => {
                renderer.render_scene(&self.queue, render_pass, &self.render_data.scene)
            }
            Err(e) => log::error!("Renderer nicht verfügbar: {}", e),
        }
    }
}
