//! Bézier-Spline-Editor.
//!
//! Kontrollpunkte per Maus setzen, die Bézier-Kurve wird nach jedem Edit
//! neu tesselliert und gestrichelt mit egui + wgpu gezeichnet.

use bezier_spline_editor::{render, ui, AppController, AppIntent, AppState, EditorOptions};
use eframe::egui;
use std::sync::{Arc, Mutex};

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!(
            "Bézier-Spline-Editor v{} startet...",
            env!("CARGO_PKG_VERSION")
        );

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([800.0, 600.0])
                .with_title("Bézier Spline Editor"),
            renderer: eframe::Renderer::Wgpu,
            multisampling: 4,
            ..Default::default()
        };

        eframe::run_native(
            "Bézier Spline Editor",
            options,
            Box::new(|cc| {
                let render_state = cc.wgpu_render_state.as_ref().ok_or_else(|| {
                    anyhow::anyhow!(
                        "wgpu nicht verfügbar: Renderer konnte nicht initialisiert werden"
                    )
                })?;
                Ok(Box::new(EditorApp::new(render_state)))
            }),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct EditorApp {
    state: AppState,
    controller: AppController,
    renderer: Arc<Mutex<render::Renderer>>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    input: ui::InputState,
}

impl EditorApp {
    fn new(render_state: &egui_wgpu::RenderState) -> Self {
        let config_path = EditorOptions::config_path();
        let editor_options = EditorOptions::load_from_file(&config_path);

        Self {
            state: AppState::with_options(editor_options),
            controller: AppController::new(),
            renderer: Arc::new(Mutex::new(render::Renderer::new(render_state))),
            device: render_state.device.clone(),
            queue: render_state.queue.clone(),
            input: ui::InputState::new(),
        }
    }
}

impl eframe::App for EditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let events = self.collect_ui_events(ctx);

        let has_meaningful_events = events.iter().any(|e| {
            !matches!(
                e,
                AppIntent::ViewportResized { .. } | AppIntent::FrameAdvanced { .. }
            )
        });

        self.process_events(events);

        self.sync_curve_upload();

        self.maybe_request_repaint(ctx, has_meaningful_events);
    }
}

impl EditorApp {
    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        ui::render_status_bar(ctx, &self.state);
        events.extend(ui::render_menu(ctx, &self.state));

        let [r, g, b, a] = self.state.options.background_color;
        let background = egui::Color32::from_rgba_unmultiplied(r, g, b, a);

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(background))
            .show(ctx, |ui| {
                let (rect, response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::click());

                let viewport_size = [rect.width(), rect.height()];

                events.extend(
                    self.input
                        .collect_viewport_events(ui, &response, viewport_size),
                );

                let render_data = render::WgpuRenderData {
                    scene: self
                        .controller
                        .build_render_scene(&self.state, viewport_size),
                };

                let callback = egui_wgpu::Callback::new_paint_callback(
                    rect,
                    render::WgpuRenderCallback {
                        renderer: self.renderer.clone(),
                        render_data,
                        queue: self.queue.clone(),
                    },
                );

                ui.painter().add(callback);

                if self.state.curve.points.is_empty() {
                    ui.painter().text(
                        rect.center(),
                        egui::Align2::CENTER_CENTER,
                        "Left click: add point | Right click: remove last point",
                        egui::FontId::proportional(18.0),
                        egui::Color32::WHITE,
                    );
                }
            });

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }

    /// Ersetzt die GPU-Buffer, falls seit dem letzten Upload editiert wurde.
    fn sync_curve_upload(&mut self) {
        let mut upload = render::GpuUpload {
            renderer: &self.renderer,
            device: &self.device,
            queue: &self.queue,
            line_width_px: self.state.options.line_width_px,
        };
        match self.state.render_sync.sync_if_pending(&mut upload) {
            Ok(true) => log::debug!(
                "Kurve hochgeladen (Rev. {})",
                self.state.render_sync.revision()
            ),
            Ok(false) => {}
            Err(e) => log::error!("Upload fehlgeschlagen, nächster Versuch im nächsten Frame: {}", e),
        }
    }

    fn maybe_request_repaint(&self, ctx: &egui::Context, has_meaningful_events: bool) {
        let animating = self.state.options.dash_speed_px_per_s != 0.0
            && !self.state.render_sync.spline().is_empty();
        if has_meaningful_events || animating || self.state.render_sync.needs_upload() {
            ctx.request_repaint();
        }
    }
}
