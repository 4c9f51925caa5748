//! Zentrale Konfiguration für den Bézier-Spline-Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Kurve ───────────────────────────────────────────────────────────

/// Start-Qualität (Samples pro Kontrollpunkt).
pub const INITIAL_QUALITY: u32 = 4;
/// Obergrenze der Start-Qualität aus der Optionen-Datei.
pub const MAX_INITIAL_QUALITY: u32 = 1024;
/// Farbe neu gesetzter Kontrollpunkte (RGBA: Weiß).
pub const CONTROL_POINT_COLOR: [u8; 4] = [255, 255, 255, 255];
/// Farbe der tessellierten Kurve (RGBA: Hellgrün).
pub const CURVE_COLOR: [u8; 4] = [180, 255, 180, 255];

// ── Darstellung ────────────────────────────────────────────────────

/// Kantenlänge der Kontrollpunkt-Quads in Pixeln.
pub const POINT_SIZE_PX: f32 = 10.0;
/// Linienbreite von Kontrollpolygon und Kurve in Pixeln.
pub const LINE_WIDTH_PX: f32 = 5.0;
/// Hintergrundfarbe des Viewports (RGBA: Dunkelgrau).
pub const BACKGROUND_COLOR: [u8; 4] = [77, 77, 77, 255];

// ── Strichmuster ───────────────────────────────────────────────────

/// Periode des Strichmusters in Pixeln Bogenlänge.
pub const DASH_PERIOD_PX: f32 = 40.0;
/// Lücke pro Periode in Pixeln (Fragmente mit `s mod Periode < Lücke` entfallen).
pub const DASH_GAP_PX: f32 = 20.0;
/// Geschwindigkeit der Strich-Animation in Pixeln pro Sekunde (0 = statisch).
pub const DASH_SPEED_PX_PER_S: f32 = 20.0;

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `bezier_spline_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorOptions {
    // ── Kurve ───────────────────────────────────────────────────
    /// Qualität beim Start (wird beim Laden auf [1, MAX_INITIAL_QUALITY] geklemmt)
    pub initial_quality: u32,
    /// Farbe neuer Kontrollpunkte
    pub control_point_color: [u8; 4],
    /// Konstante Farbe der Kurven-Samples
    pub curve_color: [u8; 4],

    // ── Darstellung ─────────────────────────────────────────────
    /// Kantenlänge der Kontrollpunkte in Pixeln
    pub point_size_px: f32,
    /// Breite von Kontrollpolygon und Kurve in Pixeln
    pub line_width_px: f32,
    /// Hintergrundfarbe des Viewports
    pub background_color: [u8; 4],

    // ── Strichmuster ────────────────────────────────────────────
    /// Periode des Strichmusters in Pixeln
    pub dash_period_px: f32,
    /// Lücke pro Periode in Pixeln
    pub dash_gap_px: f32,
    /// Animationsgeschwindigkeit in Pixeln pro Sekunde
    pub dash_speed_px_per_s: f32,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            initial_quality: INITIAL_QUALITY,
            control_point_color: CONTROL_POINT_COLOR,
            curve_color: CURVE_COLOR,

            point_size_px: POINT_SIZE_PX,
            line_width_px: LINE_WIDTH_PX,
            background_color: BACKGROUND_COLOR,

            dash_period_px: DASH_PERIOD_PX,
            dash_gap_px: DASH_GAP_PX,
            dash_speed_px_per_s: DASH_SPEED_PX_PER_S,
        }
    }
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler → Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => Self::from_toml_str(&content).unwrap_or_else(|e| {
                log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                Self::default()
            }),
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Parst Optionen aus TOML-Text und korrigiert ungültige Werte.
    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        let mut opts: Self = toml::from_str(content)?;
        opts.sanitize();
        log::info!("Optionen geladen (Qualität {})", opts.initial_quality);
        Ok(opts)
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("bezier_spline_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("bezier_spline_editor.toml")
    }

    /// Klemmt Werte, die der Renderer oder die Qualität nicht verarbeiten können.
    fn sanitize(&mut self) {
        let defaults = Self::default();
        self.initial_quality = self.initial_quality.clamp(1, MAX_INITIAL_QUALITY);
        if !(self.point_size_px.is_finite() && self.point_size_px > 0.0) {
            self.point_size_px = defaults.point_size_px;
        }
        if !(self.line_width_px.is_finite() && self.line_width_px > 0.0) {
            self.line_width_px = defaults.line_width_px;
        }
        if !(self.dash_period_px.is_finite() && self.dash_period_px > 0.0) {
            self.dash_period_px = defaults.dash_period_px;
        }
        if !self.dash_gap_px.is_finite() {
            self.dash_gap_px = defaults.dash_gap_px;
        }
        self.dash_gap_px = self.dash_gap_px.clamp(0.0, self.dash_period_px);
        if !self.dash_speed_px_per_s.is_finite() {
            self.dash_speed_px_per_s = 0.0;
        }
    }
}
