//! Zentrale Konfiguration für den Slider-Placement-Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};
use slider_placement_engine::options::{BEZIER_TOLERANCE, MAX_SUBDIVISION_DEPTH};
use slider_placement_engine::ApproximationOptions;

// ── Frame-Takt ──────────────────────────────────────────────────────

/// Standard-Frame-Dauer in Millisekunden (~60 FPS).
pub const FRAME_MS: f64 = 16.0;

/// Dateiname der Optionen-Datei neben der Binary.
pub const OPTIONS_FILE_NAME: &str = "slider_placement_editor.toml";

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `slider_placement_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorOptions {
    // ── Approximation ───────────────────────────────────────────
    /// Toleranz der Bézier-Abflachung (Editor-Einheiten)
    pub bezier_tolerance: f32,
    /// Maximale Subdivisions-Tiefe der Bézier-Abflachung
    pub max_subdivision_depth: u32,

    // ── Uhr ─────────────────────────────────────────────────────
    /// Dauer eines Frames in Millisekunden (Skript-Ticks ohne eigene Angabe)
    pub frame_ms: f64,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            bezier_tolerance: BEZIER_TOLERANCE,
            max_subdivision_depth: MAX_SUBDIVISION_DEPTH,
            frame_ms: FRAME_MS,
        }
    }
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
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
            .unwrap_or_else(|_| std::path::PathBuf::from("slider_placement_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join(OPTIONS_FILE_NAME)
    }

    /// Approximations-Parameter für die Platzierungs-Engine (bereinigt).
    pub fn approximation(&self) -> ApproximationOptions {
        ApproximationOptions {
            bezier_tolerance: self.bezier_tolerance,
            max_subdivision_depth: self.max_subdivision_depth,
        }
        .sanitized()
    }

    /// Frame-Dauer; nicht-positive oder ungültige Werte fallen auf [`FRAME_MS`] zurück.
    pub fn frame_duration_ms(&self) -> f64 {
        if self.frame_ms.is_finite() && self.frame_ms > 0.0 {
            self.frame_ms
        } else {
            FRAME_MS
        }
    }
}
