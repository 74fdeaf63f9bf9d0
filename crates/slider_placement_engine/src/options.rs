//! Parameter für die Kurven-Approximation.
//!
//! Die `const`-Werte dienen als Default und als Fallback bei ungültigen Eingaben.

use serde::{Deserialize, Serialize};

/// Standard-Toleranz der Bézier-Abflachung (Editor-Einheiten).
pub const BEZIER_TOLERANCE: f32 = 0.25;
/// Standard-Obergrenze der Subdivisions-Tiefe (max. 2^10 Teilstücke).
pub const MAX_SUBDIVISION_DEPTH: u32 = 10;
/// Harte Obergrenze, damit auch fehlerhafte Konfigurationen beschränkt bleiben.
pub const MAX_SUBDIVISION_DEPTH_LIMIT: u32 = 16;

/// Einstellungen für die Abflachung von Bézier-Segmenten.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApproximationOptions {
    /// Maximal erlaubte Abweichung der Polylinie von der Kurve
    pub bezier_tolerance: f32,
    /// Maximale Subdivisions-Tiefe (Abbruch auch ohne erreichte Flachheit)
    pub max_subdivision_depth: u32,
}

impl Default for ApproximationOptions {
    fn default() -> Self {
        Self {
            bezier_tolerance: BEZIER_TOLERANCE,
            max_subdivision_depth: MAX_SUBDIVISION_DEPTH,
        }
    }
}

impl ApproximationOptions {
    /// Bereinigte Kopie ohne Logging: ungültige Werte fallen auf Defaults zurück.
    ///
    /// Toleranz muss endlich und > 0 sein, die Tiefe wird auf
    /// [`MAX_SUBDIVISION_DEPTH_LIMIT`] begrenzt. Für heiße Pfade gedacht.
    pub fn clamped(self) -> Self {
        let bezier_tolerance = if self.bezier_tolerance.is_finite() && self.bezier_tolerance > 0.0
        {
            self.bezier_tolerance
        } else {
            BEZIER_TOLERANCE
        };

        Self {
            bezier_tolerance,
            max_subdivision_depth: self.max_subdivision_depth.min(MAX_SUBDIVISION_DEPTH_LIMIT),
        }
    }

    /// Wie [`Self::clamped`], meldet ersetzte Werte aber einmalig per `warn!`.
    ///
    /// Aufrufen, wo Optionen von außen übernommen werden (Session, Konfiguration).
    pub fn sanitized(self) -> Self {
        let clamped = self.clamped();
        if clamped != self {
            log::warn!(
                "Ungültige Approximations-Optionen (Toleranz {}, Tiefe {}), verwende (Toleranz {}, Tiefe {})",
                self.bezier_tolerance,
                self.max_subdivision_depth,
                clamped.bezier_tolerance,
                clamped.max_subdivision_depth
            );
        }
        clamped
    }
}
