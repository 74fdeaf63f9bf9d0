//! Hilfsfunktionen für Polylinien.

use glam::Vec2;

/// Summe der euklidischen Abstände aufeinanderfolgender Punkte.
///
/// Weniger als 2 Punkte ergeben 0.
pub fn polyline_length(points: &[Vec2]) -> f32 {
    points.windows(2).map(|w| w[0].distance(w[1])).sum()
}

/// Index-Paare für eine lineare Kette (0→1, 1→2, …).
pub fn linear_connections(count: usize) -> Vec<(usize, usize)> {
    (0..count.saturating_sub(1)).map(|i| (i, i + 1)).collect()
}
