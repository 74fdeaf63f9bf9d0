//! Adaptive Abflachung von Bézier-Kurven beliebigen Grades.
//!
//! De-Casteljau-Subdivision bei t = 0.5 mit Flachheitstest über die zweiten
//! Differenzen des Kontrollpolygons. Iterativ über einen expliziten Stack;
//! die Tiefe ist durch `max_subdivision_depth` begrenzt.
//!
//! Aufwand pro Aufruf: O(2^Tiefe · n²) für n Steuerpunkte. Für die Anker-Anzahl
//! einer interaktiven Platzierung unkritisch, wächst bei sehr hohem Grad aber schnell.

use crate::options::ApproximationOptions;
use glam::Vec2;

/// Flacht die Bézier-Kurve mit den Steuerpunkten `control_points` ab.
///
/// Die Polylinie beginnt exakt beim ersten und endet exakt beim letzten
/// Steuerpunkt. Es entstehen höchstens `2^max_subdivision_depth + 1` Punkte.
/// 0 oder 1 Steuerpunkte werden unverändert zurückgegeben.
pub fn flatten_bezier(control_points: &[Vec2], options: &ApproximationOptions) -> Vec<Vec2> {
    if control_points.len() < 2 {
        return control_points.to_vec();
    }

    let options = options.clamped();
    let tolerance = options.bezier_tolerance;
    let max_depth = options.max_subdivision_depth;

    let mut output = vec![control_points[0]];
    // Rechte Hälfte zuerst pushen → linke wird zuerst abgearbeitet (Punkte in Kurvenrichtung)
    let mut stack: Vec<(u32, Vec<Vec2>)> = vec![(0, control_points.to_vec())];

    while let Some((depth, polygon)) = stack.pop() {
        if depth >= max_depth || is_flat_enough(&polygon, tolerance) {
            if let Some(&end) = polygon.last() {
                output.push(end);
            }
            continue;
        }
        let (left, right) = subdivide(&polygon);
        stack.push((depth + 1, right));
        stack.push((depth + 1, left));
    }

    output
}

/// Flach genug, wenn jede zweite Differenz `|p[i-1] - 2·p[i] + p[i+1]|` ≤ 2·Toleranz.
fn is_flat_enough(polygon: &[Vec2], tolerance: f32) -> bool {
    let limit_sq = tolerance * tolerance * 4.0;
    polygon
        .windows(3)
        .all(|w| (w[0] - 2.0 * w[1] + w[2]).length_squared() <= limit_sq)
}

/// Teilt das Kontrollpolygon bei t = 0.5 (De Casteljau).
///
/// Die linke Hälfte beginnt mit `polygon[0]`, die rechte endet mit dem
/// unveränderten letzten Punkt.
fn subdivide(polygon: &[Vec2]) -> (Vec<Vec2>, Vec<Vec2>) {
    let n = polygon.len();
    let mut work = polygon.to_vec();
    let mut left = Vec::with_capacity(n);
    let mut right = vec![Vec2::ZERO; n];

    for level in 0..n {
        let last = n - 1 - level;
        left.push(work[0]);
        right[last] = work[last];
        for i in 0..last {
            work[i] = (work[i] + work[i + 1]) * 0.5;
        }
    }

    (left, right)
}
