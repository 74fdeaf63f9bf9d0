//! Auswahl des Approximations-Verfahrens anhand der Anker-Anzahl.

use super::bezier::flatten_bezier;
use crate::options::ApproximationOptions;
use glam::Vec2;

/// Verfahren, mit dem ein Segment zur Polylinie abgeflacht wird.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Approximator {
    /// Bis zu 2 Anker: Punkt oder gerade Strecke, Anker unverändert
    Linear,
    /// Ab 3 Ankern: eine Bézier-Kurve mit allen Ankern als Steuerpunkten
    Bezier,
}

impl Approximator {
    /// Wählt das Verfahren für `count` Anker (inkl. Live-Anker).
    pub fn for_anchor_count(count: usize) -> Self {
        if count <= 2 {
            Approximator::Linear
        } else {
            Approximator::Bezier
        }
    }

    /// Flacht `anchors` zur Polylinie ab. Reine Funktion, deterministisch.
    pub fn approximate(self, anchors: &[Vec2], options: &ApproximationOptions) -> Vec<Vec2> {
        match self {
            Approximator::Linear => anchors.to_vec(),
            Approximator::Bezier => flatten_bezier(anchors, options),
        }
    }
}
