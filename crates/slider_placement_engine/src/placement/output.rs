//! Extern besessene Kurven-Ausgabe.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Kurvenart des fertigen Pfads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CurveType {
    /// Höchstens 2 Kontrollpunkte
    #[default]
    Linear,
    /// Mehr als 2 Kontrollpunkte
    Bezier,
}

impl CurveType {
    /// Klassifiziert anhand der Gesamtzahl der Kontrollpunkte.
    pub fn for_point_count(count: usize) -> Self {
        if count > 2 {
            CurveType::Bezier
        } else {
            CurveType::Linear
        }
    }
}

/// Pfad-Entität des Hosts: wird pro Frame überschrieben und beim Abschluss eingefroren.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CurveOutput {
    /// Editor-Zeit beim Kurvenbeginn
    pub start_time: f64,
    /// Absolute Position des Pfad-Ursprungs
    pub position: Vec2,
    /// Feste Anker aller Segmente, dann der Live-Punkt (relativ zum Ursprung)
    pub control_points: Vec<Vec2>,
    pub curve_type: CurveType,
    /// Summe der Bogenlängen aller Segmente
    pub distance: f32,
}
