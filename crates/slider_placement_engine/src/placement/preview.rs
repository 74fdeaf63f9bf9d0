//! Vorschau-Geometrie für das Rendering im Host.

use glam::Vec2;

/// Platzierter Kontrollpunkt, wie ihn der Host als Marker zeichnet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlPointMarker {
    /// Absolute Editor-Position
    pub position: Vec2,
    /// Nach diesem Marker beginnt ein neues Segment
    pub segment_separator: bool,
}

/// Preview-Daten (absolute Koordinaten) — reine Daten, keine Mutation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlacementPreview {
    /// Abgeflachte Polylinien aller Segmente, hintereinander
    pub nodes: Vec<Vec2>,
    /// Verbindungen als Index-Paare in `nodes` (nie über Segmentgrenzen)
    pub connections: Vec<(usize, usize)>,
    pub markers: Vec<ControlPointMarker>,
    /// Hilfslinie vom letzten Marker zum Pointer (nur im Body-Zustand)
    pub rubber_band: Option<(Vec2, Vec2)>,
}
