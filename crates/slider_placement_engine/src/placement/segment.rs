//! Ein zusammenhängendes Kurvenstück mit festen Ankern.

use crate::geometry::{Approximator, polyline_length};
use crate::options::ApproximationOptions;
use glam::Vec2;

/// Ergebnis einer Neuberechnung: Polylinie und Bogenlänge.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentGeometry {
    /// Live-Anker, mit dem berechnet wurde (Cache-Schlüssel)
    live: Option<Vec2>,
    /// Abgeflachte Polylinie (relativ zum Pfad-Ursprung)
    pub polyline: Vec<Vec2>,
    /// Summe der Abstände aufeinanderfolgender Polylinien-Punkte, immer ≥ 0
    pub arc_length: f32,
}

/// Segment: geordnete feste Anker plus gecachte Geometrie.
///
/// Der Live-Anker wird nur bei `recompute` übergeben und nie gespeichert.
#[derive(Debug, Clone)]
pub struct Segment {
    anchors: Vec<Vec2>,
    geometry: Option<SegmentGeometry>,
}

impl Segment {
    /// Neues Segment mit genau einem festen Anker.
    pub fn new(first: Vec2) -> Self {
        Self {
            anchors: vec![first],
            geometry: None,
        }
    }

    /// Hängt einen festen Anker an und verwirft die gecachte Geometrie.
    pub fn add_anchor(&mut self, anchor: Vec2) {
        self.anchors.push(anchor);
        self.geometry = None;
    }

    pub fn anchors(&self) -> &[Vec2] {
        &self.anchors
    }

    /// Anzahl fester Anker (ohne Live-Anker).
    pub fn len(&self) -> usize {
        self.anchors.len()
    }

    /// Immer `false`: ein Segment hat mindestens einen Anker.
    pub fn is_empty(&self) -> bool {
        self.anchors.is_empty()
    }

    /// Letzter fester Anker.
    pub fn last_anchor(&self) -> Vec2 {
        self.anchors.last().copied().unwrap_or(Vec2::ZERO)
    }

    /// Bogenlänge der letzten Berechnung (0 vor der ersten).
    pub fn arc_length(&self) -> f32 {
        self.geometry.as_ref().map_or(0.0, |g| g.arc_length)
    }

    /// Polylinie der letzten Berechnung (leer vor der ersten).
    pub fn polyline(&self) -> &[Vec2] {
        self.geometry.as_ref().map_or(&[], |g| g.polyline.as_slice())
    }

    /// Verwirft die gecachte Geometrie (z.B. nach geänderten Optionen).
    pub fn invalidate(&mut self) {
        self.geometry = None;
    }

    /// Berechnet Polylinie und Bogenlänge aus festen Ankern plus optionalem Live-Anker.
    ///
    /// Bei unveränderten Ankern und gleichem Live-Anker wird der Cache zurückgegeben;
    /// eingefrorene Segmente werden so nur einmal abgeflacht.
    pub fn recompute(
        &mut self,
        live: Option<Vec2>,
        options: &ApproximationOptions,
    ) -> &SegmentGeometry {
        let stale = self.geometry.as_ref().is_none_or(|g| g.live != live);
        if stale {
            self.geometry = None;
        }
        self.geometry
            .get_or_insert_with(|| flatten(&self.anchors, live, options))
    }
}

fn flatten(anchors: &[Vec2], live: Option<Vec2>, options: &ApproximationOptions) -> SegmentGeometry {
    let mut points = Vec::with_capacity(anchors.len() + 1);
    points.extend_from_slice(anchors);
    points.extend(live);

    // Einzelner Punkt: keine Strecke, keine Länge
    if points.len() < 2 {
        return SegmentGeometry {
            live,
            polyline: Vec::new(),
            arc_length: 0.0,
        };
    }

    let polyline = Approximator::for_anchor_count(points.len()).approximate(&points, options);
    let arc_length = polyline_length(&polyline);
    SegmentGeometry {
        live,
        polyline,
        arc_length,
    }
}
