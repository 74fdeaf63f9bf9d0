//! Headless Editor-Host: besitzt Uhr und Kurven-Ausgabe, protokolliert den Lifecycle.

use super::clock::EditorClock;
use slider_placement_engine::{CurveOutput, PlacementEnd, PlacementHost};

/// Vom Host empfangene Lifecycle-Benachrichtigung.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementNotification {
    /// `begin_placement` wurde aufgerufen
    Began,
    /// `end_placement` wurde aufgerufen
    Ended(PlacementEnd),
    /// Segmentgrenze am Marker-Index
    SegmentBoundary(usize),
}

/// Implementiert `PlacementHost` für den Application-Layer.
#[derive(Debug, Default)]
pub struct EditorPlacementHost {
    pub clock: EditorClock,
    /// Die vom Host besessene Kurve der aktuellen Platzierung
    pub curve: CurveOutput,
    /// Benachrichtigungen der aktuellen Platzierung in Reihenfolge
    pub notifications: Vec<PlacementNotification>,
}

impl EditorPlacementHost {
    /// Erstellt einen Host mit gegebener Uhr.
    pub fn new(clock: EditorClock) -> Self {
        Self {
            clock,
            curve: CurveOutput::default(),
            notifications: Vec::new(),
        }
    }

    /// Bereitet den Host auf eine neue Platzierung vor (frische Kurve, leeres Protokoll).
    pub fn reset_for_placement(&mut self) {
        self.curve = CurveOutput::default();
        self.notifications.clear();
    }

    /// Wurde die aktuelle Platzierung committet?
    pub fn is_committed(&self) -> bool {
        self.notifications
            .contains(&PlacementNotification::Ended(PlacementEnd::Committed))
    }
}

impl PlacementHost for EditorPlacementHost {
    fn current_time(&self) -> f64 {
        self.clock.current_time()
    }

    fn curve_mut(&mut self) -> &mut CurveOutput {
        &mut self.curve
    }

    fn begin_placement(&mut self) {
        log::info!("Platzierung begonnen ({:.0} ms)", self.clock.current_time());
        self.notifications.push(PlacementNotification::Began);
    }

    fn end_placement(&mut self, end: PlacementEnd) {
        log::info!("Platzierung beendet: {:?}", end);
        self.notifications.push(PlacementNotification::Ended(end));
    }

    fn segment_boundary(&mut self, marker_index: usize) {
        self.notifications
            .push(PlacementNotification::SegmentBoundary(marker_index));
    }
}
