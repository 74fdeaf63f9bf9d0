//! Vertrag zwischen Platzierungs-Session und Editor-Host.

use super::output::CurveOutput;

/// Wie eine begonnene Platzierung beendet wurde.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementEnd {
    /// Kurve fertiggestellt, `CurveOutput` ist eingefroren
    Committed,
    /// Abgebrochen, die Ausgabe ist zu verwerfen
    Aborted,
}

/// Schnittstelle zum Editor-Host, der Uhr, Kurven-Ausgabe und Lifecycle besitzt.
///
/// `begin_placement` und `end_placement` werden pro Session, die den
/// Body-Zustand erreicht, genau einmal und in dieser Reihenfolge aufgerufen.
pub trait PlacementHost {
    /// Aktuelle Editor-Zeit (wird beim Kurvenbeginn als Startzeit übernommen)
    fn current_time(&self) -> f64;

    /// Die vom Host besessene Kurve, in die die Session schreibt
    fn curve_mut(&mut self) -> &mut CurveOutput;

    /// Platzierung hat begonnen
    fn begin_placement(&mut self);

    /// Platzierung ist beendet
    fn end_placement(&mut self, end: PlacementEnd);

    /// Segmentgrenze am Marker `marker_index` (für einen visuellen Trenner).
    fn segment_boundary(&mut self, _marker_index: usize) {}
}
