use slider_placement_engine::PointerEvent;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    /// Neue Platzierungs-Session anlegen (Host-Kurve zurücksetzen)
    StartPlacement,
    /// Pointer-Event an die aktive Session weiterreichen
    ApplyPointerEvent { event: PointerEvent },
    /// Editor-Uhr vorrücken
    AdvanceClock { delta_ms: f64 },
    /// Editor-Uhr auf absolute Zeit setzen
    SeekClock { time_ms: f64 },
    /// Pro-Frame-Neuberechnung der aktiven Session
    RecomputePlacement,
    /// Aktive Session abbrechen und verwerfen
    AbortPlacement,
    /// Abgeschlossene Kurve übernehmen und Session verwerfen
    CollectFinishedCurve,
}
