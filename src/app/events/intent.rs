/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone, PartialEq)]
pub enum AppIntent {
    /// Neue Slider-Platzierung starten
    PlacementRequested,
    /// Pointer im Viewport bewegt
    PointerMoved { pos: glam::Vec2 },
    /// Primärer Klick (Links)
    PrimaryClicked { pos: glam::Vec2 },
    /// Sekundäre Taste losgelassen (Rechts)
    SecondaryReleased { pos: glam::Vec2 },
    /// Doppelklick
    DoubleClicked { pos: glam::Vec2 },
    /// Ein Frame ist vergangen
    FrameTick { delta_ms: f64 },
    /// Editor-Uhr auf absolute Zeit setzen
    ClockSeekRequested { time_ms: f64 },
    /// Laufende Platzierung abbrechen (Escape)
    AbortRequested,
}
