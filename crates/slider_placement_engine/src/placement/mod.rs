//! Platzierung mehrsegmentiger Slider-Pfade.
//!
//! Die `PlacementSession` verarbeitet Pointer-Events, verwaltet die Segmente
//! und schreibt pro Frame die abgeleiteten Werte in die `CurveOutput` des Hosts.
//!
//! Aufgeteilt in:
//! - `events`  — Pointer-Events, Zustände, Event-Ergebnis
//! - `segment` — Segment mit festen Ankern und gecachter Geometrie
//! - `session` — State-Machine (handle_event, tick, abort)
//! - `host`    — Vertrag zum Editor-Host (Uhr, Lifecycle-Hooks)
//! - `output`  — extern besessene Kurven-Ausgabe
//! - `preview` — Vorschau-Daten für das Rendering im Host

mod events;
mod host;
mod output;
mod preview;
mod segment;
mod session;

pub use events::{EventOutcome, PlacementState, PointerEvent};
pub use host::{PlacementEnd, PlacementHost};
pub use output::{CurveOutput, CurveType};
pub use preview::{ControlPointMarker, PlacementPreview};
pub use segment::{Segment, SegmentGeometry};
pub use session::PlacementSession;

#[cfg(test)]
mod tests;
