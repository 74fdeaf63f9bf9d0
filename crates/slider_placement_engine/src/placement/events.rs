//! Eingabe-Events und Zustände der Platzierungs-State-Machine.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Pointer-Interaktion, geräteunabhängig. Positionen in Editor-Koordinaten.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PointerEvent {
    /// Pointer bewegt
    PointerMove { position: Vec2 },
    /// Primäre Aktivierung (z.B. Linksklick)
    PrimaryActivate { position: Vec2 },
    /// Sekundäre Taste losgelassen (z.B. Rechtsklick-Release)
    SecondaryRelease { position: Vec2 },
    /// Doppelte Aktivierung (Doppelklick)
    DoubleActivate { position: Vec2 },
}

impl PointerEvent {
    /// Position, an der das Event ausgelöst wurde.
    pub fn position(&self) -> Vec2 {
        match *self {
            PointerEvent::PointerMove { position }
            | PointerEvent::PrimaryActivate { position }
            | PointerEvent::SecondaryRelease { position }
            | PointerEvent::DoubleActivate { position } => position,
        }
    }
}

/// Phasen der Platzierung
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementState {
    /// Noch keine Kurve begonnen — der Ursprung folgt dem Pointer
    Initial,
    /// Kurve wird gezeichnet
    Body,
    /// Abgeschlossen (committet oder abgebrochen), keine Neuberechnung mehr
    Completed,
}

/// Rückgabe von `handle_event` — hat die Session das Event verarbeitet?
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOutcome {
    /// Event hat den Zustand beeinflusst
    Handled,
    /// Event passt nicht zum aktuellen Zustand (No-op)
    Ignored,
}
