//! Zentraler Anwendungszustand.

use super::clock::EditorClock;
use super::command_log::CommandLog;
use super::host::EditorPlacementHost;
use crate::shared::EditorOptions;
use slider_placement_engine::{CurveOutput, PlacementSession};

/// Gesamter Zustand des Editors.
pub struct AppState {
    /// Laufzeit-Optionen
    pub options: EditorOptions,
    /// Host mit Uhr, aktueller Kurve und Lifecycle-Protokoll
    pub host: EditorPlacementHost,
    /// Aktive Platzierung (None = keine)
    pub placement: Option<PlacementSession>,
    /// Committete Kurven in Abschlussreihenfolge
    pub finished_curves: Vec<CurveOutput>,
    /// Protokoll ausgeführter Commands
    pub command_log: CommandLog,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Erstellt einen leeren Zustand mit Standard-Optionen.
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt einen leeren Zustand mit gegebenen Optionen.
    pub fn with_options(options: EditorOptions) -> Self {
        Self {
            options,
            host: EditorPlacementHost::new(EditorClock::default()),
            placement: None,
            finished_curves: Vec::new(),
            command_log: CommandLog::new(),
        }
    }

    /// Läuft gerade eine (nicht abgeschlossene) Platzierung?
    pub fn has_active_placement(&self) -> bool {
        self.placement
            .as_ref()
            .is_some_and(|session| !session.is_completed())
    }
}
