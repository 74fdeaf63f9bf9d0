//! Protokoll ausgeführter Commands mit Editor-Zeit und Platzierungszustand.

use super::AppCommand;
use slider_placement_engine::PlacementState;
use std::collections::VecDeque;

/// Obergrenze; darüber fällt jeweils der älteste Eintrag heraus.
const CAPACITY: usize = 1000;

/// Ein protokollierter Command samt Kontext zum Ausführungszeitpunkt.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandLogEntry {
    pub command: AppCommand,
    /// Editor-Zeit in ms vor der Ausführung
    pub time_ms: f64,
    /// Zustand der Session vor der Ausführung (None = keine Session)
    pub placement: Option<PlacementState>,
}

/// Ringpuffer der zuletzt ausgeführten Commands.
#[derive(Debug, Default)]
pub struct CommandLog {
    entries: VecDeque<CommandLogEntry>,
}

impl CommandLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, command: AppCommand, time_ms: f64, placement: Option<PlacementState>) {
        if self.entries.len() == CAPACITY {
            self.entries.pop_front();
        }
        self.entries.push_back(CommandLogEntry {
            command,
            time_ms,
            placement,
        });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Einträge von alt nach neu.
    pub fn iter(&self) -> impl Iterator<Item = &CommandLogEntry> {
        self.entries.iter()
    }
}
