//! Pointer-Event-Skripte (JSON) zum Abspielen einer Platzierung ohne UI.
//!
//! ```json
//! { "start_time": 1000.0, "frame_ms": 16.0,
//!   "steps": [ { "kind": "primary", "x": 0.0, "y": 0.0 },
//!              { "kind": "move", "x": 10.0, "y": 0.0 },
//!              { "kind": "tick" },
//!              { "kind": "secondary", "x": 10.0, "y": 0.0 } ] }
//! ```

use crate::app::AppIntent;
use anyhow::Context;
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Art eines Skript-Schritts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepKind {
    /// Neue Platzierung starten
    Begin,
    Move,
    Primary,
    Secondary,
    Double,
    /// Frame-Tick
    Tick,
    Abort,
}

/// Ein Schritt; Pointer-Arten benötigen `x` und `y`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScriptStep {
    pub kind: StepKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f32>,
}

/// Komplettes Event-Skript.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventScript {
    /// Editor-Zeit vor dem ersten Schritt
    #[serde(default)]
    pub start_time: Option<f64>,
    /// Frame-Dauer für `tick`-Schritte (sonst aus den Optionen)
    #[serde(default)]
    pub frame_ms: Option<f64>,
    pub steps: Vec<ScriptStep>,
}

impl EventScript {
    /// Parst ein Skript aus JSON-Text.
    pub fn from_json(text: &str) -> anyhow::Result<Self> {
        serde_json::from_str(text).context("Event-Skript ist kein gültiges JSON")
    }

    /// Lädt ein Skript aus einer Datei.
    pub fn load(path: &std::path::Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Event-Skript nicht lesbar: {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("Fehler in {}", path.display()))
    }

    /// Übersetzt das Skript in App-Intents.
    ///
    /// Beginnt das Skript nicht mit `begin`, wird eine Platzierung implizit gestartet.
    pub fn to_intents(&self, default_frame_ms: f64) -> anyhow::Result<Vec<AppIntent>> {
        let frame_ms = self.frame_ms.unwrap_or(default_frame_ms);
        let mut intents = Vec::with_capacity(self.steps.len() + 2);

        if let Some(time_ms) = self.start_time {
            intents.push(AppIntent::ClockSeekRequested { time_ms });
        }
        if self.steps.first().map(|s| s.kind) != Some(StepKind::Begin) {
            intents.push(AppIntent::PlacementRequested);
        }

        for (index, step) in self.steps.iter().enumerate() {
            let intent = match step.kind {
                StepKind::Begin => AppIntent::PlacementRequested,
                StepKind::Tick => AppIntent::FrameTick { delta_ms: frame_ms },
                StepKind::Abort => AppIntent::AbortRequested,
                StepKind::Move => AppIntent::PointerMoved {
                    pos: step_position(index, step)?,
                },
                StepKind::Primary => AppIntent::PrimaryClicked {
                    pos: step_position(index, step)?,
                },
                StepKind::Secondary => AppIntent::SecondaryReleased {
                    pos: step_position(index, step)?,
                },
                StepKind::Double => AppIntent::DoubleClicked {
                    pos: step_position(index, step)?,
                },
            };
            intents.push(intent);
        }

        Ok(intents)
    }
}

fn step_position(index: usize, step: &ScriptStep) -> anyhow::Result<Vec2> {
    match (step.x, step.y) {
        (Some(x), Some(y)) => Ok(Vec2::new(x, y)),
        _ => anyhow::bail!(
            "Schritt {} ({:?}) benötigt x und y",
            index,
            step.kind
        ),
    }
}
