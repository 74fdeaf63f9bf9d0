//! Application Controller für zentrale Event-Verarbeitung.

use super::{AppCommand, AppIntent, AppState};
use slider_placement_engine::PlacementSession;

/// Orchestriert UI-Events und Handler auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        let placement = state.placement.as_ref().map(PlacementSession::state);
        state
            .command_log
            .record(command.clone(), state.host.clock.current_time(), placement);
        use super::handlers;

        match command {
            // === Platzierung ===
            AppCommand::StartPlacement => handlers::placement::start(state),
            AppCommand::ApplyPointerEvent { event } => {
                handlers::placement::apply_pointer_event(state, event)?
            }
            AppCommand::RecomputePlacement => handlers::placement::recompute(state),
            AppCommand::AbortPlacement => handlers::placement::abort(state),
            AppCommand::CollectFinishedCurve => handlers::placement::collect_finished(state)?,

            // === Uhr ===
            AppCommand::AdvanceClock { delta_ms } => handlers::clock::advance(state, delta_ms),
            AppCommand::SeekClock { time_ms } => handlers::clock::seek(state, time_ms),
        }

        Ok(())
    }
}
