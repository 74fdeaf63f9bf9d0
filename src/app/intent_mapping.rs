//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};
use slider_placement_engine::PointerEvent;

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    let active = state.has_active_placement();

    match intent {
        AppIntent::PlacementRequested => {
            if active {
                // Laufende Platzierung zuerst sauber beenden (Hooks gepaart)
                vec![AppCommand::AbortPlacement, AppCommand::StartPlacement]
            } else {
                vec![AppCommand::StartPlacement]
            }
        }
        AppIntent::PointerMoved { pos } => pointer_commands(
            active,
            PointerEvent::PointerMove { position: pos },
            false,
        ),
        AppIntent::PrimaryClicked { pos } => pointer_commands(
            active,
            PointerEvent::PrimaryActivate { position: pos },
            false,
        ),
        AppIntent::SecondaryReleased { pos } => pointer_commands(
            active,
            PointerEvent::SecondaryRelease { position: pos },
            true,
        ),
        AppIntent::DoubleClicked { pos } => pointer_commands(
            active,
            PointerEvent::DoubleActivate { position: pos },
            false,
        ),
        AppIntent::FrameTick { delta_ms } => {
            let mut commands = vec![AppCommand::AdvanceClock { delta_ms }];
            if active {
                commands.push(AppCommand::RecomputePlacement);
            }
            commands
        }
        AppIntent::ClockSeekRequested { time_ms } => vec![AppCommand::SeekClock { time_ms }],
        AppIntent::AbortRequested => {
            if active {
                vec![AppCommand::AbortPlacement]
            } else {
                vec![]
            }
        }
    }
}

/// Pointer-Intents ohne aktive Session werden verworfen.
/// `may_complete`: Event kann die Session abschließen → Kurve danach übernehmen.
fn pointer_commands(active: bool, event: PointerEvent, may_complete: bool) -> Vec<AppCommand> {
    if !active {
        return vec![];
    }
    let mut commands = vec![AppCommand::ApplyPointerEvent { event }];
    if may_complete {
        commands.push(AppCommand::CollectFinishedCurve);
    }
    commands
}
