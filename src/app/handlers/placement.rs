//! Handler für die Slider-Platzierung (Session anlegen, Events, Tick, Abschluss).

use crate::app::AppState;
use anyhow::Context;
use slider_placement_engine::{EventOutcome, PlacementSession, PointerEvent};

/// Legt eine neue Platzierungs-Session an.
pub fn start(state: &mut AppState) {
    state.host.reset_for_placement();
    state.placement = Some(PlacementSession::new(state.options.approximation()));
    log::debug!("Neue Platzierungs-Session");
}

/// Reicht ein Pointer-Event an die aktive Session weiter.
pub fn apply_pointer_event(state: &mut AppState, event: PointerEvent) -> anyhow::Result<()> {
    let session = state
        .placement
        .as_mut()
        .context("Pointer-Event ohne aktive Platzierung")?;

    if session.handle_event(event, &mut state.host) == EventOutcome::Ignored {
        log::trace!("Event im Zustand {:?} ignoriert: {:?}", session.state(), event);
    }
    Ok(())
}

/// Pro-Frame-Neuberechnung der aktiven Session.
pub fn recompute(state: &mut AppState) {
    if let Some(session) = state.placement.as_mut() {
        session.tick(&mut state.host);
    }
}

/// Bricht die aktive Session ab und verwirft sie.
pub fn abort(state: &mut AppState) {
    if let Some(mut session) = state.placement.take() {
        session.abort(&mut state.host);
    }
}

/// Übernimmt die committete Kurve, sobald die Session abgeschlossen ist.
///
/// Solange die Session noch läuft (z.B. ignoriertes Release), passiert nichts.
pub fn collect_finished(state: &mut AppState) -> anyhow::Result<()> {
    let completed = state
        .placement
        .as_ref()
        .is_some_and(PlacementSession::is_completed);
    if !completed {
        return Ok(());
    }
    state.placement = None;

    anyhow::ensure!(
        state.host.is_committed(),
        "Abgeschlossene Platzierung wurde nicht committet"
    );

    let curve = state.host.curve.clone();
    log::info!(
        "Kurve übernommen: {} Kontrollpunkte, {:?}, Distanz {:.3}",
        curve.control_points.len(),
        curve.curve_type,
        curve.distance
    );
    state.finished_curves.push(curve);
    Ok(())
}
