//! Handler für die Editor-Uhr.

use crate::app::AppState;

/// Rückt die Editor-Uhr um `delta_ms` vor.
pub fn advance(state: &mut AppState, delta_ms: f64) {
    state.host.clock.advance(delta_ms);
}

/// Setzt die Editor-Uhr auf `time_ms`.
pub fn seek(state: &mut AppState, time_ms: f64) {
    state.host.clock.seek(time_ms);
    log::debug!("Uhr gesetzt auf {:.0} ms", time_ms);
}
