//! Editor-Uhr in Millisekunden.

/// Monotone Editor-Zeit, vom Frame-Takt vorangetrieben.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EditorClock {
    current_ms: f64,
}

impl EditorClock {
    /// Erstellt eine Uhr bei `start_ms`.
    pub fn new(start_ms: f64) -> Self {
        Self {
            current_ms: start_ms,
        }
    }

    /// Aktuelle Zeit in Millisekunden.
    pub fn current_time(&self) -> f64 {
        self.current_ms
    }

    /// Rückt die Uhr vor; negative oder ungültige Deltas werden ignoriert.
    pub fn advance(&mut self, delta_ms: f64) {
        if delta_ms.is_finite() && delta_ms > 0.0 {
            self.current_ms += delta_ms;
        }
    }

    /// Springt auf eine absolute Zeit.
    pub fn seek(&mut self, time_ms: f64) {
        if time_ms.is_finite() {
            self.current_ms = time_ms;
        }
    }
}
