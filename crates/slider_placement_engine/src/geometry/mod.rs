//! Reine Geometrie-Funktionen für die Pfad-Platzierung.
//!
//! Layer-neutral: keine Kenntnis von Sessions oder Host — nur Punktlisten rein,
//! Polylinien raus. Alle Funktionen sind total (degenerierte Eingaben liefern
//! leere bzw. längenlose Ergebnisse statt Fehlern).

mod approximator;
mod bezier;
mod polyline;

pub use approximator::Approximator;
pub use bezier::flatten_bezier;
pub use polyline::{linear_connections, polyline_length};
