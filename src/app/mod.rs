//! Application-Layer: Controller, State, Events und Handler.

pub mod clock;
pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
pub mod host;
mod intent_mapping;
/// Application State
///
/// Hält Optionen, Uhr, Host und die aktive Platzierungs-Session.
pub mod state;

pub use clock::EditorClock;
pub use command_log::{CommandLog, CommandLogEntry};
pub use controller::AppController;
pub use events::{AppCommand, AppIntent};
pub use host::{EditorPlacementHost, PlacementNotification};
pub use state::AppState;
