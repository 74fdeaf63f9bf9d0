//! Slider-Placement-Editor Library.
//! Headless Editor-Host um die Platzierungs-Engine, als Library exportiert
//! für Tests, Benchmarks und Wiederverwendung.

pub mod app;
pub mod script;
pub mod shared;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, EditorClock, EditorPlacementHost,
    PlacementNotification,
};
pub use script::EventScript;
pub use shared::EditorOptions;
pub use slider_placement_engine as engine;
pub use slider_placement_engine::{CurveOutput, CurveType, PlacementSession, PointerEvent};
