//! Feature-Handler, die `AppCommand`s auf den `AppState` anwenden.

pub mod clock;
pub mod placement;
