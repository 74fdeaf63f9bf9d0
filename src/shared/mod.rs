//! Geteilte Typen für layer-übergreifende Verträge.

pub mod options;

pub use options::EditorOptions;
pub use options::{FRAME_MS, OPTIONS_FILE_NAME};
