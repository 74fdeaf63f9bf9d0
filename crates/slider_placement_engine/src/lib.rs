//! Slider-Placement-Engine.
//!
//! Headless Kern für das interaktive Platzieren mehrsegmentiger Slider-Pfade:
//! Approximatoren (linear / Bézier), Segmente mit Live-Anker und die
//! Platzierungs-State-Machine, die eine extern besessene `CurveOutput` befüllt.
//!
//! Aufgeteilt in:
//! - `geometry`  — reine Geometrie (Approximatoren, Polylinien-Länge)
//! - `placement` — Segmente, Session-State-Machine, Host-Vertrag, Preview
//! - `options`   — Approximations-Parameter (Toleranz, Rekursionstiefe)

pub mod geometry;
pub mod options;
pub mod placement;

pub use geometry::{Approximator, flatten_bezier, linear_connections, polyline_length};
pub use options::ApproximationOptions;
pub use placement::{
    ControlPointMarker, CurveOutput, CurveType, EventOutcome, PlacementEnd, PlacementHost,
    PlacementPreview, PlacementSession, PlacementState, PointerEvent, Segment, SegmentGeometry,
};
