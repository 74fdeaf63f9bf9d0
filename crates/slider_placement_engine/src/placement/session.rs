//! Platzierungs-Session: State-Machine über Pointer-Events und Frame-Ticks.
//!
//! | Event            | Initial                     | Body                              |
//! |------------------|-----------------------------|-----------------------------------|
//! | PointerMove      | Ursprung folgt dem Pointer  | Cursor = Pointer − Ursprung       |
//! | PrimaryActivate  | Kurve beginnen → Body       | Cursor als festen Anker anhängen  |
//! | SecondaryRelease | —                           | Kurve abschließen → Completed     |
//! | DoubleActivate   | —                           | Neues Segment (Kontinuität)       |

use super::events::{EventOutcome, PlacementState, PointerEvent};
use super::host::{PlacementEnd, PlacementHost};
use super::output::{CurveOutput, CurveType};
use super::preview::{ControlPointMarker, PlacementPreview};
use super::segment::Segment;
use crate::geometry::linear_connections;
use crate::options::ApproximationOptions;
use glam::Vec2;

/// In Arbeit befindlicher Slider-Pfad.
///
/// Besitzt alle Segmente exklusiv; der Host besitzt nur die `CurveOutput`.
#[derive(Debug, Clone)]
pub struct PlacementSession {
    state: PlacementState,
    /// Absolute Position des Pfad-Ursprungs
    origin: Vec2,
    /// Pointer relativ zum Ursprung — Live-Anker des letzten Segments
    cursor: Vec2,
    /// Letzte absolute Pointer-Position
    pointer: Vec2,
    segments: Vec<Segment>,
    markers: Vec<ControlPointMarker>,
    options: ApproximationOptions,
}

impl Default for PlacementSession {
    fn default() -> Self {
        Self::new(ApproximationOptions::default())
    }
}

impl PlacementSession {
    /// Neue Session im Zustand `Initial` mit einem Segment am Ursprung.
    pub fn new(options: ApproximationOptions) -> Self {
        Self {
            state: PlacementState::Initial,
            origin: Vec2::ZERO,
            cursor: Vec2::ZERO,
            pointer: Vec2::ZERO,
            segments: vec![Segment::new(Vec2::ZERO)],
            markers: Vec::new(),
            options: options.sanitized(),
        }
    }

    pub fn state(&self) -> PlacementState {
        self.state
    }

    pub fn is_completed(&self) -> bool {
        self.state == PlacementState::Completed
    }

    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    /// Live-Cursor relativ zum Ursprung.
    pub fn cursor(&self) -> Vec2 {
        self.cursor
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn markers(&self) -> &[ControlPointMarker] {
        &self.markers
    }

    pub fn options(&self) -> &ApproximationOptions {
        &self.options
    }

    /// Setzt neue Approximations-Optionen; alle Segment-Caches werden verworfen.
    pub fn set_options(&mut self, options: ApproximationOptions) {
        self.options = options.sanitized();
        for segment in &mut self.segments {
            segment.invalidate();
        }
    }

    /// Verarbeitet ein Pointer-Event. Unpassende Events sind No-ops.
    pub fn handle_event(
        &mut self,
        event: PointerEvent,
        host: &mut dyn PlacementHost,
    ) -> EventOutcome {
        match (self.state, event) {
            (PlacementState::Completed, _) => EventOutcome::Ignored,

            (PlacementState::Initial, PointerEvent::PointerMove { position }) => {
                self.origin = position;
                self.pointer = position;
                EventOutcome::Handled
            }
            (PlacementState::Initial, PointerEvent::PrimaryActivate { position }) => {
                self.origin = position;
                self.pointer = position;
                self.push_marker(position);
                self.begin_curve(host);
                EventOutcome::Handled
            }
            (PlacementState::Initial, _) => EventOutcome::Ignored,

            (PlacementState::Body, event) => {
                self.track_pointer(event.position());
                match event {
                    PointerEvent::PointerMove { .. } => {}
                    PointerEvent::PrimaryActivate { position } => {
                        let anchor = self.cursor;
                        self.last_segment_mut().add_anchor(anchor);
                        self.push_marker(position);
                    }
                    PointerEvent::SecondaryRelease { .. } => self.end_curve(host),
                    PointerEvent::DoubleActivate { .. } => self.start_segment(host),
                }
                EventOutcome::Handled
            }
        }
    }

    /// Pro Frame: alle Segmente neu berechnen und die Kurven-Ausgabe überschreiben.
    pub fn tick(&mut self, host: &mut dyn PlacementHost) {
        match self.state {
            PlacementState::Completed => {}
            // Auch vor dem ersten Klick: Ausgabe = Ursprung + Cursor (0,0)
            PlacementState::Initial | PlacementState::Body => {
                self.recompute_segments();
                self.write_output(host.curve_mut());
                log::trace!(
                    "Tick: {} Segmente, Distanz {:.3}",
                    self.segments.len(),
                    host.curve_mut().distance
                );
            }
        }
    }

    /// Bricht die Platzierung ab. Eine begonnene Platzierung meldet `Aborted`.
    pub fn abort(&mut self, host: &mut dyn PlacementHost) {
        match self.state {
            PlacementState::Completed => {}
            PlacementState::Initial => {
                self.state = PlacementState::Completed;
                log::debug!("Platzierung vor Kurvenbeginn verworfen");
            }
            PlacementState::Body => {
                self.state = PlacementState::Completed;
                host.end_placement(PlacementEnd::Aborted);
                log::debug!("Platzierung abgebrochen");
            }
        }
    }

    /// Preview der zuletzt berechneten Geometrie in absoluten Koordinaten.
    pub fn preview(&self) -> PlacementPreview {
        let mut nodes = Vec::new();
        let mut connections = Vec::new();
        for segment in &self.segments {
            let polyline = segment.polyline();
            let offset = nodes.len();
            connections.extend(
                linear_connections(polyline.len())
                    .into_iter()
                    .map(|(a, b)| (a + offset, b + offset)),
            );
            nodes.extend(polyline.iter().map(|&p| self.origin + p));
        }

        let rubber_band = match (self.state, self.markers.last()) {
            (PlacementState::Body, Some(marker)) => Some((marker.position, self.pointer)),
            _ => None,
        };

        PlacementPreview {
            nodes,
            connections,
            markers: self.markers.clone(),
            rubber_band,
        }
    }

    // ── Übergänge ─────────────────────────────────────────────────

    fn begin_curve(&mut self, host: &mut dyn PlacementHost) {
        host.begin_placement();
        let start_time = host.current_time();
        let curve = host.curve_mut();
        curve.start_time = start_time;
        curve.position = self.origin;

        self.cursor = Vec2::ZERO;
        self.state = PlacementState::Body;
        log::debug!(
            "Kurve begonnen bei ({:.1}, {:.1}), Startzeit {}",
            self.origin.x,
            self.origin.y,
            start_time
        );
    }

    fn end_curve(&mut self, host: &mut dyn PlacementHost) {
        self.recompute_segments();
        self.write_output(host.curve_mut());
        self.state = PlacementState::Completed;
        host.end_placement(PlacementEnd::Committed);

        let curve = host.curve_mut();
        log::debug!(
            "Kurve abgeschlossen: {} Kontrollpunkte, {:?}, Distanz {:.3}",
            curve.control_points.len(),
            curve.curve_type,
            curve.distance
        );
    }

    /// Neues Segment, beginnend beim letzten festen Anker des bisherigen.
    fn start_segment(&mut self, host: &mut dyn PlacementHost) {
        let carried = self.last_segment().last_anchor();
        self.segments.push(Segment::new(carried));

        if let Some(index) = self.markers.len().checked_sub(1) {
            self.markers[index].segment_separator = true;
            host.segment_boundary(index);
        }
        log::debug!("Segment {} begonnen", self.segments.len());
    }

    // ── Hilfsmethoden ─────────────────────────────────────────────

    fn track_pointer(&mut self, position: Vec2) {
        self.pointer = position;
        self.cursor = position - self.origin;
    }

    fn push_marker(&mut self, position: Vec2) {
        self.markers.push(ControlPointMarker {
            position,
            segment_separator: false,
        });
    }

    fn last_segment(&self) -> &Segment {
        let last = self.segments.len() - 1;
        &self.segments[last]
    }

    fn last_segment_mut(&mut self) -> &mut Segment {
        let last = self.segments.len() - 1;
        &mut self.segments[last]
    }

    /// Nur das letzte Segment erhält den Live-Cursor; frühere sind eingefroren.
    fn recompute_segments(&mut self) {
        let last = self.segments.len() - 1;
        let cursor = self.cursor;
        for (index, segment) in self.segments.iter_mut().enumerate() {
            segment.recompute((index == last).then_some(cursor), &self.options);
        }
    }

    fn write_output(&self, curve: &mut CurveOutput) {
        curve.position = self.origin;
        curve.control_points = self
            .segments
            .iter()
            .flat_map(|s| s.anchors().iter().copied())
            .chain(std::iter::once(self.cursor))
            .collect();
        curve.curve_type = CurveType::for_point_count(curve.control_points.len());
        curve.distance = self.segments.iter().map(Segment::arc_length).sum();
    }
}
