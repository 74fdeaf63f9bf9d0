use super::*;
use crate::options::ApproximationOptions;
use approx::assert_relative_eq;
use glam::Vec2;

/// Test-Host: zeichnet Lifecycle-Aufrufe in Reihenfolge auf.
#[derive(Default)]
struct RecordingHost {
    time: f64,
    curve: CurveOutput,
    calls: Vec<String>,
}

impl PlacementHost for RecordingHost {
    fn current_time(&self) -> f64 {
        self.time
    }

    fn curve_mut(&mut self) -> &mut CurveOutput {
        &mut self.curve
    }

    fn begin_placement(&mut self) {
        self.calls.push("begin".into());
    }

    fn end_placement(&mut self, end: PlacementEnd) {
        self.calls.push(format!("end:{end:?}"));
    }

    fn segment_boundary(&mut self, marker_index: usize) {
        self.calls.push(format!("boundary:{marker_index}"));
    }
}

fn mv(x: f32, y: f32) -> PointerEvent {
    PointerEvent::PointerMove {
        position: Vec2::new(x, y),
    }
}

fn primary(x: f32, y: f32) -> PointerEvent {
    PointerEvent::PrimaryActivate {
        position: Vec2::new(x, y),
    }
}

fn secondary(x: f32, y: f32) -> PointerEvent {
    PointerEvent::SecondaryRelease {
        position: Vec2::new(x, y),
    }
}

fn double(x: f32, y: f32) -> PointerEvent {
    PointerEvent::DoubleActivate {
        position: Vec2::new(x, y),
    }
}

fn run(session: &mut PlacementSession, host: &mut RecordingHost, events: &[PointerEvent]) {
    for &event in events {
        session.handle_event(event, host);
        session.tick(host);
    }
}

// ── Segment ──

#[test]
fn test_segment_single_anchor_without_live_is_empty() {
    let mut segment = Segment::new(Vec2::new(4.0, 2.0));
    let geometry = segment.recompute(None, &ApproximationOptions::default());
    assert!(geometry.polyline.is_empty());
    assert_eq!(geometry.arc_length, 0.0);
}

#[test]
fn test_segment_live_anchor_is_not_stored() {
    let mut segment = Segment::new(Vec2::ZERO);
    let geometry = segment
        .recompute(Some(Vec2::new(3.0, 4.0)), &ApproximationOptions::default())
        .clone();
    assert_eq!(geometry.polyline, vec![Vec2::ZERO, Vec2::new(3.0, 4.0)]);
    assert_relative_eq!(geometry.arc_length, 5.0);
    assert_eq!(segment.anchors(), &[Vec2::ZERO]);
}

#[test]
fn test_segment_recompute_is_idempotent() {
    let opts = ApproximationOptions::default();
    let mut segment = Segment::new(Vec2::ZERO);
    segment.add_anchor(Vec2::new(10.0, 0.0));
    segment.add_anchor(Vec2::new(10.0, 10.0));
    let live = Some(Vec2::new(-5.0, 20.0));

    let first = segment.recompute(live, &opts).clone();
    let second = segment.recompute(live, &opts).clone();
    assert_eq!(first, second);

    // Frische Berechnung ohne Cache liefert dasselbe Ergebnis
    segment.invalidate();
    let fresh = segment.recompute(live, &opts).clone();
    assert_eq!(first, fresh);
}

#[test]
fn test_segment_cache_follows_live_anchor_and_new_anchors() {
    let opts = ApproximationOptions::default();
    let mut segment = Segment::new(Vec2::ZERO);
    assert_relative_eq!(segment.recompute(Some(Vec2::new(2.0, 0.0)), &opts).arc_length, 2.0);
    assert_relative_eq!(segment.recompute(Some(Vec2::new(7.0, 0.0)), &opts).arc_length, 7.0);

    segment.add_anchor(Vec2::new(7.0, 0.0));
    assert_relative_eq!(segment.recompute(None, &opts).arc_length, 7.0);
    assert_relative_eq!(segment.arc_length(), 7.0);
}

#[test]
fn test_segment_arc_length_zero_iff_single_distinct_point() {
    let opts = ApproximationOptions::default();
    let mut segment = Segment::new(Vec2::new(5.0, 5.0));
    assert_eq!(segment.recompute(Some(Vec2::new(5.0, 5.0)), &opts).arc_length, 0.0);
    assert!(segment.recompute(Some(Vec2::new(6.0, 5.0)), &opts).arc_length > 0.0);

    segment.add_anchor(Vec2::new(5.0, 5.0));
    assert_eq!(segment.recompute(Some(Vec2::new(5.0, 5.0)), &opts).arc_length, 0.0);
    assert!(segment.recompute(Some(Vec2::new(5.0, 9.0)), &opts).arc_length > 0.0);
}

// ── Zustandsübergänge ──

#[test]
fn test_initial_pointer_moves_origin() {
    let mut session = PlacementSession::default();
    let mut host = RecordingHost::default();

    assert_eq!(session.handle_event(mv(3.0, 7.0), &mut host), EventOutcome::Handled);
    session.tick(&mut host);

    assert_eq!(session.state(), PlacementState::Initial);
    assert_eq!(session.origin(), Vec2::new(3.0, 7.0));
    assert_eq!(host.curve.position, Vec2::new(3.0, 7.0));
    assert!(host.calls.is_empty());
}

#[test]
fn test_initial_tick_writes_degenerate_linear_curve() {
    let mut session = PlacementSession::default();
    let mut host = RecordingHost::default();

    session.handle_event(mv(3.0, 7.0), &mut host);
    session.tick(&mut host);

    assert_eq!(host.curve.control_points, vec![Vec2::ZERO, Vec2::ZERO]);
    assert_eq!(host.curve.curve_type, CurveType::Linear);
    assert_relative_eq!(host.curve.distance, 0.0);
    assert_eq!(host.curve.position, Vec2::new(3.0, 7.0));
    assert_eq!(session.state(), PlacementState::Initial);
}

#[test]
fn test_initial_ignores_secondary_and_double() {
    let mut session = PlacementSession::default();
    let mut host = RecordingHost::default();

    assert_eq!(session.handle_event(secondary(1.0, 1.0), &mut host), EventOutcome::Ignored);
    assert_eq!(session.handle_event(double(1.0, 1.0), &mut host), EventOutcome::Ignored);
    assert_eq!(session.state(), PlacementState::Initial);
    assert_eq!(session.segments().len(), 1);
}

#[test]
fn test_primary_begins_curve_with_clock_time() {
    let mut session = PlacementSession::default();
    let mut host = RecordingHost {
        time: 1234.5,
        ..Default::default()
    };

    session.handle_event(primary(20.0, 30.0), &mut host);

    assert_eq!(session.state(), PlacementState::Body);
    assert_eq!(host.curve.start_time, 1234.5);
    assert_eq!(host.curve.position, Vec2::new(20.0, 30.0));
    assert_eq!(host.calls, vec!["begin"]);
    assert_eq!(session.markers().len(), 1);
}

#[test]
fn test_body_cursor_is_relative_to_origin() {
    let mut session = PlacementSession::default();
    let mut host = RecordingHost::default();

    run(&mut session, &mut host, &[mv(100.0, 100.0), primary(100.0, 100.0), mv(110.0, 95.0)]);

    assert_eq!(session.cursor(), Vec2::new(10.0, -5.0));
    assert_eq!(host.curve.control_points, vec![Vec2::ZERO, Vec2::new(10.0, -5.0)]);
}

#[test]
fn test_events_after_completion_are_ignored() {
    let mut session = PlacementSession::default();
    let mut host = RecordingHost::default();
    run(&mut session, &mut host, &[primary(0.0, 0.0), mv(10.0, 0.0), secondary(10.0, 0.0)]);
    let frozen = host.curve.clone();

    for event in [mv(50.0, 50.0), primary(50.0, 50.0), double(1.0, 1.0), secondary(0.0, 0.0)] {
        assert_eq!(session.handle_event(event, &mut host), EventOutcome::Ignored);
        session.tick(&mut host);
    }
    assert_eq!(host.curve, frozen);
    assert_eq!(host.calls, vec!["begin", "end:Committed"]);
}

#[test]
fn test_abort_in_body_pairs_lifecycle_hooks() {
    let mut session = PlacementSession::default();
    let mut host = RecordingHost::default();
    run(&mut session, &mut host, &[primary(0.0, 0.0), mv(5.0, 5.0)]);

    session.abort(&mut host);
    session.abort(&mut host);

    assert!(session.is_completed());
    assert_eq!(host.calls, vec!["begin", "end:Aborted"]);
}

#[test]
fn test_abort_in_initial_notifies_nothing() {
    let mut session = PlacementSession::default();
    let mut host = RecordingHost::default();
    session.handle_event(mv(5.0, 5.0), &mut host);

    session.abort(&mut host);

    assert!(session.is_completed());
    assert!(host.calls.is_empty());
}

// ── Segmente & Kontinuität ──

#[test]
fn test_double_activation_carries_last_anchor() {
    let mut session = PlacementSession::default();
    let mut host = RecordingHost::default();
    run(
        &mut session,
        &mut host,
        &[primary(0.0, 0.0), mv(10.0, 0.0), primary(10.0, 0.0), mv(20.0, 5.0), primary(20.0, 5.0)],
    );

    session.handle_event(double(20.0, 5.0), &mut host);

    let segments = session.segments();
    assert_eq!(segments.len(), 2);
    assert_eq!(segments[1].anchors(), &[segments[0].last_anchor()]);
    assert_eq!(segments[1].anchors()[0], Vec2::new(20.0, 5.0));
    assert!(session.markers()[2].segment_separator);
    assert_eq!(host.calls, vec!["begin", "boundary:2"]);
}

#[test]
fn test_only_last_segment_receives_live_cursor() {
    let mut session = PlacementSession::default();
    let mut host = RecordingHost::default();
    run(
        &mut session,
        &mut host,
        &[primary(0.0, 0.0), mv(10.0, 0.0), primary(10.0, 0.0), double(10.0, 0.0), mv(10.0, 10.0)],
    );

    let segments = session.segments();
    assert_relative_eq!(segments[0].arc_length(), 10.0);
    assert_relative_eq!(segments[1].arc_length(), 10.0);
    assert_relative_eq!(host.curve.distance, 20.0);
    assert_eq!(
        host.curve.control_points,
        vec![Vec2::ZERO, Vec2::new(10.0, 0.0), Vec2::new(10.0, 0.0), Vec2::new(10.0, 10.0)]
    );
}

#[test]
fn test_curve_type_matches_total_point_count() {
    let mut session = PlacementSession::default();
    let mut host = RecordingHost::default();
    run(&mut session, &mut host, &[primary(0.0, 0.0), mv(4.0, 0.0)]);
    assert_eq!(host.curve.control_points.len(), 2);
    assert_eq!(host.curve.curve_type, CurveType::Linear);

    run(&mut session, &mut host, &[primary(4.0, 0.0), mv(4.0, 4.0)]);
    assert_eq!(host.curve.control_points.len(), 3);
    assert_eq!(host.curve.curve_type, CurveType::Bezier);
}

#[test]
fn test_set_options_invalidates_caches() {
    let mut session = PlacementSession::default();
    let mut host = RecordingHost::default();
    run(
        &mut session,
        &mut host,
        &[primary(0.0, 0.0), mv(40.0, 0.0), primary(40.0, 0.0), mv(40.0, 40.0)],
    );
    let fine_points = session.segments()[0].polyline().len();

    session.set_options(ApproximationOptions {
        bezier_tolerance: 50.0,
        ..Default::default()
    });
    session.tick(&mut host);

    assert!(session.segments()[0].polyline().len() < fine_points);
}

// ── Preview ──

#[test]
fn test_preview_is_absolute_and_split_per_segment() {
    let mut session = PlacementSession::default();
    let mut host = RecordingHost::default();
    run(
        &mut session,
        &mut host,
        &[
            mv(100.0, 0.0),
            primary(100.0, 0.0),
            mv(110.0, 0.0),
            primary(110.0, 0.0),
            double(110.0, 0.0),
            mv(110.0, 10.0),
        ],
    );

    let preview = session.preview();
    assert_eq!(
        preview.nodes,
        vec![
            Vec2::new(100.0, 0.0),
            Vec2::new(110.0, 0.0),
            Vec2::new(110.0, 0.0),
            Vec2::new(110.0, 10.0)
        ]
    );
    assert_eq!(preview.connections, vec![(0, 1), (2, 3)]);
    assert_eq!(preview.markers.len(), 2);
    assert_eq!(preview.rubber_band, Some((Vec2::new(110.0, 0.0), Vec2::new(110.0, 10.0))));
}

// ── End-to-End-Szenarien ──

#[test]
fn test_scenario_a_straight_line() {
    let mut session = PlacementSession::default();
    let mut host = RecordingHost {
        time: 500.0,
        ..Default::default()
    };

    run(&mut session, &mut host, &[mv(0.0, 0.0), primary(0.0, 0.0)]);
    assert_eq!(session.state(), PlacementState::Body);

    run(&mut session, &mut host, &[mv(10.0, 0.0), secondary(10.0, 0.0)]);

    assert_eq!(session.state(), PlacementState::Completed);
    assert_eq!(host.curve.start_time, 500.0);
    assert_eq!(host.curve.control_points, vec![Vec2::ZERO, Vec2::new(10.0, 0.0)]);
    assert_eq!(host.curve.curve_type, CurveType::Linear);
    assert_relative_eq!(host.curve.distance, 10.0);
    assert_eq!(host.calls, vec!["begin", "end:Committed"]);
}

#[test]
fn test_scenario_b_right_angle_bend() {
    let mut session = PlacementSession::default();
    let mut host = RecordingHost::default();

    run(
        &mut session,
        &mut host,
        &[
            mv(0.0, 0.0),
            primary(0.0, 0.0),
            mv(10.0, 0.0),
            primary(10.0, 0.0),
            mv(10.0, 10.0),
            secondary(10.0, 10.0),
        ],
    );

    assert_eq!(
        host.curve.control_points,
        vec![Vec2::ZERO, Vec2::new(10.0, 0.0), Vec2::new(10.0, 10.0)]
    );
    assert_eq!(host.curve.curve_type, CurveType::Bezier);
    assert!(host.curve.distance >= 200.0f32.sqrt());
    assert!(host.curve.distance <= 20.0);
}

#[test]
fn test_scenario_c_double_activation_right_after_begin() {
    let mut session = PlacementSession::default();
    let mut host = RecordingHost::default();

    run(&mut session, &mut host, &[mv(0.0, 0.0), primary(0.0, 0.0), double(0.0, 0.0)]);

    let segments = session.segments();
    assert_eq!(segments.len(), 2);
    assert_eq!(segments[1].anchors(), &[Vec2::ZERO]);
    assert_eq!(host.curve.control_points, vec![Vec2::ZERO, Vec2::ZERO, Vec2::ZERO]);
    assert_eq!(host.curve.distance, 0.0);
}

#[test]
fn test_immediate_secondary_release_gives_minimal_linear_curve() {
    let mut session = PlacementSession::default();
    let mut host = RecordingHost::default();

    session.handle_event(primary(5.0, 5.0), &mut host);
    session.handle_event(secondary(5.0, 5.0), &mut host);

    assert!(session.is_completed());
    assert_eq!(host.curve.control_points, vec![Vec2::ZERO, Vec2::ZERO]);
    assert_eq!(host.curve.curve_type, CurveType::Linear);
    assert_eq!(host.curve.distance, 0.0);
}
