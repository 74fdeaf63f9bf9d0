#![no_main]

use glam::Vec2;
use libfuzzer_sys::fuzz_target;
use slider_placement_engine::{
    CurveOutput, CurveType, PlacementEnd, PlacementHost, PlacementSession, PointerEvent,
};

#[derive(Default)]
struct FuzzHost {
    curve: CurveOutput,
    began: u32,
    ended: u32,
}

impl PlacementHost for FuzzHost {
    fn current_time(&self) -> f64 {
        0.0
    }

    fn curve_mut(&mut self) -> &mut CurveOutput {
        &mut self.curve
    }

    fn begin_placement(&mut self) {
        assert_eq!(self.ended, 0, "begin nach end");
        self.began += 1;
    }

    fn end_placement(&mut self, _end: PlacementEnd) {
        assert_eq!(self.began, 1, "end ohne begin");
        self.ended += 1;
    }
}

/// Begrenzt den Segment-Grad; jeder Tick flacht das Live-Segment neu ab.
const MAX_EVENTS: usize = 64;

// Je 5 Bytes: Event-Art + zwei i16-Koordinaten
fuzz_target!(|data: &[u8]| {
    let mut session = PlacementSession::default();
    let mut host = FuzzHost::default();

    for chunk in data.chunks_exact(5).take(MAX_EVENTS) {
        let position = Vec2::new(
            i16::from_le_bytes([chunk[1], chunk[2]]) as f32,
            i16::from_le_bytes([chunk[3], chunk[4]]) as f32,
        );
        let event = match chunk[0] % 6 {
            0 | 1 => PointerEvent::PointerMove { position },
            2 => PointerEvent::PrimaryActivate { position },
            3 => PointerEvent::SecondaryRelease { position },
            4 => PointerEvent::DoubleActivate { position },
            _ => {
                session.tick(&mut host);
                continue;
            }
        };
        session.handle_event(event, &mut host);
        session.tick(&mut host);

        let curve = &host.curve;
        assert!(curve.distance >= 0.0 && curve.distance.is_finite());
        if !curve.control_points.is_empty() {
            let expected = if curve.control_points.len() > 2 {
                CurveType::Bezier
            } else {
                CurveType::Linear
            };
            assert_eq!(curve.curve_type, expected);
        }
    }

    assert!(host.ended <= host.began);
});
