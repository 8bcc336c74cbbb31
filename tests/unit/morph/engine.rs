use super::*;
use crate::{
    foundation::{color::Color, core::Rect},
    shape::{form::Form, model::ShapeId},
};
use rand::SeedableRng;
use rand_pcg::Pcg32;

fn set_of(kinds: &[ShapeKind]) -> ShapeSet {
    let shapes = kinds
        .iter()
        .enumerate()
        .map(|(i, &kind)| {
            let x = i as f64 * 50.0;
            Shape {
                id: ShapeId {
                    generation: 2,
                    attempt: i as u32 + 1,
                },
                kind,
                bounds: Rect::new(x, 0.0, x + 30.0, 40.0),
                color: Color::rgb(200, 100, 50),
                stretch: Stretch::Wide,
                morph: None,
            }
        })
        .collect();
    ShapeSet::new(2, shapes)
}

#[test]
fn retarget_never_picks_current_kind() {
    let engine = MorphEngine::default();
    let mut rng = Pcg32::seed_from_u64(99);
    let mut set = set_of(&ShapeKind::ALL);
    for round in 0..50 {
        let now = Millis(round as f64 * 2_000.0);
        let next = engine.retarget(&set, now, &mut rng);
        for (before, after) in set.iter().zip(next.iter()) {
            let m = after.morph.expect("retarget sets morph state");
            assert_ne!(m.target, after.kind);
            assert_eq!(m.progress, 0.0);
            assert_eq!(m.started_at, now);
            assert_eq!(after.id, before.id);
            assert_eq!(after.bounds, before.bounds);
            assert_eq!(after.color, before.color);
        }
        set = next;
    }
}

#[test]
fn pick_other_kind_covers_every_alternative() {
    let mut rng = Pcg32::seed_from_u64(5);
    let mut seen = std::collections::BTreeSet::new();
    for _ in 0..2_000 {
        let k = pick_other_kind(ShapeKind::Square, &mut rng);
        assert_ne!(k, ShapeKind::Square);
        seen.insert(k);
    }
    assert_eq!(seen.len(), ShapeKind::ALL.len() - 1);
}

#[test]
fn progress_is_half_at_mid_duration() {
    let engine = MorphEngine::default();
    let t0 = Millis(10_000.0);
    let set = engine.retarget(
        &set_of(&[ShapeKind::Circle]),
        t0,
        &mut Pcg32::seed_from_u64(1),
    );

    let mid = engine.advance(&set, t0.offset(500.0));
    let m = mid.shapes[0].morph.unwrap();
    assert_eq!(m.progress, 0.5);
    assert_eq!(mid.shapes[0].kind, ShapeKind::Circle);
}

#[test]
fn commit_happens_at_full_duration() {
    let engine = MorphEngine::default();
    let t0 = Millis(0.0);
    let set = engine.retarget(
        &set_of(&[ShapeKind::Circle, ShapeKind::QuarterBottomLeft]),
        t0,
        &mut Pcg32::seed_from_u64(2),
    );
    let targets: Vec<_> = set.iter().map(|s| s.morph.unwrap()).collect();

    let end = t0.offset(engine.timing.duration_ms);
    for m in &targets {
        assert_eq!(m.progress_at(end, engine.timing.duration_ms), 1.0);
    }

    let done = engine.advance(&set, end);
    for (s, m) in done.iter().zip(&targets) {
        assert_eq!(s.kind, m.target);
        assert_eq!(s.stretch, m.stretch);
        assert!(s.morph.is_none());
    }
    assert_eq!(done.len(), 2);
}

#[test]
fn committed_rest_form_matches_transition_end() {
    let engine = MorphEngine::default();
    let set = engine.retarget(
        &set_of(&[ShapeKind::Ellipse]),
        Millis::ZERO,
        &mut Pcg32::seed_from_u64(8),
    );
    let (_, to) = set.shapes[0].morph_forms().unwrap();
    let done = engine.advance(&set, Millis(5_000.0));
    assert_eq!(done.shapes[0].rest_form(), to);
}

#[test]
fn advance_leaves_resting_shapes_alone() {
    let engine = MorphEngine::default();
    let set = set_of(&[ShapeKind::Square, ShapeKind::Circle]);
    assert_eq!(engine.advance(&set, Millis(123.0)), set);
}

#[test]
fn progress_is_monotonic_across_ticks() {
    let engine = MorphEngine::default();
    let mut set = engine.retarget(
        &set_of(&[ShapeKind::Rectangle]),
        Millis::ZERO,
        &mut Pcg32::seed_from_u64(4),
    );
    let mut last = 0.0;
    for frame in 1..60 {
        set = engine.advance(&set, Millis(frame as f64 * 16.0));
        let Some(m) = set.shapes[0].morph else {
            break;
        };
        assert!(m.progress >= last);
        last = m.progress;
    }
}

#[test]
fn interrupted_transition_restarts_from_current_state() {
    let engine = MorphEngine::default();
    let mut rng = Pcg32::seed_from_u64(12);
    let mut set = set_of(&[ShapeKind::Circle]);
    // Force a same-family transition so the mid-point is a blended ellipse.
    set.shapes[0].morph = Some(MorphState {
        target: ShapeKind::TallEllipse,
        progress: 0.0,
        started_at: Millis::ZERO,
        stretch: Stretch::Wide,
        origin: None,
    });

    let mid = engine.advance(&set, Millis(400.0));
    let shown = appearance(&mid.shapes[0], engine.timing.ease).dominant();

    let again = engine.retarget(&mid, Millis(400.0), &mut rng);
    let s = &again.shapes[0];
    let m = s.morph.unwrap();
    assert_eq!(s.kind, ShapeKind::Circle);
    assert_eq!(m.origin, Some(shown));
    assert_eq!(m.started_at, Millis(400.0));
    assert_ne!(m.target, ShapeKind::Circle);

    let (from, _) = s.morph_forms().unwrap();
    assert_eq!(from, shown);
    assert!(matches!(from, Form::Ellipse { .. }));
}

#[test]
fn overdue_transition_commits_before_retarget() {
    let engine = MorphEngine::default();
    let mut set = set_of(&[ShapeKind::Circle]);
    set.shapes[0].morph = Some(MorphState {
        target: ShapeKind::Square,
        progress: 0.9,
        started_at: Millis::ZERO,
        stretch: Stretch::Tall,
        origin: None,
    });

    let next = engine.retarget(&set, Millis(2_000.0), &mut Pcg32::seed_from_u64(3));
    let s = &next.shapes[0];
    assert_eq!(s.kind, ShapeKind::Square);
    assert_eq!(s.stretch, Stretch::Tall);
    let m = s.morph.unwrap();
    assert!(m.origin.is_none());
    assert_ne!(m.target, ShapeKind::Square);
}
