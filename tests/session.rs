//! End-to-end pipeline properties exercised through the public library API.

use glyphtrace::config::Config;
use glyphtrace::draw::InkBuffer;
use glyphtrace::glyphs::GlyphCatalog;
use glyphtrace::input::PointerSample;
use glyphtrace::score::{CompletionEvaluator, CompletionState, GlyphMask};
use glyphtrace::session::TraceSession;

fn test_config() -> Config {
    Config::from_toml_str("[canvas]\nwidth = 240\nheight = 240\n").unwrap()
}

fn pen(x: f64, y: f64, pressure: f64, t: u64) -> PointerSample {
    PointerSample::Pen {
        x,
        y,
        pressure: Some(pressure),
        timestamp_ms: t,
    }
}

/// A wavy multi-tick stroke roughly following the center of the canvas.
fn scripted_stroke(offset: u64) -> Vec<Vec<PointerSample>> {
    (0..6)
        .map(|tick| {
            (0..10)
                .map(|i| {
                    let step = (tick * 10 + i) as f64;
                    pen(
                        40.0 + step * 2.5,
                        120.0 + (step * 0.3).sin() * 25.0,
                        0.4 + 0.4 * ((step * 0.1).cos().abs()),
                        offset + (tick * 10 + i) as u64 * 8,
                    )
                })
                .collect()
        })
        .collect()
}

fn run_stroke(session: &mut TraceSession, offset: u64) {
    let mut now = offset;
    for batch in scripted_stroke(offset) {
        now = batch
            .last()
            .map(|s| match s {
                PointerSample::Pen { timestamp_ms, .. } => *timestamp_ms,
                PointerSample::Mouse { timestamp_ms, .. } => *timestamp_ms,
            })
            .unwrap_or(now);
        session.tick(&batch, now);
    }
    // Lift the pen.
    session.tick(&[pen(190.0, 120.0, 0.0, now + 10)], now + 10);
}

#[test]
fn identical_input_after_clear_is_bit_identical() {
    let config = test_config();
    let mut session = TraceSession::new(&config, GlyphCatalog::hiragana());

    run_stroke(&mut session, 0);
    let first: Vec<f32> = session.ink().pixels().to_vec();
    assert!(!session.ink().is_blank());

    session.clear();
    assert!(session.ink().is_blank());

    run_stroke(&mut session, 0);
    assert_eq!(session.ink().pixels(), first.as_slice());
}

#[test]
fn reversed_stroke_produces_identical_ink() {
    let config = test_config();
    let points: Vec<(f64, f64, f64)> = (0..40)
        .map(|i| {
            let step = i as f64;
            (50.0 + step * 3.0, 100.0 + step * 1.5, 0.3 + step * 0.015)
        })
        .collect();

    let mut forward = TraceSession::new(&config, GlyphCatalog::hiragana());
    let batch: Vec<PointerSample> = points
        .iter()
        .enumerate()
        .map(|(i, &(x, y, p))| pen(x, y, p, i as u64 * 5))
        .collect();
    forward.tick(&batch, 200);

    let mut reverse = TraceSession::new(&config, GlyphCatalog::hiragana());
    let batch: Vec<PointerSample> = points
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &(x, y, p))| pen(x, y, p, i as u64 * 5))
        .collect();
    reverse.tick(&batch, 200);

    assert_eq!(forward.ink().pixels(), reverse.ink().pixels());
}

#[test]
fn coverage_is_monotone_between_resets() {
    let config = test_config();
    let mut session = TraceSession::new(&config, GlyphCatalog::hiragana());

    let mut last = 0.0;
    let mut now = 0;
    for batch in scripted_stroke(0) {
        now += 80;
        let report = session.tick(&batch, now);
        assert!(
            report.coverage >= last,
            "coverage regressed: {last} -> {}",
            report.coverage
        );
        last = report.coverage;
    }
}

#[test]
fn tap_leaves_no_ink_and_no_coverage() {
    let config = test_config();
    let mut session = TraceSession::new(&config, GlyphCatalog::hiragana());

    session.tick(&[pen(120.0, 120.0, 0.9, 0)], 0);
    session.tick(&[pen(120.0, 120.0, 0.0, 10)], 10);

    assert_eq!(session.stroke_count(), 1);
    assert!(session.ink().is_blank());
    assert_eq!(session.coverage_ratio(), 0.0);
    assert_eq!(session.completion_state(), CompletionState::NotStarted);
}

#[test]
fn mouse_samples_draw_nothing() {
    let config = test_config();
    let mut session = TraceSession::new(&config, GlyphCatalog::hiragana());

    let samples: Vec<PointerSample> = (0..30)
        .map(|i| PointerSample::Mouse {
            x: 40.0 + i as f64 * 5.0,
            y: 120.0,
            timestamp_ms: i * 10,
        })
        .collect();
    let report = session.tick(&samples, 300);

    assert!(!report.rendered_ink);
    assert!(session.ink().is_blank());
    assert!(session.preview().is_blank());
}

#[test]
fn completion_fires_exactly_once_for_a_thousand_pixel_mask() {
    // 1000 required pixels, threshold 0.75: covering 800 distinct required
    // pixels completes the attempt with exactly one event.
    let mut evaluator = CompletionEvaluator::new(0.75);
    evaluator.set_target(0, Some(GlyphMask::from_fn(100, 10, |_, _| true)));

    let mut events = 0;
    for i in 0..800u32 {
        evaluator.note_covered_pixel(i % 100, i / 100);
        if evaluator.update().is_some() {
            events += 1;
        }
    }
    assert_eq!(events, 1);
    assert_eq!(evaluator.state(), CompletionState::Completed);

    // Ink drawn after completion fires nothing further.
    for i in 800..1000u32 {
        evaluator.note_covered_pixel(i % 100, i / 100);
        assert!(evaluator.update().is_none());
    }
}

#[test]
fn completed_survives_further_ticks_until_clear() {
    let config = Config::from_toml_str(
        "[canvas]\nwidth = 240\nheight = 240\n\n[completion]\nthreshold = 0.05\n",
    )
    .unwrap();
    let mut session = TraceSession::new(&config, GlyphCatalog::hiragana());

    // Paint the whole canvas in dense horizontal passes; with a 5%
    // threshold the attempt is guaranteed to complete along the way.
    let mut completions = 0;
    let mut now = 0;
    for row in 0..28u64 {
        let y = 8.0 + row as f64 * 8.0;
        let batch: Vec<PointerSample> = (0..45)
            .map(|i| {
                now += 5;
                pen(8.0 + i as f64 * 5.0, y, 0.8, now)
            })
            .collect();
        if session.tick(&batch, now).completed.is_some() {
            completions += 1;
        }
    }
    assert_eq!(completions, 1);
    assert_eq!(session.completion_state(), CompletionState::Completed);

    // More drawing cannot re-fire or downgrade the state.
    let extra: Vec<PointerSample> =
        (0..20).map(|i| pen(60.0, 60.0 + i as f64 * 4.0, 0.9, now + 10 + i * 5)).collect();
    let report = session.tick(&extra, now + 200);
    assert!(report.completed.is_none());
    assert_eq!(session.completion_state(), CompletionState::Completed);

    session.clear();
    assert_eq!(session.completion_state(), CompletionState::NotStarted);
}

#[test]
fn ink_buffer_opacity_never_decreases() {
    let mut ink = InkBuffer::new(50, 50);
    ink.stamp_disc(25.0, 25.0, 6.0, 0.9, 0.25, |_, _| {});
    let before: Vec<f32> = ink.pixels().to_vec();

    ink.stamp_disc(25.0, 25.0, 6.0, 0.3, 0.25, |_, _| {});
    for (b, a) in before.iter().zip(ink.pixels()) {
        assert!(a >= b);
    }
}
