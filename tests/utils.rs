//! Tests for the building blocks

use revfx_dsp::utils::arena::Arena;
use revfx_dsp::utils::delay_line::DelayLine;
use revfx_dsp::utils::filter::OnePole;
use revfx_dsp::utils::lfo::Lfo;
use revfx_dsp::utils::{crossfade, flush_denormal, param_10bit_to_f32};

#[test]
fn delay_line_taps() {
    let mut storage = [9.0; 4];
    let mut line = DelayLine::new(&mut storage);
    assert_eq!(line.max_delay(), 4);
    assert_eq!(line.peak(), 0.0);

    for sample in 1..=5 {
        line.write(sample as f32);
    }

    assert_eq!(line.read(0), 5.0);
    assert_eq!(line.read(1), 4.0);
    assert_eq!(line.read(3), 2.0);
    assert_eq!(line.tail(), 2.0);
    assert_eq!(line.peak(), 5.0);
}

#[test]
fn delay_line_interpolation() {
    let mut storage = [0.0; 8];
    let mut line = DelayLine::new(&mut storage);
    for sample in 0..8 {
        line.write(sample as f32);
    }

    assert_eq!(line.read_frac(0.0), 7.0);
    assert_eq!(line.read_frac(0.5), 6.5);
    assert!((line.read_frac(2.25) - 4.75).abs() < 1e-6);

    // Positions are clamped so both taps stay inside the line.
    assert_eq!(line.read_frac(-3.0), 7.0);
    assert_eq!(line.read_frac(100.0), line.read(6));
}

#[test]
fn delay_line_reset() {
    let mut storage = [0.0; 3];
    let mut line = DelayLine::new(&mut storage);
    line.write(1.0);
    line.write(2.0);
    line.reset();

    assert_eq!(line.peak(), 0.0);
    line.write(3.0);
    assert_eq!(line.read(0), 3.0);
    assert_eq!(line.tail(), 0.0);
}

#[test]
fn arena_hands_out_disjoint_blocks() {
    let mut memory = [1.0; 10];
    let mut arena = Arena::new(&mut memory);

    let a = arena.allocate::<4>().unwrap();
    let b = arena.allocate::<5>().unwrap();
    assert!(a.iter().chain(b.iter()).all(|&x| x == 0.0));
    a[0] = 2.0;
    b[0] = 3.0;

    assert_eq!(arena.used(), 9);
    assert_eq!(arena.remaining(), 1);
    assert!(arena.allocate::<2>().is_none());
    assert_eq!(arena.remaining(), 1);
    assert!(arena.allocate::<1>().is_some());
    assert_eq!(arena.remaining(), 0);

    assert_eq!(memory[0], 2.0);
    assert_eq!(memory[4], 3.0);
}

#[test]
fn lfo_cycle() {
    let mut lfo = Lfo::new();
    lfo.init(0.25, 0.0);

    let values: Vec<f32> = (0..5)
        .map(|_| {
            let value = lfo.value();
            lfo.advance();
            value
        })
        .collect();

    for (value, expected) in values.iter().zip([1.0, 0.0, -1.0, 0.0, 1.0]) {
        assert!((value - expected).abs() < 1e-5, "{values:?}");
    }
}

#[test]
fn lfo_phase_wraps() {
    let mut lfo = Lfo::new();
    lfo.init(0.3 / 48000.0, 1.25);
    assert!((lfo.phase() - 0.25).abs() < 1e-6);
    assert!(lfo.value().abs() < 1e-5);

    for _ in 0..200_000 {
        lfo.advance();
        assert!((0.0..1.0).contains(&lfo.phase()));
    }

    lfo.start();
    assert!((lfo.phase() - 0.25).abs() < 1e-6);
}

#[test]
fn lfo_rate_holds_over_time() {
    let mut lfo = Lfo::new();
    lfo.init(0.5 / 48000.0, 0.0);

    // 100 seconds are exactly 50 cycles.
    for _ in 0..48000 * 100 {
        lfo.advance();
    }

    let offset = lfo.phase().min(1.0 - lfo.phase());
    assert!(offset < 2e-3, "phase {}", lfo.phase());
}

#[test]
fn one_pole() {
    let mut lp = OnePole::new();
    assert_eq!(lp.process(0.8, 1.0), 0.8);
    assert_eq!(lp.process(0.3, 0.0), 0.8);
    assert_eq!(lp.process(0.0, 0.5), 0.4);
    assert_eq!(lp.state(), 0.4);

    lp.reset();
    assert_eq!(lp.state(), 0.0);

    // Tiny states are flushed to an exact zero.
    assert_eq!(lp.process(1e-22, 1.0), 0.0);
    assert_eq!(lp.process(1e-3, 1.0), 1e-3);
    for _ in 0..1000 {
        lp.process(0.0, 0.1);
    }
    assert_eq!(lp.state(), 0.0);
}

#[test]
fn helpers() {
    assert_eq!(crossfade(0.2, 1.0, 0.0), 0.2);
    assert_eq!(crossfade(0.0, 1.0, 0.5), 0.5);
    assert_eq!(param_10bit_to_f32(0), 0.0);
    assert_eq!(param_10bit_to_f32(1023), 1.0);
    assert_eq!(param_10bit_to_f32(5000), 1.0);
    assert_eq!(param_10bit_to_f32(-4), 0.0);

    assert_eq!(flush_denormal(0.25), 0.25);
    assert_eq!(flush_denormal(-1e-19), -1e-19);
    assert_eq!(flush_denormal(1e-21), 0.0);
    assert_eq!(flush_denormal(-f32::MIN_POSITIVE), 0.0);
    assert_eq!(flush_denormal(1e-45), 0.0);
}
