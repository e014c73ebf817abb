// Host-side tests for the drag-to-edit numeric control.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod drag {
        include!("../src/core/drag.rs");
    }
}

use crate::core::constants::*;
use crate::core::drag::*;
use std::cell::Cell;
use std::rc::Rc;

const SEP: ParamRange = ParamRange {
    label: "H-Sep",
    min: 0,
    max: 50,
    default: 20,
};

/// Stand-in for a listener set: counts how many are alive.
struct CountingGuard(Rc<Cell<i32>>);

impl CountingGuard {
    fn new(live: &Rc<Cell<i32>>) -> Self {
        live.set(live.get() + 1);
        Self(live.clone())
    }
}

impl Drop for CountingGuard {
    fn drop(&mut self) {
        self.0.set(self.0.get() - 1);
    }
}

#[test]
fn drag_past_max_clamps_to_max() {
    let mut control: NumericDragControl = NumericDragControl::with_value(SEP, SEP.default);
    assert_eq!(control.value(), 20);
    control.begin(100.0, ());
    // (300 - 100) * 0.5 = 100 -> round(100 / 100 * 50) = 50 -> 70 -> clamped
    assert_eq!(control.drag_to(300.0), Some(50));
    assert_eq!(control.value(), 50);
}

#[test]
fn small_drags_step_proportionally() {
    // +20px -> delta 10 -> +5
    assert_eq!(drag_value(20, 100.0, 120.0, 0, 50), 25);
    // -20px -> delta -10 -> -5
    assert_eq!(drag_value(20, 100.0, 80.0, 0, 50), 15);
    // narrower range moves slower: rows 1..=20, +40px -> delta 20 -> round(3.8) = 4
    assert_eq!(drag_value(10, 0.0, 40.0, 1, 20), 14);
}

#[test]
fn drag_far_left_clamps_to_min() {
    assert_eq!(drag_value(10, 500.0, -5000.0, 1, 20), 1);
    assert_eq!(drag_value(2, 0.0, -1e9, 1, 10), 1);
}

#[test]
fn drag_results_always_within_range() {
    let ranges = [(0, 50), (1, 50), (1, 10), (1, 20)];
    for (min, max) in ranges {
        for start in min..=max {
            let mut x = -2000.0;
            while x <= 2000.0 {
                let v = drag_value(start, 0.0, x, min, max);
                assert!((min..=max).contains(&v), "start={} x={} -> {}", start, x, v);
                x += 37.5;
            }
        }
    }
}

#[test]
fn dragging_right_never_decreases_and_left_never_increases() {
    for start in [0, 7, 20, 50] {
        let mut prev = drag_value(start, 0.0, -1500.0, 0, 50);
        let mut x = -1500.0;
        while x <= 1500.0 {
            let v = drag_value(start, 0.0, x, 0, 50);
            assert!(v >= prev, "start={} x={} went {} -> {}", start, x, prev, v);
            prev = v;
            x += 0.75;
        }
        assert!(drag_value(start, 0.0, 10.0, 0, 50) >= start);
        assert!(drag_value(start, 0.0, -10.0, 0, 50) <= start);
    }
}

#[test]
fn tracks_from_the_value_at_drag_start() {
    let mut control: NumericDragControl = NumericDragControl::with_value(SEP, SEP.default);
    control.begin(0.0, ());
    assert_eq!(control.drag_to(40.0), Some(30));
    assert_eq!(control.drag_to(20.0), Some(25));
    assert_eq!(control.drag_to(0.0), Some(20));
    assert_eq!(control.session().map(|s| s.start_value), Some(20));
    control.end();

    // The next drag starts from where the last one left the value.
    control.begin(0.0, ());
    assert_eq!(control.drag_to(60.0), Some(35));
    control.end();
    control.begin(0.0, ());
    assert_eq!(control.session().map(|s| s.start_value), Some(35));
    assert_eq!(control.drag_to(-20.0), Some(30));
}

#[test]
fn unchanged_value_is_not_reported() {
    let mut control: NumericDragControl = NumericDragControl::with_value(SEP, SEP.default);
    control.begin(100.0, ());
    // 0.25 scaled px -> 0.125 steps -> rounds to 0
    assert_eq!(control.drag_to(100.5), None);
    assert_eq!(control.drag_to(120.0), Some(25));
    assert_eq!(control.drag_to(120.0), None);
}

#[test]
fn moves_without_a_session_are_ignored() {
    let mut control: NumericDragControl = NumericDragControl::with_value(SEP, SEP.default);
    assert!(!control.is_dragging());
    assert_eq!(control.drag_to(900.0), None);
    assert_eq!(control.value(), 20);

    control.begin(0.0, ());
    assert!(control.end());
    assert!(!control.end());
    assert_eq!(control.drag_to(900.0), None);
}

#[test]
fn non_finite_pointer_keeps_start_value() {
    assert_eq!(drag_value(20, 0.0, f64::NAN, 0, 50), 20);
    assert_eq!(drag_value(20, 0.0, f64::INFINITY, 0, 50), 20);
}

#[test]
fn rounding_matches_host_half_up() {
    assert_eq!(round_half_up(0.5), 1.0);
    assert_eq!(round_half_up(-0.5), 0.0);
    assert_eq!(round_half_up(-2.5), -2.0);
    assert_eq!(round_half_up(2.4), 2.0);
    assert_eq!(round_half_up(-2.6), -3.0);
}

#[test]
fn initial_value_is_clamped_to_range() {
    let control: NumericDragControl = NumericDragControl::with_value(SEP, 80);
    assert_eq!(control.value(), 50);
    let control: NumericDragControl = NumericDragControl::with_value(SEP, -1);
    assert_eq!(control.value(), 0);
    assert_eq!(control.label(), "H-Sep");
}

#[test]
fn start_value_and_fraction_are_rounded_together() {
    // 29 scaled px over 0..=50 is 14.4999..., and 2 + 14.4999... lands on 16.5
    assert_eq!(drag_value(2, 0.0, 58.0, 0, 50), 17);
    for start in 0..=50 {
        let mut x = -300.0;
        while x <= 300.0 {
            let raw = f64::from(start) + x * 0.5 / 100.0 * 50.0;
            let expected = round_half_up(raw).clamp(0.0, 50.0) as i32;
            assert_eq!(drag_value(start, 0.0, x, 0, 50), expected, "start={} x={}", start, x);
            x += 1.0;
        }
    }
}

#[test]
fn ending_a_session_releases_its_guard() {
    let live = Rc::new(Cell::new(0));
    let mut control = NumericDragControl::with_value(SEP, SEP.default);

    control.begin(0.0, CountingGuard::new(&live));
    assert_eq!(live.get(), 1);
    assert!(control.is_dragging());

    control.end();
    assert_eq!(live.get(), 0);
    assert!(!control.is_dragging());
}

#[test]
fn repeated_drags_never_accumulate_guards() {
    let live = Rc::new(Cell::new(0));
    let mut control = NumericDragControl::with_value(SEP, SEP.default);

    for i in 0..10 {
        control.begin(f64::from(i), CountingGuard::new(&live));
        assert_eq!(live.get(), 1);
        control.drag_to(f64::from(i) + 30.0);
        control.end();
        assert_eq!(live.get(), 0);
    }
}

#[test]
fn restarting_a_drag_replaces_the_previous_session() {
    let live = Rc::new(Cell::new(0));
    let mut control = NumericDragControl::with_value(SEP, SEP.default);

    control.begin(0.0, CountingGuard::new(&live));
    control.begin(50.0, CountingGuard::new(&live));
    assert_eq!(live.get(), 1);
    assert_eq!(control.session().map(|s| s.start_x), Some(50.0));
}

#[test]
fn a_whole_listener_set_is_released_with_its_session() {
    let live = Rc::new(Cell::new(0));
    let mut control = NumericDragControl::with_value(SEP, SEP.default);

    for _ in 0..3 {
        // move + up for mouse and touch, as a drag session registers them
        let set: smallvec::SmallVec<[CountingGuard; 4]> =
            (0..4).map(|_| CountingGuard::new(&live)).collect();
        control.begin(0.0, set);
        assert_eq!(live.get(), 4);
        control.end();
        assert_eq!(live.get(), 0);
    }
}

#[test]
fn dropping_the_control_mid_drag_releases_its_guard() {
    let live = Rc::new(Cell::new(0));
    {
        let mut control = NumericDragControl::with_value(SEP, SEP.default);
        control.begin(0.0, CountingGuard::new(&live));
        assert_eq!(live.get(), 1);
    }
    assert_eq!(live.get(), 0);
}
