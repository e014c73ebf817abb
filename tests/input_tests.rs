// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use input::*;

#[test]
fn pointer_starts_at_container_origin() {
    let p = PointerPosition::default();
    assert_eq!(p, PointerPosition { x: 0.0, y: 0.0 });
    assert_eq!(p.as_vec2(), glam::Vec2::ZERO);
}

#[test]
fn client_coordinates_become_container_relative() {
    let p = relative_to_rect(350.0, 420.0, 100.0, 120.0);
    assert_eq!(p, PointerPosition { x: 250.0, y: 300.0 });
}

#[test]
fn pointer_left_of_or_above_container_is_negative() {
    // The window-level tracker keeps reporting outside the container's box.
    let p = relative_to_rect(40.0, 10.0, 100.0, 120.0);
    assert_eq!(p.x, -60.0);
    assert_eq!(p.y, -110.0);
}

#[test]
fn fractional_rects_are_preserved() {
    let p = relative_to_rect(100.0, 100.0, 10.5, 0.25);
    assert!((p.x - 89.5).abs() < 1e-6);
    assert!((p.y - 99.75).abs() < 1e-6);
    assert_eq!(p.as_vec2(), glam::Vec2::new(p.x, p.y));
}
