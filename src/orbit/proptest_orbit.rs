//! Property-based tests for kinematic orbits using proptest.
//!
//! These tests verify the wrap and shape invariants across a wide range of
//! orbital elements.

use proptest::prelude::*;

use super::{OrbitElements, OrbitalBody};
use crate::draw::TextureId;

fn body(a: f64, e: f64, period_days: f64, initial_angle: f64, perihelion_frac: f64) -> OrbitalBody {
    let elements = OrbitElements {
        semi_major_axis: a,
        eccentricity: e,
        radius: 0.1,
        period_days,
        initial_angle,
        perihelion: a * perihelion_frac,
        orbit_tilt: 0.0,
    };
    OrbitalBody::new("prop", elements, TextureId(0)).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// The current angle never leaves [0, 360), however many frames pass.
    #[test]
    fn prop_angle_stays_in_range(
        period in 1.001f64..100_000.0,
        initial in -720.0f64..720.0,
        frames in 1usize..2_000,
    ) {
        let mut b = body(10.0, 0.1, period, initial, 0.9);
        prop_assert!((0.0..360.0).contains(&b.current_angle()));
        for _ in 0..frames {
            b.advance();
            let angle = b.current_angle();
            prop_assert!(
                (0.0..360.0).contains(&angle),
                "angle {} out of range (period {})",
                angle, period
            );
        }
    }

    /// A circular orbit has equal semi-axes for every size.
    #[test]
    fn prop_circular_semi_axes_equal(a in 0.001f64..10_000.0) {
        let b = body(a, 0.0, 100.0, 0.0, 1.0);
        prop_assert_eq!(b.semi_minor_axis(), a);
    }

    /// The orbit path is a closed loop of 361 points on the body's ellipse.
    #[test]
    fn prop_orbit_path_closed(
        a in 0.1f64..500.0,
        e in 0.0f64..0.95,
        perihelion_frac in 0.05f64..1.0,
    ) {
        let b = body(a, e, 100.0, 0.0, perihelion_frac);
        let points: Vec<_> = b.orbit_path().collect();
        prop_assert_eq!(points.len(), 361);

        let closure = (points[0] - points[360]).length();
        prop_assert!(closure < 1e-9 * a.max(1.0), "gap {}", closure);

        let d = b.displacement();
        for p in &points {
            let x = (p.x + d) / a;
            let z = p.z / b.semi_minor_axis();
            prop_assert!((x * x + z * z - 1.0).abs() < 1e-9);
            prop_assert_eq!(p.y, 0.0);
        }
    }

    /// The spin counter cycles with period 361 and never exceeds 360.
    #[test]
    fn prop_self_rotation_cycle(frames in 0usize..2_000) {
        let mut b = body(10.0, 0.0, 100.0, 0.0, 1.0);
        for _ in 0..frames {
            b.advance();
            prop_assert!(b.self_rotation() <= 360);
        }
        prop_assert_eq!(b.self_rotation() as usize, frames % 361);
    }

    /// The current position always lies on the drawn orbit ellipse.
    #[test]
    fn prop_position_on_orbit(
        e in 0.0f64..0.9,
        period in 2.0f64..1_000.0,
        frames in 0usize..500,
    ) {
        let mut b = body(25.0, e, period, 0.0, 0.95);
        for _ in 0..frames {
            b.advance();
        }
        let p = b.position();
        let x = (p.x + b.displacement()) / b.semi_major_axis();
        let z = p.z / b.semi_minor_axis();
        prop_assert!((x * x + z * z - 1.0).abs() < 1e-9);
    }
}
