//! Common test utilities for integration tests.

use orrery::draw::{DrawCommand, Primitive, TextureId};
use orrery::orbit::{OrbitElements, OrbitalBody};

/// Build a body on an orbit with the given elements and a placeholder texture.
pub fn body(name: &str, a: f64, e: f64, period_days: f64, perihelion: f64) -> OrbitalBody {
    let elements = OrbitElements {
        semi_major_axis: a,
        eccentricity: e,
        radius: 0.2,
        period_days,
        initial_angle: 0.0,
        perihelion,
        orbit_tilt: 0.0,
    };
    OrbitalBody::new(name, elements, TextureId(0)).expect("valid test elements")
}

/// Sources of sphere commands, in emission order.
pub fn sphere_sources(commands: &[DrawCommand]) -> Vec<&str> {
    commands
        .iter()
        .filter(|c| matches!(c.primitive, Primitive::Sphere { .. }))
        .map(|c| c.source.as_str())
        .collect()
}

/// The world-space origin of the sphere emitted by `name`.
pub fn sphere_origin(commands: &[DrawCommand], name: &str) -> Option<bevy::math::Vec3> {
    commands
        .iter()
        .find(|c| c.source == name && matches!(c.primitive, Primitive::Sphere { .. }))
        .map(|c| c.origin())
}
