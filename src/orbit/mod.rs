//! Kinematic elliptical orbits.
//!
//! Bodies move along fixed ellipses at a constant angular rate per frame.
//! Positions follow the Kepler-focus convention: the ellipse is shifted by the
//! focal displacement so the central star sits at the origin of the orbit frame.

use std::sync::Arc;

use bevy::math::{DVec3, Mat4, Vec3};

use crate::draw::{DrawCommand, DrawSink, Drawable, Primitive, TextureId};
use crate::error::ConfigError;
use crate::ring::Ring;
use crate::types::{Rgb, DEG_TO_RAD, FULL_TURN_DEG, SWEEP_SAMPLES};

/// Sphere tessellation for orbiting bodies.
pub const BODY_SEGMENTS: u32 = 20;

/// Axial tilt applied to every body before its spin, degrees about local X.
pub const AXIAL_TILT_DEG: f32 = 90.0;

/// Self-rotation counter value at which the spin cycle restarts.
const SPIN_RESET: u32 = 360;

/// Orbital elements for a kinematic body.
///
/// Distances share whatever unit the scene uses; angles are degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitElements {
    /// Semi-major axis
    pub semi_major_axis: f64,
    /// Eccentricity (0 ≤ e < 1)
    pub eccentricity: f64,
    /// Radius of the body's sphere
    pub radius: f64,
    /// Orbital period in days; one day elapses per frame
    pub period_days: f64,
    /// Starting angle along the orbit, degrees
    pub initial_angle: f64,
    /// Closest approach to the focus
    pub perihelion: f64,
    /// Tilt of the orbital plane about the Z axis, degrees
    pub orbit_tilt: f64,
}

impl OrbitElements {
    fn validate(&self) -> Result<(), ConfigError> {
        let a = self.semi_major_axis;
        if !(a.is_finite() && a > 0.0) {
            return Err(ConfigError::SemiMajorAxis(a));
        }
        if !(0.0..1.0).contains(&self.eccentricity) {
            return Err(ConfigError::Eccentricity(self.eccentricity));
        }
        if !(self.radius.is_finite() && self.radius > 0.0) {
            return Err(ConfigError::Radius(self.radius));
        }
        // The one-step wrap in `advance` needs less than a full turn per frame.
        if !(self.period_days.is_finite() && self.period_days > 1.0) {
            return Err(ConfigError::Period(self.period_days));
        }
        for angle in [self.initial_angle, self.orbit_tilt] {
            if !angle.is_finite() {
                return Err(ConfigError::Angle(angle));
            }
        }
        if !(self.perihelion > 0.0 && self.perihelion <= a) {
            return Err(ConfigError::Perihelion {
                perihelion: self.perihelion,
                semi_major_axis: a,
            });
        }
        Ok(())
    }
}

/// A textured sphere on a fixed ellipse, optionally carrying satellites and rings.
#[derive(Clone, Debug)]
pub struct OrbitalBody {
    name: String,
    a: f64,
    b: f64,
    radius: f64,
    /// Degrees per frame
    angle_velocity: f64,
    /// Degrees, [0, 360)
    current_angle: f64,
    /// Spin counter, cycles 0..=360
    self_rotation: u32,
    /// Center-to-focus offset, `a - perihelion`
    displacement: f64,
    orbit_tilt: f64,
    texture: TextureId,
    trace: Arc<[Vec3]>,
    satellites: Vec<OrbitalBody>,
    rings: Vec<Ring>,
}

impl OrbitalBody {
    pub fn new(
        name: impl Into<String>,
        elements: OrbitElements,
        texture: TextureId,
    ) -> Result<Self, ConfigError> {
        elements.validate()?;

        let a = elements.semi_major_axis;
        let e = elements.eccentricity;
        let b = a * (1.0 - e * e).sqrt();
        let displacement = a - elements.perihelion;
        let trace = OrbitPath::new(a, b, displacement)
            .map(|p| p.as_vec3())
            .collect();

        Ok(Self {
            name: name.into(),
            a,
            b,
            radius: elements.radius,
            angle_velocity: FULL_TURN_DEG / elements.period_days,
            current_angle: normalize_angle(elements.initial_angle),
            self_rotation: 0,
            displacement,
            orbit_tilt: elements.orbit_tilt,
            texture,
            trace,
            satellites: Vec::new(),
            rings: Vec::new(),
        })
    }

    /// Step one frame: move along the orbit, spin once, and advance satellites.
    pub fn advance(&mut self) {
        let next = self.current_angle + self.angle_velocity;
        self.current_angle = if next >= FULL_TURN_DEG {
            next - FULL_TURN_DEG
        } else {
            next
        };

        // The counter shows 360 for one frame before restarting at 0.
        self.self_rotation = if self.self_rotation == SPIN_RESET {
            0
        } else {
            self.self_rotation + 1
        };

        for satellite in &mut self.satellites {
            satellite.advance();
        }
    }

    /// Position in the orbit frame at the current angle.
    pub fn position(&self) -> DVec3 {
        self.position_at(self.current_angle)
    }

    /// Position in the orbit frame at an arbitrary angle in degrees.
    pub fn position_at(&self, angle_deg: f64) -> DVec3 {
        ellipse_point(self.a, self.b, self.displacement, angle_deg)
    }

    /// The full orbit ellipse, 361 points at 1° steps.
    pub fn orbit_path(&self) -> OrbitPath {
        OrbitPath::new(self.a, self.b, self.displacement)
    }

    pub fn add_satellite(&mut self, body: OrbitalBody) {
        self.satellites.push(body);
    }

    pub fn add_ring(&mut self, ring: Ring) {
        self.rings.push(ring);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn semi_major_axis(&self) -> f64 {
        self.a
    }

    pub fn semi_minor_axis(&self) -> f64 {
        self.b
    }

    pub fn displacement(&self) -> f64 {
        self.displacement
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn angle_velocity(&self) -> f64 {
        self.angle_velocity
    }

    pub fn current_angle(&self) -> f64 {
        self.current_angle
    }

    pub fn self_rotation(&self) -> u32 {
        self.self_rotation
    }

    pub fn orbit_tilt(&self) -> f64 {
        self.orbit_tilt
    }

    pub fn texture(&self) -> TextureId {
        self.texture
    }

    pub fn satellites(&self) -> &[OrbitalBody] {
        &self.satellites
    }

    pub fn rings(&self) -> &[Ring] {
        &self.rings
    }

    /// Frame of the tilted orbital plane.
    fn orbit_frame(&self, parent: Mat4) -> Mat4 {
        parent * Mat4::from_rotation_z((self.orbit_tilt * DEG_TO_RAD) as f32)
    }
}

impl Drawable for OrbitalBody {
    /// Emits, in order: orbit trace, satellites, rings, then the body sphere.
    ///
    /// Satellites and rings inherit the body's translated frame before the
    /// axial tilt and spin are applied, so they follow the body's position
    /// without turning with it.
    fn draw(&self, parent: Mat4, sink: &mut dyn DrawSink) {
        let orbit_frame = self.orbit_frame(parent);
        sink.submit(DrawCommand {
            source: self.name.clone(),
            transform: orbit_frame,
            primitive: Primitive::OrbitTrace(Arc::clone(&self.trace)),
            texture: None,
            emission: Rgb::BLACK,
        });

        let body_frame = orbit_frame * Mat4::from_translation(self.position().as_vec3());
        for satellite in &self.satellites {
            satellite.draw(body_frame, sink);
        }
        for ring in &self.rings {
            ring.draw(body_frame, sink);
        }

        let spin_frame = body_frame
            * Mat4::from_rotation_x(AXIAL_TILT_DEG * DEG_TO_RAD as f32)
            * Mat4::from_rotation_z((self.self_rotation as f64 * DEG_TO_RAD) as f32);
        sink.submit(DrawCommand {
            source: self.name.clone(),
            transform: spin_frame,
            primitive: Primitive::Sphere {
                radius: self.radius as f32,
                segments: BODY_SEGMENTS,
            },
            texture: Some(self.texture),
            emission: Rgb::BLACK,
        });
    }
}

/// Map any angle into [0, 360). `rem_euclid` can round tiny negatives up to 360.
fn normalize_angle(angle_deg: f64) -> f64 {
    let angle = angle_deg.rem_euclid(FULL_TURN_DEG);
    if angle >= FULL_TURN_DEG { 0.0 } else { angle }
}

fn ellipse_point(a: f64, b: f64, displacement: f64, angle_deg: f64) -> DVec3 {
    let theta = angle_deg * DEG_TO_RAD;
    DVec3::new(a * theta.sin() - displacement, 0.0, b * theta.cos())
}

/// Lazy sweep of an orbit ellipse from 0° to 360° inclusive at 1° steps.
///
/// Every call to [`OrbitalBody::orbit_path`] starts a fresh sweep.
#[derive(Clone, Debug)]
pub struct OrbitPath {
    a: f64,
    b: f64,
    displacement: f64,
    step: usize,
}

impl OrbitPath {
    fn new(a: f64, b: f64, displacement: f64) -> Self {
        Self {
            a,
            b,
            displacement,
            step: 0,
        }
    }
}

impl Iterator for OrbitPath {
    type Item = DVec3;

    fn next(&mut self) -> Option<Self::Item> {
        if self.step >= SWEEP_SAMPLES {
            return None;
        }
        let point = ellipse_point(self.a, self.b, self.displacement, self.step as f64);
        self.step += 1;
        Some(point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = SWEEP_SAMPLES.saturating_sub(self.step);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for OrbitPath {}

#[cfg(test)]
mod proptest_orbit;
