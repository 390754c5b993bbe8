//! The bundled solar system: Sun, eight planets, the Moon and Saturn's ring.
//!
//! Distances are in units of 10⁷ km, radii are scaled for visibility, and
//! periods are in days (one day per frame).

use crate::draw::TextureId;
use crate::error::ConfigError;
use crate::orbit::{OrbitElements, OrbitalBody};
use crate::ring::Ring;
use crate::scene::SceneGraph;
use crate::star::Star;
use crate::types::Rgb;

/// Textured surfaces used by the preset scene.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Surface {
    Sun,
    Mercury,
    Venus,
    Earth,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Moon,
    SaturnRing,
}

impl Surface {
    pub const ALL: &'static [Surface] = &[
        Surface::Sun,
        Surface::Mercury,
        Surface::Venus,
        Surface::Earth,
        Surface::Mars,
        Surface::Jupiter,
        Surface::Saturn,
        Surface::Uranus,
        Surface::Neptune,
        Surface::Moon,
        Surface::SaturnRing,
    ];

    pub fn texture_id(self) -> TextureId {
        TextureId(self as u32)
    }

    /// Image path relative to the asset root.
    pub fn asset_path(self) -> &'static str {
        match self {
            Surface::Sun => "images/sun.jpg",
            Surface::Mercury => "images/mercury.jpg",
            Surface::Venus => "images/venus.jpg",
            Surface::Earth => "images/earth.jpg",
            Surface::Mars => "images/mars.jpg",
            Surface::Jupiter => "images/jupiter.jpg",
            Surface::Saturn => "images/saturn.jpg",
            Surface::Uranus => "images/uranus.jpg",
            Surface::Neptune => "images/neptun2.jpg",
            Surface::Moon => "images/moon.jpg",
            Surface::SaturnRing => "images/ring.jpg",
        }
    }
}

/// Static description of a preset body.
#[derive(Clone, Copy, Debug)]
pub struct BodyPreset {
    pub name: &'static str,
    pub surface: Surface,
    pub elements: OrbitElements,
}

impl BodyPreset {
    pub fn build(&self) -> Result<OrbitalBody, ConfigError> {
        OrbitalBody::new(self.name, self.elements, self.surface.texture_id())
    }
}

const fn preset(
    name: &'static str,
    surface: Surface,
    semi_major_axis: f64,
    eccentricity: f64,
    radius: f64,
    period_days: f64,
    perihelion: f64,
    orbit_tilt: f64,
) -> BodyPreset {
    BodyPreset {
        name,
        surface,
        elements: OrbitElements {
            semi_major_axis,
            eccentricity,
            radius,
            period_days,
            initial_angle: 0.0,
            perihelion,
            orbit_tilt,
        },
    }
}

/// Planets in drawing order: a, e, radius, period, perihelion, orbit tilt.
pub const PLANETS: &[BodyPreset] = &[
    preset("Mercury", Surface::Mercury, 5.7, 0.2056, 0.12, 88.0, 4.6, 7.01),
    preset("Venus", Surface::Venus, 10.8, 0.0068, 0.30, 225.0, 10.7, 3.39),
    preset("Earth", Surface::Earth, 14.9, 0.0167, 0.315, 365.0, 14.7, 0.0),
    preset("Mars", Surface::Mars, 22.7, 0.0933, 0.165, 686.0, 20.6, 1.85),
    preset("Jupiter", Surface::Jupiter, 77.8, 0.0487, 0.69, 4322.0, 70.4, 1.31),
    preset("Saturn", Surface::Saturn, 142.9, 0.0557, 0.60, 10759.0, 135.3, 2.49),
    preset("Uranus", Surface::Uranus, 287.6, 0.0444, 0.5, 30685.0, 274.8, 0.77),
    preset("Neptune", Surface::Neptune, 450.3, 0.0112, 0.48, 60190.0, 445.2, 1.77),
];

pub const MOON: BodyPreset = preset(
    "Moon",
    Surface::Moon,
    0.384,
    0.0549,
    0.0637,
    27.0,
    0.363,
    5.145,
);

pub const SUN_RADIUS: f32 = 4.0;

/// Saturn's ring: y offset, inner radius, width, tilt.
pub const SATURN_RING: (f32, f32, f32, f32) = (0.0, 1.0, 0.5, 26.7);

/// Assemble the full preset scene.
pub fn solar_system() -> Result<SceneGraph, ConfigError> {
    let mut scene = SceneGraph::new();

    for planet in PLANETS {
        let mut body = planet.build()?;
        match planet.surface {
            Surface::Earth => body.add_satellite(MOON.build()?),
            Surface::Saturn => {
                let (y, radius, width, tilt) = SATURN_RING;
                body.add_ring(Ring::new(y, radius, width, tilt, Surface::SaturnRing.texture_id())?);
            }
            _ => {}
        }
        scene.add_body(body);
    }

    scene.add_main_star(Star::new(
        "Sun",
        SUN_RADIUS,
        Rgb::WHITE,
        Surface::Sun.texture_id(),
    )?);

    Ok(scene)
}
