//! Test fixtures for orbit and scene tests.
//!
//! Element values mirror the preset solar system so tests exercise the same
//! shapes the application renders.

/// Fixtures for creating test bodies and stars.
pub mod fixtures {
    use crate::draw::TextureId;
    use crate::orbit::{OrbitElements, OrbitalBody};
    use crate::star::Star;
    use crate::types::Rgb;

    /// Earth's elements: a = 14.9, e = 0.0167, 365 days, perihelion 14.7.
    pub fn earth_elements() -> OrbitElements {
        OrbitElements {
            semi_major_axis: 14.9,
            eccentricity: 0.0167,
            radius: 0.315,
            period_days: 365.0,
            initial_angle: 0.0,
            perihelion: 14.7,
            orbit_tilt: 0.0,
        }
    }

    pub fn earth() -> OrbitalBody {
        OrbitalBody::new("Earth", earth_elements(), TextureId(3)).unwrap()
    }

    pub fn mars() -> OrbitalBody {
        let elements = OrbitElements {
            semi_major_axis: 22.7,
            eccentricity: 0.0933,
            radius: 0.165,
            period_days: 686.0,
            initial_angle: 0.0,
            perihelion: 20.6,
            orbit_tilt: 1.85,
        };
        OrbitalBody::new("Mars", elements, TextureId(4)).unwrap()
    }

    pub fn moon() -> OrbitalBody {
        let elements = OrbitElements {
            semi_major_axis: 0.384,
            eccentricity: 0.0549,
            radius: 0.0637,
            period_days: 27.0,
            initial_angle: 0.0,
            perihelion: 0.363,
            orbit_tilt: 5.145,
        };
        OrbitalBody::new("Moon", elements, TextureId(9)).unwrap()
    }

    /// A circular orbit of radius `a` centered on the focus.
    pub fn circular(a: f64) -> OrbitalBody {
        named("Circle", a)
    }

    /// A circular body with the given name and radius.
    pub fn named(name: &str, a: f64) -> OrbitalBody {
        let elements = OrbitElements {
            semi_major_axis: a,
            eccentricity: 0.0,
            radius: 0.1,
            period_days: 100.0,
            initial_angle: 0.0,
            perihelion: a,
            orbit_tilt: 0.0,
        };
        OrbitalBody::new(name, elements, TextureId(0)).unwrap()
    }

    /// Earth-shaped orbit with a custom period, for wrap tests.
    pub fn with_period(period_days: f64) -> OrbitalBody {
        let elements = OrbitElements {
            period_days,
            ..earth_elements()
        };
        OrbitalBody::new("Fast", elements, TextureId(0)).unwrap()
    }

    pub fn sun() -> Star {
        star("Sun")
    }

    pub fn star(name: &str) -> Star {
        Star::new(name, 4.0, Rgb::WHITE, TextureId(0)).unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures;

    #[test]
    fn test_fixtures_are_circular_where_expected() {
        let body = fixtures::circular(3.0);
        assert_eq!(body.displacement(), 0.0);
        assert_eq!(body.semi_minor_axis(), 3.0);
    }
}
