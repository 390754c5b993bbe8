//! Construction-time validation errors.

/// Rejected orbital or scene parameters.
///
/// All scene entities are built once at startup, so every variant is a
/// configuration mistake rather than a runtime condition.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("semi-major axis {0} must be positive and finite")]
    SemiMajorAxis(f64),

    #[error("eccentricity {0} outside [0, 1)")]
    Eccentricity(f64),

    #[error("orbital period {0} days must exceed one day")]
    Period(f64),

    #[error("perihelion {perihelion} must lie in (0, {semi_major_axis}]")]
    Perihelion { perihelion: f64, semi_major_axis: f64 },

    #[error("angle {0} must be finite")]
    Angle(f64),

    #[error("radius {0} must be positive and finite")]
    Radius(f64),

    #[error("ring needs positive inner radius and width (got radius {inner_radius}, width {width})")]
    RingGeometry { inner_radius: f32, width: f32 },

    #[error("color component {0} outside [0, 1]")]
    Color(f32),
}
