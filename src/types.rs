//! Shared constants and small value types for the orrery.

use std::time::Duration;

use bevy::prelude::*;

use crate::error::ConfigError;

/// System sets ordering one animation frame inside `FixedUpdate`.
///
/// Camera input is polled before bodies advance, and commands are collected
/// after both.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum FrameSystemSet {
    /// Keyboard polling and camera translation
    Input,
    /// Orbital advance and draw-command emission
    Advance,
}

/// Degrees to radians conversion factor
pub const DEG_TO_RAD: f64 = std::f64::consts::PI / 180.0;

/// Degrees in one full turn.
pub const FULL_TURN_DEG: f64 = 360.0;

/// Number of samples along a closed 1° sweep (0..=360 inclusive).
pub const SWEEP_SAMPLES: usize = 361;

/// Wall-clock delay between two frames of the animation.
pub const FRAME_TICK: Duration = Duration::from_millis(30);

/// Linear RGB color with components in [0, 1].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    /// No emission.
    pub const BLACK: Rgb = Rgb { r: 0.0, g: 0.0, b: 0.0 };
    pub const WHITE: Rgb = Rgb { r: 1.0, g: 1.0, b: 1.0 };

    /// Create a color, rejecting components outside [0, 1].
    pub fn new(r: f32, g: f32, b: f32) -> Result<Self, ConfigError> {
        for component in [r, g, b] {
            if !(0.0..=1.0).contains(&component) {
                return Err(ConfigError::Color(component));
            }
        }
        Ok(Self { r, g, b })
    }

    /// True when every component is zero.
    pub fn is_black(&self) -> bool {
        self.r == 0.0 && self.g == 0.0 && self.b == 0.0
    }

    pub fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_accepts_unit_range() {
        let c = Rgb::new(0.0, 0.5, 1.0).unwrap();
        assert_eq!(c.to_array(), [0.0, 0.5, 1.0]);
        assert!(!c.is_black());
        assert!(Rgb::BLACK.is_black());
    }

    #[test]
    fn test_rgb_rejects_out_of_range() {
        assert!(matches!(Rgb::new(1.2, 0.0, 0.0), Err(ConfigError::Color(_))));
        assert!(matches!(Rgb::new(0.0, -0.1, 0.0), Err(ConfigError::Color(_))));
        assert!(Rgb::new(0.0, 0.0, f32::NAN).is_err());
    }

    #[test]
    fn test_degree_conversion() {
        assert!((90.0 * DEG_TO_RAD - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
    }
}
