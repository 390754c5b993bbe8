//! Orrery - animated solar-system visualization
//!
//! A library crate providing the kinematic orbit model, the scene graph and
//! the Bevy plugins that animate and render it.

pub mod camera;
pub mod draw;
pub mod error;
pub mod orbit;
pub mod presets;
pub mod render;
pub mod ring;
pub mod scene;
pub mod star;
pub mod types;

#[cfg(test)]
pub mod test_utils;
