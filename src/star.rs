//! The central light-emitting star.

use bevy::math::Mat4;

use crate::draw::{DrawCommand, DrawSink, Drawable, Primitive, TextureId};
use crate::error::ConfigError;
use crate::types::Rgb;

/// Sphere tessellation for the star.
pub const STAR_SEGMENTS: u32 = 30;

/// A stationary, emissive sphere at the origin of its parent frame.
#[derive(Clone, Debug)]
pub struct Star {
    name: String,
    radius: f32,
    emission: Rgb,
    texture: TextureId,
}

impl Star {
    pub fn new(
        name: impl Into<String>,
        radius: f32,
        emission: Rgb,
        texture: TextureId,
    ) -> Result<Self, ConfigError> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(ConfigError::Radius(radius as f64));
        }
        // Rgb fields are public, so literals skip `Rgb::new`.
        let emission = Rgb::new(emission.r, emission.g, emission.b)?;
        Ok(Self {
            name: name.into(),
            radius,
            emission,
            texture,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn emission(&self) -> Rgb {
        self.emission
    }

    pub fn texture(&self) -> TextureId {
        self.texture
    }
}

impl Drawable for Star {
    fn draw(&self, parent: Mat4, sink: &mut dyn DrawSink) {
        sink.submit(DrawCommand {
            source: self.name.clone(),
            transform: parent,
            primitive: Primitive::Sphere {
                radius: self.radius,
                segments: STAR_SEGMENTS,
            },
            texture: Some(self.texture),
            emission: self.emission,
        });
    }
}
