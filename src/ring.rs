//! Flat planetary rings.

use std::sync::Arc;

use bevy::math::{Mat4, Vec2, Vec3};

use crate::draw::{DrawCommand, DrawSink, Drawable, Primitive, TextureId};
use crate::error::ConfigError;
use crate::types::{Rgb, DEG_TO_RAD, SWEEP_SAMPLES};

/// A single vertex of a ring quad strip.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StripVertex {
    pub position: Vec3,
    pub normal: Vec3,
    pub uv: Vec2,
}

/// An annulus lying in the local XZ plane of its parent body.
#[derive(Clone, Debug)]
pub struct Ring {
    y_offset: f32,
    inner_radius: f32,
    width: f32,
    /// Tilt about the local Z axis, degrees.
    tilt: f32,
    texture: TextureId,
    strip: Arc<[StripVertex]>,
}

impl Ring {
    pub fn new(
        y_offset: f32,
        inner_radius: f32,
        width: f32,
        tilt_deg: f32,
        texture: TextureId,
    ) -> Result<Self, ConfigError> {
        let valid = |v: f32| v.is_finite() && v > 0.0;
        if !valid(inner_radius) || !valid(width) {
            return Err(ConfigError::RingGeometry { inner_radius, width });
        }

        let strip = build_strip(y_offset, inner_radius, width).into();
        Ok(Self {
            y_offset,
            inner_radius,
            width,
            tilt: tilt_deg,
            texture,
            strip,
        })
    }

    pub fn y_offset(&self) -> f32 {
        self.y_offset
    }

    pub fn inner_radius(&self) -> f32 {
        self.inner_radius
    }

    pub fn outer_radius(&self) -> f32 {
        self.inner_radius + self.width
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn tilt(&self) -> f32 {
        self.tilt
    }

    pub fn texture(&self) -> TextureId {
        self.texture
    }

    /// Interleaved inner/outer vertices, two per degree over 0..=360.
    pub fn strip(&self) -> &Arc<[StripVertex]> {
        &self.strip
    }
}

impl Drawable for Ring {
    fn draw(&self, parent: Mat4, sink: &mut dyn DrawSink) {
        let transform = parent * Mat4::from_rotation_z(self.tilt * DEG_TO_RAD as f32);
        sink.submit(DrawCommand {
            source: "ring".to_string(),
            transform,
            primitive: Primitive::RingStrip(Arc::clone(&self.strip)),
            texture: Some(self.texture),
            emission: Rgb::BLACK,
        });
    }
}

/// Sweep the annulus at 1° resolution.
///
/// `u` follows the sweep angle; `v` maps the radial cosine into [0, 1] the
/// same way for both edges, so the texture reads across the ring width.
fn build_strip(y: f32, inner: f32, width: f32) -> Vec<StripVertex> {
    let outer = inner + width;
    let mut vertices = Vec::with_capacity(SWEEP_SAMPLES * 2);

    for step in 0..SWEEP_SAMPLES {
        let angle = step as f64 * DEG_TO_RAD;
        let x = angle.sin() as f32;
        let z = angle.cos() as f32;
        let u = step as f32 / 360.0;
        let normal = Vec3::new(x, y, z);

        for radius in [inner, outer] {
            vertices.push(StripVertex {
                position: Vec3::new(x * radius, y, z * radius),
                normal,
                uv: Vec2::new(u, (z * radius + 1.0) / 2.0),
            });
        }
    }

    vertices
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn saturn_ring() -> Ring {
        Ring::new(0.0, 1.0, 0.5, 26.7, TextureId(10)).unwrap()
    }

    #[test]
    fn test_strip_has_two_vertices_per_degree() {
        let ring = saturn_ring();
        assert_eq!(ring.strip().len(), 722);
    }

    #[test]
    fn test_strip_alternates_inner_and_outer_edges() {
        let ring = saturn_ring();
        for pair in ring.strip().chunks(2) {
            let inner = pair[0].position;
            let outer = pair[1].position;
            assert_relative_eq!(Vec2::new(inner.x, inner.z).length(), 1.0, epsilon = 1e-5);
            assert_relative_eq!(Vec2::new(outer.x, outer.z).length(), 1.5, epsilon = 1e-5);
            assert_eq!(inner.y, 0.0);
            assert_eq!(pair[0].normal, pair[1].normal);
        }
    }

    #[test]
    fn test_strip_texture_coordinates() {
        let ring = saturn_ring();
        let strip = ring.strip();

        // First column sits at angle 0: x = 0, z = 1.
        assert_relative_eq!(strip[0].uv.x, 0.0);
        assert_relative_eq!(strip[0].uv.y, 1.0);
        assert_relative_eq!(strip[1].uv.y, 1.25);

        // Last column closes the loop at u = 1.
        let last = strip[strip.len() - 1];
        assert_relative_eq!(last.uv.x, 1.0);
        assert_relative_eq!(last.position.x, strip[1].position.x, epsilon = 1e-5);
        assert_relative_eq!(last.position.z, strip[1].position.z, epsilon = 1e-5);
    }

    #[test]
    fn test_ring_rejects_degenerate_geometry() {
        assert!(Ring::new(0.0, 0.0, 0.5, 0.0, TextureId(0)).is_err());
        assert!(Ring::new(0.0, 1.0, 0.0, 0.0, TextureId(0)).is_err());
        assert!(Ring::new(0.0, 1.0, -0.5, 0.0, TextureId(0)).is_err());
    }

    #[test]
    fn test_draw_applies_tilt() {
        let ring = Ring::new(0.0, 1.0, 0.5, 90.0, TextureId(3)).unwrap();
        let mut sink: Vec<DrawCommand> = Vec::new();
        ring.draw(Mat4::from_translation(Vec3::new(5.0, 0.0, 0.0)), &mut sink);

        assert_eq!(sink.len(), 1);
        let cmd = &sink[0];
        assert_eq!(cmd.texture, Some(TextureId(3)));
        assert!(matches!(cmd.primitive, Primitive::RingStrip(_)));

        // 90° about Z sends local +X to +Y, offset by the parent translation.
        let p = cmd.transform.transform_point3(Vec3::X);
        assert_relative_eq!(p.x, 5.0, epsilon = 1e-5);
        assert_relative_eq!(p.y, 1.0, epsilon = 1e-5);
    }
}
