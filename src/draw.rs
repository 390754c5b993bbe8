//! Draw-command descriptors emitted by the scene traversal.
//!
//! The scene never touches rendering state. Each frame it produces a flat,
//! ordered list of [`DrawCommand`]s (world transform + geometry + texture
//! reference) that a renderer consumes.

use std::sync::Arc;

use bevy::math::{Mat4, Vec3};

use crate::ring::StripVertex;
use crate::types::Rgb;

/// Opaque texture identifier. Resolving it to image data is the renderer's job.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TextureId(pub u32);

/// Geometry carried by a draw command, expressed in the command's local frame.
#[derive(Clone, Debug, PartialEq)]
pub enum Primitive {
    /// UV sphere centered on the local origin.
    Sphere { radius: f32, segments: u32 },
    /// Closed line strip tracing an orbit.
    OrbitTrace(Arc<[Vec3]>),
    /// Quad strip of interleaved inner/outer ring vertices.
    RingStrip(Arc<[StripVertex]>),
}

/// One unit of work for the renderer.
#[derive(Clone, Debug, PartialEq)]
pub struct DrawCommand {
    /// Name of the scene entity that emitted this command.
    pub source: String,
    /// Local-to-world transform.
    pub transform: Mat4,
    pub primitive: Primitive,
    pub texture: Option<TextureId>,
    /// Emissive material color; black for lit surfaces.
    pub emission: Rgb,
}

impl DrawCommand {
    /// Whether this command is a mesh (sphere or ring) rather than a line trace.
    pub fn is_solid(&self) -> bool {
        !matches!(self.primitive, Primitive::OrbitTrace(_))
    }

    /// World-space position of the command's local origin.
    pub fn origin(&self) -> Vec3 {
        self.transform.transform_point3(Vec3::ZERO)
    }
}

/// Receiver of draw commands.
pub trait DrawSink {
    fn submit(&mut self, command: DrawCommand);
}

impl DrawSink for Vec<DrawCommand> {
    fn submit(&mut self, command: DrawCommand) {
        self.push(command);
    }
}

/// Anything the scene graph can draw relative to a parent frame.
pub trait Drawable {
    fn draw(&self, parent: Mat4, sink: &mut dyn DrawSink);
}
