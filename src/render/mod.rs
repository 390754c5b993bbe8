//! Bevy frontend consuming the scene's draw commands.
//!
//! The core emits [`crate::draw::DrawCommand`]s into
//! [`crate::scene::FrameCommands`] on every fixed tick. The systems here turn
//! those into mesh entities and gizmo line strips on every render frame.

pub mod bodies;
mod lighting;
mod orbits;
pub mod textures;

use bevy::prelude::*;

use self::bodies::SolidBodyPlugin;
use self::lighting::LightingPlugin;
use self::orbits::OrbitTracePlugin;
use self::textures::TexturePlugin;

pub use self::bodies::{SolidEntities, SolidSlot};
pub use self::lighting::LightSettings;
pub use self::orbits::OrbitTraceSettings;
pub use self::textures::TextureLibrary;

/// Plugin aggregating all rendering functionality.
pub struct RenderPlugin;

impl Plugin for RenderPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((
            TexturePlugin,
            SolidBodyPlugin,
            OrbitTracePlugin,
            LightingPlugin,
        ));
    }
}
