//! Orbit trace rendering using Bevy Gizmos.
//!
//! Each trace command carries the closed 1° ellipse in its orbit frame; the
//! points are moved to world space with the command transform and drawn as a
//! line strip every render frame.

use bevy::prelude::*;

use crate::draw::Primitive;
use crate::scene::FrameCommands;

/// Plugin providing orbit trace visualization.
pub struct OrbitTracePlugin;

impl Plugin for OrbitTracePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<OrbitTraceSettings>()
            .add_systems(Update, draw_orbit_traces);
    }
}

/// Settings for orbit trace rendering.
#[derive(Resource)]
pub struct OrbitTraceSettings {
    /// Whether to show orbit traces.
    pub visible: bool,
    pub color: Color,
}

impl Default for OrbitTraceSettings {
    fn default() -> Self {
        Self {
            visible: true,
            color: Color::WHITE,
        }
    }
}

fn draw_orbit_traces(
    mut gizmos: Gizmos,
    settings: Res<OrbitTraceSettings>,
    frame: Res<FrameCommands>,
) {
    if !settings.visible {
        return;
    }

    for cmd in frame.traces() {
        let Primitive::OrbitTrace(points) = &cmd.primitive else {
            continue;
        };
        let transform = cmd.transform;
        gizmos.linestrip(
            points.iter().map(|p| transform.transform_point3(*p)),
            settings.color,
        );
    }
}
