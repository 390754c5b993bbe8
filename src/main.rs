//! Orrery - animated solar-system visualization
//!
//! A desktop application showing the Sun, the eight planets, the Moon and
//! Saturn's ring on kinematic elliptical orbits. W/S/A/D/R/F move the camera.

use bevy::prelude::*;
use bevy::window::WindowResolution;

use orrery::camera::CameraPlugin;
use orrery::render::RenderPlugin;
use orrery::scene::ScenePlugin;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Orrery".to_string(),
                resolution: WindowResolution::new(1400, 800),
                ..default()
            }),
            ..default()
        }))
        // Scene first: it configures the fixed timestep and frame system sets
        .add_plugins((ScenePlugin, CameraPlugin, RenderPlugin))
        .run();
}
