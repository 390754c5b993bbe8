//! Scene lighting: a point light at the star plus a dim global ambient.

use bevy::prelude::*;

/// Parameters of the light emitted from the origin.
#[derive(Resource, Clone, Debug)]
pub struct LightSettings {
    /// Point light intensity in lumens.
    pub intensity: f32,
    /// Distance beyond which the light has no effect.
    pub range: f32,
    pub color: Color,
    /// Global ambient term keeping the night sides faintly visible.
    pub ambient: Color,
    pub ambient_brightness: f32,
    pub background: Color,
}

impl Default for LightSettings {
    fn default() -> Self {
        Self {
            intensity: 2.0e7,
            range: 1000.0,
            color: Color::WHITE,
            ambient: Color::srgb(0.2, 0.2, 0.2),
            ambient_brightness: 80.0,
            background: Color::BLACK,
        }
    }
}

/// Plugin spawning the star's light.
pub struct LightingPlugin;

impl Plugin for LightingPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<LightSettings>()
            .add_systems(Startup, spawn_lighting);
    }
}

fn spawn_lighting(mut commands: Commands, settings: Res<LightSettings>) {
    commands.insert_resource(ClearColor(settings.background));
    commands.insert_resource(GlobalAmbientLight {
        color: settings.ambient,
        brightness: settings.ambient_brightness,
        ..default()
    });

    commands.spawn((
        PointLight {
            intensity: settings.intensity,
            range: settings.range,
            color: settings.color,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_translation(Vec3::ZERO),
    ));

    info!("Scene lighting initialized");
}
