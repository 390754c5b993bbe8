//! Keyboard-driven camera for viewing the solar system.
//!
//! The camera looks down −Z from above the ecliptic and translates in fixed
//! steps along the world axes while a movement key is held.

use bevy::prelude::*;

use crate::types::FrameSystemSet;

/// Marker component for the main camera.
#[derive(Component)]
pub struct MainCamera;

/// A single per-frame camera translation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CameraMove {
    Up,
    Down,
    Right,
    Left,
    Forward,
    Back,
}

/// Key bindings in priority order. When several keys are held only the first
/// match moves the camera.
pub const KEY_BINDINGS: [(KeyCode, CameraMove); 6] = [
    (KeyCode::KeyW, CameraMove::Up),
    (KeyCode::KeyS, CameraMove::Down),
    (KeyCode::KeyD, CameraMove::Right),
    (KeyCode::KeyA, CameraMove::Left),
    (KeyCode::KeyR, CameraMove::Forward),
    (KeyCode::KeyF, CameraMove::Back),
];

impl CameraMove {
    /// Pick this frame's move from the currently held keys.
    pub fn from_pressed(pressed: impl Fn(KeyCode) -> bool) -> Option<CameraMove> {
        KEY_BINDINGS
            .iter()
            .find(|(key, _)| pressed(*key))
            .map(|&(_, mv)| mv)
    }

    /// World-space translation of the eye for this move.
    pub fn offset(self, settings: &CameraSettings) -> Vec3 {
        match self {
            CameraMove::Up => Vec3::Y * settings.vertical_step,
            CameraMove::Down => Vec3::NEG_Y * settings.vertical_step,
            CameraMove::Right => Vec3::X * settings.lateral_step,
            CameraMove::Left => Vec3::NEG_X * settings.lateral_step,
            CameraMove::Forward => Vec3::NEG_Z * settings.depth_step,
            CameraMove::Back => Vec3::Z * settings.depth_step,
        }
    }
}

/// Camera configuration.
#[derive(Resource, Clone, Debug)]
pub struct CameraSettings {
    /// Initial eye position.
    pub start_eye: Vec3,
    /// Step for W/S, per frame.
    pub vertical_step: f32,
    /// Step for A/D, per frame.
    pub lateral_step: f32,
    /// Step for R/F, per frame.
    pub depth_step: f32,
    /// Vertical field of view in degrees.
    pub fov_deg: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            start_eye: Vec3::new(0.0, 5.0, 30.5),
            vertical_step: 0.2,
            lateral_step: 0.2,
            depth_step: 0.4,
            fov_deg: 45.0,
            near: 0.1,
            far: 1000.0,
        }
    }
}

/// Resource tracking the eye position.
#[derive(Resource, Clone, Debug)]
pub struct CameraRig {
    pub eye: Vec3,
}

impl CameraRig {
    pub fn new(settings: &CameraSettings) -> Self {
        Self {
            eye: settings.start_eye,
        }
    }

    pub fn apply(&mut self, mv: CameraMove, settings: &CameraSettings) {
        self.eye += mv.offset(settings);
    }
}

impl FromWorld for CameraRig {
    fn from_world(world: &mut World) -> Self {
        let settings = world.get_resource::<CameraSettings>().cloned().unwrap_or_default();
        Self::new(&settings)
    }
}

/// Plugin providing camera functionality.
pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CameraSettings>()
            .init_resource::<CameraRig>()
            .add_systems(Startup, setup_camera)
            .add_systems(FixedUpdate, move_camera.in_set(FrameSystemSet::Input));
    }
}

/// Spawn the main camera with a perspective projection.
fn setup_camera(mut commands: Commands, settings: Res<CameraSettings>, rig: Res<CameraRig>) {
    commands.spawn((
        Camera3d::default(),
        Projection::from(PerspectiveProjection {
            fov: settings.fov_deg.to_radians(),
            near: settings.near,
            far: settings.far,
            ..default()
        }),
        Transform::from_translation(rig.eye),
        MainCamera,
    ));
}

/// Poll movement keys once per frame and translate the camera.
pub fn move_camera(
    keys: Res<ButtonInput<KeyCode>>,
    settings: Res<CameraSettings>,
    mut rig: ResMut<CameraRig>,
    mut camera_query: Query<&mut Transform, With<MainCamera>>,
) {
    let Some(mv) = CameraMove::from_pressed(|key| keys.pressed(key)) else {
        return;
    };

    rig.apply(mv, &settings);
    debug!("Camera {:?} -> {}", mv, rig.eye);

    let Ok(mut transform) = camera_query.single_mut() else {
        return;
    };
    transform.translation = rig.eye;
}
