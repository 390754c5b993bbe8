//! Scene graph aggregating the star and top-level bodies, and the frame step.
//!
//! Each fixed tick the whole system advances in lockstep and the resulting
//! draw commands replace the previous frame's list in [`FrameCommands`].

use std::time::Duration;

use bevy::prelude::*;

use crate::draw::{DrawCommand, DrawSink, Drawable};
use crate::orbit::OrbitalBody;
use crate::presets;
use crate::star::Star;
use crate::types::{FrameSystemSet, FRAME_TICK};

/// The star and all bodies orbiting it.
#[derive(Resource, Clone, Debug, Default)]
pub struct SceneGraph {
    star: Option<Star>,
    bodies: Vec<OrbitalBody>,
}

impl SceneGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the central star, replacing any previous one.
    pub fn add_main_star(&mut self, star: Star) {
        self.star = Some(star);
    }

    pub fn add_body(&mut self, body: OrbitalBody) {
        self.bodies.push(body);
    }

    pub fn star(&self) -> Option<&Star> {
        self.star.as_ref()
    }

    pub fn bodies(&self) -> &[OrbitalBody] {
        &self.bodies
    }

    /// Find a top-level body or satellite by name.
    pub fn body(&self, name: &str) -> Option<&OrbitalBody> {
        fn search<'a>(bodies: &'a [OrbitalBody], name: &str) -> Option<&'a OrbitalBody> {
            bodies.iter().find_map(|body| {
                if body.name() == name {
                    Some(body)
                } else {
                    search(body.satellites(), name)
                }
            })
        }
        search(&self.bodies, name)
    }

    /// Number of bodies including satellites.
    pub fn body_count(&self) -> usize {
        fn count(bodies: &[OrbitalBody]) -> usize {
            bodies.iter().map(|b| 1 + count(b.satellites())).sum()
        }
        count(&self.bodies)
    }

    /// Advance every body one frame without drawing.
    pub fn advance(&mut self) {
        for body in &mut self.bodies {
            body.advance();
        }
    }

    /// Draw the current state without advancing.
    pub fn draw(&self, sink: &mut dyn DrawSink) {
        for body in &self.bodies {
            body.draw(Mat4::IDENTITY, sink);
        }
        if let Some(star) = &self.star {
            star.draw(Mat4::IDENTITY, sink);
        }
    }

    /// One frame: each body advances then draws, in insertion order; the star draws last.
    pub fn advance_and_draw(&mut self, sink: &mut dyn DrawSink) {
        for body in &mut self.bodies {
            body.advance();
            body.draw(Mat4::IDENTITY, sink);
        }
        if let Some(star) = &self.star {
            star.draw(Mat4::IDENTITY, sink);
        }
    }
}

/// Draw commands produced by the most recent frame.
#[derive(Resource, Clone, Debug, Default)]
pub struct FrameCommands {
    pub commands: Vec<DrawCommand>,
    /// Frames stepped since startup.
    pub frame: u64,
}

impl FrameCommands {
    /// Mesh commands (spheres and rings) in emission order.
    pub fn solids(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands.iter().filter(|c| c.is_solid())
    }

    /// Orbit-trace commands in emission order.
    pub fn traces(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands.iter().filter(|c| !c.is_solid())
    }
}

impl DrawSink for FrameCommands {
    fn submit(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }
}

/// Frame pacing.
#[derive(Resource, Clone, Debug)]
pub struct FrameSettings {
    /// Fixed delay between frames. Orbital motion is per frame, so this also
    /// sets the animation speed.
    pub tick: Duration,
}

impl Default for FrameSettings {
    fn default() -> Self {
        Self { tick: FRAME_TICK }
    }
}

/// Plugin building the solar system and stepping it every fixed tick.
pub struct ScenePlugin;

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        let settings = app
            .world()
            .get_resource::<FrameSettings>()
            .cloned()
            .unwrap_or_default();

        app.insert_resource(Time::<Fixed>::from_duration(settings.tick))
            .insert_resource(settings)
            .init_resource::<FrameCommands>()
            .configure_sets(
                FixedUpdate,
                FrameSystemSet::Advance.after(FrameSystemSet::Input),
            )
            .add_systems(Startup, build_scene)
            .add_systems(FixedUpdate, step_scene.in_set(FrameSystemSet::Advance));
    }
}

/// Build the preset solar system. Invalid parameters abort startup.
fn build_scene(mut commands: Commands) -> Result {
    let scene = presets::solar_system()?;
    info!(
        "Built solar system: {} bodies around {}",
        scene.body_count(),
        scene.star().map_or("no star", |s| s.name())
    );
    commands.insert_resource(scene);
    Ok(())
}

/// Advance all bodies one step and collect this frame's draw commands.
pub fn step_scene(scene: Option<ResMut<SceneGraph>>, mut frame: ResMut<FrameCommands>) {
    let Some(mut scene) = scene else {
        return;
    };

    frame.commands.clear();
    scene.advance_and_draw(&mut *frame);
    frame.frame += 1;
}
