//! Mesh entities for spheres and rings.
//!
//! The scene traversal order is identical every frame, so the n-th solid draw
//! command always describes the same object. Entities are spawned the first
//! time a slot appears and only have their transforms updated afterwards.
//! Nothing is spawned until the [`TextureLibrary`] is ready, so every
//! material is created with its image.

use bevy::asset::RenderAssetUsages;
use bevy::mesh::PrimitiveTopology;
use bevy::prelude::*;

use crate::draw::{DrawCommand, Primitive};
use crate::render::textures::TextureLibrary;
use crate::ring::StripVertex;
use crate::scene::FrameCommands;

/// Component tagging an entity with its solid draw-command slot.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolidSlot(pub usize);

/// Entities spawned for each solid slot, in slot order.
#[derive(Resource, Default, Debug)]
pub struct SolidEntities(pub Vec<Entity>);

/// Plugin mirroring solid draw commands onto mesh entities.
pub struct SolidBodyPlugin;

impl Plugin for SolidBodyPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SolidEntities>()
            .add_systems(Update, sync_solids);
    }
}

/// Spawn or move one entity per solid command of the latest frame.
pub fn sync_solids(
    mut commands: Commands,
    frame: Res<FrameCommands>,
    textures: Res<TextureLibrary>,
    mut slots: ResMut<SolidEntities>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut transforms: Query<&mut Transform, With<SolidSlot>>,
) {
    if !textures.ready || !frame.is_changed() {
        return;
    }

    let spawned_before = slots.0.len();
    for (index, cmd) in frame.solids().enumerate() {
        let transform = Transform::from_matrix(cmd.transform);

        if let Some(&entity) = slots.0.get(index) {
            if let Ok(mut current) = transforms.get_mut(entity) {
                *current = transform;
            }
            continue;
        }

        let Some(mesh) = solid_mesh(&cmd.primitive) else {
            continue;
        };
        let entity = commands
            .spawn((
                Mesh3d(meshes.add(mesh)),
                MeshMaterial3d(materials.add(surface_material(cmd, &textures))),
                transform,
                SolidSlot(index),
                Name::new(cmd.source.clone()),
            ))
            .id();
        slots.0.push(entity);
    }

    if slots.0.len() > spawned_before {
        info!("Spawned {} scene meshes", slots.0.len() - spawned_before);
    }
}

fn solid_mesh(primitive: &Primitive) -> Option<Mesh> {
    match primitive {
        Primitive::Sphere { radius, segments } => {
            Some(Sphere::new(*radius).mesh().uv(*segments, *segments))
        }
        Primitive::RingStrip(strip) => Some(ring_mesh(strip)),
        Primitive::OrbitTrace(_) => None,
    }
}

/// Triangle strip over the interleaved inner/outer ring vertices.
pub fn ring_mesh(strip: &[StripVertex]) -> Mesh {
    let positions: Vec<[f32; 3]> = strip.iter().map(|v| v.position.to_array()).collect();
    let normals: Vec<[f32; 3]> = strip
        .iter()
        .map(|v| v.normal.normalize_or(Vec3::Y).to_array())
        .collect();
    let uvs: Vec<[f32; 2]> = strip.iter().map(|v| v.uv.to_array()).collect();

    Mesh::new(PrimitiveTopology::TriangleStrip, RenderAssetUsages::default())
        .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, positions)
        .with_inserted_attribute(Mesh::ATTRIBUTE_NORMAL, normals)
        .with_inserted_attribute(Mesh::ATTRIBUTE_UV_0, uvs)
}

/// Textured material; emissive commands render unlit at full brightness.
fn surface_material(cmd: &DrawCommand, textures: &TextureLibrary) -> StandardMaterial {
    let texture = cmd.texture.and_then(|id| textures.get(id));
    let is_ring = matches!(cmd.primitive, Primitive::RingStrip(_));
    let [r, g, b] = cmd.emission.to_array();

    if cmd.emission.is_black() {
        let mut material = StandardMaterial {
            base_color_texture: texture,
            perceptual_roughness: 1.0,
            ..default()
        };
        // Rings are seen from both sides of the orbital plane.
        if is_ring {
            material.double_sided = true;
            material.cull_mode = None;
        }
        material
    } else {
        StandardMaterial {
            base_color: Color::linear_rgb(r, g, b),
            base_color_texture: texture,
            emissive: LinearRgba::rgb(r, g, b),
            unlit: true,
            ..default()
        }
    }
}
