//! Texture loading for the scene's surfaces.
//!
//! Every [`Surface`] image is queued once at startup and held for the life of
//! the process. A failed load aborts the app.

use std::collections::HashMap;

use bevy::asset::LoadState;
use bevy::prelude::*;

use crate::draw::TextureId;
use crate::presets::Surface;

/// Texture load failures surfaced to Bevy's error handler.
#[derive(thiserror::Error, Debug)]
pub enum TextureError {
    #[error("failed to load texture {path}: {reason}")]
    Load { path: &'static str, reason: String },
}

/// Mapping from opaque texture ids to loaded images.
#[derive(Resource, Default)]
pub struct TextureLibrary {
    handles: HashMap<TextureId, (Surface, Handle<Image>)>,
    /// Set once every image reports loaded. Meshes are not spawned before.
    pub ready: bool,
}

impl TextureLibrary {
    pub fn get(&self, id: TextureId) -> Option<Handle<Image>> {
        self.handles.get(&id).map(|(_, handle)| handle.clone())
    }

    pub fn insert(&mut self, surface: Surface, handle: Handle<Image>) {
        self.handles.insert(surface.texture_id(), (surface, handle));
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }
}

/// Plugin queueing surface textures and watching their load state.
pub struct TexturePlugin;

impl Plugin for TexturePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<TextureLibrary>()
            .add_systems(Startup, load_textures)
            .add_systems(Update, watch_texture_loads);
    }
}

fn load_textures(asset_server: Res<AssetServer>, mut library: ResMut<TextureLibrary>) {
    for &surface in Surface::ALL {
        library.insert(surface, asset_server.load(surface.asset_path()));
    }
    info!("Queued {} surface textures", library.len());
}

fn watch_texture_loads(
    asset_server: Res<AssetServer>,
    mut library: ResMut<TextureLibrary>,
) -> Result {
    if library.ready {
        return Ok(());
    }

    let mut loaded = 0;
    for (surface, handle) in library.handles.values() {
        match asset_server.load_state(handle.id()) {
            LoadState::Loaded => loaded += 1,
            LoadState::Failed(err) => {
                return Err(TextureError::Load {
                    path: surface.asset_path(),
                    reason: err.to_string(),
                }
                .into());
            }
            _ => {}
        }
    }

    if loaded == library.len() {
        library.ready = true;
        info!("All {} surface textures loaded", loaded);
    }
    Ok(())
}
