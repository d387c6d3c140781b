use slotmap::new_key_type;
use std::sync::Arc;

use crate::assets::prefab::Prefab;
use crate::assets::storage::AssetStorage;
use crate::resources::{Geometry, Material, Shader, Texture};

// Strongly-typed handles
new_key_type! {
    pub struct GeometryHandle;
    pub struct MaterialHandle;
    pub struct ShaderHandle;
    pub struct TextureHandle;
    pub struct PrefabHandle;
}

/// Project-wide asset tables.
///
/// Cheap to clone; clones share the same storages. Every scene opened by a
/// host must share one server, otherwise handles from different scenes
/// cannot be compared and the aggregate merge stops deduplicating.
#[derive(Clone, Default)]
pub struct AssetServer {
    pub geometries: Arc<AssetStorage<GeometryHandle, Geometry>>,
    pub materials: Arc<AssetStorage<MaterialHandle, Material>>,
    pub shaders: Arc<AssetStorage<ShaderHandle, Shader>>,
    pub textures: Arc<AssetStorage<TextureHandle, Texture>>,
    pub prefabs: Arc<AssetStorage<PrefabHandle, Prefab>>,
}

impl AssetServer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    #[must_use]
    pub fn get_material(&self, handle: MaterialHandle) -> Option<Arc<Material>> {
        self.materials.get(handle)
    }

    #[inline]
    #[must_use]
    pub fn get_shader(&self, handle: ShaderHandle) -> Option<Arc<Shader>> {
        self.shaders.get(handle)
    }

    #[inline]
    #[must_use]
    pub fn get_texture(&self, handle: TextureHandle) -> Option<Arc<Texture>> {
        self.textures.get(handle)
    }

    #[inline]
    #[must_use]
    pub fn get_prefab(&self, handle: PrefabHandle) -> Option<Arc<Prefab>> {
        self.prefabs.get(handle)
    }

    /// Returns `true` when both servers share the same storages.
    #[must_use]
    pub fn ptr_eq(&self, other: &AssetServer) -> bool {
        Arc::ptr_eq(&self.materials, &other.materials)
    }
}
