//! Per-scene asset usage collection.
//!
//! [`SceneStatsCollector`] walks a scene once and builds identity-keyed
//! indexes of everything the scene's renderers reach:
//!
//! 1. **Walk**: depth-first, pre-order over every node. Counts objects and
//!    records materials, geometries and prefab instance roots.
//! 2. **Derive**: once per *distinct* material, resolve its shader and the
//!    textures bound to the shader's texture properties.
//!
//! Shaders and textures are derived from the material index rather than
//! from nodes, so their tallies count materials, not renderer slots.
//!
//! Collectors are single-use: one per scene, then [`merge`] them into a
//! run-wide aggregate.
//!
//! [`merge`]: SceneStatsCollector::merge

use std::hash::Hash;

use rustc_hash::{FxHashMap, FxHashSet};
use uuid::Uuid;

use crate::assets::{AssetServer, GeometryHandle, MaterialHandle, ShaderHandle, TextureHandle};
use crate::audit::stats::AssetUsageStats;
use crate::errors::{AuditError, Result};
use crate::scene::{NodeHandle, Scene};

#[inline]
fn bump<K: Hash + Eq>(index: &mut FxHashMap<K, u32>, key: K) {
    *index.entry(key).or_insert(0) += 1;
}

#[inline]
fn absorb<K: Hash + Eq + Copy>(index: &mut FxHashMap<K, u32>, other: &FxHashMap<K, u32>) {
    for (&key, &count) in other {
        *index.entry(key).or_insert(0) += count;
    }
}

#[derive(Debug, Default)]
pub struct SceneStatsCollector {
    collected: bool,
    objects: usize,
    materials: FxHashMap<MaterialHandle, u32>,
    models: FxHashMap<GeometryHandle, u32>,
    prefabs: FxHashMap<Uuid, u32>,
    shaders: FxHashMap<ShaderHandle, u32>,
    textures: FxHashMap<TextureHandle, u32>,
}

impl SceneStatsCollector {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Collects statistics for `scene`.
    ///
    /// The scene is only read. A collector accepts exactly one scene; a
    /// second call fails with [`AuditError::CollectorReused`] and leaves the
    /// indexes untouched.
    pub fn collect(&mut self, scene: &Scene) -> Result<()> {
        if self.collected {
            return Err(AuditError::CollectorReused);
        }
        self.collected = true;

        self.walk(scene);
        self.derive(&scene.assets);

        log::debug!(
            "Collected scene '{}': {} objects, {} materials, {} shaders, {} textures",
            scene.name,
            self.objects,
            self.materials.len(),
            self.shaders.len(),
            self.textures.len()
        );
        Ok(())
    }

    /// Depth-first pre-order walk over every root, with an explicit stack.
    fn walk(&mut self, scene: &Scene) {
        let mut visited: FxHashSet<NodeHandle> = FxHashSet::default();
        let mut stack: Vec<NodeHandle> = Vec::with_capacity(64);

        // Reverse so the first root is popped first
        stack.extend(scene.root_nodes().iter().rev());

        while let Some(handle) = stack.pop() {
            let Some(node) = scene.get_node(handle) else {
                continue;
            };
            if !visited.insert(handle) {
                log::warn!("Node '{}' reached twice; hierarchy is not a tree", node.name);
                continue;
            }

            self.visit(scene, handle);

            stack.extend(node.children().iter().rev());
        }
    }

    fn visit(&mut self, scene: &Scene, handle: NodeHandle) {
        self.objects += 1;

        for renderer in scene.renderers(handle) {
            for material in renderer.shared_materials() {
                // Slots pointing at deleted assets read as empty
                if scene.assets.materials.contains(material) {
                    bump(&mut self.materials, material);
                }
            }
            if let Some(geometry) = renderer.geometry
                && scene.assets.geometries.contains(geometry)
            {
                bump(&mut self.models, geometry);
            }
        }

        if scene.is_prefab_instance_root(handle)
            && let Some(instance) = scene.prefab_instance_of(handle)
        {
            bump(&mut self.prefabs, instance.id);
        }
    }

    /// Builds the shader and texture indexes from the distinct materials.
    fn derive(&mut self, assets: &AssetServer) {
        for &handle in self.materials.keys() {
            let Some(material) = assets.get_material(handle) else {
                continue;
            };
            let Some(shader_handle) = material.shader else {
                continue;
            };
            let Some(shader) = assets.get_shader(shader_handle) else {
                continue;
            };

            bump(&mut self.shaders, shader_handle);

            for property in shader.texture_properties() {
                let Some(texture) = material.texture_by_symbol(property.name) else {
                    continue;
                };
                if assets.textures.contains(texture) {
                    bump(&mut self.textures, texture);
                }
            }
        }
    }

    /// Folds another collector into this one.
    ///
    /// Object counts add up; every index is unioned by identity, so an asset
    /// seen by both sides is still one entry (its tallies are summed).
    pub fn merge(&mut self, other: &SceneStatsCollector) {
        self.objects += other.objects;
        absorb(&mut self.materials, &other.materials);
        absorb(&mut self.models, &other.models);
        absorb(&mut self.prefabs, &other.prefabs);
        absorb(&mut self.shaders, &other.shaders);
        absorb(&mut self.textures, &other.textures);
    }

    /// Snapshot of the current counts. All zero before [`collect`](Self::collect).
    #[must_use]
    pub fn stats(&self) -> AssetUsageStats {
        AssetUsageStats {
            objects: self.objects,
            prefabs: self.prefabs.len(),
            materials: self.materials.len(),
            models: self.models.len(),
            shaders: self.shaders.len(),
            textures: self.textures.len(),
        }
    }

    #[inline]
    #[must_use]
    pub fn is_collected(&self) -> bool {
        self.collected
    }

    /// Number of renderer slots that referenced `material`.
    #[must_use]
    pub fn material_references(&self, material: MaterialHandle) -> u32 {
        self.materials.get(&material).copied().unwrap_or(0)
    }

    /// Number of distinct materials using `shader`.
    #[must_use]
    pub fn shader_references(&self, shader: ShaderHandle) -> u32 {
        self.shaders.get(&shader).copied().unwrap_or(0)
    }

    /// Number of (material, texture property) bindings resolving to `texture`.
    #[must_use]
    pub fn texture_references(&self, texture: TextureHandle) -> u32 {
        self.textures.get(&texture).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn prefab_references(&self, instance: &Uuid) -> u32 {
        self.prefabs.get(instance).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn model_references(&self, geometry: GeometryHandle) -> u32 {
        self.models.get(&geometry).copied().unwrap_or(0)
    }
}
