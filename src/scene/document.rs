//! JSON scene files.
//!
//! A [`SceneDocument`] is the on-disk form of a scene: an asset manifest
//! keyed by GUID plus the node hierarchy. Loading registers the manifest in
//! a shared [`AssetServer`] through `upsert_with_uuid`, so an asset GUID that
//! appears in several scene files maps to one handle, and the stored value
//! is the one the most recently loaded file declared.
//!
//! A document only sees its own manifest: references to GUIDs it does not
//! declare become empty references, never errors, even when another file
//! registered that GUID earlier. Loading a file therefore yields the same
//! scene whatever was loaded before it.

use std::collections::BTreeMap;
use std::path::Path;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use uuid::Uuid;

use crate::assets::{
    AssetServer, GeometryHandle, MaterialHandle, Prefab, PrefabHandle, PrefabNode, ShaderHandle,
    TextureHandle,
};
use crate::errors::Result;
use crate::resources::{Geometry, Material, Shader, ShaderPropertyType, Texture};
use crate::scene::renderer::MeshRenderer;
use crate::scene::{Node, NodeHandle, PrefabInstanceKey, Scene};

fn default_true() -> bool {
    true
}

fn default_extent() -> u32 {
    1
}

#[inline]
fn lookup<H: Copy>(declared: &FxHashMap<Uuid, H>, id: Option<Uuid>) -> Option<H> {
    declared.get(&id?).copied()
}

/// Handles of the assets one manifest declared.
#[derive(Default)]
struct ManifestHandles {
    textures: FxHashMap<Uuid, TextureHandle>,
    shaders: FxHashMap<Uuid, ShaderHandle>,
    materials: FxHashMap<Uuid, MaterialHandle>,
    geometries: FxHashMap<Uuid, GeometryHandle>,
    prefabs: FxHashMap<Uuid, PrefabHandle>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextureEntry {
    pub id: Uuid,
    pub name: String,
    #[serde(default = "default_extent")]
    pub width: u32,
    #[serde(default = "default_extent")]
    pub height: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShaderPropertyEntry {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: ShaderPropertyType,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShaderEntry {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub properties: Vec<ShaderPropertyEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaterialEntry {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub shader: Option<Uuid>,
    /// Shader property name to texture GUID
    #[serde(default)]
    pub textures: BTreeMap<String, Uuid>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeometryEntry {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub vertex_count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrefabEntry {
    pub id: Uuid,
    pub name: String,
}

/// Assets a scene file declares.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetManifest {
    pub textures: Vec<TextureEntry>,
    pub shaders: Vec<ShaderEntry>,
    pub materials: Vec<MaterialEntry>,
    pub geometries: Vec<GeometryEntry>,
    pub prefabs: Vec<PrefabEntry>,
}

/// Marks a node as the root of a prefab instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrefabLinkDocument {
    pub instance: Uuid,
    #[serde(default)]
    pub asset: Option<Uuid>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RendererDocument {
    pub geometry: Option<Uuid>,
    pub materials: Vec<Option<Uuid>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeDocument {
    pub name: String,
    #[serde(default = "default_true")]
    pub active: bool,
    /// Present on instance roots only; descendants without their own link
    /// belong to the nearest linked ancestor.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefab: Option<PrefabLinkDocument>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub renderers: Vec<RendererDocument>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NodeDocument>,
}

impl NodeDocument {
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            active: true,
            prefab: None,
            renderers: Vec::new(),
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_renderer(mut self, geometry: Option<Uuid>, materials: &[Option<Uuid>]) -> Self {
        self.renderers.push(RendererDocument {
            geometry,
            materials: materials.to_vec(),
        });
        self
    }

    #[must_use]
    pub fn with_prefab(mut self, instance: Uuid, asset: Option<Uuid>) -> Self {
        self.prefab = Some(PrefabLinkDocument { instance, asset });
        self
    }

    #[must_use]
    pub fn with_child(mut self, child: NodeDocument) -> Self {
        self.children.push(child);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneDocument {
    pub name: String,
    pub assets: AssetManifest,
    pub roots: Vec<NodeDocument>,
}

impl SceneDocument {
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }

    /// Registers the manifest in `assets` and builds the scene graph.
    #[must_use]
    pub fn instantiate(&self, assets: &AssetServer) -> Scene {
        let declared = self.register_assets(assets);

        let mut scene = Scene::new(assets.clone()).with_name(&self.name);

        // (document node, parent, instance inherited from the nearest linked ancestor)
        let mut stack: Vec<(&NodeDocument, Option<NodeHandle>, Option<PrefabInstanceKey>)> =
            self.roots.iter().rev().map(|doc| (doc, None, None)).collect();

        while let Some((doc, parent, inherited)) = stack.pop() {
            let mut node = Node::new(&doc.name);
            node.active = doc.active;
            let handle = match parent {
                Some(p) => scene.add_to_parent(node, p),
                None => scene.add_node(node),
            };

            for renderer in &doc.renderers {
                scene.add_renderer(handle, Self::resolve_renderer(renderer, &declared));
            }

            let instance = if let Some(link) = &doc.prefab {
                let asset = lookup(&declared.prefabs, link.asset);
                Some(scene.register_prefab_instance(handle, link.instance, asset))
            } else {
                if let Some(key) = inherited {
                    scene.link_prefab_member(handle, key);
                }
                inherited
            };

            for child in doc.children.iter().rev() {
                stack.push((child, Some(handle), instance));
            }
        }

        scene
    }

    fn register_assets(&self, assets: &AssetServer) -> ManifestHandles {
        let manifest = &self.assets;
        let mut declared = ManifestHandles::default();

        for entry in &manifest.textures {
            let handle = assets.textures.upsert_with_uuid(
                entry.id,
                Texture::new_2d(&entry.name, entry.width, entry.height),
            );
            declared.textures.insert(entry.id, handle);
        }

        for entry in &manifest.shaders {
            let shader = entry
                .properties
                .iter()
                .fold(Shader::new(&entry.name), |shader, p| {
                    shader.with_property(&p.name, p.ty)
                });
            let handle = assets.shaders.upsert_with_uuid(entry.id, shader);
            declared.shaders.insert(entry.id, handle);
        }

        for entry in &manifest.materials {
            let mut material = Material::new(&entry.name);
            material.shader = lookup(&declared.shaders, entry.shader);
            for (property, texture_id) in &entry.textures {
                material.set_texture(property, lookup(&declared.textures, Some(*texture_id)));
            }
            let handle = assets.materials.upsert_with_uuid(entry.id, material);
            declared.materials.insert(entry.id, handle);
        }

        for entry in &manifest.geometries {
            let handle = assets
                .geometries
                .upsert_with_uuid(entry.id, Geometry::new(&entry.name, entry.vertex_count));
            declared.geometries.insert(entry.id, handle);
        }

        for entry in &manifest.prefabs {
            let handle = assets
                .prefabs
                .upsert_with_uuid(entry.id, Prefab::new(&entry.name, PrefabNode::new(&entry.name)));
            declared.prefabs.insert(entry.id, handle);
        }

        declared
    }

    fn resolve_renderer(doc: &RendererDocument, declared: &ManifestHandles) -> MeshRenderer {
        let materials: SmallVec<[_; 4]> = doc
            .materials
            .iter()
            .map(|&slot| lookup(&declared.materials, slot))
            .collect();

        MeshRenderer {
            geometry: lookup(&declared.geometries, doc.geometry),
            materials,
        }
    }
}
