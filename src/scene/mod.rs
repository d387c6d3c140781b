//! Scene graph module
//!
//! Scene hierarchy and the components the auditor reads:
//! - Node: scene node (name, active flag, parent/children links)
//! - MeshRenderer: renderer component with per-slot material references
//! - PrefabInstance: connection between a node subtree and a prefab asset
//! - Scene: scene container
//! - SceneDocument: JSON scene files
//! - SceneManager: open-scene bookkeeping, the default `SceneHost`

pub mod document;
pub mod instance;
pub mod manager;
pub mod node;
pub mod renderer;
pub mod resolve;
pub mod scene;
pub mod wrapper;

pub use document::{NodeDocument, SceneDocument};
pub use instance::PrefabInstance;
pub use manager::{SceneHandle, SceneManager};
pub use node::Node;
pub use renderer::MeshRenderer;
pub use resolve::{ResolveGeometry, ResolveMaterial};
pub use scene::Scene;
pub use wrapper::SceneNode;

use slotmap::new_key_type;

new_key_type! {
    pub struct NodeHandle;
    pub struct PrefabInstanceKey;
}
