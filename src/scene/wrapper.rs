//! Chainable node operation wrapper.
//!
//! [`SceneNode`] borrows a [`Scene`] mutably and provides a fluent API for
//! editing nodes without `get_node_mut().unwrap()`.
//!
//! All methods silently no-op when the handle is stale.
//!
//! ```rust,ignore
//! scene.node(handle)
//!     .set_name("Crate")
//!     .add_renderer(MeshRenderer::new(cube, wood))
//!     .attach_to(parent);
//! ```
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::must_use_candidate)]

use crate::scene::NodeHandle;
use crate::scene::renderer::MeshRenderer;
use crate::scene::scene::Scene;

/// Temporary mutable borrow of a scene node for chainable operations.
pub struct SceneNode<'a> {
    scene: &'a mut Scene,
    handle: NodeHandle,
}

impl<'a> SceneNode<'a> {
    #[inline]
    pub fn new(scene: &'a mut Scene, handle: NodeHandle) -> Self {
        Self { scene, handle }
    }

    #[inline]
    pub fn handle(&self) -> NodeHandle {
        self.handle
    }

    #[inline]
    pub fn set_name(self, name: &str) -> Self {
        self.scene.set_name(self.handle, name);
        self
    }

    #[inline]
    pub fn set_active(self, active: bool) -> Self {
        if let Some(node) = self.scene.get_node_mut(self.handle) {
            node.active = active;
        }
        self
    }

    #[inline]
    pub fn add_renderer(self, renderer: MeshRenderer) -> Self {
        self.scene.add_renderer(self.handle, renderer);
        self
    }

    #[inline]
    pub fn attach_to(self, parent: NodeHandle) -> Self {
        self.scene.attach(self.handle, parent);
        self
    }
}
