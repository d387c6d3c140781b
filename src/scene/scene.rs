use slotmap::{SecondaryMap, SlotMap};
use uuid::Uuid;

use crate::assets::{AssetServer, Prefab, PrefabHandle};
use crate::scene::instance::PrefabInstance;
use crate::scene::node::Node;
use crate::scene::renderer::MeshRenderer;
use crate::scene::resolve::{ResolveGeometry, ResolveMaterial};
use crate::scene::wrapper::SceneNode;
use crate::scene::{NodeHandle, PrefabInstanceKey};

/// Scene graph.
///
/// Pure data: a node arena, the ordered root list, per-node component maps
/// and the prefab instances living in this scene. Assets are referenced by
/// handle into the shared [`AssetServer`].
pub struct Scene {
    pub name: String,

    pub nodes: SlotMap<NodeHandle, Node>,
    pub root_nodes: Vec<NodeHandle>,

    // ==== Components ====
    pub renderers: SecondaryMap<NodeHandle, Vec<MeshRenderer>>,

    // ==== Prefab instances ====
    pub prefab_instances: SlotMap<PrefabInstanceKey, PrefabInstance>,
    /// Nearest prefab instance each member node belongs to
    pub prefab_links: SecondaryMap<NodeHandle, PrefabInstanceKey>,

    pub assets: AssetServer,
}

impl Scene {
    #[must_use]
    pub fn new(assets: AssetServer) -> Self {
        Self {
            name: String::from("Untitled"),

            nodes: SlotMap::with_key(),
            root_nodes: Vec::new(),

            renderers: SecondaryMap::new(),

            prefab_instances: SlotMap::with_key(),
            prefab_links: SecondaryMap::new(),

            assets,
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    // ========================================================================
    // Hierarchy
    // ========================================================================

    /// Creates a detached node. It is not reachable from `root_nodes` until
    /// it is attached somewhere.
    pub fn create_node_with_name(&mut self, name: &str) -> NodeHandle {
        self.nodes.insert(Node::new(name))
    }

    /// Adds a node as a scene root.
    pub fn add_node(&mut self, node: Node) -> NodeHandle {
        let handle = self.nodes.insert(node);
        self.root_nodes.push(handle);
        handle
    }

    pub fn add_to_parent(&mut self, mut child: Node, parent: NodeHandle) -> NodeHandle {
        if !self.nodes.contains_key(parent) {
            log::warn!("Parent node not found; adding '{}' as a root", child.name);
            return self.add_node(child);
        }
        child.parent = Some(parent);
        let handle = self.nodes.insert(child);
        if let Some(p) = self.nodes.get_mut(parent) {
            p.children.push(handle);
        }
        handle
    }

    /// Moves `child` (and its subtree) under `parent`.
    ///
    /// Refuses to attach a node to itself or to one of its own descendants.
    pub fn attach(&mut self, child: NodeHandle, parent: NodeHandle) {
        if child == parent {
            log::warn!("Cannot attach node to itself!");
            return;
        }
        if !self.nodes.contains_key(child) || !self.nodes.contains_key(parent) {
            log::error!("Node not found during attach!");
            return;
        }
        if self.is_ancestor(child, parent) {
            log::warn!("Cannot attach node to its own descendant!");
            return;
        }

        // 1. Detach from old
        let old_parent = self.nodes.get(child).and_then(|n| n.parent);
        if let Some(p) = old_parent {
            if let Some(n) = self.nodes.get_mut(p)
                && let Some(i) = n.children.iter().position(|&x| x == child)
            {
                n.children.remove(i);
            }
        } else if let Some(i) = self.root_nodes.iter().position(|&x| x == child) {
            self.root_nodes.remove(i);
        }

        // 2. Attach to new
        if let Some(p) = self.nodes.get_mut(parent) {
            p.children.push(child);
        }
        if let Some(c) = self.nodes.get_mut(child) {
            c.parent = Some(parent);
        }
    }

    /// Returns `true` if `ancestor` lies on the parent chain of `node`.
    #[must_use]
    pub fn is_ancestor(&self, ancestor: NodeHandle, node: NodeHandle) -> bool {
        let mut current = self.nodes.get(node).and_then(Node::parent);
        let mut steps = 0;
        while let Some(handle) = current {
            if handle == ancestor {
                return true;
            }
            steps += 1;
            if steps > self.nodes.len() {
                log::warn!("Parent chain loops; hierarchy is corrupt");
                return false;
            }
            current = self.nodes.get(handle).and_then(Node::parent);
        }
        false
    }

    #[must_use]
    pub fn get_node(&self, handle: NodeHandle) -> Option<&Node> {
        self.nodes.get(handle)
    }

    pub fn get_node_mut(&mut self, handle: NodeHandle) -> Option<&mut Node> {
        self.nodes.get_mut(handle)
    }

    #[must_use]
    pub fn get_name(&self, handle: NodeHandle) -> Option<&str> {
        self.nodes.get(handle).map(|n| n.name.as_str())
    }

    pub fn set_name(&mut self, handle: NodeHandle, name: &str) {
        if let Some(node) = self.nodes.get_mut(handle) {
            node.name = name.to_string();
        }
    }

    /// Chainable editing wrapper for one node.
    pub fn node(&mut self, handle: NodeHandle) -> SceneNode<'_> {
        SceneNode::new(self, handle)
    }

    #[inline]
    #[must_use]
    pub fn root_nodes(&self) -> &[NodeHandle] {
        &self.root_nodes
    }

    #[inline]
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    // ========================================================================
    // Components
    // ========================================================================

    pub fn add_renderer(&mut self, handle: NodeHandle, renderer: MeshRenderer) {
        if !self.nodes.contains_key(handle) {
            return;
        }
        if let Some(list) = self.renderers.get_mut(handle) {
            list.push(renderer);
        } else {
            self.renderers.insert(handle, vec![renderer]);
        }
    }

    /// Renderer components of a node (empty if it has none).
    #[must_use]
    pub fn renderers(&self, handle: NodeHandle) -> &[MeshRenderer] {
        self.renderers.get(handle).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Adds a root node carrying one renderer. Raw assets are registered in
    /// the scene's asset server; handles are used as-is.
    pub fn spawn(
        &mut self,
        name: &str,
        geometry: impl ResolveGeometry,
        material: impl ResolveMaterial,
    ) -> NodeHandle {
        let geometry = geometry.resolve(&self.assets);
        let material = material.resolve(&self.assets);
        let handle = self.add_node(Node::new(name));
        self.add_renderer(handle, MeshRenderer::new(geometry, material));
        handle
    }

    // ========================================================================
    // Prefab instances
    // ========================================================================

    /// Registers `root` as the root of a new prefab instance.
    pub fn register_prefab_instance(
        &mut self,
        root: NodeHandle,
        id: Uuid,
        asset: Option<PrefabHandle>,
    ) -> PrefabInstanceKey {
        let key = self
            .prefab_instances
            .insert(PrefabInstance::with_id(id, root, asset));
        self.prefab_links.insert(root, key);
        key
    }

    /// Marks `node` as a member of an existing instance.
    pub fn link_prefab_member(&mut self, node: NodeHandle, instance: PrefabInstanceKey) {
        if self.nodes.contains_key(node) && self.prefab_instances.contains_key(instance) {
            self.prefab_links.insert(node, instance);
        }
    }

    /// Nearest prefab instance `node` is part of, if any.
    #[must_use]
    pub fn prefab_instance_of(&self, node: NodeHandle) -> Option<&PrefabInstance> {
        let key = self.prefab_links.get(node)?;
        self.prefab_instances.get(*key)
    }

    #[must_use]
    pub fn nearest_prefab_instance_root(&self, node: NodeHandle) -> Option<NodeHandle> {
        self.prefab_instance_of(node).map(|instance| instance.root)
    }

    /// A node is an instance root when it is the nearest root of its own
    /// prefab connection. Members of an instance rooted higher up are not.
    #[must_use]
    pub fn is_prefab_instance_root(&self, node: NodeHandle) -> bool {
        self.nearest_prefab_instance_root(node) == Some(node)
    }

    /// Instantiates a template, under `parent` or as a new root.
    ///
    /// Every created node is linked to one new [`PrefabInstance`].
    /// Instantiating below a node that is itself part of an instance yields a
    /// nested instance. Returns `None` for a template without a root.
    pub fn instantiate(
        &mut self,
        prefab: &Prefab,
        asset: Option<PrefabHandle>,
        parent: Option<NodeHandle>,
    ) -> Option<NodeHandle> {
        let Some(root_template) = prefab.nodes.get(prefab.root_index) else {
            log::warn!("Prefab '{}' has no root node", prefab.name);
            return None;
        };

        let root_name = root_template.name.as_deref().unwrap_or(&prefab.name);
        let root = match parent {
            Some(p) => self.add_to_parent(Node::new(root_name), p),
            None => self.add_node(Node::new(root_name)),
        };
        let instance = self.register_prefab_instance(root, Uuid::new_v4(), asset);

        let mut created = vec![false; prefab.nodes.len()];
        created[prefab.root_index] = true;

        let mut stack = vec![(prefab.root_index, root)];
        while let Some((index, handle)) = stack.pop() {
            let template = &prefab.nodes[index];
            for renderer in &template.renderers {
                self.add_renderer(handle, renderer.clone());
            }
            for &child_index in &template.children_indices {
                let Some(child_template) = prefab.nodes.get(child_index) else {
                    continue;
                };
                if created[child_index] {
                    log::warn!("Prefab '{}' reuses template node {child_index}", prefab.name);
                    continue;
                }
                created[child_index] = true;

                let name = child_template.name.as_deref().unwrap_or("Node");
                let child = self.add_to_parent(Node::new(name), handle);
                self.link_prefab_member(child, instance);
                stack.push((child_index, child));
            }
        }

        Some(root)
    }

    /// Instantiates a template registered in the asset server.
    pub fn instantiate_asset(
        &mut self,
        handle: PrefabHandle,
        parent: Option<NodeHandle>,
    ) -> Option<NodeHandle> {
        let prefab = self.assets.get_prefab(handle)?;
        self.instantiate(&prefab, Some(handle), parent)
    }
}
