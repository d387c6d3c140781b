use crate::scene::MeshRenderer;

/// Prefab template node: data only, children referenced by index.
#[derive(Debug, Clone, Default)]
pub struct PrefabNode {
    pub name: Option<String>,
    /// Indices of child nodes in `Prefab::nodes`
    pub children_indices: Vec<usize>,
    /// Renderer components carried by this node
    pub renderers: Vec<MeshRenderer>,
}

impl PrefabNode {
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            children_indices: Vec::new(),
            renderers: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_renderer(mut self, renderer: MeshRenderer) -> Self {
        self.renderers.push(renderer);
        self
    }

    #[must_use]
    pub fn with_children(mut self, children: &[usize]) -> Self {
        self.children_indices.extend_from_slice(children);
        self
    }
}

/// Reusable node template.
///
/// A prefab has exactly one root; instantiating it into a scene produces
/// one physical prefab instance rooted at the copy of that node
/// (see [`Scene::instantiate`](crate::scene::Scene::instantiate)).
#[derive(Debug, Clone, Default)]
pub struct Prefab {
    pub name: String,
    /// Flattened template nodes
    pub nodes: Vec<PrefabNode>,
    /// Index of the root node in `nodes`
    pub root_index: usize,
}

impl Prefab {
    /// A prefab whose root is `root`.
    #[must_use]
    pub fn new(name: &str, root: PrefabNode) -> Self {
        Self {
            name: name.to_string(),
            nodes: vec![root],
            root_index: 0,
        }
    }

    /// Appends a template node and returns its index.
    pub fn push_node(&mut self, node: PrefabNode) -> usize {
        self.nodes.push(node);
        self.nodes.len() - 1
    }

    /// Makes `child` a child of `parent` (both indices into `nodes`).
    pub fn attach(&mut self, child: usize, parent: usize) {
        if let Some(p) = self.nodes.get_mut(parent) {
            p.children_indices.push(child);
        }
    }
}
