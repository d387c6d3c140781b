use crate::scene::NodeHandle;

/// A scene graph node.
///
/// Nodes only hold hierarchy and identity data. Renderers and prefab
/// membership live in the owning [`Scene`](crate::scene::Scene)'s
/// component maps, keyed by [`NodeHandle`].
#[derive(Debug, Clone)]
pub struct Node {
    /// Parent node handle (None for root nodes)
    pub(crate) parent: Option<NodeHandle>,
    /// Child node handles
    pub(crate) children: Vec<NodeHandle>,

    pub name: String,
    /// Active flag; inactive nodes are still counted by the auditor.
    pub active: bool,
}

impl Node {
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            parent: None,
            children: Vec::new(),
            name: name.to_string(),
            active: true,
        }
    }

    #[inline]
    #[must_use]
    pub fn parent(&self) -> Option<NodeHandle> {
        self.parent
    }

    #[inline]
    #[must_use]
    pub fn children(&self) -> &[NodeHandle] {
        &self.children
    }
}

impl Default for Node {
    fn default() -> Self {
        Self::new("Node")
    }
}
