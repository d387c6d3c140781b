use uuid::Uuid;

use crate::assets::PrefabHandle;
use crate::scene::NodeHandle;

/// One physical instantiation of a prefab in a scene.
///
/// `id` is stable for the lifetime of the instance and unique across
/// scenes, which is what lets project-wide statistics tell instances in
/// different scenes apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefabInstance {
    pub id: Uuid,
    /// Source template, if it is still known to the asset server
    pub asset: Option<PrefabHandle>,
    /// The instance root node
    pub root: NodeHandle,
}

impl PrefabInstance {
    #[must_use]
    pub fn with_id(id: Uuid, root: NodeHandle, asset: Option<PrefabHandle>) -> Self {
        Self { id, asset, root }
    }
}
