use smallvec::SmallVec;

use crate::assets::{GeometryHandle, MaterialHandle};

/// Renderer component.
///
/// A node may carry several renderers, and each renderer has one material
/// slot per sub-mesh. Empty slots (`None`) are legal and are skipped by the
/// auditor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MeshRenderer {
    pub geometry: Option<GeometryHandle>,
    pub materials: SmallVec<[Option<MaterialHandle>; 4]>,
}

impl MeshRenderer {
    /// Renderer with one geometry and one material slot.
    #[must_use]
    pub fn new(geometry: GeometryHandle, material: MaterialHandle) -> Self {
        Self {
            geometry: Some(geometry),
            materials: SmallVec::from_elem(Some(material), 1),
        }
    }

    /// Renderer with only material slots and no geometry.
    #[must_use]
    pub fn with_materials(materials: &[Option<MaterialHandle>]) -> Self {
        Self {
            geometry: None,
            materials: SmallVec::from_slice(materials),
        }
    }

    #[must_use]
    pub fn with_geometry(mut self, geometry: GeometryHandle) -> Self {
        self.geometry = Some(geometry);
        self
    }

    /// Non-null material slots, in slot order.
    pub fn shared_materials(&self) -> impl Iterator<Item = MaterialHandle> + '_ {
        self.materials.iter().flatten().copied()
    }
}
