use serde::{Deserialize, Serialize};

/// Columns of a scene statistics row, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SceneProperty {
    NumObjects = 0,
    NumPrefabs,
    NumMaterials,
    NumShaders,
    NumTextures,
}

impl SceneProperty {
    /// Every property, in column order.
    pub const ALL: [SceneProperty; 5] = [
        SceneProperty::NumObjects,
        SceneProperty::NumPrefabs,
        SceneProperty::NumMaterials,
        SceneProperty::NumShaders,
        SceneProperty::NumTextures,
    ];

    #[inline]
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::NumObjects => "Num Objects",
            Self::NumPrefabs => "Num Prefabs",
            Self::NumMaterials => "Num Materials",
            Self::NumShaders => "Num Shaders",
            Self::NumTextures => "Num Textures",
        }
    }

    #[must_use]
    pub fn long_name(self) -> &'static str {
        match self {
            Self::NumObjects => "Num Objects",
            Self::NumPrefabs => "Num Unique Prefabs",
            Self::NumMaterials => "Num Unique Materials",
            Self::NumShaders => "Num Unique Shaders",
            Self::NumTextures => "Num Unique Textures",
        }
    }
}

/// Usage summary of one scene, or of a whole run once merged.
///
/// Everything except `objects` is the size of an identity-keyed index.
/// `models` counts distinct geometries; it is reported in the run summary
/// but is not one of the row columns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetUsageStats {
    pub objects: usize,
    pub prefabs: usize,
    pub materials: usize,
    pub models: usize,
    pub shaders: usize,
    pub textures: usize,
}

impl AssetUsageStats {
    #[must_use]
    pub fn get(&self, property: SceneProperty) -> usize {
        match property {
            SceneProperty::NumObjects => self.objects,
            SceneProperty::NumPrefabs => self.prefabs,
            SceneProperty::NumMaterials => self.materials,
            SceneProperty::NumShaders => self.shaders,
            SceneProperty::NumTextures => self.textures,
        }
    }

    /// Row values as decimal strings, in [`SceneProperty::ALL`] order.
    #[must_use]
    pub fn to_properties(&self) -> Vec<String> {
        SceneProperty::ALL
            .iter()
            .map(|&p| self.get(p).to_string())
            .collect()
    }
}
