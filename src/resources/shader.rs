use serde::{Deserialize, Serialize};

use crate::utils::interner::{self, Symbol};

/// Type of a property exposed by a shader.
///
/// Only [`ShaderPropertyType::Texture`] properties take part in texture
/// discovery; the rest are carried so shaders read like their source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShaderPropertyType {
    Float,
    Range,
    Color,
    Vector,
    Texture,
}

/// A named, typed shader property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShaderProperty {
    pub name: Symbol,
    pub ty: ShaderPropertyType,
}

impl ShaderProperty {
    #[must_use]
    pub fn new(name: &str, ty: ShaderPropertyType) -> Self {
        Self {
            name: interner::intern(name),
            ty,
        }
    }

    #[must_use]
    pub fn texture(name: &str) -> Self {
        Self::new(name, ShaderPropertyType::Texture)
    }

    #[inline]
    #[must_use]
    pub fn name_str(&self) -> &'static str {
        interner::resolve(self.name)
    }
}

/// Shader asset: a name and its property table.
#[derive(Debug, Clone, Default)]
pub struct Shader {
    pub name: String,
    pub properties: Vec<ShaderProperty>,
}

impl Shader {
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            properties: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_property(mut self, name: &str, ty: ShaderPropertyType) -> Self {
        self.properties.push(ShaderProperty::new(name, ty));
        self
    }

    #[must_use]
    pub fn with_texture_property(self, name: &str) -> Self {
        self.with_property(name, ShaderPropertyType::Texture)
    }

    /// Number of properties, in declaration order.
    #[inline]
    #[must_use]
    pub fn property_count(&self) -> usize {
        self.properties.len()
    }

    /// Iterates the texture-typed properties.
    pub fn texture_properties(&self) -> impl Iterator<Item = &ShaderProperty> {
        self.properties
            .iter()
            .filter(|p| p.ty == ShaderPropertyType::Texture)
    }
}
