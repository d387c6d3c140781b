use rustc_hash::FxHashMap;

use crate::assets::{ShaderHandle, TextureHandle};
use crate::utils::interner::{self, Symbol};

/// Material asset.
///
/// A material points at zero or one shader and binds textures by shader
/// property name. Bindings for names the shader does not declare are kept
/// but never reported, matching how the host ignores stale bindings.
#[derive(Debug, Clone, Default)]
pub struct Material {
    pub name: String,
    pub shader: Option<ShaderHandle>,
    textures: FxHashMap<Symbol, TextureHandle>,
}

impl Material {
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            shader: None,
            textures: FxHashMap::default(),
        }
    }

    #[must_use]
    pub fn with_shader(mut self, shader: ShaderHandle) -> Self {
        self.shader = Some(shader);
        self
    }

    #[must_use]
    pub fn with_texture(mut self, property: &str, texture: TextureHandle) -> Self {
        self.set_texture(property, Some(texture));
        self
    }

    /// Binds or clears the texture for a property.
    pub fn set_texture(&mut self, property: &str, texture: Option<TextureHandle>) {
        let key = interner::intern(property);
        match texture {
            Some(handle) => {
                self.textures.insert(key, handle);
            }
            None => {
                self.textures.remove(&key);
            }
        }
    }

    /// Texture bound to `property`, if any.
    #[must_use]
    pub fn texture(&self, property: &str) -> Option<TextureHandle> {
        self.texture_by_symbol(interner::get(property)?)
    }

    #[inline]
    #[must_use]
    pub fn texture_by_symbol(&self, property: Symbol) -> Option<TextureHandle> {
        self.textures.get(&property).copied()
    }

    #[inline]
    #[must_use]
    pub fn texture_binding_count(&self) -> usize {
        self.textures.len()
    }
}
