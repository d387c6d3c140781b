//! Asset data definitions.
//!
//! Plain data for everything a renderer can reference:
//! - Geometry: mesh data referenced by renderers
//! - Material: shader reference plus texture bindings
//! - Shader: typed property table
//! - Texture: texture description

pub mod geometry;
pub mod material;
pub mod shader;
pub mod texture;

pub use geometry::Geometry;
pub use material::Material;
pub use shader::{Shader, ShaderProperty, ShaderPropertyType};
pub use texture::Texture;
