//! Smart resource resolution traits.
//!
//! These traits allow scene helper methods to accept **either** a
//! pre-registered asset handle **or** a raw asset struct. When a struct is
//! passed the scene's [`AssetServer`] registers it and returns a handle.
//!
//! ```rust,ignore
//! scene.spawn("Cube", Geometry::new("Cube", 24), Material::new("Brick"));
//! scene.spawn("Cube", cube_handle, brick_handle);
//! ```

use crate::assets::{AssetServer, GeometryHandle, MaterialHandle};
use crate::resources::{Geometry, Material};

/// Types that can be resolved into a [`MaterialHandle`].
pub trait ResolveMaterial {
    fn resolve(self, assets: &AssetServer) -> MaterialHandle;
}

impl ResolveMaterial for MaterialHandle {
    #[inline]
    fn resolve(self, _assets: &AssetServer) -> MaterialHandle {
        self
    }
}

impl ResolveMaterial for Material {
    #[inline]
    fn resolve(self, assets: &AssetServer) -> MaterialHandle {
        assets.materials.add(self)
    }
}

/// Types that can be resolved into a [`GeometryHandle`].
pub trait ResolveGeometry {
    fn resolve(self, assets: &AssetServer) -> GeometryHandle;
}

impl ResolveGeometry for GeometryHandle {
    #[inline]
    fn resolve(self, _assets: &AssetServer) -> GeometryHandle {
        self
    }
}

impl ResolveGeometry for Geometry {
    #[inline]
    fn resolve(self, assets: &AssetServer) -> GeometryHandle {
        assets.geometries.add(self)
    }
}
