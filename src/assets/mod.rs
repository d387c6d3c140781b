//! Asset management.
//!
//! - [`AssetStorage`]: handle-keyed, GUID-deduplicating asset table
//! - [`AssetServer`]: the project-wide set of storages shared by every scene
//! - [`Prefab`]: reusable node templates

pub mod prefab;
pub mod server;
pub mod storage;

pub use prefab::{Prefab, PrefabNode};
pub use server::{
    AssetServer, GeometryHandle, MaterialHandle, PrefabHandle, ShaderHandle, TextureHandle,
};
pub use storage::AssetStorage;
