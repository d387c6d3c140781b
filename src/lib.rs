#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod assets;
pub mod audit;
pub mod errors;
pub mod resources;
pub mod scene;
pub mod utils;

pub use assets::{AssetServer, MaterialHandle, PrefabHandle, ShaderHandle, TextureHandle};
pub use audit::{
    AssetUsageStats, AuditSettings, Auditor, BuildSettings, SceneHost, SceneProperty,
    SceneStatsCollector, ScenesAuditor,
};
pub use errors::{AuditError, Result};
pub use resources::{Geometry, Material, Shader, Texture};
pub use scene::{Node, Scene, SceneDocument, SceneManager};
pub use utils::interner;
