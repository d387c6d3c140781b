//! Scene asset-usage auditing.
//!
//! - [`SceneStatsCollector`]: one-pass, identity-deduplicated statistics for a scene
//! - [`ScenesAuditor`]: walks the build scene list and aggregates project totals
//! - [`SceneHost`]: what the auditor needs from the editor's scene management
//! - Issue types consumed by the reporting surface

pub mod auditor;
pub mod collector;
pub mod host;
pub mod issue;
pub mod progress;
pub mod scenes;
pub mod settings;
pub mod stats;

pub use auditor::Auditor;
pub use collector::SceneStatsCollector;
pub use host::{OpenSceneMode, SceneHost, SceneSetup, SetupGuard};
pub use issue::{
    IssueCategory, IssueLayout, ProblemDescriptor, ProjectIssue, PropertyDefinition,
    PropertyFormat, PropertyType,
};
pub use progress::{LogProgressBar, ProgressBar};
pub use scenes::{AuditSummary, SCENE_STATS, ScenesAuditor};
pub use settings::{AuditSettings, BuildScene, BuildSettings};
pub use stats::{AssetUsageStats, SceneProperty};
