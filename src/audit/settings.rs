//! Audit configuration.
//!
//! [`AuditSettings`] tunes how a run behaves; [`BuildSettings`] is the
//! ordered scene list the run walks. Both load from JSON:
//!
//! ```json
//! { "skip_disabled_scenes": true, "log_summary": false }
//! ```
//!
//! ```json
//! { "scenes": [ { "path": "Assets/Scenes/Main.scene" },
//!               { "path": "Assets/Scenes/Old.scene", "enabled": false } ] }
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::Result;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuditSettings {
    /// Skip build-list entries marked as disabled. Off by default: every
    /// listed scene is audited.
    pub skip_disabled_scenes: bool,
    /// Log the project-wide totals at `info` when a run finishes.
    pub log_summary: bool,
}

impl Default for AuditSettings {
    fn default() -> Self {
        Self {
            skip_disabled_scenes: false,
            log_summary: true,
        }
    }
}

impl AuditSettings {
    #[must_use]
    pub fn with_skip_disabled_scenes(mut self, skip: bool) -> Self {
        self.skip_disabled_scenes = skip;
        self
    }

    #[must_use]
    pub fn with_log_summary(mut self, log_summary: bool) -> Self {
        self.log_summary = log_summary;
        self
    }

    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_json(&std::fs::read_to_string(path)?)
    }
}

fn enabled_by_default() -> bool {
    true
}

/// One entry of the build scene list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildScene {
    pub path: PathBuf,
    #[serde(default = "enabled_by_default")]
    pub enabled: bool,
}

impl BuildScene {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            enabled: true,
        }
    }

    #[must_use]
    pub fn disabled(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            enabled: false,
        }
    }
}

/// Ordered list of scenes included in the build.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildSettings {
    pub scenes: Vec<BuildScene>,
}

impl BuildSettings {
    #[must_use]
    pub fn from_paths<I, P>(paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            scenes: paths.into_iter().map(BuildScene::new).collect(),
        }
    }

    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_json(&std::fs::read_to_string(path)?)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.scenes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }
}
