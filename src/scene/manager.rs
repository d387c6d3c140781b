use std::path::{Path, PathBuf};

use rustc_hash::FxHashMap;
use slotmap::{SlotMap, new_key_type};

use crate::assets::AssetServer;
use crate::audit::{OpenSceneMode, SceneHost, SceneSetup};
use crate::errors::{AuditError, Result};
use crate::scene::Scene;
use crate::scene::document::SceneDocument;

new_key_type! {
    pub struct SceneHandle;
}

#[derive(Debug, Clone)]
struct OpenScene {
    path: PathBuf,
    /// `None` while the scene is listed but unloaded
    handle: Option<SceneHandle>,
    is_active: bool,
}

/// Owns the open scenes and loads scene documents on request.
///
/// Documents are looked up in the in-memory registry first, then on disk.
/// All scenes share one [`AssetServer`], so asset identity holds across
/// every scene this manager opens.
pub struct SceneManager {
    assets: AssetServer,
    scenes: SlotMap<SceneHandle, Scene>,
    open: Vec<OpenScene>,
    registry: FxHashMap<PathBuf, SceneDocument>,
}

impl Default for SceneManager {
    fn default() -> Self {
        Self::new(AssetServer::new())
    }
}

impl SceneManager {
    #[must_use]
    pub fn new(assets: AssetServer) -> Self {
        Self {
            assets,
            scenes: SlotMap::with_key(),
            open: Vec::new(),
            registry: FxHashMap::default(),
        }
    }

    #[inline]
    #[must_use]
    pub fn assets(&self) -> &AssetServer {
        &self.assets
    }

    /// Registers an in-memory document under `path`. It shadows any file at
    /// the same path.
    pub fn insert_document(&mut self, path: impl Into<PathBuf>, document: SceneDocument) {
        self.registry.insert(path.into(), document);
    }

    fn load_document(&self, path: &Path) -> Result<SceneDocument> {
        if let Some(doc) = self.registry.get(path) {
            return Ok(doc.clone());
        }
        if !path.is_file() {
            return Err(AuditError::SceneNotFound(path.display().to_string()));
        }
        SceneDocument::load(path)
    }

    fn load_scene(&mut self, path: &Path) -> Result<SceneHandle> {
        let doc = self.load_document(path)?;
        let scene = doc.instantiate(&self.assets);
        log::debug!("Loaded scene '{}' ({} nodes)", path.display(), scene.node_count());
        Ok(self.scenes.insert(scene))
    }

    fn close_all(&mut self) {
        self.scenes.clear();
        self.open.clear();
    }

    // ========================================================================
    // Queries
    // ========================================================================

    #[must_use]
    pub fn get_scene(&self, handle: SceneHandle) -> Option<&Scene> {
        self.scenes.get(handle)
    }

    #[must_use]
    pub fn active_scene(&self) -> Option<&Scene> {
        self.open
            .iter()
            .find(|s| s.is_active)
            .and_then(|s| s.handle)
            .and_then(|h| self.scenes.get(h))
    }

    #[must_use]
    pub fn active_path(&self) -> Option<&Path> {
        self.open
            .iter()
            .find(|s| s.is_active)
            .map(|s| s.path.as_path())
    }

    /// Paths of every listed scene, loaded or not, in open order.
    pub fn open_paths(&self) -> impl Iterator<Item = &Path> {
        self.open.iter().map(|s| s.path.as_path())
    }

    #[inline]
    #[must_use]
    pub fn loaded_count(&self) -> usize {
        self.scenes.len()
    }
}

impl SceneHost for SceneManager {
    fn scene_exists(&self, path: &Path) -> bool {
        self.registry.contains_key(path) || path.is_file()
    }

    fn open_scene(&mut self, path: &Path, mode: OpenSceneMode) -> Result<&Scene> {
        // Load before touching the current setup so a failure leaves it intact.
        let doc = self.load_document(path)?;

        if mode == OpenSceneMode::Single {
            self.close_all();
        }

        let scene = doc.instantiate(&self.assets);
        let handle = self.scenes.insert(scene);
        let is_active = !self.open.iter().any(|s| s.is_active);
        self.open.push(OpenScene {
            path: path.to_path_buf(),
            handle: Some(handle),
            is_active,
        });

        Ok(&self.scenes[handle])
    }

    fn setup(&self) -> Vec<SceneSetup> {
        self.open
            .iter()
            .map(|s| SceneSetup {
                path: s.path.clone(),
                is_loaded: s.handle.is_some(),
                is_active: s.is_active,
            })
            .collect()
    }

    fn restore_setup(&mut self, setup: &[SceneSetup]) {
        self.close_all();

        for entry in setup {
            let handle = if entry.is_loaded {
                match self.load_scene(&entry.path) {
                    Ok(handle) => Some(handle),
                    Err(e) => {
                        log::warn!("Failed to restore scene '{}': {e}", entry.path.display());
                        None
                    }
                }
            } else {
                None
            };

            self.open.push(OpenScene {
                path: entry.path.clone(),
                handle,
                is_active: entry.is_active && handle.is_some(),
            });
        }
    }
}
