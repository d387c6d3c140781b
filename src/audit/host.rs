//! Scene host abstraction.
//!
//! The auditor never owns scenes. It asks a [`SceneHost`] to open them one
//! at a time and puts the host's open-scene setup back when it is done,
//! through [`SetupGuard`].

use std::ops::{Deref, DerefMut};
use std::path::{Path, PathBuf};

use crate::errors::Result;
use crate::scene::Scene;

/// How a scene is opened relative to the scenes already open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OpenSceneMode {
    /// Close every open scene first
    #[default]
    Single,
    /// Open alongside the current scenes
    Additive,
}

/// One entry of a host's open-scene configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SceneSetup {
    pub path: PathBuf,
    pub is_loaded: bool,
    pub is_active: bool,
}

/// Editor-side scene management used by the auditor.
pub trait SceneHost {
    /// Whether a scene file backs `path`.
    fn scene_exists(&self, path: &Path) -> bool;

    /// Loads `path` synchronously. On error the current setup is unchanged.
    fn open_scene(&mut self, path: &Path, mode: OpenSceneMode) -> Result<&Scene>;

    /// Snapshot of the currently open scenes.
    fn setup(&self) -> Vec<SceneSetup>;

    /// Replaces the open scenes with `setup`.
    fn restore_setup(&mut self, setup: &[SceneSetup]);
}

/// Holds a host for the duration of a run and restores its open-scene
/// setup when dropped, including on early return and unwinding.
pub struct SetupGuard<'a, H: SceneHost + ?Sized> {
    host: &'a mut H,
    saved: Vec<SceneSetup>,
}

impl<'a, H: SceneHost + ?Sized> SetupGuard<'a, H> {
    pub fn new(host: &'a mut H) -> Self {
        let saved = host.setup();
        Self { host, saved }
    }
}

impl<H: SceneHost + ?Sized> Deref for SetupGuard<'_, H> {
    type Target = H;

    fn deref(&self) -> &H {
        self.host
    }
}

impl<H: SceneHost + ?Sized> DerefMut for SetupGuard<'_, H> {
    fn deref_mut(&mut self) -> &mut H {
        self.host
    }
}

impl<H: SceneHost + ?Sized> Drop for SetupGuard<'_, H> {
    fn drop(&mut self) {
        log::debug!("Restoring {} previously open scene(s)", self.saved.len());
        self.host.restore_setup(&self.saved);
    }
}
