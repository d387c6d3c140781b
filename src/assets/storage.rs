use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use slotmap::{Key, SlotMap};
use std::sync::Arc;
use uuid::Uuid;

// Internal data structure, protected by a lock.
struct StorageInner<H: Key, T> {
    map: SlotMap<H, Arc<T>>,
    lookup: FxHashMap<Uuid, H>,
}

impl<H: Key, T> Default for StorageInner<H, T> {
    fn default() -> Self {
        Self {
            map: SlotMap::default(),
            lookup: FxHashMap::default(),
        }
    }
}

/// Thread-safe, handle-keyed asset table.
///
/// Every `add` produces a fresh handle, so two assets with identical data
/// are two entries. `upsert_with_uuid` deduplicates by GUID:
/// assets loaded from files carry a stable GUID and resolve to one handle
/// no matter how many scene files reference them.
pub struct AssetStorage<H: Key, T> {
    inner: RwLock<StorageInner<H, T>>,
}

impl<H: Key, T> Default for AssetStorage<H, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: Key, T> AssetStorage<H, T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: RwLock::default(),
        }
    }

    /// [Write] Adds an asset and returns a new handle.
    pub fn add(&self, asset: impl Into<T>) -> H {
        let mut guard = self.inner.write();
        guard.map.insert(Arc::new(asset.into()))
    }

    /// [Write] Adds or replaces the asset keyed by `uuid`. A known GUID keeps
    /// its handle; only the stored value changes.
    pub fn upsert_with_uuid(&self, uuid: Uuid, asset: impl Into<T>) -> H {
        let asset = Arc::new(asset.into());
        let mut guard = self.inner.write();
        let existing = guard.lookup.get(&uuid).copied();
        if let Some(handle) = existing
            && let Some(slot) = guard.map.get_mut(handle)
        {
            *slot = asset;
            return handle;
        }
        let handle = guard.map.insert(asset);
        guard.lookup.insert(uuid, handle);
        handle
    }

    /// [Read] Gets a single asset.
    pub fn get(&self, handle: H) -> Option<Arc<T>> {
        let guard = self.inner.read();
        guard.map.get(handle).cloned()
    }

    pub fn get_by_uuid(&self, uuid: &Uuid) -> Option<Arc<T>> {
        let guard = self.inner.read();
        let handle = guard.lookup.get(uuid)?;
        guard.map.get(*handle).cloned()
    }

    pub fn get_handle_by_uuid(&self, uuid: &Uuid) -> Option<H> {
        let guard = self.inner.read();
        guard.lookup.get(uuid).copied()
    }

    #[must_use]
    pub fn contains(&self, handle: H) -> bool {
        self.inner.read().map.contains_key(handle)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.read().map.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
