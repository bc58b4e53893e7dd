//! Shared path → buffer store.
//!
//! Owns every stored byte. Handles delegate all storage here and keep
//! only cursor state; the store knows nothing about handles or modes.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::error::{StreamError, StreamResult};
use crate::types::Stat;

/// Process-wide mapping from path to byte buffer.
///
/// Cheap to clone: clones share one underlying map, so a store handed
/// to several handles (or bound to several schemes) is a single
/// buffer space. The map is guarded by an `RwLock` for multi-threaded
/// hosts; each operation is atomic, sequences of operations are not.
#[derive(Debug, Clone, Default)]
pub struct BufferStore {
    buffers: Arc<RwLock<HashMap<String, Vec<u8>>>>,
}

impl BufferStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// True if the path has a buffer (possibly empty).
    pub fn exists(&self, path: &str) -> bool {
        self.buffers.read().contains_key(path)
    }

    /// Copy out the buffer for a path.
    pub fn get(&self, path: &str) -> StreamResult<Vec<u8>> {
        self.buffers
            .read()
            .get(path)
            .cloned()
            .ok_or_else(|| StreamError::not_found(path))
    }

    /// Create or replace the buffer for a path wholesale.
    pub fn set(&self, path: impl Into<String>, bytes: Vec<u8>) {
        self.buffers.write().insert(path.into(), bytes);
    }

    /// Remove the buffer for a path.
    ///
    /// Returns `false` if the path had no buffer.
    pub fn delete(&self, path: &str) -> bool {
        self.buffers.write().remove(path).is_some()
    }

    /// Rebind the buffer at `from` to `to`, silently overwriting any
    /// buffer already at `to`.
    ///
    /// Returns `false` (and changes nothing) if `from` has no buffer.
    pub fn rename(&self, from: &str, to: impl Into<String>) -> bool {
        let mut buffers = self.buffers.write();
        match buffers.remove(from) {
            Some(buf) => {
                buffers.insert(to.into(), buf);
                true
            }
            None => false,
        }
    }

    /// Buffer length for a path, without copying the bytes.
    pub fn size(&self, path: &str) -> Option<usize> {
        self.buffers.read().get(path).map(Vec::len)
    }

    /// Path-only stat lookup.
    pub fn stat(&self, path: &str) -> StreamResult<Stat> {
        self.size(path)
            .map(Stat::of_len)
            .ok_or_else(|| StreamError::not_found(path))
    }

    /// Number of stored buffers.
    pub fn len(&self) -> usize {
        self.buffers.read().len()
    }

    /// True if no buffers are stored.
    pub fn is_empty(&self) -> bool {
        self.buffers.read().is_empty()
    }

    /// True if two store values share the same underlying map.
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Arc::ptr_eq(&a.buffers, &b.buffers)
    }
}
