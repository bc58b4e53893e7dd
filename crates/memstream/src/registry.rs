//! Scheme registry: routes `scheme://path` URLs to buffer stores.
//!
//! This is the crate's host-integration seam. A host registers a
//! scheme, then funnels its own stream API through the registry —
//! open becomes the handle factory, stat/unlink/rename address
//! buffers by URL. Everything after open happens on the returned
//! [`StreamHandle`].

use std::collections::HashMap;

use parking_lot::RwLock;

use crate::error::{StreamError, StreamResult};
use crate::handle::StreamHandle;
use crate::store::BufferStore;
use crate::types::Stat;

/// Scheme → store routing table.
///
/// Each scheme is bound to one [`BufferStore`]; binding the same
/// store under several schemes makes those schemes one shared buffer
/// space.
#[derive(Debug, Default)]
pub struct SchemeRegistry {
    schemes: RwLock<HashMap<String, BufferStore>>,
}

impl SchemeRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a fresh store to `scheme`, replacing any previous
    /// binding, and return a clone of it so the host can reach the
    /// buffer space without going through URLs.
    pub fn register(&self, scheme: impl Into<String>) -> BufferStore {
        let store = BufferStore::new();
        self.register_store(scheme, store.clone());
        store
    }

    /// Bind an existing store to `scheme`, replacing any previous
    /// binding.
    pub fn register_store(&self, scheme: impl Into<String>, store: BufferStore) {
        let scheme = scheme.into();
        tracing::debug!(scheme = %scheme, "scheme registered");
        self.schemes.write().insert(scheme, store);
    }

    /// Drop the binding for `scheme`.
    ///
    /// Returns `true` iff a binding was removed. The buffers go away
    /// with it unless the caller kept a store clone.
    pub fn unregister(&self, scheme: &str) -> bool {
        let removed = self.schemes.write().remove(scheme).is_some();
        if removed {
            tracing::debug!(scheme = %scheme, "scheme unregistered");
        }
        removed
    }

    /// Store bound to `scheme`, if any.
    pub fn store(&self, scheme: &str) -> Option<BufferStore> {
        self.schemes.read().get(scheme).cloned()
    }

    /// All registered scheme names, sorted.
    pub fn schemes(&self) -> Vec<String> {
        let mut names: Vec<_> = self.schemes.read().keys().cloned().collect();
        names.sort();
        names
    }

    /// Open a stream handle for a `scheme://path` URL.
    ///
    /// The handle factory of the host contract: routing failures are
    /// [`StreamError::UnknownScheme`] / [`StreamError::InvalidUrl`],
    /// everything else follows [`StreamHandle::open`].
    pub fn open(&self, url: &str, mode: &str) -> StreamResult<StreamHandle> {
        let (store, path) = self.route(url)?;
        StreamHandle::open(&store, path, mode)
    }

    /// Path-only stat by URL.
    pub fn stat(&self, url: &str) -> StreamResult<Stat> {
        let (store, path) = self.route(url)?;
        store.stat(path)
    }

    /// True if the URL names an existing buffer under a registered
    /// scheme.
    pub fn exists(&self, url: &str) -> bool {
        self.route(url)
            .map(|(store, path)| store.exists(path))
            .unwrap_or(false)
    }

    /// Delete the buffer named by the URL.
    ///
    /// Returns `false` if there was nothing to delete — including a
    /// URL that does not route (unknown scheme, no `://`).
    pub fn unlink(&self, url: &str) -> bool {
        match self.route(url) {
            Ok((store, path)) => store.delete(path),
            Err(_) => false,
        }
    }

    /// Rebind a buffer from one URL to another.
    ///
    /// Returns `false` if the source is absent, either URL does not
    /// route, or the URLs resolve to different stores — buffers never
    /// move between buffer spaces. An existing destination is
    /// overwritten silently.
    pub fn rename(&self, from_url: &str, to_url: &str) -> bool {
        let (Ok((from_store, from_path)), Ok((to_store, to_path))) =
            (self.route(from_url), self.route(to_url))
        else {
            return false;
        };
        if !BufferStore::ptr_eq(&from_store, &to_store) {
            return false;
        }
        from_store.rename(from_path, to_path)
    }

    /// Split `scheme://path` and resolve the scheme's store.
    fn route<'a>(&self, url: &'a str) -> StreamResult<(BufferStore, &'a str)> {
        let (scheme, path) = url
            .split_once("://")
            .ok_or_else(|| StreamError::invalid_url(url))?;
        let store = self
            .schemes
            .read()
            .get(scheme)
            .cloned()
            .ok_or_else(|| StreamError::unknown_scheme(scheme))?;
        Ok((store, path))
    }
}
