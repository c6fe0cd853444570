//! Application state for the staffing engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::directory::Directory;

/// Shared application state.
///
/// Holds the staff directory behind a read-write lock. Unlike
/// configuration, the directory is mutated by the CRUD handlers, so
/// readers take a shared guard and writers an exclusive one. Guards are
/// only held for the duration of a single store operation; the
/// allocation handler clones a snapshot out and releases the lock before
/// any selection work runs.
#[derive(Clone)]
pub struct AppState {
    directory: Arc<RwLock<Directory>>,
}

impl AppState {
    /// Creates a new application state around the given directory.
    pub fn new(directory: Directory) -> Self {
        Self {
            directory: Arc::new(RwLock::new(directory)),
        }
    }

    /// Returns a shared guard over the directory.
    pub fn directory(&self) -> RwLockReadGuard<'_, Directory> {
        self.directory.read().expect("directory lock poisoned")
    }

    /// Returns an exclusive guard over the directory.
    pub fn directory_mut(&self) -> RwLockWriteGuard<'_, Directory> {
        self.directory.write().expect("directory lock poisoned")
    }
}
