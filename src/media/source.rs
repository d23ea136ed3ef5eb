// SPDX-License-Identifier: MPL-2.0
//! Transient handle to the currently selected image file.
//!
//! At most one handle is live at a time. Acquiring a new handle always
//! releases the previous one first, and decode results are matched against
//! the live handle id so a superseded load can never reach the surfaces.

use std::path::{Path, PathBuf};

/// Identifier of an acquired source handle. Ids increase monotonically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SourceId(u64);

/// A live reference to the selected file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceHandle {
    id: SourceId,
    path: PathBuf,
    name: String,
}

impl SourceHandle {
    #[must_use]
    pub fn id(&self) -> SourceId {
        self.id
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File name shown in the status label.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Owner of the single active source handle.
#[derive(Debug, Default)]
pub struct SourceSlot {
    active: Option<SourceHandle>,
    next_id: u64,
    acquired_total: u64,
    released_total: u64,
    last_released: Option<SourceId>,
}

impl SourceSlot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Releases the current handle (if any), then acquires one for `path`.
    pub fn acquire(&mut self, path: PathBuf) -> SourceHandle {
        self.release();

        let id = SourceId(self.next_id);
        self.next_id += 1;

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string_lossy().into_owned());

        let handle = SourceHandle { id, path, name };
        log::debug!("Acquired source {:?} for {}", id, handle.path.display());

        self.acquired_total += 1;
        self.active = Some(handle.clone());
        handle
    }

    /// Releases the active handle and returns it.
    pub fn release(&mut self) -> Option<SourceHandle> {
        let handle = self.active.take()?;
        self.released_total += 1;
        self.last_released = Some(handle.id);
        log::debug!("Released source {:?}", handle.id);
        Some(handle)
    }

    #[must_use]
    pub fn active(&self) -> Option<&SourceHandle> {
        self.active.as_ref()
    }

    /// Whether `id` is the live handle.
    #[must_use]
    pub fn is_active(&self, id: SourceId) -> bool {
        self.active.as_ref().is_some_and(|h| h.id == id)
    }

    /// Handles acquired but not yet released. Never exceeds one.
    #[must_use]
    pub fn live_count(&self) -> u64 {
        self.acquired_total - self.released_total
    }

    #[must_use]
    pub fn released_total(&self) -> u64 {
        self.released_total
    }

    #[must_use]
    pub fn last_released(&self) -> Option<SourceId> {
        self.last_released
    }
}
