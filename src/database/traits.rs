//! Storage abstraction for the recent-files list

use crate::errors::AppResult;
use crate::types::FileDescriptor;

/// Most-recent-first list of encoded and exported files
///
/// Implementations cap the list at their capacity, evicting the oldest
/// entry, and move an existing entry with the same name to the front rather
/// than duplicating it.
pub trait RecentFilesStore {
    /// Record a file at the front of the list
    fn add(&mut self, descriptor: FileDescriptor) -> AppResult<()>;

    /// Current entries, most recent first
    fn list(&self) -> &[FileDescriptor];

    /// Maximum number of entries kept
    fn capacity(&self) -> usize;
}

impl<T: RecentFilesStore + ?Sized> RecentFilesStore for Box<T> {
    fn add(&mut self, descriptor: FileDescriptor) -> AppResult<()> {
        (**self).add(descriptor)
    }

    fn list(&self) -> &[FileDescriptor] {
        (**self).list()
    }

    fn capacity(&self) -> usize {
        (**self).capacity()
    }
}

/// Insert at the front, dropping any same-named entry and anything past `capacity`
pub(crate) fn push_front(
    entries: &mut Vec<FileDescriptor>,
    descriptor: FileDescriptor,
    capacity: usize,
) {
    entries.retain(|existing| existing.name != descriptor.name);
    entries.insert(0, descriptor);
    entries.truncate(capacity);
}
