//! Ports for outbound effects used by app backends.

use std::io;
use std::path::Path;

/// Filesystem operations the ROM backends need, narrow enough for tests to
/// substitute an in-memory implementation.
///
/// Paths are relative to the storage root the adapter was opened on.
pub trait RomStorage: Send + Sync {
    /// Create `path` and its parents if absent; report whether it was freshly
    /// created. Creation is idempotent, so a concurrent create by another
    /// request is not an error.
    fn ensure_dir(&self, path: &Path) -> io::Result<bool>;

    /// Entry names directly under `path`, in directory order.
    fn list_dir(&self, path: &Path) -> io::Result<Vec<String>>;
}
