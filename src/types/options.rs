//! Builder-style options for opening the local media store.

use std::path::PathBuf;

/// Tunable options for [`crate::store::MediaStore::open_with`].
#[derive(Debug, Clone)]
pub struct StoreOptions {
    /// Directory the store lives in. Created if absent.
    pub root: PathBuf,
    /// Verify the slot's BLAKE3 checksum on read. A mismatch is treated as
    /// external eviction: logged and reported as a cache miss, never an
    /// error.
    pub verify_checksums: bool,
}

impl StoreOptions {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            verify_checksums: true,
        }
    }

    pub fn builder(root: impl Into<PathBuf>) -> StoreOptionsBuilder {
        StoreOptionsBuilder {
            options: Self::new(root),
        }
    }
}

#[derive(Debug, Clone)]
pub struct StoreOptionsBuilder {
    options: StoreOptions,
}

impl StoreOptionsBuilder {
    pub fn verify_checksums(mut self, verify: bool) -> Self {
        self.options.verify_checksums = verify;
        self
    }

    pub fn build(self) -> StoreOptions {
        self.options
    }
}
