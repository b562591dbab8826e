//! Store configuration.

/// Configuration for opening a file-backed record store.
#[derive(Debug, Clone)]
pub struct Config {
    /// Whether to fsync the new file and its directory on every write
    /// (safer but slower).
    pub sync_on_write: bool,

    /// Whether to create missing parent directories of the record file.
    pub create_parent_dirs: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sync_on_write: true,
            create_parent_dirs: false,
        }
    }
}

impl Config {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether to sync on every write.
    #[must_use]
    pub const fn sync_on_write(mut self, value: bool) -> Self {
        self.sync_on_write = value;
        self
    }

    /// Sets whether to create missing parent directories.
    #[must_use]
    pub const fn create_parent_dirs(mut self, value: bool) -> Self {
        self.create_parent_dirs = value;
        self
    }
}
