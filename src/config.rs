//! Writer configuration knobs.

/// Default target size, in uncompressed bytes, of one emitted `LogContainer`.
pub const DEFAULT_LOG_CONTAINER_SIZE: u32 = 0x0002_0000; // 128 KiB

/// Default zlib compression level (0 = store, 1-9 = deflate).
pub const DEFAULT_COMPRESSION_LEVEL: u32 = 6;

/// Groups the writer-side knobs named in the public interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlfConfig {
    /// zlib compression level; 0 stores containers uncompressed.
    pub compression_level: u32,
    /// Target uncompressed size of each container before it is flushed.
    pub default_log_container_size: u32,
    /// Whether to append the `Unknown115` sentinel object on close.
    pub write_unknown115: bool,
}

impl Default for BlfConfig {
    fn default() -> Self {
        Self {
            compression_level: DEFAULT_COMPRESSION_LEVEL,
            default_log_container_size: DEFAULT_LOG_CONTAINER_SIZE,
            write_unknown115: true,
        }
    }
}
