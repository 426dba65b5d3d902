//! The crate's single error type.

use thiserror::Error;

/// Everything that can go wrong reading or writing a BLF file.
#[derive(Error, Debug)]
pub enum BlfError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("bad signature: expected {expected:#010x}, found {found:#010x}")]
    BadSignature { expected: u32, found: u32 },

    #[error("expected a LogContainer object at the top level, found object type {0}")]
    ContainerExpected(u32),

    #[error("zlib (de)compression failed: {0}")]
    Compression(String),

    #[error("truncated: needed {needed} more byte(s), {available} available")]
    Truncated { needed: usize, available: usize },

    #[error("object payload length ({declared}) exceeds remaining object size ({remaining})")]
    TruncatedPayload { declared: usize, remaining: usize },

    #[error("buffer overflow: tried to write {needed} byte(s) into {available}")]
    BufferOverflow { needed: usize, available: usize },

    /// Reserved for a strict dispatch mode that rejects unrecognised tags outright.
    /// The default catalogue dispatch skips unrecognised tags instead of raising this.
    #[error("unrecognised object type tag: {0}")]
    UnknownType(u32),

    #[error("operation requires the file to be open in {expected} mode")]
    WrongMode { expected: &'static str },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, BlfError>;
