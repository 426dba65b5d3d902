//! Reader/writer for the Vector BLF (Binary Logging Format) bus logging
//! container format.
//!
//! A BLF file is a fixed 144-byte [`FileStatistics`] header followed by a
//! sequence of zlib-compressed [`LogContainer`]s; inflating them yields a
//! stream of self-describing, length-prefixed [`Event`] objects. [`BlfFile`]
//! is the public facade: it owns the two-stage buffering pipeline and
//! exposes `open`/`create`/`read`/`write`/`close`.

#![allow(dead_code)]

mod byte_fifo;
mod catalogue;
mod codec;
mod config;
mod error;
mod file;
mod file_statistics;
mod header;
mod log_container;
mod object_type;
mod objects;

pub use catalogue::Event;
pub use config::BlfConfig;
pub use error::{BlfError, Result};
pub use file::BlfFile;
pub use file_statistics::{FileStatistics, SystemTime};
pub use header::{object_flags, ObjectHeader, ObjectHeaderBase};
pub use log_container::LogContainer;
pub use object_type::ObjectType;
pub use objects::*;
