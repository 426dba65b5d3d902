//! Per-event-type field layouts, grouped by bus family, plus the
//! application/system markers in `app`.
//!
//! Each module defines its variants' fixed fields and `read`/`write`/`body_len`
//! methods; the catalogue (`crate::catalogue`) owns the tagged union over all
//! of them and the tag-to-decoder dispatch.

#![allow(ambiguous_glob_reexports)]

pub mod afdx;
pub mod app;
pub mod arinc429;
pub mod can;
pub mod ethernet;
pub mod flexray;
pub mod lin;
pub mod misc_bus;
pub mod most;

pub use afdx::*;
pub use app::*;
pub use arinc429::*;
pub use can::*;
pub use ethernet::*;
pub use flexray::*;
pub use lin::*;
pub use misc_bus::*;
pub use most::*;
