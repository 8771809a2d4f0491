//! Readers for gzip-compressed navigation aid and airport catalogues.
//!
//! Lines are parsed into typed records and delivered either through a
//! multiplexed item stream fed by concurrent readers, or pushed directly to
//! an [`Observer`](streaming::Observer) for a single source.

pub mod app;
pub mod domain;
pub mod io;
pub mod prelude;
pub mod streaming;
