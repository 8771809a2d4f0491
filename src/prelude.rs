//! Prelude module for convenient imports
//!
//! Import everything you need with: `use navdat::prelude::*;`

// Domain types
pub use crate::domain::{
    Airport, Coords, MAX_NAVAID_CODE, Navaid, NavaidType, Record, Runway, RunwayEnd,
};

// IO types
pub use crate::io::{ReadStats, SourceError, SourceFormat, SourceReader};

// Streaming types
pub use crate::streaming::{MultiplexedStream, Observer, SourceMultiplexer, StreamItem, observe};

// App types
pub use crate::app::{AppError, CliApp, init_tracing};
