pub mod airport;
pub mod coords;
pub mod navaid;
pub mod record;

// Re-export commonly used types
pub use airport::{Airport, Runway, RunwayEnd};
pub use coords::Coords;
pub use navaid::{MAX_NAVAID_CODE, Navaid, NavaidType};
pub use record::Record;
