pub mod error;
pub mod parse;
pub mod reader;

// Re-export commonly used types
pub use error::SourceError;
pub use parse::{EntryCode, SourceFormat, parse_airport_line, parse_navaid};
pub use reader::{ReadStats, SourceReader};
