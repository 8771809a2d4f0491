use crate::domain::{Airport, Navaid, Record, Runway};
use crate::io::SourceError;

/// One item on the shared multiplexed channel
///
/// `Error` and `Terminator` are terminal: each source emits exactly one of
/// them, after all of its records.
#[derive(Debug)]
pub enum StreamItem {
    Navaid(Navaid),
    Airport(Airport),
    Runway(Runway),
    Error(SourceError),
    Terminator,
}

impl StreamItem {
    /// Whether this item ends its source
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Error(_) | Self::Terminator)
    }
}

impl From<Record> for StreamItem {
    fn from(record: Record) -> Self {
        match record {
            Record::Navaid(navaid) => Self::Navaid(navaid),
            Record::Airport(airport) => Self::Airport(airport),
            Record::Runway(runway) => Self::Runway(runway),
        }
    }
}

impl From<SourceError> for StreamItem {
    fn from(error: SourceError) -> Self {
        Self::Error(error)
    }
}
