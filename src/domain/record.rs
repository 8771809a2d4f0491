use super::airport::{Airport, Runway};
use super::navaid::Navaid;

/// A record produced by parsing one catalogue line
#[derive(Debug, Clone, PartialEq)]
pub enum Record {
    Navaid(Navaid),
    Airport(Airport),
    Runway(Runway),
}

impl Record {
    /// Short name of the record kind, used in log fields
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Navaid(_) => "navaid",
            Self::Airport(_) => "airport",
            Self::Runway(_) => "runway",
        }
    }
}

impl From<Navaid> for Record {
    fn from(navaid: Navaid) -> Self {
        Self::Navaid(navaid)
    }
}

impl From<Airport> for Record {
    fn from(airport: Airport) -> Self {
        Self::Airport(airport)
    }
}

impl From<Runway> for Record {
    fn from(runway: Runway) -> Self {
        Self::Runway(runway)
    }
}
