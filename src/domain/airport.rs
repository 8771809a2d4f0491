use super::coords::Coords;

/// Airport header record
///
/// The source format carries no airport position; derive one from the
/// runways that follow the header (see [`Runway::center`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Airport {
    pub code: String,
    pub name: String,
    /// Feet above mean sea level
    pub elevation: i64,
}

/// One end of a runway
#[derive(Debug, Clone, PartialEq)]
pub struct RunwayEnd {
    /// Runway number as painted, e.g. `09L`
    pub code: String,
    pub pos: Coords,
    /// Meters
    pub displaced_threshold: f64,
}

/// A land runway with its two opposing ends
#[derive(Debug, Clone, PartialEq)]
pub struct Runway {
    /// Meters
    pub width: f64,
    pub ends: [RunwayEnd; 2],
}

impl Runway {
    /// Midpoint between the two runway thresholds
    pub fn center(&self) -> Coords {
        self.ends[0].pos.midpoint(&self.ends[1].pos)
    }

    /// Runway designator such as `18R/36L`
    pub fn designator(&self) -> String {
        format!("{}/{}", self.ends[0].code, self.ends[1].code)
    }
}
