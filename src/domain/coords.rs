/// Geographic position in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Coords {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coords {
    /// Create a new position
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Arithmetic midpoint between two positions
    ///
    /// Adequate for the short distances between runway thresholds; not a
    /// great-circle midpoint.
    pub fn midpoint(&self, other: &Coords) -> Coords {
        Coords {
            latitude: (self.latitude + other.latitude) / 2.0,
            longitude: (self.longitude + other.longitude) / 2.0,
        }
    }
}
