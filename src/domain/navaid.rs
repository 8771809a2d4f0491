use super::coords::Coords;

/// Exclusive upper bound for navaid kind codes
pub const MAX_NAVAID_CODE: u8 = 14;

/// Named navaid kinds from the navigation data file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavaidType {
    /// Non-directional beacon
    Ndb,
    Vor,
    /// Localizer, part of a full ILS
    Localizer,
    /// Localizer-only approach (no glideslope)
    LocalizerOnly,
    Glideslope,
    OuterMarker,
    MiddleMarker,
    InnerMarker,
    Dme,
    /// Standalone or NDB-associated DME
    DmeOnly,
}

impl NavaidType {
    /// Map a raw kind code to a named kind
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            2 => Some(Self::Ndb),
            3 => Some(Self::Vor),
            4 => Some(Self::Localizer),
            5 => Some(Self::LocalizerOnly),
            6 => Some(Self::Glideslope),
            7 => Some(Self::OuterMarker),
            8 => Some(Self::MiddleMarker),
            9 => Some(Self::InnerMarker),
            12 => Some(Self::Dme),
            13 => Some(Self::DmeOnly),
            _ => None,
        }
    }

    /// Raw kind code as it appears in the data file
    pub fn code(self) -> u8 {
        match self {
            Self::Ndb => 2,
            Self::Vor => 3,
            Self::Localizer => 4,
            Self::LocalizerOnly => 5,
            Self::Glideslope => 6,
            Self::OuterMarker => 7,
            Self::MiddleMarker => 8,
            Self::InnerMarker => 9,
            Self::Dme => 12,
            Self::DmeOnly => 13,
        }
    }

    /// Check whether a raw code lies in the accepted range `(0, MAX_NAVAID_CODE)`
    pub fn is_valid_code(code: i64) -> bool {
        code > 0 && code < i64::from(MAX_NAVAID_CODE)
    }
}

/// A navigation aid parsed from one line of the navaid catalogue
#[derive(Debug, Clone, PartialEq)]
pub struct Navaid {
    /// Raw kind code, always within `(0, MAX_NAVAID_CODE)`
    pub type_code: u8,
    pub pos: Coords,
    /// Feet above mean sea level
    pub elevation: i64,
    /// Hundredths of MHz, or KHz for beacons
    pub frequency: i64,
    /// Nautical miles
    pub range: i64,
    /// Slaved variation, bearing or bias depending on kind
    pub variation: f64,
    pub identifier: String,
    /// Trailing free-form tokens (ILS component details, names)
    pub extra: Vec<String>,
}

impl Navaid {
    /// Named kind, if the code is one of the documented ones
    pub fn kind(&self) -> Option<NavaidType> {
        NavaidType::from_code(self.type_code)
    }
}
