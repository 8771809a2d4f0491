use std::str::FromStr;

use crate::domain::{Airport, Coords, Navaid, NavaidType, Record, Runway, RunwayEnd};

/// Tokens in a navaid line up to and including the identifier
const NAVAID_MIN_FIELDS: usize = 8;

/// Airport header lines need code plus at least one name token
const AIRPORT_MIN_FIELDS: usize = 6;

/// Fixed column count of a land runway line
const RUNWAY_FIELDS: usize = 26;

/// Offset of the first runway end block and the width of each block
const RUNWAY_END_BASE: usize = 8;
const RUNWAY_END_STRIDE: usize = 9;

/// Line format of a catalogue file, selecting which parser applies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    /// Navigation aid catalogue (`nav.dat`)
    Navaids,
    /// Airport and runway catalogue (`apt.dat`)
    Airports,
}

impl SourceFormat {
    /// Tokenize a raw line and parse it for this format
    pub fn parse_line(&self, line: &str) -> Option<Record> {
        let fields: Vec<&str> = line.split_whitespace().collect();
        self.parse_fields(&fields)
    }

    /// Parse an already tokenized line for this format
    pub fn parse_fields(&self, fields: &[&str]) -> Option<Record> {
        match self {
            Self::Navaids => parse_navaid(fields).map(Record::Navaid),
            Self::Airports => parse_airport_line(fields),
        }
    }

    /// Short name used in log fields
    pub fn name(&self) -> &'static str {
        match self {
            Self::Navaids => "navaids",
            Self::Airports => "airports",
        }
    }
}

/// Leading per-line entry code of the airport catalogue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryCode {
    AirportHeader,
    Runway,
}

impl EntryCode {
    /// Look up an entry code; codes other than these are ignored lines
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            1 => Some(Self::AirportHeader),
            100 => Some(Self::Runway),
            _ => None,
        }
    }
}

fn field<T: FromStr>(fields: &[&str], index: usize) -> Option<T> {
    fields.get(index)?.parse().ok()
}

/// Parse one navaid line
///
/// Returns `None` for short lines, kind codes outside the accepted range and
/// any numeric field that fails to parse.
pub fn parse_navaid(fields: &[&str]) -> Option<Navaid> {
    if fields.len() < NAVAID_MIN_FIELDS {
        return None;
    }

    let code: i64 = field(fields, 0)?;
    if !NavaidType::is_valid_code(code) {
        return None;
    }

    Some(Navaid {
        type_code: u8::try_from(code).ok()?,
        pos: Coords::new(field(fields, 1)?, field(fields, 2)?),
        elevation: field(fields, 3)?,
        frequency: field(fields, 4)?,
        range: field(fields, 5)?,
        variation: field(fields, 6)?,
        identifier: fields[7].to_string(),
        extra: fields[NAVAID_MIN_FIELDS..]
            .iter()
            .map(|s| s.to_string())
            .collect(),
    })
}

/// Parse one line of the airport catalogue, dispatching on its entry code
pub fn parse_airport_line(fields: &[&str]) -> Option<Record> {
    let code: i64 = field(fields, 0)?;

    match EntryCode::from_code(code)? {
        EntryCode::AirportHeader => parse_airport(fields).map(Record::Airport),
        EntryCode::Runway => parse_runway(fields).map(Record::Runway),
    }
}

/// Parse an airport header line (entry code already checked)
pub fn parse_airport(fields: &[&str]) -> Option<Airport> {
    if fields.len() < AIRPORT_MIN_FIELDS {
        return None;
    }

    Some(Airport {
        elevation: field(fields, 1)?,
        code: fields[4].to_string(),
        name: fields[5..].join(" "),
    })
}

/// Parse a land runway line (entry code already checked)
pub fn parse_runway(fields: &[&str]) -> Option<Runway> {
    if fields.len() != RUNWAY_FIELDS {
        return None;
    }

    Some(Runway {
        width: field(fields, 1)?,
        ends: [parse_runway_end(fields, 0)?, parse_runway_end(fields, 1)?],
    })
}

fn parse_runway_end(fields: &[&str], index: usize) -> Option<RunwayEnd> {
    let base = RUNWAY_END_BASE + RUNWAY_END_STRIDE * index;

    Some(RunwayEnd {
        code: fields.get(base)?.to_string(),
        pos: Coords::new(field(fields, base + 1)?, field(fields, base + 2)?),
        displaced_threshold: field(fields, base + 3)?,
    })
}
