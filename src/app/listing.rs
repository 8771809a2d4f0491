use crate::domain::{Airport, Coords, Navaid, Runway};
use crate::streaming::StreamItem;

/// Renders stream items as text lines for the command-line listing
///
/// Runways are attributed to the most recently seen airport. This only holds
/// because an airport's runways follow its header in the same file; the item
/// itself carries no airport reference.
#[derive(Debug, Default)]
pub struct Listing {
    current_airport: Option<String>,
    located: bool,
}

impl Listing {
    pub fn new() -> Self {
        Self::default()
    }

    /// Code of the airport that runways are currently attributed to
    pub fn current_airport(&self) -> Option<&str> {
        self.current_airport.as_deref()
    }

    /// Lines to print for one item; terminal items render nothing
    pub fn render(&mut self, item: &StreamItem) -> Vec<String> {
        match item {
            StreamItem::Navaid(navaid) => vec![render_navaid(navaid)],
            StreamItem::Airport(airport) => vec![self.render_airport(airport)],
            StreamItem::Runway(runway) => self.render_runway(runway),
            StreamItem::Error(_) | StreamItem::Terminator => Vec::new(),
        }
    }

    fn render_airport(&mut self, airport: &Airport) -> String {
        self.current_airport = Some(airport.code.clone());
        self.located = false;
        format!("airport {} {} elev {}ft", airport.code, airport.name, airport.elevation)
    }

    fn render_runway(&mut self, runway: &Runway) -> Vec<String> {
        let code = self.current_airport.as_deref().unwrap_or("?");
        let mut lines = vec![format!(
            "runway {} {}-{}",
            code, runway.ends[0].code, runway.ends[1].code
        )];

        // First runway after a header fixes the airport's position
        if self.current_airport.is_some() && !self.located {
            lines.push(format!("airport {} at {}", code, format_pos(&runway.center())));
            self.located = true;
        }

        lines
    }
}

fn render_navaid(navaid: &Navaid) -> String {
    let kind = match navaid.kind() {
        Some(kind) => format!("{kind:?}"),
        None => format!("type{}", navaid.type_code),
    };
    format!(
        "nav {} {} at {}",
        navaid.identifier,
        kind,
        format_pos(&navaid.pos)
    )
}

fn format_pos(pos: &Coords) -> String {
    format!("{:.6},{:.6}", pos.latitude, pos.longitude)
}
