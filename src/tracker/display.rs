use super::open_notify::{Position, Roster};
use crate::format::{float_repr, rule};
use std::io::{self, Write};

pub const BANNER: &str = "🚀 Space Tracker Demo";
pub const FOOTER: &str = "⭐ Visit http://api.open-notify.org/ for more space APIs!";
pub const POSITION_UNAVAILABLE: &str = "❌ Unable to fetch ISS position";
pub const ASTRONAUTS_UNAVAILABLE: &str = "❌ Unable to fetch astronaut information";

const RULE_WIDTH: usize = 50;

/// `YYYY-MM-DD HH:MM:SS UTC`, or the raw seconds if the value is out of range.
pub fn format_timestamp(position: &Position) -> String {
    match position.observed_at() {
        Some(at) => at.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        None => format!("{} (unix seconds)", position.timestamp),
    }
}

pub fn map_url(position: &Position) -> String {
    format!(
        "https://www.google.com/maps/@{},{},5z",
        float_repr(position.latitude),
        float_repr(position.longitude)
    )
}

pub fn display_position<W: Write>(out: &mut W, position: Option<&Position>) -> io::Result<()> {
    let Some(position) = position else {
        return writeln!(out, "{}", POSITION_UNAVAILABLE);
    };

    writeln!(out, "🛰️  International Space Station Current Position")?;
    writeln!(out, "{}", rule('=', RULE_WIDTH))?;
    writeln!(out, "Latitude:  {:.4}°", position.latitude)?;
    writeln!(out, "Longitude: {:.4}°", position.longitude)?;
    writeln!(out, "Timestamp: {}", format_timestamp(position))?;
    writeln!(out)?;
    writeln!(out, "View on map: {}", map_url(position))
}

pub fn display_astronauts<W: Write>(out: &mut W, roster: Option<&Roster>) -> io::Result<()> {
    let Some(roster) = roster else {
        return writeln!(out, "{}", ASTRONAUTS_UNAVAILABLE);
    };

    writeln!(out, "👨‍🚀 People Currently in Space: {}", roster.number)?;
    writeln!(out, "{}", rule('=', RULE_WIDTH))?;
    for person in &roster.people {
        writeln!(out, "• {} - {}", person.name, person.craft)?;
    }
    Ok(())
}
