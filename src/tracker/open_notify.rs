use super::tracker_errors::TrackerErrors;
use super::transport::Transport;
use crate::config::client::ClientConfig;
use crate::constants::{ASTROS_PATH, ISS_NOW_PATH, SUCCESS_MESSAGE};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;
use std::io::{self, Write};

/// Where the ISS was at `timestamp` (unix seconds).
#[derive(Debug, Clone, PartialEq)]
pub struct Position {
    pub latitude: f64,  // degrees
    pub longitude: f64, // degrees
    pub timestamp: i64,
}

impl Position {
    /// `None` when the timestamp is outside the range chrono can represent.
    pub fn observed_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.timestamp, 0)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CrewMember {
    pub name: String,
    pub craft: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Roster {
    pub number: u32,
    pub people: Vec<CrewMember>,
}

#[derive(Deserialize)]
struct Envelope {
    message: String,
}

// The API sends coordinates as strings; plain numbers are accepted too.
#[derive(Deserialize)]
#[serde(untagged)]
enum Coordinate {
    Text(String),
    Number(f64),
}

impl Coordinate {
    fn degrees(&self) -> Result<f64, TrackerErrors> {
        match self {
            Coordinate::Text(text) => Ok(text.trim().parse::<f64>()?),
            Coordinate::Number(value) => Ok(*value),
        }
    }
}

#[derive(Deserialize)]
struct IssPosition {
    latitude: Coordinate,
    longitude: Coordinate,
}

#[derive(Deserialize)]
struct IssNow {
    iss_position: IssPosition,
    timestamp: i64,
}

/// Parses the body and rejects anything whose `message` is not `"success"`.
fn successful_body(body: &str) -> Result<Value, TrackerErrors> {
    let value: Value = serde_json::from_str(body)?;
    let envelope: Envelope = serde_json::from_value(value.clone())?;

    if envelope.message != SUCCESS_MESSAGE {
        return Err(TrackerErrors::Unsuccessful(envelope.message));
    }

    Ok(value)
}

pub fn parse_position(body: &str) -> Result<Position, TrackerErrors> {
    let now: IssNow = serde_json::from_value(successful_body(body)?)?;

    Ok(Position {
        latitude: now.iss_position.latitude.degrees()?,
        longitude: now.iss_position.longitude.degrees()?,
        timestamp: now.timestamp,
    })
}

pub fn parse_astronauts(body: &str) -> Result<Roster, TrackerErrors> {
    Ok(serde_json::from_value(successful_body(body)?)?)
}

/// Fetches the current ISS position.
pub fn fetch_position<T: Transport + ?Sized>(
    transport: &T,
    config: &ClientConfig,
) -> Result<Position, TrackerErrors> {
    let body = transport.get(&config.endpoint(ISS_NOW_PATH))?;
    parse_position(&body)
}

/// Fetches the people currently in space.
pub fn fetch_astronauts<T: Transport + ?Sized>(
    transport: &T,
    config: &ClientConfig,
) -> Result<Roster, TrackerErrors> {
    let body = transport.get(&config.endpoint(ASTROS_PATH))?;
    parse_astronauts(&body)
}

/// Runs both lookups and turns failures into a printed diagnostic line plus
/// an absent result.
pub struct Tracker<T: Transport> {
    transport: T,
    config: ClientConfig,
}

impl<T: Transport> Tracker<T> {
    pub fn new(transport: T, config: ClientConfig) -> Self {
        Self { transport, config }
    }

    pub fn position<W: Write>(&self, out: &mut W) -> io::Result<Option<Position>> {
        match fetch_position(&self.transport, &self.config) {
            Ok(position) => Ok(Some(position)),
            Err(e) => {
                tracing::warn!(error = %e, "ISS position lookup failed");
                writeln!(out, "Error fetching ISS position: {}", e)?;
                Ok(None)
            }
        }
    }

    pub fn astronauts<W: Write>(&self, out: &mut W) -> io::Result<Option<Roster>> {
        match fetch_astronauts(&self.transport, &self.config) {
            Ok(roster) => Ok(Some(roster)),
            Err(e) => {
                tracing::warn!(error = %e, "astronaut lookup failed");
                writeln!(out, "Error fetching astronaut data: {}", e)?;
                Ok(None)
            }
        }
    }
}
