use reqwest::StatusCode;
use std::{error::Error, fmt, io, num::ParseFloatError};

#[derive(Debug)]
pub enum TrackerErrors {
    IoError(io::Error),
    ReqwestError(reqwest::Error),
    HttpStatus(StatusCode),
    JsonError(serde_json::Error),
    InvalidCoordinate(ParseFloatError),
    Unsuccessful(String),
}

impl TrackerErrors {
    /// Whether another attempt at the same request could succeed.
    pub fn is_transient(&self) -> bool {
        match self {
            TrackerErrors::IoError(_) => true,
            TrackerErrors::ReqwestError(e) => e.is_timeout() || e.is_connect() || e.is_request(),
            TrackerErrors::HttpStatus(status) => {
                status.is_server_error() || *status == StatusCode::TOO_MANY_REQUESTS
            }
            _ => false,
        }
    }
}

impl fmt::Display for TrackerErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrackerErrors::IoError(e) => write!(f, "I/O error: {}", e),
            TrackerErrors::ReqwestError(e) => write!(f, "Request error: {}", e),
            TrackerErrors::HttpStatus(status) => write!(f, "HTTP request failed: {}", status),
            TrackerErrors::JsonError(e) => write!(f, "Malformed response: {}", e),
            TrackerErrors::InvalidCoordinate(e) => write!(f, "Invalid coordinate: {}", e),
            TrackerErrors::Unsuccessful(message) => {
                write!(f, "API reported failure: {:?}", message)
            }
        }
    }
}

impl Error for TrackerErrors {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            TrackerErrors::IoError(e) => Some(e),
            TrackerErrors::ReqwestError(e) => Some(e),
            TrackerErrors::JsonError(e) => Some(e),
            TrackerErrors::InvalidCoordinate(e) => Some(e),
            TrackerErrors::HttpStatus(_) | TrackerErrors::Unsuccessful(_) => None,
        }
    }
}

impl From<io::Error> for TrackerErrors {
    fn from(err: io::Error) -> Self {
        TrackerErrors::IoError(err)
    }
}

impl From<reqwest::Error> for TrackerErrors {
    fn from(err: reqwest::Error) -> Self {
        TrackerErrors::ReqwestError(err)
    }
}

impl From<serde_json::Error> for TrackerErrors {
    fn from(err: serde_json::Error) -> Self {
        TrackerErrors::JsonError(err)
    }
}

impl From<ParseFloatError> for TrackerErrors {
    fn from(err: ParseFloatError) -> Self {
        TrackerErrors::InvalidCoordinate(err)
    }
}
