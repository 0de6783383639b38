use serde::{Deserialize, Serialize};
use std::fmt;

/// A scalar exactly as an upstream reported it.
///
/// Sites disagree on whether speed, course or ETA are numbers or strings, so the raw
/// form is kept and interpreted at presentation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Reading {
    Number(f64),
    Text(String),
}

impl Reading {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Reading::Number(n) if n.is_finite() => Some(*n),
            Reading::Number(_) => None,
            Reading::Text(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
        }
    }
}

impl fmt::Display for Reading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reading::Number(n) => write!(f, "{}", n),
            Reading::Text(s) => f.write_str(s),
        }
    }
}

impl From<f64> for Reading {
    fn from(value: f64) -> Self {
        Reading::Number(value)
    }
}

impl From<&str> for Reading {
    fn from(value: &str) -> Self {
        Reading::Text(value.to_string())
    }
}

/// Body of one upstream response, dropped once the extractor has run.
#[derive(Debug, Clone)]
pub enum RawSourcePayload {
    Html(String),
    Json(serde_json::Value),
}

/// What a single source managed to say about the vessel.
///
/// Every field is optional: `None` means the source did not yield it, not that the
/// value is zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PartialVesselRecord {
    pub ship_name: Option<String>,
    pub imo: Option<String>,
    pub mmsi: Option<String>,

    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub speed: Option<Reading>,
    pub course: Option<Reading>,
    pub heading: Option<Reading>,

    pub destination: Option<String>,
    pub eta: Option<Reading>,
    pub last_port: Option<String>,
    pub draught: Option<Reading>,
    pub flag: Option<String>,
    pub status: Option<String>,
    pub location: Option<String>,

    pub timestamp: Option<Reading>,
    pub source: Option<String>,

    pub error: bool,
    pub message: Option<String>,
}

impl PartialVesselRecord {
    pub fn failure(source: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            source: Some(source.into()),
            error: true,
            message: Some(message.into()),
            ..Default::default()
        }
    }

    pub fn has_position(&self) -> bool {
        self.latitude.is_some() && self.longitude.is_some()
    }

    pub fn has_kinematics(&self) -> bool {
        self.latitude.is_some()
            || self.longitude.is_some()
            || self.speed.is_some()
            || self.course.is_some()
            || self.heading.is_some()
    }

    pub fn has_voyage(&self) -> bool {
        self.destination.is_some()
            || self.eta.is_some()
            || self.last_port.is_some()
            || self.draught.is_some()
            || self.flag.is_some()
            || self.status.is_some()
            || self.location.is_some()
    }

    pub fn has_payload(&self) -> bool {
        self.has_kinematics() || self.has_voyage()
    }

    /// Eligible to win the fallback walk.
    pub fn is_usable(&self) -> bool {
        !self.error && self.has_payload()
    }
}

/// The static identity of the tracked vessel, known before any network call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VesselIdentity {
    pub name: String,
    pub imo: String,
    pub mmsi: String,
}

impl Default for VesselIdentity {
    fn default() -> Self {
        Self {
            name: "SPIRIT OF ADVENTURE".to_string(),
            imo: "9818084".to_string(),
            mmsi: "232026551".to_string(),
        }
    }
}

/// Output contract of one resolution call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CanonicalVesselStatus {
    pub ship_name: String,
    pub imo: String,
    pub mmsi: String,
    pub ok: bool,

    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub speed: Option<Reading>,
    pub course: Option<Reading>,
    pub heading: Option<Reading>,

    pub destination: Option<String>,
    pub eta: Option<Reading>,
    pub last_port: Option<String>,
    pub draught: Option<Reading>,
    pub flag: Option<String>,
    pub status: Option<String>,
    pub location: Option<String>,

    pub timestamp: Option<Reading>,
    pub source: Option<String>,
    pub message: Option<String>,
}
