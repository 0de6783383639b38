//! Key lookups over API responses whose values may be numbers, strings or null.

use crate::domain::model::{PartialVesselRecord, Reading};
use serde_json::{Map, Value};

pub type Object = Map<String, Value>;

/// Upstream key for each record field.
#[derive(Debug, Clone, Copy)]
pub struct KeyMap {
    pub ship_name: &'static str,
    pub imo: &'static str,
    pub mmsi: &'static str,
    pub latitude: &'static str,
    pub longitude: &'static str,
    pub speed: &'static str,
    pub course: &'static str,
    pub heading: &'static str,
    pub status: &'static str,
    pub destination: &'static str,
    pub eta: &'static str,
    pub last_port: &'static str,
    pub draught: &'static str,
    pub flag: &'static str,
    pub timestamp: &'static str,
}

impl KeyMap {
    /// Reads each field independently; a bad value only loses that field.
    pub fn read(&self, obj: &Object) -> PartialVesselRecord {
        let position = match (number(obj, self.latitude), number(obj, self.longitude)) {
            (Some(lat), Some(lon)) => crate::extract::coords::checked(lat, lon),
            _ => None,
        };
        PartialVesselRecord {
            ship_name: text(obj, self.ship_name),
            imo: text(obj, self.imo),
            mmsi: text(obj, self.mmsi),
            latitude: position.map(|(lat, _)| lat),
            longitude: position.map(|(_, lon)| lon),
            speed: reading(obj, self.speed),
            course: reading(obj, self.course),
            heading: reading(obj, self.heading),
            status: text(obj, self.status),
            destination: text(obj, self.destination),
            eta: reading(obj, self.eta),
            last_port: text(obj, self.last_port),
            draught: reading(obj, self.draught),
            flag: text(obj, self.flag),
            timestamp: reading(obj, self.timestamp),
            ..Default::default()
        }
    }
}

pub fn reading(obj: &Object, key: &str) -> Option<Reading> {
    match obj.get(key)? {
        Value::Number(n) => n.as_f64().map(Reading::Number),
        Value::String(s) if !s.trim().is_empty() => Some(Reading::Text(s.trim().to_string())),
        Value::Null | Value::String(_) => None,
        other => Some(Reading::Text(other.to_string())),
    }
}

pub fn number(obj: &Object, key: &str) -> Option<f64> {
    reading(obj, key)?.as_f64()
}

pub fn text(obj: &Object, key: &str) -> Option<String> {
    match reading(obj, key)? {
        Reading::Text(s) => Some(s),
        Reading::Number(n) if n.fract() == 0.0 => Some(format!("{:.0}", n)),
        Reading::Number(n) => Some(n.to_string()),
    }
}
