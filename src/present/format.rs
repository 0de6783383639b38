//! Human-readable renderings of canonical fields. Every function is total: missing
//! input renders as [`UNKNOWN`] and unparseable input passes through untouched.

use crate::domain::model::Reading;
use chrono::{DateTime, Utc};
use std::fmt;

pub const UNKNOWN: &str = "Unknown";

const KNOTS_TO_KMH: f64 = 1.852;
const SECTOR_DEGREES: f64 = 22.5;
const HALF_SECTOR_DEGREES: f64 = 11.25;

const COMPASS_POINTS: [&str; 16] = [
    "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W", "WNW",
    "NW", "NNW",
];

pub fn format_coordinates(
    latitude: Option<f64>,
    longitude: Option<f64>,
    location: Option<&str>,
) -> String {
    match (latitude, longitude) {
        (Some(lat), Some(lon)) => {
            let ns = if lat >= 0.0 { 'N' } else { 'S' };
            let ew = if lon >= 0.0 { 'E' } else { 'W' };
            format!("{:.4}°{}, {:.4}°{}", lat.abs(), ns, lon.abs(), ew)
        }
        _ => location
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .unwrap_or(UNKNOWN)
            .to_string(),
    }
}

pub fn format_speed(speed: Option<&Reading>) -> String {
    let Some(speed) = speed else {
        return UNKNOWN.to_string();
    };
    match speed.as_f64() {
        Some(knots) => format!("{:.1} knots ({:.1} km/h)", knots, knots * KNOTS_TO_KMH),
        None => speed.to_string(),
    }
}

/// Nearest of the 16 compass points.
///
/// Each point owns a symmetric zone of ±11.25°, so 348° falls in NNW and 22.5° is NNE.
pub fn compass_point(degrees: f64) -> &'static str {
    if !degrees.is_finite() {
        return "N";
    }
    let normalized = degrees.rem_euclid(360.0);
    let index = ((normalized + HALF_SECTOR_DEGREES) / SECTOR_DEGREES).floor() as usize
        % COMPASS_POINTS.len();
    COMPASS_POINTS[index]
}

pub fn format_course(course: Option<&Reading>) -> String {
    let Some(course) = course else {
        return UNKNOWN.to_string();
    };
    match course.as_f64() {
        Some(degrees) => format!("{:.1}° ({})", degrees, compass_point(degrees)),
        None => course.to_string(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusIcon {
    Moving,
    Anchor,
    Harbor,
    Linked,
}

impl StatusIcon {
    pub fn emoji(self) -> &'static str {
        match self {
            StatusIcon::Moving => "🚢",
            StatusIcon::Anchor => "⚓",
            StatusIcon::Harbor => "🏠",
            StatusIcon::Linked => "🔗",
        }
    }
}

impl fmt::Display for StatusIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.emoji())
    }
}

pub fn status_icon(status: Option<&str>) -> StatusIcon {
    let Some(status) = status else {
        return StatusIcon::Moving;
    };
    let status = status.to_lowercase();
    let has = |needle: &str| status.contains(needle);

    if has("underway") || has("under way") || has("sailing") {
        StatusIcon::Moving
    } else if has("anchor") {
        StatusIcon::Anchor
    } else if has("port") || has("dock") {
        StatusIcon::Harbor
    } else if has("moored") {
        StatusIcon::Linked
    } else {
        StatusIcon::Moving
    }
}

fn epoch_to_utc(seconds: f64) -> Option<DateTime<Utc>> {
    if !seconds.is_finite() {
        return None;
    }
    DateTime::<Utc>::from_timestamp(seconds.trunc() as i64, 0)
}

fn format_epoch(reading: &Reading, pattern: &str) -> String {
    match reading {
        Reading::Text(text) if text.trim().is_empty() => UNKNOWN.to_string(),
        Reading::Text(text) => text.clone(),
        Reading::Number(seconds) => match epoch_to_utc(*seconds) {
            Some(at) => at.format(pattern).to_string(),
            None => reading.to_string(),
        },
    }
}

pub fn format_eta(eta: Option<&Reading>) -> String {
    eta.map(|eta| format_epoch(eta, "%b %d, %H:%M UTC"))
        .unwrap_or_else(|| UNKNOWN.to_string())
}

pub fn format_timestamp(timestamp: Option<&Reading>) -> String {
    timestamp
        .map(|ts| format_epoch(ts, "%Y-%m-%d %H:%M UTC"))
        .unwrap_or_else(|| UNKNOWN.to_string())
}
