use super::format::{
    format_coordinates, format_course, format_eta, format_speed, format_timestamp, status_icon,
    UNKNOWN,
};
use crate::domain::model::CanonicalVesselStatus;
use std::fmt;

const MAP_BASE_URL: &str = "https://www.vesselfinder.com/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

impl ReportField {
    fn new(name: &str, value: impl Into<String>, inline: bool) -> Self {
        Self {
            name: name.to_string(),
            value: value.into(),
            inline,
        }
    }
}

/// Status card for one resolution, ready for a chat embed or the terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusReport {
    pub ok: bool,
    pub title: String,
    pub description: String,
    pub fields: Vec<ReportField>,
    pub footer: String,
    pub map_url: Option<String>,
}

impl StatusReport {
    pub fn from_status(status: &CanonicalVesselStatus) -> Self {
        if status.ok {
            Self::available(status)
        } else {
            Self::unavailable(status)
        }
    }

    fn available(status: &CanonicalVesselStatus) -> Self {
        let icon = status_icon(status.status.as_deref());
        let mut fields = vec![
            ReportField::new(
                "📍 Current Position",
                format_coordinates(status.latitude, status.longitude, status.location.as_deref()),
                true,
            ),
            ReportField::new("💨 Speed", format_speed(status.speed.as_ref()), true),
            ReportField::new("🧭 Course", format_course(status.course.as_ref()), true),
            ReportField::new(
                "🎯 Destination",
                status.destination.as_deref().unwrap_or(UNKNOWN),
                true,
            ),
            ReportField::new("⏰ ETA", format_eta(status.eta.as_ref()), true),
            ReportField::new("📊 Status", status.status.as_deref().unwrap_or(UNKNOWN), true),
        ];

        let mut extra = Vec::new();
        if let Some(last_port) = &status.last_port {
            extra.push(format!("Last Port: {}", last_port));
        }
        if let Some(draught) = &status.draught {
            extra.push(format!("Draught: {}m", draught));
        }
        if let Some(flag) = &status.flag {
            extra.push(format!("Flag: {}", flag));
        }
        if !extra.is_empty() {
            fields.push(ReportField::new("ℹ️ Additional Info", extra.join("\n"), false));
        }

        let map_url = (status.latitude.is_some() && status.longitude.is_some())
            .then(|| format!("{}?imo={}", MAP_BASE_URL, status.imo));
        if let Some(url) = &map_url {
            fields.push(ReportField::new(
                "🗺️ Track on Map",
                format!("View on VesselFinder: {}", url),
                false,
            ));
        }

        let footer = match &status.timestamp {
            Some(ts) => format!("Last updated: {} • Data from AIS", format_timestamp(Some(ts))),
            None => "Data from vessel tracking APIs".to_string(),
        };

        Self {
            ok: true,
            title: format!("{} {}", icon, status.ship_name),
            description: "Current position and voyage information".to_string(),
            fields,
            footer,
            map_url,
        }
    }

    fn unavailable(status: &CanonicalVesselStatus) -> Self {
        Self {
            ok: false,
            title: "❌ Data Unavailable".to_string(),
            description: status
                .message
                .clone()
                .unwrap_or_else(|| "Unable to fetch ship data".to_string()),
            fields: vec![
                ReportField::new(
                    "Ship Information",
                    format!("Name: {}\nIMO: {}", status.ship_name, status.imo),
                    false,
                ),
                ReportField::new(
                    "What This Means",
                    "• Ship's AIS transponder may be offline\n\
                     • API services temporarily unavailable\n\
                     • Ship may be in port with transponder disabled",
                    false,
                ),
            ],
            footer: "Try again in a few minutes • Data from vessel tracking APIs".to_string(),
            map_url: None,
        }
    }

    pub fn field(&self, name_contains: &str) -> Option<&ReportField> {
        self.fields.iter().find(|f| f.name.contains(name_contains))
    }
}

impl fmt::Display for StatusReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f, "{}", self.description)?;
        writeln!(f)?;
        for field in &self.fields {
            let mut lines = field.value.lines();
            writeln!(f, "{}: {}", field.name, lines.next().unwrap_or_default())?;
            for line in lines {
                writeln!(f, "    {}", line)?;
            }
        }
        writeln!(f)?;
        write!(f, "{}", self.footer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::normalizer::normalize;
    use crate::domain::model::{PartialVesselRecord, Reading, VesselIdentity};

    fn resolved() -> CanonicalVesselStatus {
        let record = PartialVesselRecord {
            latitude: Some(50.1),
            longitude: Some(-1.25),
            speed: Some(Reading::Number(17.5)),
            course: Some(Reading::Number(90.0)),
            destination: Some("Southampton".to_string()),
            status: Some("At anchor".to_string()),
            draught: Some(Reading::Number(6.8)),
            timestamp: Some(Reading::Number(1_700_000_000.0)),
            source: Some("CruiseMapper".to_string()),
            ..Default::default()
        };
        normalize(record, &VesselIdentity::default())
    }

    #[test]
    fn test_available_report() {
        let report = StatusReport::from_status(&resolved());

        assert!(report.ok);
        assert_eq!(report.title, "⚓ SPIRIT OF ADVENTURE");
        assert_eq!(
            report.field("Position").unwrap().value,
            "50.1000°N, 1.2500°W"
        );
        assert_eq!(report.field("Speed").unwrap().value, "17.5 knots (32.4 km/h)");
        assert_eq!(report.field("Course").unwrap().value, "90.0° (E)");
        assert_eq!(report.field("ETA").unwrap().value, "Unknown");
        assert_eq!(report.field("Additional").unwrap().value, "Draught: 6.8m");
        assert_eq!(
            report.map_url.as_deref(),
            Some("https://www.vesselfinder.com/?imo=9818084")
        );
        assert_eq!(report.footer, "Last updated: 2023-11-14 22:13 UTC • Data from AIS");
    }

    #[test]
    fn test_report_without_coordinates_uses_location() {
        let mut status = resolved();
        status.latitude = None;
        status.longitude = None;
        status.location = Some("English Channel".to_string());
        status.timestamp = None;

        let report = StatusReport::from_status(&status);

        assert_eq!(report.field("Position").unwrap().value, "English Channel");
        assert!(report.map_url.is_none());
        assert_eq!(report.footer, "Data from vessel tracking APIs");
    }

    #[test]
    fn test_unavailable_report() {
        let record = PartialVesselRecord {
            error: true,
            message: Some("Unable to fetch real-time data from vessel tracking services".to_string()),
            ..Default::default()
        };
        let status = normalize(record, &VesselIdentity::default());
        let report = StatusReport::from_status(&status);

        assert!(!report.ok);
        assert_eq!(report.title, "❌ Data Unavailable");
        assert_eq!(
            report.description,
            "Unable to fetch real-time data from vessel tracking services"
        );
        assert!(report
            .field("Ship Information")
            .unwrap()
            .value
            .contains("IMO: 9818084"));
        assert_eq!(
            report.footer,
            "Try again in a few minutes • Data from vessel tracking APIs"
        );
    }

    #[test]
    fn test_display_renders_all_fields() {
        let text = StatusReport::from_status(&resolved()).to_string();

        assert!(text.starts_with("⚓ SPIRIT OF ADVENTURE\n"));
        assert!(text.contains("🧭 Course: 90.0° (E)"));
        assert!(text.ends_with("Data from AIS"));
    }
}
