//! Field extractors: pure functions from one upstream payload to a partial record.

pub mod coords;
pub mod cruisemapper;
pub mod geofence;
pub mod html;
pub mod json;
pub mod marinetraffic;
pub mod ports;
pub mod rules;
pub mod vesselfinder_api;
pub mod vesselfinder_html;

use crate::domain::model::PartialVesselRecord;
use crate::utils::error::TrackerError;

pub const UNDER_WAY: &str = "Under way";
pub const AT_ANCHOR: &str = "At anchor";

/// Post-extraction step shared by every source.
pub fn enrich(record: &mut PartialVesselRecord) {
    if let Some(destination) = record.destination.take() {
        record.destination = Some(ports::translate(&destination));
    }
    if let Some(last_port) = record.last_port.take() {
        record.last_port = Some(ports::translate(&last_port));
    }

    if record.status.is_none() {
        if let Some(speed) = record.speed.as_ref().and_then(|s| s.as_f64()) {
            let inferred = if speed > 0.0 { UNDER_WAY } else { AT_ANCHOR };
            record.status = Some(inferred.to_string());
        }
    }

    if record.location.is_none() && record.destination.is_none() {
        if let (Some(lat), Some(lon)) = (record.latitude, record.longitude) {
            record.location = Some(geofence::classify(lat, lon).to_string());
        }
    }
}

/// Flags the record as failed when nothing beyond identity was recovered.
pub fn finish(mut record: PartialVesselRecord, source_name: &str) -> PartialVesselRecord {
    if !record.has_payload() {
        let err = TrackerError::Extraction {
            source_name: source_name.to_string(),
            message: "no recognisable vessel fields".to_string(),
        };
        tracing::debug!("{}", err);
        record.error = true;
        record.message = Some(err.to_string());
    }
    record
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Reading;

    #[test]
    fn test_status_inferred_from_speed() {
        let mut moving = PartialVesselRecord {
            speed: Some(Reading::Number(12.4)),
            ..Default::default()
        };
        enrich(&mut moving);
        assert_eq!(moving.status.as_deref(), Some(UNDER_WAY));

        let mut still = PartialVesselRecord {
            speed: Some(Reading::from("0.0")),
            ..Default::default()
        };
        enrich(&mut still);
        assert_eq!(still.status.as_deref(), Some(AT_ANCHOR));
    }

    #[test]
    fn test_explicit_status_wins() {
        let mut record = PartialVesselRecord {
            speed: Some(Reading::Number(0.0)),
            status: Some("Moored".to_string()),
            ..Default::default()
        };
        enrich(&mut record);
        assert_eq!(record.status.as_deref(), Some("Moored"));
    }

    #[test]
    fn test_unparseable_speed_leaves_status_absent() {
        let mut record = PartialVesselRecord {
            speed: Some(Reading::from("n/a")),
            ..Default::default()
        };
        enrich(&mut record);
        assert_eq!(record.status, None);
    }

    #[test]
    fn test_region_named_only_without_destination() {
        let mut bare = PartialVesselRecord {
            latitude: Some(50.0),
            longitude: Some(-2.0),
            ..Default::default()
        };
        enrich(&mut bare);
        assert_eq!(bare.location.as_deref(), Some("English Channel"));

        let mut bound = PartialVesselRecord {
            latitude: Some(50.0),
            longitude: Some(-2.0),
            destination: Some("GBSOU".to_string()),
            ..Default::default()
        };
        enrich(&mut bound);
        assert_eq!(bound.location, None);
        assert_eq!(bound.destination.as_deref(), Some("Southampton"));
    }

    #[test]
    fn test_finish_flags_empty_record() {
        let record = finish(PartialVesselRecord::default(), "CruiseMapper");
        assert!(record.error);
        assert!(record.message.unwrap().contains("CruiseMapper"));

        let partial = finish(
            PartialVesselRecord {
                speed: Some(Reading::Number(3.0)),
                ..Default::default()
            },
            "CruiseMapper",
        );
        assert!(!partial.error);
    }
}
