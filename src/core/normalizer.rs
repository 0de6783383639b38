use crate::domain::model::{CanonicalVesselStatus, PartialVesselRecord, VesselIdentity};

/// Maps the winning (or exhausted) record onto the output contract.
pub fn normalize(record: PartialVesselRecord, identity: &VesselIdentity) -> CanonicalVesselStatus {
    let ok = !record.error;
    // an error record's kinematics and voyage data are never trusted
    let record = if ok {
        record
    } else {
        PartialVesselRecord {
            ship_name: record.ship_name,
            imo: record.imo,
            mmsi: record.mmsi,
            source: record.source,
            error: true,
            message: record.message,
            ..Default::default()
        }
    };

    CanonicalVesselStatus {
        ship_name: record.ship_name.unwrap_or_else(|| identity.name.clone()),
        imo: record.imo.unwrap_or_else(|| identity.imo.clone()),
        mmsi: record.mmsi.unwrap_or_else(|| identity.mmsi.clone()),
        ok,
        latitude: record.latitude,
        longitude: record.longitude,
        speed: record.speed,
        course: record.course,
        heading: record.heading,
        destination: record.destination,
        eta: record.eta,
        last_port: record.last_port,
        draught: record.draught,
        flag: record.flag,
        status: record.status,
        location: record.location,
        timestamp: record.timestamp,
        source: record.source,
        message: record.message,
    }
}
