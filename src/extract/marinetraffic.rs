use crate::domain::model::PartialVesselRecord;
use crate::extract::json::KeyMap;
use crate::extract::{enrich, finish};
use serde_json::Value;

pub const SOURCE_NAME: &str = "MarineTraffic";

const KEYS: KeyMap = KeyMap {
    ship_name: "SHIPNAME",
    imo: "IMO",
    mmsi: "MMSI",
    latitude: "LAT",
    longitude: "LON",
    speed: "SPEED",
    course: "COURSE",
    heading: "HEADING",
    status: "STATUS",
    destination: "DESTINATION",
    eta: "ETA",
    last_port: "LAST_PORT",
    draught: "CURRENT_DRAUGHT",
    flag: "FLAG",
    timestamp: "TIMESTAMP",
};

/// Reads the first vessel of a MarineTraffic `exportvessel` (jsono) response.
pub fn extract(raw: &Value) -> PartialVesselRecord {
    let Some(vessel) = raw
        .as_array()
        .and_then(|rows| rows.first())
        .and_then(Value::as_object)
    else {
        return PartialVesselRecord::failure(SOURCE_NAME, "No vessel data found");
    };
    let mut record = KEYS.read(vessel);
    enrich(&mut record);
    finish(record, SOURCE_NAME)
}
