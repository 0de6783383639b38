use crate::domain::model::PartialVesselRecord;
use crate::extract::json::KeyMap;
use crate::extract::{enrich, finish};
use serde_json::Value;

pub const SOURCE_NAME: &str = "VesselFinder API";

const KEYS: KeyMap = KeyMap {
    ship_name: "name",
    imo: "imo",
    mmsi: "mmsi",
    latitude: "lat",
    longitude: "lon",
    speed: "speed",
    course: "course",
    heading: "heading",
    status: "status",
    destination: "destination",
    eta: "eta",
    last_port: "last_port",
    draught: "draught",
    flag: "flag",
    timestamp: "timestamp",
};

/// Reads the `vessel` object of a VesselFinder AIS response.
pub fn extract(raw: &Value) -> PartialVesselRecord {
    let Some(vessel) = raw.get("vessel").and_then(Value::as_object) else {
        return PartialVesselRecord::failure(SOURCE_NAME, "Error parsing vessel data");
    };
    let mut record = KEYS.read(vessel);
    enrich(&mut record);
    finish(record, SOURCE_NAME)
}
