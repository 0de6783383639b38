//! Coarse maritime region naming from a position alone.
//!
//! Boxes are checked in order and the first hit wins, so narrow areas are listed
//! before the larger ones that contain them.

pub const DEFAULT_REGION: &str = "Open Waters";

#[derive(Debug, Clone, Copy)]
pub struct Region {
    pub name: &'static str,
    pub lat_min: f64,
    pub lat_max: f64,
    pub lon_min: f64,
    pub lon_max: f64,
}

impl Region {
    const fn new(name: &'static str, lat: (f64, f64), lon: (f64, f64)) -> Self {
        Self {
            name,
            lat_min: lat.0,
            lat_max: lat.1,
            lon_min: lon.0,
            lon_max: lon.1,
        }
    }

    pub fn contains(&self, lat: f64, lon: f64) -> bool {
        (self.lat_min..=self.lat_max).contains(&lat) && (self.lon_min..=self.lon_max).contains(&lon)
    }
}

pub const REGIONS: &[Region] = &[
    Region::new("English Channel", (48.5, 51.2), (-5.8, 1.8)),
    Region::new("Strait of Gibraltar", (35.7, 36.3), (-6.1, -5.2)),
    Region::new("Irish Sea", (51.8, 55.0), (-6.3, -2.9)),
    Region::new("Celtic Sea", (48.5, 52.0), (-11.0, -5.8)),
    Region::new("Bay of Biscay", (43.2, 48.5), (-10.0, -1.0)),
    Region::new("North Sea", (51.2, 61.0), (-4.0, 9.0)),
    Region::new("Baltic Sea", (53.5, 66.0), (9.0, 30.5)),
    Region::new("Norwegian Sea", (61.0, 72.0), (-5.0, 20.0)),
    Region::new("Canary Islands", (27.4, 29.5), (-18.5, -13.2)),
    Region::new("Western Mediterranean", (35.0, 44.5), (-5.2, 16.0)),
    Region::new("Eastern Mediterranean", (30.0, 41.0), (16.0, 36.5)),
    Region::new("Caribbean Sea", (9.0, 22.0), (-89.0, -59.0)),
    Region::new("North Atlantic Ocean", (20.0, 60.0), (-60.0, -10.0)),
];

pub fn classify(lat: f64, lon: f64) -> &'static str {
    REGIONS
        .iter()
        .find(|r| r.contains(lat, lon))
        .map(|r| r.name)
        .unwrap_or(DEFAULT_REGION)
}
