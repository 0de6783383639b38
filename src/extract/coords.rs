use once_cell::sync::Lazy;
use regex::Regex;

/// Hemisphere-lettered pair such as `51.2°N, 3.5°W`.
pub(crate) const HEMISPHERE_PAIR: &str = r"(?P<lat>\d{1,2}(?:\.\d+)?)\s*[°º]?\s*(?P<ns>[NSns])\b[,;/\s]+(?P<lon>\d{1,3}(?:\.\d+)?)\s*[°º]?\s*(?P<ew>[EWew])\b";

static PAIR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(HEMISPHERE_PAIR).expect("valid pattern"));

/// Parses the first hemisphere-lettered coordinate pair in `text` into signed decimal degrees.
pub fn parse_coordinates(text: &str) -> Option<(f64, f64)> {
    PAIR_RE.captures_iter(text).find_map(|caps| {
        let lat = signed(caps.name("lat")?.as_str(), caps.name("ns").map(|m| m.as_str()))?;
        let lon = signed(caps.name("lon")?.as_str(), caps.name("ew").map(|m| m.as_str()))?;
        checked(lat, lon)
    })
}

/// Applies the hemisphere sign: S and W are negative.
pub(crate) fn signed(value: &str, hemisphere: Option<&str>) -> Option<f64> {
    let magnitude: f64 = value.trim().parse().ok()?;
    match hemisphere.map(|h| h.trim().to_ascii_uppercase()) {
        Some(h) if h == "S" || h == "W" => Some(-magnitude.abs()),
        _ => Some(magnitude),
    }
}

pub(crate) fn checked(lat: f64, lon: f64) -> Option<(f64, f64)> {
    let in_range = lat.is_finite()
        && lon.is_finite()
        && (-90.0..=90.0).contains(&lat)
        && (-180.0..=180.0).contains(&lon);
    in_range.then_some((lat, lon))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_north_west_pair() {
        assert_eq!(parse_coordinates("51.2°N, 3.5°W"), Some((51.2, -3.5)));
    }

    #[test]
    fn test_south_east_pair() {
        assert_eq!(parse_coordinates("10.0°S, 20.0°E"), Some((-10.0, 20.0)));
    }

    #[test]
    fn test_pair_without_degree_signs() {
        assert_eq!(
            parse_coordinates("Position 36.1234 N 5.3456 W reported"),
            Some((36.1234, -5.3456))
        );
    }

    #[test]
    fn test_out_of_range_rejected() {
        assert_eq!(checked(95.0, 10.0), None);
        assert_eq!(checked(10.0, 181.0), None);
    }

    #[test]
    fn test_no_pair() {
        assert_eq!(parse_coordinates("Speed 17.5 knots"), None);
    }
}
