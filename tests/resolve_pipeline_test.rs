use anyhow::Result;
use httpmock::prelude::*;
use vessel_tracker::present::format::{compass_point, format_coordinates, format_speed};
use vessel_tracker::utils::validation::Validate;
use vessel_tracker::{Reading, StatusReport, TrackerConfig, VesselTracker};

const IMO: &str = "9818084";

const VESSELFINDER_PAGE: &str = r#"<html><body>
    <h1 class="title">SPIRIT OF ADVENTURE</h1>
    <div class="vessel-position">50.7621°N, 1.2010°W</div>
    <table class="aparams">
      <tr><td>Course / Speed</td><td>187.3° / 14.1 kn</td></tr>
      <tr><td>Navigation Status</td><td>Under way using engine</td></tr>
    </table>
    <div>Destination: GIGIB</div>
    </body></html>"#;

fn config_for(server: &MockServer) -> TrackerConfig {
    let mut config = TrackerConfig::default();
    config.http.timeout_seconds = 2;
    config.sources.cruisemapper_base_url = server.base_url();
    config.sources.vesselfinder_base_url = server.base_url();
    config.sources.marinetraffic_base_url = server.base_url();
    config.sources.vesselfinder_api_key = None;
    config.sources.marinetraffic_api_key = None;
    config
}

#[tokio::test]
async fn test_falls_back_to_vesselfinder_when_cruisemapper_fails() -> Result<()> {
    let server = MockServer::start_async().await;

    let cruisemapper = server
        .mock_async(|when, then| {
            when.method(GET).path("/").query_param("imo", IMO);
            then.status(500);
        })
        .await;
    let vesselfinder = server
        .mock_async(|when, then| {
            when.method(GET).path(format!("/vessels/details/{}", IMO));
            then.status(200)
                .header("Content-Type", "text/html")
                .body(VESSELFINDER_PAGE);
        })
        .await;

    let config = config_for(&server);
    config.validate()?;
    let tracker = VesselTracker::from_config(&config)?;
    let status = tracker.resolve_vessel_status().await;

    cruisemapper.assert_async().await;
    vesselfinder.assert_async().await;

    assert!(status.ok);
    assert_eq!(status.source.as_deref(), Some("VesselFinder"));
    assert_eq!(status.imo, IMO);
    assert_eq!(status.latitude, Some(50.7621));
    assert_eq!(status.longitude, Some(-1.201));
    assert_eq!(status.speed, Some(Reading::Number(14.1)));
    assert_eq!(status.destination.as_deref(), Some("Gibraltar"));

    let report = StatusReport::from_status(&status);
    assert_eq!(report.title, "🚢 SPIRIT OF ADVENTURE");
    assert_eq!(
        report.map_url.as_deref(),
        Some("https://www.vesselfinder.com/?imo=9818084")
    );
    Ok(())
}

#[tokio::test]
async fn test_first_source_wins_without_calling_the_rest() -> Result<()> {
    let server = MockServer::start_async().await;

    let cruisemapper = server
        .mock_async(|when, then| {
            when.method(GET).path("/");
            then.status(200).body(
                r#"<html><body><p>Spirit of Adventure current position is 36.1200°N, 5.3500°W
                   heading to Malaga with speed 15.2 kn</p></body></html>"#,
            );
        })
        .await;
    let vesselfinder = server
        .mock_async(|when, then| {
            when.method(GET).path(format!("/vessels/details/{}", IMO));
            then.status(200).body(VESSELFINDER_PAGE);
        })
        .await;

    let tracker = VesselTracker::from_config(&config_for(&server))?;
    let status = tracker.resolve_vessel_status().await;

    cruisemapper.assert_async().await;
    assert_eq!(vesselfinder.hits_async().await, 0);
    assert!(status.ok);
    assert_eq!(status.source.as_deref(), Some("CruiseMapper"));
    Ok(())
}

#[tokio::test]
async fn test_all_sources_failing_keeps_identity() -> Result<()> {
    let server = MockServer::start_async().await;

    server
        .mock_async(|when, then| {
            when.method(GET).path("/");
            then.status(503);
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path(format!("/vessels/details/{}", IMO));
            then.status(200)
                .body("<html><body><h1>Vessel not found</h1></body></html>");
        })
        .await;

    let tracker = VesselTracker::from_config(&config_for(&server))?;
    let (status, resolution) = tracker.resolve().await;

    assert!(!status.ok);
    assert_eq!(status.ship_name, "SPIRIT OF ADVENTURE");
    assert_eq!(status.imo, IMO);
    assert_eq!(status.mmsi, "232026551");
    assert!(status.latitude.is_none());
    assert!(status.speed.is_none());
    assert_eq!(
        status.message.as_deref(),
        Some("Unable to fetch real-time data from vessel tracking services")
    );
    assert_eq!(resolution.attempts.len(), 2);

    let report = StatusReport::from_status(&status);
    assert_eq!(report.title, "❌ Data Unavailable");
    Ok(())
}

#[tokio::test]
async fn test_keyed_api_sources_join_the_walk() -> Result<()> {
    let server = MockServer::start_async().await;

    server
        .mock_async(|when, then| {
            when.method(GET).path("/");
            then.status(500);
        })
        .await;
    let vesselfinder_api = server
        .mock_async(|when, then| {
            when.method(GET)
                .path(format!("/api/pro/ais/{}", IMO))
                .header("Authorization", "Bearer vf-key");
            then.status(200).json_body(serde_json::json!({
                "vessel": {
                    "name": "SPIRIT OF ADVENTURE",
                    "lat": 28.1,
                    "lon": -15.4,
                    "speed": 0.0,
                    "destination": "ESLPA"
                }
            }));
        })
        .await;

    let mut config = config_for(&server);
    config.sources.vesselfinder_api_key = Some("vf-key".to_string());
    let tracker = VesselTracker::from_config(&config)?;
    let status = tracker.resolve_vessel_status().await;

    vesselfinder_api.assert_async().await;
    assert!(status.ok);
    assert_eq!(status.source.as_deref(), Some("VesselFinder API"));
    assert_eq!(status.status.as_deref(), Some("At anchor"));
    Ok(())
}

#[test]
fn test_presentation_examples() {
    assert_eq!(compass_point(0.0), "N");
    assert_eq!(compass_point(90.0), "E");
    assert_eq!(compass_point(348.0), "NNW");
    assert_eq!(compass_point(181.0), "S");
    assert_eq!(compass_point(22.5), "NNE");
    assert_eq!(
        format_speed(Some(&Reading::Number(17.5))),
        "17.5 knots (32.4 km/h)"
    );
    assert_eq!(
        format_coordinates(Some(51.2), Some(-3.5), None),
        "51.2000°N, 3.5000°W"
    );
}
