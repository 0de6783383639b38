use crate::domain::model::PartialVesselRecord;
use crate::extract::coords::HEMISPHERE_PAIR;
use crate::extract::html::Page;
use crate::extract::rules::{rule_table, Field, RuleSet, Scope};
use crate::extract::{enrich, finish};
use once_cell::sync::Lazy;

pub const SOURCE_NAME: &str = "VesselFinder";

// Attribute JSON on the details page is usually HTML-escaped.
const Q: &str = r#"(?:"|&quot;)"#;

static RULES: Lazy<RuleSet> = Lazy::new(|| {
    let data_position = format!(
        r"ship_lat{Q}\s*:\s*(?P<lat>-?\d{{1,2}}(?:\.\d+)?)\s*,\s*{Q}ship_lon{Q}\s*:\s*(?P<lon>-?\d{{1,3}}(?:\.\d+)?)"
    );
    let data_course = format!(r"ship_cog{Q}\s*:\s*(?P<v>\d+(?:\.\d+)?)");
    let data_speed = format!(r"ship_sog{Q}\s*:\s*(?P<v>\d+(?:\.\d+)?)");

    rule_table(&[
        (Field::Position, Scope::Markup, &data_position),
        (Field::Position, Scope::Section(".vessel-position"), HEMISPHERE_PAIR),
        (Field::Position, Scope::Text, HEMISPHERE_PAIR),
        (Field::Course, Scope::Markup, &data_course),
        (Field::Speed, Scope::Markup, &data_speed),
        (
            Field::Course,
            Scope::Text,
            r"(?i)course[ \t]*/[ \t]*speed[: \t]*(?P<v>\d+(?:\.\d+)?)[ \t]*°",
        ),
        (
            Field::Speed,
            Scope::Text,
            r"(?i)course[ \t]*/[ \t]*speed[: \t]*\d+(?:\.\d+)?[ \t]*°[ \t]*/[ \t]*(?P<v>\d+(?:\.\d+)?)[ \t]*kn",
        ),
        (Field::Speed, Scope::Text, r"(?i)(?P<v>\d+(?:\.\d+)?)[ \t]*knots?\b"),
        (Field::Course, Scope::Text, r"(?i)\bcourse\b[: \t]*(?P<v>\d+(?:\.\d+)?)[°\s]"),
        (Field::ShipName, Scope::Section("h1"), r"(?P<v>[^\n]+)"),
        (
            Field::Destination,
            Scope::Text,
            r"(?i)\bdestination\b[: \t]*(?P<v>[A-Za-z][^<\n,]*)",
        ),
        (Field::Eta, Scope::Text, r"(?i)\bETA\b[: \t]*(?P<v>[^<\n]+)"),
        (
            Field::Status,
            Scope::Text,
            r"(?i)navigation status[: \t]*(?P<v>[A-Za-z][^<\n,]*)",
        ),
        (
            Field::Draught,
            Scope::Text,
            r"(?i)\b(?:current )?draught\b[: \t]*(?P<v>\d+(?:\.\d+)?)[ \t]*m\b",
        ),
        (Field::Flag, Scope::Text, r"(?i)\bflag\b[: \t]*(?P<v>[A-Za-z][A-Za-z ]+)"),
        (
            Field::LastPort,
            Scope::Text,
            r"(?i)\blast port\b[: \t]*(?P<v>[A-Za-z][^<\n,]*)",
        ),
        (
            Field::Timestamp,
            Scope::Text,
            r"(?i)position received[: \t]*(?P<v>[^<\n]+)",
        ),
    ])
    .expect("VesselFinder rule patterns are valid")
});

/// Reads a VesselFinder vessel details page.
pub fn extract(html: &str) -> PartialVesselRecord {
    let page = Page::parse(html);
    let mut record = PartialVesselRecord::default();
    let fired = RULES.apply(&page, &mut record);
    tracing::debug!("{}: {} of {} rules matched", SOURCE_NAME, fired, RULES.rules().len());

    enrich(&mut record);
    finish(record, SOURCE_NAME)
}
