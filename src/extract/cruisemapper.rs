use crate::domain::model::PartialVesselRecord;
use crate::extract::coords::HEMISPHERE_PAIR;
use crate::extract::html::Page;
use crate::extract::rules::{rule_table, Field, RuleSet, Scope};
use crate::extract::{enrich, finish};
use once_cell::sync::Lazy;

pub const SOURCE_NAME: &str = "CruiseMapper";

const NUMBER: &str = r"\d+(?:\.\d+)?";

static RULES: Lazy<RuleSet> = Lazy::new(|| {
    let speed_label = format!(r"(?i)\bspeed\b[: \t]*(?P<v>{NUMBER})");
    let speed_knots = format!(r"(?i)(?P<v>{NUMBER})[ \t]*(?:kn|kts|knots?)\b");
    let course = format!(r"(?i)\bcourse\b[: \t]*(?P<v>{NUMBER})");
    let heading = format!(r"(?i)\bheading\b[: \t]*(?P<v>{NUMBER})");

    rule_table(&[
        // map markers and inline ship objects carry unambiguous decimal pairs
        (
            Field::Position,
            Scope::Script,
            r#""?\blat(?:itude)?"?\s*:\s*"?(?P<lat>-?\d{1,2}\.\d+)"?\s*,\s*"?\blo?ng?(?:itude)?"?\s*:\s*"?(?P<lon>-?\d{1,3}\.\d+)"#,
        ),
        (
            Field::Position,
            Scope::Script,
            r"(?:L\.marker|L\.latLng|LatLng|setView|panTo)\(\s*\[?\s*(?P<lat>-?\d{1,2}\.\d+)\s*,\s*(?P<lon>-?\d{1,3}\.\d+)",
        ),
        (Field::Position, Scope::Text, HEMISPHERE_PAIR),
        (
            Field::Latitude,
            Scope::Text,
            r"(?i)\blat(?:itude)?\b[: \t]*(?P<v>-?\d{1,2}\.\d+)[ \t]*°?[ \t]*(?P<h>[NS])?\b",
        ),
        (
            Field::Longitude,
            Scope::Text,
            r"(?i)\blon(?:gitude)?\b[: \t]*(?P<v>-?\d{1,3}\.\d+)[ \t]*°?[ \t]*(?P<h>[EW])?\b",
        ),
        (
            Field::Location,
            Scope::Text,
            r"(?i)current (?:position|location)[ \t]*(?::|\bis\b)[ \t]*(?:in |at )?(?:the )?(?P<v>[A-Za-z][^.\n]*)",
        ),
        (Field::Location, Scope::Text, r"(?i)\blocation[ \t]*:[ \t]*(?P<v>[A-Za-z][^.\n]*)"),
        (Field::Speed, Scope::Text, &speed_label),
        (Field::Speed, Scope::Text, &speed_knots),
        (Field::Course, Scope::Text, &course),
        (Field::Heading, Scope::Text, &heading),
        (
            Field::Destination,
            Scope::Text,
            r"(?i)\b(?:destination|en route to|sailing to)\b[: \t]*(?P<v>[A-Za-z][^.\n]*)",
        ),
        (Field::Eta, Scope::Text, r"\bETA\b[: \t]*(?P<v>[^\n]+)"),
        (
            Field::Eta,
            Scope::Text,
            r"(?i)expected to arrive\b[: \t]*(?:on |at )?(?P<v>[^\n]+)",
        ),
        (
            Field::Status,
            Scope::Text,
            r"(?i)\b(?:navigation status|nav status|status)\b[: \t]*(?P<v>[A-Za-z][A-Za-z ]+)",
        ),
        (
            Field::LastPort,
            Scope::Text,
            r"(?i)\b(?:last port|departed from|previous port)\b[: \t]*(?P<v>[A-Za-z][^\n,]*)",
        ),
        (Field::Flag, Scope::Text, r"(?i)\bflag\b[: \t]*(?P<v>[A-Za-z][A-Za-z ]+)"),
        (
            Field::Timestamp,
            Scope::Text,
            r"(?i)\b(?:last updated?|last seen|position received)\b[: \t]*(?P<v>[^\n]+)",
        ),
    ])
    .expect("CruiseMapper rule patterns are valid")
});

/// Reads a CruiseMapper ship page.
pub fn extract(html: &str) -> PartialVesselRecord {
    let page = Page::parse(html);
    let mut record = PartialVesselRecord::default();
    let fired = RULES.apply(&page, &mut record);
    tracing::debug!("{}: {} of {} rules matched", SOURCE_NAME, fired, RULES.rules().len());

    enrich(&mut record);
    finish(record, SOURCE_NAME)
}
