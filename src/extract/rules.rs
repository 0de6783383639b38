//! Ordered pattern rules that fill one record field each.
//!
//! A rule names the field it fills, the part of the page it reads and a regex with
//! named captures: `v` for single values, `lat`/`ns`/`lon`/`ew` for positions, and an
//! optional `h` hemisphere letter next to a lone latitude or longitude.
//! Once a field is filled, later rules for it are skipped.

use crate::domain::model::{PartialVesselRecord, Reading};
use crate::extract::coords;
use crate::extract::html::Page;
use regex::{Captures, Regex};

const MAX_TEXT_LEN: usize = 80;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Position,
    Latitude,
    Longitude,
    Speed,
    Course,
    Heading,
    Destination,
    Eta,
    Status,
    Location,
    LastPort,
    Draught,
    Flag,
    Timestamp,
    ShipName,
}

impl Field {
    pub fn is_set(self, record: &PartialVesselRecord) -> bool {
        match self {
            Field::Position => record.has_position(),
            Field::Latitude => record.latitude.is_some(),
            Field::Longitude => record.longitude.is_some(),
            Field::Speed => record.speed.is_some(),
            Field::Course => record.course.is_some(),
            Field::Heading => record.heading.is_some(),
            Field::Destination => record.destination.is_some(),
            Field::Eta => record.eta.is_some(),
            Field::Status => record.status.is_some(),
            Field::Location => record.location.is_some(),
            Field::LastPort => record.last_port.is_some(),
            Field::Draught => record.draught.is_some(),
            Field::Flag => record.flag.is_some(),
            Field::Timestamp => record.timestamp.is_some(),
            Field::ShipName => record.ship_name.is_some(),
        }
    }

    /// Writes the captured value into `record`. Returns false when the capture does not
    /// convert, leaving the record untouched.
    fn assign(self, caps: &Captures<'_>, record: &mut PartialVesselRecord) -> bool {
        match self {
            Field::Position => {
                let pair = (|| {
                    let lat = coords::signed(caps.name("lat")?.as_str(), capture(caps, "ns"))?;
                    let lon = coords::signed(caps.name("lon")?.as_str(), capture(caps, "ew"))?;
                    coords::checked(lat, lon)
                })();
                match pair {
                    Some((lat, lon)) => {
                        record.latitude = Some(lat);
                        record.longitude = Some(lon);
                        true
                    }
                    None => false,
                }
            }
            Field::Latitude => set(&mut record.latitude, hemisphere_value(caps, 90.0)),
            Field::Longitude => set(&mut record.longitude, hemisphere_value(caps, 180.0)),
            Field::Speed => set(&mut record.speed, number(caps, 0.0, 102.2)),
            Field::Course => set(&mut record.course, number(caps, 0.0, 360.0)),
            Field::Heading => set(&mut record.heading, number(caps, 0.0, 359.9)),
            Field::Draught => set(&mut record.draught, number(caps, 0.0, 30.0)),
            Field::Eta => set(&mut record.eta, text(caps).map(Reading::Text)),
            Field::Timestamp => set(&mut record.timestamp, text(caps).map(Reading::Text)),
            Field::Destination => set(&mut record.destination, text(caps)),
            Field::Status => set(&mut record.status, text(caps)),
            Field::Location => set(&mut record.location, text(caps)),
            Field::LastPort => set(&mut record.last_port, text(caps)),
            Field::Flag => set(&mut record.flag, text(caps)),
            Field::ShipName => set(&mut record.ship_name, text(caps)),
        }
    }
}

fn set<T>(slot: &mut Option<T>, value: Option<T>) -> bool {
    match value {
        Some(v) => {
            *slot = Some(v);
            true
        }
        None => false,
    }
}

fn capture<'h>(caps: &Captures<'h>, name: &str) -> Option<&'h str> {
    caps.name(name).map(|m| m.as_str())
}

fn number(caps: &Captures<'_>, min: f64, max: f64) -> Option<Reading> {
    let value: f64 = capture(caps, "v")?.trim().parse().ok()?;
    (value.is_finite() && (min..=max).contains(&value)).then_some(Reading::Number(value))
}

fn hemisphere_value(caps: &Captures<'_>, limit: f64) -> Option<f64> {
    let value = coords::signed(capture(caps, "v")?, capture(caps, "h"))?;
    (value.abs() <= limit).then_some(value)
}

fn text(caps: &Captures<'_>) -> Option<String> {
    let cleaned = clean_text(capture(caps, "v")?);
    (!cleaned.is_empty() && cleaned.len() <= MAX_TEXT_LEN).then_some(cleaned)
}

/// Collapses whitespace and strips separator punctuation from both ends.
pub fn clean_text(raw: &str) -> String {
    let collapsed = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed
        .trim_matches(|c: char| matches!(c, ':' | ',' | ';' | '|' | '-' | '.') || c.is_whitespace())
        .to_string()
}

/// Which view of the page a rule reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    Markup,
    Script,
    Section(&'static str),
    Text,
}

#[derive(Debug, Clone)]
pub struct Rule {
    pub field: Field,
    pub scope: Scope,
    pattern: Regex,
}

impl Rule {
    pub fn new(field: Field, scope: Scope, pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            field,
            scope,
            pattern: Regex::new(pattern)?,
        })
    }

    /// Tries every match in `haystack` until one converts.
    pub fn apply_to(&self, haystack: &str, record: &mut PartialVesselRecord) -> bool {
        self.pattern
            .captures_iter(haystack)
            .any(|caps| self.field.assign(&caps, record))
    }
}

#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Runs every rule in order against `page`, returning how many rules filled a field.
    pub fn apply(&self, page: &Page, record: &mut PartialVesselRecord) -> usize {
        let mut fired = 0;
        for rule in &self.rules {
            if rule.field.is_set(record) {
                continue;
            }
            let hit = match rule.scope {
                Scope::Markup => rule.apply_to(page.markup(), record),
                Scope::Script => rule.apply_to(page.scripts(), record),
                Scope::Text => rule.apply_to(page.text(), record),
                Scope::Section(css) => page
                    .section(css)
                    .is_some_and(|section| rule.apply_to(&section, record)),
            };
            if hit {
                tracing::trace!("rule for {:?} matched in {:?}", rule.field, rule.scope);
                fired += 1;
            }
        }
        fired
    }
}

/// Builds a rule set from static `(field, scope, pattern)` rows.
pub fn rule_table(rows: &[(Field, Scope, &str)]) -> Result<RuleSet, regex::Error> {
    rows.iter()
        .map(|(field, scope, pattern)| Rule::new(*field, *scope, pattern))
        .collect::<Result<Vec<_>, _>>()
        .map(RuleSet::new)
}
