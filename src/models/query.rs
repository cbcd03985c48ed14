//! Query parameter models for the current weather endpoint.

use paperclip::actix::Apiv2Schema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Keys that identify a location for the weather provider
pub const LOCATION_KEYS: [&str; 4] = ["zip", "q", "lat", "lon"];

/// A query parameter that may be supplied once or repeated
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryValue {
    Single(String),
    Multiple(Vec<String>),
}

impl QueryValue {
    /// First supplied value; later repetitions are ignored
    pub fn first(&self) -> Option<&str> {
        match self {
            QueryValue::Single(value) => Some(value.as_str()),
            QueryValue::Multiple(values) => values.first().map(String::as_str),
        }
    }

    /// All supplied values in the order they appeared
    pub fn values(&self) -> Vec<&str> {
        match self {
            QueryValue::Single(value) => vec![value.as_str()],
            QueryValue::Multiple(values) => values.iter().map(String::as_str).collect(),
        }
    }

    /// Whether the parameter counts as supplied.
    ///
    /// A single empty value does not; a repeated parameter always does.
    pub fn is_present(&self) -> bool {
        match self {
            QueryValue::Single(value) => !value.is_empty(),
            QueryValue::Multiple(_) => true,
        }
    }

    fn push(&mut self, value: String) {
        match self {
            QueryValue::Single(existing) => {
                let first = std::mem::take(existing);
                *self = QueryValue::Multiple(vec![first, value]);
            }
            QueryValue::Multiple(values) => values.push(value),
        }
    }
}

/// Decoded query string, keyed by parameter name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawQuery {
    values: BTreeMap<String, QueryValue>,
}

impl RawQuery {
    /// Parse an `application/x-www-form-urlencoded` query string.
    ///
    /// Repeated keys collapse into [`QueryValue::Multiple`] in order of appearance.
    pub fn parse(query_string: &str) -> Self {
        let mut values: BTreeMap<String, QueryValue> = BTreeMap::new();

        for (key, value) in url::form_urlencoded::parse(query_string.as_bytes()) {
            let value = value.into_owned();
            match values.get_mut(key.as_ref()) {
                Some(existing) => existing.push(value),
                None => {
                    values.insert(key.into_owned(), QueryValue::Single(value));
                }
            }
        }

        Self { values }
    }

    pub fn get(&self, key: &str) -> Option<&QueryValue> {
        self.values.get(key)
    }

    pub fn into_inner(self) -> BTreeMap<String, QueryValue> {
        self.values
    }
}

/// Unit system understood by the weather provider
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Apiv2Schema)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    #[default]
    Metric,
    Imperial,
    Standard,
}

impl Units {
    pub const ALL: [Units; 3] = [Units::Metric, Units::Imperial, Units::Standard];

    pub fn as_str(&self) -> &'static str {
        match self {
            Units::Metric => "metric",
            Units::Imperial => "imperial",
            Units::Standard => "standard",
        }
    }

    /// Exact, case-sensitive match against the allowed unit names
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|units| units.as_str() == value)
    }

    /// Pick units from a raw query value.
    ///
    /// Only the first value is considered. Anything unrecognised silently
    /// becomes the default instead of raising an error.
    pub fn from_query(value: Option<&QueryValue>) -> Self {
        value
            .and_then(QueryValue::first)
            .and_then(Self::parse)
            .unwrap_or_default()
    }
}

impl fmt::Display for Units {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parameters forwarded to the weather provider
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderParams {
    values: BTreeMap<String, QueryValue>,
    units: Units,
}

impl ProviderParams {
    /// Merge raw parameters with validated units; the validated value wins
    pub fn new(raw: RawQuery, units: Units) -> Self {
        let mut values = raw.into_inner();
        values.insert(
            "units".to_string(),
            QueryValue::Single(units.as_str().to_string()),
        );
        Self { values, units }
    }

    pub fn units(&self) -> Units {
        self.units
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).and_then(QueryValue::first)
    }

    /// True when any location key is supplied
    pub fn has_location(&self) -> bool {
        LOCATION_KEYS
            .iter()
            .any(|key| self.values.get(*key).is_some_and(QueryValue::is_present))
    }

    /// Store resolved coordinates as the `lat`/`lon` parameters
    pub fn set_coordinates(&mut self, coordinates: Coordinates) {
        self.values.insert(
            "lat".to_string(),
            QueryValue::Single(coordinates.lat.to_string()),
        );
        self.values.insert(
            "lon".to_string(),
            QueryValue::Single(coordinates.lon.to_string()),
        );
    }

    /// Flatten into query pairs; repeated parameters are emitted once per value
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        self.values
            .iter()
            .flat_map(|(key, value)| {
                value
                    .values()
                    .into_iter()
                    .map(move |v| (key.clone(), v.to_string()))
            })
            .collect()
    }
}

/// Geographic position resolved for a client
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}
