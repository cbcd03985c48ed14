//! Input normalization for the current weather endpoint.

use crate::models::{ProviderParams, RawQuery, Units};

/// Turn a raw query string into provider parameters with validated units.
///
/// Invalid units never raise an error; they are replaced by the default.
pub fn normalize(query_string: &str) -> ProviderParams {
    let raw = RawQuery::parse(query_string);
    let units = Units::from_query(raw.get("units"));
    ProviderParams::new(raw, units)
}
