//! Frequency and grouping views over an outage record table. Every function
//! here is pure and total: an empty table (or a degenerate parameter) yields
//! an empty result, never an error. Results are freshly allocated so
//! concurrent queries against one snapshot are safe.
//!
//! Ordering within equal counts is deterministic: count descending, then
//! category key ascending.

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;
use cnn_text_parser::{OutageRecord, OutageTable};
use itertools::Itertools;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// An ordered category -> count view. Serializes as a JSON object whose keys
/// keep their ranking order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountSeries(Vec<(String, u64)>);

impl CountSeries {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.0.iter().map(|(key, count)| (key.as_str(), *count))
    }

    fn top(mut self, n: usize) -> Self {
        self.0.truncate(n);
        self
    }
}

impl Serialize for CountSeries {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, count) in &self.0 {
            map.serialize_entry(key, count)?;
        }
        map.end()
    }
}

impl FromIterator<(String, u64)> for CountSeries {
    fn from_iter<I: IntoIterator<Item = (String, u64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

fn counted<I>(values: I) -> CountSeries
where
    I: IntoIterator<Item = String>,
{
    let mut counts: HashMap<String, u64> = HashMap::new();
    for value in values {
        *counts.entry(value).or_default() += 1;
    }
    counts
        .into_iter()
        .sorted_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)))
        .collect()
}

fn is_not_specified(value: &str) -> bool {
    value.eq_ignore_ascii_case("not specified")
}

/// How often each feeder appears, the literal "UNKNOWN" excluded.
pub fn feeder_outage_counts(table: &OutageTable) -> CountSeries {
    counted(
        table
            .records()
            .iter()
            .filter(|record| !record.feeder.eq_ignore_ascii_case("unknown"))
            .map(|record| record.feeder.clone()),
    )
}

/// The `n` most frequently affected areas, "Not specified" excluded.
pub fn top_affected_areas(table: &OutageTable, n: usize) -> CountSeries {
    counted(
        table
            .records()
            .iter()
            .filter(|record| !is_not_specified(&record.area))
            .map(|record| record.area.clone()),
    )
    .top(n)
}

/// The `n` most frequent outage reasons, "Not specified" and blanks excluded.
pub fn frequent_reasons(table: &OutageTable, n: usize) -> CountSeries {
    counted(
        table
            .records()
            .iter()
            .filter(|record| !is_not_specified(&record.reason) && !record.reason.trim().is_empty())
            .map(|record| record.reason.clone()),
    )
    .top(n)
}

/// Frequency of every status value.
pub fn status_distribution(table: &OutageTable) -> CountSeries {
    counted(table.records().iter().map(|record| record.status.to_string()))
}

/// Every distinct affected area, lexicographically ascending. Blanks and
/// "Not specified" are excluded.
pub fn all_locations(table: &OutageTable) -> Vec<String> {
    table
        .records()
        .iter()
        .filter(|record| !is_not_specified(&record.area) && !record.area.trim().is_empty())
        .map(|record| record.area.clone())
        .unique()
        .sorted()
        .collect()
}

/// Records whose area contains `location`, case-insensitively. An empty
/// query matches nothing.
pub fn location_data(table: &OutageTable, location: &str) -> Vec<OutageRecord> {
    if location.is_empty() {
        return Vec::new();
    }
    let needle = location.to_lowercase();
    table
        .records()
        .iter()
        .filter(|record| record.area.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Outage counts per calendar date, ascending by date.
pub fn daily_trend(table: &OutageTable) -> BTreeMap<NaiveDate, u64> {
    let mut trend = BTreeMap::new();
    for record in table.records() {
        *trend.entry(record.date).or_default() += 1;
    }
    trend
}

/// The bundle served by the summary endpoint. On an empty table every
/// member is present but empty.
#[derive(Debug, Clone, Default, Serialize)]
pub struct OutageSummary {
    pub top_faulty_feeders: CountSeries,
    pub top_affected_areas: CountSeries,
    pub frequent_reasons: CountSeries,
    pub status_distribution: CountSeries,
    pub all_locations: Vec<String>,
}

pub fn outage_summary(table: &OutageTable) -> OutageSummary {
    OutageSummary {
        top_faulty_feeders: feeder_outage_counts(table).top(5),
        top_affected_areas: top_affected_areas(table, 5),
        frequent_reasons: frequent_reasons(table, 5),
        status_distribution: status_distribution(table),
        all_locations: all_locations(table),
    }
}
