use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;

use crate::extractor;
use crate::segmenter::{Block, DATE_FORMAT};

/// The fixed schema of the record table. Serialized records carry exactly
/// these keys, in this order, even when the table is empty.
pub const COLUMNS: [&str; 5] = ["Date", "Feeder", "Status", "Reason", "Area"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Status {
    Fault,
    #[default]
    Outage,
    Downtime,
    Maintenance,
    Shutdown,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let word = match self {
            Status::Fault => "Fault",
            Status::Outage => "Outage",
            Status::Downtime => "Downtime",
            Status::Maintenance => "Maintenance",
            Status::Shutdown => "Shutdown",
        };
        f.write_str(word)
    }
}

/// One normalized outage entry. Immutable once built; the date is always a
/// valid calendar date because unparsable dates are filtered out before a
/// record is created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutageRecord {
    #[serde(rename = "Date")]
    pub date: NaiveDate,
    #[serde(rename = "Feeder")]
    pub feeder: String,
    #[serde(rename = "Status")]
    pub status: Status,
    #[serde(rename = "Reason")]
    pub reason: String,
    #[serde(rename = "Area")]
    pub area: String,
}

/// An ordered, append-only table of outage records. One extraction run
/// produces one table; the serving layer swaps whole tables atomically.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct OutageTable {
    records: Vec<OutageRecord>,
}

impl OutageTable {
    pub fn records(&self) -> &[OutageRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl From<Vec<OutageRecord>> for OutageTable {
    fn from(records: Vec<OutageRecord>) -> Self {
        Self { records }
    }
}

/// Builds the record table from segmented blocks, preserving the order of
/// discovery. Blocks without undertaking text and blocks whose date cannot
/// be re-parsed contribute no record.
pub fn build_records<I>(blocks: I) -> OutageTable
where
    I: IntoIterator<Item = Block>,
{
    let mut records = Vec::new();
    for block in blocks {
        let Some(fields) = extractor::extract(&block) else {
            continue;
        };
        if fields.undertaking.trim().is_empty() {
            continue;
        }
        // Strict filter, independent of the segmenter's lenient parse.
        let Some(date) = reparse_date(&block.date_string) else {
            continue;
        };
        records.push(OutageRecord {
            date,
            feeder: fields.feeder.trim().to_uppercase(),
            status: fields.status,
            reason: fields.reason.trim().to_owned(),
            area: fields.area.trim().to_owned(),
        });
    }
    OutageTable { records }
}

fn reparse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::{build_records, COLUMNS};
    use crate::record::Status;
    use crate::segmenter::segment;
    use chrono::NaiveDate;

    fn lines(raw: &str) -> Vec<String> {
        raw.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(ToOwned::to_owned)
            .collect()
    }

    #[test]
    fn test_full_pipeline_produces_normalized_records() {
        let table = build_records(segment(lines(
            r"
            Ikeja Electric Customer Network Notification
            Mon, 3 Jun 2024
            UNDERTAKING:
            ogba FAULT: downtime affecting ajao estate
            AREAS AFFECTED:
            Ajao Estate
            Tue, 4 Jun 2024
            UNDERTAKING:
            IKEJA OUTAGE: planned work
            ",
        )));

        let records = table.records();
        assert_eq!(records.len(), 2);

        assert_eq!(records[0].date, NaiveDate::from_ymd_opt(2024, 6, 3).unwrap());
        assert_eq!(records[0].feeder, "OGBA");
        assert_eq!(records[0].status, Status::Downtime);
        assert_eq!(records[0].reason, "affecting ajao estate");
        assert_eq!(records[0].area, "Ajao Estate");

        assert_eq!(records[1].date, NaiveDate::from_ymd_opt(2024, 6, 4).unwrap());
        assert_eq!(records[1].feeder, "IKEJA");
        assert_eq!(records[1].status, Status::Outage);
        assert_eq!(records[1].area, "Not specified");
    }

    #[test]
    fn test_record_with_unparsable_date_is_dropped() {
        // 4 Jun 2024 was a Tuesday, so the weekday check rejects this date.
        let table = build_records(segment(lines(
            r"
            Mon, 4 Jun 2024
            UNDERTAKING:
            OGBA FAULT: cable cut
            ",
        )));

        assert!(table.is_empty());
    }

    #[test]
    fn test_block_without_undertaking_text_yields_no_record() {
        let table = build_records(segment(lines(
            r"
            Mon, 3 Jun 2024
            AREAS AFFECTED:
            Ikeja
            Tue, 4 Jun 2024
            UNDERTAKING:
            AREAS AFFECTED:
            Agege
            ",
        )));

        assert!(table.is_empty());
    }

    #[test]
    fn test_empty_input_produces_empty_table_with_schema() {
        let table = build_records(segment(Vec::new()));

        assert!(table.is_empty());
        assert_eq!(table.len(), 0);
        assert_eq!(COLUMNS, ["Date", "Feeder", "Status", "Reason", "Area"]);
        assert_eq!(serde_json::to_string(&table).unwrap(), "[]");
    }
}
