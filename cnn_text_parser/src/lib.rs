//! Turns the free-flowing text of the Ikeja Electric CNN status page into a
//! table of outage records. The pipeline is a two-stage pull: classified
//! lines feed a lazy block segmenter, and each block goes through the field
//! extraction heuristics before the record builder normalizes the result.

pub mod extractor;
pub mod record;
pub mod scanner;
pub mod segmenter;

pub use record::{OutageRecord, OutageTable, Status, COLUMNS};
pub use segmenter::Block;

/// Runs the whole extraction pipeline over an ordered sequence of trimmed,
/// non-empty page lines. Malformed input never fails; it degrades to fewer
/// (or zero) records.
pub fn extract_records<I>(lines: I) -> OutageTable
where
    I: IntoIterator<Item = String>,
{
    let table = record::build_records(segmenter::segment(lines));
    if table.is_empty() {
        tracing::warn!("extraction produced zero records; the CNN page layout may have changed");
    }
    table
}
