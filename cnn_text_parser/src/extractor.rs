use lazy_static::lazy_static;
use regex::{Regex, RegexBuilder};

use crate::record::Status;
use crate::scanner::{classify, LineKind};
use crate::segmenter::Block;

lazy_static! {
    /// Matches e.g. "OGBA FAULT: DOWNTIME AFFECTING AJAO ESTATE", splitting
    /// the feeder-and-keyword prefix from the free-text remainder.
    static ref FEEDER_REASON: Regex = RegexBuilder::new(
        r"([A-Z0-9\s-]+(?:FAULT|OUTAGE|DOWNTIME|MAINTENANCE|SHUTDOWN)):\s*(.*)"
    )
    .case_insensitive(true)
    .build()
    .expect("FEEDER_REASON regex to compile");
    /// The tighter identifier token immediately preceding a status keyword,
    /// e.g. "OGBA FAULT" -> "OGBA".
    static ref FEEDER_TOKEN: Regex = RegexBuilder::new(
        r"([A-Z0-9_-]+)\s+(?:FAULT|OUTAGE|DOWNTIME|MAINTENANCE|SHUTDOWN)"
    )
    .case_insensitive(true)
    .build()
    .expect("FEEDER_TOKEN regex to compile");
    /// A status keyword left dangling at the start of the reason text.
    static ref LEADING_STATUS_KEYWORD: Regex = RegexBuilder::new(
        r"^(?:FAULT|OUTAGE|DOWNTIME|MAINTENANCE|SHUTDOWN)[:\s-]*"
    )
    .case_insensitive(true)
    .build()
    .expect("LEADING_STATUS_KEYWORD regex to compile");
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedFields {
    /// The raw joined undertaking span. Empty when the label line had no
    /// following text; the record builder drops such blocks.
    pub undertaking: String,
    pub feeder: String,
    pub status: Status,
    pub reason: String,
    pub area: String,
}

/// Derives the outage fields from one block. A block without an
/// `UNDERTAKING:` label yields nothing and is silently skipped.
pub fn extract(block: &Block) -> Option<ExtractedFields> {
    let undertaking = labelled_span(&block.lines, opens_undertaking, closes_undertaking)?;
    let area = labelled_span(&block.lines, opens_areas, closes_areas).unwrap_or_default();

    let (feeder, status, reason) = derive_feeder_status_reason(&undertaking);

    Some(ExtractedFields {
        feeder: non_empty_or(feeder, "Unknown"),
        status,
        reason: non_empty_or(reason, "Not specified"),
        area: non_empty_or(area, "Not specified"),
        undertaking,
    })
}

fn opens_undertaking(kind: &LineKind) -> bool {
    matches!(kind, LineKind::UndertakingLabel)
}

fn closes_undertaking(kind: &LineKind) -> bool {
    matches!(kind, LineKind::AreasLabel | LineKind::Date(_))
}

fn opens_areas(kind: &LineKind) -> bool {
    matches!(kind, LineKind::AreasLabel)
}

fn closes_areas(kind: &LineKind) -> bool {
    matches!(kind, LineKind::UndertakingLabel | LineKind::Date(_))
}

/// Collects the text following the FIRST line matching `opens`, up to (but
/// excluding) a line matching `closes`, joined with single spaces. Repeated
/// label lines inside the span are skipped rather than captured.
fn labelled_span(
    lines: &[String],
    opens: fn(&LineKind) -> bool,
    closes: fn(&LineKind) -> bool,
) -> Option<String> {
    let start = lines.iter().position(|line| opens(&classify(line)))?;

    let mut pieces = Vec::new();
    for line in &lines[start + 1..] {
        let kind = classify(line);
        if closes(&kind) {
            break;
        }
        if opens(&kind) {
            continue;
        }
        pieces.push(line.as_str());
    }

    Some(pieces.join(" ").trim().to_owned())
}

/// Keyword priority when several appear in the same undertaking text:
/// Downtime > Maintenance > Shutdown > Fault. Only consulted once the
/// keyword pattern has matched; the fallback paths keep the default.
fn derive_status(undertaking: &str) -> Status {
    let upper = undertaking.to_uppercase();
    if upper.contains("DOWNTIME") {
        Status::Downtime
    } else if upper.contains("MAINTENANCE") {
        Status::Maintenance
    } else if upper.contains("SHUTDOWN") {
        Status::Shutdown
    } else if upper.contains("FAULT") {
        Status::Fault
    } else {
        Status::Outage
    }
}

fn derive_feeder_status_reason(undertaking: &str) -> (String, Status, String) {
    if let Some(captures) = FEEDER_REASON.captures(undertaking) {
        let feeder_part = captures[1].trim().to_owned();
        let raw_reason = captures[2].trim();
        let reason = LEADING_STATUS_KEYWORD
            .replace(raw_reason, "")
            .trim()
            .to_owned();

        let feeder = match FEEDER_TOKEN.captures(&feeder_part) {
            Some(token) => token[1].trim().to_owned(),
            None => feeder_part
                .split(':')
                .next()
                .unwrap_or_default()
                .trim()
                .to_owned(),
        };
        return (feeder, derive_status(undertaking), reason);
    }

    // Fallback: "PREFIX: some reason" where the prefix looks like an
    // identifier (all uppercase, at least one letter). No keyword pattern
    // matched, so the status stays at its default.
    if let Some((prefix, rest)) = undertaking.split_once(':') {
        let prefix = prefix.trim();
        let has_letters = prefix.chars().any(|c| c.is_ascii_alphabetic());
        let all_upper = !prefix.chars().any(char::is_lowercase);
        if has_letters && all_upper {
            return (prefix.to_owned(), Status::default(), rest.trim().to_owned());
        }
    }

    (
        "Unknown".to_owned(),
        Status::default(),
        undertaking.trim().to_owned(),
    )
}

fn non_empty_or(value: String, fallback: &str) -> String {
    if value.trim().is_empty() {
        fallback.to_owned()
    } else {
        value
    }
}
