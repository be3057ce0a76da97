use std::iter::Peekable;

use chrono::NaiveDate;

use crate::scanner::{classify, is_date_line, LineKind};

pub const DATE_FORMAT: &str = "%a, %d %b %Y";

/// All the lines reported under one date marker. The body excludes the
/// date line itself and is never mutated once the block is closed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    /// The raw matched date text, kept even when parsing fails so the
    /// record builder can re-attempt the parse later.
    pub date_string: String,
    pub parsed_date: Option<NaiveDate>,
    pub lines: Vec<String>,
}

pub fn segment<I>(lines: I) -> Blocks<I::IntoIter>
where
    I: IntoIterator<Item = String>,
{
    Blocks {
        lines: lines.into_iter().peekable(),
    }
}

/// Lazily yields one [`Block`] per date line. Lines ahead of the first
/// date line are discarded.
pub struct Blocks<I: Iterator<Item = String>> {
    lines: Peekable<I>,
}

impl<I: Iterator<Item = String>> Iterator for Blocks<I> {
    type Item = Block;

    fn next(&mut self) -> Option<Self::Item> {
        let date_string = loop {
            let line = self.lines.next()?;
            if let LineKind::Date(found) = classify(&line) {
                break found.to_owned();
            }
        };

        // Lenient at this stage. An unparsable date still produces a block
        // so its fields can be extracted; the record builder is the one
        // that drops it.
        let parsed_date = NaiveDate::parse_from_str(&date_string, DATE_FORMAT).ok();

        let mut body = Vec::new();
        while let Some(line) = self.lines.next_if(|line| !is_date_line(line)) {
            body.push(line);
        }

        Some(Block {
            date_string,
            parsed_date,
            lines: body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{segment, DATE_FORMAT};
    use chrono::NaiveDate;

    fn lines(raw: &str) -> Vec<String> {
        raw.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(ToOwned::to_owned)
            .collect()
    }

    #[test]
    fn test_one_block_per_date_line() {
        let input = lines(
            r"
            Ikeja Electric Customer Network Notification
            Mon, 3 Jun 2024
            UNDERTAKING:
            OGBA FAULT: DOWNTIME AFFECTING AJAO ESTATE
            AREAS AFFECTED:
            Ajao Estate
            Tue, 4 Jun 2024
            UNDERTAKING:
            IKEJA OUTAGE: PLANNED WORK
            ",
        );

        let blocks: Vec<_> = segment(input).collect();
        assert_eq!(blocks.len(), 2);

        assert_eq!(blocks[0].date_string, "Mon, 3 Jun 2024");
        assert_eq!(
            blocks[0].parsed_date,
            NaiveDate::parse_from_str("Mon, 3 Jun 2024", DATE_FORMAT).ok()
        );
        assert_eq!(
            blocks[0].lines,
            vec![
                "UNDERTAKING:",
                "OGBA FAULT: DOWNTIME AFFECTING AJAO ESTATE",
                "AREAS AFFECTED:",
                "Ajao Estate",
            ]
        );
        assert_eq!(blocks[1].lines.len(), 2);
    }

    #[test]
    fn test_repeated_dates_each_start_a_block() {
        let input = lines(
            r"
            Mon, 3 Jun 2024
            UNDERTAKING:
            first
            Mon, 3 Jun 2024
            UNDERTAKING:
            second
            ",
        );

        let blocks: Vec<_> = segment(input).collect();
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].lines, vec!["UNDERTAKING:", "first"]);
        assert_eq!(blocks[1].lines, vec!["UNDERTAKING:", "second"]);
    }

    #[test]
    fn test_date_line_with_empty_body() {
        let input = lines(
            r"
            Mon, 3 Jun 2024
            Tue, 4 Jun 2024
            ",
        );

        let blocks: Vec<_> = segment(input).collect();
        assert_eq!(blocks.len(), 2);
        assert!(blocks[0].lines.is_empty());
        assert!(blocks[1].lines.is_empty());
    }

    #[test]
    fn test_unparsable_weekday_keeps_raw_string() {
        // "Mon" against a date that is actually a Tuesday still matches the
        // date pattern, but chrono rejects the inconsistent weekday.
        let input = lines(
            r"
            Mon, 4 Jun 2024
            UNDERTAKING:
            something
            ",
        );

        let blocks: Vec<_> = segment(input).collect();
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].date_string, "Mon, 4 Jun 2024");
        assert_eq!(blocks[0].parsed_date, None);
    }

    #[test]
    fn test_empty_input_yields_no_blocks() {
        assert_eq!(segment(Vec::<String>::new()).count(), 0);
    }
}
