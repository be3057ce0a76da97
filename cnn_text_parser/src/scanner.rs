use lazy_static::lazy_static;
use regex::{Regex, RegexBuilder};

lazy_static! {
    static ref DATE: Regex = Regex::new(
        r"(Mon|Tue|Wed|Thu|Fri|Sat|Sun), \d{1,2} (Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec) \d{4}"
    )
    .expect("DATE regex to compile");
    static ref UNDERTAKING_LABEL: Regex = RegexBuilder::new(r"^UNDERTAKING:$")
        .case_insensitive(true)
        .build()
        .expect("UNDERTAKING_LABEL regex to compile");
    static ref AREAS_LABEL: Regex = RegexBuilder::new(r"^AREAS AFFECTED:$")
        .case_insensitive(true)
        .build()
        .expect("AREAS_LABEL regex to compile");
}

/// The three line markers the CNN page uses, plus plain text.
/// A date marker wins over the label markers when both would match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// Carries the matched date text, e.g. "Mon, 3 Jun 2024".
    Date(&'a str),
    UndertakingLabel,
    AreasLabel,
    Text,
}

pub fn classify(line: &str) -> LineKind<'_> {
    if let Some(found) = DATE.find(line) {
        return LineKind::Date(found.as_str());
    }
    if UNDERTAKING_LABEL.is_match(line) {
        return LineKind::UndertakingLabel;
    }
    if AREAS_LABEL.is_match(line) {
        return LineKind::AreasLabel;
    }
    LineKind::Text
}

pub fn is_date_line(line: &str) -> bool {
    matches!(classify(line), LineKind::Date(_))
}

#[cfg(test)]
mod tests {
    use crate::scanner::{classify, LineKind};

    #[test]
    fn test_date_line_is_recognized() {
        assert_eq!(classify("Mon, 3 Jun 2024"), LineKind::Date("Mon, 3 Jun 2024"));
        assert_eq!(classify("Fri, 25 Oct 2024"), LineKind::Date("Fri, 25 Oct 2024"));
    }

    #[test]
    fn test_date_is_found_inside_a_longer_line() {
        let kind = classify("Update for Mon, 3 Jun 2024 follows");
        assert_eq!(kind, LineKind::Date("Mon, 3 Jun 2024"));
    }

    #[test]
    fn test_labels_match_whole_line_only() {
        assert_eq!(classify("UNDERTAKING:"), LineKind::UndertakingLabel);
        assert_eq!(classify("undertaking:"), LineKind::UndertakingLabel);
        assert_eq!(classify("AREAS AFFECTED:"), LineKind::AreasLabel);
        assert_eq!(classify("areas affected:"), LineKind::AreasLabel);

        assert_eq!(classify("THE UNDERTAKING: OGBA"), LineKind::Text);
        assert_eq!(classify("AREAS AFFECTED: IKEJA"), LineKind::Text);
    }

    #[test]
    fn test_plain_text() {
        assert_eq!(classify("OGBA FAULT: DOWNTIME"), LineKind::Text);
        assert_eq!(classify("Monday 3 June"), LineKind::Text);
    }
}
