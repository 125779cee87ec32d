use super::{Analysis, Results, strip_digit_separators};
use linestat_core::radix::Conversion;
use log::debug;
use serde::Serialize;

/// One input line: converted, or recorded as invalid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ConversionEntry {
    Converted(Conversion),
    Invalid { line: String },
}

impl ConversionEntry {
    /// Parses the trimmed line as an integer and converts it.
    #[must_use]
    pub fn from_line(line: &str) -> Self {
        let line = line.trim();
        match strip_digit_separators(line).parse::<i128>() {
            Ok(n) => Self::Converted(Conversion::of(n)),
            Err(_) => {
                debug!("invalid data: {line:?}");
                Self::Invalid {
                    line: line.to_string(),
                }
            }
        }
    }

    #[must_use]
    pub fn render(&self) -> String {
        match self {
            Self::Converted(c) => format!(
                "{}: Binary={}, Hexadecimal={}",
                c.value, c.binary, c.hexadecimal
            ),
            Self::Invalid { line } => format!("Invalid data: {line}"),
        }
    }
}

/// Never fails: bad lines become `Invalid data` entries in input order.
#[must_use]
pub fn analyze(lines: &[String]) -> Analysis {
    let converted: Vec<ConversionEntry> = lines
        .iter()
        .map(|line| ConversionEntry::from_line(line))
        .collect();

    Analysis {
        entries: converted.iter().map(ConversionEntry::render).collect(),
        skipped: Vec::new(),
        results: Results::Conversions(converted),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_in_input_order() {
        let lines = vec!["255".to_string(), " 0 ".to_string(), "+10".to_string()];
        let analysis = analyze(&lines);
        assert_eq!(
            analysis.entries,
            vec![
                "255: Binary=11111111, Hexadecimal=FF",
                "0: Binary=0, Hexadecimal=0",
                "10: Binary=1010, Hexadecimal=A",
            ]
        );
    }

    #[test]
    fn invalid_lines_are_recorded_in_place() {
        let lines = vec!["1".to_string(), "3.5".to_string(), "abc".to_string(), "2".to_string()];
        let analysis = analyze(&lines);
        assert_eq!(
            analysis.entries,
            vec![
                "1: Binary=1, Hexadecimal=1",
                "Invalid data: 3.5",
                "Invalid data: abc",
                "2: Binary=10, Hexadecimal=2",
            ]
        );
        assert!(analysis.skipped.is_empty());
    }

    #[test]
    fn digit_groups_are_converted() {
        assert_eq!(
            ConversionEntry::from_line("65_535").render(),
            "65535: Binary=1111111111111111, Hexadecimal=FFFF"
        );
        assert_eq!(
            ConversionEntry::from_line("6__5").render(),
            "Invalid data: 6__5"
        );
    }

    #[test]
    fn negative_numbers_keep_empty_digits() {
        assert_eq!(
            ConversionEntry::from_line("-5").render(),
            "-5: Binary=, Hexadecimal="
        );
    }

    #[test]
    fn out_of_range_is_invalid() {
        let huge = "1".repeat(60);
        assert_eq!(
            ConversionEntry::from_line(&huge),
            ConversionEntry::Invalid { line: huge.clone() }
        );
    }
}
