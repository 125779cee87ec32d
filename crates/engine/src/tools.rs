//! Per-tool analysis: parsed input lines in, report entries out.

pub mod conversion;
pub mod statistics;
pub mod word_count;

use std::borrow::Cow;

use linestat_core::stats::Statistics;
use linestat_core::words::WordCount;
use serde::Serialize;

use conversion::ConversionEntry;

/// Structured results behind the report entries.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Results {
    Statistics(Statistics),
    Conversions(Vec<ConversionEntry>),
    WordCounts(Vec<WordCount>),
}

/// Outcome of one analysis, before timing is attached.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    /// Report lines, without the execution-time line.
    pub entries: Vec<String>,
    /// Input lines left out of the computation.
    pub skipped: Vec<String>,
    pub results: Results,
}

/// Removes `_` digit-group separators (`1_000`, `2_5.0_1`).
///
/// Every underscore must sit between two ASCII digits; otherwise the text is
/// returned untouched and fails to parse as a number.
#[must_use]
pub fn strip_digit_separators(text: &str) -> Cow<'_, str> {
    if !text.contains('_') {
        return Cow::Borrowed(text);
    }

    let bytes = text.as_bytes();
    let separated = bytes.iter().enumerate().all(|(i, &b)| {
        b != b'_'
            || (i > 0
                && bytes[i - 1].is_ascii_digit()
                && bytes.get(i + 1).is_some_and(u8::is_ascii_digit))
    });

    if separated {
        Cow::Owned(text.replace('_', ""))
    } else {
        Cow::Borrowed(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn separators_between_digits_are_removed() {
        assert_eq!(strip_digit_separators("1_000"), "1000");
        assert_eq!(strip_digit_separators("1_000.000_1"), "1000.0001");
        assert_eq!(strip_digit_separators("-2_5"), "-25");
    }

    #[test]
    fn misplaced_separators_are_kept() {
        for text in ["_1", "1_", "1__0", "1_.5", "a_1"] {
            assert_eq!(strip_digit_separators(text), text);
        }
    }

    #[test]
    fn text_without_separators_is_borrowed() {
        assert!(matches!(strip_digit_separators("42"), Cow::Borrowed("42")));
    }
}
