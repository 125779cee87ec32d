use super::{Analysis, Results};
use linestat_core::words::{WordCount, WordFrequency};
use log::debug;

#[must_use]
pub fn render(counts: &[WordCount]) -> Vec<String> {
    counts
        .iter()
        .map(|WordCount { word, count }| format!("{word}: {count}"))
        .collect()
}

/// Any text is acceptable, so this never fails.
#[must_use]
pub fn analyze(lines: &[String]) -> Analysis {
    let freq: WordFrequency = lines.iter().map(String::as_str).collect();
    debug!("{} distinct words out of {}", freq.len(), freq.total());

    let counts = freq.sorted();
    Analysis {
        entries: render(&counts),
        skipped: Vec::new(),
        results: Results::WordCounts(counts),
    }
}
