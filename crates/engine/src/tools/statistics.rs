use super::{Analysis, Results, strip_digit_separators};
use crate::error::{EngineError, Result};
use linestat_core::format::{format_float, format_mode};
use linestat_core::stats::Statistics;
use log::debug;

/// Numbers parsed from the input, plus the trimmed lines that did not parse.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NumericSamples {
    pub values: Vec<f64>,
    pub skipped: Vec<String>,
}

/// Parses one floating-point number per trimmed line.
pub fn parse_samples<'a, I>(lines: I) -> NumericSamples
where
    I: IntoIterator<Item = &'a str>,
{
    let mut samples = NumericSamples::default();
    for line in lines {
        let line = line.trim();
        match strip_digit_separators(line).parse::<f64>() {
            Ok(value) => samples.values.push(value),
            Err(_) => {
                debug!("skipping invalid data: {line:?}");
                samples.skipped.push(line.to_string());
            }
        }
    }
    samples
}

#[must_use]
pub fn render(stats: &Statistics) -> Vec<String> {
    vec![
        format!("Mean: {}", format_float(stats.mean)),
        format!("Median: {}", format_float(stats.median)),
        format!("Mode: {}", format_mode(&stats.mode)),
        format!("Variance: {}", format_float(stats.variance)),
        format!("Standard Deviation: {}", format_float(stats.standard_deviation)),
    ]
}

/// # Errors
/// `NoValidNumbers`, holding every skipped line, when no line holds a number.
pub fn analyze(lines: &[String]) -> Result<Analysis> {
    let samples = parse_samples(lines.iter().map(String::as_str));
    debug!(
        "parsed {} numbers, skipped {} lines",
        samples.values.len(),
        samples.skipped.len()
    );

    let Some(stats) = Statistics::compute(&samples.values) else {
        return Err(EngineError::NoValidNumbers {
            skipped: samples.skipped,
        });
    };

    Ok(Analysis {
        entries: render(&stats),
        skipped: samples.skipped,
        results: Results::Statistics(stats),
    })
}
