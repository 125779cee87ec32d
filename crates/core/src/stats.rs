//! Descriptive statistics over a numeric sample set.
//!
//! Every function takes the samples in input order and returns `None` for an
//! empty slice instead of producing a division by zero.

use hashbrown::HashMap;
use hashbrown::hash_map::Entry;
use serde::Serialize;

/// Most frequent value(s) of a sample set.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Mode {
    /// Exactly one value attains the highest count.
    Single(f64),
    /// Several values share the highest count, in first-occurrence order.
    Tied(Vec<f64>),
}

impl Mode {
    /// Values making up the mode, in first-occurrence order.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        match self {
            Self::Single(v) => core::slice::from_ref(v),
            Self::Tied(vs) => vs,
        }
    }
}

/// All descriptive statistics of a non-empty sample set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Statistics {
    /// Number of samples.
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    pub mode: Mode,
    /// Population variance.
    pub variance: f64,
    pub standard_deviation: f64,
}

impl Statistics {
    /// Computes every statistic at once. Returns `None` when `values` is empty.
    #[must_use]
    pub fn compute(values: &[f64]) -> Option<Self> {
        let mean = mean(values)?;
        let median = median(values)?;
        let mode = mode(values)?;
        let variance = variance(values, mean)?;

        Some(Self {
            count: values.len(),
            mean,
            median,
            mode,
            variance,
            standard_deviation: standard_deviation(variance),
        })
    }
}

/// Sum with Neumaier compensation.
///
/// Once an infinity or NaN enters the running sum the plain sum is returned,
/// since the compensation term is meaningless from that point on.
#[must_use]
pub fn compensated_sum<I>(values: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    let mut sum = 0.0_f64;
    let mut compensation = 0.0_f64;

    for v in values {
        let t = sum + v;
        if sum.abs() >= v.abs() {
            compensation += (sum - t) + v;
        } else {
            compensation += (v - t) + sum;
        }
        sum = t;
    }

    if sum.is_finite() { sum + compensation } else { sum }
}

/// Arithmetic mean.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(compensated_sum(values.iter().copied()) / values.len() as f64)
}

/// Middle value of a sorted copy, or the average of the two central values
/// for an even count.
#[must_use]
pub fn median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let middle = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Some((sorted[middle - 1] + sorted[middle]) / 2.0)
    } else {
        Some(sorted[middle])
    }
}

struct Tally {
    value: f64,
    count: usize,
}

/// Value(s) with the highest occurrence count.
///
/// Values compare numerically: `0.0` and `-0.0` are counted together under
/// whichever spelling appeared first, and each NaN counts on its own.
#[must_use]
pub fn mode(values: &[f64]) -> Option<Mode> {
    let mut index: HashMap<u64, usize> = HashMap::with_capacity(values.len());
    let mut tallies: Vec<Tally> = Vec::new();

    for &value in values {
        if value.is_nan() {
            tallies.push(Tally { value, count: 1 });
            continue;
        }

        let key = if value == 0.0 { 0.0_f64.to_bits() } else { value.to_bits() };
        match index.entry(key) {
            Entry::Occupied(slot) => tallies[*slot.get()].count += 1,
            Entry::Vacant(slot) => {
                slot.insert(tallies.len());
                tallies.push(Tally { value, count: 1 });
            }
        }
    }

    let max = tallies.iter().map(|t| t.count).max()?;
    let mut modes: Vec<f64> = tallies
        .iter()
        .filter(|t| t.count == max)
        .map(|t| t.value)
        .collect();

    if modes.len() == 1 {
        modes.pop().map(Mode::Single)
    } else {
        Some(Mode::Tied(modes))
    }
}

/// Population variance: mean of the squared deviations from `mean`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn variance(values: &[f64], mean: f64) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let squared = values.iter().map(|v| (v - mean).powi(2));
    Some(compensated_sum(squared) / values.len() as f64)
}

#[must_use]
pub fn standard_deviation(variance: f64) -> f64 {
    variance.sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_of_simple_sequence() {
        assert_eq!(mean(&[1.0, 2.0, 3.0, 4.0]), Some(2.5));
        assert_eq!(mean(&[]), None);
    }

    #[test]
    fn compensated_sum_keeps_small_terms() {
        // 素朴な加算だと 1.0 が消える
        let values = [1e100, 1.0, -1e100];
        assert_eq!(compensated_sum(values), 1.0);
        assert_eq!(compensated_sum([0.1; 10]), 1.0);
    }

    #[test]
    fn compensated_sum_propagates_infinity() {
        assert_eq!(compensated_sum([1.0, f64::INFINITY, 2.0]), f64::INFINITY);
        assert!(compensated_sum([f64::INFINITY, f64::NEG_INFINITY]).is_nan());
    }

    #[test]
    fn median_odd_and_even() {
        assert_eq!(median(&[3.0, 1.0, 2.0]), Some(2.0));
        assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]), Some(2.5));
        assert_eq!(median(&[7.0]), Some(7.0));
        assert_eq!(median(&[]), None);
    }

    #[test]
    fn median_does_not_reorder_input() {
        let values = vec![5.0, 1.0, 3.0];
        let _ = median(&values);
        assert_eq!(values, vec![5.0, 1.0, 3.0]);
    }

    #[test]
    fn mode_single_winner() {
        assert_eq!(mode(&[1.0, 1.0, 2.0]), Some(Mode::Single(1.0)));
    }

    #[test]
    fn mode_tie_keeps_first_occurrence_order() {
        assert_eq!(
            mode(&[2.0, 1.0, 1.0, 2.0, 3.0]),
            Some(Mode::Tied(vec![2.0, 1.0]))
        );
        assert_eq!(
            mode(&[1.0, 1.0, 2.0, 2.0, 3.0]),
            Some(Mode::Tied(vec![1.0, 2.0]))
        );
    }

    #[test]
    fn mode_all_distinct_is_a_tie_of_everything() {
        assert_eq!(
            mode(&[3.0, 2.0, 1.0]),
            Some(Mode::Tied(vec![3.0, 2.0, 1.0]))
        );
    }

    #[test]
    fn mode_treats_signed_zeros_as_equal() {
        let m = mode(&[-0.0, 0.0, 5.0]).unwrap();
        assert_eq!(m, Mode::Single(0.0));
        assert!(m.values()[0].is_sign_negative());
    }

    #[test]
    fn mode_counts_each_nan_separately() {
        let m = mode(&[f64::NAN, f64::NAN, 1.0, 1.0]).unwrap();
        assert_eq!(m, Mode::Single(1.0));
    }

    #[test]
    fn variance_is_population_variance() {
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let m = mean(&values).unwrap();
        assert_eq!(m, 5.0);
        assert_eq!(variance(&values, m), Some(4.0));
        assert_eq!(standard_deviation(4.0), 2.0);
    }

    #[test]
    fn compute_collects_everything() {
        let stats = Statistics::compute(&[1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(stats.count, 4);
        assert_eq!(stats.mean, 2.5);
        assert_eq!(stats.median, 2.5);
        assert_eq!(stats.mode, Mode::Tied(vec![1.0, 2.0, 3.0, 4.0]));
        assert_eq!(stats.variance, 1.25);
        assert_eq!(stats.standard_deviation, 1.25_f64.sqrt());

        assert!(Statistics::compute(&[]).is_none());
    }

    #[test]
    fn mode_values_view() {
        assert_eq!(Mode::Single(4.0).values(), &[4.0]);
        assert_eq!(Mode::Tied(vec![1.0, 2.0]).values(), &[1.0, 2.0]);
    }
}
