//! Report notation for kernel values.
//!
//! Floats use the shortest representation that round-trips, always with a
//! fractional or exponent part (`3.0`, `2.5`, `1e+16`, `1.5e-07`).

use crate::stats::Mode;

/// Formats a float for a report line.
#[must_use]
pub fn format_float(value: f64) -> String {
    if value.is_nan() {
        return String::from("nan");
    }
    if value.is_infinite() {
        return String::from(if value > 0.0 { "inf" } else { "-inf" });
    }

    // Debug は 1e-4 <= |x| < 1e16 の範囲で小数表記、それ以外は指数表記になる
    let shortest = format!("{value:?}");
    let Some(e) = shortest.find('e') else {
        return shortest;
    };
    let (mantissa, exponent) = (&shortest[..e], &shortest[e + 1..]);

    let (sign, digits) = match exponent.strip_prefix('-') {
        Some(digits) => ('-', digits),
        None => ('+', exponent),
    };

    let mut out = String::with_capacity(shortest.len() + 2);
    out.push_str(mantissa);
    out.push('e');
    out.push(sign);
    if digits.len() < 2 {
        out.push('0');
    }
    out.push_str(digits);
    out
}

/// A single mode renders as a float; a tie as a bracketed list.
#[must_use]
pub fn format_mode(mode: &Mode) -> String {
    match mode {
        Mode::Single(v) => format_float(*v),
        Mode::Tied(_) => {
            let values: Vec<String> = mode.values().iter().map(|v| format_float(*v)).collect();
            format!("[{}]", values.join(", "))
        }
    }
}

/// `Execution time` value: seconds with six decimals.
#[must_use]
pub fn format_seconds(seconds: f64) -> String {
    format!("{seconds:.6}")
}
