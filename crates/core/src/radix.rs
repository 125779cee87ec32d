//! Integer to binary / hexadecimal conversion by repeated division.

use serde::Serialize;

const DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Target base of a conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Radix {
    Binary,
    Hexadecimal,
}

impl Radix {
    #[must_use]
    pub const fn base(self) -> i128 {
        match self {
            Self::Binary => 2,
            Self::Hexadecimal => 16,
        }
    }
}

/// Renders `number` in `radix` by extracting the least significant digit
/// until nothing is left.
///
/// Zero renders as `"0"`. The extraction loop only runs while the value is
/// positive, so a negative number renders as the empty string.
#[must_use]
pub fn to_radix(number: i128, radix: Radix) -> String {
    if number == 0 {
        return String::from("0");
    }

    let base = radix.base();
    let mut digits = Vec::new();
    let mut rest = number;
    while rest > 0 {
        // rest % base は 0..base に収まる
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let digit = (rest % base) as usize;
        digits.push(DIGITS[digit]);
        rest /= base;
    }
    digits.reverse();

    digits.into_iter().map(char::from).collect()
}

#[must_use]
pub fn to_binary(number: i128) -> String {
    to_radix(number, Radix::Binary)
}

/// Uppercase hexadecimal (`A`-`F`).
#[must_use]
pub fn to_hexadecimal(number: i128) -> String {
    to_radix(number, Radix::Hexadecimal)
}

/// A number together with its binary and hexadecimal renderings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Conversion {
    pub value: i128,
    pub binary: String,
    pub hexadecimal: String,
}

impl Conversion {
    #[must_use]
    pub fn of(value: i128) -> Self {
        Self {
            value,
            binary: to_binary(value),
            hexadecimal: to_hexadecimal(value),
        }
    }
}
