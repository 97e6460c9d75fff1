// Copyright © 2019 Bart Massey
// [This program is licensed under the "MIT License"]
// Please see the file LICENSE in the source
// distribution of this software for license terms.

//! Human-readable formatting of solver results.

/// Printed in place of every strategy entry and the value
/// when the game could not be resolved.
pub const UNRESOLVED: &str = "###";

/// Significant digits shown for every reported number.
pub const SIGNIFICANT_DIGITS: usize = 6;

/// Decimal digits after the point that render any `f64`
/// exactly in exponential form.
const EXACT_DIGITS: usize = 800;

/// Format `x` with `digits` significant digits, choosing
/// between fixed and exponential notation the way
/// ECMAScript's `Number.prototype.toPrecision()` does:
/// exponential iff the decimal exponent is below -6 or at
/// least `digits`. Rounding is on the exact binary value,
/// with exact halves going away from zero.
///
/// ```
/// use matrix_game::format::to_precision;
///
/// assert_eq!(to_precision(0.5, 6), "0.500000");
/// assert_eq!(to_precision(14.0 / 3.0, 6), "4.66667");
/// assert_eq!(to_precision(1234567.0, 6), "1.23457e+6");
/// assert_eq!(to_precision(0.3828125, 6), "0.382813");
/// ```
pub fn to_precision(x: f64, digits: usize) -> String {
    let digits = digits.clamp(1, 100);
    if x.is_nan() {
        return "NaN".to_string();
    }
    if x.is_infinite() {
        let s = if x > 0.0 { "Infinity" } else { "-Infinity" };
        return s.to_string();
    }
    if x == 0.0 {
        // Also catches -0.0.
        return format!("{:.*}", digits - 1, 0.0);
    }

    let sign = if x < 0.0 { "-" } else { "" };
    let (kept, exp) = round_digits(x.abs(), digits);
    let kept: String = kept.into_iter().map(char::from).collect();

    if exp < -6 || exp >= digits as i32 {
        let (lead, rest) = kept.split_at(1);
        let point = if rest.is_empty() { "" } else { "." };
        let esign = if exp < 0 { '-' } else { '+' };
        format!("{}{}{}{}e{}{}", sign, lead, point, rest, esign, exp.abs())
    } else if exp < 0 {
        let zeros = "0".repeat((-exp - 1) as usize);
        format!("{}0.{}{}", sign, zeros, kept)
    } else {
        let (int, frac) = kept.split_at(exp as usize + 1);
        let point = if frac.is_empty() { "" } else { "." };
        format!("{}{}{}{}", sign, int, point, frac)
    }
}

/// The first `digits` significant decimal digits of
/// positive finite `x`, rounded half up, and the decimal
/// exponent of the first of them.
fn round_digits(x: f64, digits: usize) -> (Vec<u8>, i32) {
    let sci = format!("{:.*e}", EXACT_DIGITS, x);
    let (mantissa, exp) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let mut exp = exp.parse::<i32>().unwrap_or(0);
    let all: Vec<u8> = mantissa.bytes().filter(u8::is_ascii_digit).collect();

    let mut kept = all[..digits].to_vec();
    // The expansion is exact, so a 5 here is at least half.
    if all[digits] >= b'5' {
        let mut i = digits;
        loop {
            if i == 0 {
                // All nines: 99.9 becomes 100.
                kept.insert(0, b'1');
                kept.pop();
                exp += 1;
                break;
            }
            i -= 1;
            if kept[i] == b'9' {
                kept[i] = b'0';
            } else {
                kept[i] += 1;
                break;
            }
        }
    }
    (kept, exp)
}

/// Snap `x` to zero when it is within `precision` of zero,
/// then format it to [SIGNIFICANT_DIGITS].
pub fn format_entry(x: f64, precision: f64) -> String {
    let x = if x.abs() < precision { 0.0 } else { x };
    to_precision(x, SIGNIFICANT_DIGITS)
}

#[test]
fn test_to_precision_fixed() {
    assert_eq!(to_precision(0.0, 6), "0.00000");
    assert_eq!(to_precision(-0.0, 6), "0.00000");
    assert_eq!(to_precision(1.0, 6), "1.00000");
    assert_eq!(to_precision(5.0, 6), "5.00000");
    assert_eq!(to_precision(-2.5, 6), "-2.50000");
    assert_eq!(to_precision(1.0 / 3.0, 6), "0.333333");
    assert_eq!(to_precision(1.0 / 12.0, 6), "0.0833333");
    assert_eq!(to_precision(123456.0, 6), "123456");
    assert_eq!(to_precision(0.000001234, 6), "0.00000123400");
    assert_eq!(to_precision(0.4, 3), "0.400");
}

#[test]
fn test_to_precision_carry() {
    assert_eq!(to_precision(9.9999996, 6), "10.0000");
    assert_eq!(to_precision(999999.6, 6), "1.00000e+6");
}

#[test]
fn test_to_precision_exponential() {
    assert_eq!(to_precision(1234567.0, 6), "1.23457e+6");
    assert_eq!(to_precision(0.00000012345, 6), "1.23450e-7");
    assert_eq!(to_precision(-1.0e21, 6), "-1.00000e+21");
}

#[test]
fn test_to_precision_ties() {
    assert_eq!(to_precision(0.3828125, 6), "0.382813");
    assert_eq!(to_precision(-0.0078125, 4), "-0.007813");
    assert_eq!(to_precision(0.125, 2), "0.13");
    assert_eq!(to_precision(2.5, 1), "3");
    assert_eq!(to_precision(-2.5, 1), "-3");
    // Just below a half in binary: rounds down.
    assert_eq!(to_precision(1.5e-7, 1), "1e-7");
    assert_eq!(to_precision(1.005, 3), "1.00");
}

#[test]
fn test_to_precision_nonfinite() {
    assert_eq!(to_precision(f64::NAN, 6), "NaN");
    assert_eq!(to_precision(f64::INFINITY, 6), "Infinity");
    assert_eq!(to_precision(f64::NEG_INFINITY, 6), "-Infinity");
}

#[test]
fn test_format_entry_snaps() {
    assert_eq!(format_entry(4.4e-16, 1e-6), "0.00000");
    assert_eq!(format_entry(-3.0e-9, 1e-6), "0.00000");
    assert_eq!(format_entry(2.0e-6, 1e-6), "0.00000200000");
    assert_eq!(format_entry(0.5, 1e-6), "0.500000");
}
