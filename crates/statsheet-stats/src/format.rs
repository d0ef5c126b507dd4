//! Fixed-point formatting of displayed numbers.
//!
//! Rust's `{:.N}` rounds an exact tie to the even digit, so `0.125` prints as
//! `0.12`. Displayed statistics round ties away from zero instead (`0.13`),
//! which is what [`to_fixed`] does.

/// Every finite `f64` has at most this many fractional decimal digits.
const MAX_EXACT_DIGITS: usize = 1074;

/// Formats `value` with exactly `digits` fractional digits.
///
/// The magnitude is rounded half-up on its exact decimal expansion, and the
/// sign is applied afterwards: a value that is neither below nor above half a
/// unit is rounded to the larger magnitude. Negative zero prints without a sign.
/// Non-finite values use their `Display` form.
///
/// # Examples
///
/// ```
/// use statsheet_stats::format::to_fixed;
///
/// assert_eq!(to_fixed(0.125, 2), "0.13");
/// assert_eq!(to_fixed(-2.5, 0), "-3");
/// // 1.005 is stored slightly below the tie
/// assert_eq!(to_fixed(1.005, 2), "1.00");
/// assert_eq!(to_fixed(17.4, 2), "17.40");
/// ```
#[must_use]
pub fn to_fixed(value: f64, digits: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let exact = format!("{:.prec$}", value.abs(), prec = MAX_EXACT_DIGITS);
    let (int_part, frac_part) = exact.split_once('.').unwrap_or((exact.as_str(), ""));
    let frac = frac_part.as_bytes();

    let mut number = int_part.as_bytes().to_vec();
    number.extend((0..digits).map(|i| frac.get(i).copied().unwrap_or(b'0')));

    if frac.get(digits).is_some_and(|&d| d >= b'5') && !increment(&mut number) {
        number.insert(0, b'1');
    }

    let int_len = number.len() - digits;
    let mut out = String::with_capacity(number.len() + 2);
    if value < 0.0 {
        out.push('-');
    }
    out.extend(number[..int_len].iter().map(|&b| char::from(b)));
    if digits > 0 {
        out.push('.');
        out.extend(number[int_len..].iter().map(|&b| char::from(b)));
    }
    out
}

/// Adds one to the decimal digits in `number`; returns `false` on carry out.
fn increment(number: &mut [u8]) -> bool {
    for digit in number.iter_mut().rev() {
        if *digit == b'9' {
            *digit = b'0';
        } else {
            *digit += 1;
            return true;
        }
    }
    false
}
