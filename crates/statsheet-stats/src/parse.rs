//! Freeform numeric input parsing.
//!
//! Input text is split on any run of commas and whitespace, and each token is
//! read with leading-numeric-prefix semantics: the longest prefix that forms a
//! decimal number is used and the rest of the token is ignored.
//!
//! # Examples
//!
//! ```
//! use statsheet_stats::parse::parse_numbers;
//!
//! assert_eq!(parse_numbers("12, 15\n18abc,,  x 20"), vec![12.0, 15.0, 18.0, 20.0]);
//! assert!(parse_numbers("   ").is_empty());
//! ```

/// Parses every number found in `input`, in order of appearance.
///
/// Tokens without a numeric prefix are dropped silently, as are prefixes that
/// evaluate to a non-finite value (`Infinity`, `1e999`). An input without any
/// number yields an empty vector; this function never fails.
///
/// # Examples
///
/// ```
/// # use statsheet_stats::parse::parse_numbers;
/// assert_eq!(parse_numbers("1,2,,3"), vec![1.0, 2.0, 3.0]);
/// assert_eq!(parse_numbers("1 2\n3,4"), vec![1.0, 2.0, 3.0, 4.0]);
/// assert_eq!(parse_numbers("4, 4, -1.5e1"), vec![4.0, 4.0, -15.0]);
/// ```
#[must_use]
pub fn parse_numbers(input: &str) -> Vec<f64> {
    input
        .split(is_delimiter)
        .filter(|token| !token.is_empty())
        .filter_map(parse_float_prefix)
        .filter(|value| value.is_finite())
        .collect()
}

/// Returns `true` for characters that separate numbers.
#[must_use]
pub fn is_delimiter(c: char) -> bool {
    c == ',' || is_blank(c)
}

/// Unicode white space plus the byte order mark (U+FEFF), without NEL (U+0085).
#[must_use]
pub fn is_blank(c: char) -> bool {
    match c {
        '\u{feff}' => true,
        '\u{85}' => false,
        _ => c.is_whitespace(),
    }
}

/// Reads the longest numeric prefix of `token`.
///
/// Accepts an optional sign followed by either `Infinity` or a decimal
/// mantissa (`12`, `12.5`, `12.`, `.5`) and an optional exponent. The exponent
/// is only consumed when at least one digit follows the `e`, so `"1e"` reads
/// as `1`.
///
/// Returns `None` when the token does not start with a number.
///
/// # Examples
///
/// ```
/// # use statsheet_stats::parse::parse_float_prefix;
/// assert_eq!(parse_float_prefix("12abc"), Some(12.0));
/// assert_eq!(parse_float_prefix("-.5kg"), Some(-0.5));
/// assert_eq!(parse_float_prefix("2e3x"), Some(2000.0));
/// assert_eq!(parse_float_prefix("1e+"), Some(1.0));
/// assert_eq!(parse_float_prefix("abc"), None);
/// assert_eq!(parse_float_prefix("."), None);
/// ```
#[must_use]
pub fn parse_float_prefix(token: &str) -> Option<f64> {
    let token = token.trim_start_matches(is_blank);
    let bytes = token.as_bytes();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    if token[end..].starts_with("Infinity") {
        let sign = if bytes.first() == Some(&b'-') {
            -1.0
        } else {
            1.0
        };
        return Some(sign * f64::INFINITY);
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    token[..end].parse().ok()
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
