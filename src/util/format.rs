/// Number of significant digits used by [`format_result`].
pub const RESULT_PRECISION: usize = 15;

/// Formats a calculation result for display.
///
/// Equivalent to [`format_general`] with [`RESULT_PRECISION`] significant
/// digits.
///
/// ## Example
/// ```
/// use calc::util::format::format_result;
///
/// assert_eq!(format_result(0.1 + 0.2), "0.3");
/// assert_eq!(format_result(512.0), "512");
/// assert_eq!(format_result(1e20), "1E+20");
/// ```
#[must_use]
pub fn format_result(value: f64) -> String {
    format_general(value, RESULT_PRECISION)
}

/// Formats a number with `precision` significant digits in `%G` style.
///
/// The value is rounded to `precision` significant digits. If the decimal
/// exponent of the rounded value is below `-4` or at least `precision`, the
/// scientific form `<mantissa>E<sign><exponent>` is used, with at least two
/// exponent digits; otherwise the plain decimal form is used. In both forms
/// trailing zeros of the fraction and a trailing decimal point are removed.
///
/// Infinities are written `+Inf` and `-Inf`, and not-a-number as `NaN`.
///
/// ## Parameters
/// - `value`: The number to format.
/// - `precision`: Significant digits; `0` is treated as `1`.
///
/// ## Returns
/// The formatted number.
///
/// ## Example
/// ```
/// use calc::util::format::format_general;
///
/// assert_eq!(format_general(1234.5678, 6), "1234.57");
/// assert_eq!(format_general(0.000_012_5, 6), "1.25E-05");
/// assert_eq!(format_general(-0.0, 6), "-0");
/// assert_eq!(format_general(f64::NEG_INFINITY, 6), "-Inf");
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap, clippy::cast_sign_loss)]
pub fn format_general(value: f64, precision: usize) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "+Inf" } else { "-Inf" }.to_string();
    }

    let precision = precision.max(1);
    let scientific = format!("{value:.prec$e}", prec = precision - 1);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let exponent: i32 = exponent.parse().unwrap_or_default();

    if exponent < -4 || exponent >= precision as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}E{sign}{:02}", trim_fraction(mantissa), exponent.unsigned_abs())
    } else {
        let decimals = (precision as i32 - 1 - exponent) as usize;
        trim_fraction(&format!("{value:.decimals$}")).to_string()
    }
}

/// Removes trailing zeros of a fraction, and the decimal point if nothing
/// follows it. Integers are returned unchanged.
fn trim_fraction(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}
