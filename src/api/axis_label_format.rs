use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Magnitude from which fixed notation gives way to exponential text.
const EXPONENTIAL_THRESHOLD: f64 = 1e21;

/// Formats `value` with exactly `decimals` fractional digits.
///
/// Rounding works on the exact binary value and breaks ties away from zero,
/// so `2.5` becomes `"3"` and `1.005` (stored as 1.00499..) becomes `"1.00"`.
/// Magnitudes of `1e21` and above use the shortest exponential form with a
/// signed exponent (`"1.25e+22"`) and ignore `decimals`.
#[must_use]
pub fn format_fixed(value: f64, decimals: u8) -> String {
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_owned();
    }
    if value.abs() >= EXPONENTIAL_THRESHOLD {
        return format_exponential(value);
    }
    let precision = usize::from(decimals);
    match Decimal::from_f64_retain(value).or_else(|| Decimal::from_f64(value)) {
        Some(exact) => {
            let rounded = exact
                .round_dp_with_strategy(u32::from(decimals), RoundingStrategy::MidpointAwayFromZero);
            format!("{rounded:.precision$}")
        }
        None => format!("{value:.precision$}"),
    }
}

fn format_exponential(value: f64) -> String {
    let text = format!("{value:e}");
    match text.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => text,
    }
}

/// Builds one value-axis label: `prefix + fixed(value) + suffix`.
#[must_use]
pub fn format_x_axis_label(value: f64, decimals: u8, prefix: &str, suffix: &str) -> String {
    let number = format_fixed(value, decimals);
    let mut label = String::with_capacity(prefix.len() + number.len() + suffix.len());
    label.push_str(prefix);
    label.push_str(&number);
    label.push_str(suffix);
    label
}

/// Rough rendered width of a label: half an em per UTF-16 code unit.
///
/// Characters outside the basic plane count twice, as browser string
/// lengths do.
#[must_use]
pub fn estimate_label_width_px(label: &str, font_size_px: f64) -> f64 {
    font_size_px * label.encode_utf16().count() as f64 / 2.0
}
