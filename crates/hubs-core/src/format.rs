//! Display strings for measured values.
//!
//! Hub depth is shown as a mixed number of inches rounded to the nearest
//! sixteenth (`3 1/4`, `-1 1/2`, `1/16`). Rounding is half away from zero
//! on the magnitude, so the sign never changes a rounding decision and a
//! value that rounds to zero prints as `0` rather than `-0`.

/// Finest fraction of an inch shown.
pub const FRACTION_DENOMINATOR: u64 = 16;

pub fn format_to_fraction(value: f32) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let denominator = FRACTION_DENOMINATOR as f64;
    // Every f32 magnitude times 16 is exact in f64, as are the whole part and
    // the remainder taken from it.
    let sixteenths = (f64::from(value).abs() * denominator).round();
    let whole = (sixteenths / denominator).trunc();
    let remainder = (sixteenths % denominator) as u64;
    let divisor = gcd(remainder, FRACTION_DENOMINATOR);
    let numerator = remainder / divisor;
    let denominator = FRACTION_DENOMINATOR / divisor;

    let sign = if value < 0.0 && sixteenths != 0.0 { "-" } else { "" };
    match (whole == 0.0, numerator) {
        (true, 0) => "0".to_string(),
        (false, 0) => format!("{sign}{whole:.0}"),
        (true, numerator) => format!("{sign}{numerator}/{denominator}"),
        (false, numerator) => format!("{sign}{whole:.0} {numerator}/{denominator}"),
    }
}

/// Plain decimal text used to seed a focused text field (`9.0`, `12.5`).
pub fn format_plain_decimal(value: f32) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}

/// Fixed-point label text, e.g. `format_fixed(9.0, 1) == "9.0"`.
pub fn format_fixed(value: f32, places: usize) -> String {
    format!("{value:.places$}")
}

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_reference_values() {
        assert_eq!(format_to_fraction(0.0), "0");
        assert_eq!(format_to_fraction(3.25), "3 1/4");
        assert_eq!(format_to_fraction(-1.5), "-1 1/2");
        assert_eq!(format_to_fraction(0.0625), "1/16");
    }

    #[test]
    fn reduces_to_lowest_terms() {
        assert_eq!(format_to_fraction(2.375), "2 3/8");
        assert_eq!(format_to_fraction(0.75), "3/4");
        assert_eq!(format_to_fraction(7.0), "7");
        assert_eq!(format_to_fraction(-0.25), "-1/4");
    }

    #[test]
    fn rounds_to_nearest_sixteenth() {
        // 5.6400364 * 16 = 90.24 -> 90/16 = 5 5/8
        assert_eq!(format_to_fraction(5.640_036_4), "5 5/8");
        assert_eq!(format_to_fraction(0.97), "1");
        // exactly half a sixteenth rounds away from zero
        assert_eq!(format_to_fraction(0.031_25), "1/16");
        assert_eq!(format_to_fraction(-0.031_25), "-1/16");
    }

    #[test]
    fn tiny_negative_values_print_as_zero() {
        assert_eq!(format_to_fraction(-0.01), "0");
        assert_eq!(format_to_fraction(-0.0), "0");
    }

    #[test]
    fn extreme_values_do_not_panic() {
        assert_eq!(format_to_fraction(f32::NAN), "NaN");
        assert_eq!(format_to_fraction(f32::INFINITY), "inf");
        assert_eq!(format_to_fraction(f32::NEG_INFINITY), "-inf");
        assert!(format_to_fraction(f32::MAX).starts_with(char::is_numeric));
        assert!(format_to_fraction(f32::MIN).starts_with('-'));
    }

    #[test]
    fn huge_values_keep_their_magnitude() {
        assert_eq!(format_to_fraction(1e19), "9999999980506447872");
        assert_eq!(format_to_fraction(-1e19), "-9999999980506447872");
        assert_eq!(format_to_fraction(1e25).parse::<f32>(), Ok(1e25));
        assert_eq!(
            format_to_fraction(f32::MAX),
            "340282346638528859811704183484516925440"
        );
        // largest f32 with a sixteenth: 2^19 + 1/16 needs 24 mantissa bits
        assert_eq!(format_to_fraction(524_288.0625), "524288 1/16");
    }

    #[test]
    fn plain_decimal_keeps_one_place_for_whole_numbers() {
        assert_eq!(format_plain_decimal(9.0), "9.0");
        assert_eq!(format_plain_decimal(12.5), "12.5");
        assert_eq!(format_plain_decimal(2.1), "2.1");
        assert_eq!(format_plain_decimal(-3.0), "-3.0");
    }

    #[test]
    fn fixed_places() {
        assert_eq!(format_fixed(28.0, 1), "28.0");
        assert_eq!(format_fixed(5.640_036_4, 2), "5.64");
    }
}
