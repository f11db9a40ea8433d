//! Measurement formatting and parsing.
//!
//! Drill sizes are conventionally quoted as reduced fractions at a
//! power-of-two resolution (e.g. 1/64"). This module converts decimal
//! sizes to mixed-number fraction strings and parses sizes entered in
//! decimal, fractional, or mixed form.

use crate::error::{UnitError, UnitResult};

/// Formats a non-negative decimal value as a reduced mixed-number fraction
/// at the given power-of-two denominator resolution.
///
/// The fractional remainder is rounded half-up to the nearest
/// `1/denominator`, then reduced by halving numerator and denominator while
/// the numerator stays even and nonzero. Output forms are `"W"` (no
/// remainder), `"W-N/D"` (whole plus fraction), and `"N/D"` (fraction only).
///
/// ```
/// use hexdrill_core::units::format_fraction;
/// assert_eq!(format_fraction(0.25, 64), "1/4");
/// assert_eq!(format_fraction(1.5, 64), "1-1/2");
/// assert_eq!(format_fraction(0.0, 64), "0");
/// ```
pub fn format_fraction(value: f64, denominator: u32) -> String {
    let whole = value.trunc() as u64;
    let remainder = value - value.trunc();

    let mut numerator = (remainder * f64::from(denominator) + 0.5).floor() as u64;
    let mut denominator = u64::from(denominator);

    while numerator % 2 == 0 && numerator != 0 {
        numerator /= 2;
        denominator /= 2;
    }

    if numerator == 0 {
        format!("{}", whole)
    } else if whole != 0 {
        format!("{}-{}/{}", whole, numerator, denominator)
    } else {
        format!("{}/{}", numerator, denominator)
    }
}

/// Parses a measurement string into a decimal value.
///
/// Accepts decimal (`"0.75"`), fractional (`"3/8"`), and mixed forms with
/// either a dash or a space separating the whole part (`"1-1/2"`,
/// `"1 1/2"`).
pub fn parse_measurement(input: &str) -> UnitResult<f64> {
    let input = input.trim();
    if input.is_empty() {
        return Err(UnitError::Empty);
    }

    if !input.contains('/') {
        return input
            .parse::<f64>()
            .map_err(|_| UnitError::InvalidNumber(input.to_string()));
    }

    // Mixed numbers use '-' or whitespace between whole part and fraction.
    let mut total = 0.0;
    for part in input.split(['-', ' ']).filter(|p| !p.is_empty()) {
        if let Some((num, den)) = part.split_once('/') {
            let num = num
                .parse::<f64>()
                .map_err(|_| UnitError::InvalidFraction(part.to_string()))?;
            let den = den
                .parse::<f64>()
                .map_err(|_| UnitError::InvalidFraction(part.to_string()))?;
            if den == 0.0 {
                return Err(UnitError::ZeroDenominator);
            }
            total += num / den;
        } else {
            total += part
                .parse::<f64>()
                .map_err(|_| UnitError::InvalidNumber(part.to_string()))?;
        }
    }
    Ok(total)
}
