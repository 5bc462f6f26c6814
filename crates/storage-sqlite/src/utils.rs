//! Conversion helpers shared by the entity DB models.

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Parses a TEXT decimal column into a `Decimal`, with a fallback through
/// f64 for values written in scientific notation. Garbage values are logged
/// and read as zero rather than failing the whole row.
pub(crate) fn parse_decimal_string_tolerant(value_str: &str, field_name: &str) -> Decimal {
    match Decimal::from_str(value_str) {
        Ok(d) => d,
        Err(e_decimal) => match f64::from_str(value_str) {
            Ok(f_val) => match Decimal::from_f64(f_val) {
                Some(dec_val) => dec_val,
                None => {
                    log::error!(
                        "Failed to convert {} '{}' (parsed as f64: {}) to Decimal.",
                        field_name,
                        value_str,
                        f_val
                    );
                    Decimal::ZERO
                }
            },
            Err(e_f64) => {
                log::error!(
                    "Failed to parse {} '{}': as Decimal (err: {}), and as f64 (err: {}). Falling back to ZERO.",
                    field_name, value_str, e_decimal, e_f64
                );
                Decimal::ZERO
            }
        },
    }
}

pub(crate) fn parse_opt_decimal(value: Option<String>, field_name: &str) -> Option<Decimal> {
    value.map(|s| parse_decimal_string_tolerant(&s, field_name))
}

pub(crate) fn opt_decimal_to_string(value: Option<Decimal>) -> Option<String> {
    value.map(|d| d.to_string())
}
