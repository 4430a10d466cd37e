//! Output helpers shared across commands.

use serde::Serialize;

use crate::Result;

/// Print `value` as pretty JSON on stdout.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", to_pretty_json(value)?);
    Ok(())
}

pub fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value)
        .map_err(|e| crate::FplError::schema("output", e.to_string()))
}

/// Prices are published in tenths of a million.
pub fn format_price(cost: f64) -> String {
    format!("£{:.1}m", cost / 10.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(65.0), "£6.5m");
        assert_eq!(format_price(140.0), "£14.0m");
    }

    #[test]
    fn test_to_pretty_json() {
        let out = to_pretty_json(&json!({"id": 1})).unwrap();
        assert_eq!(out, "{\n  \"id\": 1\n}");
    }
}
