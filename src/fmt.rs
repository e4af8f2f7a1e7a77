//! Shared formatting utilities for size and gas deltas

use std::cmp::Ordering;

/// Format a signed delta with an explicit sign; zero stays bare
///
/// # Examples
///
/// ```
/// use bytecode_diff::fmt::format_signed;
///
/// assert_eq!(format_signed(12), "+12");
/// assert_eq!(format_signed(-3), "-3");
/// assert_eq!(format_signed(0), "0");
/// ```
pub fn format_signed(delta: i64) -> String {
    if delta == 0 {
        "0".to_string()
    } else {
        format!("{:+}", delta)
    }
}

/// Describe a gas delta relative to the old build
///
/// # Examples
///
/// ```
/// use bytecode_diff::fmt::format_gas_delta;
///
/// assert_eq!(format_gas_delta(200), "200 more gas");
/// assert_eq!(format_gas_delta(-400), "400 less gas");
/// assert_eq!(format_gas_delta(0), "Same");
/// ```
pub fn format_gas_delta(gas: i64) -> String {
    match gas.cmp(&0) {
        Ordering::Equal => "Same".to_string(),
        Ordering::Greater => format!("{} more gas", gas),
        Ordering::Less => format!("{} less gas", gas.unsigned_abs()),
    }
}

/// Serialize to JSON with pretty printing, fallback to empty object on error
pub fn to_json_string<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
}
