use validator::ValidationError;

use crate::constants::{MONTHS, PRESENT};

/// Joins month and year parts into the `"Month Year"` storage format.
/// Empty parts are left out.
pub fn compose(month: &str, year: &str) -> String {
    [month.trim(), year.trim()]
        .iter()
        .filter(|p| !p.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Splits a stored `"Month Year"` string back into its parts.
///
/// The month is matched against the reference months table; a month that is
/// not in the table comes back empty. A missing year comes back empty.
pub fn split(date: &str) -> (String, String) {
    let mut parts = date.trim().splitn(2, ' ');
    let month = parts.next().unwrap_or("").trim();
    let year = parts.next().unwrap_or("").trim();

    let month = if MONTHS.contains(&month) {
        month.to_string()
    } else {
        String::new()
    };

    (month, year.to_string())
}

pub fn is_present(date: &str) -> bool {
    date.trim() == PRESENT
}

/// Derive-level check that a selected month comes from the reference table.
/// Empty values are left to the required-field checks.
pub fn validate_month(month: &str) -> Result<(), ValidationError> {
    if month.is_empty() || MONTHS.contains(&month) {
        Ok(())
    } else {
        Err(ValidationError::new("unknown_month"))
    }
}
