use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Fallback category when the caller does not name one.
pub const DEFAULT_CATEGORY: &str = "Other";

/// One recorded spending event. Immutable once appended; the ledger has no
/// update or delete operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseRecord {
    pub date: NaiveDate,
    pub category: String,
    /// Decimal amount encoded as a plain number string in storage.
    pub amount: Decimal,
    /// Free text, may be empty.
    #[serde(default)]
    pub note: String,
}

pub fn parse_amount(raw: &str) -> Result<Decimal> {
    raw.trim()
        .parse::<Decimal>()
        .with_context(|| format!("Invalid amount: {raw}"))
}

/// Empty or missing dates resolve to today; anything else must be YYYY-MM-DD.
pub fn parse_date_or_today(raw: Option<&str>) -> Result<NaiveDate> {
    match raw.map(str::trim) {
        None | Some("") => Ok(Local::now().date_naive()),
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .with_context(|| format!("Invalid date (expected YYYY-MM-DD): {s}")),
    }
}

/// Maps raw CLI input to a well-formed record. Category membership in the
/// suggested list is never checked; any non-empty label is stored as-is.
pub fn build_record(
    date: Option<&str>,
    category: Option<&str>,
    amount: &str,
    note: Option<&str>,
) -> Result<ExpenseRecord> {
    let date = parse_date_or_today(date)?;
    let category = match category.map(str::trim) {
        None | Some("") => DEFAULT_CATEGORY.to_string(),
        Some(c) => c.to_string(),
    };
    let amount = parse_amount(amount)?;
    let note = note.unwrap_or("").trim().to_string();

    Ok(ExpenseRecord {
        date,
        category,
        amount,
        note,
    })
}
