use crate::domain::ExpenseRecord;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("No expense records yet, nothing to report")]
    EmptyLedger,
}

/// Derived statistics over one ledger snapshot. Amounts keep full decimal
/// precision; rounding to 2 decimal places happens only at print time.
#[derive(Debug, Clone)]
pub struct Report {
    /// Category label -> summed amount, ascending label order.
    pub category_totals: BTreeMap<String, Decimal>,
    pub total_spent: Decimal,
    /// Mean of per-date sums over the distinct dates present. Not the same
    /// as total_spent / record_count when several records share a date.
    pub average_per_day: Decimal,
    /// Category with the largest total. Ties resolve to the first maximum
    /// in ascending label order.
    pub top_category: String,
    pub record_count: usize,
}

/// Pure, single-pass derivation over an immutable snapshot. Empty input is
/// a distinct case, never an all-zero report.
pub fn compute_report(records: &[ExpenseRecord]) -> Result<Report, ReportError> {
    if records.is_empty() {
        return Err(ReportError::EmptyLedger);
    }

    let mut category_totals: BTreeMap<String, Decimal> = BTreeMap::new();
    let mut daily_totals: BTreeMap<NaiveDate, Decimal> = BTreeMap::new();
    let mut total_spent = Decimal::ZERO;

    for r in records {
        *category_totals
            .entry(r.category.clone())
            .or_insert(Decimal::ZERO) += r.amount;
        *daily_totals.entry(r.date).or_insert(Decimal::ZERO) += r.amount;
        total_spent += r.amount;
    }

    let average_per_day = total_spent / Decimal::from(daily_totals.len() as u64);

    let mut top_category = String::new();
    let mut top_total = Decimal::MIN;
    for (category, total) in &category_totals {
        if *total > top_total {
            top_total = *total;
            top_category = category.clone();
        }
    }

    Ok(Report {
        category_totals,
        total_spent,
        average_per_day,
        top_category,
        record_count: records.len(),
    })
}

/// Projects the category totals into parallel label/value sequences in
/// ascending label order. Both chart panels and the summary listing use
/// this same ordering, and it is stable across calls on the same report.
pub fn chart_series(report: &Report) -> (Vec<String>, Vec<Decimal>) {
    let labels = report.category_totals.keys().cloned().collect();
    let values = report.category_totals.values().copied().collect();
    (labels, values)
}
