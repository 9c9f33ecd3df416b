//! Summary statistics derived from a record snapshot.
//!
//! Everything here is pure and stateless: functions take `&[Record]`, never
//! mutate, never persist. Presentation code calls them on demand with the
//! result of `RecordStore::get_all()`.

use crate::model::Record;
use chrono::{Duration, NaiveDate};

/// A record's contribution to a sum. Amounts are always finite when they
/// come through the store; a hand-edited blob could smuggle in a NaN or
/// infinity, which counts as zero rather than poisoning every total.
fn amount_or_zero(record: &Record) -> f64 {
    if record.amount.is_finite() {
        record.amount
    } else {
        0.0
    }
}

/// Sum of all record amounts. Zero for an empty snapshot.
pub fn total_spent(records: &[Record]) -> f64 {
    records.iter().map(amount_or_zero).sum()
}

/// The category with the highest summed amount, or `None` for an empty
/// snapshot. Ties go to the category encountered first in insertion order.
pub fn top_category(records: &[Record]) -> Option<String> {
    // Vec instead of a map: first-encounter order is the tie-breaker.
    let mut totals: Vec<(&str, f64)> = Vec::new();
    for record in records {
        match totals.iter_mut().find(|(c, _)| *c == record.category) {
            Some((_, total)) => *total += amount_or_zero(record),
            None => totals.push((&record.category, amount_or_zero(record))),
        }
    }

    let mut best: Option<(&str, f64)> = None;
    for (category, total) in totals {
        match best {
            Some((_, best_total)) if best_total >= total => {}
            _ => best = Some((category, total)),
        }
    }
    best.map(|(category, _)| category.to_string())
}

/// One day's total within a trailing window.
#[derive(Debug, Clone, PartialEq)]
pub struct DayTotal {
    pub date: NaiveDate,
    pub total: f64,
}

/// Per-day totals for the `window_days` consecutive calendar days ending at
/// `reference` inclusive, in chronological order.
///
/// Every day appears exactly once, zero-initialized; records dated outside
/// the window contribute to no bucket.
pub fn daily_totals(records: &[Record], window_days: u32, reference: NaiveDate) -> Vec<DayTotal> {
    if window_days == 0 {
        return Vec::new();
    }
    let start = reference - Duration::days(i64::from(window_days) - 1);
    let mut days: Vec<DayTotal> = (0..i64::from(window_days))
        .map(|offset| DayTotal {
            date: start + Duration::days(offset),
            total: 0.0,
        })
        .collect();

    for record in records {
        if record.date < start || record.date > reference {
            continue;
        }
        let offset = (record.date - start).num_days() as usize;
        days[offset].total += amount_or_zero(record);
    }
    days
}

/// The bundled summary view: total, top category, and the daily window.
#[derive(Debug, Clone)]
pub struct SpendSummary {
    pub total_spent: f64,
    pub top_category: Option<String>,
    pub daily: Vec<DayTotal>,
}

impl SpendSummary {
    pub fn compute(records: &[Record], window_days: u32, reference: NaiveDate) -> Self {
        Self {
            total_spent: total_spent(records),
            top_category: top_category(records),
            daily: daily_totals(records, window_days, reference),
        }
    }
}
