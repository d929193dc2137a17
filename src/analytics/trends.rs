//! Twelve-month activity series.
//!
//! Deals are bucketed by creation month: a deal won long after it entered
//! the pipeline still books its win and volume in the month it was created,
//! so the series reads as "how did the deals opened in month X turn out".

use chrono::{DateTime, Datelike, Utc};
use im::Vector;
use serde::{Deserialize, Serialize};

use super::percentage;
use crate::core::Deal;
use crate::format;

/// One calendar-month bucket of the trailing twelve-month window.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MonthlyTrend {
    pub year: i32,
    /// 1-based calendar month.
    pub month: u32,
    /// Chart axis label, abbreviated Italian month plus two-digit year.
    pub label: String,
    /// Deals created in this month, any stage.
    pub deals: usize,
    /// Deals created in this month that are currently won.
    pub won: usize,
    /// Realized volume of this month's cohort (won deals only).
    pub volume: f64,
    /// Won share of this month's cohort, one decimal.
    pub rate: f64,
}

/// Trailing twelve calendar months ending in the current UTC month, oldest
/// first. Always returns exactly twelve buckets, empty months included.
pub fn monthly_trends(deals: &Vector<Deal>) -> Vec<MonthlyTrend> {
    monthly_trends_at(deals, Utc::now())
}

/// Same series with an explicit clock, which is what tests use.
pub fn monthly_trends_at(deals: &Vector<Deal>, now: DateTime<Utc>) -> Vec<MonthlyTrend> {
    let latest = now.year() * 12 + now.month0() as i32;
    (0..12)
        .rev()
        .map(|back| {
            let index = latest - back;
            let year = index.div_euclid(12);
            let month0 = index.rem_euclid(12) as u32;
            let cohort: Vec<&Deal> = deals
                .iter()
                .filter(|deal| {
                    deal.created_at.year() == year && deal.created_at.month0() == month0
                })
                .collect();
            let won = cohort.iter().filter(|deal| deal.is_won()).count();
            let volume = cohort
                .iter()
                .filter(|deal| deal.is_won())
                .map(|deal| deal.total_value)
                .sum();
            MonthlyTrend {
                year,
                month: month0 + 1,
                label: format::month_label(year, month0 + 1),
                deals: cohort.len(),
                won,
                volume,
                rate: percentage(won, cohort.len()),
            }
        })
        .collect()
}
