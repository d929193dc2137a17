//! Per-salesperson and per-insurance-line performance breakdowns.
//!
//! Rows follow roster order and skip members with no deals at all, so the
//! charts never render empty bars. Volume here means realized revenue:
//! only won deals contribute, while deal and won counts cover everything
//! attributed to the member.

use std::cmp::Ordering;

use im::Vector;
use serde::{Deserialize, Serialize};

use super::percentage;
use crate::core::{Deal, InsuranceLine, Salesperson};

/// Performance row for one sales representative.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SalespersonPerformance {
    pub salesperson: Salesperson,
    /// Deals attributed to this person, any stage.
    pub deals: usize,
    pub won: usize,
    /// Realized volume: won deals only.
    pub volume: f64,
    /// Won share of attributed deals, one decimal.
    pub win_rate: f64,
}

/// Performance row for one insurance line, with its stable chart color.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InsuranceLinePerformance {
    pub line: InsuranceLine,
    pub deals: usize,
    pub won: usize,
    /// Realized volume: won deals only.
    pub volume: f64,
    pub win_rate: f64,
    pub color: String,
}

/// Metric selector for ranking the performance chart.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SalesMetric {
    Volume,
    Deals,
    Won,
    WinRate,
}

impl SalesMetric {
    fn value_of(&self, row: &SalespersonPerformance) -> f64 {
        match self {
            SalesMetric::Volume => row.volume,
            SalesMetric::Deals => row.deals as f64,
            SalesMetric::Won => row.won as f64,
            SalesMetric::WinRate => row.win_rate,
        }
    }
}

/// One row per roster member with at least one deal, in roster order.
pub fn salesperson_performance(deals: &Vector<Deal>) -> Vec<SalespersonPerformance> {
    Salesperson::ALL
        .iter()
        .filter_map(|&salesperson| {
            let attributed: Vec<&Deal> = deals
                .iter()
                .filter(|deal| deal.salesperson == salesperson)
                .collect();
            if attributed.is_empty() {
                return None;
            }
            let won = attributed.iter().filter(|deal| deal.is_won()).count();
            let volume = attributed
                .iter()
                .filter(|deal| deal.is_won())
                .map(|deal| deal.total_value)
                .sum();
            Some(SalespersonPerformance {
                salesperson,
                deals: attributed.len(),
                won,
                volume,
                win_rate: percentage(won, attributed.len()),
            })
        })
        .collect()
}

/// One row per insurance line with at least one deal, in catalogue order.
pub fn insurance_line_performance(deals: &Vector<Deal>) -> Vec<InsuranceLinePerformance> {
    InsuranceLine::ALL
        .iter()
        .filter_map(|&line| {
            let attributed: Vec<&Deal> = deals
                .iter()
                .filter(|deal| deal.insurance_line == line)
                .collect();
            if attributed.is_empty() {
                return None;
            }
            let won = attributed.iter().filter(|deal| deal.is_won()).count();
            let volume = attributed
                .iter()
                .filter(|deal| deal.is_won())
                .map(|deal| deal.total_value)
                .sum();
            Some(InsuranceLinePerformance {
                line,
                deals: attributed.len(),
                won,
                volume,
                win_rate: percentage(won, attributed.len()),
                color: line.color(),
            })
        })
        .collect()
}

/// Rows sorted descending by the chosen metric. The sort is stable, so ties
/// keep roster order.
pub fn rank_by_metric(
    mut rows: Vec<SalespersonPerformance>,
    metric: SalesMetric,
) -> Vec<SalespersonPerformance> {
    rows.sort_by(|a, b| compare_desc(metric.value_of(a), metric.value_of(b)));
    rows
}

/// Top `n` representatives by realized volume (leaderboard and radar input).
pub fn top_by_volume(rows: &[SalespersonPerformance], n: usize) -> Vec<SalespersonPerformance> {
    let mut ranked = rank_by_metric(rows.to_vec(), SalesMetric::Volume);
    ranked.truncate(n);
    ranked
}

/// The `n` busiest insurance lines by deal count.
pub fn top_lines_by_count(
    rows: &[InsuranceLinePerformance],
    n: usize,
) -> Vec<InsuranceLinePerformance> {
    let mut ranked = rows.to_vec();
    ranked.sort_by(|a, b| b.deals.cmp(&a.deals));
    ranked.truncate(n);
    ranked
}

fn compare_desc(a: f64, b: f64) -> Ordering {
    b.total_cmp(&a)
}
