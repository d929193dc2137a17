//! Pipeline-wide KPIs for the dashboard cards.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::percentage;
use crate::core::Deal;

/// Scalar KPI snapshot of the whole pipeline.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PipelineStats {
    /// Every deal, regardless of stage.
    pub total: usize,
    /// Deals in the won stage.
    pub won: usize,
    /// Deals in any non-terminal stage.
    pub in_progress: usize,
    /// Sum of `total_value` across all deals.
    pub total_volume: f64,
    /// Sum of `total_value` across won deals only.
    pub won_volume: f64,
    /// Won share of all deals, one decimal, 0 on an empty pipeline.
    pub conversion_rate: f64,
}

pub fn pipeline_stats(deals: &Vector<Deal>) -> PipelineStats {
    let total = deals.len();
    let won = deals.iter().filter(|deal| deal.is_won()).count();
    let in_progress = deals.iter().filter(|deal| deal.is_open()).count();
    let total_volume = deals.iter().map(|deal| deal.total_value).sum();
    let won_volume = deals
        .iter()
        .filter(|deal| deal.is_won())
        .map(|deal| deal.total_value)
        .sum();
    PipelineStats {
        total,
        won,
        in_progress,
        total_volume,
        won_volume,
        conversion_rate: percentage(won, total),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_pipeline_is_all_zeros() {
        let stats = pipeline_stats(&Vector::new());
        assert_eq!(stats, PipelineStats::default());
    }
}
