//! Derived analytics over the deal collection.
//!
//! Every function here is a pure, total transformation of a collection
//! snapshot. Nothing is cached incrementally: each call re-derives its
//! output from scratch, so the numbers can never drift out of sync with
//! the deals. All percentages are zero-guarded (an empty denominator
//! yields 0, never NaN) and carry one decimal.

pub mod board;
pub mod dimensions;
pub mod radar;
pub mod stages;
pub mod stats;
pub mod trends;

pub use board::{by_recent_activity, kanban_columns, DealFilter, KanbanColumn};
pub use dimensions::{
    insurance_line_performance, rank_by_metric, salesperson_performance, top_by_volume,
    top_lines_by_count, InsuranceLinePerformance, SalesMetric, SalespersonPerformance,
};
pub use radar::{radar_scores, RadarScore};
pub use stages::{funnel, stage_distribution, FunnelStage, StageSlice};
pub use stats::{pipeline_stats, PipelineStats};
pub use trends::{monthly_trends, monthly_trends_at, MonthlyTrend};

/// Share of `part` in `whole` as a one-decimal percentage, 0 when `whole`
/// is 0.
pub(crate) fn percentage(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    round1(part as f64 / whole as f64 * 100.0)
}

pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
