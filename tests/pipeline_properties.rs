//! Property-based tests for the pipeline analytics
//!
//! These verify invariants that should hold for any collection:
//! - KPI counters partition the collection
//! - Per-dimension rows cover every deal exactly once
//! - Kanban columns partition the collection by stage
//! - The monthly series is always twelve consecutive buckets
//! - Radar axes never leave the 0-100 scale
//! - Records survive a serialization round trip unchanged

use chrono::{Duration, Utc};
use dealscope::{
    kanban_columns, monthly_trends_at, pipeline_stats, radar_scores, salesperson_performance,
    stage_distribution, Deal, DealId, InsuranceLine, QuarterlyPremiums, Salesperson, Stage,
};
use im::Vector;
use proptest::prelude::*;

fn arb_deal() -> impl Strategy<Value = Deal> {
    (
        0..Stage::ALL.len(),
        0..Salesperson::ALL.len(),
        0..InsuranceLine::ALL.len(),
        (0.0f64..100_000.0, 0.0f64..100_000.0, 0.0f64..100_000.0, 0.0f64..100_000.0),
        0i64..400,
    )
        .prop_map(|(stage_i, person_i, line_i, (q1, q2, q3, q4), days_back)| {
            let premiums = QuarterlyPremiums::new(q1, q2, q3, q4);
            let created = Utc::now() - Duration::days(days_back);
            Deal {
                id: DealId::generate(),
                account_name: "CLIENTE".to_string(),
                salesperson: Salesperson::ALL[person_i],
                insurance_line: InsuranceLine::ALL[line_i],
                stage: Stage::ALL[stage_i],
                total_value: premiums.total(),
                premiums,
                notes: String::new(),
                company: String::new(),
                created_at: created,
                last_modified_at: created,
            }
        })
}

fn arb_collection() -> impl Strategy<Value = Vector<Deal>> {
    proptest::collection::vec(arb_deal(), 0..40).prop_map(Vector::from)
}

proptest! {
    /// Property: the KPI counters always partition the collection
    #[test]
    fn prop_stats_counters_partition_the_collection(deals in arb_collection()) {
        let stats = pipeline_stats(&deals);
        let terminal = deals.iter().filter(|deal| deal.stage.is_terminal()).count();
        prop_assert_eq!(stats.total, deals.len());
        prop_assert_eq!(stats.in_progress + terminal, stats.total);
        prop_assert!(stats.won <= stats.total);
        prop_assert!(stats.conversion_rate >= 0.0 && stats.conversion_rate <= 100.0);
    }

    /// Property: total volume is the sum of deal values, won volume a subset of it
    #[test]
    fn prop_won_volume_is_bounded_by_total_volume(deals in arb_collection()) {
        let stats = pipeline_stats(&deals);
        let expected: f64 = deals.iter().map(|deal| deal.total_value).sum();
        prop_assert_eq!(stats.total_volume, expected);
        prop_assert!(stats.won_volume <= stats.total_volume + 1e-6);
        prop_assert!(stats.total_volume >= 0.0);
    }

    /// Property: per-salesperson rows cover every deal exactly once
    #[test]
    fn prop_salesperson_rows_cover_every_deal(deals in arb_collection()) {
        let rows = salesperson_performance(&deals);
        let covered: usize = rows.iter().map(|row| row.deals).sum();
        prop_assert_eq!(covered, deals.len());
        for row in &rows {
            prop_assert!(row.deals > 0);
            prop_assert!(row.won <= row.deals);
            prop_assert!(row.win_rate >= 0.0 && row.win_rate <= 100.0);
        }
    }

    /// Property: stage slices cover every deal and skip empty stages
    #[test]
    fn prop_stage_slices_cover_every_deal(deals in arb_collection()) {
        let slices = stage_distribution(&deals);
        let covered: usize = slices.iter().map(|slice| slice.deals).sum();
        prop_assert_eq!(covered, deals.len());
        prop_assert!(slices.iter().all(|slice| slice.deals > 0));
    }

    /// Property: kanban columns partition the collection by stage
    #[test]
    fn prop_kanban_partitions_by_stage(deals in arb_collection()) {
        let columns = kanban_columns(&deals);
        prop_assert_eq!(columns.len(), 8);
        let covered: usize = columns.iter().map(|column| column.count).sum();
        prop_assert_eq!(covered, deals.len());
        for column in &columns {
            prop_assert_eq!(column.count, column.deals.len());
            prop_assert!(column.deals.iter().all(|deal| deal.stage == column.stage));
        }
    }

    /// Property: the trend series is always twelve consecutive months
    #[test]
    fn prop_trend_series_is_twelve_consecutive_months(deals in arb_collection()) {
        let series = monthly_trends_at(&deals, Utc::now());
        prop_assert_eq!(series.len(), 12);
        for pair in series.windows(2) {
            let this = pair[0].year * 12 + pair[0].month as i32 - 1;
            let next = pair[1].year * 12 + pair[1].month as i32 - 1;
            prop_assert_eq!(next, this + 1);
        }
        for bucket in &series {
            prop_assert!(bucket.won <= bucket.deals);
            prop_assert!(bucket.rate >= 0.0 && bucket.rate <= 100.0);
        }
    }

    /// Property: radar axes stay on the 0-100 scale
    #[test]
    fn prop_radar_axes_stay_in_scale(deals in arb_collection()) {
        let scores = radar_scores(&salesperson_performance(&deals));
        prop_assert!(scores.len() <= 5);
        for score in &scores {
            prop_assert!(score.volume <= 100);
            prop_assert!(score.deals <= 100);
            prop_assert!(score.won <= 100);
            prop_assert!(score.win_rate >= 0.0 && score.win_rate <= 100.0);
        }
    }

    /// Property: a deal survives a JSON round trip unchanged
    #[test]
    fn prop_deal_round_trips_through_json(deal in arb_deal()) {
        let json = serde_json::to_string(&deal).unwrap();
        let back: Deal = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, deal);
    }

    /// Property: the derived total always equals the premium sum
    #[test]
    fn prop_total_equals_premium_sum(deal in arb_deal()) {
        prop_assert_eq!(deal.total_value, deal.premiums.total());
    }
}
