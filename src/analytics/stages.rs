//! Stage distribution and conversion funnel.
//!
//! Unlike the per-member breakdowns, stage volume counts every deal sitting
//! in the stage: the charts answer "how much premium is parked where", not
//! "how much was realized".

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::{Deal, Stage};

/// One stage's share of the pipeline (distribution chart slice).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StageSlice {
    pub stage: Stage,
    pub label: String,
    pub deals: usize,
    /// Total premium volume of every deal in the stage.
    pub volume: f64,
    /// Fixed hex color of the stage.
    pub color: String,
}

/// One step of the conversion funnel.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FunnelStage {
    pub stage: Stage,
    pub label: String,
    pub deals: usize,
    pub color: String,
}

/// Deal count and parked volume per stage, in stage order, skipping empty
/// stages.
pub fn stage_distribution(deals: &Vector<Deal>) -> Vec<StageSlice> {
    Stage::ALL
        .iter()
        .filter_map(|&stage| {
            let in_stage: Vec<&Deal> = deals.iter().filter(|deal| deal.stage == stage).collect();
            if in_stage.is_empty() {
                return None;
            }
            Some(StageSlice {
                stage,
                label: stage.display_name().to_string(),
                deals: in_stage.len(),
                volume: in_stage.iter().map(|deal| deal.total_value).sum(),
                color: stage.color_hex().to_string(),
            })
        })
        .collect()
}

/// Deal counts along the funnel stages, skipping empty steps.
pub fn funnel(deals: &Vector<Deal>) -> Vec<FunnelStage> {
    Stage::FUNNEL
        .iter()
        .filter_map(|&stage| {
            let count = deals.iter().filter(|deal| deal.stage == stage).count();
            (count > 0).then(|| FunnelStage {
                stage,
                label: stage.display_name().to_string(),
                deals: count,
                color: stage.color_hex().to_string(),
            })
        })
        .collect()
}
