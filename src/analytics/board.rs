//! Board and list views over the collection: filtering, kanban columns and
//! recency ordering.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::{Deal, Salesperson, Stage};

/// View filter; `None` on a field selects everything.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DealFilter {
    pub stage: Option<Stage>,
    pub salesperson: Option<Salesperson>,
}

impl DealFilter {
    pub fn matches(&self, deal: &Deal) -> bool {
        self.stage.map_or(true, |stage| deal.stage == stage)
            && self
                .salesperson
                .map_or(true, |person| deal.salesperson == person)
    }

    pub fn apply(&self, deals: &Vector<Deal>) -> Vector<Deal> {
        deals.iter().filter(|deal| self.matches(deal)).cloned().collect()
    }
}

/// One kanban column. Every stage gets a column, empty ones included, so
/// the board always shows all eight.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct KanbanColumn {
    pub stage: Stage,
    pub deals: Vector<Deal>,
    pub count: usize,
    /// Total premium volume parked in the column.
    pub volume: f64,
}

pub fn kanban_columns(deals: &Vector<Deal>) -> Vec<KanbanColumn> {
    Stage::ALL
        .iter()
        .map(|&stage| {
            let in_stage: Vector<Deal> = deals
                .iter()
                .filter(|deal| deal.stage == stage)
                .cloned()
                .collect();
            let volume = in_stage.iter().map(|deal| deal.total_value).sum();
            KanbanColumn {
                stage,
                count: in_stage.len(),
                volume,
                deals: in_stage,
            }
        })
        .collect()
}

/// Deals ordered most recently modified first, the list view's order.
pub fn by_recent_activity(deals: &Vector<Deal>) -> Vec<Deal> {
    let mut sorted: Vec<Deal> = deals.iter().cloned().collect();
    sorted.sort_by(|a, b| b.last_modified_at.cmp(&a.last_modified_at));
    sorted
}
