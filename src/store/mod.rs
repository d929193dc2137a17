//! The deal collection and its mutation operations.
//!
//! The store owns an ordered, persistent collection of deals. Mutations
//! validate first and only touch the collection when every check passes, so
//! callers never observe a partial write. Validation accumulates all failed
//! checks instead of stopping at the first one, which is what a form needs
//! to highlight every broken field at once.

use chrono::Utc;
use im::Vector;
use thiserror::Error;

use crate::core::{Deal, DealDraft, DealId, InsuranceLine, Quarter, Salesperson, Stage};

/// A single failed validation check on a create/update request.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ValidationIssue {
    #[error("account name must not be blank")]
    MissingAccountName,
    #[error("a salesperson must be selected")]
    MissingSalesperson,
    #[error("an insurance line must be selected")]
    MissingInsuranceLine,
    #[error("premium for {} must be a non-negative amount", .0.label())]
    InvalidPremium(Quarter),
}

/// Errors surfaced by the store's mutating operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// The draft failed validation; every failed check is listed.
    #[error("invalid deal: {}", join_issues(.0))]
    Invalid(Vec<ValidationIssue>),
    /// No deal in the collection carries the requested id.
    #[error("no deal with id {0}")]
    NotFound(DealId),
}

fn join_issues(issues: &[ValidationIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Ordered collection of deals in insertion order.
///
/// Backed by a persistent vector, so [`DealStore::snapshot`] is cheap and
/// analytics can hold an immutable view while the store keeps mutating.
#[derive(Clone, Debug, Default)]
pub struct DealStore {
    deals: Vector<Deal>,
}

impl DealStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Borrow the live collection.
    pub fn deals(&self) -> &Vector<Deal> {
        &self.deals
    }

    /// Cheap structural-sharing copy of the current collection.
    pub fn snapshot(&self) -> Vector<Deal> {
        self.deals.clone()
    }

    pub fn len(&self) -> usize {
        self.deals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.deals.is_empty()
    }

    pub fn get(&self, id: &DealId) -> Option<&Deal> {
        self.deals.iter().find(|deal| &deal.id == id)
    }

    /// Validate the draft and append a new deal. The stored record gets a
    /// fresh id, a derived total and both timestamps set to now.
    pub fn create(&mut self, draft: DealDraft) -> Result<Deal, StoreError> {
        let (salesperson, insurance_line) = validate(&draft)?;
        let now = Utc::now();
        let deal = Deal {
            id: DealId::generate(),
            account_name: draft.account_name,
            salesperson,
            insurance_line,
            stage: draft.stage,
            total_value: draft.premiums.total(),
            premiums: draft.premiums,
            notes: draft.notes,
            company: draft.company,
            created_at: now,
            last_modified_at: now,
        };
        self.deals.push_back(deal.clone());
        log::debug!("created deal {} ({})", deal.id, deal.account_name);
        Ok(deal)
    }

    /// Validate the draft and overwrite the identified deal in place. The
    /// id and creation timestamp survive; the total is re-derived and the
    /// modification timestamp moves to now.
    pub fn update(&mut self, id: &DealId, draft: DealDraft) -> Result<Deal, StoreError> {
        let (salesperson, insurance_line) = validate(&draft)?;
        let index = self
            .index_of(id)
            .ok_or_else(|| StoreError::NotFound(id.clone()))?;
        let current = match self.deals.get(index) {
            Some(deal) => deal.clone(),
            None => return Err(StoreError::NotFound(id.clone())),
        };
        let updated = Deal {
            id: current.id,
            account_name: draft.account_name,
            salesperson,
            insurance_line,
            stage: draft.stage,
            total_value: draft.premiums.total(),
            premiums: draft.premiums,
            notes: draft.notes,
            company: draft.company,
            created_at: current.created_at,
            last_modified_at: Utc::now(),
        };
        self.deals.set(index, updated.clone());
        log::debug!("updated deal {}", updated.id);
        Ok(updated)
    }

    /// Remove the identified deal and return it.
    pub fn delete(&mut self, id: &DealId) -> Result<Deal, StoreError> {
        let index = self
            .index_of(id)
            .ok_or_else(|| StoreError::NotFound(id.clone()))?;
        let removed = self.deals.remove(index);
        log::debug!("deleted deal {} ({})", removed.id, removed.account_name);
        Ok(removed)
    }

    /// Move a deal to another stage, leaving every other field untouched
    /// except the modification timestamp. Any stage can move to any other.
    pub fn transition_stage(&mut self, id: &DealId, stage: Stage) -> Result<Deal, StoreError> {
        let index = self
            .index_of(id)
            .ok_or_else(|| StoreError::NotFound(id.clone()))?;
        match self.deals.get_mut(index) {
            Some(deal) => {
                deal.stage = stage;
                deal.last_modified_at = Utc::now();
                log::debug!("deal {} moved to {}", deal.id, stage);
                Ok(deal.clone())
            }
            None => Err(StoreError::NotFound(id.clone())),
        }
    }

    /// Bulk-overwrite the collection, the import flow's commit step.
    ///
    /// Incoming records are normalized rather than trusted: a record without
    /// an id gets a fresh one, negative or non-finite premium amounts are
    /// zeroed, and the derived total is recomputed from the premiums.
    /// Returns the new collection size.
    pub fn replace_all(&mut self, deals: impl IntoIterator<Item = Deal>) -> usize {
        let mut assigned = 0usize;
        self.deals = deals
            .into_iter()
            .map(|mut deal| {
                if deal.id.is_empty() {
                    deal.id = DealId::generate();
                    assigned += 1;
                }
                for quarter in Quarter::ALL {
                    let amount = deal.premiums.get(quarter);
                    if !amount.is_finite() || amount < 0.0 {
                        deal.premiums.set(quarter, 0.0);
                        log::warn!(
                            "deal {} carried an unusable {} premium, zeroed",
                            deal.id,
                            quarter.label()
                        );
                    }
                }
                deal.total_value = deal.premiums.total();
                deal
            })
            .collect();
        if assigned > 0 {
            log::debug!("assigned {assigned} fresh ids while replacing the collection");
        }
        log::debug!("collection replaced, {} deals", self.deals.len());
        self.deals.len()
    }

    /// Drop every deal.
    pub fn clear(&mut self) {
        self.deals = Vector::new();
        log::debug!("collection cleared");
    }

    fn index_of(&self, id: &DealId) -> Option<usize> {
        self.deals.iter().position(|deal| &deal.id == id)
    }
}

/// Run every check and hand back the required selections on success.
fn validate(draft: &DealDraft) -> Result<(Salesperson, InsuranceLine), StoreError> {
    let mut issues = Vec::new();
    if draft.account_name.trim().is_empty() {
        issues.push(ValidationIssue::MissingAccountName);
    }
    if draft.salesperson.is_none() {
        issues.push(ValidationIssue::MissingSalesperson);
    }
    if draft.insurance_line.is_none() {
        issues.push(ValidationIssue::MissingInsuranceLine);
    }
    for quarter in Quarter::ALL {
        let amount = draft.premiums.get(quarter);
        if !amount.is_finite() || amount < 0.0 {
            issues.push(ValidationIssue::InvalidPremium(quarter));
        }
    }
    match (draft.salesperson, draft.insurance_line) {
        (Some(salesperson), Some(insurance_line)) if issues.is_empty() => {
            Ok((salesperson, insurance_line))
        }
        _ => Err(StoreError::Invalid(issues)),
    }
}
