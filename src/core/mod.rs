pub mod dates;
pub mod roster;
pub mod stage;

pub use roster::{InsuranceLine, Salesperson};
pub use stage::Stage;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Opaque deal identifier. Freshly created deals get a random UUID; records
/// imported without one are assigned an id before they enter the collection.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DealId(String);

impl DealId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for DealId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for DealId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for DealId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Quarterly premium collection dates, labelled by the Italian month that
/// closes each quarter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Quarter {
    Q1,
    Q2,
    Q3,
    Q4,
}

impl Quarter {
    pub const ALL: [Quarter; 4] = [Quarter::Q1, Quarter::Q2, Quarter::Q3, Quarter::Q4];

    pub fn label(&self) -> &'static str {
        match self {
            Quarter::Q1 => "marzo",
            Quarter::Q2 => "giugno",
            Quarter::Q3 => "settembre",
            Quarter::Q4 => "dicembre",
        }
    }
}

impl fmt::Display for Quarter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Premium amounts per collection quarter, in euros. Missing quarters in
/// persisted records deserialize as zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct QuarterlyPremiums {
    #[serde(default)]
    pub q1: f64,
    #[serde(default)]
    pub q2: f64,
    #[serde(default)]
    pub q3: f64,
    #[serde(default)]
    pub q4: f64,
}

impl QuarterlyPremiums {
    pub fn new(q1: f64, q2: f64, q3: f64, q4: f64) -> Self {
        Self { q1, q2, q3, q4 }
    }

    pub fn get(&self, quarter: Quarter) -> f64 {
        match quarter {
            Quarter::Q1 => self.q1,
            Quarter::Q2 => self.q2,
            Quarter::Q3 => self.q3,
            Quarter::Q4 => self.q4,
        }
    }

    pub fn set(&mut self, quarter: Quarter, amount: f64) {
        match quarter {
            Quarter::Q1 => self.q1 = amount,
            Quarter::Q2 => self.q2 = amount,
            Quarter::Q3 => self.q3 = amount,
            Quarter::Q4 => self.q4 = amount,
        }
    }

    /// Annual premium volume, the source of a deal's `total_value`.
    pub fn total(&self) -> f64 {
        self.q1 + self.q2 + self.q3 + self.q4
    }
}

/// A single sales opportunity.
///
/// `total_value` is derived from the premiums and recomputed on every write,
/// so it always equals `premiums.total()` inside the collection. Timestamps
/// revive leniently: unparseable or missing values fall back to now rather
/// than failing the whole record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deal {
    #[serde(default)]
    pub id: DealId,
    pub account_name: String,
    pub salesperson: Salesperson,
    pub insurance_line: InsuranceLine,
    #[serde(default)]
    pub stage: Stage,
    #[serde(rename = "quarterlyPremiums", default)]
    pub premiums: QuarterlyPremiums,
    #[serde(default)]
    pub total_value: f64,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub company: String,
    #[serde(default = "Utc::now", deserialize_with = "dates::lenient_datetime")]
    pub created_at: DateTime<Utc>,
    #[serde(default = "Utc::now", deserialize_with = "dates::lenient_datetime")]
    pub last_modified_at: DateTime<Utc>,
}

impl Deal {
    pub fn is_won(&self) -> bool {
        self.stage == Stage::Won
    }

    /// Still being worked: any non-terminal stage.
    pub fn is_open(&self) -> bool {
        !self.stage.is_terminal()
    }
}

/// Editable deal fields, the shape the entry form submits. Validation and
/// the derived fields (id, total, timestamps) are handled by the store.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DealDraft {
    pub account_name: String,
    pub salesperson: Option<Salesperson>,
    pub insurance_line: Option<InsuranceLine>,
    pub stage: Stage,
    pub premiums: QuarterlyPremiums,
    pub notes: String,
    pub company: String,
}

impl DealDraft {
    /// Prefill the form from an existing deal (the edit flow).
    pub fn from_deal(deal: &Deal) -> Self {
        Self {
            account_name: deal.account_name.clone(),
            salesperson: Some(deal.salesperson),
            insurance_line: Some(deal.insurance_line),
            stage: deal.stage,
            premiums: deal.premiums,
            notes: deal.notes.clone(),
            company: deal.company.clone(),
        }
    }
}
