//! Backup export and import of the whole collection.
//!
//! Exports are self-describing JSON documents with enough metadata to show
//! a meaningful confirmation prompt before an import overwrites everything.
//! Imports are strict about structure (a `deals` array must exist and every
//! record must be readable) and lenient about the per-record details that
//! the store normalizes anyway: ids, totals and timestamps.

use std::io::Write;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::core::Deal;

/// Application name stamped into backups.
pub const APP_NAME: &str = "Sales Pipeline Manager";

/// Backup file payload.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportArchive {
    pub deals: Vec<Deal>,
    pub export_date: DateTime<Utc>,
    pub version: String,
    pub app_name: String,
    pub total_deals: usize,
}

impl ExportArchive {
    /// Snapshot the given deals into a backup payload stamped with now.
    pub fn new(deals: Vec<Deal>) -> Self {
        Self {
            total_deals: deals.len(),
            deals,
            export_date: Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            app_name: APP_NAME.to_string(),
        }
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("failed to serialize backup")
    }

    pub fn write_to<W: Write>(&self, writer: W) -> Result<()> {
        serde_json::to_writer_pretty(writer, self).context("failed to write backup")
    }

    /// Dated download name: `sales-pipeline-backup-YYYY-MM-DD.json`.
    pub fn suggested_filename(&self) -> String {
        format!(
            "sales-pipeline-backup-{}.json",
            self.export_date.format("%Y-%m-%d")
        )
    }
}

/// Why an import file was rejected. The collection is never touched when
/// parsing fails.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("file is not valid JSON: {0}")]
    Json(#[source] serde_json::Error),
    #[error("backup file has no \"deals\" array")]
    MissingDeals,
    #[error("backup file contains an unreadable deal record: {0}")]
    InvalidRecord(#[source] serde_json::Error),
}

/// Parsed import payload: the deal list plus whatever metadata the file
/// carried. Only the `deals` array is required; metadata fields of any
/// shape other than a string are treated as absent.
#[derive(Clone, Debug, PartialEq)]
pub struct ImportArchive {
    pub deals: Vec<Deal>,
    pub app_name: Option<String>,
    pub export_date: Option<String>,
    pub version: Option<String>,
}

impl ImportArchive {
    /// Summary for the confirmation prompt shown before the destructive
    /// replace.
    pub fn preview(&self) -> ImportPreview {
        ImportPreview {
            total_deals: self.deals.len(),
            app_name: self.app_name.clone(),
            export_date: self.export_date.clone(),
            version: self.version.clone(),
        }
    }
}

/// What the confirmation prompt displays about a pending import.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ImportPreview {
    pub total_deals: usize,
    pub app_name: Option<String>,
    pub export_date: Option<String>,
    pub version: Option<String>,
}

/// Parse a backup document.
///
/// Distinguishes the three rejection cases: unreadable JSON, a document
/// without a `deals` array, and a `deals` array holding a record that does
/// not deserialize (unknown salesperson or insurance line, non-numeric
/// premium, and so on).
pub fn parse_import(json: &str) -> Result<ImportArchive, ImportError> {
    let mut document: Value = serde_json::from_str(json).map_err(ImportError::Json)?;
    let deals_value = match document.get_mut("deals") {
        Some(deals) if deals.is_array() => deals.take(),
        _ => return Err(ImportError::MissingDeals),
    };
    let deals: Vec<Deal> =
        serde_json::from_value(deals_value).map_err(ImportError::InvalidRecord)?;
    log::debug!("parsed import with {} deals", deals.len());
    Ok(ImportArchive {
        deals,
        app_name: string_field(&document, "appName"),
        export_date: string_field(&document, "exportDate"),
        version: string_field(&document, "version"),
    })
}

fn string_field(document: &Value, key: &str) -> Option<String> {
    document
        .get(key)
        .and_then(Value::as_str)
        .map(str::to_string)
}
