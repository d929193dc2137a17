//! Whole-collection persistence over a key-value storage abstraction.
//!
//! The collection lives under a single fixed key and is written in full on
//! every mutation, read once at startup. A failed write leaves the
//! in-memory collection authoritative for the session; the next mutation
//! simply persists again.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use im::Vector;

use crate::core::Deal;

/// Storage key holding the serialized deal collection.
pub const STORAGE_KEY: &str = "salesPipeline_deals";

/// Key-value storage collaborator. Keys map to whole JSON documents; the
/// backend neither inspects nor partially updates them.
pub trait StorageBackend {
    /// Read the document under `key`, `None` when the key was never written.
    fn read(&self, key: &str) -> Result<Option<String>>;
    fn write(&mut self, key: &str, value: &str) -> Result<()>;
    /// Remove the key; removing an absent key is not an error.
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// Ephemeral backend for tests and throwaway sessions.
#[derive(Clone, Debug, Default)]
pub struct MemoryBackend {
    entries: HashMap<String, String>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryBackend {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}

/// File-per-key backend: each key becomes `<root>/<key>.json`.
///
/// Writes go through a unique temporary file followed by a rename, so a
/// crash mid-write never leaves a half-written document behind.
#[derive(Clone, Debug)]
pub struct JsonFileBackend {
    root: PathBuf,
}

impl JsonFileBackend {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolve the default data directory: the `DEALSCOPE_DATA_DIR`
    /// override first, then the platform local-data directory, then a
    /// temp-dir fallback.
    pub fn default_location() -> Self {
        let root = match std::env::var("DEALSCOPE_DATA_DIR") {
            Ok(custom_dir) => PathBuf::from(custom_dir),
            Err(_) => dirs::data_local_dir()
                .map(|dir| dir.join("dealscope"))
                .unwrap_or_else(|| std::env::temp_dir().join("dealscope")),
        };
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn file_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", sanitize_key(key)))
    }
}

impl StorageBackend for JsonFileBackend {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let path = self.file_for(key);
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => {
                Err(e).with_context(|| format!("failed to read storage file {}", path.display()))
            }
        }
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        fs::create_dir_all(&self.root).with_context(|| {
            format!("failed to create storage directory {}", self.root.display())
        })?;
        let target = self.file_for(key);
        let temp = create_safe_temp_path(&target);
        fs::write(&temp, value)
            .with_context(|| format!("failed to write temporary file {}", temp.display()))?;
        fs::rename(&temp, &target).with_context(|| {
            format!(
                "failed to move {} into place at {}",
                temp.display(),
                target.display()
            )
        })?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let path = self.file_for(key);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => {
                Err(e).with_context(|| format!("failed to remove storage file {}", path.display()))
            }
        }
    }
}

/// Read the persisted collection; an absent key is an empty pipeline.
pub fn load_deals(backend: &impl StorageBackend) -> Result<Vec<Deal>> {
    let raw = match backend.read(STORAGE_KEY)? {
        Some(raw) => raw,
        None => {
            log::debug!("no persisted collection under {STORAGE_KEY}");
            return Ok(Vec::new());
        }
    };
    let deals: Vec<Deal> =
        serde_json::from_str(&raw).context("persisted deal collection is not valid JSON")?;
    log::debug!("loaded {} deals from storage", deals.len());
    Ok(deals)
}

/// Persist the whole collection under the fixed key.
pub fn save_deals(backend: &mut impl StorageBackend, deals: &Vector<Deal>) -> Result<()> {
    let payload =
        serde_json::to_string(deals).context("failed to serialize the deal collection")?;
    backend.write(STORAGE_KEY, &payload)?;
    log::debug!("persisted {} deals", deals.len());
    Ok(())
}

/// Drop the persisted collection, the reset-to-empty flow.
pub fn clear_deals(backend: &mut impl StorageBackend) -> Result<()> {
    backend.remove(STORAGE_KEY)?;
    log::debug!("persisted collection removed");
    Ok(())
}

/// Keep storage keys inside the root directory regardless of what they
/// contain.
fn sanitize_key(key: &str) -> String {
    key.chars()
        .map(|ch| {
            if ch.is_ascii_alphanumeric() || ch == '_' || ch == '-' {
                ch
            } else {
                '_'
            }
        })
        .collect()
}

/// Create a unique temporary file path next to the target to avoid
/// collisions between concurrent writers.
fn create_safe_temp_path(target_path: &Path) -> PathBuf {
    static COUNTER: AtomicU64 = AtomicU64::new(0);

    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos() as u64;
    let counter = COUNTER.fetch_add(1, Ordering::SeqCst);
    let process_id = std::process::id();

    let temp_name = format!(
        "{}.tmp.{}.{}.{}",
        target_path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("file"),
        process_id,
        timestamp,
        counter
    );

    target_path.with_file_name(temp_name)
}
