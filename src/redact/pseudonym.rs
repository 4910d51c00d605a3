//! Process-wide persisted pseudonym identity map
//!
//! Maps `(label, original value)` pairs to stable aliases of the form
//! `<Alias_Prefix>_<N>`. Entries are created on first occurrence, never
//! deleted, and the whole map is written to disk synchronously after every
//! insertion. A missing or unreadable file is treated as an empty map.
//!
//! Per-label counters start at zero on every process start and advance
//! independently of the persisted indices: a previously seen
//! (label, value) key reuses its persisted alias verbatim, but the
//! numbering sequence for values not yet seen is not monotonic across
//! restarts. Stable identity for known values, unstable numbering for new
//! ones — preserved as observed behavior.

use crate::detect::span::PiiLabel;
use crate::error::{Error, Result};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Disk-persisted pseudonym map with per-label counters
///
/// Lookup and insert+persist are not atomic with respect to each other,
/// so all access goes through one mutex.
pub struct PseudonymStore {
    path: PathBuf,
    inner: Mutex<Inner>,
}

struct Inner {
    mapping: HashMap<String, String>,
    counters: HashMap<PiiLabel, u64>,
}

impl PseudonymStore {
    /// Open the store at `path`, loading any persisted map
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let mapping = load_map(&path);
        Self {
            path,
            inner: Mutex::new(Inner {
                mapping,
                counters: HashMap::new(),
            }),
        }
    }

    /// Stable alias for `(label, value)`; mints and persists on first use
    pub fn alias(&self, label: PiiLabel, value: &str) -> Result<String> {
        let mut guard = self.inner.lock();
        let inner = &mut *guard;

        let key = format!("{}:{}", label, value);
        if let Some(alias) = inner.mapping.get(&key) {
            return Ok(alias.clone());
        }

        let next = inner.counters.get(&label).copied().unwrap_or(0) + 1;
        inner.counters.insert(label, next);
        let alias = format!("{}_{}", label.alias_prefix(), next);
        inner.mapping.insert(key, alias.clone());
        persist(&self.path, &inner.mapping)?;
        Ok(alias)
    }

    /// Number of persisted entries
    pub fn len(&self) -> usize {
        self.inner.lock().mapping.len()
    }

    /// Whether the store holds no entries
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn load_map(path: &Path) -> HashMap<String, String> {
    let data = match std::fs::read_to_string(path) {
        Ok(data) => data,
        Err(e) => {
            if e.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!(
                    "Failed to read pseudonym map {}: {}; starting empty",
                    path.display(),
                    e
                );
            }
            return HashMap::new();
        }
    };
    match serde_json::from_str(&data) {
        Ok(mapping) => mapping,
        Err(e) => {
            tracing::warn!(
                "Failed to parse pseudonym map {}: {}; starting empty",
                path.display(),
                e
            );
            HashMap::new()
        }
    }
}

fn persist(path: &Path, mapping: &HashMap<String, String>) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            Error::Storage(format!(
                "Failed to create {}: {}",
                parent.display(),
                e
            ))
        })?;
    }
    let json = serde_json::to_string_pretty(mapping)?;
    std::fs::write(path, json)
        .map_err(|e| Error::Storage(format!("Failed to write {}: {}", path.display(), e)))
}
