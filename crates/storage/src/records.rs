//! Serialized shapes for persisted snapshots.
//!
//! Flag-map records carry an explicit schema version so future structural
//! changes can migrate old records. Legacy records written before versioning
//! (a bare id → bool map) still decode; anything else is treated as corrupt,
//! logged, and replaced by the empty default rather than failing startup.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::warn;

use crate::repository::{StorageError, StoreKey};

/// Current schema version for flag-map records.
pub const SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize)]
struct VersionedFlags {
    version: u32,
    entries: BTreeMap<String, bool>,
}

/// Encode an id → bool snapshot at the current schema version.
///
/// # Errors
///
/// Returns `StorageError::Serialization` if encoding fails.
pub fn encode_flags(entries: &BTreeMap<String, bool>) -> Result<String, StorageError> {
    let record = VersionedFlags {
        version: SCHEMA_VERSION,
        entries: entries.clone(),
    };
    serde_json::to_string(&record).map_err(|e| StorageError::Serialization(e.to_string()))
}

/// Decode an id → bool snapshot, tolerating legacy and corrupt records.
///
/// Accepts the current versioned shape and the pre-versioning bare map.
/// A record from an unknown future version, or text that deserializes as
/// neither shape, decodes as the empty map.
#[must_use]
pub fn decode_flags(key: StoreKey, raw: &str) -> BTreeMap<String, bool> {
    if let Ok(record) = serde_json::from_str::<VersionedFlags>(raw) {
        if record.version <= SCHEMA_VERSION {
            return record.entries;
        }
        warn!(key = %key, version = record.version, "persisted record from a newer schema, starting empty");
        return BTreeMap::new();
    }
    // Legacy shape: bare map, written before records were versioned.
    if let Ok(entries) = serde_json::from_str::<BTreeMap<String, bool>>(raw) {
        return entries;
    }
    warn!(key = %key, "corrupt persisted record, starting empty");
    BTreeMap::new()
}

/// Encode a boolean preference flag.
///
/// # Errors
///
/// Returns `StorageError::Serialization` if encoding fails.
pub fn encode_flag(value: bool) -> Result<String, StorageError> {
    serde_json::to_string(&value).map_err(|e| StorageError::Serialization(e.to_string()))
}

/// Decode a boolean preference flag; corrupt text decodes as `false`.
#[must_use]
pub fn decode_flag(key: StoreKey, raw: &str) -> bool {
    match serde_json::from_str::<bool>(raw) {
        Ok(value) => value,
        Err(_) => {
            warn!(key = %key, "corrupt persisted flag, defaulting to false");
            false
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
