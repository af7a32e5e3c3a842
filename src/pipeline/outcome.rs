use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use crate::io::error::Result;
use crate::io::export::to_json_string;

/// Outcome of a generation attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutcomeStatus {
    /// The attempt produced an artifact
    Success,
    /// The attempt failed and no artifact was returned
    Error,
}

/// Structured record of one generation attempt
///
/// Entries are never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutcomeLogEntry {
    /// Creation time as unix seconds
    pub timestamp: u64,
    /// Identifier of the requesting caller
    pub requester_id: String,
    /// Identifier of the request, derived from the seed
    pub request_id: String,
    /// Category label supplied by the caller
    pub category: String,
    /// Target label of the downstream adapter
    pub target: String,
    /// Seed token used for the attempt
    pub seed: String,
    /// Sectors produced, zero on failure
    pub sector_count: usize,
    /// Tile instances produced, zero on failure
    pub tile_count: usize,
    /// Whether the attempt succeeded
    pub status: OutcomeStatus,
    /// Stable failure kind, present on error entries
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_kind: Option<String>,
    /// Human-readable failure message, present on error entries
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

/// Append-only in-process log of generation outcomes
#[derive(Debug, Clone, Default)]
pub struct OutcomeLog {
    entries: Vec<OutcomeLogEntry>,
}

impl OutcomeLog {
    /// Create an empty log
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append an entry
    pub fn append(&mut self, entry: OutcomeLogEntry) {
        self.entries.push(entry);
    }

    /// All entries in append order
    pub fn entries(&self) -> &[OutcomeLogEntry] {
        &self.entries
    }

    /// Number of recorded entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the log holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Serialize the full log to pretty JSON
    ///
    /// # Errors
    ///
    /// Returns a serialization error when encoding fails.
    pub fn to_json(&self) -> Result<String> {
        to_json_string(&self.entries, "outcome log")
    }
}

/// Current time as unix seconds, zero before the epoch
pub fn unix_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_secs())
}
