//! Pending-punch ledger: a JSON array of [`PendingPunch`] entries under
//! the config dir. Every mutation is a full load-modify-store rewrite,
//! so no partial-write state is ever observable; the ledger is shared
//! between the punch flow and the refresh flow only through this type.

use crate::core::reconcile::{self, MergeOutcome};
use crate::errors::{AppError, AppResult};
use crate::models::pending::PendingPunch;
use crate::models::punch::PunchEvent;
use chrono::{DateTime, Local};
use std::fs;
use std::path::PathBuf;

pub struct PendingLedger {
    path: PathBuf,
}

impl PendingLedger {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// A missing or unreadable ledger is an empty ledger; a corrupt file
    /// must never block a refresh cycle.
    pub fn load(&self) -> Vec<PendingPunch> {
        let Ok(content) = fs::read_to_string(&self.path) else {
            return Vec::new();
        };
        match serde_json::from_str(&content) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!(error = %e, "discarding unreadable pending ledger");
                Vec::new()
            }
        }
    }

    fn store(&self, entries: &[PendingPunch]) -> AppResult<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }
        let json =
            serde_json::to_string_pretty(entries).map_err(|e| AppError::Store(e.to_string()))?;
        fs::write(&self.path, json)?;
        Ok(())
    }

    /// Record a just-confirmed punch. The entry survives until the server
    /// reflects it or the TTL expires, whichever comes first.
    pub fn append(&self, entry: PendingPunch) -> AppResult<()> {
        let mut entries = self.load();
        entries.push(entry);
        self.store(&entries)
    }

    /// Merge the authoritative server punches against the ledger, write
    /// back the surviving entries and return the merged, time-ordered
    /// sequence for the engine.
    pub fn merge(
        &self,
        server: Vec<PunchEvent>,
        now: DateTime<Local>,
    ) -> AppResult<Vec<PunchEvent>> {
        let pending = self.load();
        let MergeOutcome { events, retained } =
            reconcile::merge_pending(server, &pending, now.timestamp_millis());
        if retained.len() != pending.len() {
            self.store(&retained)?;
        }
        Ok(events)
    }
}
