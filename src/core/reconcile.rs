//! Two-source merge of the authoritative server punches with the local
//! pending ledger. Kept pure so reconciliation is testable independent
//! of the storage behind it.

use crate::models::pending::PendingPunch;
use crate::models::punch::PunchEvent;

/// Ledger entries older than this are assumed converged (or lost) on the
/// server side and evicted, bounding ledger growth from failed writes.
pub const PENDING_TTL_MS: i64 = 15 * 60 * 1000;

#[derive(Debug, Default)]
pub struct MergeOutcome {
    /// Union of server events and surviving pending entries, sorted by
    /// timestamp ascending.
    pub events: Vec<PunchEvent>,
    /// Pending entries that survived this merge and must be written back.
    pub retained: Vec<PendingPunch>,
}

/// Merge rules, per pending entry:
/// 1. older than the TTL → discard;
/// 2. any *server* event with timestamp ≥ the entry's → discard (the
///    server caught up; the vendor's own fields are not stable across
///    the write path, so exact equality is not required);
/// 3. otherwise keep it, flagged pending, in the output.
///
/// Idempotent for a fixed (server, pending, now) input.
pub fn merge_pending(
    server: Vec<PunchEvent>,
    pending: &[PendingPunch],
    now_ms: i64,
) -> MergeOutcome {
    let server_ts: Vec<i64> = server.iter().map(|e| e.timestamp_ms()).collect();

    let mut events = server;
    let mut retained = Vec::new();

    for entry in pending {
        if now_ms - entry.created_at_ms > PENDING_TTL_MS {
            tracing::debug!(timestamp_ms = entry.timestamp_ms, "pending punch expired");
            continue;
        }
        let confirmed = server_ts.iter().any(|&ts| ts >= entry.timestamp_ms);
        if confirmed {
            tracing::debug!(
                timestamp_ms = entry.timestamp_ms,
                "pending punch confirmed by server"
            );
            continue;
        }
        events.push(entry.to_event());
        retained.push(entry.clone());
    }

    events.sort_by_key(|e| e.timestamp());

    MergeOutcome { events, retained }
}
