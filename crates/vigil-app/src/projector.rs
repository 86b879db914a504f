//! Session state fold.
//!
//! [`SessionState`] holds the client's three projections of the server's
//! world and is mutated only through the `apply_*` operations. The fold is
//! pure and deterministic: the same ordered sequence of calls always yields
//! the same state, independent of transport timing. A snapshot is a
//! checkpoint that subsumes everything accumulated before it; incremental
//! events extend the state from the most recent checkpoint.

use std::collections::VecDeque;

use vigil_proto::{ActionLogEntry, Snapshot};

/// Maximum number of live-feed lines retained (most recent kept).
pub const FEED_CAP: usize = 100;

/// Maximum number of action-log entries retained.
///
/// The server does not bound the log; this is a defensive client-side cap
/// that drops the oldest entries while preserving most-recent-first order.
pub const ACTION_LOG_CAP: usize = 1000;

/// The client's view of the monitored system for one connection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    /// Raw feed lines, most recent last.
    live_feed: VecDeque<String>,
    /// Completed actions, most recent first.
    action_log: VecDeque<ActionLogEntry>,
    /// The most recently arrived action, if any.
    latest_status: Option<ActionLogEntry>,
}

impl SessionState {
    /// Empty state, as at connection start.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace all three projections with the server's authoritative view.
    ///
    /// Previously accumulated incremental events are discarded: the snapshot
    /// is ordered after any point the client already knows. Bounds are
    /// enforced here too, so the feed invariant holds for every fold
    /// sequence, not only incremental ones.
    pub fn apply_snapshot(&mut self, snapshot: Snapshot) {
        let skip = snapshot.live_feed.len().saturating_sub(FEED_CAP);
        self.live_feed = snapshot.live_feed.into_iter().skip(skip).collect();

        let mut action_log: VecDeque<ActionLogEntry> = snapshot.action_log.into();
        action_log.truncate(ACTION_LOG_CAP);
        self.action_log = action_log;

        self.latest_status = snapshot.latest_status;
    }

    /// Append one feed line, dropping from the head once past [`FEED_CAP`].
    ///
    /// No deduplication: repeated identical lines are legitimate.
    pub fn apply_feed_event(&mut self, event: String) {
        self.live_feed.push_back(event);
        while self.live_feed.len() > FEED_CAP {
            self.live_feed.pop_front();
        }
    }

    /// Prepend one action entry and point the latest status at it.
    pub fn apply_action_log(&mut self, entry: ActionLogEntry) {
        self.latest_status = Some(entry.clone());
        self.action_log.push_front(entry);
        self.action_log.truncate(ACTION_LOG_CAP);
    }

    /// Display index for the entry at `position` (0-based from the most
    /// recent end): the oldest retained entry is 1, growing monotonically.
    /// Derived, never stored.
    pub fn display_index(&self, position: usize) -> usize {
        self.action_log.len().saturating_sub(position)
    }

    /// Raw feed lines, most recent last.
    pub fn live_feed(&self) -> &VecDeque<String> {
        &self.live_feed
    }

    /// Completed actions, most recent first.
    pub fn action_log(&self) -> &VecDeque<ActionLogEntry> {
        &self.action_log
    }

    /// The most recently arrived action. `None` before any action.
    pub fn latest_status(&self) -> Option<&ActionLogEntry> {
        self.latest_status.as_ref()
    }
}
