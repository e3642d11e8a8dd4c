//! Per-session state, kept in an arena keyed by session id.
//!
//! Every session owns the workbook it uploaded, so two users reporting at the
//! same time never read each other's files.

use dashmap::DashMap;
use rekap_sheets::Workbook;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Opaque sender identity, e.g. a chat id.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionId(String);

impl From<&str> for SessionId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for SessionId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<i64> for SessionId {
    fn from(id: i64) -> Self {
        Self(id.to_string())
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Where a session is in the dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Stage {
    /// No workbook, or the user said they are done.
    #[default]
    Idle,
    /// Sheet menu shown; waiting for a number or a button press.
    AwaitingSheet,
    /// Report sent; waiting for `ya` or `tidak`.
    AwaitingContinue,
}

#[derive(Debug, Clone)]
pub struct Session {
    pub workbook: Option<Arc<Workbook>>,
    pub stage: Stage,
    last_seen: Instant,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            workbook: None,
            stage: Stage::Idle,
            last_seen: Instant::now(),
        }
    }
}

impl Session {
    /// Forget the workbook and return to [`Stage::Idle`].
    pub fn clear(&mut self) {
        self.workbook = None;
        self.stage = Stage::Idle;
    }

    pub fn idle_for(&self) -> Duration {
        self.last_seen.elapsed()
    }
}

/// The session arena.
#[derive(Debug, Default)]
pub struct Sessions {
    inner: DashMap<SessionId, Session>,
}

impl Sessions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `f` against the session for `id`, creating it if needed, and mark
    /// the session as seen.
    ///
    /// The arena shard stays locked while `f` runs; keep `f` short.
    pub fn with<R>(&self, id: &SessionId, f: impl FnOnce(&mut Session) -> R) -> R {
        let mut entry = self.inner.entry(id.clone()).or_default();
        entry.last_seen = Instant::now();
        f(entry.value_mut())
    }

    /// Like [`Sessions::with`], but only for a session that already exists.
    /// Unknown ids are left out of the arena.
    pub fn with_existing<R>(&self, id: &SessionId, f: impl FnOnce(&mut Session) -> R) -> Option<R> {
        let mut entry = self.inner.get_mut(id)?;
        entry.last_seen = Instant::now();
        Some(f(entry.value_mut()))
    }

    /// Snapshot of one session, if it exists.
    pub fn get(&self, id: &SessionId) -> Option<Session> {
        self.inner.get(id).map(|s| s.value().clone())
    }

    pub fn stage(&self, id: &SessionId) -> Stage {
        self.inner.get(id).map(|s| s.stage).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Drop sessions not seen for longer than `max_idle`. Returns how many
    /// were dropped.
    pub fn evict_idle(&self, max_idle: Duration) -> usize {
        let before = self.inner.len();
        self.inner.retain(|_, s| s.idle_for() <= max_idle);
        let evicted = before.saturating_sub(self.inner.len());
        if evicted > 0 {
            tracing::debug!(evicted, "evicted idle sessions");
        }
        evicted
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
