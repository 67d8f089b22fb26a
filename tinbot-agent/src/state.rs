//! Agent state
//!
//! All mutable agent state lives here as explicit fields rather than
//! process-wide globals: the cached access token, the set of in-flight jobs,
//! and the busy guard that keeps heartbeat ticks from overlapping.

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};

/// Transient, in-memory agent state
///
/// Owned by the single control task; nothing here survives a process
/// restart.
#[derive(Debug, Default)]
pub struct AgentState {
    /// Cached access token; cleared on any tick-level failure, which is what
    /// triggers a fresh exchange on the next tick
    pub access_token: Option<String>,

    /// Keys of jobs currently in flight: present only between an accepted
    /// start command and the matching stop command.
    executing: HashSet<String>,
}

impl AgentState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a job in flight. Returns false if the key was already in
    /// flight, in which case the caller must skip the duplicate start.
    pub fn mark_in_flight(&mut self, job_key: &str) -> bool {
        self.executing.insert(job_key.to_string())
    }

    /// Clears the in-flight flag after a stop command was processed. The key
    /// is removed outright so the set stays bounded by the number of jobs
    /// actually running, not by every key ever seen.
    pub fn clear_in_flight(&mut self, job_key: &str) {
        self.executing.remove(job_key);
    }

    pub fn is_in_flight(&self, job_key: &str) -> bool {
        self.executing.contains(job_key)
    }

    /// Drops the in-flight set; the token is left to the caller since start
    /// and stop treat it differently.
    pub fn reset(&mut self) {
        self.executing.clear();
    }
}

/// Busy guard for heartbeat ticks
///
/// A tick that begins while the previous one is still running must be
/// skipped entirely, not queued. The flag is atomic because the tokio
/// runtime may migrate the agent task across OS threads.
#[derive(Debug, Default)]
pub struct TickGuard {
    busy: AtomicBool,
}

impl TickGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tries to claim the guard for one tick. Returns `None` when a tick is
    /// already in progress; the permit releases the guard on drop, success
    /// or failure.
    pub fn try_begin(&self) -> Option<TickPermit<'_>> {
        self.busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| TickPermit { guard: self })
    }
}

/// RAII permit for one heartbeat tick
#[derive(Debug)]
pub struct TickPermit<'a> {
    guard: &'a TickGuard,
}

impl Drop for TickPermit<'_> {
    fn drop(&mut self) {
        self.guard.busy.store(false, Ordering::Release);
    }
}
