//! One-shot timer manager.
//!
//! Timers live on the simulation timeline, not wall-clock time. Expired
//! timers are collected at the start of a frame and dispatched before the
//! controller ticks.

use std::collections::BTreeMap;

use tracing::debug;

use twinstick_core::constants::TIMER_TOLERANCE_SECS;
use twinstick_core::types::TimerHandle;

/// What to invoke when a timer expires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerCallback {
    FireCooldownExpired,
}

#[derive(Debug, Clone, Copy)]
struct PendingTimer {
    expire_at: f64,
    callback: TimerCallback,
}

/// Pending one-shot timers keyed by handle.
#[derive(Debug, Default)]
pub struct TimerManager {
    pending: BTreeMap<TimerHandle, PendingTimer>,
    next_id: u64,
}

impl TimerManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `callback` to fire `delay_secs` after `now`. The timer under
    /// `replace`, if still pending, is discarded first.
    pub fn set_timer(
        &mut self,
        replace: Option<TimerHandle>,
        now: f64,
        delay_secs: f64,
        callback: TimerCallback,
    ) -> TimerHandle {
        if let Some(old) = replace {
            if self.pending.remove(&old).is_some() {
                debug!(?old, "pending timer replaced");
            }
        }

        self.next_id += 1;
        let handle = TimerHandle(self.next_id);
        self.pending.insert(
            handle,
            PendingTimer {
                expire_at: now + delay_secs.max(0.0),
                callback,
            },
        );
        debug!(?handle, delay_secs, "timer scheduled");
        handle
    }

    pub fn is_pending(&self, handle: TimerHandle) -> bool {
        self.pending.contains_key(&handle)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Remove and return every timer due at `now`, earliest first.
    pub fn expire(&mut self, now: f64) -> Vec<(TimerHandle, TimerCallback)> {
        let due: Vec<TimerHandle> = self
            .pending
            .iter()
            .filter(|(_, t)| t.expire_at <= now + TIMER_TOLERANCE_SECS)
            .map(|(h, _)| *h)
            .collect();

        let mut fired: Vec<(f64, TimerHandle, TimerCallback)> = due
            .into_iter()
            .filter_map(|h| self.pending.remove(&h).map(|t| (t.expire_at, h, t.callback)))
            .collect();
        fired.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)));
        fired.into_iter().map(|(_, h, cb)| (h, cb)).collect()
    }
}
