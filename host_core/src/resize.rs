use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use crate::error::HostResult;

/// Read-and-clear "window was resized" flag.
///
/// Clones share the same flag: a host listener owns one handle and notifies,
/// the frame loop owns another and polls.
#[derive(Debug, Clone, Default)]
pub struct ResizeTracker {
    flag: Arc<AtomicBool>,
}

impl ResizeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a resize. Repeated notifications collapse into one.
    #[inline]
    pub fn notify(&self) {
        self.flag.store(true, Ordering::Release);
    }

    /// Returns whether a resize happened since the previous poll, and clears it.
    #[inline]
    pub fn poll_and_clear(&self) -> bool {
        self.flag.swap(false, Ordering::AcqRel)
    }

    /// Peek without clearing.
    #[cfg(test)]
    pub(crate) fn is_pending(&self) -> bool {
        self.flag.load(Ordering::Acquire)
    }
}

/// A host that can deliver window resize notifications.
///
/// Subscriptions live as long as the source; there is no unsubscribe.
pub trait ResizeSource {
    fn subscribe(&mut self, tracker: ResizeTracker) -> HostResult<()>;
}

/// In-process resize source: every subscribed tracker is notified on `fire`.
#[derive(Debug, Default)]
pub struct ResizeFanout {
    listeners: Vec<ResizeTracker>,
}

impl ResizeFanout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Notify every subscriber. Returns the number of listeners reached.
    pub fn fire(&self) -> usize {
        for t in &self.listeners {
            t.notify();
        }
        self.listeners.len()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl ResizeSource for ResizeFanout {
    fn subscribe(&mut self, tracker: ResizeTracker) -> HostResult<()> {
        self.listeners.push(tracker);
        Ok(())
    }
}
