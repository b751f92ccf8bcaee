use std::sync::Arc;
use std::sync::atomic::AtomicBool;
use std::sync::atomic::Ordering;
use std::time::Duration;
use std::time::Instant;

/// Cancellation handle for a running estimate.
///
/// Clones share one flag, so a clone handed to another thread can stop
/// the enumeration. An optional deadline trips it on its own.
#[derive(Debug, Default, Clone)]
pub struct Interrupt {
    flag: Arc<AtomicBool>,
    deadline: Option<Instant>,
}

impl Interrupt {
    /// Trip after the given duration from now.
    pub fn after(duration: Duration) -> Self {
        Self {
            flag: Arc::default(),
            deadline: Some(Instant::now() + duration),
        }
    }
    /// Request cancellation.
    pub fn interrupt(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }
    /// Check if cancellation was requested or the deadline passed.
    pub fn interrupted(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
            || self
                .deadline
                .map_or(false, |deadline| Instant::now() >= deadline)
    }
}
