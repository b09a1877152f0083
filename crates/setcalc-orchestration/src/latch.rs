//! Countdown latch used for the compute and collect barriers.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::{Condvar, Mutex};

/// A one-shot countdown latch.
///
/// Created with a count of N; `wait` blocks until `count_down` has been
/// called N times. Counting down past zero is a no-op.
///
/// # Example
/// ```
/// use std::sync::Arc;
/// use setcalc_orchestration::latch::CountdownLatch;
///
/// let latch = Arc::new(CountdownLatch::new(2));
/// let worker = Arc::clone(&latch);
/// let handle = std::thread::spawn(move || {
///     worker.count_down();
///     worker.count_down();
/// });
/// latch.wait();
/// assert_eq!(latch.remaining(), 0);
/// handle.join().unwrap();
/// ```
#[derive(Debug)]
pub struct CountdownLatch {
    remaining: Mutex<usize>,
    released: Condvar,
}

impl CountdownLatch {
    /// Create a latch that releases after `count` countdowns.
    #[must_use]
    pub fn new(count: usize) -> Self {
        Self {
            remaining: Mutex::new(count),
            released: Condvar::new(),
        }
    }

    /// Decrement the count, waking every waiter when it reaches zero.
    pub fn count_down(&self) {
        let mut remaining = self.remaining.lock();
        if *remaining == 0 {
            return;
        }
        *remaining -= 1;
        if *remaining == 0 {
            self.released.notify_all();
        }
    }

    /// Block until the count reaches zero.
    pub fn wait(&self) {
        let mut remaining = self.remaining.lock();
        while *remaining > 0 {
            self.released.wait(&mut remaining);
        }
    }

    /// Block until the count reaches zero or `timeout` elapses.
    ///
    /// Returns `true` if the latch was released.
    pub fn wait_timeout(&self, timeout: Duration) -> bool {
        let mut remaining = self.remaining.lock();
        if *remaining == 0 {
            return true;
        }
        let _ = self
            .released
            .wait_while_for(&mut remaining, |r| *r > 0, timeout);
        *remaining == 0
    }

    /// Countdowns still outstanding.
    #[must_use]
    pub fn remaining(&self) -> usize {
        *self.remaining.lock()
    }

    /// A guard that counts this latch down when dropped, including during
    /// unwinding.
    #[must_use]
    pub fn guard(self: &Arc<Self>) -> LatchGuard {
        LatchGuard {
            latch: Arc::clone(self),
        }
    }
}

/// Counts its latch down on drop.
#[derive(Debug)]
pub struct LatchGuard {
    latch: Arc<CountdownLatch>,
}

impl Drop for LatchGuard {
    fn drop(&mut self) {
        self.latch.count_down();
    }
}
