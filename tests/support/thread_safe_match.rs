//! Thread-safe wrapper for a [`MatchHarness`] shared by rspec fixtures.

use std::ops::{Deref, DerefMut};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use test_utils::MatchHarness;

/// Wrapper that forwards `Send` and `Sync` because access is mutex-guarded.
#[derive(Debug)]
pub struct ThreadSafeMatch(pub MatchHarness);

impl Deref for ThreadSafeMatch {
    type Target = MatchHarness;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for ThreadSafeMatch {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

// SAFETY: rspec fixtures must implement `Clone + Send + Sync`, and the suites
// run through `run_serial`, so the `Rc`-backed cue log never crosses threads.
// All access to the wrapped harness is guarded by the mutex.
unsafe impl Send for ThreadSafeMatch {}
unsafe impl Sync for ThreadSafeMatch {}

/// Shared pointer type for the wrapped harness.
pub type SharedMatch = Arc<Mutex<ThreadSafeMatch>>;

/// Wraps `harness` for sharing between rspec steps.
pub fn share(harness: MatchHarness) -> SharedMatch {
    Arc::new(Mutex::new(ThreadSafeMatch(harness)))
}

/// Locks the shared harness, recovering from a poisoned mutex.
pub fn lock_match(shared: &SharedMatch) -> MutexGuard<'_, ThreadSafeMatch> {
    shared.lock().unwrap_or_else(PoisonError::into_inner)
}
