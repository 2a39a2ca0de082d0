use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

/// Per-call cancellation flag shared between the caller and the worker.
///
/// Threads cannot be preempted: an operation that wants to stop early after
/// its deadline has to poll [`CancelToken::is_cancelled`] at its own
/// checkpoints. Operations that never poll keep running in the background
/// and only their result is thrown away.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        CancelToken::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }
}
