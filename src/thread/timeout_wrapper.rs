use crate::{
    consts::DEFAULT_TIMEOUT_MESSAGE,
    thread::{CancelToken, Countdown, Deadline, TimeoutError},
};
use std::{
    panic::{self, AssertUnwindSafe},
    sync::mpsc::{self, RecvTimeoutError},
    thread,
    time::Duration,
};

pub fn timeout_wrapper<F, T>(f: F, timeout_duration: Duration) -> Result<T, TimeoutError>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    let deadline = Deadline::from_duration(timeout_duration)?;
    timeout_wrapper_with(move |_| f(), deadline, DEFAULT_TIMEOUT_MESSAGE)
}

/// Runs `f` on its own worker thread and waits at most `deadline` for it.
///
/// A panic inside `f` is resumed on the calling thread with its original
/// payload. On timeout the worker is left behind with its token cancelled;
/// whatever it produces later is dropped.
pub fn timeout_wrapper_with<F, T>(f: F, deadline: Deadline, message: &str) -> Result<T, TimeoutError>
where
    F: FnOnce(CancelToken) -> T + Send + 'static,
    T: Send + 'static,
{
    let token = CancelToken::new();
    let worker_token = token.clone();
    // Capacity 1 so an abandoned worker never blocks on send.
    let (tx, rx) = mpsc::sync_channel::<thread::Result<T>>(1);

    let mut countdown = Countdown::new(deadline, token);
    countdown.arm();
    let handle = thread::Builder::new()
        .name("timeout-worker".to_string())
        .spawn(move || {
            let outcome = panic::catch_unwind(AssertUnwindSafe(|| f(worker_token)));
            // The receiver is gone once the caller timed out.
            let _ = tx.send(outcome);
        })?;

    match rx.recv_timeout(deadline.duration()) {
        Ok(Ok(result)) => {
            countdown.complete();
            let _ = handle.join();
            Ok(result)
        }
        Ok(Err(payload)) => {
            countdown.complete();
            drop(countdown);
            panic::resume_unwind(payload)
        }
        Err(RecvTimeoutError::Timeout) => {
            countdown.expire(message);
            Err(TimeoutError::TimedOut {
                message: message.to_string(),
                after: deadline.duration(),
            })
        }
        Err(RecvTimeoutError::Disconnected) => {
            countdown.complete();
            Err(TimeoutError::WorkerLost)
        }
    }
}
