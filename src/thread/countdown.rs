use std::time::Instant;

use tracing::{debug, warn};

use crate::thread::{CancelToken, Deadline};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownState {
    Idle,
    Armed,
    Completed,
    TimedOut,
}

/// Timer state of one wrapped call.
///
/// Starts idle, is armed right before the operation runs and disarmed
/// exactly once, when dropped. If it is dropped while still armed (the
/// caller unwound) the call's token is cancelled so the worker can stop.
#[derive(Debug)]
pub struct Countdown {
    deadline: Deadline,
    token: CancelToken,
    started: Instant,
    state: CountdownState,
}

impl Countdown {
    pub fn new(deadline: Deadline, token: CancelToken) -> Self {
        Countdown {
            deadline,
            token,
            started: Instant::now(),
            state: CountdownState::Idle,
        }
    }

    /// Starts the clock. Only an idle countdown can be armed.
    pub fn arm(&mut self) {
        if self.state == CountdownState::Idle {
            self.started = Instant::now();
            self.state = CountdownState::Armed;
            debug!(timeout = ?self.deadline.duration(), "countdown armed");
        }
    }

    pub fn complete(&mut self) {
        if self.state == CountdownState::Armed {
            self.state = CountdownState::Completed;
        }
    }

    pub fn expire(&mut self, message: &str) {
        if self.state == CountdownState::Armed {
            self.state = CountdownState::TimedOut;
            self.token.cancel();
            warn!(
                timeout = ?self.deadline.duration(),
                elapsed = ?self.started.elapsed(),
                timeout_message = message,
                "operation timed out"
            );
        }
    }

    pub fn state(&self) -> CountdownState {
        self.state
    }
}

impl Drop for Countdown {
    fn drop(&mut self) {
        if self.state == CountdownState::Armed {
            self.token.cancel();
        }
        debug!(outcome = ?self.state, elapsed = ?self.started.elapsed(), "countdown disarmed");
    }
}
