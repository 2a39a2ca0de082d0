use std::{io, time::Duration};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TimeoutError {
    /// The deadline fired before the operation returned.
    #[error("{message}")]
    TimedOut { message: String, after: Duration },

    #[error("timeout duration must be positive, got {0}")]
    InvalidDuration(String),

    #[error("`{type_name}` has no `{field}` set")]
    MissingField {
        field: &'static str,
        type_name: &'static str,
    },

    #[error("could not spawn the timeout worker thread")]
    Spawn(#[from] io::Error),

    #[error("timeout worker exited without reporting a result")]
    WorkerLost,
}

impl TimeoutError {
    pub fn is_timed_out(&self) -> bool {
        matches!(self, TimeoutError::TimedOut { .. })
    }
}
