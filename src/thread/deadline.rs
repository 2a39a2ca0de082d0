use std::time::Duration;

use crate::thread::TimeoutError;

/// Maximum time one wrapped call is allowed to run. Always strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Deadline(Duration);

impl Deadline {
    pub fn from_secs(seconds: i64) -> Result<Self, TimeoutError> {
        if seconds <= 0 {
            return Err(TimeoutError::InvalidDuration(format!("{seconds}s")));
        }
        Ok(Deadline(Duration::from_secs(seconds as u64)))
    }

    pub fn from_duration(duration: Duration) -> Result<Self, TimeoutError> {
        if duration.is_zero() {
            return Err(TimeoutError::InvalidDuration(format!("{duration:?}")));
        }
        Ok(Deadline(duration))
    }

    pub fn duration(&self) -> Duration {
        self.0
    }
}

impl TryFrom<Duration> for Deadline {
    type Error = TimeoutError;

    fn try_from(duration: Duration) -> Result<Self, Self::Error> {
        Deadline::from_duration(duration)
    }
}
