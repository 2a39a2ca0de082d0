use std::future::Future;

use tracing::warn;

use crate::thread::{Deadline, TimeoutError};

/// Races `future` against `deadline` on the tokio timer.
///
/// On expiry the future is dropped, so it stops at its next `.await`.
pub async fn with_timeout<Fut>(
    deadline: Deadline,
    message: &str,
    future: Fut,
) -> Result<Fut::Output, TimeoutError>
where
    Fut: Future,
{
    match tokio::time::timeout(deadline.duration(), future).await {
        Ok(output) => Ok(output),
        Err(_) => {
            warn!(timeout = ?deadline.duration(), timeout_message = message, "future timed out");
            Err(TimeoutError::TimedOut {
                message: message.to_string(),
                after: deadline.duration(),
            })
        }
    }
}
