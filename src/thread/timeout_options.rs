use serde::{Deserialize, Serialize};

/// Serializable settings for a [`FuncTimeout`](crate::thread::FuncTimeout).
///
/// ```json
/// { "seconds": 5, "message": "Function execution exceeded the timeout limit" }
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TimeoutOptions {
    pub seconds: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl TimeoutOptions {
    pub fn new(seconds: i64) -> Self {
        TimeoutOptions {
            seconds,
            message: None,
        }
    }
}
