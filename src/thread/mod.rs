mod cancel_token;
pub use cancel_token::CancelToken;
mod countdown;
pub use countdown::{Countdown, CountdownState};
mod deadline;
pub use deadline::Deadline;
mod func_timeout;
pub use func_timeout::{FuncTimeout, func_timeout};
mod method_timeout;
pub use method_timeout::{HasTimeout, method_timeout, wrap_method};
mod timeout_error;
pub use timeout_error::TimeoutError;
mod timeout_options;
pub use timeout_options::TimeoutOptions;
mod timeout_wrapper;
pub use timeout_wrapper::{timeout_wrapper, timeout_wrapper_with};
mod with_timeout;
pub use with_timeout::with_timeout;
