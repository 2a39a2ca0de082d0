use std::{future::Future, sync::Arc};

use crate::{
    consts::DEFAULT_TIMEOUT_MESSAGE,
    thread::{CancelToken, Deadline, TimeoutError, TimeoutOptions, timeout_wrapper_with, with_timeout},
};

/// Configurable deadline wrapper.
///
/// ```ignore
/// let timeout = func_timeout(5)?.with_message("Function execution exceeded the timeout limit");
/// let long_running = timeout.wrap(|secs: u64| std::thread::sleep(Duration::from_secs(secs)));
/// assert!(long_running(10).is_err()); // fails after 5 seconds
/// ```
pub fn func_timeout(seconds: i64) -> Result<FuncTimeout, TimeoutError> {
    Ok(FuncTimeout::new(Deadline::from_secs(seconds)?))
}

#[derive(Debug, Clone)]
pub struct FuncTimeout {
    deadline: Deadline,
    message: String,
}

impl FuncTimeout {
    pub fn new(deadline: Deadline) -> Self {
        FuncTimeout {
            deadline,
            message: DEFAULT_TIMEOUT_MESSAGE.to_string(),
        }
    }

    pub fn from_options(options: &TimeoutOptions) -> Result<Self, TimeoutError> {
        let timeout = func_timeout(options.seconds)?;
        Ok(match &options.message {
            Some(message) => timeout.with_message(message.as_str()),
            None => timeout,
        })
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn deadline(&self) -> Deadline {
        self.deadline
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn call<F, T>(&self, f: F) -> Result<T, TimeoutError>
    where
        F: FnOnce() -> T + Send + 'static,
        T: Send + 'static,
    {
        timeout_wrapper_with(move |_| f(), self.deadline, &self.message)
    }

    /// Like [`FuncTimeout::call`], but `f` gets the call's token and can stop
    /// at its own checkpoints once the deadline has passed.
    pub fn call_cancellable<F, T>(&self, f: F) -> Result<T, TimeoutError>
    where
        F: FnOnce(CancelToken) -> T + Send + 'static,
        T: Send + 'static,
    {
        timeout_wrapper_with(f, self.deadline, &self.message)
    }

    /// Wraps `f` so every call runs under this deadline. Several arguments
    /// go in as a tuple.
    pub fn wrap<F, A, T>(self, f: F) -> impl Fn(A) -> Result<T, TimeoutError> + Send + Sync + 'static
    where
        F: Fn(A) -> T + Send + Sync + 'static,
        A: Send + 'static,
        T: Send + 'static,
    {
        let f = Arc::new(f);
        move |args: A| {
            let f = Arc::clone(&f);
            self.call(move || (*f)(args))
        }
    }

    pub async fn call_async<Fut>(&self, future: Fut) -> Result<Fut::Output, TimeoutError>
    where
        Fut: Future,
    {
        with_timeout(self.deadline, &self.message, future).await
    }
}
