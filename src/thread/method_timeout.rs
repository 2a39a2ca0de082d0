use std::{any, sync::Arc};

use crate::{
    consts::{DEFAULT_TIMEOUT_MESSAGE, TIMEOUT_TIMER_FIELD},
    thread::{Deadline, TimeoutError, timeout_wrapper_with},
};

/// Objects that carry their own timeout, in whole seconds.
pub trait HasTimeout {
    /// `None` means the object has no timer configured.
    fn timeout_timer(&self) -> Option<i64>;
}

/// Runs `method` against `target` under the target's own `timeout_timer`,
/// read at call time.
pub fn method_timeout<S, F, T>(target: &Arc<S>, method: F) -> Result<T, TimeoutError>
where
    S: HasTimeout + Send + Sync + 'static,
    F: FnOnce(&S) -> T + Send + 'static,
    T: Send + 'static,
{
    let seconds = target.timeout_timer().ok_or(TimeoutError::MissingField {
        field: TIMEOUT_TIMER_FIELD,
        type_name: any::type_name::<S>(),
    })?;
    let deadline = Deadline::from_secs(seconds)?;
    let target = Arc::clone(target);
    timeout_wrapper_with(move |_| method(&*target), deadline, DEFAULT_TIMEOUT_MESSAGE)
}

/// Turns `method` into one that runs under the receiver's `timeout_timer`
/// on every call. Several arguments go in as a tuple.
pub fn wrap_method<S, F, A, T>(
    method: F,
) -> impl Fn(&Arc<S>, A) -> Result<T, TimeoutError> + Send + Sync + 'static
where
    S: HasTimeout + Send + Sync + 'static,
    F: Fn(&S, A) -> T + Send + Sync + 'static,
    A: Send + 'static,
    T: Send + 'static,
{
    let method = Arc::new(method);
    move |target: &Arc<S>, args: A| {
        let method = Arc::clone(&method);
        method_timeout(target, move |s: &S| (*method)(s, args))
    }
}
