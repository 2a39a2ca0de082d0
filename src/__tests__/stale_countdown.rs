use std::{thread, time::Duration};

use anyhow::Result;

use crate::thread::{Deadline, FuncTimeout, TimeoutError};

fn timeout(millis: u64) -> Result<FuncTimeout> {
    Ok(FuncTimeout::new(Deadline::from_duration(Duration::from_millis(millis))?))
}

// A call that runs longer than the previous deadline must not be cut short
// by whatever that previous call left behind.
fn follow_up_runs_to_completion() -> Result<()> {
    let out = timeout(800)?.call(|| {
        thread::sleep(Duration::from_millis(300));
        "finished"
    })?;
    assert_eq!(out, "finished");
    Ok(())
}

#[test]
// run test by using: 'cargo test __tests__::stale_countdown::after_timeout -- --exact --nocapture'
fn after_timeout() -> Result<()> {
    let err = timeout(100)?
        .call(|| thread::sleep(Duration::from_secs(2)))
        .unwrap_err();
    assert!(err.is_timed_out());
    follow_up_runs_to_completion()
}

#[test]
fn after_success() -> Result<()> {
    assert_eq!(timeout(100)?.call(|| 1)?, 1);
    follow_up_runs_to_completion()
}

#[test]
fn after_operation_error() -> Result<()> {
    let outcome = timeout(100)?.call(|| "abc".parse::<i32>())?;
    assert!(outcome.is_err());
    follow_up_runs_to_completion()
}

#[test]
fn after_operation_panic() -> Result<()> {
    let t = timeout(100)?;
    let panicked = std::panic::catch_unwind(move || t.call(|| -> i32 { panic!("worker blew up") }));
    assert!(panicked.is_err());
    follow_up_runs_to_completion()
}

#[test]
fn after_configuration_error() -> Result<()> {
    assert!(matches!(
        Deadline::from_secs(0),
        Err(TimeoutError::InvalidDuration(_))
    ));
    follow_up_runs_to_completion()
}
