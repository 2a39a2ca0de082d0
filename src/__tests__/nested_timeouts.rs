use std::{thread, time::Duration};

use anyhow::Result;

use crate::thread::{Deadline, FuncTimeout, TimeoutError};

fn timeout(millis: u64, message: &str) -> Result<FuncTimeout> {
    Ok(FuncTimeout::new(Deadline::from_duration(Duration::from_millis(millis))?).with_message(message))
}

#[test]
// run test by using: 'cargo test __tests__::nested_timeouts::inner_timeout_leaves_outer_alone -- --exact --nocapture'
fn inner_timeout_leaves_outer_alone() -> Result<()> {
    let inner = timeout(50, "inner")?;
    let outer = timeout(1_000, "outer")?;
    let inner_result = outer.call(move || {
        let res = inner.call(|| thread::sleep(Duration::from_millis(500)));
        // keep running after the inner deadline fired
        thread::sleep(Duration::from_millis(100));
        res.map_err(|err| err.to_string())
    })?;
    assert_eq!(inner_result, Err("inner".to_string()));
    Ok(())
}

#[test]
fn outer_timeout_fires_while_inner_still_fine() -> Result<()> {
    let inner = timeout(2_000, "inner")?;
    let outer = timeout(100, "outer")?;
    let err = outer
        .call(move || inner.call(|| thread::sleep(Duration::from_millis(600))))
        .unwrap_err();
    assert!(matches!(err, TimeoutError::TimedOut { ref message, .. } if message == "outer"));
    Ok(())
}

#[test]
fn both_levels_complete() -> Result<()> {
    let inner = timeout(500, "inner")?;
    let outer = timeout(1_000, "outer")?;
    let value = outer.call(move || inner.call(|| 21 * 2))??;
    assert_eq!(value, 42);
    Ok(())
}
