use std::{thread, time::Duration};

use anyhow::Result;

use crate::{
    date::format_hms,
    thread::func_timeout,
    tracking::measure,
};

#[test]
// run test by using: 'cargo test examples::track_timed_call::run -- --exact --nocapture'
fn run() -> Result<()> {
    let timeout = func_timeout(2)?;
    let (outcome, report) = measure("fill_buffer", || {
        timeout.call(|| {
            thread::sleep(Duration::from_millis(50));
            vec![0_u8; 4 * 1024 * 1024].len()
        })
    });
    println!("> {report}");
    println!("> took {}", format_hms(report.elapsed));
    assert_eq!(outcome?, 4 * 1024 * 1024);
    assert!(report.elapsed >= Duration::from_millis(50));
    Ok(())
}
