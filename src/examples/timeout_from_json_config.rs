use std::{thread, time::Duration};

use anyhow::Result;

use crate::{
    json::{read_json, write_json},
    thread::{FuncTimeout, TimeoutOptions},
};

#[test]
// run test by using: 'cargo test examples::timeout_from_json_config::run -- --exact --nocapture'
fn run() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let config_path = dir.path().join("timeout.json");
    write_json(
        &config_path,
        &TimeoutOptions {
            seconds: 1,
            message: Some("Function execution exceeded the timeout limit".to_string()),
        },
    )?;

    let options: TimeoutOptions = read_json(&config_path)?;
    let timeout = FuncTimeout::from_options(&options)?;
    println!("> loaded {options:?}");

    let long_running_function = timeout.wrap(|secs: u64| thread::sleep(Duration::from_secs(secs)));
    let err = long_running_function(3).unwrap_err();
    println!("> {err}");
    assert_eq!(err.to_string(), "Function execution exceeded the timeout limit");
    Ok(())
}
