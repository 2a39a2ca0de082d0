use std::{thread, time::Duration};

use anyhow::Result;
use kitbag::{
    date::{current_timestamp, elapsed_since},
    meta::create_console_logger,
    string::to_snake_case,
    thread::{Deadline, FuncTimeout, func_timeout},
    tracking::track,
};

#[tokio::main]
async fn main() -> Result<()> {
    create_console_logger()?;
    let start = std::time::Instant::now();
    println!("> started at {}", current_timestamp());

    let timeout = func_timeout(1)?.with_message("demo call exceeded its deadline");
    let quick = track("quick_call", || timeout.call(|| to_snake_case("HelloWorld")))?;
    println!("> quick call returned {quick:?}");

    match timeout.call(|| thread::sleep(Duration::from_secs(3))) {
        Ok(()) => println!("> slow call finished (unexpected)"),
        Err(err) => println!("> slow call: {err}"),
    }

    let async_timeout = FuncTimeout::new(Deadline::from_duration(Duration::from_millis(250))?);
    let outcome = async_timeout
        .call_async(tokio::time::sleep(Duration::from_secs(1)))
        .await;
    println!("> async call: {outcome:?}");

    println!("> finished [{}]", elapsed_since(start));
    Ok(())
}
