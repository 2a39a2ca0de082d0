use std::{thread, time::Duration};

use anyhow::{Result, anyhow};
use futures::future::join_all;
use rand::Rng;

use crate::thread::{Deadline, FuncTimeout};

#[test]
// run test by using: 'cargo test __tests__::concurrent_timeouts::threads_time_out_independently -- --exact --nocapture'
fn threads_time_out_independently() -> Result<()> {
    let mut rng = rand::thread_rng();
    let handles: Vec<_> = (0..8)
        .map(|i| {
            let slow = i % 2 == 0;
            let work = if slow { 1_000 } else { rng.gen_range(1..30) };
            thread::spawn(move || -> Result<bool> {
                let timeout = FuncTimeout::new(Deadline::from_duration(Duration::from_millis(200))?);
                let outcome = timeout.call(move || thread::sleep(Duration::from_millis(work)));
                Ok(slow == outcome.is_err())
            })
        })
        .collect();
    for handle in handles {
        let as_expected = handle.join().map_err(|_| anyhow!("test thread panicked"))??;
        assert!(as_expected);
    }
    Ok(())
}

#[tokio::test]
async fn futures_time_out_independently() -> Result<()> {
    let timeout = FuncTimeout::new(Deadline::from_duration(Duration::from_millis(100))?);
    let calls = [10_u64, 500, 20, 800].map(|millis| {
        let timeout = timeout.clone();
        async move {
            timeout
                .call_async(async move {
                    tokio::time::sleep(Duration::from_millis(millis)).await;
                    millis
                })
                .await
        }
    });
    let results = join_all(calls).await;
    let finished: Vec<u64> = results.iter().filter_map(|r| r.as_ref().ok().copied()).collect();
    assert_eq!(finished, vec![10, 20]);
    assert_eq!(results.iter().filter(|r| r.is_err()).count(), 2);
    Ok(())
}
