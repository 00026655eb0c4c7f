//! Worker slot assignment example.
//!
//! Jobs keyed by `(queue, job)` borrow worker slots from a shared pool.
//! Run with `RUST_LOG=trace` to see every transition.

use anyhow::Result;
use std::thread;
use tether::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = AssociationConfig::from_json(r#"{"universe": 6, "ordered": true}"#)?;
    let slots: SharedAssociations<(u32, u32)> =
        AssociationsBuilder::from_config(config).build_shared();

    let workers: Vec<_> = (0..3u32)
        .map(|queue| {
            let slots = slots.clone();
            thread::spawn(move || -> Result<()> {
                for job in 0..2 {
                    let slot = slots.allocate((queue, job))?;
                    tracing::info!(queue, job, %slot, "job scheduled");
                }
                Ok(())
            })
        })
        .collect();

    for worker in workers {
        worker
            .join()
            .map_err(|_| anyhow::anyhow!("worker thread panicked"))??;
    }

    // Pool is full now; the next job has to wait for a release.
    match slots.allocate((9, 0)) {
        Err(e) if e.is_recoverable() => tracing::warn!("{e}; releasing queue 0"),
        other => anyhow::bail!("expected exhausted pool, got {other:?}"),
    }
    slots.remove_a(&(0, 0));
    let slot = slots.allocate((9, 0))?;

    // Hand the slot over to another job.
    slots.associate((1, 5), slot)?;
    println!("slot {slot} now runs {:?}", slots.get_a(slot));
    println!("{:#?}", slots.stats());

    Ok(())
}
