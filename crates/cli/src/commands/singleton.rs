//! Singleton identity check across threads

use anyhow::{anyhow, bail, Result};
use primer_core::Singleton;
use std::thread;

/// Fetch the instance from `threads` threads and confirm every one sees the
/// same id as the main thread.
pub fn check(threads: usize) -> Result<()> {
    if threads == 0 {
        bail!("--threads must be at least 1");
    }

    let main = Singleton::instance();

    let handles: Vec<_> = (0..threads)
        .map(|_| thread::spawn(|| Singleton::instance().id()))
        .collect();

    let mut ids = Vec::with_capacity(threads);
    for handle in handles {
        let id = handle
            .join()
            .map_err(|_| anyhow!("singleton worker thread panicked"))?;
        ids.push(id);
    }

    let mismatched = ids.iter().filter(|id| **id != main.id()).count();
    tracing::debug!(threads, mismatched, "Singleton check finished");

    println!("🔒 Singleton {}", main.id());
    println!("   created at: {}", main.created_at());
    println!("   threads checked: {}", threads);
    println!("   same instance everywhere: {}", mismatched == 0);

    if mismatched > 0 {
        bail!("{} threads saw a different instance", mismatched);
    }
    Ok(())
}
