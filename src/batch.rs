use crate::encoder::Fingerprint;
use crate::engine::WalkEngine;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard};
use tracing::{debug, info, warn};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FingerprintTally {
    /// One password that produced this fingerprint.
    pub example: String,
    pub count: u64,
}

/// Thread-safe fingerprint -> (example, count) upsert map.
#[derive(Debug, Default)]
pub struct FrequencyAccumulator {
    inner: Mutex<HashMap<Fingerprint, FingerprintTally>>,
}

impl FrequencyAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<Fingerprint, FingerprintTally>> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn record(&self, fingerprint: Fingerprint, password: &str) {
        self.record_many(fingerprint, password, 1);
    }

    pub fn record_many(&self, fingerprint: Fingerprint, example: &str, count: u64) {
        self.lock()
            .entry(fingerprint)
            .and_modify(|t| t.count += count)
            .or_insert_with(|| FingerprintTally {
                example: example.to_string(),
                count,
            });
    }

    pub fn merge(&self, other: &FrequencyAccumulator) {
        for (fingerprint, tally) in other.snapshot() {
            self.record_many(fingerprint, &tally.example, tally.count);
        }
    }

    pub fn get(&self, fingerprint: &Fingerprint) -> Option<FingerprintTally> {
        self.lock().get(fingerprint).cloned()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn total(&self) -> u64 {
        self.lock().values().map(|t| t.count).sum()
    }

    pub fn snapshot(&self) -> HashMap<Fingerprint, FingerprintTally> {
        self.lock().clone()
    }

    pub fn into_map(self) -> HashMap<Fingerprint, FingerprintTally> {
        self.inner.into_inner().unwrap_or_else(|e| e.into_inner())
    }

    /// Most frequent first; ties ordered by fingerprint.
    pub fn top(&self, n: usize) -> Vec<(Fingerprint, FingerprintTally)> {
        let mut entries: Vec<_> = self.snapshot().into_iter().collect();
        entries.sort_by(|a, b| b.1.count.cmp(&a.1.count).then_with(|| a.0.cmp(&b.0)));
        entries.truncate(n);
        entries
    }
}

/// Logs every completed tenth of a batch.
#[derive(Debug)]
pub struct BatchProgress {
    total: usize,
    done: AtomicUsize,
    last_decile: AtomicUsize,
}

impl BatchProgress {
    pub fn new(total: usize) -> Self {
        Self {
            total,
            done: AtomicUsize::new(0),
            last_decile: AtomicUsize::new(0),
        }
    }

    pub fn tick(&self) {
        let done = self.done.fetch_add(1, Ordering::Relaxed) + 1;
        if self.total == 0 {
            return;
        }
        let decile = done * 10 / self.total;
        if self.last_decile.fetch_max(decile, Ordering::Relaxed) < decile {
            info!("Progress: {}% ({}/{})", decile * 10, done, self.total);
        }
    }

    pub fn completed(&self) -> usize {
        self.done.load(Ordering::Relaxed)
    }
}

/// Fingerprints every password in parallel and tallies the results.
pub fn analyze_batch<S>(engine: &WalkEngine, passwords: &[S]) -> FrequencyAccumulator
where
    S: AsRef<str> + Sync,
{
    analyze_batch_with(passwords, |password| engine.fingerprint(password))
}

/// Parallel tally with an arbitrary fingerprint function.
///
/// Workers are capped at `min(cores, passwords)`. A password whose
/// analysis panics is logged and skipped; the rest of the batch completes.
pub fn analyze_batch_with<S, F>(passwords: &[S], fingerprint_of: F) -> FrequencyAccumulator
where
    S: AsRef<str> + Sync,
    F: Fn(&str) -> Fingerprint + Sync,
{
    let acc = FrequencyAccumulator::new();
    if passwords.is_empty() {
        return acc;
    }

    let cores = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1);
    let threads = cores.min(passwords.len()).max(1);
    let progress = BatchProgress::new(passwords.len());

    let work = || {
        passwords.par_iter().enumerate().for_each(|(index, password)| {
            let password = password.as_ref();
            match panic::catch_unwind(AssertUnwindSafe(|| fingerprint_of(password))) {
                Ok(fingerprint) if fingerprint.is_empty() => {
                    debug!(index, "No fingerprint, skipped");
                }
                Ok(fingerprint) => acc.record(fingerprint, password),
                Err(_) => warn!(index, "Analysis panicked, password skipped"),
            }
            progress.tick();
        });
    };

    match rayon::ThreadPoolBuilder::new().num_threads(threads).build() {
        Ok(pool) => pool.install(work),
        Err(e) => {
            warn!("Falling back to the global pool: {}", e);
            work();
        }
    }

    info!(
        "Batch complete: {} passwords, {} distinct fingerprints",
        progress.completed(),
        acc.len()
    );
    acc
}
