use crate::batch::{analyze_batch, FrequencyAccumulator};
use crate::engine::WalkEngine;
use crate::error::{KeyWalkError, KwResult};
use crate::store::FingerprintStore;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, warn};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IngestSummary {
    pub files_seen: usize,
    pub files_processed: usize,
    pub files_skipped: usize,
    pub passwords_read: usize,
    pub passwords_analyzed: usize,
    pub distinct_fingerprints: usize,
}

/// `.txt` inputs under `path`: the file itself, or the directory's
/// `.txt` entries sorted by name.
pub fn collect_inputs(path: &Path) -> KwResult<Vec<PathBuf>> {
    if path.is_file() {
        if is_txt(path) {
            return Ok(vec![path.to_path_buf()]);
        }
        return Err(KeyWalkError::Config(format!(
            "{} is not a .txt file",
            path.display()
        )));
    }
    if !path.is_dir() {
        return Err(KeyWalkError::Config(format!(
            "{} is neither a file nor a directory",
            path.display()
        )));
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(path)? {
        let p = entry?.path();
        if p.is_file() && is_txt(&p) {
            files.push(p);
        }
    }
    files.sort();
    Ok(files)
}

fn is_txt(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("txt"))
}

/// One password per line; blank lines dropped, invalid UTF-8 replaced.
pub fn read_passwords(path: &Path) -> KwResult<Vec<String>> {
    let bytes = fs::read(path)?;
    Ok(String::from_utf8_lossy(&bytes)
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(str::to_string)
        .collect())
}

/// Feeds password lists through the batch analyzer into a store.
pub struct Ingestor {
    engine: Arc<WalkEngine>,
    min_password_len: usize,
    run_totals: FrequencyAccumulator,
}

impl Ingestor {
    pub fn new(engine: Arc<WalkEngine>, min_password_len: usize) -> Self {
        Self {
            engine,
            min_password_len,
            run_totals: FrequencyAccumulator::new(),
        }
    }

    /// Tallies from every file ingested by this run.
    pub fn run_totals(&self) -> &FrequencyAccumulator {
        &self.run_totals
    }

    pub fn run<S: FingerprintStore>(&self, input: &Path, store: &mut S) -> KwResult<IngestSummary> {
        let files = collect_inputs(input)?;
        info!("Found {} input file(s) under {}", files.len(), input.display());

        let mut summary = IngestSummary {
            files_seen: files.len(),
            ..Default::default()
        };

        for file in &files {
            let name = file_name(file);
            if store.is_file_processed(&name) {
                info!("Skipping {}: already processed", name);
                summary.files_skipped += 1;
                continue;
            }
            let (read, analyzed) = self.ingest_file(file, &name, store)?;
            summary.files_processed += 1;
            summary.passwords_read += read;
            summary.passwords_analyzed += analyzed;
        }

        summary.distinct_fingerprints = self.run_totals.len();
        Ok(summary)
    }

    fn ingest_file<S: FingerprintStore>(
        &self,
        file: &Path,
        name: &str,
        store: &mut S,
    ) -> KwResult<(usize, usize)> {
        let start = Instant::now();
        let passwords = read_passwords(file)?;
        let read = passwords.len();
        let eligible: Vec<String> = passwords
            .into_iter()
            .filter(|p| p.chars().count() >= self.min_password_len)
            .collect();
        if eligible.len() < read {
            info!(
                "{}: {} password(s) shorter than {} ignored",
                name,
                read - eligible.len(),
                self.min_password_len
            );
        }

        let tallies = analyze_batch(&self.engine, &eligible);
        for (fingerprint, tally) in tallies.snapshot() {
            store.upsert(&fingerprint, &tally.example, tally.count)?;
        }
        self.run_totals.merge(&tallies);

        store.mark_file_processed(name)?;
        if let Err(e) = store.flush() {
            warn!("Failed to persist after {}: {}", name, e);
            return Err(e);
        }
        info!(
            "Processed {} in {:.2?} ({} passwords, {} fingerprints)",
            name,
            start.elapsed(),
            eligible.len(),
            tallies.len()
        );
        Ok((read, eligible.len()))
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
