use keywalk::error::KwResult;
use keywalk::store::StoredFingerprint;
use serde::Serialize;
use std::path::Path;

#[derive(Serialize)]
struct CsvRow<'a> {
    rank: usize,
    fingerprint: &'a str,
    count: u64,
    example: &'a str,
}

pub fn ranked_csv(path: &Path, entries: &[StoredFingerprint]) -> KwResult<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for (i, entry) in entries.iter().enumerate() {
        writer.serialize(CsvRow {
            rank: i + 1,
            fingerprint: entry.fingerprint.as_str(),
            count: entry.count,
            example: &entry.example,
        })?;
    }
    writer.flush()?;
    Ok(())
}
