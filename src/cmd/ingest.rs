use crate::reports;
use clap::Args;
use keywalk::config::Config;
use keywalk::engine::WalkEngine;
use keywalk::error::KwResult;
use keywalk::ingest::Ingestor;
use keywalk::store::{FingerprintStore, JsonFileStore};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct IngestArgs {
    #[command(flatten)]
    pub config: Config,

    /// A .txt password list, or a directory of them
    pub input: PathBuf,

    #[arg(long, default_value = "keywalks.json")]
    pub store: PathBuf,

    /// Export the whole store, ranked, to this CSV file
    #[arg(long)]
    pub csv: Option<PathBuf>,

    /// Rows in the summary of this run
    #[arg(long, default_value_t = 20)]
    pub top: usize,
}

pub fn run(args: IngestArgs, engine: Arc<WalkEngine>, config: &Config) -> KwResult<()> {
    let mut store = JsonFileStore::open(&args.store)?;
    let ingestor = Ingestor::new(engine, config.analysis.min_password_len);

    let summary = ingestor.run(&args.input, &mut store)?;
    reports::print_ingest_summary(&summary);
    reports::print_tallies(&ingestor.run_totals().top(args.top));

    if let Some(csv_path) = &args.csv {
        reports::export_csv(csv_path, &store.ranked())?;
        info!("Exported store to {}", csv_path.display());
    }
    Ok(())
}
