use crate::reports;
use clap::Args;
use keywalk::analyzer::PasswordAnalyzer;
use keywalk::config::Config;
use keywalk::engine::WalkEngine;
use keywalk::error::{KeyWalkError, KwResult};
use keywalk::ingest::read_passwords;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct AnalyzeArgs {
    #[command(flatten)]
    pub config: Config,

    /// Passwords to fingerprint
    pub passwords: Vec<String>,

    /// Also read passwords from this file, one per line
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Print every step of each walk
    #[arg(long, default_value_t = false)]
    pub trace: bool,
}

pub fn run(args: AnalyzeArgs, engine: Arc<WalkEngine>, config: &Config) -> KwResult<()> {
    let mut passwords = args.passwords;
    if let Some(file) = &args.file {
        passwords.extend(read_passwords(file)?);
    }
    if passwords.is_empty() {
        return Err(KeyWalkError::Config(
            "No passwords given; pass them as arguments or with --file".to_string(),
        ));
    }

    let mut analyzer =
        PasswordAnalyzer::new(engine.clone()).with_threshold(config.grouping.similarity_threshold);

    for password in &passwords {
        let fingerprint = analyzer.analyze(password).unwrap_or_default();
        println!("{}\t{}", password, fingerprint);
        if args.trace {
            reports::print_trace(password, &engine.trace(password));
        }
    }

    reports::print_pattern_groups(analyzer.pattern_groups());
    if let Some(smallest) = analyzer.smallest_path() {
        info!("Last reduced fingerprint: {}", smallest);
    }
    Ok(())
}
