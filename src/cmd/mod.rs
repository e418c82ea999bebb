pub mod analyze;
pub mod generate;
pub mod ingest;
pub mod top;

use clap::ArgMatches;
use keywalk::config::Config;
use keywalk::engine::WalkEngine;
use keywalk::error::KwResult;
use std::sync::Arc;
use tracing::info;

/// Final config (file values overlaid by typed flags) and the engine it describes.
pub fn prepare(
    cli_config: &Config,
    config_file: Option<&str>,
    sub_matches: Option<&ArgMatches>,
) -> KwResult<(Config, Arc<WalkEngine>)> {
    let config = match config_file {
        Some(path) => {
            info!("Loading config from {}", path);
            let mut config = Config::load_from_file(path)?;
            if let Some(matches) = sub_matches {
                config.merge_from_cli(cli_config, matches);
            }
            config
        }
        None => cli_config.clone(),
    };
    config.validate()?;
    let engine = Arc::new(WalkEngine::from_params(&config.analysis)?);
    Ok((config, engine))
}
