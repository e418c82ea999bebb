use crate::reports;
use clap::Args;
use keywalk::error::{KeyWalkError, KwResult};
use keywalk::store::{FingerprintStore, JsonFileStore};
use std::path::PathBuf;

#[derive(Args, Debug, Clone)]
pub struct TopArgs {
    #[arg(long, default_value = "keywalks.json")]
    pub store: PathBuf,

    #[arg(short = 'n', long, default_value_t = 20)]
    pub limit: usize,
}

pub fn run(args: TopArgs) -> KwResult<()> {
    if !args.store.exists() {
        return Err(KeyWalkError::Store(format!(
            "No store at {}",
            args.store.display()
        )));
    }
    let store = JsonFileStore::open(&args.store)?;
    let mut ranked = store.ranked();
    ranked.truncate(args.limit);
    reports::print_store_top(&ranked);
    Ok(())
}
