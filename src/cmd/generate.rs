use clap::Args;
use keywalk::config::Config;
use keywalk::engine::WalkEngine;
use keywalk::error::{KeyWalkError, KwResult};
use keywalk::generator::{random_starts, PasswordGenerator};
use std::sync::Arc;

#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub config: Config,

    /// Glyph fingerprint to replay
    pub fingerprint: String,

    /// Start characters, one candidate each
    #[arg(short, long, default_value = "")]
    pub start: String,

    /// Length of every candidate, start character included
    #[arg(short, long)]
    pub length: usize,

    /// Additional start keys drawn at random from the layout
    #[arg(long, default_value_t = 0)]
    pub random: usize,

    #[arg(long)]
    pub seed: Option<u64>,
}

pub fn run(args: GenerateArgs, engine: Arc<WalkEngine>) -> KwResult<()> {
    let mut starts = args.start.clone();
    if args.random > 0 {
        let mut rng = match args.seed {
            Some(seed) => fastrand::Rng::with_seed(seed),
            None => fastrand::Rng::new(),
        };
        starts.push_str(&random_starts(engine.layout(), args.random, &mut rng));
    }
    if starts.is_empty() {
        return Err(KeyWalkError::Config(
            "No start characters; use --start or --random".to_string(),
        ));
    }

    let passwords =
        PasswordGenerator::new(engine.encoder()).generate(&args.fingerprint, &starts, args.length)?;
    for password in passwords {
        println!("{}", password);
    }
    Ok(())
}
