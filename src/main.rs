use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use std::process;
use tracing::{error, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about = "Keyboard-walk fingerprints for passwords", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON config file; flags typed on the command line win over it.
    #[arg(global = true, long)]
    config: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Fingerprint passwords and group similar walks
    Analyze(cmd::analyze::AnalyzeArgs),
    /// Replay a fingerprint into candidate passwords
    Generate(cmd::generate::GenerateArgs),
    /// Tally fingerprints of password lists into a store
    Ingest(cmd::ingest::IngestArgs),
    /// Show the most frequent fingerprints of a store
    Top(cmd::top::TopArgs),
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    let level = if cli.debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    // Subcommand matches tell typed flags apart from defaults.
    let sub_matches = matches.subcommand().map(|(_, m)| m);
    let config_file = cli.config.as_deref();

    let result = match cli.command {
        Commands::Analyze(args) => cmd::prepare(&args.config, config_file, sub_matches)
            .and_then(|(config, engine)| cmd::analyze::run(args, engine, &config)),
        Commands::Generate(args) => cmd::prepare(&args.config, config_file, sub_matches)
            .and_then(|(_, engine)| cmd::generate::run(args, engine)),
        Commands::Ingest(args) => cmd::prepare(&args.config, config_file, sub_matches)
            .and_then(|(config, engine)| cmd::ingest::run(args, engine, &config)),
        Commands::Top(args) => cmd::top::run(args),
    };

    if let Err(e) = result {
        error!("{}", e);
        process::exit(1);
    }
}
