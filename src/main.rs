use clap::{Parser, Subcommand};
use ngramprob::config::TextConfig;
use ngramprob::model::NGramModel;
use std::process;
use tracing::{error, info, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(global = true, short, long, default_value = "corpus.txt")]
    corpus: String,

    #[arg(global = true, short = 'n', long, default_value_t = 2)]
    order: usize,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,

    #[command(flatten)]
    text: TextConfig,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Probability of each phrase under the corpus model
    Score(cmd::score::ScoreArgs),
    /// Probabilities across a range of orders, in both sentence modes
    Grid(cmd::grid::GridArgs),
    /// Writes the n-gram table
    Dump(cmd::dump::DumpArgs),
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    info!("🚀 Building {}-gram model...", cli.order);
    let mut model = NGramModel::from_file(cli.order, &cli.corpus, cli.text.clone())
        .unwrap_or_else(|e| {
            error!("❌ Could not build model from '{}': {}", cli.corpus, e);
            process::exit(1);
        });

    let result = match cli.command {
        Commands::Score(args) => cmd::score::run(args, &model),
        Commands::Grid(args) => cmd::grid::run(args, &mut model),
        Commands::Dump(args) => cmd::dump::run(args, &model),
    };

    if let Err(e) = result {
        error!("❌ {}", e);
        process::exit(1);
    }
}
