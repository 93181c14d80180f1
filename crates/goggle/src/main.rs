use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use goggle::dict::load;
use goggle::engine::config::DEFAULT_TOP_N;
use goggle::prelude::*;
use goggle::report::Report;

#[derive(Parser, Debug)]
#[command(name = "goggle", version, about = "Find every dictionary word hidden in a letter grid.")]
struct Cli {
    /// Length of one side of the square board; 4 rolls the official dice
    #[arg(short, long, default_value_t = 4)]
    size: usize,

    /// Seed for board generation
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Word list, one word per line
    #[arg(short, long, default_value = "words.txt")]
    words: PathBuf,

    /// Print the board before solving it
    #[arg(long, default_value_t = false)]
    show_board: bool,

    /// How many of the longest words to report
    #[arg(short, long, default_value_t = DEFAULT_TOP_N)]
    top: usize,

    /// Search worker threads (default: available parallelism)
    #[arg(long)]
    workers: Option<usize>,

    /// Longest path, in cells, to explore
    #[arg(long)]
    max_depth: Option<usize>,

    /// Break ties between equal-length words alphabetically, so output
    /// is the same on every run
    #[arg(long, default_value_t = false)]
    deterministic: bool,
}

impl Cli {
    fn search_config(&self) -> SearchConfig {
        let mut config = SearchConfig::default().with_top_n(self.top);
        config.worker_count = self.workers;
        config.max_depth = self.max_depth;
        if self.deterministic {
            config = config.with_tie_break(TieBreak::Lexicographic);
        }
        config
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let solver = Solver::new(cli.search_config()).context("invalid search options")?;

    let grid = random_board(cli.seed, cli.size)
        .with_context(|| format!("cannot build a {0}x{0} board", cli.size))?;
    let dict = load::from_path(&cli.words)?;
    info!(words = dict.len(), path = %cli.words.display(), "word list loaded");

    if cli.show_board {
        println!("{grid}");
    }

    let outcome = solver.solve(&grid, &dict).context("search failed")?;
    println!("{}", Report::new(&outcome));
    Ok(())
}
