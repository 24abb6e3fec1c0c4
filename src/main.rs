use std::fs;
use std::path::{Path, PathBuf};
use std::process;
use std::time::Instant;

use structopt::StructOpt;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use word_search_tools::{FileFormat, Grid, Result, SearchConfig, Strategy, Wordlist};

/// Find every word from a word list hidden in a letter grid.
#[derive(StructOpt)]
struct Cli {
    /// Grid file: one row per line, cells optionally separated by spaces or
    /// commas. Files ending in .json hold an array of rows instead.
    #[structopt(parse(from_os_str))]
    grid: PathBuf,
    /// Word list file
    #[structopt(parse(from_os_str))]
    words: PathBuf,
    /// Walk with the call stack ("recursive") or an explicit stack ("iterative")
    #[structopt(short, long, default_value = "recursive")]
    strategy: Strategy,
    /// Keep exploring trie branches whose words were all found already
    #[structopt(long)]
    no_prune: bool,
    /// Search start cells in parallel
    #[structopt(short, long)]
    parallel: bool,
    /// Worker threads for --parallel
    #[structopt(short = "j", long)]
    threads: Option<usize>,
    /// Column delimiter in the word list
    #[structopt(short, long)]
    delimiter: Option<char>,
    /// Column holding the word; columns split on --delimiter, or on
    /// whitespace when no delimiter is given
    #[structopt(long)]
    word_column: Option<usize>,
    /// Print matches as a JSON array
    #[structopt(long)]
    json: bool,
}

fn load_grid(path: &Path) -> Result<Grid> {
    let text = fs::read_to_string(path)?;
    if path.extension().map_or(false, |ext| ext == "json") {
        Grid::from_json_str(&text)
    } else {
        Grid::parse(&text)
    }
}

fn run(args: Cli) -> Result<()> {
    let grid_start = Instant::now();
    let mut grid = load_grid(&args.grid)?;
    info!(rows = grid.rows(), cols = grid.cols(),
          elapsed_ms = grid_start.elapsed().as_millis() as u64, "grid loaded");

    let format = match (args.delimiter, args.word_column) {
        (Some(delimiter), column) => FileFormat::builder()
            .delimiter(delimiter)
            .word_column(column.unwrap_or(0))
            .build(),
        (None, Some(column)) => FileFormat::builder().word_column(column).build(),
        (None, None) => FileFormat::default(),
    };
    let wl = Wordlist::from_file(&args.words, &format)?;

    let config = SearchConfig {
        strategy: args.strategy,
        prune_exhausted: !args.no_prune,
        parallel: args.parallel,
        threads: args.threads,
    };

    let start = Instant::now();
    let matches = wl.search_with(&mut grid, &config)?;
    info!("{} of {} words found in {:.3}s", matches.len(), wl.len(), start.elapsed().as_secs_f64());

    if args.json {
        println!("{}", serde_json::to_string(&matches)?);
    } else {
        for word in matches.sorted() {
            println!("{}", word);
        }
    }
    Ok(())
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "word_search_tools=info,word_search=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = run(Cli::from_args()) {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}
