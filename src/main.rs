use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use clap::{Parser, Subcommand};
use rirgate::ircore::CFG_NAME;
use rirgate::ircore::cfg::Cfg;
use rirgate::ircore::engine::Engine;
use rirgate::ircore::error::{GatewayError, Result};

#[derive(Parser)]
#[derive(Debug)]
#[clap(author, version, about, long_about = None)]
#[clap(propagate_version = true)]
/// A ranking gateway over a precomputed index
struct Cli {
    #[clap(short, long, value_parser, default_value_t = String::from(CFG_NAME))]
    /// Configuration file
    config: String,
    #[clap(short, long, value_parser)]
    /// Index file, overrides the configuration
    index: Option<PathBuf>,
    #[clap(short, long, value_parser)]
    /// Topic model file, overrides the configuration
    topics: Option<PathBuf>,
    #[clap(short, long, value_parser)]
    /// Results kept per search, overrides the configuration
    max_results: Option<usize>,
    #[clap(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
#[derive(Debug)]
enum Commands {
    /// Handle one JSON request
    Query {
        #[clap(value_parser)]
        /// request, e.g. {"ranker": "bm25", "query": "..."}
        request: String,
    },
    /// Handle JSON requests from stdin, one per line
    Serve,
    /// Index statistics
    Stats,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let mut cfg = Cfg::load(PathBuf::from(&cli.config).as_path())?;
    if let Some(index) = &cli.index {
        cfg.set_index(index.clone());
    }
    if let Some(topics) = &cli.topics {
        cfg.set_topics(topics.clone());
    }
    if let Some(max_results) = cli.max_results {
        cfg.set_max_results(max_results);
    }
    let engine = Engine::load_from(cfg)?;
    match &cli.command {
        Some(Commands::Query{ request }) => command_query(&engine, request),
        Some(Commands::Serve) => command_serve(&engine),
        Some(Commands::Stats) | None => {
            command_stats(&engine);
            Ok(())
        }
    }
}

fn command_query(engine: &Engine, request: &str) -> Result<()> {
    let response = engine.handle(request)?;
    println!("{}", response.to_json_pretty()?);
    Ok(())
}

// a failed request answers with {"error": ...} and the loop goes on
fn command_serve(engine: &Engine) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for line in stdin.lock().lines() {
        let line = line.map_err(|e| GatewayError::Io{path: "<stdin>".to_string(), source: e})?;
        if line.trim().is_empty() {
            continue;
        }
        let reply = match engine.handle(&line).and_then(|response| response.to_json()) {
            Ok(json) => json,
            Err(e) => {
                log::error!("{}", e);
                serde_json::json!({"error": e.to_string()}).to_string()
            }
        };
        writeln!(out, "{}", reply)
            .and_then(|_| out.flush())
            .map_err(|e| GatewayError::Io{path: "<stdout>".to_string(), source: e})?;
    }
    Ok(())
}

fn command_stats(engine: &Engine) {
    let index = engine.get_index();
    println!("index of {} documents loaded", index.doc_count());
    println!("{} distinct terms", index.term_count());
}
