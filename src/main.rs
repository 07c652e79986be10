use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use reelvec::ingest;
use reelvec::prelude::*;

/// Platform CSVs picked up from the csv directory, in "all" order.
const PLATFORM_FILES: [(&str, &str); 4] = [
    ("amazon", "amazon_prime_titles.csv"),
    ("netflix", "netflix_titles.csv"),
    ("hulu", "hulu_titles.csv"),
    ("disney", "disney_plus_titles.csv"),
];

/// Movie catalogue similarity search and recommendations
#[derive(Parser, Debug)]
#[command(name = "reelvec")]
#[command(about = "Embed movie catalogues and recommend similar titles", long_about = None)]
struct Args {
    /// Path to the artifact directory
    #[arg(short, long, default_value = "./data")]
    data_dir: PathBuf,

    /// Directory holding the platform title CSVs
    #[arg(short, long, default_value = ".")]
    csv_dir: PathBuf,

    /// Embedding service address
    #[arg(long, default_value = "http://localhost:11434")]
    embed_host: String,

    /// Embedding model identifier
    #[arg(long, default_value = "nomic-embed-text")]
    embed_model: String,

    /// Dataset to query: a platform name or "all"
    #[arg(short, long, default_value = "netflix")]
    platform: String,

    /// Query text or an exact catalogue title; omit to only build the index
    #[arg(short, long)]
    query: Option<String>,

    /// Number of recommendations
    #[arg(short, long, default_value_t = 5)]
    k: usize,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting reelvec v{}", env!("CARGO_PKG_VERSION"));
    info!("Data directory: {:?}", args.data_dir);
    info!("Embedding service: {} ({})", args.embed_host, args.embed_model);

    let encoder = Arc::new(OllamaEncoder::new(EncoderConfig {
        host: args.embed_host.clone(),
        model: args.embed_model.clone(),
        ..EncoderConfig::default()
    })?);
    let store = Arc::new(IndexStore::new(&args.data_dir, encoder)?);

    let mut platforms = Vec::new();
    for (name, file) in PLATFORM_FILES {
        let path = args.csv_dir.join(file);
        if !path.exists() {
            warn!("{} not found, skipping platform {:?}", path.display(), name);
            continue;
        }
        let catalogue = ingest::load_platform_csv(&path)?;
        info!("{}: {} titles", name, catalogue.len());
        platforms.push((name, catalogue));
    }
    let all = ingest::combine(platforms.iter().map(|(_, c)| c));
    for (name, catalogue) in platforms {
        store.register(name, catalogue);
    }
    if !all.is_empty() {
        store.register("all", all);
    }

    let recommender = Recommender::new(store);

    match args.query {
        Some(query) => {
            let results = recommender.recommend(&args.platform, &query, args.k)?;
            if results.is_empty() {
                println!("No recommendations for {query:?} in {:?}", args.platform);
            }
            for hit in results {
                println!("{:.3}  {}", hit.score, hit.title());
                let record = &hit.record;
                if !record.genre.is_empty() {
                    println!("       genre: {}", record.genre);
                }
                if !record.plot.is_empty() {
                    println!("       {}", record.plot);
                }
            }
        }
        None => {
            let built = recommender.ensure_index(&args.platform)?;
            info!(
                "dataset {:?} ready ({})",
                args.platform,
                if built { "built" } else { "reused" }
            );
        }
    }

    Ok(())
}
