use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use data_loader::{DatasetPaths, Year};
use engine::{EngineConfig, QueryFilters, Recommendation, RecommendationEngine};
use rand::seq::IndexedRandom;
use rayon::prelude::*;
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// MovieRecs - Content-based movie recommendation engine
#[derive(Parser)]
#[command(name = "movie-recs")]
#[command(about = "Movie recommendations from plot, genres, keywords, cast and crew", long_about = None)]
struct Cli {
    /// Path to tmdb_5000_movies.csv
    #[arg(long, global = true, default_value = "data/tmdb_5000_movies.csv")]
    movies: PathBuf,

    /// Path to tmdb_5000_credits.csv
    #[arg(long, global = true, default_value = "data/tmdb_5000_credits.csv")]
    credits: PathBuf,

    /// Optional JSON file overriding engine settings
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print results as JSON instead of a list
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Recommend movies similar to a title
    Recommend {
        /// Exact title of the seed movie
        #[arg(long)]
        title: String,

        /// Keep only movies with one of these genres (repeatable)
        #[arg(long = "genre")]
        genres: Vec<String>,

        /// Earliest release year (inclusive)
        #[arg(long)]
        year_from: Option<Year>,

        /// Latest release year (inclusive)
        #[arg(long)]
        year_to: Option<Year>,

        /// Keep only movies in one of these original languages (repeatable)
        #[arg(long = "language")]
        languages: Vec<String>,

        /// Show the unfiltered neighbour pool with similarity scores
        #[arg(long)]
        explain: bool,
    },

    /// Pick random movies from a genre
    Surprise {
        #[arg(long)]
        genre: String,
    },

    /// Find movies featuring an actor or director (exact name)
    Person {
        #[arg(long)]
        name: String,
    },

    /// Find movies whose description matches free text
    Mood {
        #[arg(long)]
        text: String,
    },

    /// List every title
    Titles,

    /// List every genre
    Genres,

    /// Run benchmark to test query latency
    Benchmark {
        /// Number of recommend requests to make
        #[arg(long, default_value = "100")]
        requests: usize,
    },
}

fn main() -> Result<()> {
    // Initialize tracing; stdout is reserved for results
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => EngineConfig::from_file(path)?,
        None => EngineConfig::default(),
    };

    // Build the engine (this may take a moment)
    let start = Instant::now();
    let engine = RecommendationEngine::load(
        DatasetPaths {
            movies: &cli.movies,
            credits: &cli.credits,
        },
        config,
    )
    .context("Failed to start the recommendation engine")?;
    eprintln!(
        "{} Indexed {} movies in {:?}",
        "✓".green(),
        engine.len(),
        start.elapsed()
    );

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Recommend {
            title,
            genres,
            year_from,
            year_to,
            languages,
            explain,
        } => {
            let filters = QueryFilters::none()
                .with_genres(genres)
                .with_years(year_from, year_to)
                .with_languages(languages);
            handle_recommend(&engine, &title, &filters, explain, cli.json)?
        }
        Commands::Surprise { genre } => {
            let results = engine.surprise_me(&genre);
            print_results(&format!("Surprise picks from '{}'", genre), &results, cli.json)?;
        }
        Commands::Person { name } => {
            let results = engine.search_by_person(&name);
            print_results(&format!("Top movies for '{}'", name), &results, cli.json)?;
        }
        Commands::Mood { text } => {
            let results = engine.recommend_by_mood(&text);
            print_results(&format!("Movies matching '{}'", text), &results, cli.json)?;
        }
        Commands::Titles => print_list(&engine.all_titles(), cli.json)?,
        Commands::Genres => print_list(&engine.all_genres(), cli.json)?,
        Commands::Benchmark { requests } => handle_benchmark(&engine, requests),
    }

    Ok(())
}

/// Handle the 'recommend' command
fn handle_recommend(
    engine: &RecommendationEngine,
    title: &str,
    filters: &QueryFilters,
    explain: bool,
    json: bool,
) -> Result<()> {
    let results = engine.recommend(title, filters);

    if explain && !json {
        println!("{}", format!("Nearest neighbours of '{}':", title).bold().blue());
        for candidate in engine.neighbours(title) {
            if let Some(movie) = engine.get(candidate.index) {
                println!(
                    "  {:.3}  {} ({}) [{}]",
                    candidate.score,
                    movie.title,
                    movie.year,
                    movie.genres.join(", ")
                );
            }
        }
    }

    print_results(&format!("Recommended for '{}'", title), &results, json)
}

/// Handle the 'benchmark' command
fn handle_benchmark(engine: &RecommendationEngine, requests: usize) {
    let titles = engine.all_titles();
    let mut rng = rand::rng();
    let picks: Vec<&String> = (0..requests)
        .filter_map(|_| titles.choose(&mut rng))
        .collect();
    if picks.is_empty() {
        println!("No titles to benchmark");
        return;
    }

    // The engine is read-only, so requests run in parallel against one instance
    let wall = Instant::now();
    let mut timings: Vec<Duration> = picks
        .par_iter()
        .map(|title| {
            let start = Instant::now();
            let _ = engine.recommend(title, &QueryFilters::none());
            start.elapsed()
        })
        .collect();
    let wall = wall.elapsed();

    let total_time: Duration = timings.iter().sum();
    let avg_latency = total_time / (timings.len() as u32);
    timings.sort();
    let p50 = timings[timings.len() / 2];
    let p95 = timings[((timings.len() as f32 * 0.95) as usize).min(timings.len() - 1)];
    let p99 = timings[((timings.len() as f32 * 0.99) as usize).min(timings.len() - 1)];
    let throughput = timings.len() as f32 / wall.as_secs_f32();

    println!("Benchmark results:");
    println!("Wall time: {:?}", wall);
    println!("Average latency: {:?}", avg_latency);
    println!("P50 latency: {:?}", p50);
    println!("P95 latency: {:?}", p95);
    println!("P99 latency: {:?}", p99);
    println!("Throughput: {:.2} requests/second", throughput);
}

/// Helper function to format and print recommendations
fn print_results(header: &str, results: &[Recommendation], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(results)?);
        return Ok(());
    }

    if results.is_empty() {
        println!("{}", "No movies found.".yellow());
        return Ok(());
    }

    println!("{}", format!("{}:", header).bold().blue());
    for (rank, rec) in results.iter().enumerate() {
        let director = if rec.director.is_empty() {
            "unknown".dimmed().to_string()
        } else {
            rec.director.clone()
        };
        println!(
            "{}. {} - Director(s): {}",
            (rank + 1).to_string().green(),
            rec.title.bold(),
            director
        );
    }
    Ok(())
}

fn print_list(items: &[String], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(items)?);
    } else {
        for item in items {
            println!("{}", item);
        }
    }
    Ok(())
}
