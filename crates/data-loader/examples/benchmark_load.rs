use data_loader::{DatasetPaths, load_records};
use std::path::Path;
use std::time::Instant;

fn main() {
    let paths = DatasetPaths {
        movies: Path::new("data/tmdb_5000_movies.csv"),
        credits: Path::new("data/tmdb_5000_credits.csv"),
    };

    println!("Loading TMDB 5000 dataset...\n");

    let start = Instant::now();
    let records = load_records(paths).expect("Failed to load dataset");
    let elapsed = start.elapsed();

    let with_directors = records.iter().filter(|m| !m.directors.is_empty()).count();
    let with_year = records.iter().filter(|m| m.year != 0).count();

    println!("\n=== Load Complete ===");
    println!("Time taken: {:?}", elapsed);
    println!("Movies: {}", records.len());
    println!("With a director: {}", with_directors);
    println!("With a release year: {}", with_year);
    println!("\nPerformance: {:.0} movies/second",
             records.len() as f64 / elapsed.as_secs_f64());
}
