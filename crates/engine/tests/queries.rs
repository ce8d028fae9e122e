//! End-to-end tests for the four query types.
//!
//! The corpus is small and hand-built so expected rankings can be reasoned
//! about directly.

use std::collections::HashSet;
use std::io::Write;
use std::path::Path;
use std::sync::Arc;

use data_loader::{DatasetPaths, MovieRecord};
use engine::{EngineConfig, QueryFilters, Recommendation, RecommendationEngine};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn movie(
    id: u32,
    title: &str,
    overview: &str,
    genres: &[&str],
    cast: &[&str],
    director: &str,
    year: u16,
) -> MovieRecord {
    MovieRecord::builder(id, title)
        .overview(overview)
        .genres(genres.iter().copied())
        .cast(cast.iter().copied())
        .directors([director])
        .year(year)
        .language(Some("en".to_string()))
        .build()
}

fn corpus() -> Vec<MovieRecord> {
    vec![
        movie(1, "Inception", "A thief enters dreams to plant an idea.", &["Action", "Science Fiction"], &["Leonardo DiCaprio", "Tom Hardy"], "Christopher Nolan", 2010),
        movie(2, "Dream Raid", "A thief team raids dreams.", &["Action"], &["Tom Hardy"], "Ann Lee", 2012),
        movie(3, "Dream Diary", "A girl writes down dreams.", &["Drama"], &["Emma Stone"], "Ann Lee", 2005),
        movie(4, "Idea Thief", "A thief steals an idea from a lab.", &["Action", "Thriller"], &["Leonardo DiCaprio"], "Bo Kim", 1999),
        movie(5, "Interstellar", "Astronauts travel through a wormhole.", &["Science Fiction", "Drama"], &["Matthew McConaughey"], "Christopher Nolan", 2014),
        movie(6, "Heist Night", "A thief plans one last heist.", &["Action", "Crime"], &["Tom Hardy"], "Cy Park", 2001),
        movie(7, "Award Season", "An actress chases an award.", &["Comedy"], &["Emma Stone"], "Di Wu", 2016),
        movie(8, "Plant Life", "A botanist talks to plants.", &["Documentary"], &[], "Ed Roe", 2008),
        movie(9, "Dream Cops", "Police enter dreams of a thief.", &["Action", "Crime"], &["Idris Elba"], "Fay Orr", 2018),
        movie(10, "Sleepwalk", "Dreams of a thief who sleepwalks.", &["Action"], &["Tom Hardy"], "Gus Ho", 2020),
        movie(11, "Dreamless Thief", "A thief who cannot dream.", &["Action", "Drama"], &["Tom Hardy"], "Hal Ng", 2003),
    ]
}

fn engine() -> RecommendationEngine {
    RecommendationEngine::build(corpus(), EngineConfig::default()).unwrap()
}

fn titles(results: &[Recommendation]) -> Vec<&str> {
    results.iter().map(|r| r.title.as_str()).collect()
}

#[test]
fn test_recommend_with_genre_filter() {
    let engine = engine();
    let seed = engine.find_title("Inception").unwrap();

    let results = engine.recommend("Inception", &QueryFilters::none().with_genres(["Action"]));

    assert!(!results.is_empty());
    assert!(results.len() <= 5);
    let mut previous = f32::INFINITY;
    for rec in &results {
        assert_ne!(rec.title, "Inception");
        let index = engine.find_title(&rec.title).unwrap();
        assert!(engine.get(index).unwrap().has_genre("Action"));
        let score = engine.similarity().get(seed, index);
        assert!(score <= previous);
        previous = score;
    }
}

#[test]
fn test_recommend_never_returns_seed_and_caps_at_five() {
    let engine = engine();
    for title in engine.all_titles() {
        let results = engine.recommend(&title, &QueryFilters::none());
        assert!(results.len() <= 5);
        assert!(results.iter().all(|r| r.title != title));
    }
    // eleven movies, no filters: always a full page
    assert_eq!(engine.recommend("Inception", &QueryFilters::none()).len(), 5);
}

#[test]
fn test_recommend_output_bounded_by_filtered_pool() {
    let engine = engine();
    let filters = QueryFilters::none().with_genres(["Comedy"]);
    let pool = filters.pipeline().apply(engine.neighbours("Inception"), engine.movies());

    let results = engine.recommend("Inception", &filters);
    assert_eq!(results.len(), pool.len().min(5));
    assert_eq!(titles(&results), vec!["Award Season"]);
}

#[test]
fn test_recommend_year_and_language_filters() {
    let engine = engine();
    let filters = QueryFilters::none().with_years(Some(2000), Some(2012));
    for rec in engine.recommend("Inception", &filters) {
        let movie = engine.get(engine.find_title(&rec.title).unwrap()).unwrap();
        assert!((2000..=2012).contains(&movie.year));
    }

    let foreign = QueryFilters::none().with_languages(["ko"]);
    assert!(engine.recommend("Inception", &foreign).is_empty());
}

#[test]
fn test_recommend_unknown_title_is_empty() {
    let engine = engine();
    assert!(engine.recommend("inception", &QueryFilters::none()).is_empty());
    assert!(engine.recommend("", &QueryFilters::none()).is_empty());
}

#[test]
fn test_duplicate_titles_use_first_match() {
    let mut movies = corpus();
    movies.push(movie(12, "Inception", "Gardening tips for tomatoes.", &["Documentary"], &[], "Ed Roe", 2011));
    let engine = RecommendationEngine::build(movies, EngineConfig::default()).unwrap();

    assert_eq!(engine.find_title("Inception"), Some(0));
    let results = engine.recommend("Inception", &QueryFilters::none());
    assert!(results.iter().all(|r| r.title != "Inception"));
    assert_eq!(
        engine.all_titles().iter().filter(|t| *t == "Inception").count(),
        1
    );
}

#[test]
fn test_zero_vector_seed_still_excluded() {
    let mut movies = corpus();
    movies.push(MovieRecord::builder(13, "Blank").build());
    let engine = RecommendationEngine::build(movies, EngineConfig::default()).unwrap();

    let blank = engine.find_title("Blank").unwrap();
    assert!(engine.vector(blank).unwrap().is_zero());
    assert_eq!(engine.similarity().get(blank, blank), 0.0);

    // every score is zero, so neighbours come back in corpus order
    let results = engine.recommend("Blank", &QueryFilters::none());
    assert_eq!(
        titles(&results),
        vec!["Inception", "Dream Raid", "Dream Diary", "Idea Thief", "Interstellar"]
    );
}

#[test]
fn test_similarity_matrix_is_symmetric_with_unit_diagonal() {
    let engine = engine();
    let matrix = engine.similarity();
    for i in 0..matrix.len() {
        assert_eq!(matrix.get(i, i), 1.0);
        for j in 0..matrix.len() {
            assert_eq!(matrix.get(i, j), matrix.get(j, i));
        }
    }
}

#[test]
fn test_surprise_me_samples_within_genre() {
    let engine = engine();
    let mut rng = StdRng::seed_from_u64(42);

    let picks = engine.surprise_me_with("Action", &mut rng);
    assert_eq!(picks.len(), 5);
    let distinct: HashSet<&str> = picks.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(distinct.len(), 5);
    for pick in &picks {
        let movie = engine.get(engine.find_title(&pick.title).unwrap()).unwrap();
        assert!(movie.has_genre("Action"));
    }

    // only three Drama movies exist
    assert_eq!(engine.surprise_me_with("Drama", &mut rng).len(), 3);
    assert!(engine.surprise_me("Horror").is_empty());
}

#[test]
fn test_search_by_person() {
    let engine = engine();

    let hardy = engine.search_by_person("Tom Hardy");
    assert_eq!(
        titles(&hardy),
        vec!["Inception", "Dream Raid", "Heist Night", "Sleepwalk", "Dreamless Thief"]
    );

    let nolan = engine.search_by_person("Christopher Nolan");
    assert_eq!(titles(&nolan), vec!["Inception", "Interstellar"]);
    assert_eq!(nolan[0].director, "Christopher Nolan");

    assert!(engine.search_by_person("Tom").is_empty());
}

#[test]
fn test_mood_matching() {
    let engine = engine();

    assert!(engine.recommend_by_mood("").is_empty());
    assert!(engine.recommend_by_mood("the and of").is_empty());

    // case-insensitive substring scan in corpus order
    let plants = engine.recommend_by_mood("PLANT");
    assert_eq!(titles(&plants), vec!["Inception", "Plant Life"]);

    // "war" only appears inside "award"
    let war = engine.recommend_by_mood("war");
    assert_eq!(titles(&war), vec!["Award Season"]);
}

#[test]
fn test_mood_matching_limit() {
    let engine = engine();
    let thieves = engine.recommend_by_mood("thief dream");
    assert_eq!(thieves.len(), 8);

    let config = EngineConfig {
        mood_limit: 3,
        ..EngineConfig::default()
    };
    let limited = RecommendationEngine::build(corpus(), config).unwrap();
    assert_eq!(
        titles(&limited.recommend_by_mood("thief dream")),
        vec!["Inception", "Dream Raid", "Dream Diary"]
    );
}

#[test]
fn test_accessors_are_sorted_and_deduplicated() {
    let engine = engine();
    let genres = engine.all_genres();
    assert_eq!(
        genres,
        vec!["Action", "Comedy", "Crime", "Documentary", "Drama", "Science Fiction", "Thriller"]
    );
    let titles = engine.all_titles();
    let mut sorted = titles.clone();
    sorted.sort();
    assert_eq!(titles, sorted);
    assert_eq!(titles.len(), 11);
}

#[test]
fn test_rebuilding_is_deterministic() {
    let a = engine();
    let b = engine();
    assert_eq!(a.vocabulary(), b.vocabulary());
    assert_eq!(a.similarity(), b.similarity());
    assert_eq!(
        a.recommend("Inception", &QueryFilters::none()),
        b.recommend("Inception", &QueryFilters::none())
    );
}

#[test]
fn test_concurrent_queries_share_one_engine() {
    let engine = Arc::new(engine());
    let expected = engine.recommend("Inception", &QueryFilters::none());

    std::thread::scope(|scope| {
        for _ in 0..4 {
            let engine = Arc::clone(&engine);
            let expected = expected.clone();
            scope.spawn(move || {
                assert_eq!(engine.recommend("Inception", &QueryFilters::none()), expected);
            });
        }
    });
}

#[test]
fn test_load_from_csv_files() {
    let mut movies = tempfile::NamedTempFile::new().unwrap();
    writeln!(movies, "id,title,overview,genres,keywords,release_date,original_language").unwrap();
    writeln!(movies, r#"1,Alpha,Robots build a city.,"[{{""id"": 1, ""name"": ""Action""}}]",[],2001-02-03,en"#).unwrap();
    writeln!(movies, r#"2,Beta,Robots build a farm.,"[{{""id"": 1, ""name"": ""Action""}}]",[],2002-02-03,en"#).unwrap();
    writeln!(movies, r#"3,Gamma,A quiet lake.,"[{{""id"": 2, ""name"": ""Drama""}}]",broken,,fr"#).unwrap();

    let mut credits = tempfile::NamedTempFile::new().unwrap();
    writeln!(credits, "movie_id,title,cast,crew").unwrap();
    for title in ["Alpha", "Beta", "Gamma"] {
        writeln!(
            credits,
            r#"0,{title},[],"[{{""name"": ""Dir {title}"", ""job"": ""Director""}}]""#
        )
        .unwrap();
    }

    let engine = RecommendationEngine::load(
        DatasetPaths {
            movies: movies.path(),
            credits: credits.path(),
        },
        EngineConfig::default(),
    )
    .unwrap();

    assert_eq!(engine.len(), 3);
    let results = engine.recommend("Alpha", &QueryFilters::none());
    assert_eq!(results[0], Recommendation {
        title: "Beta".to_string(),
        director: "Dir Beta".to_string(),
    });
    assert_eq!(engine.get(2).unwrap().year, 0);
}

#[test]
fn test_missing_dataset_is_fatal() {
    let err = RecommendationEngine::load(
        DatasetPaths {
            movies: Path::new("missing/movies.csv"),
            credits: Path::new("missing/credits.csv"),
        },
        EngineConfig::default(),
    )
    .unwrap_err();
    assert!(format!("{err:#}").contains("Failed to open file"));
}
