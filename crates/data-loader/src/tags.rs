//! Tag composition: the single text blob that represents a movie.
//!
//! The field order is fixed (overview, genres, keywords, cast, directors).
//! Vector columns are only comparable across movies if every blob is
//! composed the same way, so this is the one place that decides it.

/// Compose the tag blob for one movie.
///
/// Each section is space-joined and the sections are separated by a single
/// space, even when a section is empty.
pub fn compose_tags(
    overview: &str,
    genres: &[String],
    keywords: &[String],
    cast: &[String],
    directors: &[String],
) -> String {
    let sections = [
        overview.to_string(),
        genres.join(" "),
        keywords.join(" "),
        cast.join(" "),
        directors.join(" "),
    ];
    sections.join(" ")
}
