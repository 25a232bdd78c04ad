//! CSV ingestion for MovieLens-style datasets.
//!
//! `movies.csv` carries `movieId,title[,genres]`; rating files carry
//! `userId,movieId,rating[,timestamp]`, both with a header row. Ratings that
//! reference a movie missing from the catalog are a data defect and fail the
//! load rather than being dropped silently.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::models::{Movie, MovieCatalog, MovieId, RatingEvent, RatingTable, UserId};

/// Error types for dataset loading
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Rating references movie {movie} which is not in the catalog")]
    UnknownMovie { movie: MovieId },
}

#[derive(Debug, Deserialize)]
struct MovieRecord {
    #[serde(rename = "movieId")]
    movie_id: u32,
    title: String,
}

#[derive(Debug, Deserialize)]
struct RatingRecord {
    #[serde(rename = "userId")]
    user_id: u32,
    #[serde(rename = "movieId")]
    movie_id: u32,
    rating: f64,
}

/// Loads the movie catalog from `movies.csv`
pub fn load_movies(path: impl AsRef<Path>) -> Result<MovieCatalog, DatasetError> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut catalog = MovieCatalog::new();
    for record in reader.deserialize() {
        let record: MovieRecord = record?;
        catalog.insert(Movie::new(MovieId(record.movie_id), record.title));
    }
    Ok(catalog)
}

/// Loads a training ratings file into a [`RatingTable`].
///
/// Every catalog movie is seeded into the table, rated or not, so that
/// identifier validation downstream can tell an unrated movie apart from an
/// unknown one.
pub fn load_ratings(
    path: impl AsRef<Path>,
    catalog: &MovieCatalog,
) -> Result<RatingTable, DatasetError> {
    let mut table = RatingTable::new();
    for movie in catalog.iter() {
        table.add_movie(movie.id);
    }
    for event in read_rating_events(path, catalog)? {
        table.insert(event.user, event.movie, event.rating);
    }
    Ok(table)
}

/// Loads a held-out ratings file as test cases for offline evaluation
pub fn load_rating_events(
    path: impl AsRef<Path>,
    catalog: &MovieCatalog,
) -> Result<Vec<RatingEvent>, DatasetError> {
    read_rating_events(path, catalog)
}

fn read_rating_events(
    path: impl AsRef<Path>,
    catalog: &MovieCatalog,
) -> Result<Vec<RatingEvent>, DatasetError> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut events = Vec::new();
    for record in reader.deserialize() {
        let record: RatingRecord = record?;
        let movie = MovieId(record.movie_id);
        if !catalog.contains(movie) {
            return Err(DatasetError::UnknownMovie { movie });
        }
        events.push(RatingEvent {
            user: UserId(record.user_id),
            movie,
            rating: record.rating,
        });
    }
    Ok(events)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(name: &str, contents: &str) -> std::path::PathBuf {
        let mut path = std::env::temp_dir();
        path.push(format!("cinematch-{}-{}", std::process::id(), name));
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_load_movies() {
        let path = write_temp(
            "movies.csv",
            "movieId,title,genres\n\
             1,Toy Story (1995),Animation\n\
             2,Jumanji (1995),Adventure\n",
        );

        let catalog = load_movies(&path).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.title(MovieId(2)), "Jumanji (1995)");

        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_load_ratings_builds_table_and_seeds_catalog() {
        let movies = write_temp(
            "seed-movies.csv",
            "movieId,title\n1,Toy Story (1995)\n2,Jumanji (1995)\n3,Sabrina (1995)\n",
        );
        let ratings = write_temp(
            "seed-ratings.csv",
            "userId,movieId,rating,timestamp\n\
             1,1,4.0,964982703\n\
             1,2,3.5,964982931\n\
             2,1,5.0,964982400\n",
        );

        let catalog = load_movies(&movies).unwrap();
        let table = load_ratings(&ratings, &catalog).unwrap();

        assert_eq!(table.rating_count(), 3);
        assert_eq!(table.rating(UserId(1), MovieId(2)), Some(3.5));
        // Movie 3 has no ratings but is still known
        assert!(table.knows_movie(MovieId(3)));

        std::fs::remove_file(movies).ok();
        std::fs::remove_file(ratings).ok();
    }

    #[test]
    fn test_rating_for_uncataloged_movie_fails() {
        let movies = write_temp("strict-movies.csv", "movieId,title\n1,Toy Story (1995)\n");
        let ratings = write_temp(
            "strict-ratings.csv",
            "userId,movieId,rating\n1,1,4.0\n1,77,3.0\n",
        );

        let catalog = load_movies(&movies).unwrap();
        let err = load_ratings(&ratings, &catalog).unwrap_err();
        assert!(matches!(
            err,
            DatasetError::UnknownMovie {
                movie: MovieId(77)
            }
        ));

        std::fs::remove_file(movies).ok();
        std::fs::remove_file(ratings).ok();
    }

    #[test]
    fn test_load_rating_events_keeps_order() {
        let movies = write_temp(
            "events-movies.csv",
            "movieId,title\n1,Toy Story (1995)\n2,Jumanji (1995)\n",
        );
        let ratings = write_temp(
            "events-ratings.csv",
            "userId,movieId,rating\n5,2,2.5\n6,1,4.5\n",
        );

        let catalog = load_movies(&movies).unwrap();
        let events = load_rating_events(&ratings, &catalog).unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].user, UserId(5));
        assert_eq!(events[0].rating, 2.5);
        assert_eq!(events[1].movie, MovieId(1));

        std::fs::remove_file(movies).ok();
        std::fs::remove_file(ratings).ok();
    }
}
