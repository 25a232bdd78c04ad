use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::{MovieId, UserId};

/// A single observed rating, as read from a ratings file.
///
/// Used both for building the training table and as a test-set case where
/// `rating` is the ground truth a prediction is compared against.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct RatingEvent {
    pub user: UserId,
    pub movie: MovieId,
    pub rating: f64,
}

/// Sparse table of user-movie ratings.
///
/// "Unrated" is structural absence: there is no sentinel value, so means and
/// variances computed over a movie's column are never biased by missing
/// entries. The table is kept in both orientations so that enumerating a
/// user's rated movies and enumerating a movie's raters are both single
/// lookups.
///
/// The table is immutable once loaded; every query below is a read.
#[derive(Debug, Clone, Default)]
pub struct RatingTable {
    by_user: HashMap<UserId, HashMap<MovieId, f64>>,
    by_movie: HashMap<MovieId, HashMap<UserId, f64>>,
    ratings: usize,
}

impl RatingTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a movie with no ratings yet.
    ///
    /// Lets identifier validation distinguish a catalog movie nobody has
    /// rated from an identifier that is not in the dataset at all.
    pub fn add_movie(&mut self, movie: MovieId) {
        self.by_movie.entry(movie).or_default();
    }

    pub fn insert(&mut self, user: UserId, movie: MovieId, rating: f64) {
        let prev = self.by_user.entry(user).or_default().insert(movie, rating);
        self.by_movie.entry(movie).or_default().insert(user, rating);
        if prev.is_none() {
            self.ratings += 1;
        }
    }

    pub fn rated(&self, user: UserId, movie: MovieId) -> bool {
        self.by_user
            .get(&user)
            .is_some_and(|ratings| ratings.contains_key(&movie))
    }

    pub fn rating(&self, user: UserId, movie: MovieId) -> Option<f64> {
        self.by_user.get(&user)?.get(&movie).copied()
    }

    /// All ratings the user has given, keyed by movie
    pub fn movies_rated_by(&self, user: UserId) -> Option<&HashMap<MovieId, f64>> {
        self.by_user.get(&user)
    }

    /// The movie's rating column: all ratings it has received, keyed by user
    pub fn ratings_for(&self, movie: MovieId) -> Option<&HashMap<UserId, f64>> {
        self.by_movie.get(&movie)
    }

    pub fn knows_user(&self, user: UserId) -> bool {
        self.by_user.contains_key(&user)
    }

    pub fn knows_movie(&self, movie: MovieId) -> bool {
        self.by_movie.contains_key(&movie)
    }

    pub fn user_count(&self) -> usize {
        self.by_user.len()
    }

    pub fn movie_count(&self) -> usize {
        self.by_movie.len()
    }

    pub fn rating_count(&self) -> usize {
        self.ratings
    }
}

impl FromIterator<RatingEvent> for RatingTable {
    fn from_iter<T: IntoIterator<Item = RatingEvent>>(iter: T) -> Self {
        let mut table = Self::new();
        for event in iter {
            table.insert(event.user, event.movie, event.rating);
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absence_is_not_zero() {
        let mut table = RatingTable::new();
        table.insert(UserId(1), MovieId(10), 4.0);

        assert!(table.rated(UserId(1), MovieId(10)));
        assert!(!table.rated(UserId(1), MovieId(11)));
        assert_eq!(table.rating(UserId(1), MovieId(11)), None);
        assert_eq!(table.rating(UserId(2), MovieId(10)), None);
    }

    #[test]
    fn test_both_orientations_agree() {
        let mut table = RatingTable::new();
        table.insert(UserId(1), MovieId(10), 4.0);
        table.insert(UserId(2), MovieId(10), 3.5);
        table.insert(UserId(1), MovieId(11), 2.0);

        let rated = table.movies_rated_by(UserId(1)).unwrap();
        assert_eq!(rated.len(), 2);
        assert_eq!(rated[&MovieId(10)], 4.0);

        let column = table.ratings_for(MovieId(10)).unwrap();
        assert_eq!(column.len(), 2);
        assert_eq!(column[&UserId(2)], 3.5);

        assert_eq!(table.user_count(), 2);
        assert_eq!(table.movie_count(), 2);
        assert_eq!(table.rating_count(), 3);
    }

    #[test]
    fn test_reinsert_overwrites() {
        let mut table = RatingTable::new();
        table.insert(UserId(1), MovieId(10), 4.0);
        table.insert(UserId(1), MovieId(10), 2.0);

        assert_eq!(table.rating(UserId(1), MovieId(10)), Some(2.0));
        assert_eq!(table.rating_count(), 1);
    }

    #[test]
    fn test_unrated_movie_is_known() {
        let mut table = RatingTable::new();
        table.add_movie(MovieId(99));

        assert!(table.knows_movie(MovieId(99)));
        assert!(table.ratings_for(MovieId(99)).unwrap().is_empty());
        assert!(!table.knows_movie(MovieId(100)));
    }
}
