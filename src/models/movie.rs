use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::MovieId;

/// A movie from the catalog
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
}

impl Movie {
    pub fn new(id: MovieId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
        }
    }
}

/// The full set of movies known to the service, keyed by id
#[derive(Debug, Clone, Default)]
pub struct MovieCatalog {
    movies: HashMap<MovieId, Movie>,
}

impl MovieCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, movie: Movie) {
        self.movies.insert(movie.id, movie);
    }

    pub fn get(&self, id: MovieId) -> Option<&Movie> {
        self.movies.get(&id)
    }

    pub fn contains(&self, id: MovieId) -> bool {
        self.movies.contains_key(&id)
    }

    /// Title for a movie id, or a placeholder when the catalog has no entry
    pub fn title(&self, id: MovieId) -> &str {
        self.movies.get(&id).map(|m| m.title.as_str()).unwrap_or("<unknown>")
    }

    pub fn iter(&self) -> impl Iterator<Item = &Movie> {
        self.movies.values()
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }
}

impl FromIterator<Movie> for MovieCatalog {
    fn from_iter<T: IntoIterator<Item = Movie>>(iter: T) -> Self {
        let mut catalog = Self::new();
        for movie in iter {
            catalog.insert(movie);
        }
        catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_lookup() {
        let catalog: MovieCatalog = [
            Movie::new(MovieId(1), "Toy Story (1995)"),
            Movie::new(MovieId(318), "The Shawshank Redemption (1994)"),
        ]
        .into_iter()
        .collect();

        assert_eq!(catalog.len(), 2);
        assert!(catalog.contains(MovieId(318)));
        assert_eq!(catalog.title(MovieId(1)), "Toy Story (1995)");
        assert_eq!(catalog.title(MovieId(999)), "<unknown>");
        assert!(catalog.get(MovieId(999)).is_none());
    }
}
