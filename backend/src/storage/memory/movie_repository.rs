use std::sync::{Arc, RwLock};
use tracing::debug;

use super::{read, write};
use crate::domain::models::Movie;
use crate::storage::traits::MovieStorage;

/// Movie catalog held in memory
#[derive(Clone, Default)]
pub struct MovieRepository {
    movies: Arc<RwLock<Vec<Arc<Movie>>>>,
}

impl MovieRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MovieStorage for MovieRepository {
    fn store_movie(&self, movie: Arc<Movie>) {
        debug!("Storing movie {}", movie.id());
        write(&self.movies).push(movie);
    }

    fn get_movie(&self, movie_id: &str) -> Option<Arc<Movie>> {
        read(&self.movies).iter().find(|m| m.id() == movie_id).cloned()
    }

    fn list_movies(&self) -> Vec<Arc<Movie>> {
        read(&self.movies).clone()
    }

    fn replace_movie(&self, movie_id: &str, movie: Arc<Movie>) -> bool {
        let mut movies = write(&self.movies);
        match movies.iter_mut().find(|m| m.id() == movie_id) {
            Some(slot) => {
                *slot = movie;
                true
            }
            None => false,
        }
    }

    fn delete_movie(&self, movie_id: &str) -> bool {
        let mut movies = write(&self.movies);
        match movies.iter().position(|m| m.id() == movie_id) {
            Some(index) => {
                movies.remove(index);
                true
            }
            None => false,
        }
    }

    fn replace_all_movies(&self, movies: Vec<Arc<Movie>>) {
        *write(&self.movies) = movies;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(title: &str) -> Arc<Movie> {
        Arc::new(Movie::new("Drama", title, "Director", 1999, "Description", 120).expect("valid movie"))
    }

    #[test]
    fn test_store_and_list_in_order() {
        let repo = MovieRepository::new();
        repo.store_movie(movie("First"));
        repo.store_movie(movie("Second"));

        let titles: Vec<String> = repo.list_movies().iter().map(|m| m.title().to_string()).collect();
        assert_eq!(titles, vec!["First", "Second"]);
    }

    #[test]
    fn test_clones_share_registry() {
        let repo = MovieRepository::new();
        let other = repo.clone();
        let stored = movie("Shared");
        repo.store_movie(stored.clone());

        assert_eq!(other.get_movie(stored.id()).map(|m| m.title().to_string()), Some("Shared".to_string()));
    }

    #[test]
    fn test_delete_by_id_only() {
        let repo = MovieRepository::new();
        let kept = movie("Same");
        let removed = movie("Same");
        repo.store_movie(kept.clone());
        repo.store_movie(removed.clone());

        assert!(repo.delete_movie(removed.id()));
        assert!(!repo.delete_movie(removed.id()));

        let remaining = repo.list_movies();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id(), kept.id());
    }

    #[test]
    fn test_replace_movie_keeps_position() {
        let repo = MovieRepository::new();
        let first = movie("First");
        repo.store_movie(first.clone());
        repo.store_movie(movie("Second"));

        assert!(repo.replace_movie(first.id(), movie("Updated")));
        assert_eq!(repo.list_movies()[0].title(), "Updated");
        assert!(!repo.replace_movie("movie::missing", movie("Nope")));
    }
}
