use std::sync::Arc;
use tracing::{info, warn};

use crate::domain::errors::{TheaterError, TheaterResult};
use crate::domain::events::{EventPublisher, TheaterEvent};
use crate::domain::models::Movie;
use crate::storage::{MovieRepository, MovieStorage};

/// Service for the movie catalog
#[derive(Clone)]
pub struct MovieService {
    movie_repository: MovieRepository,
    events: EventPublisher,
}

impl MovieService {
    pub fn new(movie_repository: MovieRepository, events: EventPublisher) -> Self {
        Self {
            movie_repository,
            events,
        }
    }

    /// Append a movie to the catalog. Duplicates are not detected here.
    pub fn add_movie(&self, movie: Movie) -> Arc<Movie> {
        info!("Adding movie: {} ({})", movie.title(), movie.year());

        let movie = Arc::new(movie);
        self.movie_repository.store_movie(movie.clone());
        self.events.publish(TheaterEvent::MovieAdded {
            movie_id: movie.id().to_string(),
        });

        movie
    }

    /// Remove a movie by id. Returns false, without error, if it was not in the catalog.
    pub fn remove_movie(&self, movie_id: &str) -> bool {
        info!("Removing movie: {}", movie_id);

        let removed = self.movie_repository.delete_movie(movie_id);
        if removed {
            self.events.publish(TheaterEvent::MovieRemoved {
                movie_id: movie_id.to_string(),
            });
        } else {
            warn!("Movie not found: {}", movie_id);
        }

        removed
    }

    /// Catalog in insertion order
    pub fn get_movies(&self) -> Vec<Arc<Movie>> {
        self.movie_repository.list_movies()
    }

    pub fn get_movie(&self, movie_id: &str) -> Option<Arc<Movie>> {
        self.movie_repository.get_movie(movie_id)
    }

    /// Bulk replace the catalog, used to seed sample data
    pub fn set_movies(&self, movies: Vec<Movie>) {
        info!("Replacing movie catalog with {} movies", movies.len());

        self.movie_repository
            .replace_all_movies(movies.into_iter().map(Arc::new).collect());
        self.events.publish(TheaterEvent::MoviesReplaced);
    }

    /// Swap an edited movie in for an existing one, keeping its catalog position.
    ///
    /// Screenings already scheduled keep the movie they were created with.
    pub fn replace_movie(&self, movie_id: &str, movie: Movie) -> TheaterResult<Arc<Movie>> {
        info!("Replacing movie {} with {}", movie_id, movie.title());

        let movie = Arc::new(movie);
        if !self.movie_repository.replace_movie(movie_id, movie.clone()) {
            warn!("Movie not found: {}", movie_id);
            return Err(TheaterError::NotFound {
                entity: "Movie",
                id: movie_id.to_string(),
            });
        }

        self.events.publish(TheaterEvent::MovieReplaced {
            movie_id: movie_id.to_string(),
        });

        Ok(movie)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup_test() -> (MovieService, EventPublisher) {
        let events = EventPublisher::new(16);
        (MovieService::new(MovieRepository::new(), events.clone()), events)
    }

    fn movie(title: &str) -> Movie {
        Movie::new("Drama", title, "Director", 1994, "Description", 142).expect("valid movie")
    }

    #[test]
    fn test_add_movie() {
        let (service, events) = setup_test();
        let mut rx = events.subscribe();

        let added = service.add_movie(movie("The Shawshank Redemption"));

        let movies = service.get_movies();
        assert_eq!(movies.len(), 1);
        assert_eq!(movies[0].title(), "The Shawshank Redemption");
        assert_eq!(
            rx.try_recv().ok(),
            Some(TheaterEvent::MovieAdded { movie_id: added.id().to_string() })
        );
    }

    #[test]
    fn test_duplicates_are_allowed() {
        let (service, _) = setup_test();

        service.add_movie(movie("Heat"));
        service.add_movie(movie("Heat"));

        assert_eq!(service.get_movies().len(), 2);
    }

    #[test]
    fn test_remove_movie() {
        let (service, _) = setup_test();
        let first = service.add_movie(movie("Alien"));
        service.add_movie(movie("Aliens"));

        assert!(service.remove_movie(first.id()));

        let titles: Vec<String> = service.get_movies().iter().map(|m| m.title().to_string()).collect();
        assert_eq!(titles, vec!["Aliens"]);
    }

    #[test]
    fn test_remove_missing_movie_is_noop() {
        let (service, events) = setup_test();
        service.add_movie(movie("Alien"));
        let mut rx = events.subscribe();

        assert!(!service.remove_movie("movie::missing"));
        assert_eq!(service.get_movies().len(), 1);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_set_movies() {
        let (service, _) = setup_test();
        service.add_movie(movie("Old"));

        service.set_movies(vec![movie("New 1"), movie("New 2")]);

        let titles: Vec<String> = service.get_movies().iter().map(|m| m.title().to_string()).collect();
        assert_eq!(titles, vec!["New 1", "New 2"]);
    }

    #[test]
    fn test_replace_movie() {
        let (service, _) = setup_test();
        let original = service.add_movie(movie("Original"));
        service.add_movie(movie("Other"));

        let updated = service
            .replace_movie(original.id(), movie("Edited"))
            .expect("movie exists");

        assert_eq!(service.get_movies()[0].title(), "Edited");
        assert_eq!(service.get_movie(updated.id()).map(|m| m.title().to_string()), Some("Edited".to_string()));
        assert!(service.get_movie(original.id()).is_none());
    }

    #[test]
    fn test_replace_missing_movie() {
        let (service, _) = setup_test();

        let result = service.replace_movie("movie::missing", movie("Edited"));
        assert!(matches!(result, Err(TheaterError::NotFound { entity: "Movie", .. })));
        assert!(service.get_movies().is_empty());
    }
}
