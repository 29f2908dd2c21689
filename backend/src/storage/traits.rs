//! # Storage Traits
//!
//! Storage abstractions the domain services talk to. The only backend today is
//! the in-memory one in [`super::memory`]; data lives for the lifetime of the
//! process.

use std::sync::Arc;

use crate::domain::models::{Client, Movie, Screening, Showroom, Ticket};

/// Ordered registry of catalog movies
pub trait MovieStorage: Send + Sync {
    /// Append a movie at the end of the catalog
    fn store_movie(&self, movie: Arc<Movie>);

    fn get_movie(&self, movie_id: &str) -> Option<Arc<Movie>>;

    /// All movies in insertion order
    fn list_movies(&self) -> Vec<Arc<Movie>>;

    /// Replace the movie with `movie_id` in place.
    /// Returns false if no such movie exists.
    fn replace_movie(&self, movie_id: &str, movie: Arc<Movie>) -> bool;

    /// Returns true if a movie was removed
    fn delete_movie(&self, movie_id: &str) -> bool;

    fn replace_all_movies(&self, movies: Vec<Arc<Movie>>);
}

/// Ordered registry of showrooms, each owning its screenings
pub trait ShowroomStorage: Send + Sync {
    fn store_showroom(&self, showroom: Showroom);

    fn get_showroom(&self, showroom_id: &str) -> Option<Showroom>;

    /// All showrooms in insertion order
    fn list_showrooms(&self) -> Vec<Showroom>;

    /// Run `change` on a copy of the showroom while holding the write lock and
    /// store the copy only if `change` succeeds. The showroom keeps its
    /// position. Returns None if no such showroom exists.
    fn modify_showroom<T, E, F>(&self, showroom_id: &str, change: F) -> Option<Result<T, E>>
    where
        F: FnOnce(&mut Showroom) -> Result<T, E>;

    /// Append `screening` to the showroom unless a screening with its id is
    /// hosted by any showroom. The check and the insert happen under one lock.
    /// Returns None if no such showroom exists, Some(false) if the id is taken.
    fn insert_screening(&self, showroom_id: &str, screening: Screening) -> Option<bool>;

    /// Returns true if a showroom was removed
    fn delete_showroom(&self, showroom_id: &str) -> bool;

    fn replace_all_showrooms(&self, showrooms: Vec<Showroom>);
}

/// Registry of client accounts keyed by username
pub trait ClientStorage: Send + Sync {
    /// Append the client unless its username is taken.
    /// The check and the insert happen under one lock.
    fn store_client(&self, client: Client) -> bool;

    fn find_client(&self, username: &str) -> Option<Client>;

    /// All clients in registration order
    fn list_clients(&self) -> Vec<Client>;

    fn replace_all_clients(&self, clients: Vec<Client>);
}

/// Sold tickets in sale order
pub trait TicketStorage: Send + Sync {
    fn store_ticket(&self, ticket: Ticket);

    fn list_tickets(&self) -> Vec<Ticket>;

    fn replace_all_tickets(&self, tickets: Vec<Ticket>);
}
