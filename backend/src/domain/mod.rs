//! # Domain Module
//!
//! Business logic for the theater: the movie catalog, showrooms and their
//! screenings, accounts and login, ticket sales, and ticket statistics.
//!
//! Entities in [`models`] validate themselves on construction and mutation.
//! Services own the registries (through the storage layer), log each operation
//! and publish a [`events::TheaterEvent`] after every committed change.

pub mod account_service;
pub mod commands;
pub mod errors;
pub mod events;
pub mod models;
pub mod movie_service;
pub mod sample_data;
pub mod screening_service;
pub mod showroom_service;
pub mod stats_service;
pub mod ticket_service;

pub use account_service::AccountService;
pub use errors::{TheaterError, TheaterResult, ValidationError};
pub use events::{EventPublisher, TheaterEvent};
pub use movie_service::MovieService;
pub use screening_service::ScreeningService;
pub use showroom_service::ShowroomService;
pub use stats_service::{MovieStats, ScreeningStats, StatsService};
pub use ticket_service::TicketService;
