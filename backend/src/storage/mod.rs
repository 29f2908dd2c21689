//! # Storage Module
//!
//! Registries backing the domain services. Data is kept in process memory only.

pub mod memory;
pub mod traits;

pub use memory::{ClientRepository, MovieRepository, ShowroomRepository, TicketRepository};
pub use traits::{ClientStorage, MovieStorage, ShowroomStorage, TicketStorage};
