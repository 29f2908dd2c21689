//! # IO Module
//!
//! Boundary between the domain and whatever UI sits on top of it. Domain
//! entities are mapped onto the serde DTOs in `shared`, and request DTOs onto
//! domain commands.

pub mod mappers;
