//! Domain model for a purchased ticket.
//!
//! A ticket records which client bought a seat for which screening and the
//! price paid. The screening and client are referenced by id and username;
//! the movie is shared with the catalog.
use std::sync::Arc;
use uuid::Uuid;

use super::account::Client;
use super::movie::Movie;
use super::screening::Screening;
use crate::domain::errors::ValidationError;

#[derive(Debug, Clone, PartialEq)]
pub struct Ticket {
    id: String,
    screening_id: String,
    movie: Arc<Movie>,
    price: f64,
    client_username: String,
}

impl Ticket {
    /// The price may differ from the screening's list price but must be
    /// finite and not negative
    pub fn new(screening: &Screening, price: f64, client: &Client) -> Result<Self, ValidationError> {
        Screening::validate_price(price)?;

        Ok(Self {
            id: Self::generate_id(),
            screening_id: screening.id().to_string(),
            movie: screening.movie().clone(),
            price,
            client_username: client.username().to_string(),
        })
    }

    pub fn generate_id() -> String {
        format!("ticket::{}", Uuid::new_v4())
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn screening_id(&self) -> &str {
        &self.screening_id
    }

    pub fn movie(&self) -> &Arc<Movie> {
        &self.movie
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn client_username(&self) -> &str {
        &self.client_username
    }
}
