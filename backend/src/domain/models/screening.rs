//! Domain model for a scheduled screening.
//!
//! A screening references a catalog movie without owning it and carries its own
//! ticket inventory, price and local date-time. Every constructor and setter
//! rejects a date-time earlier than "now", so callers cannot build a screening
//! in the past no matter which path they come through. The `*_at` variants take
//! the reference instant explicitly.

use chrono::{Local, NaiveDateTime};
use std::sync::Arc;
use uuid::Uuid;

use super::movie::Movie;
use crate::domain::errors::ValidationError;

/// Display format for screening timestamps (dd-MM-yyyy HH:mm)
pub const SCREENING_DATE_TIME_FORMAT: &str = "%d-%m-%Y %H:%M";

#[derive(Debug, Clone, PartialEq)]
pub struct Screening {
    id: String,
    movie: Arc<Movie>,
    ticket_count: u32,
    price_per_ticket: f64,
    date_time: NaiveDateTime,
}

impl Screening {
    pub fn new(
        movie: Arc<Movie>,
        ticket_count: u32,
        price_per_ticket: f64,
        date_time: NaiveDateTime,
    ) -> Result<Self, ValidationError> {
        Self::new_at(movie, ticket_count, price_per_ticket, date_time, Self::now())
    }

    /// Build a screening, checking `date_time` against `now`
    pub fn new_at(
        movie: Arc<Movie>,
        ticket_count: u32,
        price_per_ticket: f64,
        date_time: NaiveDateTime,
        now: NaiveDateTime,
    ) -> Result<Self, ValidationError> {
        Self::validate_price(price_per_ticket)?;
        Self::validate_date_time(date_time, now)?;

        Ok(Self {
            id: Self::generate_id(),
            movie,
            ticket_count,
            price_per_ticket,
            date_time,
        })
    }

    pub fn generate_id() -> String {
        format!("screening::{}", Uuid::new_v4())
    }

    pub fn now() -> NaiveDateTime {
        Local::now().naive_local()
    }

    /// A date-time equal to `now` is accepted
    pub fn validate_date_time(date_time: NaiveDateTime, now: NaiveDateTime) -> Result<(), ValidationError> {
        if date_time < now {
            return Err(ValidationError::DateTimeInPast(date_time));
        }
        Ok(())
    }

    pub fn validate_price(price: f64) -> Result<(), ValidationError> {
        if !price.is_finite() || price < 0.0 {
            return Err(ValidationError::InvalidPrice);
        }
        Ok(())
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn movie(&self) -> &Arc<Movie> {
        &self.movie
    }

    pub fn ticket_count(&self) -> u32 {
        self.ticket_count
    }

    pub fn price_per_ticket(&self) -> f64 {
        self.price_per_ticket
    }

    pub fn date_time(&self) -> NaiveDateTime {
        self.date_time
    }

    pub fn set_movie(&mut self, movie: Arc<Movie>) {
        self.movie = movie;
    }

    pub fn set_ticket_count(&mut self, ticket_count: u32) {
        self.ticket_count = ticket_count;
    }

    pub fn set_price_per_ticket(&mut self, price_per_ticket: f64) -> Result<(), ValidationError> {
        Self::validate_price(price_per_ticket)?;
        self.price_per_ticket = price_per_ticket;
        Ok(())
    }

    pub fn set_date_time(&mut self, date_time: NaiveDateTime) -> Result<(), ValidationError> {
        self.set_date_time_at(date_time, Self::now())
    }

    pub fn set_date_time_at(&mut self, date_time: NaiveDateTime, now: NaiveDateTime) -> Result<(), ValidationError> {
        Self::validate_date_time(date_time, now)?;
        self.date_time = date_time;
        Ok(())
    }

    /// Tickets sold times price
    pub fn revenue(&self) -> f64 {
        f64::from(self.ticket_count) * self.price_per_ticket
    }

    /// "<title> <ticket_count> <price_per_ticket>"
    pub fn summary(&self) -> String {
        format!(
            "{} {} {:.2}",
            self.movie.title(),
            self.ticket_count,
            self.price_per_ticket
        )
    }

    pub fn formatted_date_time(&self) -> String {
        self.date_time.format(SCREENING_DATE_TIME_FORMAT).to_string()
    }
}
