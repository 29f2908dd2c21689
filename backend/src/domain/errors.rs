//! Error types raised by the theater domain.
//!
//! `ValidationError` is produced by entity constructors and mutators before any
//! state changes. `TheaterError` is what services return; it wraps validation
//! failures and adds the registry-level failures.

use chrono::NaiveDateTime;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("{field} cannot be empty")]
    Blank { field: &'static str },
    #[error("{field} cannot exceed {max} characters")]
    TooLong { field: &'static str, max: usize },
    #[error("Year {year} must be between {min} and {max}")]
    YearOutOfRange { year: i32, min: i32, max: i32 },
    #[error("Runtime {runtime} must be between {min} and {max} minutes")]
    RuntimeOutOfRange { runtime: u32, min: u32, max: u32 },
    #[error("Capacity {capacity} must be between {min} and {max}")]
    CapacityOutOfRange { capacity: u32, min: u32, max: u32 },
    #[error("Ticket count {count} must be between {min} and {max}")]
    TicketCountOutOfRange { count: u32, min: u32, max: u32 },
    #[error("Price {price} must be between 0 and {max}")]
    PriceOutOfRange { price: f64, max: f64 },
    #[error("Price must be a finite, non-negative number")]
    InvalidPrice,
    #[error("Screening date {0} is in the past")]
    DateTimeInPast(NaiveDateTime),
    #[error("Username may only contain letters, digits and underscores")]
    InvalidUsername,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error("Username cannot be {0}")]
    ReservedUsername(String),
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TheaterError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("User already exists: {username}")]
    Duplicate { username: String },
    #[error("{entity} already registered: {id}")]
    AlreadyRegistered { entity: &'static str, id: String },
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },
}

pub type TheaterResult<T> = Result<T, TheaterError>;
