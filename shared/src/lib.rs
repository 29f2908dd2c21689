use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A catalog movie as seen by the UI layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieDto {
    pub id: String,
    pub genre: String,
    pub title: String,
    pub director: String,
    pub year: i32,
    pub description: String,
    /// Runtime in minutes
    pub runtime: u32,
    /// "<title> <genre> <director> <year> <description>", used for list rows
    pub display: String,
}

/// A scheduled screening as seen by the UI layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreeningDto {
    pub id: String,
    pub movie_id: String,
    pub movie_title: String,
    pub ticket_count: u32,
    pub price_per_ticket: f64,
    /// Local wall-clock time of the screening
    pub date_time: NaiveDateTime,
    /// dd-MM-yyyy HH:mm
    pub formatted_date_time: String,
    /// "<title> <ticket_count> <price_per_ticket>"
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShowroomDto {
    pub id: String,
    pub name: String,
    pub capacity: u32,
    pub screenings: Vec<ScreeningDto>,
}

/// A sold ticket as seen by the UI layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TicketDto {
    pub id: String,
    pub screening_id: String,
    pub movie_title: String,
    /// Price paid, which may differ from the screening's list price
    pub price: f64,
    pub client_username: String,
}

/// Kind of account returned by a successful login
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccountRole {
    /// The single privileged account
    Manager,
    /// A registered customer
    Client,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountDto {
    pub username: String,
    pub role: AccountRole,
    /// Only clients carry an email
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    /// None when no account matched
    pub account: Option<AccountDto>,
    pub message: String,
}

/// Raw sign-up form input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterClientRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

/// Raw add/edit screening form input, before parsing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreeningFormRequest {
    /// Catalog id of the selected movie
    pub movie_id: Option<String>,
    pub date_time: Option<NaiveDateTime>,
    pub ticket_count_input: String,
    pub price_input: String,
}

/// Validation result for the screening form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreeningFormValidation {
    pub is_valid: bool,
    pub errors: Vec<ScreeningFormError>,
    pub cleaned_ticket_count: Option<u32>,
    pub cleaned_price: Option<f64>,
}

/// Specific validation errors for the screening form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ScreeningFormError {
    MissingMovie,
    UnknownMovie(String),
    MissingDateTime,
    DateTimeInPast,
    EmptyTicketCount,
    InvalidTicketCount(String),
    TicketCountOutOfRange { min: u32, max: u32 },
    EmptyPrice,
    InvalidPriceFormat(String),
    PriceOutOfRange { max: f64 },
}

/// Revenue figures for one screening, as shown by the stats view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreeningStatsDto {
    pub screening_id: String,
    pub summary: String,
    pub tickets_sold: u32,
    pub price_per_ticket: f64,
    pub revenue: f64,
    pub formatted_revenue: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieStatsDto {
    pub movie_id: String,
    pub title: String,
    pub screenings: Vec<ScreeningStatsDto>,
    pub total_tickets: u64,
    pub total_revenue: f64,
    pub formatted_total_revenue: String,
}

/// Runtime configuration for the theater services
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TheaterConfig {
    /// Pre-fills the price of new screenings
    pub default_ticket_price: f64,
    pub manager_username: String,
    pub manager_password: String,
    pub min_ticket_count: u32,
    pub max_ticket_count: u32,
    pub max_ticket_price: f64,
    pub currency_symbol: String,
    /// Buffer size of the change notification channel
    pub event_channel_capacity: usize,
}

impl Default for TheaterConfig {
    fn default() -> Self {
        Self {
            default_ticket_price: 12.0,
            manager_username: "Manager".to_string(),
            manager_password: "cinemaPassword".to_string(),
            min_ticket_count: 1,
            max_ticket_count: 10_000,
            max_ticket_price: 9999.99,
            currency_symbol: "$".to_string(),
            event_channel_capacity: 64,
        }
    }
}
