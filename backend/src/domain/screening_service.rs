//! Screening add/edit workflow.
//!
//! A screening goes from raw form input, through field validation, into a
//! showroom. Every field is checked before anything is written, and the write
//! itself goes through the showroom registry's all-or-nothing update, so a
//! rejected form never leaves a showroom or screening half edited.
//!
//! ## Business Rules
//!
//! - Date-time must not be in the past
//! - Ticket count within the configured bounds (1 to 10 000 by default)
//! - Price between 0 and the configured maximum (9999.99 by default), at most
//!   two decimal places when entered as text

use chrono::NaiveDateTime;
use regex::Regex;
use std::sync::LazyLock;
use tracing::{info, warn};

use crate::domain::commands::screening::ScreeningCommand;
use crate::domain::errors::{TheaterResult, ValidationError};
use crate::domain::models::{Screening, Showroom};
use crate::domain::{MovieService, ShowroomService};
use shared::{ScreeningFormError, ScreeningFormRequest, ScreeningFormValidation, TheaterConfig};

/// Price text as typed in the form, after the currency symbol is stripped
static PRICE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]*(\.[0-9]{0,2})?$").expect("price pattern compiles"));

#[derive(Clone)]
pub struct ScreeningService {
    showroom_service: ShowroomService,
    movie_service: MovieService,
    config: TheaterConfig,
}

impl ScreeningService {
    pub fn new(showroom_service: ShowroomService, movie_service: MovieService, config: TheaterConfig) -> Self {
        Self {
            showroom_service,
            movie_service,
            config,
        }
    }

    /// Validate the command and append a new screening to the showroom
    pub fn create_screening(&self, showroom_id: &str, command: ScreeningCommand) -> TheaterResult<Screening> {
        self.create_screening_at(showroom_id, command, Screening::now())
    }

    pub fn create_screening_at(
        &self,
        showroom_id: &str,
        command: ScreeningCommand,
        now: NaiveDateTime,
    ) -> TheaterResult<Screening> {
        info!(
            "Creating screening: showroom={}, movie={}, tickets={}, price={:.2}, at={}",
            showroom_id,
            command.movie.title(),
            command.ticket_count,
            command.price_per_ticket,
            command.date_time
        );

        self.validate_command(&command, now)?;
        let screening = Screening::new_at(
            command.movie,
            command.ticket_count,
            command.price_per_ticket,
            command.date_time,
            now,
        )?;

        self.showroom_service.add_screening(showroom_id, screening)
    }

    /// Validate the command and update an existing screening in place
    pub fn update_screening(
        &self,
        showroom_id: &str,
        screening_id: &str,
        command: ScreeningCommand,
    ) -> TheaterResult<Screening> {
        self.update_screening_at(showroom_id, screening_id, command, Screening::now())
    }

    pub fn update_screening_at(
        &self,
        showroom_id: &str,
        screening_id: &str,
        command: ScreeningCommand,
        now: NaiveDateTime,
    ) -> TheaterResult<Screening> {
        info!("Updating screening {} in showroom {}", screening_id, showroom_id);

        self.validate_command(&command, now)?;
        self.showroom_service
            .modify_screening(showroom_id, screening_id, |screening| {
                screening.set_movie(command.movie);
                screening.set_ticket_count(command.ticket_count);
                screening.set_price_per_ticket(command.price_per_ticket)?;
                screening.set_date_time_at(command.date_time, now)?;
                Ok(())
            })
    }

    pub fn remove_screening(&self, showroom_id: &str, screening_id: &str) -> bool {
        self.showroom_service.remove_screening(showroom_id, screening_id)
    }

    /// Check every field of a command against the configured bounds
    pub fn validate_command(&self, command: &ScreeningCommand, now: NaiveDateTime) -> Result<(), ValidationError> {
        let result = self.check_command(command, now);
        if let Err(ref e) = result {
            warn!("Rejected screening for {}: {}", command.movie.title(), e);
        }
        result
    }

    fn check_command(&self, command: &ScreeningCommand, now: NaiveDateTime) -> Result<(), ValidationError> {
        Screening::validate_date_time(command.date_time, now)?;

        let (min, max) = (self.config.min_ticket_count, self.config.max_ticket_count);
        if command.ticket_count < min || command.ticket_count > max {
            return Err(ValidationError::TicketCountOutOfRange {
                count: command.ticket_count,
                min,
                max,
            });
        }

        Screening::validate_price(command.price_per_ticket)?;
        if command.price_per_ticket > self.config.max_ticket_price {
            return Err(ValidationError::PriceOutOfRange {
                price: command.price_per_ticket,
                max: self.config.max_ticket_price,
            });
        }

        Ok(())
    }

    /// Blank form for a new screening, with the price pre-filled
    pub fn new_form(&self) -> ScreeningFormRequest {
        ScreeningFormRequest {
            movie_id: None,
            date_time: None,
            ticket_count_input: String::new(),
            price_input: format!("{:.2}", self.showroom_service.get_default_ticket_price()),
        }
    }

    /// Form pre-filled from an existing screening, for the edit dialog
    pub fn edit_form(&self, screening: &Screening) -> ScreeningFormRequest {
        ScreeningFormRequest {
            movie_id: Some(screening.movie().id().to_string()),
            date_time: Some(screening.date_time()),
            ticket_count_input: screening.ticket_count().to_string(),
            price_input: format!("{:.2}", screening.price_per_ticket()),
        }
    }

    /// Form pre-filled for a new screening in `showroom`: one ticket per seat
    pub fn new_form_for(&self, showroom: &Showroom) -> ScreeningFormRequest {
        ScreeningFormRequest {
            ticket_count_input: showroom.capacity().to_string(),
            ..self.new_form()
        }
    }

    pub fn validate_screening_form(&self, form: &ScreeningFormRequest) -> ScreeningFormValidation {
        self.validate_screening_form_at(form, Screening::now())
    }

    /// Validate raw form input, collecting every error rather than stopping at the first
    pub fn validate_screening_form_at(&self, form: &ScreeningFormRequest, now: NaiveDateTime) -> ScreeningFormValidation {
        let mut errors = Vec::new();

        match form.movie_id.as_deref() {
            None => errors.push(ScreeningFormError::MissingMovie),
            Some(id) if self.movie_service.get_movie(id).is_none() => {
                errors.push(ScreeningFormError::UnknownMovie(id.to_string()));
            }
            Some(_) => {}
        }

        match form.date_time {
            None => errors.push(ScreeningFormError::MissingDateTime),
            Some(date_time) if date_time < now => errors.push(ScreeningFormError::DateTimeInPast),
            Some(_) => {}
        }

        let cleaned_ticket_count = match self.parse_ticket_count(&form.ticket_count_input) {
            Ok(count) => Some(count),
            Err(e) => {
                errors.push(e);
                None
            }
        };

        let cleaned_price = match self.parse_price(&form.price_input) {
            Ok(price) => Some(price),
            Err(e) => {
                errors.push(e);
                None
            }
        };

        ScreeningFormValidation {
            is_valid: errors.is_empty(),
            errors,
            cleaned_ticket_count,
            cleaned_price,
        }
    }

    /// Turn a form into a command, or hand back the failed validation
    pub fn command_from_form(
        &self,
        form: &ScreeningFormRequest,
        now: NaiveDateTime,
    ) -> Result<ScreeningCommand, ScreeningFormValidation> {
        let validation = self.validate_screening_form_at(form, now);

        let movie = form.movie_id.as_deref().and_then(|id| self.movie_service.get_movie(id));
        match (movie, form.date_time, validation.cleaned_ticket_count, validation.cleaned_price) {
            (Some(movie), Some(date_time), Some(ticket_count), Some(price_per_ticket)) if validation.is_valid => {
                Ok(ScreeningCommand {
                    movie,
                    ticket_count,
                    price_per_ticket,
                    date_time,
                })
            }
            _ => Err(validation),
        }
    }

    fn parse_ticket_count(&self, input: &str) -> Result<u32, ScreeningFormError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ScreeningFormError::EmptyTicketCount);
        }

        let count: u32 = trimmed
            .parse()
            .map_err(|_| ScreeningFormError::InvalidTicketCount(trimmed.to_string()))?;

        let (min, max) = (self.config.min_ticket_count, self.config.max_ticket_count);
        if count < min || count > max {
            return Err(ScreeningFormError::TicketCountOutOfRange { min, max });
        }
        Ok(count)
    }

    /// Accepts digits with an optional fraction of at most two digits ("12", "12.5", "12.50")
    fn parse_price(&self, input: &str) -> Result<f64, ScreeningFormError> {
        let cleaned = input
            .trim()
            .trim_start_matches(self.config.currency_symbol.as_str())
            .trim();
        if cleaned.is_empty() {
            return Err(ScreeningFormError::EmptyPrice);
        }

        let invalid = || ScreeningFormError::InvalidPriceFormat(input.trim().to_string());
        if !PRICE_PATTERN.is_match(cleaned) {
            return Err(invalid());
        }
        // The pattern also admits a lone "."
        let price: f64 = cleaned.parse().map_err(|_| invalid())?;

        if price > self.config.max_ticket_price {
            return Err(ScreeningFormError::PriceOutOfRange {
                max: self.config.max_ticket_price,
            });
        }
        Ok(price)
    }

    /// User-facing message for a form error
    pub fn get_error_message(&self, error: &ScreeningFormError) -> String {
        match error {
            ScreeningFormError::MissingMovie => "Please select a movie".to_string(),
            ScreeningFormError::UnknownMovie(id) => format!("Movie {} is no longer in the catalog", id),
            ScreeningFormError::MissingDateTime => "Please select a date and time".to_string(),
            ScreeningFormError::DateTimeInPast => "The screening date cannot be in the past".to_string(),
            ScreeningFormError::EmptyTicketCount => "Please enter the number of tickets".to_string(),
            ScreeningFormError::InvalidTicketCount(input) => {
                format!("Ticket count must be a whole number, got '{}'", input)
            }
            ScreeningFormError::TicketCountOutOfRange { min, max } => {
                format!("Ticket count must be between {} and {}", min, max)
            }
            ScreeningFormError::EmptyPrice => "Please enter a ticket price".to_string(),
            ScreeningFormError::InvalidPriceFormat(input) => {
                format!("Please enter a valid price like 12 or 12.50, got '{}'", input)
            }
            ScreeningFormError::PriceOutOfRange { max } => {
                format!("Price cannot exceed {}{:.2}", self.config.currency_symbol, max)
            }
        }
    }

    pub fn get_error_messages(&self, errors: &[ScreeningFormError]) -> Vec<String> {
        errors.iter().map(|e| self.get_error_message(e)).collect()
    }
}
