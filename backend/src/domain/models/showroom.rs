//! Domain model for a showroom and the screenings it hosts.
use uuid::Uuid;

use super::screening::Screening;
use crate::domain::errors::ValidationError;

pub const MAX_SHOWROOM_NAME_LENGTH: usize = 100;
pub const MIN_SHOWROOM_CAPACITY: u32 = 1;
pub const MAX_SHOWROOM_CAPACITY: u32 = 10_000;

/// A venue with a fixed capacity. Screenings are kept in display order.
#[derive(Debug, Clone, PartialEq)]
pub struct Showroom {
    id: String,
    name: String,
    capacity: u32,
    screenings: Vec<Screening>,
}

impl Showroom {
    pub fn new(name: &str, capacity: u32, screenings: Vec<Screening>) -> Result<Self, ValidationError> {
        let name = Self::validate_name(name)?;
        Self::validate_capacity(capacity)?;

        Ok(Self {
            id: Self::generate_id(),
            name,
            capacity,
            screenings,
        })
    }

    pub fn generate_id() -> String {
        format!("showroom::{}", Uuid::new_v4())
    }

    /// Returns the trimmed name
    pub fn validate_name(name: &str) -> Result<String, ValidationError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Blank { field: "Showroom name" });
        }
        if trimmed.chars().count() > MAX_SHOWROOM_NAME_LENGTH {
            return Err(ValidationError::TooLong {
                field: "Showroom name",
                max: MAX_SHOWROOM_NAME_LENGTH,
            });
        }
        Ok(trimmed.to_string())
    }

    pub fn validate_capacity(capacity: u32) -> Result<(), ValidationError> {
        if !(MIN_SHOWROOM_CAPACITY..=MAX_SHOWROOM_CAPACITY).contains(&capacity) {
            return Err(ValidationError::CapacityOutOfRange {
                capacity,
                min: MIN_SHOWROOM_CAPACITY,
                max: MAX_SHOWROOM_CAPACITY,
            });
        }
        Ok(())
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    pub fn screenings(&self) -> &[Screening] {
        &self.screenings
    }

    pub fn screening(&self, screening_id: &str) -> Option<&Screening> {
        self.screenings.iter().find(|s| s.id() == screening_id)
    }

    pub fn set_name(&mut self, name: &str) -> Result<(), ValidationError> {
        self.name = Self::validate_name(name)?;
        Ok(())
    }

    pub fn set_capacity(&mut self, capacity: u32) -> Result<(), ValidationError> {
        Self::validate_capacity(capacity)?;
        self.capacity = capacity;
        Ok(())
    }

    /// Clear the screening list and refill it, keeping this showroom's identity
    pub fn replace_screenings(&mut self, screenings: Vec<Screening>) {
        self.screenings.clear();
        self.screenings.extend(screenings);
    }

    pub fn add_screening(&mut self, screening: Screening) {
        self.screenings.push(screening);
    }

    /// Returns false when no screening has that id
    pub fn remove_screening(&mut self, screening_id: &str) -> bool {
        let before = self.screenings.len();
        self.screenings.retain(|s| s.id() != screening_id);
        self.screenings.len() != before
    }

    /// Swap in an updated screening at the position of the one with the same id
    pub fn replace_screening(&mut self, screening: Screening) -> bool {
        match self.screenings.iter_mut().find(|s| s.id() == screening.id()) {
            Some(slot) => {
                *slot = screening;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::Movie;
    use chrono::Duration;
    use std::sync::Arc;

    fn screening(title: &str) -> Screening {
        let movie = Arc::new(Movie::new("Drama", title, "Director", 2001, "Description", 100).expect("valid movie"));
        Screening::new(movie, 100, 10.0, Screening::now() + Duration::days(1)).expect("valid screening")
    }

    #[test]
    fn test_create_showroom() {
        let showroom = Showroom::new("  Theater A ", 250, vec![]).expect("valid showroom");

        assert_eq!(showroom.name(), "Theater A");
        assert_eq!(showroom.capacity(), 250);
        assert!(showroom.screenings().is_empty());
    }

    #[test]
    fn test_name_validation() {
        assert_eq!(
            Showroom::new("   ", 10, vec![]),
            Err(ValidationError::Blank { field: "Showroom name" })
        );
        assert!(Showroom::new(&"x".repeat(MAX_SHOWROOM_NAME_LENGTH), 10, vec![]).is_ok());
        assert!(matches!(
            Showroom::new(&"x".repeat(MAX_SHOWROOM_NAME_LENGTH + 1), 10, vec![]),
            Err(ValidationError::TooLong { .. })
        ));
    }

    #[test]
    fn test_capacity_validation() {
        assert!(Showroom::new("Room", 0, vec![]).is_err());
        assert!(Showroom::new("Room", 1, vec![]).is_ok());
        assert!(Showroom::new("Room", MAX_SHOWROOM_CAPACITY, vec![]).is_ok());
        assert!(Showroom::new("Room", MAX_SHOWROOM_CAPACITY + 1, vec![]).is_err());
    }

    #[test]
    fn test_failed_setter_keeps_state() {
        let mut showroom = Showroom::new("Room", 50, vec![]).expect("valid showroom");

        assert!(showroom.set_name("").is_err());
        assert!(showroom.set_capacity(0).is_err());
        assert_eq!(showroom.name(), "Room");
        assert_eq!(showroom.capacity(), 50);
    }

    #[test]
    fn test_screening_list_operations() {
        let first = screening("Alien");
        let second = screening("Heat");
        let first_id = first.id().to_string();
        let mut showroom = Showroom::new("Room", 50, vec![first]).expect("valid showroom");
        let id = showroom.id().to_string();

        showroom.add_screening(second);
        assert_eq!(showroom.screenings().len(), 2);
        assert_eq!(showroom.screenings()[1].movie().title(), "Heat");

        assert!(showroom.remove_screening(&first_id));
        assert!(!showroom.remove_screening(&first_id));
        assert_eq!(showroom.screenings().len(), 1);

        showroom.replace_screenings(vec![screening("Ran"), screening("Ikiru")]);
        let titles: Vec<&str> = showroom.screenings().iter().map(|s| s.movie().title()).collect();
        assert_eq!(titles, vec!["Ran", "Ikiru"]);
        assert_eq!(showroom.id(), id);
    }

    #[test]
    fn test_replace_screening_keeps_position() {
        let mut showroom = Showroom::new("Room", 50, vec![screening("Alien"), screening("Heat")]).expect("valid showroom");
        let mut updated = showroom.screenings()[0].clone();
        updated.set_ticket_count(7);

        assert!(showroom.replace_screening(updated));
        assert_eq!(showroom.screenings()[0].ticket_count(), 7);
        assert!(!showroom.replace_screening(screening("Missing")));
    }
}
