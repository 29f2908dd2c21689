//! Domain model for a catalog movie.
use chrono::{Datelike, Local};
use std::fmt;
use uuid::Uuid;

use crate::domain::errors::ValidationError;

/// Year of the first motion picture
pub const MIN_MOVIE_YEAR: i32 = 1888;
/// Runtime in minutes of the longest film ever made
pub const MAX_MOVIE_RUNTIME: u32 = 51_420;

/// Immutable catalog record. Cloning is the defensive copy.
#[derive(Debug, Clone, PartialEq)]
pub struct Movie {
    id: String,
    genre: String,
    title: String,
    director: String,
    year: i32,
    description: String,
    runtime: u32,
}

impl Movie {
    /// Validate and build a new movie with a freshly generated id
    pub fn new(
        genre: &str,
        title: &str,
        director: &str,
        year: i32,
        description: &str,
        runtime: u32,
    ) -> Result<Self, ValidationError> {
        let genre = require_text("Genre", genre)?;
        let title = require_text("Title", title)?;
        let director = require_text("Director", director)?;
        let description = require_text("Description", description)?;
        Self::validate_year(year, Local::now().year())?;
        Self::validate_runtime(runtime)?;

        Ok(Self {
            id: Self::generate_id(),
            genre,
            title,
            director,
            year,
            description,
            runtime,
        })
    }

    pub fn generate_id() -> String {
        format!("movie::{}", Uuid::new_v4())
    }

    /// Accepts 1888 through the year after `current_year`
    pub fn validate_year(year: i32, current_year: i32) -> Result<(), ValidationError> {
        let max = current_year + 1;
        if year < MIN_MOVIE_YEAR || year > max {
            return Err(ValidationError::YearOutOfRange {
                year,
                min: MIN_MOVIE_YEAR,
                max,
            });
        }
        Ok(())
    }

    pub fn validate_runtime(runtime: u32) -> Result<(), ValidationError> {
        if runtime < 1 || runtime > MAX_MOVIE_RUNTIME {
            return Err(ValidationError::RuntimeOutOfRange {
                runtime,
                min: 1,
                max: MAX_MOVIE_RUNTIME,
            });
        }
        Ok(())
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn genre(&self) -> &str {
        &self.genre
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn director(&self) -> &str {
        &self.director
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn runtime(&self) -> u32 {
        self.runtime
    }
}

impl fmt::Display for Movie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {}",
            self.title, self.genre, self.director, self.year, self.description
        )
    }
}

fn require_text(field: &'static str, value: &str) -> Result<String, ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Blank { field });
    }
    Ok(value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inception(year: i32) -> Result<Movie, ValidationError> {
        Movie::new(
            "Science Fiction",
            "Inception",
            "Christopher Nolan",
            year,
            "A thief who steals corporate secrets through dream-sharing technology.",
            148,
        )
    }

    #[test]
    fn test_valid_movie_keeps_fields() {
        let movie = inception(2010).expect("valid movie");

        assert_eq!(movie.title(), "Inception");
        assert_eq!(movie.genre(), "Science Fiction");
        assert_eq!(movie.year(), 2010);
        assert_eq!(movie.runtime(), 148);
        assert!(movie.id().starts_with("movie::"));
    }

    #[test]
    fn test_year_boundaries() {
        let next_year = Local::now().year() + 1;

        assert!(inception(MIN_MOVIE_YEAR).is_ok());
        assert!(inception(next_year).is_ok());
        assert!(matches!(
            inception(MIN_MOVIE_YEAR - 1),
            Err(ValidationError::YearOutOfRange { .. })
        ));
        assert!(matches!(
            inception(next_year + 1),
            Err(ValidationError::YearOutOfRange { .. })
        ));
    }

    #[test]
    fn test_validate_year_against_fixed_clock() {
        assert!(Movie::validate_year(2026, 2025).is_ok());
        assert!(Movie::validate_year(2027, 2025).is_err());
        assert!(Movie::validate_year(1887, 2025).is_err());
    }

    #[test]
    fn test_runtime_bounds() {
        assert!(Movie::new("Drama", "Short", "Someone", 2000, "Tiny", 1).is_ok());
        assert!(Movie::new("Drama", "Long", "Someone", 2000, "Huge", MAX_MOVIE_RUNTIME).is_ok());
        assert!(Movie::new("Drama", "Zero", "Someone", 2000, "None", 0).is_err());
        assert!(Movie::new("Drama", "Too long", "Someone", 2000, "Too much", MAX_MOVIE_RUNTIME + 1).is_err());
    }

    #[test]
    fn test_blank_fields_rejected() {
        assert_eq!(
            Movie::new("Drama", "   ", "Someone", 2000, "Text", 90),
            Err(ValidationError::Blank { field: "Title" })
        );
        assert_eq!(
            Movie::new("", "Title", "Someone", 2000, "Text", 90),
            Err(ValidationError::Blank { field: "Genre" })
        );
        assert_eq!(
            Movie::new("Drama", "Title", "", 2000, "Text", 90),
            Err(ValidationError::Blank { field: "Director" })
        );
        assert_eq!(
            Movie::new("Drama", "Title", "Someone", 2000, "\t", 90),
            Err(ValidationError::Blank { field: "Description" })
        );
    }

    #[test]
    fn test_display_format() {
        let movie = Movie::new("Action", "The Matrix", "The Wachowskis", 1999, "Reality is a simulation.", 136)
            .expect("valid movie");

        assert_eq!(
            movie.to_string(),
            "The Matrix Action The Wachowskis 1999 Reality is a simulation."
        );
    }

    #[test]
    fn test_clone_is_equal_copy() {
        let movie = inception(2010).expect("valid movie");
        let copy = movie.clone();

        assert_eq!(copy, movie);
        assert_eq!(copy.id(), movie.id());
    }
}
