//! Ticket and revenue figures for the manager's statistics view.
//!
//! Figures are computed from the current showroom registry on every call;
//! nothing is cached.

use tracing::info;

use crate::domain::models::{Movie, Screening};
use crate::domain::ShowroomService;

/// Figures for one screening
#[derive(Debug, Clone, PartialEq)]
pub struct ScreeningStats {
    pub screening: Screening,
    pub tickets_sold: u32,
    pub price_per_ticket: f64,
    pub revenue: f64,
}

/// Figures for every screening of one movie, plus totals
#[derive(Debug, Clone, PartialEq)]
pub struct MovieStats {
    pub movie_id: String,
    pub title: String,
    pub screenings: Vec<ScreeningStats>,
    pub total_tickets: u64,
    pub total_revenue: f64,
}

#[derive(Clone)]
pub struct StatsService {
    showroom_service: ShowroomService,
}

impl StatsService {
    pub fn new(showroom_service: ShowroomService) -> Self {
        Self { showroom_service }
    }

    pub fn screening_stats(&self, screening: &Screening) -> ScreeningStats {
        ScreeningStats {
            screening: screening.clone(),
            tickets_sold: screening.ticket_count(),
            price_per_ticket: screening.price_per_ticket(),
            revenue: screening.revenue(),
        }
    }

    /// Stats across all screenings whose movie shares `movie`'s title
    pub fn movie_stats(&self, movie: &Movie) -> MovieStats {
        let screenings: Vec<ScreeningStats> = self
            .showroom_service
            .get_screening_for(Some(movie))
            .iter()
            .map(|s| self.screening_stats(s))
            .collect();

        let total_tickets = screenings.iter().map(|s| u64::from(s.tickets_sold)).sum();
        let total_revenue = screenings.iter().map(|s| s.revenue).sum();

        info!(
            "Stats for {}: {} screenings, {} tickets, revenue {:.2}",
            movie.title(),
            screenings.len(),
            total_tickets,
            total_revenue
        );

        MovieStats {
            movie_id: movie.id().to_string(),
            title: movie.title().to_string(),
            screenings,
            total_tickets,
            total_revenue,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::events::EventPublisher;
    use crate::storage::ShowroomRepository;
    use chrono::{Duration, NaiveDate, NaiveDateTime};
    use std::sync::Arc;

    fn setup_test() -> (StatsService, ShowroomService) {
        let showrooms = ShowroomService::new(ShowroomRepository::new(), EventPublisher::new(16), 12.0);
        (StatsService::new(showrooms.clone()), showrooms)
    }

    fn movie(title: &str) -> Arc<Movie> {
        Arc::new(Movie::new("Science Fiction", title, "Christopher Nolan", 2010, "Dreams", 148).expect("valid movie"))
    }

    fn future() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2999, 1, 1)
            .and_then(|d| d.and_hms_opt(20, 0, 0))
            .expect("valid date")
    }

    #[test]
    fn test_screening_stats() {
        let (stats, _) = setup_test();
        let screening = Screening::new(movie("Inception"), 180, 13.0, future()).expect("valid screening");

        let result = stats.screening_stats(&screening);

        assert_eq!(result.tickets_sold, 180);
        assert_eq!(result.price_per_ticket, 13.0);
        assert_eq!(result.revenue, 2340.0);
    }

    #[test]
    fn test_movie_stats_across_showrooms() {
        let (stats, showrooms) = setup_test();
        let inception = movie("Inception");
        let other = movie("Interstellar");

        let a = showrooms
            .create_showroom(
                "Theater A",
                250,
                vec![
                    Screening::new(inception.clone(), 180, 13.0, future()).expect("valid screening"),
                    Screening::new(other.clone(), 50, 10.0, future()).expect("valid screening"),
                ],
            )
            .expect("valid showroom");
        showrooms
            .create_showroom(
                "Theater B",
                200,
                vec![Screening::new(inception.clone(), 20, 10.0, future() + Duration::days(1)).expect("valid screening")],
            )
            .expect("valid showroom");

        let result = stats.movie_stats(&inception);

        assert_eq!(result.title, "Inception");
        assert_eq!(result.screenings.len(), 2);
        assert_eq!(result.total_tickets, 200);
        assert_eq!(result.total_revenue, 2540.0);

        showrooms.remove_showroom(a.id());
        let result = stats.movie_stats(&inception);
        assert_eq!(result.total_revenue, 200.0);
    }

    #[test]
    fn test_movie_stats_without_screenings() {
        let (stats, _) = setup_test();

        let result = stats.movie_stats(&movie("Titanic"));

        assert!(result.screenings.is_empty());
        assert_eq!(result.total_tickets, 0);
        assert_eq!(result.total_revenue, 0.0);
    }
}
