//! # Theater Backend
//!
//! Domain services for running a movie theater: the movie catalog, showrooms
//! and their screenings, manager and client accounts, ticket sales, and
//! ticket statistics.
//!
//! All services are synchronous and share in-memory registries; cloning a
//! service handle (or the whole [`TheaterState`]) shares the same data.

use anyhow::{Context, Result};
use shared::TheaterConfig;
use tracing::info;

pub mod config;
pub mod domain;
pub mod io;
pub mod storage;

use domain::models::Manager;
use domain::{
    AccountService, EventPublisher, MovieService, ScreeningService, ShowroomService, StatsService,
    TicketService,
};
use storage::{ClientRepository, MovieRepository, ShowroomRepository, TicketRepository};

/// Every service, wired to one set of registries
#[derive(Clone)]
pub struct TheaterState {
    pub movie_service: MovieService,
    pub showroom_service: ShowroomService,
    pub screening_service: ScreeningService,
    pub account_service: AccountService,
    pub ticket_service: TicketService,
    pub stats_service: StatsService,
    pub events: EventPublisher,
    pub config: TheaterConfig,
}

/// Build all services from the config with empty registries
pub fn initialize_backend(config: TheaterConfig) -> Result<TheaterState> {
    info!("Initializing theater backend");

    let events = EventPublisher::new(config.event_channel_capacity);

    let movie_service = MovieService::new(MovieRepository::new(), events.clone());
    let showroom_service = ShowroomService::new(
        ShowroomRepository::new(),
        events.clone(),
        config.default_ticket_price,
    );
    let screening_service =
        ScreeningService::new(showroom_service.clone(), movie_service.clone(), config.clone());

    let manager = Manager::new(&config.manager_username, &config.manager_password)
        .context("Invalid manager credentials in configuration")?;
    let account_service = AccountService::new(manager, ClientRepository::new(), events.clone());

    let ticket_service = TicketService::new(
        TicketRepository::new(),
        showroom_service.clone(),
        account_service.clone(),
        events.clone(),
    );

    let stats_service = StatsService::new(showroom_service.clone());

    Ok(TheaterState {
        movie_service,
        showroom_service,
        screening_service,
        account_service,
        ticket_service,
        stats_service,
        events,
        config,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use domain::commands::screening::ScreeningCommand;
    use domain::models::{Movie, Screening};
    use domain::TheaterEvent;

    fn setup_test() -> TheaterState {
        initialize_backend(TheaterConfig::default()).expect("default config is valid")
    }

    #[test]
    fn test_initialize_with_defaults() {
        let state = setup_test();

        assert!(state.movie_service.get_movies().is_empty());
        assert!(state.showroom_service.get_showrooms().is_empty());
        assert_eq!(state.showroom_service.get_default_ticket_price(), 12.0);
        assert!(state.account_service.login("Manager", "cinemaPassword").is_some());
    }

    #[test]
    fn test_invalid_manager_config() {
        let config = TheaterConfig {
            manager_password: "  ".to_string(),
            ..TheaterConfig::default()
        };

        assert!(initialize_backend(config).is_err());
    }

    #[test]
    fn test_services_share_registries() {
        let state = setup_test();
        let mut rx = state.events.subscribe();

        let movie = state.movie_service.add_movie(
            Movie::new("Science Fiction", "Inception", "Christopher Nolan", 2010, "Dreams", 148)
                .expect("valid movie"),
        );
        let showroom = state
            .showroom_service
            .create_showroom("Theater A", 250, vec![])
            .expect("valid showroom");

        let command = ScreeningCommand {
            movie: movie.clone(),
            ticket_count: 180,
            price_per_ticket: 13.0,
            date_time: Screening::now() + Duration::days(1),
        };
        state
            .screening_service
            .create_screening(showroom.id(), command)
            .expect("valid screening");

        let stats = state.stats_service.movie_stats(&movie);
        assert_eq!(stats.total_revenue, 2340.0);

        let cloned = state.clone();
        assert_eq!(cloned.showroom_service.get_all_screenings().len(), 1);

        assert!(matches!(rx.try_recv(), Ok(TheaterEvent::MovieAdded { .. })));
        assert!(matches!(rx.try_recv(), Ok(TheaterEvent::ShowroomCreated { .. })));
        assert!(matches!(rx.try_recv(), Ok(TheaterEvent::ScreeningAdded { .. })));
    }

    #[test]
    fn test_seeded_state() {
        let state = setup_test();

        domain::sample_data::seed_sample_data(
            &state.movie_service,
            &state.showroom_service,
            &state.account_service,
            &state.ticket_service,
        )
        .expect("sample data is valid");

        let showrooms = io::mappers::ShowroomMapper::to_dto_list(&state.showroom_service.get_showrooms());
        assert_eq!(showrooms.len(), 4);
        assert_eq!(showrooms[0].screenings.len(), 3);
        assert!(showrooms[3].screenings.is_empty());

        let tickets = io::mappers::TicketMapper::to_dto_list(&state.ticket_service.get_tickets());
        assert_eq!(tickets.len(), 8);
        assert_eq!(tickets[0].movie_title, "The Matrix");
    }
}
