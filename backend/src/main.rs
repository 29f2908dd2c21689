use anyhow::Context;
use shared::LoginRequest;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use theater_backend::config::load_config;
use theater_backend::domain::sample_data::seed_sample_data;
use theater_backend::initialize_backend;
use theater_backend::io::mappers::{AccountMapper, MovieMapper, ShowroomMapper, StatsMapper, TicketMapper};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = load_config()?;
    let state = initialize_backend(config)?;

    // Log every change notification, the way a UI would refresh on them
    let mut events = state.events.subscribe();
    let listener = tokio::spawn(async move {
        let mut received = 0usize;
        loop {
            match events.recv().await {
                Ok(event) => {
                    received += 1;
                    info!("Event: {:?}", event);
                }
                Err(tokio::sync::broadcast::error::RecvError::Lagged(skipped)) => {
                    warn!("Event listener lagged, skipped {} events", skipped);
                }
                Err(tokio::sync::broadcast::error::RecvError::Closed) => break,
            }
        }
        received
    });

    seed_sample_data(
        &state.movie_service,
        &state.showroom_service,
        &state.account_service,
        &state.ticket_service,
    )
    .context("Failed to seed sample data")?;

    for movie in MovieMapper::to_dto_list(&state.movie_service.get_movies()) {
        info!("Movie: {}", movie.display);
    }

    for showroom in ShowroomMapper::to_dto_list(&state.showroom_service.get_showrooms()) {
        info!("Showroom: {} (capacity {})", showroom.name, showroom.capacity);
        for screening in showroom.screenings {
            info!("  {} at {}", screening.summary, screening.formatted_date_time);
        }
    }

    for ticket in TicketMapper::to_dto_list(&state.ticket_service.get_tickets()) {
        info!("Ticket: {} bought {} for {:.2}", ticket.client_username, ticket.movie_title, ticket.price);
    }

    let currency = state.config.currency_symbol.clone();
    for movie in state.movie_service.get_movies() {
        let stats = StatsMapper::movie_to_dto(&state.stats_service.movie_stats(&movie), &currency);
        info!(
            "Stats: {} sold {} tickets for {}",
            stats.title, stats.total_tickets, stats.formatted_total_revenue
        );
    }

    let request = LoginRequest {
        username: state.config.manager_username.clone(),
        password: state.config.manager_password.clone(),
    };
    let response = AccountMapper::handle_login(&state.account_service, &request);
    info!("{}", response.message);

    // Dropping every publisher closes the channel and ends the listener
    drop(state);
    let received = listener.await?;
    info!("Processed {} change events", received);

    Ok(())
}
