//! Startup catalog, showrooms, client accounts and sold tickets for demos and
//! manual testing.

use chrono::Duration;
use tracing::info;

use crate::domain::errors::TheaterResult;
use crate::domain::models::{Client, Movie, Screening, Showroom, Ticket};
use crate::domain::{AccountService, MovieService, ShowroomService, TicketService};

/// genre, title, director, year, description, runtime
const MOVIES: [(&str, &str, &str, i32, &str, u32); 8] = [
    ("Action", "The Matrix", "The Wachowskis", 1999, "A hacker learns the truth about his reality.", 136),
    ("Drama", "The Shawshank Redemption", "Frank Darabont", 1994, "Two imprisoned men bond over a number of years.", 142),
    ("Science Fiction", "Inception", "Christopher Nolan", 2010, "A thief steals corporate secrets through dream-sharing.", 148),
    ("Comedy", "Pulp Fiction", "Quentin Tarantino", 1994, "Intertwining tales of crime in Los Angeles.", 154),
    ("Horror", "The Shining", "Stanley Kubrick", 1980, "A family heads to an isolated hotel for the winter.", 146),
    ("Animation", "Spirited Away", "Hayao Miyazaki", 2001, "A girl wanders into a world of spirits.", 125),
    ("Romance", "Titanic", "James Cameron", 1997, "A romance aboard the ill-fated maiden voyage.", 194),
    ("Thriller", "The Dark Knight", "Christopher Nolan", 2008, "Batman faces the Joker in Gotham City.", 152),
];

/// movie index, ticket count, price per ticket
const SCREENINGS: [(usize, u32, f64); 6] = [
    (0, 150, 12.50),
    (1, 200, 11.00),
    (2, 180, 13.00),
    (3, 160, 10.50),
    (4, 140, 12.00),
    (5, 170, 11.50),
];

/// name, capacity, indices into SCREENINGS
const SHOWROOMS: [(&str, u32, &[usize]); 4] = [
    ("Theater A", 250, &[0, 1, 2]),
    ("Theater B", 200, &[3, 4]),
    ("Theater C (VIP)", 100, &[5]),
    ("Theater D", 300, &[]),
];

/// username, password, email
const CLIENTS: [(&str, &str, &str); 5] = [
    ("john_doe", "client123", "john.doe@email.com"),
    ("jane_smith", "secure_pass", "jane.smith@email.com"),
    ("michael_j", "password789", "michael.j@email.com"),
    ("emily_brown", "emily_pass", "emily.brown@email.com"),
    ("david_wilson", "david123", "david.wilson@email.com"),
];

/// screening index, price paid, client index
const TICKETS: [(usize, f64, usize); 8] = [
    (0, 12.50, 0),
    (1, 11.00, 0),
    (2, 13.00, 1),
    (3, 10.50, 2),
    (4, 12.00, 2),
    (5, 11.50, 2),
    (0, 12.50, 3),
    (1, 11.00, 4),
];

/// Replace every registry with the sample data set.
///
/// Screening `i` is scheduled `i + 1` days from now.
pub fn seed_sample_data(
    movie_service: &MovieService,
    showroom_service: &ShowroomService,
    account_service: &AccountService,
    ticket_service: &TicketService,
) -> TheaterResult<()> {
    info!("Seeding sample data");

    let movies = MOVIES
        .iter()
        .map(|&(genre, title, director, year, description, runtime)| {
            Movie::new(genre, title, director, year, description, runtime)
        })
        .collect::<Result<Vec<_>, _>>()?;
    movie_service.set_movies(movies);
    let catalog = movie_service.get_movies();

    let now = Screening::now();
    let mut screenings = Vec::with_capacity(SCREENINGS.len());
    for (day, &(movie_index, ticket_count, price)) in SCREENINGS.iter().enumerate() {
        let date_time = now + Duration::days(day as i64 + 1);
        screenings.push(Screening::new_at(
            catalog[movie_index].clone(),
            ticket_count,
            price,
            date_time,
            now,
        )?);
    }

    let showrooms = SHOWROOMS
        .iter()
        .map(|&(name, capacity, hosted)| {
            let hosted = hosted.iter().map(|&i| screenings[i].clone()).collect();
            Showroom::new(name, capacity, hosted)
        })
        .collect::<Result<Vec<_>, _>>()?;
    showroom_service.set_showrooms(showrooms);

    let clients = CLIENTS
        .iter()
        .map(|&(username, password, email)| Client::new(username, password, email))
        .collect::<Result<Vec<_>, _>>()?;
    let tickets = TICKETS
        .iter()
        .map(|&(screening_index, price, client_index)| {
            Ticket::new(&screenings[screening_index], price, &clients[client_index])
        })
        .collect::<Result<Vec<_>, _>>()?;

    account_service.set_clients(Some(clients))?;
    ticket_service.set_tickets(tickets)?;

    info!(
        "Seeded {} movies, {} showrooms, {} screenings, {} clients and {} tickets",
        MOVIES.len(),
        SHOWROOMS.len(),
        SCREENINGS.len(),
        CLIENTS.len(),
        TICKETS.len()
    );
    Ok(())
}
