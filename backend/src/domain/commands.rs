//! Domain-level command types.
//! These structs are used by services inside the domain layer and are not
//! exposed to the UI. The io layer maps the `shared` request DTOs onto them.

pub mod screening {
    use chrono::NaiveDateTime;
    use std::sync::Arc;

    use crate::domain::models::Movie;

    /// Validated-field input for creating or editing a screening
    #[derive(Debug, Clone)]
    pub struct ScreeningCommand {
        pub movie: Arc<Movie>,
        pub ticket_count: u32,
        pub price_per_ticket: f64,
        pub date_time: NaiveDateTime,
    }
}

pub mod account {
    /// Sign-up input after trimming
    #[derive(Debug, Clone)]
    pub struct RegisterClientCommand {
        pub username: String,
        pub email: String,
        pub password: String,
        pub confirm_password: String,
    }
}
