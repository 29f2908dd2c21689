pub mod account;
pub mod movie;
pub mod screening;
pub mod showroom;
pub mod ticket;

pub use account::{Account, Client, Credentials, Manager};
pub use movie::Movie;
pub use screening::Screening;
pub use showroom::Showroom;
pub use ticket::Ticket;
