pub mod account_mapper;
pub mod movie_mapper;
pub mod showroom_mapper;
pub mod stats_mapper;
pub mod ticket_mapper;

pub use account_mapper::AccountMapper;
pub use movie_mapper::MovieMapper;
pub use showroom_mapper::{ScreeningMapper, ShowroomMapper};
pub use stats_mapper::StatsMapper;
pub use ticket_mapper::TicketMapper;
