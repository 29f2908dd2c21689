use shared::TicketDto;

use crate::domain::models::Ticket;

pub struct TicketMapper;

impl TicketMapper {
    pub fn to_dto(ticket: &Ticket) -> TicketDto {
        TicketDto {
            id: ticket.id().to_string(),
            screening_id: ticket.screening_id().to_string(),
            movie_title: ticket.movie().title().to_string(),
            price: ticket.price(),
            client_username: ticket.client_username().to_string(),
        }
    }

    pub fn to_dto_list(tickets: &[Ticket]) -> Vec<TicketDto> {
        tickets.iter().map(Self::to_dto).collect()
    }
}
