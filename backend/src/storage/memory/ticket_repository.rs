use std::sync::{Arc, RwLock};
use tracing::debug;

use super::{read, write};
use crate::domain::models::Ticket;
use crate::storage::traits::TicketStorage;

/// Sold tickets held in memory
#[derive(Clone, Default)]
pub struct TicketRepository {
    tickets: Arc<RwLock<Vec<Ticket>>>,
}

impl TicketRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TicketStorage for TicketRepository {
    fn store_ticket(&self, ticket: Ticket) {
        debug!("Storing ticket {}", ticket.id());
        write(&self.tickets).push(ticket);
    }

    fn list_tickets(&self) -> Vec<Ticket> {
        read(&self.tickets).clone()
    }

    fn replace_all_tickets(&self, tickets: Vec<Ticket>) {
        *write(&self.tickets) = tickets;
    }
}
