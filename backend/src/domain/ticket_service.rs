//! Ticket sales.
//!
//! Every ticket in the registry points at a screening hosted by some showroom
//! and at a registered client. Both references are checked when a ticket is
//! sold or the registry is replaced.

use std::collections::HashSet;
use tracing::{info, warn};

use crate::domain::errors::{TheaterError, TheaterResult};
use crate::domain::events::{EventPublisher, TheaterEvent};
use crate::domain::models::{Screening, Ticket};
use crate::domain::{AccountService, ShowroomService};
use crate::storage::{TicketRepository, TicketStorage};

#[derive(Clone)]
pub struct TicketService {
    ticket_repository: TicketRepository,
    showroom_service: ShowroomService,
    account_service: AccountService,
    events: EventPublisher,
}

impl TicketService {
    pub fn new(
        ticket_repository: TicketRepository,
        showroom_service: ShowroomService,
        account_service: AccountService,
        events: EventPublisher,
    ) -> Self {
        Self {
            ticket_repository,
            showroom_service,
            account_service,
            events,
        }
    }

    /// Sell one ticket for a screening at its list price
    pub fn sell_ticket(&self, screening_id: &str, username: &str) -> TheaterResult<Ticket> {
        info!("Selling ticket for screening {} to {}", screening_id, username);

        let screening = self.find_screening(screening_id)?;
        let client = self.account_service.get_client(username).ok_or_else(|| {
            warn!("Client not found: {}", username);
            TheaterError::NotFound {
                entity: "Client",
                id: username.to_string(),
            }
        })?;

        let ticket = Ticket::new(&screening, screening.price_per_ticket(), &client)?;
        self.store(ticket.clone());
        Ok(ticket)
    }

    /// Record an already built ticket, e.g. one sold at a custom price
    pub fn add_ticket(&self, ticket: Ticket) -> TheaterResult<Ticket> {
        info!("Adding ticket {} for {}", ticket.id(), ticket.client_username());

        let hosted = self.hosted_screening_ids();
        self.check_references(&ticket, &hosted)?;

        self.store(ticket.clone());
        Ok(ticket)
    }

    /// Tickets in sale order
    pub fn get_tickets(&self) -> Vec<Ticket> {
        self.ticket_repository.list_tickets()
    }

    pub fn get_tickets_for_client(&self, username: &str) -> Vec<Ticket> {
        self.get_tickets()
            .into_iter()
            .filter(|t| t.client_username() == username)
            .collect()
    }

    pub fn get_tickets_for_screening(&self, screening_id: &str) -> Vec<Ticket> {
        self.get_tickets()
            .into_iter()
            .filter(|t| t.screening_id() == screening_id)
            .collect()
    }

    /// Bulk replace the registry. Nothing changes if any ticket points at an
    /// unknown screening or client.
    pub fn set_tickets(&self, tickets: Vec<Ticket>) -> TheaterResult<()> {
        info!("Replacing ticket registry with {} tickets", tickets.len());

        let hosted = self.hosted_screening_ids();
        for ticket in &tickets {
            self.check_references(ticket, &hosted)?;
        }

        self.ticket_repository.replace_all_tickets(tickets);
        self.events.publish(TheaterEvent::TicketsReplaced);
        Ok(())
    }

    fn store(&self, ticket: Ticket) {
        let ticket_id = ticket.id().to_string();
        self.ticket_repository.store_ticket(ticket);
        self.events.publish(TheaterEvent::TicketSold { ticket_id });
    }

    fn find_screening(&self, screening_id: &str) -> TheaterResult<Screening> {
        self.showroom_service
            .get_all_screenings()
            .into_iter()
            .find(|s| s.id() == screening_id)
            .ok_or_else(|| {
                warn!("Screening not found: {}", screening_id);
                TheaterError::NotFound {
                    entity: "Screening",
                    id: screening_id.to_string(),
                }
            })
    }

    fn hosted_screening_ids(&self) -> HashSet<String> {
        self.showroom_service
            .get_all_screenings()
            .iter()
            .map(|s| s.id().to_string())
            .collect()
    }

    fn check_references(&self, ticket: &Ticket, hosted: &HashSet<String>) -> TheaterResult<()> {
        if !hosted.contains(ticket.screening_id()) {
            warn!("Ticket {} points at unknown screening {}", ticket.id(), ticket.screening_id());
            return Err(TheaterError::NotFound {
                entity: "Screening",
                id: ticket.screening_id().to_string(),
            });
        }
        if self.account_service.get_client(ticket.client_username()).is_none() {
            warn!("Ticket {} points at unknown client {}", ticket.id(), ticket.client_username());
            return Err(TheaterError::NotFound {
                entity: "Client",
                id: ticket.client_username().to_string(),
            });
        }
        Ok(())
    }
}
