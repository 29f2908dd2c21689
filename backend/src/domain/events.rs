//! Change notifications for the theater registries.
//!
//! Services publish a [`TheaterEvent`] after every committed mutation. A UI
//! subscribes and refreshes whatever views depend on the changed registry,
//! instead of observing the collections directly.

use tokio::sync::broadcast;
use tracing::trace;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TheaterEvent {
    MovieAdded { movie_id: String },
    MovieReplaced { movie_id: String },
    MovieRemoved { movie_id: String },
    MoviesReplaced,
    ShowroomCreated { showroom_id: String },
    ShowroomUpdated { showroom_id: String },
    ShowroomRemoved { showroom_id: String },
    ShowroomsReplaced,
    ScreeningAdded { showroom_id: String, screening_id: String },
    ScreeningUpdated { showroom_id: String, screening_id: String },
    ScreeningRemoved { showroom_id: String, screening_id: String },
    ClientAdded { username: String },
    ClientsReplaced,
    TicketSold { ticket_id: String },
    TicketsReplaced,
}

/// Fan-out publisher shared by all services
#[derive(Clone)]
pub struct EventPublisher {
    sender: broadcast::Sender<TheaterEvent>,
}

impl EventPublisher {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<TheaterEvent> {
        self.sender.subscribe()
    }

    /// Sending with no subscribers is not an error
    pub fn publish(&self, event: TheaterEvent) {
        trace!("Publishing {:?}", event);
        let _ = self.sender.send(event);
    }
}

impl Default for EventPublisher {
    fn default() -> Self {
        Self::new(64)
    }
}
