//! Showroom registry and cross-showroom screening queries.
//!
//! Updates are all-or-nothing: every change runs against a copy of the stored
//! showroom under the registry's write lock and is kept only if all of its
//! validations pass. A change event is published after each committed write.

use tracing::{info, warn};

use crate::domain::errors::{TheaterError, TheaterResult};
use crate::domain::events::{EventPublisher, TheaterEvent};
use crate::domain::models::{Movie, Screening, Showroom};
use crate::storage::{ShowroomRepository, ShowroomStorage};

#[derive(Clone)]
pub struct ShowroomService {
    showroom_repository: ShowroomRepository,
    events: EventPublisher,
    default_ticket_price: f64,
}

impl ShowroomService {
    pub fn new(showroom_repository: ShowroomRepository, events: EventPublisher, default_ticket_price: f64) -> Self {
        Self {
            showroom_repository,
            events,
            default_ticket_price,
        }
    }

    /// Validate and register a new showroom
    pub fn create_showroom(&self, name: &str, capacity: u32, screenings: Vec<Screening>) -> TheaterResult<Showroom> {
        info!("Creating showroom: name={}, capacity={}", name, capacity);

        let showroom = Showroom::new(name, capacity, screenings).map_err(|e| {
            warn!("Rejected showroom {:?}: {}", name, e);
            e
        })?;

        self.showroom_repository.store_showroom(showroom.clone());
        self.events.publish(TheaterEvent::ShowroomCreated {
            showroom_id: showroom.id().to_string(),
        });

        info!("Created showroom: {} with ID: {}", showroom.name(), showroom.id());
        Ok(showroom)
    }

    /// Rename, resize and replace the screening list of an existing showroom.
    ///
    /// The showroom keeps its id and registry position.
    pub fn update_showroom(
        &self,
        showroom_id: &str,
        name: &str,
        capacity: u32,
        screenings: Vec<Screening>,
    ) -> TheaterResult<Showroom> {
        info!("Updating showroom: {}", showroom_id);

        let showroom = self.modify(showroom_id, |showroom| {
            showroom.set_name(name)?;
            showroom.set_capacity(capacity)?;
            showroom.replace_screenings(screenings);
            Ok(showroom.clone())
        })?;

        self.events.publish(TheaterEvent::ShowroomUpdated {
            showroom_id: showroom_id.to_string(),
        });
        Ok(showroom)
    }

    /// Returns false, without error, if the showroom is unknown
    pub fn remove_showroom(&self, showroom_id: &str) -> bool {
        info!("Removing showroom: {}", showroom_id);

        let removed = self.showroom_repository.delete_showroom(showroom_id);
        if removed {
            self.events.publish(TheaterEvent::ShowroomRemoved {
                showroom_id: showroom_id.to_string(),
            });
        } else {
            warn!("Showroom not found: {}", showroom_id);
        }
        removed
    }

    /// Register an already-built showroom
    pub fn add_showroom(&self, showroom: Showroom) {
        info!("Adding showroom: {}", showroom.name());

        let showroom_id = showroom.id().to_string();
        self.showroom_repository.store_showroom(showroom);
        self.events.publish(TheaterEvent::ShowroomCreated { showroom_id });
    }

    pub fn get_showrooms(&self) -> Vec<Showroom> {
        self.showroom_repository.list_showrooms()
    }

    pub fn get_showroom(&self, showroom_id: &str) -> Option<Showroom> {
        self.showroom_repository.get_showroom(showroom_id)
    }

    pub fn set_showrooms(&self, showrooms: Vec<Showroom>) {
        info!("Replacing showrooms with {} entries", showrooms.len());

        self.showroom_repository.replace_all_showrooms(showrooms);
        self.events.publish(TheaterEvent::ShowroomsReplaced);
    }

    /// Append a screening to a showroom's list.
    ///
    /// A screening belongs to one showroom: an id already hosted anywhere is refused.
    pub fn add_screening(&self, showroom_id: &str, screening: Screening) -> TheaterResult<Screening> {
        info!("Adding screening of {} to showroom {}", screening.movie().title(), showroom_id);

        match self.showroom_repository.insert_screening(showroom_id, screening.clone()) {
            Some(true) => {}
            Some(false) => {
                warn!("Screening already hosted: {}", screening.id());
                return Err(TheaterError::AlreadyRegistered {
                    entity: "Screening",
                    id: screening.id().to_string(),
                });
            }
            None => {
                warn!("Showroom not found: {}", showroom_id);
                return Err(TheaterError::NotFound {
                    entity: "Showroom",
                    id: showroom_id.to_string(),
                });
            }
        }

        self.events.publish(TheaterEvent::ScreeningAdded {
            showroom_id: showroom_id.to_string(),
            screening_id: screening.id().to_string(),
        });
        Ok(screening)
    }

    /// Apply `change` to one screening of a showroom, all-or-nothing
    pub fn modify_screening<F>(&self, showroom_id: &str, screening_id: &str, change: F) -> TheaterResult<Screening>
    where
        F: FnOnce(&mut Screening) -> TheaterResult<()>,
    {
        info!("Updating screening {} in showroom {}", screening_id, showroom_id);

        let screening = self.modify(showroom_id, |showroom| {
            let mut screening = showroom.screening(screening_id).cloned().ok_or_else(|| {
                warn!("Screening not found: {}", screening_id);
                TheaterError::NotFound {
                    entity: "Screening",
                    id: screening_id.to_string(),
                }
            })?;
            change(&mut screening)?;
            showroom.replace_screening(screening.clone());
            Ok(screening)
        })?;

        self.events.publish(TheaterEvent::ScreeningUpdated {
            showroom_id: showroom_id.to_string(),
            screening_id: screening_id.to_string(),
        });
        Ok(screening)
    }

    /// Returns false, without error, if the showroom or the screening is unknown
    pub fn remove_screening(&self, showroom_id: &str, screening_id: &str) -> bool {
        info!("Removing screening {} from showroom {}", screening_id, showroom_id);

        let result = self.showroom_repository.modify_showroom(showroom_id, |showroom| {
            if showroom.remove_screening(screening_id) {
                Ok(())
            } else {
                Err(())
            }
        });

        match result {
            Some(Ok(())) => {
                self.events.publish(TheaterEvent::ScreeningRemoved {
                    showroom_id: showroom_id.to_string(),
                    screening_id: screening_id.to_string(),
                });
                true
            }
            Some(Err(())) => {
                warn!("Screening not found: {}", screening_id);
                false
            }
            None => {
                warn!("Showroom not found: {}", showroom_id);
                false
            }
        }
    }

    /// Every screening, in showroom order then insertion order
    pub fn get_all_screenings(&self) -> Vec<Screening> {
        self.showroom_repository
            .list_showrooms()
            .into_iter()
            .flat_map(|showroom| showroom.screenings().to_vec())
            .collect()
    }

    /// Screenings whose movie has the same title as `movie`.
    ///
    /// Matching is by title, so two distinct catalog entries with one title
    /// count as the same movie. `None` yields an empty list.
    pub fn get_screening_for(&self, movie: Option<&Movie>) -> Vec<Screening> {
        let Some(movie) = movie else {
            return Vec::new();
        };

        self.get_all_screenings()
            .into_iter()
            .filter(|s| s.movie().title() == movie.title())
            .collect()
    }

    /// Price used to pre-fill new screening forms
    pub fn get_default_ticket_price(&self) -> f64 {
        self.default_ticket_price
    }

    fn modify<T, F>(&self, showroom_id: &str, change: F) -> TheaterResult<T>
    where
        F: FnOnce(&mut Showroom) -> TheaterResult<T>,
    {
        self.showroom_repository
            .modify_showroom(showroom_id, change)
            .unwrap_or_else(|| {
                warn!("Showroom not found: {}", showroom_id);
                Err(TheaterError::NotFound {
                    entity: "Showroom",
                    id: showroom_id.to_string(),
                })
            })
    }
}
