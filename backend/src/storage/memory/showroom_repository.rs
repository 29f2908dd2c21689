use std::sync::{Arc, RwLock};
use tracing::debug;

use super::{read, write};
use crate::domain::models::{Screening, Showroom};
use crate::storage::traits::ShowroomStorage;

/// Showrooms held in memory, in creation order
#[derive(Clone, Default)]
pub struct ShowroomRepository {
    showrooms: Arc<RwLock<Vec<Showroom>>>,
}

impl ShowroomRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ShowroomStorage for ShowroomRepository {
    fn store_showroom(&self, showroom: Showroom) {
        debug!("Storing showroom {}", showroom.id());
        write(&self.showrooms).push(showroom);
    }

    fn get_showroom(&self, showroom_id: &str) -> Option<Showroom> {
        read(&self.showrooms).iter().find(|s| s.id() == showroom_id).cloned()
    }

    fn list_showrooms(&self) -> Vec<Showroom> {
        read(&self.showrooms).clone()
    }

    fn modify_showroom<T, E, F>(&self, showroom_id: &str, change: F) -> Option<Result<T, E>>
    where
        F: FnOnce(&mut Showroom) -> Result<T, E>,
    {
        let mut showrooms = write(&self.showrooms);
        let slot = showrooms.iter_mut().find(|s| s.id() == showroom_id)?;

        let mut draft = slot.clone();
        let result = change(&mut draft);
        if result.is_ok() {
            *slot = draft;
        }
        Some(result)
    }

    fn insert_screening(&self, showroom_id: &str, screening: Screening) -> Option<bool> {
        let mut showrooms = write(&self.showrooms);
        if !showrooms.iter().any(|s| s.id() == showroom_id) {
            return None;
        }
        if showrooms.iter().any(|s| s.screening(screening.id()).is_some()) {
            debug!("Screening {} is already hosted", screening.id());
            return Some(false);
        }

        let showroom = showrooms.iter_mut().find(|s| s.id() == showroom_id)?;
        showroom.add_screening(screening);
        Some(true)
    }

    fn delete_showroom(&self, showroom_id: &str) -> bool {
        let mut showrooms = write(&self.showrooms);
        let before = showrooms.len();
        showrooms.retain(|s| s.id() != showroom_id);
        showrooms.len() != before
    }

    fn replace_all_showrooms(&self, showrooms: Vec<Showroom>) {
        *write(&self.showrooms) = showrooms;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::Movie;
    use chrono::Duration;

    fn showroom(name: &str) -> Showroom {
        Showroom::new(name, 100, vec![]).expect("valid showroom")
    }

    #[test]
    fn test_modify_in_place() {
        let repo = ShowroomRepository::new();
        let first = showroom("A");
        repo.store_showroom(first.clone());
        repo.store_showroom(showroom("B"));

        let result = repo.modify_showroom(first.id(), |s| s.set_name("A renamed"));
        assert_eq!(result, Some(Ok(())));

        let names: Vec<String> = repo.list_showrooms().iter().map(|s| s.name().to_string()).collect();
        assert_eq!(names, vec!["A renamed", "B"]);
    }

    #[test]
    fn test_failed_modify_discards_partial_changes() {
        let repo = ShowroomRepository::new();
        let first = showroom("A");
        repo.store_showroom(first.clone());

        let result = repo.modify_showroom(first.id(), |s| {
            s.set_name("Half done")?;
            s.set_capacity(0)
        });

        assert!(matches!(result, Some(Err(_))));
        assert_eq!(repo.get_showroom(first.id()), Some(first));
    }

    #[test]
    fn test_modify_unknown_showroom() {
        let repo = ShowroomRepository::new();
        let result: Option<Result<(), ()>> = repo.modify_showroom("showroom::ghost", |_| Ok(()));
        assert!(result.is_none());
    }

    #[test]
    fn test_insert_screening_once_across_showrooms() {
        let repo = ShowroomRepository::new();
        let first = showroom("A");
        let second = showroom("B");
        repo.store_showroom(first.clone());
        repo.store_showroom(second.clone());

        let movie = Arc::new(Movie::new("Drama", "Heat", "Michael Mann", 1995, "Crime", 170).expect("valid movie"));
        let screening =
            Screening::new(movie, 10, 9.0, Screening::now() + Duration::days(1)).expect("valid screening");

        assert_eq!(repo.insert_screening(first.id(), screening.clone()), Some(true));
        assert_eq!(repo.insert_screening(second.id(), screening.clone()), Some(false));
        assert_eq!(repo.insert_screening(first.id(), screening.clone()), Some(false));
        assert_eq!(repo.insert_screening("showroom::ghost", screening), None);

        let hosted: Vec<usize> = repo.list_showrooms().iter().map(|s| s.screenings().len()).collect();
        assert_eq!(hosted, vec![1, 0]);
    }

    #[test]
    fn test_delete_and_replace_all() {
        let repo = ShowroomRepository::new();
        let doomed = showroom("A");
        repo.store_showroom(doomed.clone());

        assert!(repo.delete_showroom(doomed.id()));
        assert!(!repo.delete_showroom(doomed.id()));

        repo.replace_all_showrooms(vec![showroom("X"), showroom("Y")]);
        assert_eq!(repo.list_showrooms().len(), 2);
        assert!(repo.get_showroom(doomed.id()).is_none());
    }
}
