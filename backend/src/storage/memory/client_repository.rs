use std::sync::{Arc, RwLock};

use super::{read, write};
use crate::domain::models::Client;
use crate::storage::traits::ClientStorage;

/// Registered clients held in memory
#[derive(Clone, Default)]
pub struct ClientRepository {
    clients: Arc<RwLock<Vec<Client>>>,
}

impl ClientRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ClientStorage for ClientRepository {
    fn store_client(&self, client: Client) -> bool {
        let mut clients = write(&self.clients);
        if clients.iter().any(|c| c.username() == client.username()) {
            return false;
        }
        clients.push(client);
        true
    }

    fn find_client(&self, username: &str) -> Option<Client> {
        read(&self.clients).iter().find(|c| c.username() == username).cloned()
    }

    fn list_clients(&self) -> Vec<Client> {
        read(&self.clients).clone()
    }

    fn replace_all_clients(&self, clients: Vec<Client>) {
        *write(&self.clients) = clients;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(username: &str) -> Client {
        Client::new(username, "secret", "someone@example.com").expect("valid client")
    }

    #[test]
    fn test_store_rejects_taken_username() {
        let repo = ClientRepository::new();

        assert!(repo.store_client(client("jane")));
        assert!(!repo.store_client(client("jane")));
        assert!(repo.store_client(client("Jane")));
        assert_eq!(repo.list_clients().len(), 2);
    }

    #[test]
    fn test_find_client() {
        let repo = ClientRepository::new();
        repo.store_client(client("jane"));

        assert!(repo.find_client("jane").is_some());
        assert!(repo.find_client("john").is_none());
    }
}
