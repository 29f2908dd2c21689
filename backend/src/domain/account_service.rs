use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;
use tracing::{info, warn};

use crate::domain::commands::account::RegisterClientCommand;
use crate::domain::errors::{TheaterError, TheaterResult, ValidationError};
use crate::domain::events::{EventPublisher, TheaterEvent};
use crate::domain::models::account::is_reserved_username;
use crate::domain::models::{Account, Client, Manager};
use crate::storage::{ClientRepository, ClientStorage};

/// Service for the manager account, client registry and login
#[derive(Clone)]
pub struct AccountService {
    manager: Manager,
    client_repository: ClientRepository,
    events: EventPublisher,
}

impl AccountService {
    /// The manager account is created here, once, from the given credentials
    pub fn new(manager: Manager, client_repository: ClientRepository, events: EventPublisher) -> Self {
        info!("Initialising account service with manager {}", manager.username());
        Self {
            manager,
            client_repository,
            events,
        }
    }

    /// Register a client; fails if the username is taken or reserved
    pub fn add_client(&self, client: Client) -> TheaterResult<()> {
        info!("Adding client: {}", client.username());

        let username = client.username().to_string();
        if is_reserved_username(&username) || username == self.manager.username() {
            warn!("Rejected reserved username: {}", username);
            return Err(TheaterError::Duplicate { username });
        }
        if !self.client_repository.store_client(client) {
            warn!("Client already exists: {}", username);
            return Err(TheaterError::Duplicate { username });
        }

        self.events.publish(TheaterEvent::ClientAdded { username });
        Ok(())
    }

    /// Sign-up workflow: field checks, then `add_client`
    pub fn register_client(&self, command: RegisterClientCommand) -> TheaterResult<Client> {
        info!("Registering client: {}", command.username);

        let username = command.username.trim();
        let email = command.email.trim();
        let password = command.password.trim();
        let confirm_password = command.confirm_password.trim();

        if username.is_empty() {
            return Err(ValidationError::Blank { field: "Username" }.into());
        }
        if email.is_empty() {
            return Err(ValidationError::Blank { field: "Email" }.into());
        }
        if password.is_empty() || confirm_password.is_empty() {
            return Err(ValidationError::Blank { field: "Password" }.into());
        }
        if !is_valid_email(email) {
            return Err(ValidationError::InvalidEmail.into());
        }
        if password != confirm_password {
            return Err(ValidationError::PasswordMismatch.into());
        }
        if is_reserved_username(username) {
            return Err(ValidationError::ReservedUsername(username.to_string()).into());
        }

        let client = Client::new(username, password, email)?;
        self.add_client(client.clone())?;

        info!("Registered client: {}", client.username());
        Ok(client)
    }

    pub fn get_manager(&self) -> &Manager {
        &self.manager
    }

    pub fn get_clients(&self) -> Vec<Client> {
        self.client_repository.list_clients()
    }

    pub fn get_client(&self, username: &str) -> Option<Client> {
        self.client_repository.find_client(username)
    }

    /// Replace the registry; `None` clears it.
    ///
    /// The whole list is checked first: a repeated or reserved username leaves
    /// the current registry untouched.
    pub fn set_clients(&self, clients: Option<Vec<Client>>) -> TheaterResult<()> {
        let clients = clients.unwrap_or_default();
        info!("Replacing client registry with {} clients", clients.len());

        let mut seen = HashSet::with_capacity(clients.len());
        for client in &clients {
            let username = client.username();
            if is_reserved_username(username) || username == self.manager.username() || !seen.insert(username) {
                warn!("Rejected client list, username not available: {}", username);
                return Err(TheaterError::Duplicate {
                    username: username.to_string(),
                });
            }
        }

        self.client_repository.replace_all_clients(clients);
        self.events.publish(TheaterEvent::ClientsReplaced);
        Ok(())
    }

    /// Exact username and password match, manager first. Never errors.
    pub fn login(&self, username: &str, password: &str) -> Option<Account> {
        info!("Login attempt for {}", username);

        if self.manager.credentials().matches(username, password) {
            info!("Manager logged in");
            return Some(Account::Manager(self.manager.clone()));
        }

        let account = self
            .client_repository
            .find_client(username)
            .filter(|c| c.credentials().matches(username, password))
            .map(Account::Client);

        if account.is_none() {
            warn!("Login failed for {}", username);
        }
        account
    }
}

/// Non-empty local part, one '@', and a dot somewhere after it
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@]+@[^@]+\.[^@]+$").expect("email pattern compiles"));

fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}
