//! Domain models for accounts: the single manager and registered clients.
//!
//! Passwords are kept and compared in plain text.
use crate::domain::errors::ValidationError;

/// Username no client may claim, compared case-insensitively
pub const RESERVED_USERNAME: &str = "manager";

/// Username and password pair shared by every kind of account
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    pub fn new(username: &str, password: &str) -> Result<Self, ValidationError> {
        Self::validate_username(username)?;
        if password.trim().is_empty() {
            return Err(ValidationError::Blank { field: "Password" });
        }
        Ok(Self {
            username: username.to_string(),
            password: password.to_string(),
        })
    }

    pub fn validate_username(username: &str) -> Result<(), ValidationError> {
        if username.trim().is_empty() {
            return Err(ValidationError::Blank { field: "Username" });
        }
        if !username.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Err(ValidationError::InvalidUsername);
        }
        Ok(())
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn matches(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password == password
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manager {
    credentials: Credentials,
}

impl Manager {
    pub fn new(username: &str, password: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            credentials: Credentials::new(username, password)?,
        })
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn username(&self) -> &str {
        self.credentials.username()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Client {
    credentials: Credentials,
    email: String,
}

impl Client {
    pub fn new(username: &str, password: &str, email: &str) -> Result<Self, ValidationError> {
        let credentials = Credentials::new(username, password)?;
        if email.trim().is_empty() {
            return Err(ValidationError::Blank { field: "Email" });
        }
        Ok(Self {
            credentials,
            email: email.trim().to_string(),
        })
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn username(&self) -> &str {
        self.credentials.username()
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

/// Result of a successful login
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Account {
    Manager(Manager),
    Client(Client),
}

impl Account {
    pub fn username(&self) -> &str {
        match self {
            Account::Manager(manager) => manager.username(),
            Account::Client(client) => client.username(),
        }
    }

    pub fn is_manager(&self) -> bool {
        matches!(self, Account::Manager(_))
    }
}

/// True for "manager" in any letter case
pub fn is_reserved_username(username: &str) -> bool {
    username.trim().eq_ignore_ascii_case(RESERVED_USERNAME)
}
