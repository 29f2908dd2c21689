use shared::{AccountDto, AccountRole, LoginRequest, LoginResponse, RegisterClientRequest};

use crate::domain::commands::account::RegisterClientCommand;
use crate::domain::models::Account;
use crate::domain::AccountService;

pub struct AccountMapper;

impl AccountMapper {
    /// Passwords never leave the domain
    pub fn to_dto(account: &Account) -> AccountDto {
        match account {
            Account::Manager(manager) => AccountDto {
                username: manager.username().to_string(),
                role: AccountRole::Manager,
                email: None,
            },
            Account::Client(client) => AccountDto {
                username: client.username().to_string(),
                role: AccountRole::Client,
                email: Some(client.email().to_string()),
            },
        }
    }

    pub fn to_login_response(account: Option<Account>) -> LoginResponse {
        match account {
            Some(account) => LoginResponse {
                message: format!("Welcome, {}", account.username()),
                account: Some(Self::to_dto(&account)),
            },
            None => LoginResponse {
                account: None,
                message: "Invalid username or password".to_string(),
            },
        }
    }

    /// Run a login request against the account service and map the outcome
    pub fn handle_login(account_service: &AccountService, request: &LoginRequest) -> LoginResponse {
        Self::to_login_response(account_service.login(&request.username, &request.password))
    }

    pub fn to_register_command(request: RegisterClientRequest) -> RegisterClientCommand {
        RegisterClientCommand {
            username: request.username.trim().to_string(),
            email: request.email.trim().to_string(),
            password: request.password,
            confirm_password: request.confirm_password,
        }
    }
}
