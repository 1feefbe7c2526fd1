//! Registration and login flows against an account directory.
//!
//! The directory is a seam: the browser talks to the site's account API,
//! tests use [`MemoryDirectory`]. Passwords are compared in plaintext by the
//! in-memory directory only; it is a stand-in, not a credential store.

use std::cell::RefCell;

use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

pub const ADMIN_EMAIL_DOMAIN: &str = "@academy.edu";
pub const ADMIN_DASHBOARD_PATH: &str = "/dashboard/admin";
pub const USER_DASHBOARD_PATH: &str = "/dashboard/user";
pub const CONFIRMATION_PATH: &str = "/register/confirmation";
/// Stands in for a real session token until the API issues one.
pub const PLACEHOLDER_TOKEN: &str = "fake-jwt-token";
pub const MIN_PASSWORD_LEN: usize = 8;
pub const LOGIN_REDIRECT_DELAY_MS: u32 = 1_500;
pub const REGISTER_REDIRECT_DELAY_MS: u32 = 2_000;
pub const REGISTRATION_SUCCESS_MESSAGE: &str =
    "Registration successful! Please check your email to confirm.";

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, TS)]
#[ts(export, export_to = "../../academy-desktop/src/types/generated.ts")]
pub enum Role {
    Admin,
    User,
}

impl Role {
    /// Staff addresses get the admin role; everyone else is a user.
    pub fn for_email(email: &str) -> Self {
        if email.ends_with(ADMIN_EMAIL_DOMAIN) {
            Role::Admin
        } else {
            Role::User
        }
    }

    pub fn parse(role: &str) -> Option<Self> {
        match role {
            "Admin" => Some(Role::Admin),
            "User" => Some(Role::User),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::User => "User",
        }
    }

    pub fn dashboard_path(self) -> &'static str {
        match self {
            Role::Admin => ADMIN_DASHBOARD_PATH,
            Role::User => USER_DASHBOARD_PATH,
        }
    }

    pub fn greeting(self) -> &'static str {
        match self {
            Role::Admin => "Welcome Admin! Redirecting to Admin Dashboard...",
            Role::User => "Welcome User! Redirecting to User Dashboard...",
        }
    }
}

/// Account as stored at registration. `role` is kept as text because
/// directories may hand back roles this client does not know.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, TS)]
#[ts(export, export_to = "../../academy-desktop/src/types/generated.ts")]
pub struct UserRecord {
    pub email: String,
    pub password: String,
    pub role: String,
    pub verified: bool,
}

impl UserRecord {
    pub fn unverified(email: &str, password: &str, role: Role) -> Self {
        Self {
            email: email.to_string(),
            password: password.to_string(),
            role: role.as_str().to_string(),
            verified: false,
        }
    }
}

/// What a directory returns for matching credentials.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Account {
    pub email: String,
    pub role: String,
    #[serde(default)]
    pub token: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DirectoryError {
    #[error("This email is already registered.")]
    EmailTaken,
    #[error("{0}")]
    Unavailable(String),
}

#[async_trait(?Send)]
pub trait AccountDirectory {
    async fn contains(&self, email: &str) -> Result<bool, DirectoryError>;

    async fn insert(&self, record: &UserRecord) -> Result<(), DirectoryError>;

    /// `Ok(None)` for an unknown email or a wrong password.
    async fn verify(&self, email: &str, password: &str) -> Result<Option<Account>, DirectoryError>;
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistrationError {
    #[error("Email and password are required.")]
    MissingFields,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    #[error("Password must be at least 8 characters, include uppercase, lowercase, and a number.")]
    WeakPassword,
    #[error("This email is already registered.")]
    EmailTaken,
    #[error("Registration failed: {0}")]
    Directory(String),
}

impl From<DirectoryError> for RegistrationError {
    fn from(e: DirectoryError) -> Self {
        match e {
            DirectoryError::EmailTaken => RegistrationError::EmailTaken,
            DirectoryError::Unavailable(msg) => RegistrationError::Directory(msg),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoginError {
    #[error("Invalid login credentials.")]
    InvalidCredentials,
    #[error("Invalid user role.")]
    UnknownRole(String),
    #[error("Login failed: {0}")]
    Directory(String),
}

impl From<DirectoryError> for LoginError {
    fn from(e: DirectoryError) -> Self {
        LoginError::Directory(e.to_string())
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// At least eight characters with an ASCII lowercase letter, an ASCII
/// uppercase letter and a digit.
pub fn meets_password_policy(password: &str) -> bool {
    password.chars().count() >= MIN_PASSWORD_LEN
        && password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_digit())
}

/// Field checks in the order the form reports them.
pub fn validate_registration(email: &str, password: &str) -> Result<(), RegistrationError> {
    if email.is_empty() || password.is_empty() {
        return Err(RegistrationError::MissingFields);
    }
    if !is_valid_email(email) {
        return Err(RegistrationError::InvalidEmail);
    }
    if !meets_password_policy(password) {
        return Err(RegistrationError::WeakPassword);
    }
    Ok(())
}

/// Validates the form, rejects known emails and stores a new unverified account.
pub async fn register<D>(directory: &D, email: &str, password: &str) -> Result<UserRecord, RegistrationError>
where
    D: AccountDirectory + ?Sized,
{
    let email = email.trim();
    let password = password.trim();
    validate_registration(email, password)?;

    if directory.contains(email).await? {
        return Err(RegistrationError::EmailTaken);
    }

    let record = UserRecord::unverified(email, password, Role::for_email(email));
    directory.insert(&record).await?;
    Ok(record)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginOutcome {
    pub email: String,
    pub role: Role,
    pub token: String,
}

impl LoginOutcome {
    pub fn redirect_path(&self) -> &'static str {
        self.role.dashboard_path()
    }

    pub fn greeting(&self) -> &'static str {
        self.role.greeting()
    }
}

pub async fn login<D>(directory: &D, email: &str, password: &str) -> Result<LoginOutcome, LoginError>
where
    D: AccountDirectory + ?Sized,
{
    let email = email.trim();
    let password = password.trim();

    let account = directory
        .verify(email, password)
        .await?
        .ok_or(LoginError::InvalidCredentials)?;

    let role = Role::parse(&account.role).ok_or_else(|| LoginError::UnknownRole(account.role.clone()))?;
    Ok(LoginOutcome {
        email: account.email,
        role,
        token: account.token.unwrap_or_else(|| PLACEHOLDER_TOKEN.to_string()),
    })
}

/// Ordered in-memory directory.
#[derive(Debug, Default)]
pub struct MemoryDirectory {
    users: RefCell<Vec<UserRecord>>,
}

impl MemoryDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_users(users: Vec<UserRecord>) -> Self {
        Self {
            users: RefCell::new(users),
        }
    }

    pub fn records(&self) -> Vec<UserRecord> {
        self.users.borrow().clone()
    }
}

#[async_trait(?Send)]
impl AccountDirectory for MemoryDirectory {
    async fn contains(&self, email: &str) -> Result<bool, DirectoryError> {
        Ok(self.users.borrow().iter().any(|u| u.email == email))
    }

    async fn insert(&self, record: &UserRecord) -> Result<(), DirectoryError> {
        self.users.borrow_mut().push(record.clone());
        Ok(())
    }

    async fn verify(&self, email: &str, password: &str) -> Result<Option<Account>, DirectoryError> {
        Ok(self
            .users
            .borrow()
            .iter()
            .find(|u| u.email == email)
            .filter(|u| u.password == password)
            .map(|u| Account {
                email: u.email.clone(),
                role: u.role.clone(),
                token: None,
            }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    fn seeded(role: &str) -> MemoryDirectory {
        MemoryDirectory::with_users(vec![UserRecord {
            email: "root@academy.edu".to_string(),
            password: "Sup3rSecret".to_string(),
            role: role.to_string(),
            verified: true,
        }])
    }

    #[test]
    fn rejects_malformed_email() {
        let dir = MemoryDirectory::new();
        assert_eq!(
            block_on(register(&dir, "bad", "Valid123")),
            Err(RegistrationError::InvalidEmail)
        );
        assert!(dir.records().is_empty());
    }

    #[test]
    fn rejects_weak_passwords() {
        let dir = MemoryDirectory::new();
        for password in ["short1A", "alllowercase1", "ALLUPPERCASE1", "NoDigitsHere"] {
            assert_eq!(
                block_on(register(&dir, "a@b.com", password)),
                Err(RegistrationError::WeakPassword),
                "{password}"
            );
        }
    }

    #[test]
    fn missing_fields_come_first() {
        let dir = MemoryDirectory::new();
        assert_eq!(
            block_on(register(&dir, "   ", "bad")),
            Err(RegistrationError::MissingFields)
        );
        assert_eq!(
            block_on(register(&dir, "a@b.com", "")),
            Err(RegistrationError::MissingFields)
        );
    }

    #[test]
    fn registration_stores_unverified_user() {
        let dir = MemoryDirectory::new();
        let record = block_on(register(&dir, " a@b.com ", "Valid123")).unwrap();
        assert_eq!(record, UserRecord::unverified("a@b.com", "Valid123", Role::User));
        assert_eq!(record.role, "User");
        assert!(!record.verified);
        assert_eq!(dir.records(), vec![record]);
    }

    #[test]
    fn academy_domain_is_admin() {
        let dir = MemoryDirectory::new();
        let record = block_on(register(&dir, "x@academy.edu", "Valid123")).unwrap();
        assert_eq!(record.role, "Admin");
    }

    #[test]
    fn duplicate_email_is_rejected() {
        let dir = MemoryDirectory::new();
        block_on(register(&dir, "a@b.com", "Valid123")).unwrap();
        assert_eq!(
            block_on(register(&dir, "a@b.com", "Other456X")),
            Err(RegistrationError::EmailTaken)
        );
        assert_eq!(dir.records().len(), 1);
    }

    #[test]
    fn admin_login_redirects_to_admin_dashboard() {
        let dir = seeded("Admin");
        let outcome = block_on(login(&dir, "root@academy.edu", "Sup3rSecret")).unwrap();
        assert_eq!(outcome.role, Role::Admin);
        assert_eq!(outcome.redirect_path(), ADMIN_DASHBOARD_PATH);
        assert_eq!(outcome.token, PLACEHOLDER_TOKEN);
    }

    #[test]
    fn user_login_redirects_to_user_dashboard() {
        let dir = MemoryDirectory::new();
        block_on(register(&dir, "a@b.com", "Valid123")).unwrap();
        let outcome = block_on(login(&dir, "a@b.com", "Valid123")).unwrap();
        assert_eq!(outcome.redirect_path(), USER_DASHBOARD_PATH);
        assert_eq!(outcome.greeting(), "Welcome User! Redirecting to User Dashboard...");
    }

    #[test]
    fn wrong_password_or_unknown_user_is_invalid_credentials() {
        let dir = seeded("Admin");
        let err = block_on(login(&dir, "root@academy.edu", "wrong")).unwrap_err();
        assert_eq!(err, LoginError::InvalidCredentials);
        assert_eq!(err.to_string(), "Invalid login credentials.");

        assert_eq!(
            block_on(login(&dir, "nobody@b.com", "Sup3rSecret")),
            Err(LoginError::InvalidCredentials)
        );
    }

    #[test]
    fn unrecognized_role_is_an_error() {
        let dir = seeded("Moderator");
        let err = block_on(login(&dir, "root@academy.edu", "Sup3rSecret")).unwrap_err();
        assert_eq!(err, LoginError::UnknownRole("Moderator".to_string()));
        assert_eq!(err.to_string(), "Invalid user role.");
    }

    #[test]
    fn directory_token_is_kept() {
        struct Issuing;

        #[async_trait(?Send)]
        impl AccountDirectory for Issuing {
            async fn contains(&self, _email: &str) -> Result<bool, DirectoryError> {
                Ok(false)
            }
            async fn insert(&self, _record: &UserRecord) -> Result<(), DirectoryError> {
                Err(DirectoryError::EmailTaken)
            }
            async fn verify(&self, email: &str, _password: &str) -> Result<Option<Account>, DirectoryError> {
                Ok(Some(Account {
                    email: email.to_string(),
                    role: "User".to_string(),
                    token: Some("issued".to_string()),
                }))
            }
        }

        let outcome = block_on(login(&Issuing, "a@b.com", "x")).unwrap();
        assert_eq!(outcome.token, "issued");

        // A race lost at insert time still surfaces as a duplicate.
        assert_eq!(
            block_on(register(&Issuing, "a@b.com", "Valid123")),
            Err(RegistrationError::EmailTaken)
        );
    }

    #[test]
    fn validation_messages_match_the_form() {
        assert_eq!(
            RegistrationError::WeakPassword.to_string(),
            "Password must be at least 8 characters, include uppercase, lowercase, and a number."
        );
        assert_eq!(
            RegistrationError::MissingFields.to_string(),
            "Email and password are required."
        );
    }
}
