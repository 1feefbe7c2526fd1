use async_trait::async_trait;
use serde::Deserialize;
use shared_types::{Account, AccountDirectory, DirectoryError, Role, UserRecord};

use crate::api::{describe_error_body, login_account, register_account};

/// Rejections the register endpoint uses for an account that already exists.
/// The email is also the username, so either one means the address is taken.
const DUPLICATE_ACCOUNT_ERRORS: [&str; 2] = ["Email already registered", "Username already taken"];

/// Account directory backed by the site's `POST /api/register/` and
/// `POST /api/login/`.
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpDirectory;

#[async_trait(?Send)]
impl AccountDirectory for HttpDirectory {
    /// The site only reports duplicates when inserting.
    async fn contains(&self, _email: &str) -> Result<bool, DirectoryError> {
        Ok(false)
    }

    async fn insert(&self, record: &UserRecord) -> Result<(), DirectoryError> {
        let (status, body) = register_account(record)
            .await
            .map_err(DirectoryError::Unavailable)?;
        insert_outcome(status, &body)
    }

    async fn verify(&self, email: &str, password: &str) -> Result<Option<Account>, DirectoryError> {
        let (status, body) = login_account(email, password)
            .await
            .map_err(DirectoryError::Unavailable)?;
        verify_outcome(email, status, &body)
    }
}

#[derive(Debug, Default, Deserialize)]
struct RegisterRejection {
    error: Option<String>,
    #[serde(default)]
    errors: Vec<String>,
}

/// Maps a register response. Password validator rejections arrive as an
/// `errors` list.
fn insert_outcome(status: u16, body: &str) -> Result<(), DirectoryError> {
    if (200..300).contains(&status) {
        return Ok(());
    }

    let rejection: RegisterRejection = serde_json::from_str(body).unwrap_or_default();
    if let Some(error) = rejection.error.as_deref() {
        if DUPLICATE_ACCOUNT_ERRORS.contains(&error) {
            return Err(DirectoryError::EmailTaken);
        }
    }
    if status == 400 && !rejection.errors.is_empty() {
        return Err(DirectoryError::Unavailable(rejection.errors.join(" ")));
    }
    Err(DirectoryError::Unavailable(describe_error_body(status, body)))
}

/// Fields a login reply may carry beyond its `message`.
#[derive(Debug, Default, Deserialize)]
struct LoginReply {
    role: Option<String>,
    token: Option<String>,
}

/// Maps a login response. The site answers `401` for bad credentials and does
/// not report a role, so the registration domain rule stands in for one.
fn verify_outcome(email: &str, status: u16, body: &str) -> Result<Option<Account>, DirectoryError> {
    match status {
        401 => return Ok(None),
        200..=299 => {}
        _ => return Err(DirectoryError::Unavailable(describe_error_body(status, body))),
    }

    let reply: LoginReply = serde_json::from_str(body)
        .map_err(|e| DirectoryError::Unavailable(format!("Failed to parse JSON: {e}")))?;

    Ok(Some(Account {
        email: email.to_string(),
        role: reply
            .role
            .unwrap_or_else(|| Role::for_email(email).as_str().to_string()),
        token: reply.token,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn created_account_is_stored() {
        assert_eq!(
            insert_outcome(201, r#"{"message": "User registered successfully!"}"#),
            Ok(())
        );
    }

    #[test]
    fn duplicate_rejections_mean_email_taken() {
        assert_eq!(
            insert_outcome(400, r#"{"error": "Email already registered"}"#),
            Err(DirectoryError::EmailTaken)
        );
        assert_eq!(
            insert_outcome(400, r#"{"error": "Username already taken"}"#),
            Err(DirectoryError::EmailTaken)
        );
    }

    #[test]
    fn validator_errors_are_joined() {
        assert_eq!(
            insert_outcome(
                400,
                r#"{"errors": ["This password is too common.", "This password is entirely numeric."]}"#
            ),
            Err(DirectoryError::Unavailable(
                "This password is too common. This password is entirely numeric.".to_string()
            ))
        );
    }

    #[test]
    fn other_register_failures_are_unavailable() {
        assert_eq!(
            insert_outcome(405, r#"{"detail": "Method \"GET\" not allowed."}"#),
            Err(DirectoryError::Unavailable(
                r#"HTTP error: 405 ({"detail": "Method \"GET\" not allowed."})"#.to_string()
            ))
        );
        assert_eq!(
            insert_outcome(500, ""),
            Err(DirectoryError::Unavailable("HTTP error: 500".to_string()))
        );
    }

    #[test]
    fn successful_login_takes_role_from_email_domain() {
        let body = r#"{"message": "Login successful"}"#;

        let admin = verify_outcome("prof@academy.edu", 200, body).unwrap().unwrap();
        assert_eq!(admin.email, "prof@academy.edu");
        assert_eq!(admin.role, "Admin");
        assert_eq!(admin.token, None);

        let user = verify_outcome("a@b.com", 200, body).unwrap().unwrap();
        assert_eq!(user.role, "User");
    }

    #[test]
    fn login_reply_role_and_token_win() {
        let account = verify_outcome(
            "a@b.com",
            200,
            r#"{"message": "Login successful", "role": "Auditor", "token": "abc"}"#,
        )
        .unwrap()
        .unwrap();
        assert_eq!(account.role, "Auditor");
        assert_eq!(account.token.as_deref(), Some("abc"));
    }

    #[test]
    fn rejected_credentials_are_no_match() {
        assert_eq!(
            verify_outcome("a@b.com", 401, r#"{"error": "Invalid credentials"}"#),
            Ok(None)
        );
    }

    #[test]
    fn other_login_failures_are_unavailable() {
        assert_eq!(
            verify_outcome("a@b.com", 403, r#"{"detail": "CSRF Failed"}"#),
            Err(DirectoryError::Unavailable(
                r#"HTTP error: 403 ({"detail": "CSRF Failed"})"#.to_string()
            ))
        );
        assert!(matches!(
            verify_outcome("a@b.com", 200, "<html>"),
            Err(DirectoryError::Unavailable(_))
        ));
    }
}
