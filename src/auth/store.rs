use super::{DEMO_TOKEN, PublicUser, Session, User, constant_time_eq};
use crate::error::AuthError;
use std::sync::Mutex;

fn normalize_identifier(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Process-wide account list.
#[derive(Debug, Default)]
pub struct UserStore {
    users: Mutex<Vec<User>>,
}

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an account. Name, email and password are trimmed and the email
    /// is lower-cased before anything is checked or stored.
    pub fn register(&self, name: &str, email: &str, password: &str) -> Result<PublicUser, AuthError> {
        let name = name.trim();
        let email = normalize_identifier(email);
        let password = password.trim();
        if name.is_empty() || email.is_empty() || password.is_empty() {
            return Err(AuthError::MissingFields);
        }

        let mut users = self
            .users
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        if users.iter().any(|u| u.email == email) {
            return Err(AuthError::EmailTaken);
        }

        let user = User {
            id: format!("user-{}", users.len() + 1),
            name: name.to_string(),
            email,
            password: password.to_string(),
        };
        let public = user.public();
        users.push(user);
        Ok(public)
    }

    /// Sign in by email or display name. The identifier is matched
    /// case-insensitively; the password is compared exactly as sent.
    pub fn login(&self, identifier: &str, password: &str) -> Result<Session, AuthError> {
        let identifier = normalize_identifier(identifier);
        if identifier.is_empty() || password.is_empty() {
            return Err(AuthError::MissingFields);
        }

        let users = self
            .users
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let user = users
            .iter()
            .find(|u| {
                (u.email == identifier || normalize_identifier(&u.name) == identifier)
                    && constant_time_eq(&u.password, password)
            })
            .ok_or(AuthError::InvalidCredentials)?;

        Ok(Session {
            token: DEMO_TOKEN.to_string(),
            user: user.public(),
        })
    }

    pub fn len(&self) -> usize {
        self.users
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
