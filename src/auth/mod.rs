//! In-memory demo accounts.
//!
//! Accounts live for the lifetime of the process. Passwords are kept as
//! given and every successful login receives the same fixed token; this is
//! a demo identity layer, not a credential system.

mod store;

pub use store::UserStore;

use serde::Serialize;

/// Token handed out on every successful login.
pub const DEMO_TOKEN: &str = "demo-token";

/// A registered account. The password never leaves this module.
#[derive(Debug, Clone)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    password: String,
}

impl User {
    pub fn public(&self) -> PublicUser {
        PublicUser {
            id: self.id.clone(),
            name: self.name.clone(),
            email: self.email.clone(),
        }
    }
}

/// What clients get to see of an account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PublicUser {
    pub id: String,
    pub name: String,
    pub email: String,
}

/// Result of a successful login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Session {
    pub token: String,
    pub user: PublicUser,
}

/// Constant-time equality comparison for secret strings.
fn constant_time_eq(a: &str, b: &str) -> bool {
    use subtle::ConstantTimeEq;
    a.as_bytes().ct_eq(b.as_bytes()).into()
}
