//! Signed-in user context.
//!
//! The session is an explicit value loaded from the store and handed to
//! whatever needs a user; nothing keeps it in global state.

use crate::db::log::audit_or_warn;
use crate::db::store::StudyStore;
use crate::errors::{AppError, AppResult};
use crate::models::User;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AuthSession {
    #[default]
    SignedOut,
    SignedIn(User),
}

impl AuthSession {
    pub fn load<S: StudyStore + ?Sized>(store: &S) -> AppResult<Self> {
        store.load_auth_session()
    }

    pub fn user(&self) -> Option<&User> {
        match self {
            AuthSession::SignedIn(user) => Some(user),
            AuthSession::SignedOut => None,
        }
    }

    pub fn require_user(&self) -> AppResult<&User> {
        self.user().ok_or(AppError::NotSignedIn)
    }

    pub fn is_signed_in(&self) -> bool {
        self.user().is_some()
    }
}

fn normalize_email(email: &str) -> AppResult<String> {
    let email = email.trim().to_lowercase();
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(email),
        _ => Err(AppError::InvalidEmail(email)),
    }
}

/// Sign in as `email`, creating the user on first login.
pub fn login<S: StudyStore + ?Sized>(store: &S, email: &str) -> AppResult<AuthSession> {
    let email = normalize_email(email)?;

    let user = match store.find_user_by_email(&email)? {
        Some(u) => u,
        None => store.insert_user(&email)?,
    };

    let session = AuthSession::SignedIn(user);
    store.save_auth_session(&session)?;
    audit_or_warn(store, "login", &email, "Signed in");

    Ok(session)
}

/// Sign out. Returns the user that was signed in, if any.
pub fn logout<S: StudyStore + ?Sized>(store: &S) -> AppResult<Option<User>> {
    let previous = AuthSession::load(store)?;
    store.save_auth_session(&AuthSession::SignedOut)?;

    if let Some(user) = previous.user() {
        audit_or_warn(store, "logout", &user.email, "Signed out");
    }

    Ok(match previous {
        AuthSession::SignedIn(user) => Some(user),
        AuthSession::SignedOut => None,
    })
}
