//! Session provider capability.
//!
//! Sign-up, login, and token persistence belong to the external
//! authentication platform; the engine only consumes the current user id
//! and a sign-out action, both injected explicitly.

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::domain::{AuthUser, SessionError};

/// The slice of the authentication platform the engine consumes.
#[async_trait]
pub trait SessionProvider: Send + Sync {
    /// Currently signed-in user, if any.
    fn current_user(&self) -> Option<AuthUser>;

    /// End the session. Failures are logged by callers, never rendered.
    async fn sign_out(&self) -> Result<(), SessionError>;
}

/// Session with a fixed user, cleared on sign-out.
pub struct StaticSession {
    user: Mutex<Option<AuthUser>>,
}

impl StaticSession {
    pub fn signed_in(user: AuthUser) -> Self {
        Self {
            user: Mutex::new(Some(user)),
        }
    }

    pub fn signed_out() -> Self {
        Self {
            user: Mutex::new(None),
        }
    }
}

#[async_trait]
impl SessionProvider for StaticSession {
    fn current_user(&self) -> Option<AuthUser> {
        self.user.lock().clone()
    }

    async fn sign_out(&self) -> Result<(), SessionError> {
        *self.user.lock() = None;
        Ok(())
    }
}
