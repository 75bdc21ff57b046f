use std::fmt;

use tokio::sync::watch;

/// User identity assigned by the external identity provider
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserId(pub String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// External identity provider capability
///
/// "No current user" is a precondition failure for any operation that writes
/// user-owned documents.
pub trait IdentityProvider: Send + Sync {
    fn current_user(&self) -> Option<UserId>;
}

/// In-memory auth session carrying sign-in/sign-out transitions
///
/// The current user is broadcast on a watch channel so callers can observe
/// auth-state changes as they happen.
///
/// # Example
///
/// ```
/// use rewards_engine::identity::{AuthSession, IdentityProvider, UserId};
///
/// let auth = AuthSession::new();
/// assert!(auth.current_user().is_none());
///
/// auth.sign_in(UserId::new("u1"));
/// assert_eq!(auth.current_user(), Some(UserId::new("u1")));
///
/// auth.sign_out();
/// assert!(auth.current_user().is_none());
/// ```
pub struct AuthSession {
    state: watch::Sender<Option<UserId>>,
}

impl AuthSession {
    /// Start signed out
    pub fn new() -> Self {
        let (state, _) = watch::channel(None);
        Self { state }
    }

    pub fn sign_in(&self, user: UserId) {
        self.state.send_replace(Some(user));
    }

    pub fn sign_out(&self) {
        self.state.send_replace(None);
    }

    /// Subscribe to sign-in/sign-out transitions
    pub fn subscribe(&self) -> watch::Receiver<Option<UserId>> {
        self.state.subscribe()
    }
}

impl Default for AuthSession {
    fn default() -> Self {
        Self::new()
    }
}

impl IdentityProvider for AuthSession {
    fn current_user(&self) -> Option<UserId> {
        self.state.borrow().clone()
    }
}
