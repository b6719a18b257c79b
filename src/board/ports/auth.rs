//! Authentication gateway port and auth-state change notifications.

use crate::board::domain::UserId;
use serde::{Deserialize, Serialize};
use tokio::sync::watch;

/// Signed-in user as reported by the authentication provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIdentity {
    id: UserId,
    email: String,
    display_name: Option<String>,
}

impl UserIdentity {
    /// Creates an identity from provider data.
    #[must_use]
    pub fn new(id: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: UserId::new(id),
            email: email.into(),
            display_name: None,
        }
    }

    /// Sets the optional display name.
    #[must_use]
    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    /// Returns the user identifier.
    #[must_use]
    pub const fn id(&self) -> &UserId {
        &self.id
    }

    /// Returns the account email.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the display name, if the provider reported one.
    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }
}

/// Authentication state carried by the subscription channel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AuthState {
    /// No user is signed in.
    #[default]
    SignedOut,
    /// A user is signed in.
    SignedIn(UserIdentity),
}

impl AuthState {
    /// Returns the signed-in identity, if any.
    #[must_use]
    pub const fn user(&self) -> Option<&UserIdentity> {
        match self {
            Self::SignedIn(user) => Some(user),
            Self::SignedOut => None,
        }
    }

    /// Reports whether a user is signed in.
    #[must_use]
    pub const fn is_signed_in(&self) -> bool {
        matches!(self, Self::SignedIn(_))
    }
}

/// Owned handle onto the auth-state channel.
///
/// One notification is delivered per sign-in or sign-out transition.
/// Dropping the handle ends the subscription.
pub type AuthSubscription = watch::Receiver<AuthState>;

/// Authentication provider contract.
pub trait AuthGateway: Send + Sync {
    /// Returns the currently signed-in user, if any.
    fn current_user(&self) -> Option<UserIdentity>;

    /// Subscribes to auth-state transitions.
    fn subscribe(&self) -> AuthSubscription;
}
