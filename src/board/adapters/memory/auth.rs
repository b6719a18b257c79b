//! In-memory authentication gateway with explicit sign-in controls.

use tokio::sync::watch;

use crate::board::ports::{AuthGateway, AuthState, AuthSubscription, UserIdentity};

/// Watch-channel-backed gateway mirroring the remote auth provider.
///
/// Subscribers receive one notification per sign-in or sign-out
/// transition; publishing keeps working with zero subscribers.
#[derive(Debug)]
pub struct InMemoryAuthGateway {
    state: watch::Sender<AuthState>,
}

impl InMemoryAuthGateway {
    /// Creates a gateway with no signed-in user.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: watch::Sender::new(AuthState::SignedOut),
        }
    }

    /// Creates a gateway with the given user already signed in.
    #[must_use]
    pub fn signed_in(user: UserIdentity) -> Self {
        Self {
            state: watch::Sender::new(AuthState::SignedIn(user)),
        }
    }

    /// Signs a user in, notifying subscribers.
    pub fn sign_in(&self, user: UserIdentity) {
        self.state.send_replace(AuthState::SignedIn(user));
    }

    /// Signs the current user out, notifying subscribers.
    pub fn sign_out(&self) {
        self.state.send_replace(AuthState::SignedOut);
    }
}

impl Default for InMemoryAuthGateway {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthGateway for InMemoryAuthGateway {
    fn current_user(&self) -> Option<UserIdentity> {
        self.state.borrow().user().cloned()
    }

    fn subscribe(&self) -> AuthSubscription {
        self.state.subscribe()
    }
}
