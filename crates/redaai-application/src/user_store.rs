//! User profile store.

use std::sync::Mutex;

use redaai_api::auth::AuthUser;
use redaai_core::user::UserProfile;

/// Holds the authenticated user's profile.
///
/// Populated by the session store as a side effect of a successful
/// login; reset on logout. Other stores read it (the essay store takes
/// the submission email from here) but never write it.
#[derive(Default)]
pub struct UserStore {
    state: Mutex<UserProfile>,
}

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the current profile.
    pub fn profile(&self) -> UserProfile {
        self.state.lock().expect("user state poisoned").clone()
    }

    /// Copies the login payload's user fields into the profile.
    pub fn set_user(&self, user: &AuthUser) {
        let mut state = self.state.lock().expect("user state poisoned");
        state.name = user.name.clone();
        state.email = user.email.clone();
        state.score = user.score;
        state.last_access = user.last_access.clone();
        state.created_at = user.created_at.clone();
    }

    /// Returns the profile to its defaults.
    pub fn reset(&self) {
        self.state.lock().expect("user state poisoned").reset();
    }
}
