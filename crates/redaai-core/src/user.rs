//! User profile domain model.

use serde::{Deserialize, Serialize};

/// Profile of the authenticated user.
///
/// Populated from the login response payload and reset on logout.
/// `last_access` and `created_at` are opaque server-issued strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub score: f64,
    pub last_access: Option<String>,
    pub created_at: Option<String>,
}

impl UserProfile {
    /// First letter of each whitespace-separated word of the name,
    /// uppercased.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .collect::<String>()
            .to_uppercase()
    }

    /// Returns the profile to its defaults.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
