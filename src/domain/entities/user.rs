//! User entity representing a person's profile.

use validator::Validate;

/// The editable fields of a user record.
///
/// Length bounds are counted in characters, not bytes. Presence is checked
/// separately by [`crate::domain::validation::validate_profile`] so that an
/// empty field is reported before a bounds violation.
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct UserProfile {
    #[validate(length(min = 2, max = 20))]
    pub first_name: String,

    #[validate(length(min = 2, max = 20))]
    pub last_name: String,

    #[validate(length(min = 20, max = 450))]
    pub bio: String,
}

impl UserProfile {
    /// Creates a new profile.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        bio: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            bio: bio.into(),
        }
    }
}

/// A stored user record.
///
/// The `id` is assigned by the service on creation and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub bio: String,
}

impl User {
    /// Builds a record from an identifier and a profile.
    pub fn new(id: impl Into<String>, profile: UserProfile) -> Self {
        Self {
            id: id.into(),
            first_name: profile.first_name,
            last_name: profile.last_name,
            bio: profile.bio,
        }
    }

    /// The record present in a freshly started store.
    ///
    /// Inserted directly, without profile validation.
    pub fn seed() -> Self {
        Self::new("1", UserProfile::new("John", "Doe", "A sample user"))
    }

    /// Returns true if every field, including the id, is non-empty.
    pub fn is_complete(&self) -> bool {
        !self.id.is_empty()
            && !self.first_name.is_empty()
            && !self.last_name.is_empty()
            && !self.bio.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_from_profile() {
        let user = User::new(
            "abc",
            UserProfile::new("Ada", "Lovelace", "Wrote the first published program"),
        );

        assert_eq!(user.id, "abc");
        assert_eq!(user.first_name, "Ada");
        assert_eq!(user.last_name, "Lovelace");
        assert_eq!(user.bio, "Wrote the first published program");
        assert!(user.is_complete());
    }

    #[test]
    fn test_seed_user() {
        let user = User::seed();

        assert_eq!(user.id, "1");
        assert_eq!(user.first_name, "John");
        assert_eq!(user.last_name, "Doe");
        assert!(user.is_complete());
    }

    #[test]
    fn test_incomplete_user() {
        let mut user = User::seed();
        user.bio.clear();
        assert!(!user.is_complete());

        let mut user = User::seed();
        user.id.clear();
        assert!(!user.is_complete());
    }
}
