//! Presence and length rules for user profiles.

use thiserror::Error;
use validator::Validate;

use crate::domain::entities::UserProfile;

/// Minimum length of a first or last name, in characters.
pub const NAME_MIN_LEN: usize = 2;
/// Maximum length of a first or last name, in characters.
pub const NAME_MAX_LEN: usize = 20;
/// Minimum length of a biography, in characters.
pub const BIO_MIN_LEN: usize = 20;
/// Maximum length of a biography, in characters.
pub const BIO_MAX_LEN: usize = 450;

/// Reasons a profile is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please provide firstName, lastName and bio for the user")]
    MissingFields,

    #[error(
        "firstName and lastName should be between 2 and 20 characters, \
         bio should be between 20 and 450 characters"
    )]
    OutOfBounds {
        /// Offending fields, sorted by name.
        fields: Vec<String>,
    },
}

/// Checks that every field is present and within its length bounds.
///
/// # Errors
///
/// Returns [`ValidationError::MissingFields`] if any field is empty, otherwise
/// [`ValidationError::OutOfBounds`] if any length falls outside its range.
pub fn validate_profile(profile: &UserProfile) -> Result<(), ValidationError> {
    if profile.first_name.is_empty() || profile.last_name.is_empty() || profile.bio.is_empty() {
        return Err(ValidationError::MissingFields);
    }

    profile.validate().map_err(|errors| {
        let mut fields: Vec<String> = errors
            .field_errors()
            .keys()
            .map(|field| field.to_string())
            .collect();
        fields.sort();
        ValidationError::OutOfBounds { fields }
    })
}
