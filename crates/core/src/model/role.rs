use thiserror::Error;

/// Normalized role taken from the screen's `role_type` query value.
///
/// Role pages link to the quiz with values like `Volunteer%20Lead`;
/// normalization lower-cases the value and turns literal `%20` sequences back
/// into spaces, so both the raw and the URL-decoded form of a link end up as
/// the same role.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RoleName(String);

impl RoleName {
    /// Parse and normalize a raw query value.
    ///
    /// # Errors
    ///
    /// Returns `RoleError::Empty` if the value is blank after normalization,
    /// which is what a quiz link without a `role_type` parameter produces.
    pub fn parse(value: impl Into<String>) -> Result<Self, RoleError> {
        let normalized = value.into().to_lowercase().replace("%20", " ");
        if normalized.trim().is_empty() {
            return Err(RoleError::Empty);
        }
        Ok(Self(normalized))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RoleName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RoleError {
    #[error("role value is empty")]
    Empty,
}
