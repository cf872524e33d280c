#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid email or password")]
    InvalidCredentials,
    #[error("A login attempt is already in progress")]
    LoginInProgress,
    #[error("failed to issue credential token: {0}")]
    TokenIssue(String),
}

impl AuthError {
    /// Returns `true` if the auth error is [`InvalidCredentials`].
    ///
    /// [`InvalidCredentials`]: AuthError::InvalidCredentials
    #[must_use]
    pub fn is_invalid_credentials(&self) -> bool {
        matches!(self, Self::InvalidCredentials)
    }
}
