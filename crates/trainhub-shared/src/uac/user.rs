use std::fmt::Display;

use secrecy::{ExposeSecret as _, SecretString};

use crate::errors::ConversionError;

use super::{Permissions, Role};

#[derive(
    Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq, Eq, Hash, PartialOrd, Ord,
)]
#[serde(transparent)]
pub struct UserId(String);

#[derive(
    Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq, Eq, Hash, PartialOrd, Ord,
)]
#[serde(transparent)]
/// Login key for a user, constrained to not be an empty string. No
/// normalization is applied so comparisons are case-sensitive
pub struct Email(String);

#[derive(Default, Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq, Eq)]
#[serde(transparent)]
pub struct DisplayName(String);

#[derive(Default, Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq, Eq)]
#[serde(transparent)]
pub struct AvatarUrl(String);

impl UserId {
    pub const MAX_LENGTH: usize = 36;
}

impl Email {
    pub const MAX_LENGTH: usize = 254;
}

impl DisplayName {
    pub const MAX_LENGTH: usize = 50;
}

fn validate(value: String, max: usize) -> Result<String, ConversionError> {
    if value.is_empty() {
        return Err(ConversionError::Empty);
    }
    if value.len() > max {
        return Err(ConversionError::MaxExceeded {
            max,
            actual: value.len(),
        });
    }
    Ok(value)
}

impl TryFrom<String> for UserId {
    type Error = ConversionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        validate(value, Self::MAX_LENGTH).map(Self)
    }
}

impl TryFrom<String> for Email {
    type Error = ConversionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        validate(value, Self::MAX_LENGTH).map(Self)
    }
}

impl TryFrom<&str> for Email {
    type Error = ConversionError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.to_string().try_into()
    }
}

impl TryFrom<String> for DisplayName {
    type Error = ConversionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        validate(value, Self::MAX_LENGTH).map(Self)
    }
}

impl From<String> for AvatarUrl {
    fn from(value: String) -> Self {
        Self(value)
    }
}

macro_rules! str_access {
    ($($t:ty),+) => {
        $(
            impl AsRef<str> for $t {
                fn as_ref(&self) -> &str {
                    &self.0
                }
            }

            impl Display for $t {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    write!(f, "{}", self.0)
                }
            }
        )+
    };
}

str_access!(UserId, Email, DisplayName, AvatarUrl);

/// The user info exposed once logged in (never includes the password)
#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq, Eq)]
pub struct UserInfo {
    pub id: UserId,
    pub email: Email,
    pub name: DisplayName,
    pub role: Role,
    pub avatar: AvatarUrl,
    pub permissions: Permissions,
}

/// A directory entry. Only lives in the [`super::UserDirectory`]
#[derive(Debug, Clone)]
pub struct User {
    pub info: UserInfo,
    password: SecretString,
}

impl User {
    pub fn new(info: UserInfo, password: SecretString) -> Self {
        Self { info, password }
    }

    /// Exact, case-sensitive match on both fields
    pub fn matches_credentials(&self, email: &str, password: &SecretString) -> bool {
        self.info.email.as_ref() == email
            && self.password.expose_secret() == password.expose_secret()
    }

    /// Returns the user info with the password stripped
    pub fn without_password(&self) -> UserInfo {
        self.info.clone()
    }
}
