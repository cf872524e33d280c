//! Local encoding of a [`Session`] shaped like a JWT.
//!
//! WARNING: The signature is a fixed transformation of the other two parts
//! and nothing verifies it. It only exists so the session can be persisted
//! and re-validated locally and must not be treated as a security boundary.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use trainhub_time::Timestamp;

use crate::{
    errors::TokenError,
    session::Session,
    uac::{Email, Permissions, Role, UserId},
};

const SIGNATURE_SUFFIX: &str = "secret";

#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq, Eq)]
struct TokenHeader {
    alg: String,
    typ: String,
}

impl Default for TokenHeader {
    fn default() -> Self {
        Self {
            alg: "HS256".to_string(),
            typ: "JWT".to_string(),
        }
    }
}

/// Claims carried in the middle part of the token
#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq, Eq)]
pub struct TokenPayload {
    pub sub: UserId,
    pub email: Email,
    pub role: Role,
    pub permissions: Permissions,
    /// Seconds since the unix epoch
    pub exp: Timestamp,
}

impl From<&Session> for TokenPayload {
    fn from(value: &Session) -> Self {
        let user = &value.user_info;
        Self {
            sub: user.id.clone(),
            email: user.email.clone(),
            role: user.role,
            permissions: user.permissions.clone(),
            exp: value.expires_at,
        }
    }
}

impl TokenPayload {
    pub fn is_expired_at(&self, now: Timestamp) -> bool {
        !now.is_before(self.exp)
    }
}

#[derive(serde::Serialize, serde::Deserialize, Clone, PartialEq, Eq)]
pub struct CredentialToken(String);

impl CredentialToken {
    pub fn issue(session: &Session) -> Result<Self, TokenError> {
        let header = STANDARD.encode(serde_json::to_vec(&TokenHeader::default())?);
        let payload = STANDARD.encode(serde_json::to_vec(&TokenPayload::from(session))?);
        let signature = STANDARD.encode(format!("{header}.{payload}.{SIGNATURE_SUFFIX}"));
        Ok(Self(format!("{header}.{payload}.{signature}")))
    }

    pub fn decode_payload(&self) -> Result<TokenPayload, TokenError> {
        let parts: Vec<&str> = self.0.split('.').collect();
        let [_header, payload, _signature] = parts.as_slice() else {
            return Err(TokenError::Malformed(parts.len()));
        };
        let bytes = STANDARD.decode(payload)?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// True iff the payload decodes and has not expired at `now`. Any decode
    /// failure counts as invalid
    pub fn is_valid_at(&self, now: Timestamp) -> bool {
        match self.decode_payload() {
            Ok(payload) => !payload.is_expired_at(now),
            Err(e) => {
                tracing::warn!(?e, "credential token failed to decode");
                false
            }
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for CredentialToken {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl std::fmt::Debug for CredentialToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("CredentialToken")
            .field(&format!("{} chars", self.0.len()))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use trainhub_time::Seconds;

    use super::*;
    use crate::uac::UserInfo;

    fn session(expires_in: u64) -> Session {
        Session::starting_at(
            UserInfo {
                id: "2".to_string().try_into().unwrap(),
                email: "hr@company.com".try_into().unwrap(),
                name: "Asiya Ashraf".to_string().try_into().unwrap(),
                role: Role::Hr,
                avatar: String::new().into(),
                permissions: vec!["manage_trainees", "view_analytics", "manage_hiring"].into(),
            },
            Timestamp::from_secs_since_unix_epoch(1_000),
            Seconds::new(expires_in),
        )
    }

    #[test]
    fn payload_reproduces_session() {
        // Arrange
        let session = session(60);

        // Act
        let token = CredentialToken::issue(&session).unwrap();
        let payload = token.decode_payload().unwrap();

        // Assert
        assert_eq!(payload.role, session.user_info.role);
        assert_eq!(payload.permissions, session.user_info.permissions);
        assert_eq!(payload.sub, session.user_info.id);
        assert_eq!(payload.email, session.user_info.email);
        assert_eq!(payload.exp, session.expires_at);
    }

    #[test]
    fn has_three_parts_with_fixed_header() {
        let token = CredentialToken::issue(&session(60)).unwrap();
        let parts: Vec<&str> = token.as_str().split('.').collect();
        assert_eq!(parts.len(), 3);
        let header = STANDARD.decode(parts[0]).unwrap();
        assert_eq!(
            String::from_utf8(header).unwrap(),
            r#"{"alg":"HS256","typ":"JWT"}"#
        );
        let signature = STANDARD.decode(parts[2]).unwrap();
        assert_eq!(
            String::from_utf8(signature).unwrap(),
            format!("{}.{}.secret", parts[0], parts[1])
        );
    }

    #[rstest]
    #[case::before_expiry(1_059, true)]
    #[case::at_expiry(1_060, false)]
    #[case::long_after(9_999, false)]
    fn validity_follows_exp(#[case] now: u64, #[case] expected: bool) {
        let token = CredentialToken::issue(&session(60)).unwrap();
        assert_eq!(
            token.is_valid_at(Timestamp::from_secs_since_unix_epoch(now)),
            expected
        );
    }

    #[rstest]
    #[case::empty("")]
    #[case::two_parts("a.b")]
    #[case::not_base64("a.!!!.c")]
    #[case::not_json("a.bm90IGpzb24=.c")]
    fn garbage_is_invalid(#[case] raw: &str) {
        let token = CredentialToken::from(raw.to_string());
        assert!(token.decode_payload().is_err());
        assert!(!token.is_valid_at(Timestamp::from_secs_since_unix_epoch(0)));
    }
}
