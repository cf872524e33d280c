use std::sync::Arc;

use trainhub_time::{Seconds, Timestamp};

use crate::uac::UserInfo;

/// The authenticated state for the current user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user_info: Arc<UserInfo>,
    pub expires_at: Timestamp,
}

impl Session {
    pub fn new(user_info: UserInfo, lifetime: Seconds) -> Self {
        Self::starting_at(user_info, Timestamp::now(), lifetime)
    }

    pub fn starting_at(user_info: UserInfo, start: Timestamp, lifetime: Seconds) -> Self {
        Self {
            user_info: Arc::new(user_info),
            expires_at: start + lifetime,
        }
    }

    /// Valid iff `now` is strictly before the expiry
    pub fn is_valid_at(&self, now: Timestamp) -> bool {
        now.is_before(self.expires_at)
    }
}
