//! Stores settings that are not expected to need to change but grouped together
//! for discoverability and reuse. Each constant should be prefixed by the module
//! name to allow importing the constant only and still be readable

use std::time::Duration;
use trainhub_time::Seconds;

pub mod auth {
    use super::*;

    pub const AUTH_SESSION_LIFETIME: Seconds = Seconds::new(24 * 60 * 60);
    /// How often an active session's token is re-validated
    pub const AUTH_EXPIRY_SWEEP_INTERVAL: Seconds = Seconds::new(60);
    /// Simulated round trip for a login request
    pub const AUTH_LOGIN_LATENCY: Duration = Duration::from_millis(800);
}

pub mod assistant {
    use super::*;

    /// Simulated processing time before the talent assistant replies
    pub const ASSISTANT_RESPONSE_DELAY: Duration = Duration::from_millis(800);
    pub const ASSISTANT_MAX_CANDIDATES: usize = 5;
}

pub mod table {
    pub const TABLE_DEFAULT_EMPTY_MESSAGE: &str = "No data available";
}

pub mod path {
    pub const PATH_HOME: &str = "/";
    pub const PATH_LOGIN: &str = "/login";
    pub const PATH_UNAUTHORIZED: &str = "/unauthorized";
    pub const PATH_ADMIN_DASHBOARD: &str = "/admin/dashboard";
    pub const PATH_HR_DASHBOARD: &str = "/hr/dashboard";
    pub const PATH_FACILITATOR_DASHBOARD: &str = "/facilitator/dashboard";
    pub const PATH_TRAINEE_DASHBOARD: &str = "/trainee/dashboard";
    pub const PATH_MANAGER_DASHBOARD: &str = "/manager/dashboard";
}

#[cfg(test)]
mod tests {
    use static_assertions::const_assert;

    use super::auth::{AUTH_EXPIRY_SWEEP_INTERVAL, AUTH_SESSION_LIFETIME};

    // A sweep slower than the session lifetime would let expired sessions linger
    const_assert!(AUTH_EXPIRY_SWEEP_INTERVAL.as_u64() < AUTH_SESSION_LIFETIME.as_u64());
}
