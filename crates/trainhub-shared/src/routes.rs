//! Role to route mapping and the checks done before a protected dashboard is
//! shown

use std::str::FromStr as _;

use tracing::instrument;

use crate::{
    const_config::path::{
        PATH_ADMIN_DASHBOARD, PATH_FACILITATOR_DASHBOARD, PATH_HOME, PATH_HR_DASHBOARD,
        PATH_LOGIN, PATH_MANAGER_DASHBOARD, PATH_TRAINEE_DASHBOARD, PATH_UNAUTHORIZED,
    },
    uac::Role,
};

/// Maps a role name to its dashboard. Any unrecognized role goes to the
/// unauthorized page so this never fails
pub fn resolve_dashboard_route(role: &str) -> &'static str {
    match Role::from_str(role) {
        Ok(role) => role.dashboard_path(),
        Err(_) => PATH_UNAUTHORIZED,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProtectedRoute {
    pub path: &'static str,
    pub allowed_roles: &'static [Role],
}

pub const PROTECTED_ROUTES: &[ProtectedRoute] = &[
    ProtectedRoute {
        path: PATH_TRAINEE_DASHBOARD,
        allowed_roles: &[Role::Trainee, Role::Admin],
    },
    ProtectedRoute {
        path: PATH_FACILITATOR_DASHBOARD,
        allowed_roles: &[Role::Facilitator, Role::Admin],
    },
    ProtectedRoute {
        path: PATH_HR_DASHBOARD,
        allowed_roles: &[Role::Hr, Role::Admin],
    },
    ProtectedRoute {
        path: PATH_MANAGER_DASHBOARD,
        allowed_roles: &[Role::Manager, Role::Admin],
    },
    ProtectedRoute {
        path: PATH_ADMIN_DASHBOARD,
        allowed_roles: &[Role::Admin],
    },
];

pub const PUBLIC_PATHS: &[&str] = &[PATH_HOME, PATH_LOGIN, PATH_UNAUTHORIZED];

#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardOutcome {
    Allow,
    RedirectToLogin,
    RedirectToUnauthorized,
    NotFound,
}

impl GuardOutcome {
    /// Where the caller should navigate to, `None` if it may stay on the
    /// requested path
    pub fn redirect_path(&self) -> Option<&'static str> {
        match self {
            GuardOutcome::Allow | GuardOutcome::NotFound => None,
            GuardOutcome::RedirectToLogin => Some(PATH_LOGIN),
            GuardOutcome::RedirectToUnauthorized => Some(PATH_UNAUTHORIZED),
        }
    }
}

pub fn find_protected_route(path: &str) -> Option<&'static ProtectedRoute> {
    PROTECTED_ROUTES.iter().find(|route| route.path == path)
}

/// `role` is `None` when there is no valid session
#[instrument(ret)]
pub fn check_access(path: &str, role: Option<Role>) -> GuardOutcome {
    if PUBLIC_PATHS.contains(&path) {
        return GuardOutcome::Allow;
    }
    let Some(route) = find_protected_route(path) else {
        return GuardOutcome::NotFound;
    };
    match role {
        None => GuardOutcome::RedirectToLogin,
        Some(role) if route.allowed_roles.contains(&role) => GuardOutcome::Allow,
        Some(_) => GuardOutcome::RedirectToUnauthorized,
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use strum::IntoEnumIterator as _;

    use super::*;

    #[rstest]
    #[case("admin", PATH_ADMIN_DASHBOARD)]
    #[case("hr", PATH_HR_DASHBOARD)]
    #[case("facilitator", PATH_FACILITATOR_DASHBOARD)]
    #[case("trainee", PATH_TRAINEE_DASHBOARD)]
    #[case("manager", PATH_MANAGER_DASHBOARD)]
    #[case::unknown("superuser", PATH_UNAUTHORIZED)]
    #[case::empty("", PATH_UNAUTHORIZED)]
    #[case::wrong_case("Admin", PATH_UNAUTHORIZED)]
    #[case::non_ascii("ménager", PATH_UNAUTHORIZED)]
    fn dashboard_route(#[case] role: &str, #[case] expected: &str) {
        assert_eq!(resolve_dashboard_route(role), expected);
    }

    #[test]
    fn every_role_dashboard_is_protected_and_reachable_by_that_role() {
        for role in Role::iter() {
            let path = role.dashboard_path();
            assert!(find_protected_route(path).is_some(), "{path} not protected");
            assert_eq!(check_access(path, Some(role)), GuardOutcome::Allow);
        }
    }

    #[test]
    fn admin_allowed_everywhere() {
        for route in PROTECTED_ROUTES {
            assert_eq!(check_access(route.path, Some(Role::Admin)), GuardOutcome::Allow);
        }
    }

    #[rstest]
    #[case(PATH_ADMIN_DASHBOARD, Role::Hr, GuardOutcome::RedirectToUnauthorized)]
    #[case(PATH_HR_DASHBOARD, Role::Trainee, GuardOutcome::RedirectToUnauthorized)]
    #[case(PATH_MANAGER_DASHBOARD, Role::Facilitator, GuardOutcome::RedirectToUnauthorized)]
    #[case(PATH_TRAINEE_DASHBOARD, Role::Manager, GuardOutcome::RedirectToUnauthorized)]
    #[case(PATH_FACILITATOR_DASHBOARD, Role::Facilitator, GuardOutcome::Allow)]
    #[case("/does/not/exist", Role::Admin, GuardOutcome::NotFound)]
    fn role_checks(#[case] path: &str, #[case] role: Role, #[case] expected: GuardOutcome) {
        assert_eq!(check_access(path, Some(role)), expected);
    }

    #[test]
    fn anonymous_redirected_to_login() {
        for route in PROTECTED_ROUTES {
            let outcome = check_access(route.path, None);
            assert_eq!(outcome, GuardOutcome::RedirectToLogin);
            assert_eq!(outcome.redirect_path(), Some(PATH_LOGIN));
        }
        assert_eq!(check_access(PATH_LOGIN, None), GuardOutcome::Allow);
    }
}
