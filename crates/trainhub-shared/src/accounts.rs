//! Rows of the admin user management table. Directory accounts are listed
//! together with the newest roster trainees

use serde::Serialize;
use tracing::instrument;

use crate::{
    roster::{ActivityStatus, Trainee},
    table::{CellValue, Record},
    uac::{Permissions, Role, UserDirectory, UserInfo},
};

/// Directory accounts carry no login history so they all show this
pub const DIRECTORY_LAST_LOGIN: &str = "2024-01-10 14:32";

/// Number of roster trainees listed after the directory accounts
pub const LISTED_TRAINEES: usize = 5;

const TRAINEE_PERMISSIONS: [&str; 2] = ["view_courses", "take_tests"];

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub status: ActivityStatus,
    pub last_login: String,
    pub permissions: Permissions,
}

impl Account {
    pub fn is_active(&self) -> bool {
        self.status == ActivityStatus::Active
    }
}

impl From<UserInfo> for Account {
    fn from(value: UserInfo) -> Self {
        Self {
            id: value.id.to_string(),
            name: value.name.to_string(),
            email: value.email.to_string(),
            role: value.role,
            status: ActivityStatus::Active,
            last_login: DIRECTORY_LAST_LOGIN.to_string(),
            permissions: value.permissions,
        }
    }
}

impl From<&Trainee> for Account {
    fn from(value: &Trainee) -> Self {
        Self {
            id: value.id.clone(),
            name: value.name.clone(),
            email: value.email.clone(),
            role: Role::Trainee,
            status: value.status,
            last_login: value.last_activity.clone(),
            permissions: TRAINEE_PERMISSIONS.into_iter().collect(),
        }
    }
}

impl Record for Account {
    fn row_key(&self) -> String {
        self.id.clone()
    }

    fn field(&self, key: &str) -> CellValue {
        match key {
            "id" => self.id.as_str().into(),
            "name" => self.name.as_str().into(),
            "email" => self.email.as_str().into(),
            "role" => <&'static str>::from(self.role).into(),
            "status" => <&'static str>::from(self.status).into(),
            "lastLogin" => self.last_login.as_str().into(),
            "permissions" => self.permissions.to_string().into(),
            _ => CellValue::Missing,
        }
    }
}

/// Every directory account followed by the first [`LISTED_TRAINEES`]
/// trainees of the roster
#[instrument(skip_all, fields(roster_len = trainees.len()))]
pub fn account_overview(directory: &UserDirectory, trainees: &[Trainee]) -> Vec<Account> {
    directory
        .iter()
        .map(|user| Account::from(user.without_password()))
        .chain(trainees.iter().take(LISTED_TRAINEES).map(Account::from))
        .collect()
}

/// Keeps only the accounts with `role`. `None` keeps them all
pub fn filter_by_role(mut accounts: Vec<Account>, role: Option<Role>) -> Vec<Account> {
    if let Some(role) = role {
        accounts.retain(|account| account.role == role);
    }
    accounts
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::fixtures::{demo_trainees, demo_users};

    fn overview() -> Vec<Account> {
        account_overview(&demo_users().unwrap(), &demo_trainees())
    }

    #[test]
    fn directory_then_first_trainees() {
        // Act
        let accounts = overview();

        // Assert
        let ids: Vec<&str> = accounts.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3", "4", "5", "t1", "t2", "t3", "t4", "t5"]);
        assert!(accounts.iter().all(Account::is_active));
        assert_eq!(accounts[0].last_login, DIRECTORY_LAST_LOGIN);
        assert_eq!(accounts[5].last_login, "2 hours ago");
        assert!(accounts[5].permissions.grants("take_tests"));
        assert!(!accounts[5].permissions.grants("submit_assignments"));
    }

    #[rstest]
    #[case::all(None, 10)]
    #[case::trainees(Some(Role::Trainee), 6)]
    #[case::admins(Some(Role::Admin), 1)]
    #[case::managers(Some(Role::Manager), 1)]
    fn role_filter(#[case] role: Option<Role>, #[case] expected: usize) {
        let accounts = filter_by_role(overview(), role);
        assert_eq!(accounts.len(), expected);
        assert!(accounts.iter().all(|a| role.map_or(true, |r| a.role == r)));
    }

    #[rstest]
    #[case("role", CellValue::from("hr"))]
    #[case("lastLogin", CellValue::from(DIRECTORY_LAST_LOGIN))]
    #[case("avatar", CellValue::Missing)]
    fn fields(#[case] key: &str, #[case] expected: CellValue) {
        assert_eq!(overview()[1].field(key), expected);
    }
}
