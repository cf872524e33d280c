use crate::const_config::path::{
    PATH_ADMIN_DASHBOARD, PATH_FACILITATOR_DASHBOARD, PATH_HR_DASHBOARD, PATH_MANAGER_DASHBOARD,
    PATH_TRAINEE_DASHBOARD,
};

#[derive(
    Debug,
    serde::Serialize,
    serde::Deserialize,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    Admin,
    Hr,
    Facilitator,
    Trainee,
    Manager,
}

impl Role {
    pub fn dashboard_path(&self) -> &'static str {
        match self {
            Role::Admin => PATH_ADMIN_DASHBOARD,
            Role::Hr => PATH_HR_DASHBOARD,
            Role::Facilitator => PATH_FACILITATOR_DASHBOARD,
            Role::Trainee => PATH_TRAINEE_DASHBOARD,
            Role::Manager => PATH_MANAGER_DASHBOARD,
        }
    }

    /// Human readable name for headings
    pub fn title(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Hr => "HR Manager",
            Role::Facilitator => "Facilitator",
            Role::Trainee => "Trainee",
            Role::Manager => "Manager",
        }
    }
}
