use std::{collections::BTreeSet, fmt::Display};

/// A capability flag. Compared verbatim, there is no hierarchy between
/// permissions
#[derive(
    Debug, serde::Serialize, serde::Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash, Clone,
)]
#[serde(transparent)]
pub struct Permission(String);

impl Permission {
    /// Grants every permission check
    pub const WILDCARD: &'static str = "all";

    pub fn is_wildcard(&self) -> bool {
        self.0 == Self::WILDCARD
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Permission {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for Permission {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl Display for Permission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct Permissions(pub BTreeSet<Permission>);

impl Permissions {
    /// True if the wildcard is held or `permission` is held verbatim
    pub fn grants(&self, permission: &str) -> bool {
        self.0
            .iter()
            .any(|held| held.is_wildcard() || held.as_str() == permission)
    }
}

impl<P: Into<Permission>> FromIterator<P> for Permissions {
    fn from_iter<T: IntoIterator<Item = P>>(iter: T) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl From<Vec<&str>> for Permissions {
    fn from(value: Vec<&str>) -> Self {
        value.into_iter().collect()
    }
}

impl Display for Permissions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let joined = self
            .0
            .iter()
            .map(Permission::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "{joined}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::exact(vec!["manage_hiring", "view_analytics"], "manage_hiring", true)]
    #[case::missing(vec!["manage_hiring", "view_analytics"], "manage_courses", false)]
    #[case::wildcard(vec!["all"], "anything_at_all", true)]
    #[case::wildcard_with_others(vec!["view_courses", "all"], "manage_strategy", true)]
    #[case::empty(vec![], "view_courses", false)]
    #[case::no_prefix_matching(vec!["manage"], "manage_hiring", false)]
    #[case::case_sensitive(vec!["Manage_Hiring"], "manage_hiring", false)]
    fn grants(#[case] held: Vec<&str>, #[case] requested: &str, #[case] expected: bool) {
        // Arrange
        let permissions: Permissions = held.into();

        // Act
        let actual = permissions.grants(requested);

        // Assert
        assert_eq!(actual, expected);
    }

    #[test]
    fn serializes_as_list_of_strings() {
        let permissions: Permissions = vec!["take_tests", "view_courses"].into();
        let actual = serde_json::to_string(&permissions).unwrap();
        assert_eq!(actual, r#"["take_tests","view_courses"]"#);
    }
}
