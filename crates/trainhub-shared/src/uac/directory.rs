use secrecy::SecretString;
use tracing::instrument;

use super::User;

/// Fixed, ordered list of users supplied whole at start up. Read only
#[derive(Debug, Clone, Default)]
pub struct UserDirectory {
    users: Vec<User>,
}

impl UserDirectory {
    pub fn new(users: Vec<User>) -> Self {
        Self { users }
    }

    /// Returns the first user whose email and password both match exactly
    #[instrument(skip(self, password), fields(directory_len = self.users.len()))]
    pub fn find_by_credentials(&self, email: &str, password: &SecretString) -> Option<&User> {
        self.users
            .iter()
            .find(|user| user.matches_credentials(email, password))
    }

    pub fn iter(&self) -> impl Iterator<Item = &User> {
        self.users.iter()
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl From<Vec<User>> for UserDirectory {
    fn from(value: Vec<User>) -> Self {
        Self::new(value)
    }
}
