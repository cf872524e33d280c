//! Shared items related to user account control

mod directory;
mod errors;
mod permissions;
mod role;
mod user;

pub use directory::UserDirectory;
pub use errors::AuthError;
pub use permissions::{Permission, Permissions};
pub use role::Role;
pub use user::{AvatarUrl, DisplayName, Email, User, UserId, UserInfo};
