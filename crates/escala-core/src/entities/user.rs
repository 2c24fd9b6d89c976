//! User entity - a member profile as seen by the scheduling core
//!
//! Identity (registration, credentials) is owned by an external collaborator;
//! the core only reads id, email, and role.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::Snowflake;

/// Binary role model: administrators manage ministries and invitations,
/// members respond to them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    #[default]
    Member,
}

impl Role {
    /// String form as stored in the database
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Member => "member",
        }
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Self::Admin),
            "member" => Ok(Self::Member),
            other => Err(format!("unknown role: {other}")),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Snowflake,
    pub email: String,
    pub full_name: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new User
    pub fn new(id: Snowflake, email: impl Into<String>, full_name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id,
            email: email.into(),
            full_name: full_name.into(),
            role: Role::Member,
            created_at: now,
            updated_at: now,
        }
    }

    /// Promote to admin (builder style)
    #[must_use]
    pub fn with_role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }

    /// Check if this user is an administrator
    #[inline]
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Case-insensitive, whitespace-tolerant email comparison
    pub fn email_matches(&self, other: &str) -> bool {
        self.email.trim().eq_ignore_ascii_case(other.trim())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parsing() {
        assert_eq!("admin".parse::<Role>().unwrap(), Role::Admin);
        assert_eq!("member".parse::<Role>().unwrap(), Role::Member);
        assert!("owner".parse::<Role>().is_err());
    }

    #[test]
    fn test_user_defaults_to_member() {
        let user = User::new(Snowflake::new(1), "ana@example.com", "Ana Souza");
        assert!(!user.is_admin());

        let admin = user.with_role(Role::Admin);
        assert!(admin.is_admin());
    }

    #[test]
    fn test_email_matches_ignores_case_and_whitespace() {
        let user = User::new(Snowflake::new(1), "Ana@Example.com", "Ana Souza");
        assert!(user.email_matches("ana@example.com"));
        assert!(user.email_matches("  ANA@EXAMPLE.COM  "));
        assert!(!user.email_matches("other@example.com"));
    }
}
