use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// User role. The set is closed: every policy decision is an exhaustive
/// match, so adding a role is a compile-time-checked change rather than a
/// silently-permissive string comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Admin,
    Attorney,
    Paralegal,
    Client,
}

impl Role {
    /// Convert to string for database storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::Attorney => "Attorney",
            Self::Paralegal => "Paralegal",
            Self::Client => "Client",
        }
    }

    /// Parse from a database or request string.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Admin" => Some(Self::Admin),
            "Attorney" => Some(Self::Attorney),
            "Paralegal" => Some(Self::Paralegal),
            "Client" => Some(Self::Client),
            _ => None,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A registered user of the practice.
#[derive(Debug, Clone, Serialize)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    /// Argon2 hash of the password. Never serialized into responses.
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub role: Role,
    /// For Client users, the customer record this account belongs to.
    /// Embedded into session tokens to scope what the account may see.
    pub customer_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// User representation returned from auth endpoints (no credential material).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublicUser {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

impl From<&User> for PublicUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            name: user.name.clone(),
            role: user.role,
            created_at: user.created_at,
        }
    }
}

/// Registration request body. The role arrives as a string and is checked
/// against the closed set before any database work.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
    pub role: String,
    /// Customer record to bind a Client account to.
    pub customer_id: Option<Uuid>,
}

/// Login request body.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Fields persisted when creating a user. Built by the registration handler
/// after validation and password hashing.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub name: String,
    pub password_hash: String,
    pub role: Role,
    pub customer_id: Option<Uuid>,
}
