use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use uuid::Uuid;

/// Mutation recorded in the audit trail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuditAction {
    Create,
    Update,
    Delete,
}

impl AuditAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Create => "CREATE",
            Self::Update => "UPDATE",
            Self::Delete => "DELETE",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "CREATE" => Some(Self::Create),
            "UPDATE" => Some(Self::Update),
            "DELETE" => Some(Self::Delete),
            _ => None,
        }
    }
}

impl fmt::Display for AuditAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Kind of business entity an audit entry or document refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Customer,
    Case,
    Engagement,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Customer => "customer",
            Self::Case => "case",
            Self::Engagement => "engagement",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "customer" => Some(Self::Customer),
            "case" => Some(Self::Case),
            "engagement" => Some(Self::Engagement),
            _ => None,
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An immutable audit trail entry. Written exactly once per successful
/// mutation on a tracked entity; never updated or deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditLog {
    pub id: Uuid,
    /// User that performed the action.
    pub actor_id: Uuid,
    pub action: AuditAction,
    pub entity_type: EntityKind,
    pub entity_id: Uuid,
    /// For UPDATE: `{before, after}` snapshots. For CREATE/DELETE: a small
    /// descriptive payload.
    pub changes: Option<JsonValue>,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Input for appending an audit entry.
#[derive(Debug, Clone)]
pub struct CreateAuditLog {
    pub actor_id: Uuid,
    pub action: AuditAction,
    pub entity_type: EntityKind,
    pub entity_id: Uuid,
    pub changes: Option<JsonValue>,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
}

/// Query filters for reading the audit trail. Results are always ordered
/// newest-first.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuditLogQuery {
    pub entity_type: Option<EntityKind>,
    pub entity_id: Option<Uuid>,
    pub actor_id: Option<Uuid>,
    /// Start of the created-at range (inclusive).
    pub from: Option<DateTime<Utc>>,
    /// End of the created-at range (exclusive).
    pub to: Option<DateTime<Utc>>,
    /// Maximum number of entries to return.
    pub limit: Option<i64>,
}
