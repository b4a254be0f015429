use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::validators::{self, FieldErrors};

/// Kind of client interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngagementType {
    Meeting,
    Call,
    Email,
    #[serde(rename = "Video Conference")]
    VideoConference,
    #[serde(rename = "Document Review")]
    DocumentReview,
}

impl EngagementType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Meeting => "Meeting",
            Self::Call => "Call",
            Self::Email => "Email",
            Self::VideoConference => "Video Conference",
            Self::DocumentReview => "Document Review",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Meeting" => Some(Self::Meeting),
            "Call" => Some(Self::Call),
            "Email" => Some(Self::Email),
            "Video Conference" => Some(Self::VideoConference),
            "Document Review" => Some(Self::DocumentReview),
            _ => None,
        }
    }
}

impl fmt::Display for EngagementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Channel the interaction happened over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngagementChannel {
    Phone,
    Email,
    #[serde(rename = "In-Person")]
    InPerson,
    Video,
    Portal,
}

impl EngagementChannel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Phone => "Phone",
            Self::Email => "Email",
            Self::InPerson => "In-Person",
            Self::Video => "Video",
            Self::Portal => "Portal",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Phone" => Some(Self::Phone),
            "Email" => Some(Self::Email),
            "In-Person" => Some(Self::InPerson),
            "Video" => Some(Self::Video),
            "Portal" => Some(Self::Portal),
            _ => None,
        }
    }
}

impl fmt::Display for EngagementChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A recorded client interaction. `customer_name` and `recorder_name` are
/// joined display fields populated on reads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Engagement {
    pub id: Uuid,
    /// Human-facing business identifier, e.g. `ENG-M3K9A1-X7QF`.
    pub engagement_id: String,
    pub client_id: Uuid,
    pub engagement_type: EngagementType,
    pub engagement_date: NaiveDate,
    pub engagement_outcome: String,
    pub contact_person: String,
    pub recorded_by: Uuid,
    pub engagement_channel: EngagementChannel,
    pub engagement_notes: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub customer_name: Option<String>,
    pub recorder_name: Option<String>,
}

/// Request body for creating or replacing an engagement.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct EngagementPayload {
    /// Caller-supplied business id; generated when omitted (create only).
    pub engagement_id: Option<String>,
    #[validate(length(min = 1, message = "Client is required"))]
    pub client_id: String,
    pub engagement_type: Option<String>,
    pub engagement_date: Option<String>,
    #[serde(default)]
    pub engagement_outcome: String,
    #[serde(default)]
    pub contact_person: String,
    pub engagement_channel: Option<String>,
    #[serde(default)]
    pub engagement_notes: String,
}

/// Validated, typed engagement fields ready for persistence.
#[derive(Debug, Clone)]
pub struct EngagementInput {
    pub client_id: Uuid,
    pub engagement_type: EngagementType,
    pub engagement_date: NaiveDate,
    pub engagement_outcome: String,
    pub contact_person: String,
    pub engagement_channel: EngagementChannel,
    pub engagement_notes: String,
}

impl EngagementPayload {
    /// Validate the payload and convert it into typed input.
    pub fn validate_into(&self) -> Result<EngagementInput, FieldErrors> {
        let mut errors = match self.validate() {
            Ok(()) => FieldErrors::new(),
            Err(e) => validators::field_errors_from(&e),
        };

        let client_id = match Uuid::parse_str(self.client_id.trim()) {
            Ok(id) => Some(id),
            Err(_) => {
                if !self.client_id.trim().is_empty() {
                    errors.insert("client_id".to_string(), "Client is required".to_string());
                }
                None
            }
        };

        let engagement_type = self
            .engagement_type
            .as_deref()
            .and_then(EngagementType::parse);
        if engagement_type.is_none() {
            errors.insert(
                "engagement_type".to_string(),
                "Valid engagement type is required".to_string(),
            );
        }

        let engagement_channel = self
            .engagement_channel
            .as_deref()
            .and_then(EngagementChannel::parse);
        if engagement_channel.is_none() {
            errors.insert(
                "engagement_channel".to_string(),
                "Valid engagement channel is required".to_string(),
            );
        }

        let engagement_date = self
            .engagement_date
            .as_deref()
            .and_then(validators::parse_date);
        if engagement_date.is_none() {
            errors.insert(
                "engagement_date".to_string(),
                "Valid engagement date is required".to_string(),
            );
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        let (Some(client_id), Some(engagement_type), Some(engagement_channel), Some(date)) =
            (client_id, engagement_type, engagement_channel, engagement_date)
        else {
            return Err(errors);
        };

        Ok(EngagementInput {
            client_id,
            engagement_type,
            engagement_date: date,
            engagement_outcome: self.engagement_outcome.trim().to_string(),
            contact_person: self.contact_person.trim().to_string(),
            engagement_channel,
            engagement_notes: self.engagement_notes.trim().to_string(),
        })
    }
}

/// Query filters for listing engagements.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EngagementQuery {
    /// Filter by owning customer id.
    pub client: Option<Uuid>,
    /// Filter by exact engagement type.
    #[serde(rename = "type")]
    pub engagement_type: Option<String>,
    /// Filter by exact channel.
    pub channel: Option<String>,
    /// Inclusive start of the engagement-date range (`YYYY-MM-DD`).
    pub start_date: Option<NaiveDate>,
    /// Inclusive end of the engagement-date range (`YYYY-MM-DD`).
    pub end_date: Option<NaiveDate>,
}
