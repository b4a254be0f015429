use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::validators::{self, FieldErrors};

/// Case lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CaseStatus {
    New,
    Open,
    #[serde(rename = "In Progress")]
    InProgress,
    Pending,
    Closed,
    Dismissed,
}

impl CaseStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::New => "New",
            Self::Open => "Open",
            Self::InProgress => "In Progress",
            Self::Pending => "Pending",
            Self::Closed => "Closed",
            Self::Dismissed => "Dismissed",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "New" => Some(Self::New),
            "Open" => Some(Self::Open),
            "In Progress" => Some(Self::InProgress),
            "Pending" => Some(Self::Pending),
            "Closed" => Some(Self::Closed),
            "Dismissed" => Some(Self::Dismissed),
            _ => None,
        }
    }

    /// Closed and Dismissed cases no longer block customer deletion.
    #[allow(dead_code)] // Domain predicate; the deletion gate runs in SQL
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Closed | Self::Dismissed)
    }
}

impl fmt::Display for CaseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A legal case. `customer_name` and `attorney_name` are joined display
/// fields populated on reads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Case {
    pub id: Uuid,
    /// Human-facing business identifier, e.g. `CASE-M3K9A1-X7QF`.
    pub case_id: String,
    pub case_title: String,
    pub client_id: Uuid,
    pub case_type: String,
    pub case_status: CaseStatus,
    pub assigned_attorney: Option<Uuid>,
    pub filing_date: Option<NaiveDate>,
    pub court_name: String,
    pub hearing_date: Option<NaiveDate>,
    pub created_by: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub customer_name: Option<String>,
    pub attorney_name: Option<String>,
}

/// Request body for creating or replacing a case.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CasePayload {
    /// Caller-supplied business id; generated when omitted (create only).
    pub case_id: Option<String>,
    #[validate(length(min = 1, message = "Case title is required"))]
    pub case_title: String,
    #[validate(length(min = 1, message = "Client is required"))]
    pub client_id: String,
    #[validate(length(min = 1, message = "Case type is required"))]
    pub case_type: String,
    pub case_status: Option<String>,
    pub assigned_attorney: Option<String>,
    pub filing_date: Option<String>,
    #[serde(default)]
    pub court_name: String,
    pub hearing_date: Option<String>,
}

/// Validated, typed case fields ready for persistence.
#[derive(Debug, Clone)]
pub struct CaseInput {
    pub case_title: String,
    pub client_id: Uuid,
    pub case_type: String,
    pub case_status: CaseStatus,
    pub assigned_attorney: Option<Uuid>,
    pub filing_date: Option<NaiveDate>,
    pub court_name: String,
    pub hearing_date: Option<NaiveDate>,
}

impl CasePayload {
    /// Validate the payload and convert it into typed input.
    ///
    /// Status defaults to New. When both dates are present the hearing must
    /// not precede the filing.
    pub fn validate_into(&self) -> Result<CaseInput, FieldErrors> {
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

        let case_status = match self.case_status.as_deref() {
            None => Some(CaseStatus::New),
            Some(raw) => {
                let parsed = CaseStatus::parse(raw);
                if parsed.is_none() {
                    errors.insert(
                        "case_status".to_string(),
                        "Valid case status is required".to_string(),
                    );
                }
                parsed
            }
        };

        let assigned_attorney = match self.assigned_attorney.as_deref() {
            None | Some("") => None,
            Some(raw) => match Uuid::parse_str(raw.trim()) {
                Ok(id) => Some(id),
                Err(_) => {
                    errors.insert(
                        "assigned_attorney".to_string(),
                        "Invalid attorney assignment".to_string(),
                    );
                    None
                }
            },
        };

        let filing_date = parse_optional_date(
            self.filing_date.as_deref(),
            "filing_date",
            "Valid filing date is required",
            &mut errors,
        );
        let hearing_date = parse_optional_date(
            self.hearing_date.as_deref(),
            "hearing_date",
            "Valid hearing date is required",
            &mut errors,
        );

        if let (Some(Some(filed)), Some(Some(heard))) = (filing_date, hearing_date)
            && heard < filed
        {
            errors.insert(
                "hearing_date".to_string(),
                "Hearing date must be after filing date".to_string(),
            );
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        let (Some(client_id), Some(case_status), Some(filing_date), Some(hearing_date)) =
            (client_id, case_status, filing_date, hearing_date)
        else {
            return Err(errors);
        };

        Ok(CaseInput {
            case_title: self.case_title.trim().to_string(),
            client_id,
            case_type: self.case_type.trim().to_string(),
            case_status,
            assigned_attorney,
            filing_date,
            court_name: self.court_name.trim().to_string(),
            hearing_date,
        })
    }
}

/// Parse an optional date field. Returns `None` on error (already recorded),
/// `Some(None)` when absent, `Some(Some(date))` when present and valid.
fn parse_optional_date(
    raw: Option<&str>,
    field: &str,
    message: &str,
    errors: &mut FieldErrors,
) -> Option<Option<NaiveDate>> {
    match raw {
        None | Some("") => Some(None),
        Some(value) => match validators::parse_date(value) {
            Some(date) => Some(Some(date)),
            None => {
                errors.insert(field.to_string(), message.to_string());
                None
            }
        },
    }
}

/// Query filters for listing cases.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CaseQuery {
    /// Filter by exact status.
    pub status: Option<String>,
    /// Filter by assigned attorney id.
    pub attorney: Option<Uuid>,
    /// Filter by owning customer id.
    pub client: Option<Uuid>,
    /// Case-insensitive substring match over title, business id, and
    /// customer name.
    pub search: Option<String>,
}
