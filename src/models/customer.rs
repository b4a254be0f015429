use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::validators::{self, FieldErrors};

/// Customer lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CustomerStatus {
    Active,
    Inactive,
    Pending,
    Archived,
}

impl CustomerStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
            Self::Pending => "Pending",
            Self::Archived => "Archived",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Active" => Some(Self::Active),
            "Inactive" => Some(Self::Inactive),
            "Pending" => Some(Self::Pending),
            "Archived" => Some(Self::Archived),
            _ => None,
        }
    }
}

impl fmt::Display for CustomerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A client of the practice.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    pub id: Uuid,
    /// Human-facing business identifier, e.g. `CUST-M3K9A1-X7QF`.
    pub customer_id: String,
    pub customer_name: String,
    pub contact_person: String,
    pub contact_number: String,
    pub email_address: String,
    pub industry_type: String,
    pub registration_date: NaiveDate,
    pub customer_status: CustomerStatus,
    pub address_line: String,
    pub created_by: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request body for creating or replacing a customer. Enumerated and date
/// fields arrive as strings and are checked into typed form by [`Self::validate_into`].
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CustomerPayload {
    /// Caller-supplied business id; generated when omitted (create only).
    pub customer_id: Option<String>,
    #[validate(length(min = 1, message = "Customer name is required"))]
    pub customer_name: String,
    #[validate(length(min = 1, message = "Contact person is required"))]
    pub contact_person: String,
    pub contact_number: String,
    #[validate(email(message = "Valid email is required"))]
    pub email_address: String,
    #[serde(default)]
    pub industry_type: String,
    pub registration_date: Option<String>,
    pub customer_status: Option<String>,
    #[serde(default)]
    pub address_line: String,
}

/// Validated, typed customer fields ready for persistence.
#[derive(Debug, Clone)]
pub struct CustomerInput {
    pub customer_name: String,
    pub contact_person: String,
    pub contact_number: String,
    pub email_address: String,
    pub industry_type: String,
    pub registration_date: NaiveDate,
    pub customer_status: CustomerStatus,
    pub address_line: String,
}

impl CustomerPayload {
    /// Validate the payload and convert it into typed input.
    ///
    /// Registration date defaults to today and must not lie in the future;
    /// status defaults to Active.
    pub fn validate_into(&self) -> Result<CustomerInput, FieldErrors> {
        let mut errors = match self.validate() {
            Ok(()) => FieldErrors::new(),
            Err(e) => validators::field_errors_from(&e),
        };

        if !validators::is_valid_phone(&self.contact_number) {
            errors.insert(
                "contact_number".to_string(),
                "Valid phone number is required".to_string(),
            );
        }

        let customer_status = match self.customer_status.as_deref() {
            None => Some(CustomerStatus::Active),
            Some(raw) => {
                let parsed = CustomerStatus::parse(raw);
                if parsed.is_none() {
                    errors.insert(
                        "customer_status".to_string(),
                        "Valid customer status is required".to_string(),
                    );
                }
                parsed
            }
        };

        let registration_date = match self.registration_date.as_deref() {
            None => Some(validators::today()),
            Some(raw) => match validators::parse_date(raw) {
                Some(date) if date > validators::today() => {
                    errors.insert(
                        "registration_date".to_string(),
                        "Registration date cannot be in the future".to_string(),
                    );
                    None
                }
                Some(date) => Some(date),
                None => {
                    errors.insert(
                        "registration_date".to_string(),
                        "Valid registration date is required".to_string(),
                    );
                    None
                }
            },
        };

        if !errors.is_empty() {
            return Err(errors);
        }

        // Both are Some once errors is empty.
        let (Some(customer_status), Some(registration_date)) =
            (customer_status, registration_date)
        else {
            return Err(errors);
        };

        Ok(CustomerInput {
            customer_name: self.customer_name.trim().to_string(),
            contact_person: self.contact_person.trim().to_string(),
            contact_number: self.contact_number.trim().to_string(),
            email_address: self.email_address.trim().to_lowercase(),
            industry_type: self.industry_type.trim().to_string(),
            registration_date,
            customer_status,
            address_line: self.address_line.trim().to_string(),
        })
    }
}

/// Query filters for listing customers.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CustomerQuery {
    /// Filter by exact status.
    pub status: Option<String>,
    /// Filter by exact industry type.
    pub industry: Option<String>,
    /// Case-insensitive substring match over name, contact person, and email.
    pub search: Option<String>,
}
