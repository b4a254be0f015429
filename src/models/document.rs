use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::{
    EntityKind,
    validators::{self, FieldErrors},
};

/// A document reference attached to a business entity. Only the URL is
/// stored; file contents live outside this system.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub id: Uuid,
    /// Human-facing business identifier, e.g. `DOC-M3K9A1-X7QF2B`.
    pub document_id: String,
    pub entity_type: EntityKind,
    pub entity_id: Uuid,
    pub document_name: String,
    pub document_url: String,
    pub uploaded_by: Uuid,
    pub uploaded_at: DateTime<Utc>,
    pub uploader_name: Option<String>,
}

/// Request body for registering a document.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct DocumentPayload {
    pub entity_type: Option<String>,
    pub entity_id: Option<String>,
    #[validate(length(min = 1, message = "Document name is required"))]
    pub document_name: String,
    #[validate(url(message = "Valid document URL is required"))]
    pub document_url: String,
}

/// Validated, typed document fields ready for persistence.
#[derive(Debug, Clone)]
pub struct DocumentInput {
    pub entity_type: EntityKind,
    pub entity_id: Uuid,
    pub document_name: String,
    pub document_url: String,
}

impl DocumentPayload {
    pub fn validate_into(&self) -> Result<DocumentInput, FieldErrors> {
        let mut errors = match self.validate() {
            Ok(()) => FieldErrors::new(),
            Err(e) => validators::field_errors_from(&e),
        };

        let entity_type = self.entity_type.as_deref().and_then(EntityKind::parse);
        if entity_type.is_none() {
            errors.insert(
                "entity_type".to_string(),
                "Valid entity type is required".to_string(),
            );
        }

        let entity_id = self
            .entity_id
            .as_deref()
            .and_then(|raw| Uuid::parse_str(raw.trim()).ok());
        if entity_id.is_none() {
            errors.insert("entity_id".to_string(), "Entity id is required".to_string());
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        let (Some(entity_type), Some(entity_id)) = (entity_type, entity_id) else {
            return Err(errors);
        };

        Ok(DocumentInput {
            entity_type,
            entity_id,
            document_name: self.document_name.trim().to_string(),
            document_url: self.document_url.trim().to_string(),
        })
    }
}

/// Query filters for listing documents.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DocumentQuery {
    pub entity_type: Option<EntityKind>,
    pub entity_id: Option<Uuid>,
}
