// ============================================================================
// Supplier Core - Supplier Entity
// File: crates/supplier-core/src/domain/supplier.rs
// Description: Supplier entity and its declarative input schema
// ============================================================================

use std::borrow::Cow;

use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError, ValidationErrors};

/// Supplier entity as stored and returned to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Supplier {
    pub id: Uuid,
    pub name: String,
    pub document: String,
    pub active: bool,

    // Audit fields
    pub created_at: DateTime<Utc>,
    pub modified_at: Option<DateTime<Utc>>,
}

impl Supplier {
    /// Builds a new record with a server-generated id.
    pub fn new(changes: SupplierChanges) -> Self {
        Self {
            id: supplier_shared::new_id(),
            name: changes.name,
            document: changes.document,
            active: changes.active,
            created_at: now(),
            modified_at: None,
        }
    }

    /// Whole-record replacement of the mutable fields. `id` and `created_at` are kept.
    pub fn apply(&mut self, changes: SupplierChanges) {
        self.name = changes.name;
        self.document = changes.document;
        self.active = changes.active;
        self.modified_at = Some(now());
    }
}

// Postgres keeps microseconds; truncating keeps returned and stored values equal.
fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

/// Validated values for the mutable supplier fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupplierChanges {
    pub name: String,
    pub document: String,
    pub active: bool,
}

/// Request body for create and update
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct SupplierPayload {
    #[serde(default, alias = "Id")]
    pub id: Option<Uuid>,

    #[serde(default, alias = "Name", deserialize_with = "trimmed")]
    #[validate(
        required(message = "The name field is required."),
        length(min = 1, max = 100, message = "The name field must have between 1 and 100 characters.")
    )]
    pub name: Option<String>,

    #[serde(default, alias = "Document", deserialize_with = "trimmed")]
    #[validate(
        required(message = "The document field is required."),
        length(min = 1, max = 30, message = "The document field must have between 1 and 30 characters.")
    )]
    pub document: Option<String>,

    #[serde(default, alias = "Active")]
    pub active: bool,
}

impl SupplierPayload {
    /// Validates for create. A client-supplied `id` is ignored.
    pub fn into_changes(self) -> Result<SupplierChanges, ValidationErrors> {
        self.validate()?;
        Ok(self.changes())
    }

    /// Validates for update, which additionally needs the `id` of the target record.
    pub fn into_update(self) -> Result<(Uuid, SupplierChanges), ValidationErrors> {
        let mut errors = match self.validate() {
            Ok(()) => ValidationErrors::new(),
            Err(errors) => errors,
        };

        let id = self.id;
        match id {
            Some(id) if errors.is_empty() => Ok((id, self.changes())),
            Some(_) => Err(errors),
            None => {
                let mut error = ValidationError::new("required");
                error.message = Some(Cow::Borrowed("The id field is required."));
                errors.add("id", error);
                Err(errors)
            }
        }
    }

    fn changes(self) -> SupplierChanges {
        SupplierChanges {
            name: self.name.unwrap_or_default(),
            document: self.document.unwrap_or_default(),
            active: self.active,
        }
    }
}

fn trimmed<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(value.map(|s| s.trim().to_string()))
}
