//! Field identifiers, per-field error slots and the product field rules.

use serde::{Deserialize, Serialize};

/// A form field of the product draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Id,
    Name,
    Description,
    LogoUrl,
    ReleaseDate,
    RevisionDate,
}

impl Field {
    pub const ALL: [Field; 6] = [
        Field::Id,
        Field::Name,
        Field::Description,
        Field::LogoUrl,
        Field::ReleaseDate,
        Field::RevisionDate,
    ];
}

/// State of one field's error slot.
///
/// `Untouched` means no check has looked at the field since the last reset;
/// `Clear` means a check ran and found nothing to report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "message", rename_all = "snake_case")]
pub enum FieldError {
    #[default]
    Untouched,
    Clear,
    Invalid(String),
}

impl FieldError {
    pub fn invalid(message: impl Into<String>) -> Self {
        FieldError::Invalid(message.into())
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self, FieldError::Invalid(_))
    }

    /// The active message, if any.
    pub fn message(&self) -> Option<&str> {
        match self {
            FieldError::Invalid(message) => Some(message),
            _ => None,
        }
    }
}

/// One error slot per draft field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldErrors {
    pub id: FieldError,
    pub name: FieldError,
    pub description: FieldError,
    pub logo_url: FieldError,
    pub release_date: FieldError,
    pub revision_date: FieldError,
}

impl FieldErrors {
    pub fn get(&self, field: Field) -> &FieldError {
        match field {
            Field::Id => &self.id,
            Field::Name => &self.name,
            Field::Description => &self.description,
            Field::LogoUrl => &self.logo_url,
            Field::ReleaseDate => &self.release_date,
            Field::RevisionDate => &self.revision_date,
        }
    }

    pub fn set(&mut self, field: Field, error: FieldError) {
        let slot = match field {
            Field::Id => &mut self.id,
            Field::Name => &mut self.name,
            Field::Description => &mut self.description,
            Field::LogoUrl => &mut self.logo_url,
            Field::ReleaseDate => &mut self.release_date,
            Field::RevisionDate => &mut self.revision_date,
        };
        *slot = error;
    }

    /// Return every slot to `Untouched`.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// True when no slot holds an active message.
    pub fn is_valid(&self) -> bool {
        Field::ALL.iter().all(|f| !self.get(*f).is_invalid())
    }

    /// Fields currently holding an active message, in form order.
    pub fn invalid_fields(&self) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|f| self.get(*f).is_invalid())
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Length rules
// ---------------------------------------------------------------------------

/// Required text field with an inclusive character-length range.
#[derive(Debug, Clone, Copy)]
pub struct TextRule {
    pub required_message: &'static str,
    pub length_message: &'static str,
    pub min: u64,
    pub max: u64,
}

pub const ID_RULE: TextRule = TextRule {
    required_message: "ID es requerido",
    length_message: "ID debe tener entre 3 y 10 caracteres",
    min: 3,
    max: 10,
};

pub const NAME_RULE: TextRule = TextRule {
    required_message: "Nombre es requerido",
    length_message: "Nombre debe tener entre 6 y 100 caracteres",
    min: 6,
    max: 100,
};

pub const DESCRIPTION_RULE: TextRule = TextRule {
    required_message: "Descripción es requerida",
    length_message: "Descripción debe tener entre 10 y 200 caracteres",
    min: DESCRIPTION_MIN_LENGTH,
    max: DESCRIPTION_MAX_LENGTH,
};

pub const DESCRIPTION_MIN_LENGTH: u64 = 10;
pub const DESCRIPTION_MAX_LENGTH: u64 = 200;

// ---------------------------------------------------------------------------
// Messages
// ---------------------------------------------------------------------------

pub const LOGO_REQUIRED: &str = "Logo es requerido";

pub const RELEASE_DATE_REQUIRED: &str = "Fecha de liberación es requerida";
pub const RELEASE_DATE_INVALID: &str = "Fecha de liberación inválida";
pub const RELEASE_DATE_IN_PAST: &str = "Fecha de liberación no puede ser menor a hoy";

pub const REVISION_DATE_REQUIRED: &str = "Fecha de revisión es requerida";
pub const REVISION_DATE_INVALID: &str = "Fecha de revisión inválida";
pub const REVISION_DATE_MISMATCH: &str =
    "Fecha de revisión debe ser exactamente un año posterior a la liberación";

/// Set by the save workflow when the backend reports the id as taken.
pub const ID_ALREADY_EXISTS: &str = "ID ya existe";

/// Set by the live id check when a loaded record already uses the id.
pub const ID_ALREADY_LISTED: &str = "ID ya existente";
