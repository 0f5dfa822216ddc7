use thiserror::Error;

use crate::model::FieldKind;

// ============================================================================
// Error Types
// ============================================================================

/// Errors raised while rendering a feed document.
///
/// Missing optional data is never an error; absent fields are simply left
/// out of the output. These variants cover input that has the wrong shape
/// for the writer asked to render it.
#[derive(Debug, Error)]
pub enum RenderError {
    /// A field holds a value the writer cannot render as element text,
    /// e.g. a person list handed to the plain tag writer.
    #[error("Field `{field}` of {entity} holds {found}, expected {expected}")]
    InvalidFieldKind {
        entity: &'static str,
        field: String,
        expected: &'static str,
        found: FieldKind,
    },

    /// The record has no field with this element name.
    #[error("Unknown field `{field}` on {entity}")]
    UnknownField { entity: &'static str, field: String },

    /// JSON Feed serialization failed.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl RenderError {
    pub(crate) fn invalid_kind(
        entity: &'static str,
        field: &str,
        expected: &'static str,
        found: FieldKind,
    ) -> Self {
        RenderError::InvalidFieldKind {
            entity,
            field: field.to_string(),
            expected,
            found,
        }
    }
}
