//! Wire DTOs and request validation.

pub mod request;
pub mod response;

use validator::Validate;

use docvault_core::error::{AppError, FieldError};

/// Runs `validator` checks and folds failures into field-level entries.
pub fn validate(req: &impl Validate) -> Result<(), AppError> {
    let Err(errors) = req.validate() else {
        return Ok(());
    };

    let mut fields = Vec::new();
    for (field, failures) in errors.field_errors() {
        for failure in failures {
            let message = failure
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| format!("Invalid value for {field}"));
            fields.push(FieldError {
                field: field.to_string(),
                message,
            });
        }
    }
    Err(AppError::validation_fields(fields))
}
