//! Document handlers — multipart upload and upload history.

use axum::Json;
use axum::extract::{Multipart, State};
use bytes::Bytes;
use uuid::Uuid;

use docvault_core::error::AppError;
use docvault_entity::document::Document;
use docvault_service::document::DocumentUpload;

use crate::dto::response::UploadResponse;
use crate::error::ApiError;
use crate::extractors::AuthPrincipal;
use crate::state::AppState;

/// POST /api/documents/upload
///
/// Multipart form: file under field `document`, `recipients` as a
/// JSON-encoded array of group ids, `expiryDays`, `viewOnce` and
/// `watermark` as form strings.
pub async fn upload(
    State(state): State<AppState>,
    auth: AuthPrincipal,
    multipart: Multipart,
) -> Result<Json<UploadResponse>, ApiError> {
    let upload = parse_upload(multipart).await?;

    let outcome = state.document_service.upload(auth.context(), upload).await?;

    Ok(Json(UploadResponse {
        msg: "Document uploaded and metadata saved successfully.".to_string(),
        document_id: outcome.document.id,
        recipients_count: outcome.recipients_count,
        links: outcome.links,
    }))
}

/// GET /api/documents
pub async fn list(
    State(state): State<AppState>,
    auth: AuthPrincipal,
) -> Result<Json<Vec<Document>>, ApiError> {
    let documents = state.document_service.list(auth.context()).await?;
    Ok(Json(documents))
}

/// Decodes the multipart form into a service-level upload.
async fn parse_upload(mut multipart: Multipart) -> Result<DocumentUpload, ApiError> {
    let mut file: Option<(String, Bytes)> = None;
    let mut recipients: Option<Vec<Uuid>> = None;
    let mut expiry_days: Option<i32> = None;
    let mut view_once = false;
    let mut watermark = false;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::validation(format!("Malformed multipart body: {e}")))?
    {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };
        match name.as_str() {
            "document" => {
                let file_name = field
                    .file_name()
                    .map(str::to_string)
                    .ok_or_else(|| AppError::validation("No file uploaded."))?;
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::validation(format!("Failed to read file: {e}")))?;
                file = Some((file_name, data));
            }
            "recipients" => {
                let raw = read_text(field).await?;
                let ids: Vec<Uuid> = serde_json::from_str(&raw).map_err(|_| {
                    AppError::validation("Recipients must be a JSON array of group ids.")
                })?;
                recipients = Some(ids);
            }
            "expiryDays" => {
                let raw = read_text(field).await?;
                let days: i32 = raw.trim().parse().map_err(|_| {
                    AppError::validation("Expiry must be a positive number of days.")
                })?;
                expiry_days = Some(days);
            }
            // Boolean form fields arrive as the strings "true"/"false".
            "viewOnce" => view_once = read_text(field).await? == "true",
            "watermark" => watermark = read_text(field).await? == "true",
            _ => {}
        }
    }

    let (file_name, data) = file.ok_or_else(|| AppError::validation("No file uploaded."))?;
    let recipients =
        recipients.ok_or_else(|| AppError::validation("Recipient groups are required."))?;

    Ok(DocumentUpload {
        file_name,
        data,
        recipients,
        expiry_days,
        view_once,
        watermark,
    })
}

async fn read_text(field: axum::extract::multipart::Field<'_>) -> Result<String, AppError> {
    field
        .text()
        .await
        .map_err(|e| AppError::validation(format!("Malformed multipart field: {e}")))
}
