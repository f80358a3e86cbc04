use std::path::Path;
use std::sync::Arc;

use bytes::Bytes;
use tracing::{info, warn};
use uuid::Uuid;

use docvault_core::config::storage::StorageConfig;
use docvault_core::error::AppError;
use docvault_database::repositories::document::DocumentRepository;
use docvault_database::repositories::group::GroupRepository;
use docvault_entity::document::{CreateDocument, Document, SecureLink};

use crate::context::RequestContext;
use crate::storage::DocumentStore;

use super::links::SecureLinkIssuer;

/// An upload as received from the API layer, after multipart decoding.
#[derive(Debug, Clone)]
pub struct DocumentUpload {
    /// File name as sent by the client.
    pub file_name: String,
    /// Raw file bytes.
    pub data: Bytes,
    /// Recipient group ids.
    pub recipients: Vec<Uuid>,
    /// Link validity window in days; falls back to the document default.
    pub expiry_days: Option<i32>,
    /// View-once policy flag.
    pub view_once: bool,
    /// Watermark policy flag.
    pub watermark: bool,
}

/// Result of a successful upload.
#[derive(Debug, Clone)]
pub struct UploadOutcome {
    /// The persisted document.
    pub document: Document,
    /// Number of distinct individual recipients after group expansion.
    pub recipients_count: usize,
    /// Signed links, one per expanded recipient.
    pub links: Vec<SecureLink>,
}

/// Orchestrates document upload, storage, and link issuance.
#[derive(Debug, Clone)]
pub struct DocumentService {
    document_repo: Arc<DocumentRepository>,
    group_repo: Arc<GroupRepository>,
    store: Arc<dyn DocumentStore>,
    issuer: SecureLinkIssuer,
    storage_config: StorageConfig,
    default_expiry_days: i32,
}

impl DocumentService {
    /// Creates a new document service.
    pub fn new(
        document_repo: Arc<DocumentRepository>,
        group_repo: Arc<GroupRepository>,
        store: Arc<dyn DocumentStore>,
        issuer: SecureLinkIssuer,
        storage_config: StorageConfig,
        default_expiry_days: i32,
    ) -> Self {
        Self {
            document_repo,
            group_repo,
            store,
            issuer,
            storage_config,
            default_expiry_days,
        }
    }

    /// Uploads a document for the calling institute and issues links.
    ///
    /// The file is written to the store first; every failure after that
    /// point deletes the stored file again so no orphaned blob survives a
    /// rejected upload. Link issuance runs last and is best-effort: the
    /// document record stands even if some links cannot be minted.
    pub async fn upload(
        &self,
        ctx: &RequestContext,
        upload: DocumentUpload,
    ) -> Result<UploadOutcome, AppError> {
        let institute_id = ctx.require_institute()?;

        self.check_file(&upload)?;
        let expiry_days = match upload.expiry_days {
            Some(days) if days > 0 => days,
            Some(_) => {
                return Err(AppError::validation(
                    "Expiry must be a positive number of days.",
                ));
            }
            None => self.default_expiry_days,
        };
        if upload.recipients.is_empty() {
            return Err(AppError::validation("Recipient groups are required."));
        }

        let file_path = self.store.store(&upload.file_name, upload.data).await?;

        // Unknown ids and groups owned by other institutes are dropped
        // silently; they contribute no recipients.
        let recipients = match self.owned_groups(institute_id, &upload.recipients).await {
            Ok(recipients) => recipients,
            Err(err) => {
                self.discard(&file_path).await;
                return Err(err);
            }
        };

        let create = CreateDocument {
            institute_id,
            original_file_name: upload.file_name,
            file_path: file_path.clone(),
            recipients,
            expiry_days,
            view_once: upload.view_once,
            watermark: upload.watermark,
        };
        let document = match self.document_repo.create(&create).await {
            Ok(document) => document,
            Err(err) => {
                self.discard(&file_path).await;
                return Err(err);
            }
        };

        let recipients = self.group_repo.expand_members(&create.recipients).await?;
        let links = self.issuer.issue(&document, &recipients);

        info!(
            document_id = %document.id,
            %institute_id,
            recipients = recipients.len(),
            links = links.len(),
            "Document uploaded"
        );

        Ok(UploadOutcome {
            document,
            recipients_count: recipients.len(),
            links,
        })
    }

    /// The calling institute's upload history, newest first.
    pub async fn list(&self, ctx: &RequestContext) -> Result<Vec<Document>, AppError> {
        let institute_id = ctx.require_institute()?;
        self.document_repo.list_by_institute(institute_id).await
    }

    fn check_file(&self, upload: &DocumentUpload) -> Result<(), AppError> {
        if upload.data.is_empty() {
            return Err(AppError::validation("No file uploaded."));
        }
        if upload.data.len() as u64 > self.storage_config.max_upload_size_bytes {
            return Err(AppError::validation("File exceeds the 10MB size limit."));
        }

        let extension = Path::new(&upload.file_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        let allowed = extension
            .as_deref()
            .is_some_and(|ext| self.storage_config.allowed_extensions.iter().any(|a| a == ext));
        if !allowed {
            return Err(AppError::validation(
                "File type not supported. Only PDF, DOC, and DOCX files are allowed.",
            ));
        }
        Ok(())
    }

    /// Retains only the recipient groups owned by the uploading institute.
    async fn owned_groups(
        &self,
        institute_id: Uuid,
        group_ids: &[Uuid],
    ) -> Result<Vec<Uuid>, AppError> {
        let mut owned = Vec::with_capacity(group_ids.len());
        for group_id in group_ids {
            let keep = self
                .group_repo
                .find_by_id(*group_id)
                .await?
                .is_some_and(|g| g.institute_id == institute_id);
            if keep {
                owned.push(*group_id);
            }
        }
        Ok(owned)
    }

    async fn discard(&self, file_path: &str) {
        if let Err(err) = self.store.delete(file_path).await {
            warn!(%file_path, error = %err, "Failed to remove stored file after aborted upload");
        }
    }
}
