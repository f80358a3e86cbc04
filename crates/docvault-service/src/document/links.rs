//! Per-recipient signed link issuance.

use std::sync::Arc;

use tracing::warn;

use docvault_auth::JwtEncoder;
use docvault_entity::document::{Document, Recipient, SecureLink};

/// Mints signed, expiring view links for the recipients of a document.
///
/// Links are derived values: nothing is persisted and an individual link
/// cannot be revoked before its token expires. The expiry clock starts at
/// issuance, not at upload.
#[derive(Debug, Clone)]
pub struct SecureLinkIssuer {
    encoder: Arc<JwtEncoder>,
    base_url: String,
}

impl SecureLinkIssuer {
    /// Creates an issuer rendering links under the given public base URL.
    pub fn new(encoder: Arc<JwtEncoder>, base_url: String) -> Self {
        Self {
            encoder,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Issues one link per recipient, preserving recipient order.
    ///
    /// Issuance is best-effort: a recipient whose token cannot be minted
    /// is logged and skipped rather than failing the batch.
    pub fn issue(&self, document: &Document, recipients: &[Recipient]) -> Vec<SecureLink> {
        let mut links = Vec::with_capacity(recipients.len());
        for recipient in recipients {
            match self.encoder.generate_document_token(
                document.id,
                recipient.user_id,
                document.expiry_days,
            ) {
                Ok((token, expires_at)) => links.push(SecureLink {
                    user_id: recipient.user_id,
                    email: recipient.email.clone(),
                    link: format!("{}/view/{}", self.base_url, token),
                    expires_at,
                }),
                Err(err) => {
                    warn!(
                        document_id = %document.id,
                        recipient_id = %recipient.user_id,
                        error = %err,
                        "Failed to issue document link"
                    );
                }
            }
        }
        links
    }
}
