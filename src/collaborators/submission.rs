// ABOUTME: Hands the finished registration draft to whoever creates the seller account

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::time::Duration;
use tracing::{info, warn};
use uuid::Uuid;

use super::{CollaboratorError, Result};
use crate::wizard::RegistrationDraft;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountReceipt {
    pub account_id: String,
    pub submitted_at: DateTime<Utc>,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmissionClient: Send + Sync {
    async fn submit(&self, draft: &RegistrationDraft) -> Result<AccountReceipt>;
}

/// Accepts every draft without sending it anywhere
#[derive(Debug, Clone, Default)]
pub struct LocalSubmission;

#[async_trait]
impl SubmissionClient for LocalSubmission {
    async fn submit(&self, draft: &RegistrationDraft) -> Result<AccountReceipt> {
        let account_id = Uuid::new_v4().to_string();
        info!(
            account_id = %account_id,
            store = %draft.store_setup.store_name,
            regions = draft.shipping_policies.shipping_regions.len(),
            phone_verified = draft.verification.phone_verified,
            email_verified = draft.verification.email_verified,
            "Registration accepted locally"
        );
        Ok(AccountReceipt {
            account_id,
            submitted_at: Utc::now(),
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SubmissionResponse {
    account_id: String,
}

/// POSTs the draft as JSON and expects `{"accountId": "..."}` back
#[derive(Debug, Clone)]
pub struct HttpSubmissionClient {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpSubmissionClient {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| CollaboratorError::Transport(e.to_string()))?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl SubmissionClient for HttpSubmissionClient {
    async fn submit(&self, draft: &RegistrationDraft) -> Result<AccountReceipt> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(draft)
            .send()
            .await
            .map_err(|e| CollaboratorError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = %status, "Registration rejected");
            return Err(CollaboratorError::Rejected(format!("{status}: {body}")));
        }

        let parsed: SubmissionResponse = response
            .json()
            .await
            .map_err(|e| CollaboratorError::InvalidResponse(e.to_string()))?;

        info!(account_id = %parsed.account_id, "Registration submitted");
        Ok(AccountReceipt {
            account_id: parsed.account_id,
            submitted_at: Utc::now(),
        })
    }
}
