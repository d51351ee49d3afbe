//! Mock Payment Provider
//!
//! For testing and demo purposes. Records created sessions, serves
//! scripted session statuses, and treats webhook payloads as
//! pre-normalized JSON events.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use super::{CreatedSession, PaymentProvider, ProviderEvent, SessionRequest, SessionStatus};
use crate::error::{PaymentError, Result};

/// Mock provider with scripted behavior
pub struct MockPaymentProvider {
    created: Mutex<Vec<SessionRequest>>,
    statuses: Mutex<HashMap<String, SessionStatus>>,
    fail_create: bool,
}

impl Default for MockPaymentProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl MockPaymentProvider {
    pub fn new() -> Self {
        Self {
            created: Mutex::new(Vec::new()),
            statuses: Mutex::new(HashMap::new()),
            fail_create: false,
        }
    }

    /// A provider whose session creation always fails
    pub fn failing() -> Self {
        Self {
            fail_create: true,
            ..Self::new()
        }
    }

    /// Session requests seen so far
    pub fn created(&self) -> Vec<SessionRequest> {
        self.created.lock().unwrap().clone()
    }

    /// Script the status returned for a session id
    pub fn script_status(&self, status: SessionStatus) {
        self.statuses
            .lock()
            .unwrap()
            .insert(status.session_id.clone(), status);
    }
}

#[async_trait]
impl PaymentProvider for MockPaymentProvider {
    async fn create_session(&self, request: &SessionRequest) -> Result<CreatedSession> {
        if self.fail_create {
            return Err(PaymentError::Provider("simulated provider outage".into()));
        }

        let mut created = self.created.lock().unwrap();
        created.push(request.clone());
        let session_id = format!("cs_mock_{}", created.len());

        Ok(CreatedSession {
            checkout_url: format!("https://checkout.mock.local/c/{session_id}"),
            session_id,
        })
    }

    async fn get_session(&self, session_id: &str) -> Result<SessionStatus> {
        if let Some(status) = self.statuses.lock().unwrap().get(session_id) {
            return Ok(status.clone());
        }

        // Unscripted sessions look like a freshly opened checkout
        Ok(SessionStatus {
            session_id: session_id.to_string(),
            status: "open".to_string(),
            payment_status: "pending".to_string(),
            amount_total: None,
            currency: None,
            metadata: HashMap::new(),
        })
    }

    fn verify_webhook(&self, payload: &str, signature: &str) -> Result<ProviderEvent> {
        if signature.is_empty() {
            return Err(PaymentError::WebhookSignature("empty signature".into()));
        }

        serde_json::from_str(payload).map_err(|e| PaymentError::WebhookParse(e.to_string()))
    }

    fn name(&self) -> &str {
        "mock"
    }
}
