//! Contact Ledger
//!
//! Fire-and-forget submission store. Pure append, no dedup; shape
//! validation (email syntax, non-empty message) happens at the DTO layer.

use std::sync::{Arc, RwLock};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Status every submission is stored with
pub const CONTACT_STATUS_NEW: &str = "new";

/// A contact form submission
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ContactMessage {
    pub id: String,
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

/// Contact message storage trait
pub trait ContactStore: Send + Sync {
    fn insert(&self, message: &ContactMessage) -> Result<()>;

    /// All submissions, newest first
    fn list(&self) -> Result<Vec<ContactMessage>>;
}

/// In-memory contact store (for development and tests)
pub struct MemoryContactStore {
    messages: RwLock<Vec<ContactMessage>>,
}

impl Default for MemoryContactStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryContactStore {
    pub fn new() -> Self {
        Self {
            messages: RwLock::new(Vec::new()),
        }
    }
}

impl ContactStore for MemoryContactStore {
    fn insert(&self, message: &ContactMessage) -> Result<()> {
        let mut messages = self.messages.write().unwrap();
        messages.push(message.clone());
        Ok(())
    }

    fn list(&self) -> Result<Vec<ContactMessage>> {
        let messages = self.messages.read().unwrap();
        let mut all = messages.clone();
        all.reverse();
        Ok(all)
    }
}

/// Append-only intake for contact submissions
pub struct ContactLedger {
    store: Arc<dyn ContactStore>,
}

impl ContactLedger {
    pub fn new(store: Arc<dyn ContactStore>) -> Self {
        Self { store }
    }

    pub fn submit(
        &self,
        full_name: String,
        email: String,
        phone: Option<String>,
        message: String,
    ) -> Result<ContactMessage> {
        let submission = ContactMessage {
            id: uuid::Uuid::new_v4().to_string(),
            full_name,
            email,
            phone,
            message,
            status: CONTACT_STATUS_NEW.to_string(),
            created_at: Utc::now(),
        };
        self.store.insert(&submission)?;

        tracing::info!(email = %submission.email, "contact message received");
        Ok(submission)
    }

    pub fn list(&self) -> Result<Vec<ContactMessage>> {
        self.store.list()
    }
}
