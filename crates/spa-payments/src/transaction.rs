//! Payment Transaction Records
//!
//! One local record per checkout session. Created when a session is
//! opened, mutated only by status transitions, never deleted.

use std::collections::HashMap;
use std::sync::RwLock;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{PaymentError, Result};

/// Initial payment status for a new transaction
pub const PAYMENT_STATUS_PENDING: &str = "pending";

/// Local bookkeeping record for one checkout session
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PaymentTransaction {
    pub id: String,
    pub service_id: String,
    pub amount: Decimal,
    pub currency: String,
    pub customer_email: String,
    pub customer_name: Option<String>,
    /// Provider-issued checkout session id; unique across transactions
    pub session_id: String,
    /// "pending" until the provider reports otherwise; terminal values are
    /// overwritten-on-change with no further transition logic
    pub payment_status: String,
    pub metadata: HashMap<String, String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PaymentTransaction {
    pub fn new(
        service_id: String,
        amount: Decimal,
        currency: String,
        customer_email: String,
        customer_name: Option<String>,
        session_id: String,
        metadata: HashMap<String, String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            service_id,
            amount,
            currency,
            customer_email,
            customer_name,
            session_id,
            payment_status: PAYMENT_STATUS_PENDING.to_string(),
            metadata,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Transaction storage trait
pub trait TransactionStore: Send + Sync {
    /// Insert a new transaction; fails on a duplicate session id
    fn insert(&self, transaction: &PaymentTransaction) -> Result<()>;

    fn find_by_session(&self, session_id: &str) -> Result<Option<PaymentTransaction>>;

    /// Set the payment status and bump `updated_at`; returns whether a
    /// record matched the session id
    fn update_status(&self, session_id: &str, payment_status: &str) -> Result<bool>;

    /// All transactions, newest first
    fn list(&self) -> Result<Vec<PaymentTransaction>>;
}

/// In-memory transaction store (for development and tests)
pub struct MemoryTransactionStore {
    transactions: RwLock<HashMap<String, PaymentTransaction>>,
}

impl Default for MemoryTransactionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryTransactionStore {
    pub fn new() -> Self {
        Self {
            transactions: RwLock::new(HashMap::new()),
        }
    }
}

impl TransactionStore for MemoryTransactionStore {
    fn insert(&self, transaction: &PaymentTransaction) -> Result<()> {
        let mut transactions = self.transactions.write().unwrap();
        if transactions.contains_key(&transaction.session_id) {
            return Err(PaymentError::Storage(format!(
                "duplicate transaction for session {}",
                transaction.session_id
            )));
        }
        transactions.insert(transaction.session_id.clone(), transaction.clone());
        Ok(())
    }

    fn find_by_session(&self, session_id: &str) -> Result<Option<PaymentTransaction>> {
        let transactions = self.transactions.read().unwrap();
        Ok(transactions.get(session_id).cloned())
    }

    fn update_status(&self, session_id: &str, payment_status: &str) -> Result<bool> {
        let mut transactions = self.transactions.write().unwrap();
        match transactions.get_mut(session_id) {
            Some(transaction) => {
                transaction.payment_status = payment_status.to_string();
                transaction.updated_at = Utc::now();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn list(&self) -> Result<Vec<PaymentTransaction>> {
        let transactions = self.transactions.read().unwrap();
        let mut all: Vec<PaymentTransaction> = transactions.values().cloned().collect();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(all)
    }
}
