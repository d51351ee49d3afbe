//! Payment Lifecycle Manager
//!
//! Orchestrates the checkout state machine per transaction: session
//! creation, on-demand status reconciliation (client poll), and webhook
//! intake. The provider is always the source of truth; the local record
//! follows it.
//!
//! Both reconciliation paths apply the same compare-then-write policy:
//! the local record is only touched when the provider-reported status
//! actually differs, so redundant polls and webhook redeliveries cause no
//! writes and no duplicate downstream side effects.

use std::collections::HashMap;
use std::sync::Arc;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use spa_core::catalog::{Catalog, ServiceCatalogEntry};

use crate::error::{PaymentError, Result};
use crate::provider::{PaymentProvider, ProviderEvent, SessionRequest, SessionStatus};
use crate::transaction::{PaymentTransaction, TransactionStore};

/// Placeholder Stripe substitutes with the real session id after redirect
const SESSION_ID_PLACEHOLDER: &str = "{CHECKOUT_SESSION_ID}";

/// Request to start a checkout
#[derive(Clone, Debug, Deserialize)]
pub struct CheckoutIntent {
    pub service_id: String,
    pub customer_email: String,
    pub customer_name: Option<String>,
    /// Quantity for unit-based services; ignored otherwise
    pub units: u32,
    /// Caller-supplied redirect overrides
    pub success_url: Option<String>,
    pub cancel_url: Option<String>,
}

/// Response to a successful checkout creation
#[derive(Clone, Debug, Serialize)]
pub struct CheckoutCreated {
    pub checkout_url: String,
    pub session_id: String,
    pub amount: Decimal,
    /// Resolved service display name
    pub service: String,
    pub description: String,
}

/// The payment lifecycle manager
pub struct PaymentLifecycle {
    catalog: Arc<Catalog>,
    provider: Arc<dyn PaymentProvider>,
    store: Arc<dyn TransactionStore>,
    currency: String,
    public_base_url: String,
}

impl PaymentLifecycle {
    pub fn new(
        catalog: Arc<Catalog>,
        provider: Arc<dyn PaymentProvider>,
        store: Arc<dyn TransactionStore>,
        currency: String,
        public_base_url: String,
    ) -> Self {
        Self {
            catalog,
            provider,
            store,
            currency,
            public_base_url,
        }
    }

    /// Open a checkout session with the provider and persist a pending
    /// transaction. The local write happens only after the provider call
    /// succeeds; a provider failure leaves no record behind.
    pub async fn create_checkout(&self, intent: CheckoutIntent) -> Result<CheckoutCreated> {
        let entry = self
            .catalog
            .get(&intent.service_id)
            .ok_or_else(|| PaymentError::UnknownService(intent.service_id.clone()))?;

        let units = intent.units.max(1);
        let amount = compute_amount(entry, units);
        let description = describe(entry, units);

        let success_url = intent.success_url.unwrap_or_else(|| {
            format!(
                "{}/payment/success?session_id={SESSION_ID_PLACEHOLDER}",
                self.public_base_url
            )
        });
        let cancel_url = intent
            .cancel_url
            .unwrap_or_else(|| format!("{}/payment/cancel", self.public_base_url));

        let mut metadata = HashMap::new();
        metadata.insert("service_id".to_string(), entry.id.clone());
        metadata.insert("customer_email".to_string(), intent.customer_email.clone());
        if let Some(name) = &intent.customer_name {
            metadata.insert("customer_name".to_string(), name.clone());
        }
        metadata.insert("units".to_string(), units.to_string());
        metadata.insert("description".to_string(), description.clone());

        let request = SessionRequest {
            amount,
            currency: self.currency.clone(),
            description: description.clone(),
            customer_email: intent.customer_email.clone(),
            success_url,
            cancel_url,
            metadata: metadata.clone(),
        };

        let session = self.provider.create_session(&request).await.map_err(|e| {
            tracing::error!(service = %entry.id, error = %e, "checkout session creation failed");
            e
        })?;

        let transaction = PaymentTransaction::new(
            entry.id.clone(),
            amount,
            self.currency.clone(),
            intent.customer_email,
            intent.customer_name,
            session.session_id.clone(),
            metadata,
        );
        self.store.insert(&transaction)?;

        tracing::info!(
            session_id = %transaction.session_id,
            service = %entry.id,
            %amount,
            "checkout session created"
        );

        Ok(CheckoutCreated {
            checkout_url: session.checkout_url,
            session_id: transaction.session_id,
            amount,
            service: entry.name.clone(),
            description,
        })
    }

    /// Fetch the live session status from the provider and reconcile the
    /// local record. A missing local record is a reconciliation gap (the
    /// create step's persistence failed after the provider call); log it
    /// and answer with provider data only.
    pub async fn check_status(&self, session_id: &str) -> Result<SessionStatus> {
        let status = self.provider.get_session(session_id).await?;

        match self.store.find_by_session(session_id)? {
            Some(transaction) => {
                if transaction.payment_status == status.payment_status {
                    tracing::debug!(session_id, "status unchanged; skipping write");
                } else {
                    self.store
                        .update_status(session_id, &status.payment_status)?;
                    tracing::info!(
                        session_id,
                        from = %transaction.payment_status,
                        to = %status.payment_status,
                        "transaction status reconciled"
                    );
                }
            }
            None => {
                tracing::warn!(
                    session_id,
                    "no local transaction for session; answering with provider data only"
                );
            }
        }

        Ok(status)
    }

    /// Verify a webhook delivery and apply its status to the local record.
    ///
    /// Once the event is structurally valid this always succeeds: an event
    /// with no matching transaction, or a storage failure while applying
    /// it, is logged and acknowledged anyway so provider redelivery is not
    /// amplified into an error storm.
    pub fn process_webhook(&self, payload: &str, signature: &str) -> Result<ProviderEvent> {
        let event = self.provider.verify_webhook(payload, signature)?;

        let (Some(session_id), Some(payment_status)) = (&event.session_id, &event.payment_status)
        else {
            tracing::debug!(event_type = %event.event_type, "ignoring non-checkout webhook event");
            return Ok(event);
        };

        match self.store.find_by_session(session_id) {
            Ok(Some(transaction)) => {
                if transaction.payment_status == *payment_status {
                    tracing::debug!(session_id, "webhook status unchanged; skipping write");
                } else if let Err(e) = self.store.update_status(session_id, payment_status) {
                    tracing::error!(session_id, error = %e, "webhook status write failed");
                } else {
                    tracing::info!(
                        session_id,
                        event_type = %event.event_type,
                        status = %payment_status,
                        "transaction status updated from webhook"
                    );
                }
            }
            Ok(None) => {
                tracing::warn!(session_id, "webhook for unknown session; acknowledging anyway");
            }
            Err(e) => {
                tracing::error!(session_id, error = %e, "webhook transaction lookup failed");
            }
        }

        Ok(event)
    }

    /// Admin listing of all local transaction records
    pub fn transactions(&self) -> Result<Vec<PaymentTransaction>> {
        self.store.list()
    }
}

/// Unit-based services scale with quantity; everything else ignores it
fn compute_amount(entry: &ServiceCatalogEntry, units: u32) -> Decimal {
    if entry.unit_based {
        entry.price * Decimal::from(units)
    } else {
        entry.price
    }
}

fn describe(entry: &ServiceCatalogEntry, units: u32) -> String {
    if entry.unit_based {
        format!("{} ({units} units)", entry.name)
    } else {
        entry.name.clone()
    }
}
