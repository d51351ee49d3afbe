//! Payment Provider Integration
//!
//! Abstraction over the external checkout provider plus its
//! implementations. The trait is deliberately narrow: open a session,
//! fetch live session status, verify-and-parse a webhook delivery.

mod mock;
mod stripe;

pub use mock::MockPaymentProvider;
pub use stripe::StripeProvider;

use std::collections::HashMap;

use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Request to open a checkout session with the provider
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SessionRequest {
    /// Total amount in currency units
    pub amount: Decimal,

    /// ISO currency code, e.g. "usd"
    pub currency: String,

    /// Line-item description shown on the hosted page
    pub description: String,

    /// Customer email, prefilled on the hosted page
    pub customer_email: String,

    /// Redirect after successful payment; may embed the provider's
    /// session-id placeholder token
    pub success_url: String,

    /// Redirect when checkout is cancelled
    pub cancel_url: String,

    /// Opaque metadata echoed back by the provider, so events can be
    /// interpreted without a local lookup
    pub metadata: HashMap<String, String>,
}

/// Result of opening a checkout session
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CreatedSession {
    /// Provider-issued session id
    pub session_id: String,

    /// Hosted checkout page to redirect the customer to
    pub checkout_url: String,
}

/// Live session state as reported by the provider
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SessionStatus {
    pub session_id: String,

    /// Session state, e.g. "open", "complete", "expired"
    pub status: String,

    /// Normalized payment status: "pending", "paid", "failed", "expired",
    /// provider-specific values passed through verbatim
    pub payment_status: String,

    /// Total in currency units, when the provider reports one
    pub amount_total: Option<Decimal>,

    pub currency: Option<String>,

    pub metadata: HashMap<String, String>,
}

/// A verified, normalized webhook event
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ProviderEvent {
    /// Provider event type, e.g. "checkout.session.completed"
    pub event_type: String,

    /// Checkout session the event refers to, when it carries one
    pub session_id: Option<String>,

    /// Normalized payment status carried by the event
    pub payment_status: Option<String>,
}

/// Payment provider trait
///
/// Implement this per provider; handlers and the lifecycle manager only
/// ever see this interface.
#[async_trait]
pub trait PaymentProvider: Send + Sync {
    /// Open a checkout session
    async fn create_session(&self, request: &SessionRequest) -> Result<CreatedSession>;

    /// Fetch the live state of an existing session
    async fn get_session(&self, session_id: &str) -> Result<SessionStatus>;

    /// Verify a webhook delivery's signature and parse it into a
    /// normalized event
    fn verify_webhook(&self, payload: &str, signature: &str) -> Result<ProviderEvent>;

    /// Provider name
    fn name(&self) -> &str;
}
