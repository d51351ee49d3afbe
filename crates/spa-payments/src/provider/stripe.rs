//! Stripe Checkout Integration
//!
//! Implements [`PaymentProvider`] over the "Stripe Checkout (Hosted)"
//! approach: one-time payment sessions with inline price data, live
//! session retrieval, and signed webhook parsing.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use stripe::{
    CheckoutSession, CheckoutSessionId, CheckoutSessionMode, CheckoutSessionPaymentStatus,
    CheckoutSessionStatus, Client, CreateCheckoutSession, CreateCheckoutSessionLineItems,
    CreateCheckoutSessionLineItemsPriceData, CreateCheckoutSessionLineItemsPriceDataProductData,
    Currency, Event, EventObject, EventType, Webhook,
};

use async_trait::async_trait;

use super::{CreatedSession, PaymentProvider, ProviderEvent, SessionRequest, SessionStatus};
use crate::error::{PaymentError, Result};

/// Stripe client wrapper
pub struct StripeProvider {
    client: Client,
    webhook_secret: String,
}

impl StripeProvider {
    /// Create a new Stripe provider
    pub fn new(secret_key: &str, webhook_secret: &str) -> Self {
        Self {
            client: Client::new(secret_key),
            webhook_secret: webhook_secret.to_string(),
        }
    }

    /// Create from environment variables
    pub fn from_env() -> Result<Self> {
        let secret_key = std::env::var("STRIPE_SECRET_KEY")
            .map_err(|_| PaymentError::Config("STRIPE_SECRET_KEY not set".into()))?;
        let webhook_secret = std::env::var("STRIPE_WEBHOOK_SECRET")
            .map_err(|_| PaymentError::Config("STRIPE_WEBHOOK_SECRET not set".into()))?;

        Ok(Self::new(&secret_key, &webhook_secret))
    }
}

#[async_trait]
impl PaymentProvider for StripeProvider {
    async fn create_session(&self, request: &SessionRequest) -> Result<CreatedSession> {
        let currency = parse_currency(&request.currency)?;
        let unit_amount = to_cents(request.amount)?;

        let mut params = CreateCheckoutSession::new();
        params.customer_email = Some(&request.customer_email);
        params.success_url = Some(&request.success_url);
        params.cancel_url = Some(&request.cancel_url);
        params.mode = Some(CheckoutSessionMode::Payment);
        params.metadata = Some(request.metadata.clone());

        params.line_items = Some(vec![CreateCheckoutSessionLineItems {
            quantity: Some(1),
            price_data: Some(CreateCheckoutSessionLineItemsPriceData {
                currency,
                unit_amount: Some(unit_amount),
                product_data: Some(CreateCheckoutSessionLineItemsPriceDataProductData {
                    name: request.description.clone(),
                    ..Default::default()
                }),
                ..Default::default()
            }),
            ..Default::default()
        }]);

        let session = CheckoutSession::create(&self.client, params)
            .await
            .map_err(|e| PaymentError::Provider(e.to_string()))?;

        let checkout_url = session
            .url
            .ok_or_else(|| PaymentError::Provider("no checkout URL returned".into()))?;

        Ok(CreatedSession {
            session_id: session.id.to_string(),
            checkout_url,
        })
    }

    async fn get_session(&self, session_id: &str) -> Result<SessionStatus> {
        let id = session_id
            .parse::<CheckoutSessionId>()
            .map_err(|e| PaymentError::Provider(format!("invalid session id: {e}")))?;

        let session = CheckoutSession::retrieve(&self.client, &id, &[])
            .await
            .map_err(|e| PaymentError::Provider(e.to_string()))?;

        Ok(session_status(&session))
    }

    fn verify_webhook(&self, payload: &str, signature: &str) -> Result<ProviderEvent> {
        let event = Webhook::construct_event(payload, signature, &self.webhook_secret)
            .map_err(|e| PaymentError::WebhookSignature(e.to_string()))?;

        Ok(normalize_event(&event))
    }

    fn name(&self) -> &str {
        "stripe"
    }
}

fn parse_currency(code: &str) -> Result<Currency> {
    match code.to_lowercase().as_str() {
        "usd" => Ok(Currency::USD),
        "eur" => Ok(Currency::EUR),
        other => Err(PaymentError::Config(format!(
            "unsupported currency: {other}"
        ))),
    }
}

fn to_cents(amount: Decimal) -> Result<i64> {
    (amount * Decimal::from(100))
        .round()
        .to_i64()
        .ok_or_else(|| PaymentError::Config(format!("amount out of range: {amount}")))
}

fn from_cents(cents: i64) -> Decimal {
    Decimal::from(cents) / Decimal::from(100)
}

fn session_status(session: &CheckoutSession) -> SessionStatus {
    SessionStatus {
        session_id: session.id.to_string(),
        status: session
            .status
            .map(|s| s.to_string())
            .unwrap_or_else(|| "unknown".to_string()),
        payment_status: normalize_payment_status(session.status, session.payment_status),
        amount_total: session.amount_total.map(from_cents),
        currency: session.currency.map(|c| c.to_string()),
        metadata: session.metadata.clone().unwrap_or_default(),
    }
}

/// Map Stripe's session/payment status pair onto the local vocabulary:
/// an expired session is "expired", an unpaid-but-open session is still
/// "pending", anything unrecognized passes through verbatim.
fn normalize_payment_status(
    status: Option<CheckoutSessionStatus>,
    payment_status: CheckoutSessionPaymentStatus,
) -> String {
    if matches!(status, Some(CheckoutSessionStatus::Expired)) {
        return "expired".to_string();
    }
    match payment_status {
        CheckoutSessionPaymentStatus::Paid => "paid".to_string(),
        CheckoutSessionPaymentStatus::Unpaid => "pending".to_string(),
        other => other.to_string(),
    }
}

fn normalize_event(event: &Event) -> ProviderEvent {
    let event_type = event.type_.to_string();

    let session = match &event.data.object {
        EventObject::CheckoutSession(session) => session,
        _ => {
            return ProviderEvent {
                event_type,
                session_id: None,
                payment_status: None,
            };
        }
    };

    let payment_status = match &event.type_ {
        EventType::CheckoutSessionCompleted => {
            normalize_payment_status(session.status, session.payment_status)
        }
        EventType::CheckoutSessionAsyncPaymentSucceeded => "paid".to_string(),
        EventType::CheckoutSessionAsyncPaymentFailed => "failed".to_string(),
        EventType::CheckoutSessionExpired => "expired".to_string(),
        _ => {
            return ProviderEvent {
                event_type,
                session_id: None,
                payment_status: None,
            };
        }
    };

    ProviderEvent {
        event_type,
        session_id: Some(session.id.to_string()),
        payment_status: Some(payment_status),
    }
}
