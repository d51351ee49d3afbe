//! HTTP Handlers
//!
//! JSON request/response layer over the ledgers and the payment
//! lifecycle. Validation here is shape-only (email syntax, non-empty
//! message); business rules live in the ledgers.

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use validator::Validate;

use spa_core::{BookingRequest, LedgerError, ServiceCatalogEntry};
use spa_payments::{CheckoutIntent, PaymentError, PaymentLifecycle};

use crate::state::AppState;

// ============================================================================
// Response Types
// ============================================================================

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub services: ServicesHealth,
}

#[derive(Serialize)]
pub struct ServicesHealth {
    pub database: &'static str,
    pub stripe: &'static str,
}

#[derive(Serialize)]
pub struct ServicesResponse {
    pub services: BTreeMap<String, ServiceCatalogEntry>,
    pub total_services: usize,
}

// ============================================================================
// Request Types
// ============================================================================

#[derive(Debug, Deserialize, Validate)]
pub struct LeadCreateRequest {
    #[validate(email)]
    pub email: String,
    pub name: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct ContactRequest {
    pub full_name: String,
    #[validate(email)]
    pub email: String,
    pub phone: Option<String>,
    #[validate(length(min = 1))]
    pub message: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct BookingCreateRequest {
    pub service_package: String,
    pub preferred_date: String,
    pub preferred_time: String,
    pub customer_name: String,
    #[validate(email)]
    pub customer_email: String,
    pub customer_phone: Option<String>,
    pub special_requests: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CheckoutRequest {
    pub service_package: String,
    #[validate(email)]
    pub customer_email: String,
    pub customer_name: Option<String>,
    #[serde(default = "default_units")]
    pub units: u32,
    pub success_url: Option<String>,
    pub cancel_url: Option<String>,
}

fn default_units() -> u32 {
    1
}

// ============================================================================
// Router
// ============================================================================

/// All API routes; the caller nests this under the public prefix and
/// attaches state and middleware.
pub fn api_router() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .route("/services", get(list_services))
        .route("/services/{id}", get(get_service))
        .route("/leads", post(create_lead).get(list_leads))
        .route("/leads/stats", get(lead_stats))
        .route("/contact", post(submit_contact).get(list_contacts))
        .route("/bookings", post(create_booking).get(list_bookings))
        .route("/payments/checkout", post(create_checkout))
        .route(
            "/payments/checkout/status/{session_id}",
            get(checkout_status),
        )
        .route("/payments/transactions", get(list_transactions))
        .route("/webhook/stripe", post(stripe_webhook))
}

// ============================================================================
// Helpers
// ============================================================================

fn error(status: StatusCode, message: &str, code: &str) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: message.to_string(),
            code: code.to_string(),
        }),
    )
}

fn validated<T: Validate>(payload: &T) -> Result<(), ApiError> {
    payload.validate().map_err(|e| {
        error(
            StatusCode::UNPROCESSABLE_ENTITY,
            &e.to_string(),
            "INVALID_INPUT",
        )
    })
}

fn storage_error(e: &LedgerError) -> ApiError {
    error(
        StatusCode::INTERNAL_SERVER_ERROR,
        e.user_message(),
        "STORAGE_ERROR",
    )
}

fn payments(state: &AppState) -> Result<&Arc<PaymentLifecycle>, ApiError> {
    state.payments.as_ref().ok_or_else(|| {
        error(
            StatusCode::SERVICE_UNAVAILABLE,
            "Payments not configured",
            "PAYMENTS_DISABLED",
        )
    })
}

// ============================================================================
// Handlers
// ============================================================================

/// Liveness message
pub async fn root() -> Json<Value> {
    Json(json!({
        "message": "Snatched Beauties API",
        "status": "ok",
    }))
}

/// Health check: configuration status of the store and payment provider
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        services: ServicesHealth {
            database: "in-memory",
            stripe: if state.payments.is_some() {
                "configured"
            } else {
                "not_configured"
            },
        },
    })
}

/// Full catalog
pub async fn list_services(State(state): State<AppState>) -> Json<ServicesResponse> {
    let services: BTreeMap<String, ServiceCatalogEntry> = state
        .catalog
        .entries()
        .map(|entry| (entry.id.clone(), entry.clone()))
        .collect();

    Json(ServicesResponse {
        total_services: services.len(),
        services,
    })
}

/// Single catalog entry
pub async fn get_service(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let entry = state.catalog.get(&id).ok_or_else(|| {
        error(
            StatusCode::NOT_FOUND,
            "Unknown service package.",
            "UNKNOWN_SERVICE",
        )
    })?;

    Ok(Json(json!({
        "service_id": entry.id,
        "service_details": entry,
    })))
}

/// Create-or-fetch a lead; repeat submissions get the existing coupon back
pub async fn create_lead(
    State(state): State<AppState>,
    Json(payload): Json<LeadCreateRequest>,
) -> Result<Json<Value>, ApiError> {
    validated(&payload)?;

    let outcome = state
        .leads
        .create_or_fetch(&payload.email, payload.name, payload.phone)
        .map_err(|e| storage_error(&e))?;

    let lead = outcome.lead();
    let body = if outcome.is_existing() {
        json!({
            "id": lead.id,
            "email": lead.email,
            "name": lead.name,
            "couponCode": lead.coupon_code,
            "discount": lead.discount,
            "message": "Welcome back! Here's your existing coupon.",
        })
    } else {
        json!({
            "id": lead.id,
            "email": lead.email,
            "name": lead.name,
            "couponCode": lead.coupon_code,
            "discount": lead.discount,
            "expiresAt": lead.expires_at,
            "message": "Success! Here's your exclusive discount code.",
        })
    };

    Ok(Json(body))
}

/// Admin list of all leads
pub async fn list_leads(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let leads = state.leads.list().map_err(|e| storage_error(&e))?;
    Ok(Json(json!({ "total": leads.len(), "leads": leads })))
}

/// Aggregate lead statistics
pub async fn lead_stats(
    State(state): State<AppState>,
) -> Result<Json<spa_core::LeadStats>, ApiError> {
    let stats = state.leads.stats().map_err(|e| storage_error(&e))?;
    Ok(Json(stats))
}

/// Contact form submission
pub async fn submit_contact(
    State(state): State<AppState>,
    Json(payload): Json<ContactRequest>,
) -> Result<Json<Value>, ApiError> {
    validated(&payload)?;

    state
        .contacts
        .submit(
            payload.full_name,
            payload.email,
            payload.phone,
            payload.message,
        )
        .map_err(|e| storage_error(&e))?;

    Ok(Json(json!({
        "message": "Thanks for reaching out! We'll get back to you soon.",
        "status": "success",
    })))
}

/// Admin list of all contact submissions
pub async fn list_contacts(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let messages = state.contacts.list().map_err(|e| storage_error(&e))?;
    Ok(Json(json!({ "total": messages.len(), "messages": messages })))
}

/// Create a booking request
pub async fn create_booking(
    State(state): State<AppState>,
    Json(payload): Json<BookingCreateRequest>,
) -> Result<Json<Value>, ApiError> {
    validated(&payload)?;

    let booking = state
        .bookings
        .create(BookingRequest {
            service_id: payload.service_package,
            preferred_date: payload.preferred_date,
            preferred_time: payload.preferred_time,
            customer_name: payload.customer_name,
            customer_email: payload.customer_email,
            customer_phone: payload.customer_phone,
            special_requests: payload.special_requests,
        })
        .map_err(|e| match e {
            LedgerError::UnknownService(_) => {
                error(StatusCode::BAD_REQUEST, e.user_message(), "UNKNOWN_SERVICE")
            }
            LedgerError::Storage(_) => storage_error(&e),
        })?;

    Ok(Json(json!({
        "booking_id": booking.id,
        "service": booking.service.name,
        "date": booking.preferred_date,
        "time": booking.preferred_time,
        "status": booking.status,
        "message": "Booking request received! We'll confirm your appointment shortly.",
    })))
}

/// Admin list of all bookings
pub async fn list_bookings(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let bookings = state.bookings.list().map_err(|e| storage_error(&e))?;
    Ok(Json(json!({ "total": bookings.len(), "bookings": bookings })))
}

/// Create a checkout session
pub async fn create_checkout(
    State(state): State<AppState>,
    Json(payload): Json<CheckoutRequest>,
) -> Result<Json<spa_payments::CheckoutCreated>, ApiError> {
    validated(&payload)?;
    let lifecycle = payments(&state)?;

    let created = lifecycle
        .create_checkout(CheckoutIntent {
            service_id: payload.service_package,
            customer_email: payload.customer_email,
            customer_name: payload.customer_name,
            units: payload.units,
            success_url: payload.success_url,
            cancel_url: payload.cancel_url,
        })
        .await
        .map_err(|e| match e {
            PaymentError::UnknownService(_) => {
                error(StatusCode::BAD_REQUEST, e.user_message(), "UNKNOWN_SERVICE")
            }
            _ => {
                tracing::error!(error = %e, "checkout setup failed");
                error(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    e.user_message(),
                    "CHECKOUT_ERROR",
                )
            }
        })?;

    Ok(Json(created))
}

/// Live + reconciled session status
pub async fn checkout_status(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<Json<spa_payments::SessionStatus>, ApiError> {
    let lifecycle = payments(&state)?;

    let status = lifecycle.check_status(&session_id).await.map_err(|e| {
        tracing::error!(error = %e, session_id, "status check failed");
        error(
            StatusCode::INTERNAL_SERVER_ERROR,
            e.user_message(),
            "STATUS_ERROR",
        )
    })?;

    Ok(Json(status))
}

/// Admin list of all payment transactions
pub async fn list_transactions(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let lifecycle = payments(&state)?;

    let transactions = lifecycle.transactions().map_err(|e| {
        error(
            StatusCode::INTERNAL_SERVER_ERROR,
            e.user_message(),
            "STORAGE_ERROR",
        )
    })?;

    Ok(Json(
        json!({ "total": transactions.len(), "transactions": transactions }),
    ))
}

/// Stripe webhook intake. The signature header's presence is the minimum
/// gate; verification itself is the provider integration's job.
pub async fn stripe_webhook(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: String,
) -> Result<Json<Value>, ApiError> {
    let lifecycle = payments(&state)?;

    let signature = headers
        .get("stripe-signature")
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| {
            error(
                StatusCode::BAD_REQUEST,
                "Missing Stripe signature",
                "MISSING_SIGNATURE",
            )
        })?;

    let event = lifecycle.process_webhook(&body, signature).map_err(|e| {
        tracing::warn!(error = %e, "webhook rejected");
        error(StatusCode::BAD_REQUEST, e.user_message(), "WEBHOOK_ERROR")
    })?;

    tracing::debug!(event_type = %event.event_type, "webhook acknowledged");
    Ok(Json(json!({ "received": true })))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use rust_decimal_macros::dec;
    use spa_core::{
        AppConfig, BookingLedger, Catalog, ContactLedger, LeadLedger, MemoryBookingStore,
        MemoryContactStore, MemoryLeadStore,
    };
    use spa_payments::{
        MemoryTransactionStore, MockPaymentProvider, ProviderEvent, SessionStatus,
    };
    use std::collections::HashMap;
    use tower::ServiceExt;

    struct TestHarness {
        state: AppState,
        provider: Arc<MockPaymentProvider>,
    }

    fn harness_with_provider(provider: Arc<MockPaymentProvider>) -> TestHarness {
        let config = Arc::new(AppConfig {
            bind_addr: "127.0.0.1:0".into(),
            public_base_url: "http://localhost:8000".into(),
            currency: "usd".into(),
            coupon_prefix: "SNATCH".into(),
            lead_discount_percent: 15,
        });
        let catalog = Arc::new(Catalog::standard());
        let lifecycle = PaymentLifecycle::new(
            catalog.clone(),
            provider.clone(),
            Arc::new(MemoryTransactionStore::new()),
            config.currency.clone(),
            config.public_base_url.clone(),
        );

        let state = AppState {
            catalog: catalog.clone(),
            leads: Arc::new(LeadLedger::new(
                Arc::new(MemoryLeadStore::new()),
                &config.coupon_prefix,
                config.lead_discount_percent,
            )),
            bookings: Arc::new(BookingLedger::new(
                Arc::new(MemoryBookingStore::new()),
                catalog,
            )),
            contacts: Arc::new(ContactLedger::new(Arc::new(MemoryContactStore::new()))),
            payments: Some(Arc::new(lifecycle)),
            config,
        };

        TestHarness { state, provider }
    }

    fn harness() -> TestHarness {
        harness_with_provider(Arc::new(MockPaymentProvider::new()))
    }

    fn app(state: AppState) -> Router {
        Router::new().nest("/api", api_router()).with_state(state)
    }

    async fn send(state: AppState, request: Request<Body>) -> (StatusCode, Value) {
        let response = app(state).oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post_json(uri: &str, body: &Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_root_is_alive() {
        let (status, body) = send(harness().state, get_request("/api/")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_health_reports_configuration() {
        let (status, body) = send(harness().state, get_request("/api/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["services"]["stripe"], "configured");
    }

    #[tokio::test]
    async fn test_services_listing() {
        let (status, body) = send(harness().state, get_request("/api/services")).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["total_services"].as_u64().unwrap() >= 8);
        assert_eq!(body["services"]["wood_therapy"]["price"], "130.00");
        assert_eq!(body["services"]["botox"]["unit_based"], true);
    }

    #[tokio::test]
    async fn test_unknown_service_is_404() {
        let (status, body) = send(harness().state, get_request("/api/services/nope")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], "UNKNOWN_SERVICE");
    }

    #[tokio::test]
    async fn test_lead_create_then_welcome_back() {
        let state = harness().state;

        let payload = json!({ "email": "maria@example.com", "name": "Maria" });
        let (status, first) = send(state.clone(), post_json("/api/leads", &payload)).await;
        assert_eq!(status, StatusCode::OK);
        let coupon = first["couponCode"].as_str().unwrap();
        assert!(coupon.starts_with("SNATCH-"));
        assert_eq!(coupon.len(), "SNATCH-".len() + 6);

        let (status, second) = send(state, post_json("/api/leads", &payload)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(second["couponCode"], coupon);
        assert!(
            second["message"]
                .as_str()
                .unwrap()
                .contains("Welcome back")
        );
    }

    #[tokio::test]
    async fn test_lead_rejects_malformed_email() {
        let payload = json!({ "email": "not-an-email" });
        let (status, body) = send(harness().state, post_json("/api/leads", &payload)).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["code"], "INVALID_INPUT");
    }

    #[tokio::test]
    async fn test_lead_stats_empty() {
        let (status, body) = send(harness().state, get_request("/api/leads/stats")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["totalLeads"], 0);
        assert_eq!(body["conversionRate"], "0%");
    }

    #[tokio::test]
    async fn test_contact_submission() {
        let payload = json!({
            "full_name": "Valentina Chen",
            "email": "valentina@example.com",
            "message": "Do you offer consultations?",
        });
        let (status, body) = send(harness().state, post_json("/api/contact", &payload)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "success");
    }

    #[tokio::test]
    async fn test_contact_listing_newest_first() {
        let state = harness().state;
        for subject in ["First question", "Second question"] {
            let payload = json!({
                "full_name": "Valentina Chen",
                "email": "valentina@example.com",
                "message": subject,
            });
            let (status, _) = send(state.clone(), post_json("/api/contact", &payload)).await;
            assert_eq!(status, StatusCode::OK);
        }

        let (status, listing) = send(state, get_request("/api/contact")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(listing["total"], 2);
        assert_eq!(listing["messages"][0]["message"], "Second question");
        assert_eq!(listing["messages"][0]["status"], "new");
    }

    #[tokio::test]
    async fn test_contact_rejects_empty_message() {
        let payload = json!({
            "full_name": "Valentina Chen",
            "email": "valentina@example.com",
            "message": "",
        });
        let (status, _) = send(harness().state, post_json("/api/contact", &payload)).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_booking_flow() {
        let state = harness().state;
        let payload = json!({
            "service_package": "facial_premium",
            "preferred_date": "2026-09-15",
            "preferred_time": "2:00 PM",
            "customer_name": "Isabella Rodriguez",
            "customer_email": "isabella@example.com",
        });

        let (status, body) = send(state.clone(), post_json("/api/bookings", &payload)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["service"], "Premium Facial");
        assert_eq!(body["status"], "pending");
        assert!(body["booking_id"].as_str().is_some());

        let (status, listing) = send(state, get_request("/api/bookings")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(listing["total"], 1);
    }

    #[tokio::test]
    async fn test_booking_unknown_service_is_400() {
        let state = harness().state;
        let payload = json!({
            "service_package": "invalid_service",
            "preferred_date": "2026-09-15",
            "preferred_time": "2:00 PM",
            "customer_name": "Isabella Rodriguez",
            "customer_email": "isabella@example.com",
        });

        let (status, body) = send(state.clone(), post_json("/api/bookings", &payload)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "UNKNOWN_SERVICE");

        let (_, listing) = send(state, get_request("/api/bookings")).await;
        assert_eq!(listing["total"], 0);
    }

    #[tokio::test]
    async fn test_checkout_unit_based_amount() {
        let state = harness().state;
        let payload = json!({
            "service_package": "botox",
            "customer_email": "aurora@example.com",
            "units": 25,
        });

        let (status, body) =
            send(state.clone(), post_json("/api/payments/checkout", &payload)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["amount"], "300.00");
        assert_eq!(body["service"], "Botox");
        assert!(body["checkout_url"].as_str().is_some());

        let (_, listing) = send(state, get_request("/api/payments/transactions")).await;
        assert_eq!(listing["total"], 1);
        assert_eq!(listing["transactions"][0]["payment_status"], "pending");
    }

    #[tokio::test]
    async fn test_checkout_flat_service_ignores_units() {
        let payload = json!({
            "service_package": "wood_therapy",
            "customer_email": "aurora@example.com",
            "units": 5,
        });

        let (status, body) =
            send(harness().state, post_json("/api/payments/checkout", &payload)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["amount"], "130.00");
    }

    #[tokio::test]
    async fn test_checkout_unknown_service_makes_no_provider_call() {
        let harness = harness();
        let payload = json!({
            "service_package": "invalid_service",
            "customer_email": "aurora@example.com",
        });

        let (status, body) = send(
            harness.state.clone(),
            post_json("/api/payments/checkout", &payload),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "UNKNOWN_SERVICE");
        assert!(harness.provider.created().is_empty());
    }

    #[tokio::test]
    async fn test_checkout_without_payments_configured() {
        let mut harness = harness();
        harness.state.payments = None;
        let payload = json!({
            "service_package": "botox",
            "customer_email": "aurora@example.com",
        });

        let (status, body) =
            send(harness.state, post_json("/api/payments/checkout", &payload)).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["code"], "PAYMENTS_DISABLED");
    }

    #[tokio::test]
    async fn test_status_endpoint_reconciles() {
        let harness = harness();
        let payload = json!({
            "service_package": "wood_therapy",
            "customer_email": "aurora@example.com",
        });

        let (_, created) = send(
            harness.state.clone(),
            post_json("/api/payments/checkout", &payload),
        )
        .await;
        let session_id = created["session_id"].as_str().unwrap().to_string();

        harness.provider.script_status(SessionStatus {
            session_id: session_id.clone(),
            status: "complete".into(),
            payment_status: "paid".into(),
            amount_total: Some(dec!(130.00)),
            currency: Some("usd".into()),
            metadata: HashMap::new(),
        });

        let (status, body) = send(
            harness.state.clone(),
            get_request(&format!("/api/payments/checkout/status/{session_id}")),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["payment_status"], "paid");

        let (_, listing) = send(harness.state, get_request("/api/payments/transactions")).await;
        assert_eq!(listing["transactions"][0]["payment_status"], "paid");
    }

    #[tokio::test]
    async fn test_webhook_requires_signature_header() {
        let event = ProviderEvent {
            event_type: "checkout.session.completed".into(),
            session_id: Some("cs_mock_1".into()),
            payment_status: Some("paid".into()),
        };
        let request = Request::builder()
            .method("POST")
            .uri("/api/webhook/stripe")
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(&event).unwrap()))
            .unwrap();

        let (status, body) = send(harness().state, request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "MISSING_SIGNATURE");
    }

    #[tokio::test]
    async fn test_webhook_unknown_session_is_acknowledged() {
        let event = ProviderEvent {
            event_type: "checkout.session.completed".into(),
            session_id: Some("cs_never_seen".into()),
            payment_status: Some("paid".into()),
        };
        let request = Request::builder()
            .method("POST")
            .uri("/api/webhook/stripe")
            .header("content-type", "application/json")
            .header("stripe-signature", "t=123,v1=abc")
            .body(Body::from(serde_json::to_string(&event).unwrap()))
            .unwrap();

        let (status, body) = send(harness().state, request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["received"], true);
    }
}
