//! spa-server HTTP Server
//!
//! Axum-based REST API for the spa booking backend: service catalog,
//! lead capture with coupons, booking intake, contact form, and Stripe
//! hosted-checkout payments.

mod handlers;
mod state;

use std::sync::Arc;

use axum::Router;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use spa_core::{
    AppConfig, BookingLedger, Catalog, ContactLedger, LeadLedger, MemoryBookingStore,
    MemoryContactStore, MemoryLeadStore,
};
use spa_payments::{MemoryTransactionStore, PaymentLifecycle, StripeProvider};

use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment
    dotenvy::dotenv().ok();

    let config = Arc::new(AppConfig::from_env());
    let catalog = Arc::new(Catalog::standard());
    tracing::info!("Loaded catalog with {} services", catalog.len());

    // Ledgers over in-memory stores
    let leads = Arc::new(LeadLedger::new(
        Arc::new(MemoryLeadStore::new()),
        &config.coupon_prefix,
        config.lead_discount_percent,
    ));
    let bookings = Arc::new(BookingLedger::new(
        Arc::new(MemoryBookingStore::new()),
        catalog.clone(),
    ));
    let contacts = Arc::new(ContactLedger::new(Arc::new(MemoryContactStore::new())));

    // Initialize payments
    let payments = match StripeProvider::from_env() {
        Ok(provider) => {
            tracing::info!("✓ Stripe configured");
            Some(Arc::new(PaymentLifecycle::new(
                catalog.clone(),
                Arc::new(provider),
                Arc::new(MemoryTransactionStore::new()),
                config.currency.clone(),
                config.public_base_url.clone(),
            )))
        }
        Err(_) => {
            tracing::warn!("⚠ Stripe not configured - payments disabled");
            tracing::warn!("  Set STRIPE_SECRET_KEY and STRIPE_WEBHOOK_SECRET in .env");
            None
        }
    };

    // Build application state
    let state = AppState {
        config: config.clone(),
        catalog,
        leads,
        bookings,
        contacts,
        payments,
    };

    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router
    let app = Router::new()
        .nest("/api", handlers::api_router())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;

    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("🚀 spa-server running on http://{}", config.bind_addr);
    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("");
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /api/health                    - Health check");
    tracing::info!("  GET  /api/services                  - Service catalog");
    tracing::info!("  POST /api/leads                     - Capture lead / issue coupon");
    tracing::info!("  GET  /api/leads/stats               - Lead statistics");
    tracing::info!("  POST /api/contact                   - Contact form");
    tracing::info!("  POST /api/bookings                  - Booking request");
    tracing::info!("  POST /api/payments/checkout         - Create Stripe checkout");
    tracing::info!("  GET  /api/payments/checkout/status/{{id}} - Checkout status");
    tracing::info!("  POST /api/webhook/stripe            - Stripe webhook");
    tracing::info!("");

    axum::serve(listener, app).await?;

    Ok(())
}
