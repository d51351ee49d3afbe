//! Application State

use std::sync::Arc;

use spa_core::{AppConfig, BookingLedger, Catalog, ContactLedger, LeadLedger};
use spa_payments::PaymentLifecycle;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Read-only runtime configuration
    pub config: Arc<AppConfig>,

    /// Static service catalog
    pub catalog: Arc<Catalog>,

    /// Lead/coupon ledger
    pub leads: Arc<LeadLedger>,

    /// Booking ledger
    pub bookings: Arc<BookingLedger>,

    /// Contact message ledger
    pub contacts: Arc<ContactLedger>,

    /// Payment lifecycle (None if Stripe is not configured)
    pub payments: Option<Arc<PaymentLifecycle>>,
}
