//! Booking Ledger
//!
//! Flat request intake: bookings are recorded with a snapshot of the
//! catalog entry and confirmed by a human downstream. No calendar
//! validation, no double-booking detection.

use std::sync::{Arc, RwLock};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, ServiceCatalogEntry};
use crate::error::{LedgerError, Result};

/// Status a freshly created booking starts in
pub const BOOKING_STATUS_PENDING: &str = "pending";

/// A recorded booking request
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Booking {
    pub id: String,
    pub service_id: String,
    /// Catalog entry as it was at booking time, so later catalog edits do
    /// not retroactively alter historical bookings
    pub service: ServiceCatalogEntry,
    /// Opaque strings; no calendar validation
    pub preferred_date: String,
    pub preferred_time: String,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: Option<String>,
    pub special_requests: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a booking
#[derive(Clone, Debug)]
pub struct BookingRequest {
    pub service_id: String,
    pub preferred_date: String,
    pub preferred_time: String,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: Option<String>,
    pub special_requests: Option<String>,
}

/// Booking storage trait
pub trait BookingStore: Send + Sync {
    fn insert(&self, booking: &Booking) -> Result<()>;

    /// All bookings, newest first
    fn list(&self) -> Result<Vec<Booking>>;
}

/// In-memory booking store (for development and tests)
pub struct MemoryBookingStore {
    bookings: RwLock<Vec<Booking>>,
}

impl Default for MemoryBookingStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBookingStore {
    pub fn new() -> Self {
        Self {
            bookings: RwLock::new(Vec::new()),
        }
    }
}

impl BookingStore for MemoryBookingStore {
    fn insert(&self, booking: &Booking) -> Result<()> {
        let mut bookings = self.bookings.write().unwrap();
        bookings.push(booking.clone());
        Ok(())
    }

    fn list(&self) -> Result<Vec<Booking>> {
        let bookings = self.bookings.read().unwrap();
        let mut all = bookings.clone();
        all.reverse();
        Ok(all)
    }
}

/// Business rules for booking intake
pub struct BookingLedger {
    store: Arc<dyn BookingStore>,
    catalog: Arc<Catalog>,
}

impl BookingLedger {
    pub fn new(store: Arc<dyn BookingStore>, catalog: Arc<Catalog>) -> Self {
        Self { store, catalog }
    }

    /// Validate the service against the catalog, snapshot it, and persist
    /// a pending booking. An unknown service id writes nothing.
    pub fn create(&self, request: BookingRequest) -> Result<Booking> {
        let entry = self
            .catalog
            .get(&request.service_id)
            .ok_or_else(|| LedgerError::UnknownService(request.service_id.clone()))?;

        let now = Utc::now();
        let booking = Booking {
            id: uuid::Uuid::new_v4().to_string(),
            service_id: request.service_id,
            service: entry.clone(),
            preferred_date: request.preferred_date,
            preferred_time: request.preferred_time,
            customer_name: request.customer_name,
            customer_email: request.customer_email,
            customer_phone: request.customer_phone,
            special_requests: request.special_requests,
            status: BOOKING_STATUS_PENDING.to_string(),
            created_at: now,
            updated_at: now,
        };
        self.store.insert(&booking)?;

        tracing::info!(
            booking_id = %booking.id,
            service = %booking.service_id,
            date = %booking.preferred_date,
            "booking request recorded"
        );
        Ok(booking)
    }

    pub fn list(&self) -> Result<Vec<Booking>> {
        self.store.list()
    }
}
