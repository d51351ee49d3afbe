//! # spa-core
//!
//! Domain core for the spa booking backend: the static service catalog,
//! runtime configuration, and the three simple ledgers (leads/coupons,
//! bookings, contact messages).
//!
//! Each ledger follows the same shape: a domain type, a storage trait, an
//! in-memory store for development and tests, and a ledger struct holding
//! the business rules. Stores only promise per-record atomicity; there are
//! no cross-record transactions.

pub mod bookings;
pub mod catalog;
pub mod config;
pub mod contact;
pub mod error;
pub mod leads;

pub use bookings::{Booking, BookingLedger, BookingRequest, BookingStore, MemoryBookingStore};
pub use catalog::{Catalog, ServiceCatalogEntry};
pub use config::AppConfig;
pub use contact::{ContactLedger, ContactMessage, ContactStore, MemoryContactStore};
pub use error::{LedgerError, Result};
pub use leads::{Lead, LeadLedger, LeadOutcome, LeadStats, LeadStore, MemoryLeadStore};
