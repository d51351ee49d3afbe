//! # spa-payments
//!
//! Payment lifecycle for the spa backend, built on Stripe's hosted
//! checkout: create a session, reconcile status on demand (client poll or
//! webhook), and keep a local transaction record per session.
//!
//! ```text
//! ┌─────────────┐     ┌─────────────────┐     ┌─────────────┐
//! │  Your Site  │────▶│  Stripe Hosted  │────▶│  Your Site  │
//! │  (booking)  │     │  Checkout Page  │     │  (success)  │
//! └─────────────┘     └─────────────────┘     └─────────────┘
//! ```
//!
//! The provider sits behind the [`PaymentProvider`] trait so the lifecycle
//! can be tested against [`MockPaymentProvider`] without network access.
//! The local record is never the source of truth — the provider is; the
//! store exists for admin listing and offline bookkeeping.

mod error;
mod lifecycle;
mod provider;
mod transaction;

pub use error::{PaymentError, Result};
pub use lifecycle::{CheckoutCreated, CheckoutIntent, PaymentLifecycle};
pub use provider::{
    CreatedSession, MockPaymentProvider, PaymentProvider, ProviderEvent, SessionRequest,
    SessionStatus, StripeProvider,
};
pub use transaction::{
    MemoryTransactionStore, PaymentTransaction, TransactionStore, PAYMENT_STATUS_PENDING,
};
