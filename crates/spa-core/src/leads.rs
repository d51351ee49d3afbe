//! Lead/Coupon Ledger
//!
//! Create-or-fetch semantics keyed by email: the first submission for an
//! email generates a discount coupon, repeat submissions get the existing
//! record back unchanged.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::LEAD_EXPIRY_DAYS;
use crate::error::Result;

const COUPON_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
const COUPON_SUFFIX_LEN: usize = 6;

/// A captured lead with its generated coupon
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Lead {
    pub id: String,
    pub email: String,
    pub name: Option<String>,
    pub phone: Option<String>,
    pub coupon_code: String,
    /// Discount as a display string, e.g. "15%"
    pub discount: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub used: bool,
}

/// Result of a create-or-fetch call. Callers must be able to tell a fresh
/// signup from a returning one even though the record shape is identical.
#[derive(Clone, Debug)]
pub enum LeadOutcome {
    Created(Lead),
    Existing(Lead),
}

impl LeadOutcome {
    pub fn lead(&self) -> &Lead {
        match self {
            LeadOutcome::Created(lead) | LeadOutcome::Existing(lead) => lead,
        }
    }

    pub fn is_existing(&self) -> bool {
        matches!(self, LeadOutcome::Existing(_))
    }
}

/// Aggregate lead statistics
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadStats {
    pub total_leads: u64,
    pub used_coupons: u64,
    /// Leads created within the trailing 7 days, boundary inclusive
    pub recent_leads: u64,
    /// used/total as a percentage string with one decimal, "0%" when empty
    pub conversion_rate: String,
}

/// Lead storage trait
pub trait LeadStore: Send + Sync {
    /// Insert a new lead
    fn insert(&self, lead: &Lead) -> Result<()>;

    /// Find a lead by exact email match
    fn find_by_email(&self, email: &str) -> Result<Option<Lead>>;

    /// All leads, newest first
    fn list(&self) -> Result<Vec<Lead>>;

    fn count_total(&self) -> Result<u64>;

    fn count_used(&self) -> Result<u64>;

    /// Leads created at or after the cutoff
    fn count_created_since(&self, cutoff: DateTime<Utc>) -> Result<u64>;
}

/// In-memory lead store (for development and tests)
pub struct MemoryLeadStore {
    leads: RwLock<HashMap<String, Lead>>,
}

impl Default for MemoryLeadStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryLeadStore {
    pub fn new() -> Self {
        Self {
            leads: RwLock::new(HashMap::new()),
        }
    }
}

impl LeadStore for MemoryLeadStore {
    fn insert(&self, lead: &Lead) -> Result<()> {
        let mut leads = self.leads.write().unwrap();
        leads.insert(lead.email.clone(), lead.clone());
        Ok(())
    }

    fn find_by_email(&self, email: &str) -> Result<Option<Lead>> {
        let leads = self.leads.read().unwrap();
        Ok(leads.get(email).cloned())
    }

    fn list(&self) -> Result<Vec<Lead>> {
        let leads = self.leads.read().unwrap();
        let mut all: Vec<Lead> = leads.values().cloned().collect();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(all)
    }

    fn count_total(&self) -> Result<u64> {
        let leads = self.leads.read().unwrap();
        Ok(leads.len() as u64)
    }

    fn count_used(&self) -> Result<u64> {
        let leads = self.leads.read().unwrap();
        Ok(leads.values().filter(|lead| lead.used).count() as u64)
    }

    fn count_created_since(&self, cutoff: DateTime<Utc>) -> Result<u64> {
        let leads = self.leads.read().unwrap();
        Ok(leads
            .values()
            .filter(|lead| lead.created_at >= cutoff)
            .count() as u64)
    }
}

/// Business rules for lead capture
pub struct LeadLedger {
    store: Arc<dyn LeadStore>,
    coupon_prefix: String,
    discount_percent: u32,
}

impl LeadLedger {
    pub fn new(store: Arc<dyn LeadStore>, coupon_prefix: &str, discount_percent: u32) -> Self {
        Self {
            store,
            coupon_prefix: coupon_prefix.to_string(),
            discount_percent,
        }
    }

    /// Return the existing lead for this email, or create a new one with a
    /// freshly generated coupon. At most one lead per email.
    pub fn create_or_fetch(
        &self,
        email: &str,
        name: Option<String>,
        phone: Option<String>,
    ) -> Result<LeadOutcome> {
        if let Some(existing) = self.store.find_by_email(email)? {
            return Ok(LeadOutcome::Existing(existing));
        }

        let now = Utc::now();
        let lead = Lead {
            id: uuid::Uuid::new_v4().to_string(),
            email: email.to_string(),
            name,
            phone,
            coupon_code: generate_coupon_code(&self.coupon_prefix),
            discount: format!("{}%", self.discount_percent),
            created_at: now,
            expires_at: now + Duration::days(LEAD_EXPIRY_DAYS),
            used: false,
        };
        self.store.insert(&lead)?;

        tracing::info!(email = %lead.email, coupon = %lead.coupon_code, "new lead captured");
        Ok(LeadOutcome::Created(lead))
    }

    pub fn list(&self) -> Result<Vec<Lead>> {
        self.store.list()
    }

    /// Aggregate stats over the whole ledger
    pub fn stats(&self) -> Result<LeadStats> {
        let total = self.store.count_total()?;
        let used = self.store.count_used()?;
        let recent = self
            .store
            .count_created_since(Utc::now() - Duration::days(7))?;

        let conversion_rate = if total == 0 {
            "0%".to_string()
        } else {
            format!("{:.1}%", used as f64 / total as f64 * 100.0)
        };

        Ok(LeadStats {
            total_leads: total,
            used_coupons: used,
            recent_leads: recent,
            conversion_rate,
        })
    }
}

/// Generate a coupon code: prefix, dash, six uniform uppercase
/// alphanumerics. No collision check — acceptable at this ledger's scale,
/// a duplicate would simply shadow nothing since codes are never keys.
fn generate_coupon_code(prefix: &str) -> String {
    let mut rng = rand::thread_rng();
    let suffix: String = (0..COUPON_SUFFIX_LEN)
        .map(|_| COUPON_CHARSET[rng.gen_range(0..COUPON_CHARSET.len())] as char)
        .collect();
    format!("{prefix}-{suffix}")
}
