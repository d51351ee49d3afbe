//! Service Catalog
//!
//! Static mapping of service identifiers to price, duration, and
//! description. Loaded once at process start, read-only thereafter.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// One service the business offers
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ServiceCatalogEntry {
    /// Stable identifier, used as a foreign key by bookings and payments
    pub id: String,

    /// Display name
    pub name: String,

    /// Base price in currency units
    pub price: Decimal,

    /// Human-readable duration
    pub duration: String,

    /// Short description
    pub description: String,

    /// When true, the total price scales with a caller-supplied quantity
    /// (e.g. injectables priced per unit)
    #[serde(default)]
    pub unit_based: bool,
}

/// Read-only catalog of services, keyed by id
pub struct Catalog {
    entries: BTreeMap<String, ServiceCatalogEntry>,
}

impl Catalog {
    /// Build a catalog from a set of entries
    pub fn new(entries: impl IntoIterator<Item = ServiceCatalogEntry>) -> Self {
        Self {
            entries: entries
                .into_iter()
                .map(|entry| (entry.id.clone(), entry))
                .collect(),
        }
    }

    /// The business's fixed offering
    pub fn standard() -> Self {
        Self::new([
            entry(
                "facial_basic",
                "Signature Facial",
                dec!(75.00),
                "60 min",
                "Deep-cleansing facial with steam, extraction, and hydration.",
                false,
            ),
            entry(
                "facial_premium",
                "Premium Facial",
                dec!(150.00),
                "90 min",
                "Advanced facial with LED therapy, peptide serum, and lymphatic massage.",
                false,
            ),
            entry(
                "microblading",
                "Microblading",
                dec!(350.00),
                "2.5 hours",
                "Semi-permanent eyebrow shaping with natural hair-stroke technique.",
                false,
            ),
            entry(
                "lash_extensions",
                "Classic Lash Extensions",
                dec!(120.00),
                "2 hours",
                "Individually applied lash extensions for a fuller natural look.",
                false,
            ),
            entry(
                "chemical_peel",
                "Chemical Peel",
                dec!(100.00),
                "45 min",
                "Medical-grade peel to resurface and brighten the skin.",
                false,
            ),
            entry(
                "botox",
                "Botox",
                dec!(12.00),
                "30 min",
                "Wrinkle-relaxing injections, priced per unit.",
                true,
            ),
            entry(
                "dermal_filler",
                "Dermal Filler",
                dec!(550.00),
                "1 hour",
                "Hyaluronic acid filler for lips, cheeks, or fine lines.",
                false,
            ),
            entry(
                "wood_therapy",
                "Wood Therapy",
                dec!(130.00),
                "60 min",
                "Vigorous massage using wooden tools to break down fat and reduce cellulite.",
                false,
            ),
            entry(
                "consultation",
                "Consultation",
                dec!(25.00),
                "30 min",
                "One-on-one consultation to build your custom treatment plan.",
                false,
            ),
        ])
    }

    /// Look up a service by id
    pub fn get(&self, id: &str) -> Option<&ServiceCatalogEntry> {
        self.entries.get(id)
    }

    /// Iterate over all entries in id order
    pub fn entries(&self) -> impl Iterator<Item = &ServiceCatalogEntry> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn entry(
    id: &str,
    name: &str,
    price: Decimal,
    duration: &str,
    description: &str,
    unit_based: bool,
) -> ServiceCatalogEntry {
    ServiceCatalogEntry {
        id: id.to_string(),
        name: name.to_string(),
        price,
        duration: duration.to_string(),
        description: description.to_string(),
        unit_based,
    }
}
