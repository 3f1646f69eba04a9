//! The canonical discovered-property record and its keyword classifier.

use serde::{Deserialize, Serialize};

/// Currency code assumed when the Admin API omits one.
pub const DEFAULT_CURRENCY_CODE: &str = "USD";

/// Time zone assumed when the Admin API omits one.
pub const DEFAULT_TIME_ZONE: &str = "America/Los_Angeles";

/// Site category assigned to every discovered property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Veterinary,
    Blog,
    Ecommerce,
    PetServices,
    Website,
}

impl Category {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Veterinary => "veterinary",
            Category::Blog => "blog",
            Category::Ecommerce => "ecommerce",
            Category::PetServices => "pet-services",
            Category::Website => "website",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One discovered GA4 property, normalized and ready for any output sink.
///
/// `domain` is the natural key every sink upserts on. Constructed once by the
/// pipeline and passed immutably to the renderers; two properties whose
/// derived domains coincide will collide at the destination (last write wins).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredPropertyRow {
    pub domain: String,
    /// Numeric property resource ID, kept as a string (e.g. `"123456789"`).
    pub property_id: String,
    pub display_name: String,
    pub category: Category,
    pub currency_code: String,
    pub time_zone: String,
    /// Display name of the owning account. Provenance only, not upserted.
    pub account: String,
    /// Resource name of the owning account (`accounts/123`).
    pub account_id: String,
}

/// Classify a property from its display name and derived domain.
///
/// Both inputs are lower-cased and tested as substrings; the first matching
/// bucket wins. Clinical terms outrank content-type terms, which outrank
/// generic pet-relatedness, so "Pet Hospital Blog" classifies as veterinary.
/// Reordering the buckets changes results; keep them as-is.
#[must_use]
pub fn categorize(display_name: &str, domain: &str) -> Category {
    let name = display_name.to_lowercase();
    let domain = domain.to_lowercase();

    let any = |keywords: &[&str]| keywords.iter().any(|k| name.contains(k) || domain.contains(k));

    if any(&["vet", "veterinary", "clinic", "hospital", "animal"]) {
        Category::Veterinary
    } else if any(&["blog"]) {
        Category::Blog
    } else if any(&["shop", "store", "ecommerce"]) {
        Category::Ecommerce
    } else if any(&["pet", "dog", "cat"]) {
        Category::PetServices
    } else {
        Category::Website
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
#[path = "property_test.rs"]
mod tests;
