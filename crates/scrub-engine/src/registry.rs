//! Category registry.
//!
//! One entry per category binds its field aliases, value validator, and
//! masker. Adding a category is a single new entry here; strength lives on
//! [`PiiCategory`] itself.

use crate::mask::{self, MaskOptions};
use crate::{patterns, taxonomy};
use scrub_core::PiiCategory;

/// Validator and masker bundle for one category.
pub struct CategorySpec {
    /// The category tag.
    pub category: PiiCategory,
    /// Accepted field names, lower-cased.
    pub aliases: &'static [&'static str],
    /// Decides whether a value is an instance of the category.
    pub validate: fn(&str) -> bool,
    /// Produces the redacted form of a value of this category.
    pub mask: fn(&str, &MaskOptions) -> String,
}

/// The registry, strong categories first.
pub static REGISTRY: &[CategorySpec] = &[
    CategorySpec {
        category: PiiCategory::Phone,
        aliases: taxonomy::PHONE_FIELDS,
        validate: patterns::is_phone,
        mask: mask::phone,
    },
    CategorySpec {
        category: PiiCategory::Aadhaar,
        aliases: taxonomy::AADHAAR_FIELDS,
        validate: patterns::is_aadhaar,
        mask: mask::aadhaar,
    },
    CategorySpec {
        category: PiiCategory::Passport,
        aliases: taxonomy::PASSPORT_FIELDS,
        validate: patterns::is_passport,
        mask: mask::passport,
    },
    CategorySpec {
        category: PiiCategory::Upi,
        aliases: taxonomy::UPI_FIELDS,
        validate: patterns::is_upi,
        mask: mask::upi,
    },
    CategorySpec {
        category: PiiCategory::Email,
        aliases: taxonomy::EMAIL_FIELDS,
        validate: patterns::is_email,
        mask: mask::email,
    },
    CategorySpec {
        category: PiiCategory::Name,
        aliases: taxonomy::NAME_FIELDS,
        validate: patterns::is_full_name,
        mask: mask::name,
    },
    CategorySpec {
        category: PiiCategory::Address,
        aliases: taxonomy::ADDRESS_FIELDS,
        validate: patterns::is_non_blank,
        mask: mask::address,
    },
    CategorySpec {
        category: PiiCategory::Ip,
        aliases: taxonomy::IP_FIELDS,
        validate: patterns::is_ipv4,
        mask: mask::ip,
    },
    CategorySpec {
        category: PiiCategory::Device,
        aliases: taxonomy::DEVICE_FIELDS,
        validate: patterns::is_non_blank,
        mask: mask::device,
    },
];

/// Looks up the spec for a category.
#[must_use]
pub fn spec_for(category: PiiCategory) -> &'static CategorySpec {
    // REGISTRY holds exactly one entry per category.
    REGISTRY
        .iter()
        .find(|spec| spec.category == category)
        .unwrap_or(&REGISTRY[0])
}

/// Looks up the spec owning a normalized field name.
#[must_use]
pub fn spec_for_field(normalized: &str) -> Option<&'static CategorySpec> {
    REGISTRY
        .iter()
        .find(|spec| spec.aliases.contains(&normalized))
}
