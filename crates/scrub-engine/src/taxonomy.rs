//! Field-name taxonomy.
//!
//! Category membership is resolved by exact, case-insensitive match on the
//! field name. No fuzzy or substring matching: a field named `email_hash`
//! is not an email field.

use scrub_core::PiiCategory;

pub(crate) const PHONE_FIELDS: &[&str] = &["phone", "contact", "alt_phone", "mobile"];
pub(crate) const AADHAAR_FIELDS: &[&str] = &["aadhar", "aadhaar"];
pub(crate) const PASSPORT_FIELDS: &[&str] = &["passport"];
pub(crate) const UPI_FIELDS: &[&str] = &["upi", "upi_id"];
pub(crate) const EMAIL_FIELDS: &[&str] = &["email", "alt_email", "username"];
pub(crate) const NAME_FIELDS: &[&str] = &["name"];
pub(crate) const ADDRESS_FIELDS: &[&str] = &["address"];
pub(crate) const IP_FIELDS: &[&str] = &["ip", "ip_address"];
pub(crate) const DEVICE_FIELDS: &[&str] = &["device_id"];

/// Split-name pair: both non-empty count as a full name.
pub(crate) const FIRST_NAME: &str = "first_name";
/// See [`FIRST_NAME`].
pub(crate) const LAST_NAME: &str = "last_name";

/// Locality signals for the address rule.
pub(crate) const CITY_FIELD: &str = "city";
pub(crate) const STATE_FIELD: &str = "state";
pub(crate) const PIN_CODE_FIELD: &str = "pin_code";

/// Normalizes a field name for taxonomy lookup.
#[must_use]
pub fn normalize(field: &str) -> String {
    field.to_ascii_lowercase()
}

/// Returns the recognized field aliases for a category.
#[must_use]
pub fn aliases(category: PiiCategory) -> &'static [&'static str] {
    match category {
        PiiCategory::Phone => PHONE_FIELDS,
        PiiCategory::Aadhaar => AADHAAR_FIELDS,
        PiiCategory::Passport => PASSPORT_FIELDS,
        PiiCategory::Upi => UPI_FIELDS,
        PiiCategory::Email => EMAIL_FIELDS,
        PiiCategory::Name => NAME_FIELDS,
        PiiCategory::Address => ADDRESS_FIELDS,
        PiiCategory::Ip => IP_FIELDS,
        PiiCategory::Device => DEVICE_FIELDS,
    }
}
