//! Record classifier.
//!
//! Resolves each field through the taxonomy, validates values through the
//! pattern library, applies the record-level rules (split-name pair, address
//! locality, user-context gate), and derives the disclosure verdict.

use crate::{patterns, registry, taxonomy};
use scrub_core::{matchable_text, Classification, PiiCategory, Record};
use std::borrow::Cow;

/// Classifies one record.
///
/// Pure and deterministic: the result depends only on the record's field set
/// and values, and classification never fails. An empty record is non-PII.
#[must_use]
pub fn classify(record: &Record) -> Classification {
    let mut out = Classification::new();

    // Field-level pass: alias match plus value validation.
    for (field, value) in record {
        let Some(text) = matchable_text(value) else {
            continue;
        };
        let name = taxonomy::normalize(field);
        if let Some(spec) = registry::spec_for_field(&name) {
            if (spec.validate)(&text) {
                out.mark(spec.category);
            }
        }
    }

    // A non-empty first-name/last-name pair counts as a full name.
    if name_pair_present(record) {
        out.mark(PiiCategory::Name);
    }

    // An address with no locality signal is not treated as an address.
    if out.is_present(PiiCategory::Address) && !has_locality_signal(record) {
        out.unmark(PiiCategory::Address);
    }

    // Device and IP identifiers only count when the record links to a person.
    out.user_context = user_context(record, &out);
    if !out.user_context {
        out.unmark(PiiCategory::Device);
        out.unmark(PiiCategory::Ip);
    }

    out.finalize();
    tracing::debug!(
        is_pii = out.is_pii,
        categories = ?out.present().collect::<Vec<_>>(),
        "classified record"
    );
    out
}

/// True when both halves of the split-name pair are non-empty.
pub(crate) fn name_pair_present(record: &Record) -> bool {
    field_non_blank(record, taxonomy::FIRST_NAME) && field_non_blank(record, taxonomy::LAST_NAME)
}

fn field_text<'a>(record: &'a Record, wanted: &str) -> Option<Cow<'a, str>> {
    record
        .iter()
        .find(|(field, _)| taxonomy::normalize(field) == wanted)
        .and_then(|(_, value)| matchable_text(value))
}

fn field_non_blank(record: &Record, wanted: &str) -> bool {
    field_text(record, wanted).is_some_and(|text| !text.trim().is_empty())
}

/// City, state, or PIN code: in its own field or embedded in the address.
fn has_locality_signal(record: &Record) -> bool {
    if field_non_blank(record, taxonomy::CITY_FIELD)
        || field_non_blank(record, taxonomy::STATE_FIELD)
        || field_non_blank(record, taxonomy::PIN_CODE_FIELD)
    {
        return true;
    }
    record.iter().any(|(field, value)| {
        taxonomy::ADDRESS_FIELDS.contains(&taxonomy::normalize(field).as_str())
            && matchable_text(value).is_some_and(|text| patterns::has_pin_code(&text))
    })
}

/// A name, an email, or a phone-aliased field present at all.
fn user_context(record: &Record, classification: &Classification) -> bool {
    classification.is_present(PiiCategory::Name)
        || classification.is_present(PiiCategory::Email)
        || record
            .keys()
            .any(|field| taxonomy::PHONE_FIELDS.contains(&taxonomy::normalize(field).as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use scrub_core::decode_payload;

    fn record(raw: &str) -> Record {
        decode_payload(raw).unwrap()
    }

    #[test]
    fn test_empty_record_is_not_pii() {
        let c = classify(&Record::new());
        assert!(!c.is_pii);
    }

    #[test]
    fn test_named_field_needs_valid_value() {
        // A field named email holding a non-email string is not email.
        let c = classify(&record(r#"{"email": "not an address"}"#));
        assert!(!c.is_present(PiiCategory::Email));
        // And a valid email outside an email-aliased field does not count.
        let c = classify(&record(r#"{"notes": "a@b.com"}"#));
        assert!(!c.is_present(PiiCategory::Email));
    }

    #[test]
    fn test_phone_in_contact_field() {
        let c = classify(&record(r#"{"contact": "9876543210"}"#));
        assert!(c.is_present(PiiCategory::Phone));
        assert!(c.is_pii);
    }

    #[test]
    fn test_numeric_phone_value() {
        let c = classify(&record(r#"{"phone": 9876543210}"#));
        assert!(c.is_present(PiiCategory::Phone));
    }

    #[test]
    fn test_split_name_pair() {
        let c = classify(&record(r#"{"first_name": "Asha", "last_name": "Rao"}"#));
        assert!(c.is_present(PiiCategory::Name));
        // One weak signal only.
        assert!(!c.is_pii);

        let c = classify(&record(r#"{"first_name": "Asha", "last_name": ""}"#));
        assert!(!c.is_present(PiiCategory::Name));
    }

    #[test]
    fn test_address_requires_locality() {
        let c = classify(&record(r#"{"address": "12 MG Road", "city": "", "pin_code": ""}"#));
        assert!(!c.is_present(PiiCategory::Address));

        let c = classify(&record(r#"{"address": "12 MG Road", "city": "Bengaluru"}"#));
        assert!(c.is_present(PiiCategory::Address));

        // PIN embedded in the address text is itself a locality signal.
        let c = classify(&record(r#"{"address": "12 MG Road, 560001"}"#));
        assert!(c.is_present(PiiCategory::Address));
    }

    #[test]
    fn test_device_gated_on_user_context() {
        let c = classify(&record(r#"{"device_id": "DEV-77F2-AA"}"#));
        assert!(!c.is_present(PiiCategory::Device));
        assert!(!c.is_pii);

        // An email in the record links the device to a person.
        let c = classify(&record(r#"{"device_id": "DEV-77F2-AA", "email": "a@b.com"}"#));
        assert!(c.is_present(PiiCategory::Device));
        assert!(c.user_context);
        assert!(c.is_pii);
    }

    #[test]
    fn test_ip_gated_on_user_context() {
        let c = classify(&record(r#"{"ip_address": "10.0.0.7"}"#));
        assert!(!c.is_present(PiiCategory::Ip));

        // A phone-aliased key counts as context even when its value is empty.
        let c = classify(&record(r#"{"ip_address": "10.0.0.7", "phone": ""}"#));
        assert!(c.is_present(PiiCategory::Ip));
    }

    #[test]
    fn test_classification_is_idempotent() {
        let r = record(r#"{"name": "Asha Rao", "email": "a@b.com", "order_id": 42}"#);
        assert_eq!(classify(&r), classify(&r));
    }
}
