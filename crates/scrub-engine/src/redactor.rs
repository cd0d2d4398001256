//! Record redactor.
//!
//! Orchestrates the classifier and the masking engine over one record:
//! decides field by field whether to mask, with which masker, or to pass the
//! value through unchanged.

use crate::mask::{self, MaskOptions};
use crate::{classifier, registry, taxonomy};
use scrub_core::{matchable_text, Classification, PiiCategory, Record};
use serde_json::Value;

/// Outcome of one classify-and-redact pass.
#[derive(Debug, Clone)]
pub struct ScrubOutcome {
    /// The redacted copy of the payload.
    pub redacted: Record,
    /// The classification that drove the redaction.
    pub classification: Classification,
}

/// Stateless redactor over independent records.
#[derive(Debug, Clone, Default)]
pub struct Redactor {
    options: MaskOptions,
}

impl Redactor {
    /// Creates a redactor with default masking options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a redactor with explicit masking options.
    #[must_use]
    pub fn with_options(options: MaskOptions) -> Self {
        Self { options }
    }

    /// Classifies a record without redacting it.
    #[must_use]
    pub fn classify(&self, record: &Record) -> Classification {
        classifier::classify(record)
    }

    /// Produces the redacted copy of a record under a classification.
    ///
    /// Strong categories are masked wherever their field holds a valid value,
    /// independent of the overall verdict. Weak categories are masked only
    /// when the record as a whole is PII. Every other field is returned
    /// byte-identical, numbers staying numbers.
    #[must_use]
    pub fn redact(&self, record: &Record, classification: &Classification) -> Record {
        let mask_name_pair = classification.is_pii
            && classification.is_present(PiiCategory::Name)
            && classifier::name_pair_present(record);

        let mut out = Record::new();
        for (field, value) in record {
            out.insert(
                field.clone(),
                self.redact_field(field, value, classification, mask_name_pair),
            );
        }
        out
    }

    /// Classifies and redacts in one call.
    #[must_use]
    pub fn process(&self, record: &Record) -> ScrubOutcome {
        let classification = classifier::classify(record);
        let redacted = self.redact(record, &classification);
        ScrubOutcome {
            redacted,
            classification,
        }
    }

    fn redact_field(
        &self,
        field: &str,
        value: &Value,
        classification: &Classification,
        mask_name_pair: bool,
    ) -> Value {
        let Some(text) = matchable_text(value) else {
            return value.clone();
        };
        if text.trim().is_empty() {
            return value.clone();
        }
        let name = taxonomy::normalize(field);

        // Split-name halves mask like single name tokens.
        if mask_name_pair && (name == taxonomy::FIRST_NAME || name == taxonomy::LAST_NAME) {
            return Value::String(mask::name(&text, &self.options));
        }

        if let Some(spec) = registry::spec_for_field(&name) {
            let triggered = classification.is_present(spec.category)
                && (spec.category.is_strong() || classification.is_pii);
            if triggered && (spec.validate)(&text) {
                return Value::String((spec.mask)(&text, &self.options));
            }
        }

        value.clone()
    }
}
