//! Batch processing over independent records.

use crate::redactor::{Redactor, ScrubOutcome};
use scrub_core::Record;

/// Batch redactor.
///
/// Records are independent of one another, so batches need no coordination;
/// with the `rayon` feature a batch runs on the global thread pool.
pub struct BatchRedactor {
    redactor: Redactor,
}

impl BatchRedactor {
    /// Creates a batch redactor.
    #[must_use]
    pub fn new(redactor: Redactor) -> Self {
        Self { redactor }
    }

    /// Processes records sequentially.
    #[must_use]
    pub fn process_batch(&self, records: &[Record]) -> Vec<ScrubOutcome> {
        records.iter().map(|r| self.redactor.process(r)).collect()
    }

    /// Processes records in parallel.
    #[cfg(feature = "rayon")]
    #[must_use]
    pub fn process_batch_parallel(&self, records: &[Record]) -> Vec<ScrubOutcome> {
        use rayon::prelude::*;
        records
            .par_iter()
            .map(|r| self.redactor.process(r))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scrub_core::decode_payload;

    #[test]
    fn test_batch_matches_single_record_results() {
        let records: Vec<Record> = [
            r#"{"phone": "9876543210"}"#,
            r#"{"email": "a@b.com"}"#,
            r#"{}"#,
        ]
        .iter()
        .map(|raw| decode_payload(raw).unwrap())
        .collect();

        let redactor = Redactor::new();
        let batch = BatchRedactor::new(redactor.clone());
        let outcomes = batch.process_batch(&records);

        assert_eq!(outcomes.len(), 3);
        for (record, outcome) in records.iter().zip(&outcomes) {
            assert_eq!(outcome.redacted, redactor.process(record).redacted);
        }
        assert!(outcomes[0].classification.is_pii);
        assert!(!outcomes[1].classification.is_pii);
        assert!(!outcomes[2].classification.is_pii);
    }
}
