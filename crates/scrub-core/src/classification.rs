//! Per-record classification results.

use crate::category::{PiiCategory, Strength};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Which PII categories one record carries, plus the derived verdict.
///
/// Ephemeral: recomputed per record, never persisted independently.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    present: BTreeSet<PiiCategory>,

    /// True when the record links to a person through a name, an email, or a
    /// phone-aliased field. Computed once per record; gates the `Ip` and
    /// `Device` categories.
    pub user_context: bool,

    /// The disclosure verdict, derived by [`Classification::finalize`].
    pub is_pii: bool,
}

impl Classification {
    /// Creates an empty classification: no categories present, not PII.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a category as present.
    pub fn mark(&mut self, category: PiiCategory) {
        self.present.insert(category);
    }

    /// Withdraws a category.
    pub fn unmark(&mut self, category: PiiCategory) {
        self.present.remove(&category);
    }

    /// True when the category was found in the record.
    #[must_use]
    pub fn is_present(&self, category: PiiCategory) -> bool {
        self.present.contains(&category)
    }

    /// Iterates the present categories in taxonomy order.
    pub fn present(&self) -> impl Iterator<Item = PiiCategory> + '_ {
        self.present.iter().copied()
    }

    /// True when any strong category is present.
    #[must_use]
    pub fn has_strong(&self) -> bool {
        self.present.iter().any(PiiCategory::is_strong)
    }

    /// Number of weak categories present.
    #[must_use]
    pub fn weak_count(&self) -> usize {
        self.present
            .iter()
            .filter(|c| c.strength() == Strength::Weak)
            .count()
    }

    /// Derives the verdict: one strong category, or two weak signals.
    pub fn finalize(&mut self) {
        self.is_pii = self.has_strong() || self.weak_count() >= 2;
    }
}
