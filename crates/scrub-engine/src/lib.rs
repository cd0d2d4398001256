//! # Scrub Engine
//!
//! Classification and masking engine for PII in tabular record payloads.
//! Given a decoded record (an ordered field-to-value mapping), the engine
//! decides which semantic PII categories are present, whether their
//! combination crosses the disclosure threshold, and produces a redacted
//! copy with type-specific masking.
//!
//! The engine is stateless and synchronous: [`classify`] and
//! [`Redactor::redact`] are pure functions of the record argument and never
//! fail. It performs no I/O; obtaining and persisting records is the
//! caller's concern.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod batch;
pub mod classifier;
pub mod mask;
pub mod patterns;
pub mod redactor;
pub mod registry;
pub mod taxonomy;

pub use batch::BatchRedactor;
pub use classifier::classify;
pub use mask::MaskOptions;
pub use redactor::{Redactor, ScrubOutcome};
pub use registry::{spec_for, spec_for_field, CategorySpec, REGISTRY};

pub use scrub_core::{Classification, PiiCategory, Record, Strength};
