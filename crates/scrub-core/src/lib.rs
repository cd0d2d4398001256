//! # Scrub Core
//!
//! Foundational types for the record scrubbing engine:
//! - The PII category taxonomy (`PiiCategory`, `Strength`)
//! - The ordered record payload model (`Record`)
//! - Per-record classification results (`Classification`)
//! - Error types

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod category;
pub mod classification;
pub mod error;
pub mod payload;

pub use category::{PiiCategory, Strength};
pub use classification::Classification;
pub use error::{ScrubError, ScrubResult};
pub use payload::{decode_payload, encode_payload, matchable_text, Record};
