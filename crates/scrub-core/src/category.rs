//! PII category taxonomy.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Semantic PII categories recognized by the scrubbing engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PiiCategory {
    /// 10-digit phone number.
    Phone,
    /// 12-digit national identity number.
    Aadhaar,
    /// Passport number (one uppercase letter, seven digits).
    Passport,
    /// UPI payment handle.
    Upi,
    /// Email address.
    Email,
    /// Person's name.
    Name,
    /// Physical address with a locality signal.
    Address,
    /// IPv4 address.
    Ip,
    /// Device identifier.
    Device,
}

/// Disclosure strength of a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strength {
    /// One valid instance alone flags the record.
    Strong,
    /// Counts toward the combinatorial threshold only.
    Weak,
}

impl PiiCategory {
    /// All categories, in evaluation order.
    pub const ALL: [Self; 9] = [
        Self::Phone,
        Self::Aadhaar,
        Self::Passport,
        Self::Upi,
        Self::Email,
        Self::Name,
        Self::Address,
        Self::Ip,
        Self::Device,
    ];

    /// Returns the disclosure strength of this category.
    #[must_use]
    pub const fn strength(&self) -> Strength {
        match self {
            Self::Phone | Self::Aadhaar | Self::Passport | Self::Upi => Strength::Strong,
            Self::Email | Self::Name | Self::Address | Self::Ip | Self::Device => Strength::Weak,
        }
    }

    /// True for categories whose valid presence alone flags a record.
    #[must_use]
    pub const fn is_strong(&self) -> bool {
        matches!(self.strength(), Strength::Strong)
    }

    /// Stable snake_case label.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Phone => "phone",
            Self::Aadhaar => "aadhaar",
            Self::Passport => "passport",
            Self::Upi => "upi",
            Self::Email => "email",
            Self::Name => "name",
            Self::Address => "address",
            Self::Ip => "ip",
            Self::Device => "device",
        }
    }
}

impl fmt::Display for PiiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Strength {
    /// Stable lowercase label.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Strong => "strong",
            Self::Weak => "weak",
        }
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
