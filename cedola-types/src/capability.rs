use core::fmt;
use serde::{Deserialize, Serialize};

/// Capability labels for routing, errors, and telemetry.
///
/// Each label maps one-to-one with a connector role trait.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Capability {
    /// Historical dividend payments for an instrument.
    DividendHistory,
    /// Daily close prices over a date window.
    ClosePrices,
    /// Company or fund profile (display name).
    Profile,
}

impl Capability {
    /// Stable, kebab-case identifier for logs/errors.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DividendHistory => "dividend-history",
            Self::ClosePrices => "close-prices",
            Self::Profile => "profile",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
