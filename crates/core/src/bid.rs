//! Bid status and line-item arithmetic.

use serde::{Deserialize, Serialize};

/// Lifecycle status of a bid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BidStatus {
    Draft,
    Submitted,
    Won,
    Lost,
    Cancelled,
}

impl BidStatus {
    /// Return the status name as stored in the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "DRAFT",
            Self::Submitted => "SUBMITTED",
            Self::Won => "WON",
            Self::Lost => "LOST",
            Self::Cancelled => "CANCELLED",
        }
    }

    /// Parse a stored status string. Returns `None` for unknown values.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "DRAFT" => Some(Self::Draft),
            "SUBMITTED" => Some(Self::Submitted),
            "WON" => Some(Self::Won),
            "LOST" => Some(Self::Lost),
            "CANCELLED" => Some(Self::Cancelled),
            _ => None,
        }
    }

    /// All valid status values.
    pub const ALL: &'static [BidStatus] = &[
        Self::Draft,
        Self::Submitted,
        Self::Won,
        Self::Lost,
        Self::Cancelled,
    ];
}

impl std::fmt::Display for BidStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Line totals are always derived as `quantity * unit_price` on write;
/// the stored value is never trusted from the caller.
pub fn line_total(quantity: f64, unit_price: f64) -> f64 {
    quantity * unit_price
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip() {
        for s in BidStatus::ALL {
            assert_eq!(BidStatus::from_str(s.as_str()), Some(*s));
        }
    }

    #[test]
    fn unknown_status_returns_none() {
        assert!(BidStatus::from_str("PENDING").is_none());
    }

    #[test]
    fn line_total_derives_from_quantity_and_price() {
        assert_eq!(line_total(3.0, 12.5), 37.5);
        assert_eq!(line_total(0.0, 99.0), 0.0);
    }
}
