//! RFQ status lifecycle.
//!
//! The state machine:
//!
//! ```text
//! DRAFT -> SENT -> RECEIVED -> ACCEPTED            (terminal)
//!           |         |     -> DECLINED            (terminal)
//!           |         `----> AWAITING_REVISION -> RECEIVED (re-entrant)
//!           `-> SENT (resend self-loop, no state change)
//! ```
//!
//! There is no path back to DRAFT: once sent, an RFQ cannot be un-sent.

use serde::{Deserialize, Serialize};

/// Status of a single RFQ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RfqStatus {
    Draft,
    Sent,
    Received,
    AwaitingRevision,
    Accepted,
    Declined,
}

impl RfqStatus {
    /// Return the status name as stored in the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "DRAFT",
            Self::Sent => "SENT",
            Self::Received => "RECEIVED",
            Self::AwaitingRevision => "AWAITING_REVISION",
            Self::Accepted => "ACCEPTED",
            Self::Declined => "DECLINED",
        }
    }

    /// Parse a stored status string. Returns `None` for unknown values.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "DRAFT" => Some(Self::Draft),
            "SENT" => Some(Self::Sent),
            "RECEIVED" => Some(Self::Received),
            "AWAITING_REVISION" => Some(Self::AwaitingRevision),
            "ACCEPTED" => Some(Self::Accepted),
            "DECLINED" => Some(Self::Declined),
            _ => None,
        }
    }

    /// All valid status values.
    pub const ALL: &'static [RfqStatus] = &[
        Self::Draft,
        Self::Sent,
        Self::Received,
        Self::AwaitingRevision,
        Self::Accepted,
        Self::Declined,
    ];

    /// Whether `self -> to` is reachable in one hop.
    ///
    /// `SENT -> SENT` is allowed (resend: re-dispatch without a state
    /// change). Every transition not in the table is rejected.
    pub fn can_transition(self, to: RfqStatus) -> bool {
        matches!(
            (self, to),
            (Self::Draft, Self::Sent)
                | (Self::Sent, Self::Sent)
                | (Self::Sent, Self::Received)
                | (Self::Received, Self::AwaitingRevision)
                | (Self::Received, Self::Accepted)
                | (Self::Received, Self::Declined)
                | (Self::AwaitingRevision, Self::Received)
        )
    }

    /// Terminal states accept no further transitions.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Accepted | Self::Declined)
    }
}

impl std::fmt::Display for RfqStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
