//! Per-item outcome classification and batch tallies.

use crate::core::error::ToggleError;
use cardvault_api_models::ToggleStatusResponse;

/// What one toggle request amounted to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ItemOutcome {
    /// The server flipped the flag.
    Applied {
        /// Status confirmed by the server.
        new_status: bool,
        /// Optional server label for the new status.
        status_text: Option<String>,
        /// Optional server message.
        message: Option<String>,
    },
    /// The server answered `success: false`.
    Rejected {
        /// Optional server message.
        message: Option<String>,
    },
    /// No usable answer: unknown type, transport or decode failure.
    Failed(ToggleError),
}

impl ItemOutcome {
    /// Classify a request result.
    #[must_use]
    pub fn from_result(result: Result<ToggleStatusResponse, ToggleError>) -> Self {
        match result {
            Ok(response) if response.success => Self::Applied {
                new_status: response.new_status,
                status_text: response.status_text,
                message: response.message,
            },
            Ok(response) => Self::Rejected {
                message: response.message,
            },
            Err(err) => Self::Failed(err),
        }
    }

    /// Whether the outcome changed server state.
    #[must_use]
    pub const fn is_applied(&self) -> bool {
        matches!(self, Self::Applied { .. })
    }
}

/// Success and failure counts of a settled batch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BatchTally {
    /// Items the server toggled.
    pub succeeded: usize,
    /// Items rejected or unreachable.
    pub failed: usize,
}

impl BatchTally {
    /// Count one outcome.
    pub const fn record(&mut self, outcome: &ItemOutcome) {
        if outcome.is_applied() {
            self.succeeded += 1;
        } else {
            self.failed += 1;
        }
    }

    /// Total items processed.
    #[must_use]
    pub const fn total(self) -> usize {
        self.succeeded + self.failed
    }
}
