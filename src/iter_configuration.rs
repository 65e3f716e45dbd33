//! Configuration types for buffering combinators

use crate::error::{IterError, IterResult};
use serde::{Deserialize, Serialize};

/// Buffer configuration for combinators that queue values on behalf of a
/// consumer (`group_by`, `unzip`, `repeat`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BufferConfig {
    /// Capacity reserved up front for each pending queue.
    pub initial_capacity: usize,
    /// Upper bound on values waiting in a single queue. `None` means the
    /// queue grows with the imbalance between consumers.
    pub max_pending: Option<usize>,
}

impl Default for BufferConfig {
    fn default() -> Self {
        Self {
            initial_capacity: 16,
            max_pending: None,
        }
    }
}

impl BufferConfig {
    /// Unbounded buffering with a custom initial capacity.
    pub fn with_capacity(initial_capacity: usize) -> Self {
        Self {
            initial_capacity,
            ..Self::default()
        }
    }

    /// Cap each pending queue at `max_pending` values.
    pub fn bounded(max_pending: usize) -> Self {
        Self {
            initial_capacity: max_pending.min(Self::default().initial_capacity),
            max_pending: Some(max_pending),
        }
    }

    /// Parse a configuration from JSON, e.g. `{"max_pending": 1024}`.
    pub fn from_json(json: &str) -> IterResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> IterResult<()> {
        if self.max_pending == Some(0) {
            return Err(IterError::InvalidArgument(
                "max_pending must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Check whether a queue already holding `len` values may take another.
    pub(crate) fn admits(&self, len: usize) -> Result<(), IterError> {
        match self.max_pending {
            Some(limit) if len >= limit => {
                log::warn!("pending buffer overflow: limit of {} values reached", limit);
                Err(IterError::BufferOverflow { limit })
            }
            _ => Ok(()),
        }
    }
}
