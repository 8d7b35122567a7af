//! Resource limit enforcement

use crate::{Error, ParseConfig, Result};

/// Reject inputs larger than the configured maximum
pub fn validate_input_size(size: usize, config: &ParseConfig) -> Result<()> {
    if size > config.max_input_size {
        tracing::warn!(
            size,
            max = config.max_input_size,
            "rejecting oversized JSON input"
        );
        return Err(Error::InputTooLarge {
            size,
            max: config.max_input_size,
        });
    }
    Ok(())
}

/// JSON depth tracker for preventing stack overflow
#[derive(Debug, Clone)]
pub struct DepthTracker {
    current_depth: usize,
    max_depth: usize,
}

impl DepthTracker {
    /// Create depth tracker from parser config
    pub fn from_config(config: &ParseConfig) -> Self {
        Self::with_max_depth(config.max_depth)
    }

    /// Create a new depth tracker with custom limit
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self {
            current_depth: 0,
            max_depth,
        }
    }

    /// Enter a new nesting level opened at `offset`
    pub fn enter(&mut self, offset: usize) -> Result<()> {
        if self.current_depth >= self.max_depth {
            tracing::warn!(
                offset,
                max_depth = self.max_depth,
                "rejecting deeply nested JSON input"
            );
            return Err(Error::DepthLimitExceeded {
                offset,
                max_depth: self.max_depth,
            });
        }
        self.current_depth += 1;
        Ok(())
    }

    /// Exit a nesting level
    pub fn exit(&mut self) {
        self.current_depth = self.current_depth.saturating_sub(1);
    }

    /// Get current depth
    pub fn current_depth(&self) -> usize {
        self.current_depth
    }
}

impl Default for DepthTracker {
    fn default() -> Self {
        Self::from_config(&ParseConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_size_limit() {
        let config = ParseConfig::default().with_max_input_size(4);
        assert!(validate_input_size(4, &config).is_ok());
        let err = validate_input_size(5, &config).unwrap_err();
        assert_eq!(err, Error::InputTooLarge { size: 5, max: 4 });
    }

    #[test]
    fn test_depth_tracker_limit() {
        let mut tracker = DepthTracker::with_max_depth(2);
        tracker.enter(0).unwrap();
        tracker.enter(1).unwrap();
        assert_eq!(tracker.current_depth(), 2);

        let err = tracker.enter(2).unwrap_err();
        assert_eq!(
            err,
            Error::DepthLimitExceeded {
                offset: 2,
                max_depth: 2
            }
        );

        tracker.exit();
        assert_eq!(tracker.current_depth(), 1);
        tracker.enter(3).unwrap();
    }

    #[test]
    fn test_exit_saturates() {
        let mut tracker = DepthTracker::default();
        tracker.exit();
        assert_eq!(tracker.current_depth(), 0);
    }
}
