//! Parser configuration
//!
//! Limits protect the recursive-descent parser from hostile input; the
//! grammar switch controls the one deliberate deviation from strict JSON.

use serde::{Deserialize, Serialize};

/// Default maximum nesting depth of arrays and objects
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Default maximum input size (16 MiB)
pub const DEFAULT_MAX_INPUT_SIZE: usize = 16 * 1024 * 1024;

/// Configuration for [`Parser`](crate::Parser)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseConfig {
    /// Maximum nesting depth of arrays and objects
    pub max_depth: usize,
    /// Maximum input size in bytes
    pub max_input_size: usize,
    /// Accept a `,` directly before `]` or `}`
    pub allow_trailing_commas: bool,
}

impl ParseConfig {
    /// Strict JSON: no trailing commas, shallow nesting
    pub fn strict() -> Self {
        Self {
            max_depth: 64,
            max_input_size: DEFAULT_MAX_INPUT_SIZE,
            allow_trailing_commas: false,
        }
    }

    /// Generous limits for trusted input
    pub fn lenient() -> Self {
        Self {
            max_depth: 512,
            max_input_size: 64 * 1024 * 1024,
            allow_trailing_commas: true,
        }
    }

    /// Set the maximum nesting depth
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Set the maximum input size in bytes
    pub fn with_max_input_size(mut self, max_input_size: usize) -> Self {
        self.max_input_size = max_input_size;
        self
    }

    /// Accept or reject trailing commas
    pub fn with_trailing_commas(mut self, allow: bool) -> Self {
        self.allow_trailing_commas = allow;
        self
    }
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            max_input_size: DEFAULT_MAX_INPUT_SIZE,
            allow_trailing_commas: true,
        }
    }
}
