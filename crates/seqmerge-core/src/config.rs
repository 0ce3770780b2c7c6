//! Merge-engine tunables that downstream crates can serialize/deserialize.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MergeConfig {
    /// Push-back slots reserved per cursor up front. Peeking needs one; more
    /// only matter for callers that push back aggressively.
    pub buffer_capacity: usize,

    /// Input count at or above which the winner reduction fans out across
    /// workers. Ignored unless the `parallel` feature is enabled.
    pub parallel_threshold: usize,
}

impl Default for MergeConfig {
    fn default() -> Self {
        Self {
            buffer_capacity: 8,
            parallel_threshold: 4,
        }
    }
}

impl MergeConfig {
    /// Create a config from environment variables, falling back to defaults.
    ///
    /// Environment variables:
    /// - `SEQMERGE_BUFFER_CAPACITY`: push-back slots reserved per cursor
    /// - `SEQMERGE_PARALLEL_THRESHOLD`: input count gating the parallel
    ///   winner reduction
    pub fn from_env() -> Self {
        let mut cfg = Self::default();

        if let Ok(s) = std::env::var("SEQMERGE_BUFFER_CAPACITY") {
            if let Ok(v) = s.parse::<usize>() {
                cfg.buffer_capacity = v;
            }
        }

        if let Ok(s) = std::env::var("SEQMERGE_PARALLEL_THRESHOLD") {
            if let Ok(v) = s.parse::<usize>() {
                cfg.parallel_threshold = v;
            }
        }

        cfg
    }
}
