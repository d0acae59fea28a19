//! Configuration types for the rotation engine
//!
//! Level 4 - Utilities and configuration

/// Engine configuration
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EngineConfig {
    /// Upper bound on enumerated 4-person groups per round
    pub max_quads: usize,
    /// Number of snapshots kept for undo; the oldest drop first
    pub undo_depth: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_quads: 200,
            undo_depth: 50,
        }
    }
}

impl EngineConfig {
    /// Set the quad enumeration cap
    pub fn with_max_quads(mut self, max_quads: usize) -> Self {
        self.max_quads = max_quads;
        self
    }

    /// Set the undo stack depth
    pub fn with_undo_depth(mut self, undo_depth: usize) -> Self {
        self.undo_depth = undo_depth;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_config_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.max_quads, 200);
        assert_eq!(config.undo_depth, 50);
    }

    #[test]
    fn test_engine_config_builders() {
        let config = EngineConfig::default().with_max_quads(10).with_undo_depth(3);
        assert_eq!(config.max_quads, 10);
        assert_eq!(config.undo_depth, 3);
    }
}
