/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed for deterministic simulation.
    pub seed: u64,
    /// Maximum announcement log size (oldest entries dropped when
    /// exceeded). 0 = unlimited.
    pub max_announcements: usize,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            max_announcements: 0,
        }
    }
}

impl SimConfig {
    /// Set the RNG seed for deterministic simulation.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the maximum announcement log size (0 = unlimited).
    pub fn with_max_announcements(mut self, max: usize) -> Self {
        self.max_announcements = max;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_default_values() {
        let config = SimConfig::default();
        assert_eq!(config.seed, 42);
        assert_eq!(config.max_announcements, 0);
    }

    #[test]
    fn config_builder_chain() {
        let config = SimConfig::default().with_seed(7).with_max_announcements(100);
        assert_eq!(config.seed, 7);
        assert_eq!(config.max_announcements, 100);
    }
}
