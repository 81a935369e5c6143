// model = "claude-opus-4-5"
// created = "2026-10-19"
// modified = "2026-10-19"
// driver = "Isaac Clayton"

//! Skip list tuning: the default level ceiling and the promotion probability.

use std::fmt;

/// Default ceiling on node heights. Enough for about 4^32 entries at p = 1/4.
pub const DEFAULT_MAX_LEVEL: usize = 32;

/// Fraction of nodes with level i links that also get level i+1 links.
///
/// 1/4 is a good tradeoff between speed and space. 1/2 gives less variable
/// running times at the cost of more links per node.
pub const DEFAULT_P: f64 = 0.25;

/// Hard limit on the configurable ceiling.
pub const LIMIT_MAX_LEVEL: usize = 64;

/// Construction parameters for a skip list.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Config {
    /// Level ceiling that random heights are drawn under. The effective cap
    /// never drops below this, but grows with the tallest level in use.
    pub max_level: usize,
    /// Probability that a node is promoted one more level.
    pub probability: f64,
}

/// Error returned when a configuration is unusable.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// The level ceiling was zero.
    ZeroMaxLevel,
    /// The level ceiling was above [`LIMIT_MAX_LEVEL`].
    MaxLevelTooLarge(usize),
    /// The probability was not in the open interval (0, 1).
    InvalidProbability(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroMaxLevel => write!(f, "max level must be at least 1"),
            ConfigError::MaxLevelTooLarge(level) => {
                write!(f, "max level {} exceeds limit {}", level, LIMIT_MAX_LEVEL)
            }
            ConfigError::InvalidProbability(p) => {
                write!(f, "probability {} is not in (0, 1)", p)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl Default for Config {
    fn default() -> Self {
        return Config {
            max_level: DEFAULT_MAX_LEVEL,
            probability: DEFAULT_P,
        };
    }
}

impl Config {
    pub fn with_max_level(mut self, max_level: usize) -> Config {
        self.max_level = max_level;
        return self;
    }

    pub fn with_probability(mut self, probability: f64) -> Config {
        self.probability = probability;
        return self;
    }

    /// Check that the configuration can build a list.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_level == 0 {
            return Err(ConfigError::ZeroMaxLevel);
        }
        if self.max_level > LIMIT_MAX_LEVEL {
            return Err(ConfigError::MaxLevelTooLarge(self.max_level));
        }
        // NaN fails both comparisons.
        if !(self.probability > 0.0 && self.probability < 1.0) {
            return Err(ConfigError::InvalidProbability(self.probability));
        }
        return Ok(());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let config = Config::default();
        assert_eq!(config.max_level, 32);
        assert_eq!(config.probability, 0.25);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn rejects_zero_level() {
        let config = Config::default().with_max_level(0);
        assert_eq!(config.validate(), Err(ConfigError::ZeroMaxLevel));
    }

    #[test]
    fn rejects_huge_level() {
        let config = Config::default().with_max_level(65);
        assert_eq!(config.validate(), Err(ConfigError::MaxLevelTooLarge(65)));
        assert!(Config::default().with_max_level(64).validate().is_ok());
    }

    #[test]
    fn rejects_bad_probability() {
        for p in [0.0, 1.0, -0.5, 1.5] {
            let config = Config::default().with_probability(p);
            assert_eq!(config.validate(), Err(ConfigError::InvalidProbability(p)));
        }
        assert!(Config::default().with_probability(f64::NAN).validate().is_err());
        assert!(Config::default().with_probability(0.5).validate().is_ok());
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            ConfigError::ZeroMaxLevel.to_string(),
            "max level must be at least 1"
        );
        assert_eq!(
            ConfigError::MaxLevelTooLarge(80).to_string(),
            "max level 80 exceeds limit 64"
        );
    }
}
