//! Crawl configuration
//!
//! All knobs come in through the command line, so configuration is a plain
//! struct with defaults rather than a config file.

use std::time::Duration;
use thiserror::Error;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("worker count must be at least 1")]
    ZeroWorkers,

    #[error("request timeout must be non-zero")]
    ZeroTimeout,
}

/// Tunables for one crawl invocation
#[derive(Debug, Clone)]
pub struct CrawlConfig {
    /// Maximum recursion depth from the seed before traversal stops
    pub depth_limit: u32,

    /// Maximum number of simultaneous in-flight fetches, crawl-wide
    pub workers: usize,

    /// Total per-request timeout
    pub request_timeout: Duration,

    /// Connection-establishment timeout
    pub connect_timeout: Duration,
}

impl Default for CrawlConfig {
    fn default() -> Self {
        Self {
            depth_limit: 2,
            workers: 10,
            request_timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

impl CrawlConfig {
    /// Checks the configuration for values the crawler cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.workers == 0 {
            return Err(ConfigError::ZeroWorkers);
        }
        if self.request_timeout.is_zero() || self.connect_timeout.is_zero() {
            return Err(ConfigError::ZeroTimeout);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CrawlConfig::default();
        assert_eq!(config.depth_limit, 2);
        assert_eq!(config.workers, 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_workers_rejected() {
        let config = CrawlConfig {
            workers: 0,
            ..CrawlConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::ZeroWorkers)));
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let config = CrawlConfig {
            request_timeout: Duration::ZERO,
            ..CrawlConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::ZeroTimeout)));
    }

    #[test]
    fn test_depth_zero_is_valid() {
        let config = CrawlConfig {
            depth_limit: 0,
            ..CrawlConfig::default()
        };
        assert!(config.validate().is_ok());
    }
}
