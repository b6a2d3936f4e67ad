//! # Configuration
//!
//! Runtime settings for the board, loadable from environment variables so a
//! display box can be pointed at a different Order Service without a rebuild.

use std::time::Duration;

/// Default seconds between automatic refreshes.
const DEFAULT_POLL_SECS: u64 = 5;
/// Default request channel capacity.
const DEFAULT_CHANNEL_CAPACITY: usize = 32;

/// Settings for the board synchronizer and its Order Service client.
#[derive(Debug, Clone)]
pub struct BoardConfig {
    /// Base URL of the Order Service, e.g. `http://orders:8080/api`.
    pub base_url: String,
    /// Prefix for relative item image paths; empty leaves paths untouched.
    pub image_base_url: String,
    /// Period of the automatic refresh timer.
    pub poll_interval: Duration,
    /// Capacity of the actor's request channel.
    pub channel_capacity: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080/api".to_string(),
            image_base_url: String::new(),
            poll_interval: Duration::from_secs(DEFAULT_POLL_SECS),
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
        }
    }
}

impl BoardConfig {
    /// Builds a config from the environment, falling back to defaults:
    /// `ORDER_API_URL`, `ORDER_IMAGE_URL`, `ORDER_POLL_SECS`.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let poll_interval = std::env::var("ORDER_POLL_SECS")
            .ok()
            .and_then(|s| s.trim().parse::<u64>().ok())
            .filter(|&secs| secs >= 1)
            .map(Duration::from_secs)
            .unwrap_or(defaults.poll_interval);
        Self {
            base_url: std::env::var("ORDER_API_URL").unwrap_or(defaults.base_url),
            image_base_url: std::env::var("ORDER_IMAGE_URL").unwrap_or(defaults.image_base_url),
            poll_interval,
            channel_capacity: defaults.channel_capacity,
        }
    }
}
