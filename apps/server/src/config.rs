// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Server configuration loaded from environment variables.

use solid_section_geometry::constants::{INTERSECTION_EPSILON, NOISE_STD_DEV};
use solid_section_geometry::SectionConfig;
use std::str::FromStr;

/// Server configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Port to listen on.
    pub port: u16,
    /// Request timeout in seconds.
    pub request_timeout_secs: u64,
    /// Maximum request body size in KB.
    pub max_body_kb: usize,
    /// Standard deviation of the noise added to axis-aligned sections.
    pub noise_std_dev: f64,
    /// Tolerance below which an edge counts as parallel to the cutting plane.
    pub intersection_epsilon: f64,
}

/// Parse `key` from `lookup`, falling back to `default` when unset or unparsable.
fn var_or<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T {
    lookup(key)
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or(default)
}

/// Like [`var_or`], but also falls back when the value is negative or not finite.
fn tolerance_or(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: f64) -> f64 {
    let value = var_or(lookup, key, default);
    if value.is_finite() && value >= 0.0 {
        value
    } else {
        tracing::warn!(key, value, default, "ignoring out-of-range setting");
        default
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key/value source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            port: var_or(&lookup, "PORT", 8080),
            request_timeout_secs: var_or(&lookup, "REQUEST_TIMEOUT_SECS", 30),
            max_body_kb: var_or(&lookup, "MAX_BODY_KB", 64),
            noise_std_dev: tolerance_or(&lookup, "NOISE_STD_DEV", NOISE_STD_DEV),
            intersection_epsilon: tolerance_or(
                &lookup,
                "INTERSECTION_EPSILON",
                INTERSECTION_EPSILON,
            ),
        }
    }

    /// Engine settings derived from this configuration.
    pub fn section_config(&self) -> SectionConfig {
        SectionConfig {
            noise_std_dev: self.noise_std_dev,
            intersection_epsilon: self.intersection_epsilon,
            ..SectionConfig::default()
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}
