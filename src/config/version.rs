//! WooCommerce REST API version definitions.

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// WooCommerce REST API namespace version.
///
/// The version is the namespace segment after `/wp-json/`, so `V3` maps to
/// `{store}/wp-json/wc/v3`.
///
/// # Example
///
/// ```rust
/// use woocommerce_api::ApiVersion;
///
/// assert_eq!(ApiVersion::latest(), ApiVersion::V3);
/// assert_eq!(ApiVersion::V3.to_string(), "wc/v3");
///
/// let version: ApiVersion = "v2".parse().unwrap();
/// assert_eq!(version, ApiVersion::V2);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ApiVersion {
    /// Legacy `wc/v1` namespace (WooCommerce 2.6 - 3.0).
    V1,
    /// `wc/v2` namespace (WooCommerce 3.0 - 3.5).
    V2,
    /// `wc/v3` namespace (WooCommerce 3.5+).
    V3,
}

impl ApiVersion {
    /// Returns the latest API version.
    #[must_use]
    pub const fn latest() -> Self {
        Self::V3
    }

    /// Returns the namespace path segment (e.g., `wc/v3`).
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::V1 => "wc/v1",
            Self::V2 => "wc/v2",
            Self::V3 => "wc/v3",
        }
    }

    /// Returns `true` for namespaces WooCommerce has deprecated.
    #[must_use]
    pub const fn is_deprecated(&self) -> bool {
        !matches!(self, Self::V3)
    }
}

impl Default for ApiVersion {
    fn default() -> Self {
        Self::latest()
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApiVersion {
    type Err = ConfigError;

    /// Parses `wc/v3`, `v3` or `3` (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        let short = normalized.strip_prefix("wc/").unwrap_or(&normalized);
        let short = short.strip_prefix('v').unwrap_or(short);

        match short {
            "1" => Ok(Self::V1),
            "2" => Ok(Self::V2),
            "3" => Ok(Self::V3),
            _ => Err(ConfigError::InvalidApiVersion {
                version: s.to_string(),
            }),
        }
    }
}
