use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// Which leg of a price feed an asset reference occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedLeg {
    Numerator,
    Denominator,
}

impl FeedLeg {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Numerator => "numerator",
            Self::Denominator => "denominator",
        }
    }
}

impl Display for FeedLeg {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One leg of a price feed: a data source plus the asset it quotes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetRef {
    #[serde(default)]
    pub data_source: Option<String>,
    #[serde(default)]
    pub asset_name: Option<String>,
}

impl AssetRef {
    pub fn new(data_source: impl Into<String>, asset_name: impl Into<String>) -> Self {
        Self {
            data_source: Some(data_source.into()),
            asset_name: Some(asset_name.into()),
        }
    }

    fn verify(&self, leg: FeedLeg) -> Result<(), ValidationError> {
        if is_blank(&self.data_source) {
            return Err(ValidationError::MissingDataSource { leg });
        }
        if is_blank(&self.asset_name) {
            return Err(ValidationError::MissingAssetName { leg });
        }
        Ok(())
    }
}

/// Uploader configuration describing how one price feed is published.
///
/// Every field is optional at the serde layer so that absent and `null`
/// JSON both deserialize; [`FeedConfig::verify`] decides acceptability.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedConfig {
    /// Publish cadence in seconds, kept as a numeric string.
    #[serde(default)]
    pub publish_interval: Option<String>,
    /// Minimum delay before publication, kept as a numeric string.
    #[serde(default)]
    pub min_delay: Option<String>,
    #[serde(default)]
    pub numerator: Option<AssetRef>,
    /// Absent for single-asset feeds; required to be complete when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub denominator: Option<AssetRef>,
}

impl FeedConfig {
    /// Checks field presence, first failure wins.
    ///
    /// Check order: `publishInterval`, `minDelay`, the numerator leg,
    /// then the denominator leg only if one is present.
    pub fn verify(&self) -> Result<(), ValidationError> {
        if is_blank(&self.publish_interval) {
            return Err(ValidationError::MissingPublishInterval);
        }
        if is_blank(&self.min_delay) {
            return Err(ValidationError::MissingMinDelay);
        }

        let numerator = self
            .numerator
            .as_ref()
            .ok_or(ValidationError::MissingNumerator)?;
        numerator.verify(FeedLeg::Numerator)?;

        if let Some(denominator) = &self.denominator {
            denominator.verify(FeedLeg::Denominator)?;
        }

        Ok(())
    }
}

/// Validate an uploader configuration, raising on the first missing field.
///
/// Pure and idempotent; successful validation is signaled by `Ok(())`.
pub fn verify_feed_config(config: &FeedConfig) -> Result<(), ValidationError> {
    config.verify()
}

// Empty and whitespace-only strings count as missing.
fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().is_none_or(|v| v.trim().is_empty())
}
