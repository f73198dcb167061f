use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{verify_feed_config, FeedConfig, ValidationError};

const IDENTIFIERS_JSON: &str = include_str!("data/identifiers.json");
const IDENTIFIERS_TEST_JSON: &str = include_str!("data/identifiers_test.json");

/// Errors raised while loading or verifying a feed registry.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("registry entry '{identifier}': {source}")]
    Entry {
        identifier: String,
        source: ValidationError,
    },

    #[error("malformed registry document: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// The two checked-in registries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegistrySource {
    Production,
    Test,
}

impl RegistrySource {
    pub const ALL: [Self; 2] = [Self::Production, Self::Test];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Production => "production",
            Self::Test => "test",
        }
    }
}

impl Display for RegistrySource {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One registry entry.
///
/// Checked-in registries carry more than the uploader config; anything
/// beyond it is ignored here.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedEntry {
    pub uploader_config: FeedConfig,
}

/// Ordered identifier-name -> feed entry mapping, consumed read-only.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct FeedRegistry {
    entries: BTreeMap<String, FeedEntry>,
}

impl FeedRegistry {
    /// Loads one of the checked-in registries bundled with the crate.
    pub fn builtin(source: RegistrySource) -> Result<Self, RegistryError> {
        match source {
            RegistrySource::Production => Self::from_json_str(IDENTIFIERS_JSON),
            RegistrySource::Test => Self::from_json_str(IDENTIFIERS_TEST_JSON),
        }
    }

    pub fn from_json_str(document: &str) -> Result<Self, RegistryError> {
        Ok(serde_json::from_str(document)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, RegistryError> {
        let document = fs::read_to_string(path)?;
        Self::from_json_str(&document)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, identifier: &str) -> Option<&FeedEntry> {
        self.entries.get(identifier)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FeedEntry)> {
        self.entries
            .iter()
            .map(|(identifier, entry)| (identifier.as_str(), entry))
    }

    /// Runs every entry's uploader config through the validator in
    /// identifier order, stopping at the first invalid entry.
    ///
    /// Returns the number of entries checked on success.
    pub fn verify_all(&self) -> Result<usize, RegistryError> {
        for (identifier, entry) in &self.entries {
            verify_feed_config(&entry.uploader_config).map_err(|source| RegistryError::Entry {
                identifier: identifier.clone(),
                source,
            })?;
        }

        Ok(self.entries.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_registries_parse_and_verify() {
        for source in RegistrySource::ALL {
            let registry = FeedRegistry::builtin(source).expect("registry must parse");
            assert!(!registry.is_empty());
            registry.verify_all().expect("checked-in configs must verify");
        }
    }

    #[test]
    fn extra_entry_fields_are_ignored() {
        let registry = FeedRegistry::from_json_str(
            r#"{
                "BTCUSD": {
                    "uploaderConfig": {
                        "publishInterval": "900",
                        "minDelay": "0",
                        "numerator": {"dataSource": "Coinbase", "assetName": "BTC-USD"}
                    },
                    "description": "single-asset feed",
                    "decimals": 18
                }
            }"#,
        )
        .expect("must parse");

        assert_eq!(registry.verify_all().expect("must verify"), 1);
        assert!(registry.get("BTCUSD").is_some());
    }

    #[test]
    fn verify_all_reports_first_failing_identifier() {
        // Two broken entries; the scan is in identifier order, so the
        // alphabetically first one is reported.
        let registry = FeedRegistry::from_json_str(
            r#"{
                "ZZZBAD": {"uploaderConfig": {"minDelay": "0"}},
                "AAABAD": {"uploaderConfig": {"publishInterval": "900"}}
            }"#,
        )
        .expect("must parse");

        let err = registry.verify_all().expect_err("must fail");
        match err {
            RegistryError::Entry { identifier, source } => {
                assert_eq!(identifier, "AAABAD");
                assert_eq!(source, ValidationError::MissingMinDelay);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn malformed_document_is_rejected() {
        let err = FeedRegistry::from_json_str("{not json").expect_err("must fail");
        assert!(matches!(err, RegistryError::Malformed(_)));
    }
}
