use std::env;

/// Stock/ETF data key.
pub const ALPHAVANTAGE_API_KEY: &str = "ALPHAVANTAGE_API_KEY";
/// Commodity futures data key.
pub const BARCHART_API_KEY: &str = "BARCHART_API_KEY";
/// Equities data key.
pub const BARCHART_EQUITIES_API_KEY: &str = "BARCHART_EQUITIES_API_KEY";
/// Crypto-market data key.
pub const CMC_PRO_API_KEY: &str = "CMC_PRO_API_KEY";

/// Every key the export pipeline needs before it may run.
pub const REQUIRED_API_KEYS: [&str; 4] = [
    ALPHAVANTAGE_API_KEY,
    BARCHART_API_KEY,
    BARCHART_EQUITIES_API_KEY,
    CMC_PRO_API_KEY,
];

/// Provider API keys gathered from the environment.
///
/// Empty and whitespace-only values normalize to absent, so "set but
/// blank" never counts as a usable credential.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportCredentials {
    pub alpha_vantage: Option<String>,
    pub barchart: Option<String>,
    pub barchart_equities: Option<String>,
    pub cmc: Option<String>,
}

impl ExportCredentials {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds credentials through an injectable lookup, keeping the
    /// export gate testable without real keys in the environment.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            alpha_vantage: non_empty(lookup(ALPHAVANTAGE_API_KEY)),
            barchart: non_empty(lookup(BARCHART_API_KEY)),
            barchart_equities: non_empty(lookup(BARCHART_EQUITIES_API_KEY)),
            cmc: non_empty(lookup(CMC_PRO_API_KEY)),
        }
    }

    /// The explicit "credentials complete" precondition for the export
    /// trigger.
    pub fn is_complete(&self) -> bool {
        self.missing().is_empty()
    }

    /// Names of required keys absent from the environment.
    pub fn missing(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.alpha_vantage.is_none() {
            missing.push(ALPHAVANTAGE_API_KEY);
        }
        if self.barchart.is_none() {
            missing.push(BARCHART_API_KEY);
        }
        if self.barchart_equities.is_none() {
            missing.push(BARCHART_EQUITIES_API_KEY);
        }
        if self.cmc.is_none() {
            missing.push(CMC_PRO_API_KEY);
        }
        missing
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_keys_present_is_complete() {
        let credentials = ExportCredentials::from_lookup(|_| Some("key".to_string()));
        assert!(credentials.is_complete());
        assert!(credentials.missing().is_empty());
    }

    #[test]
    fn blank_value_counts_as_missing() {
        let credentials = ExportCredentials::from_lookup(|key| {
            if key == BARCHART_API_KEY {
                Some("   ".to_string())
            } else {
                Some("key".to_string())
            }
        });

        assert!(!credentials.is_complete());
        assert_eq!(credentials.missing(), vec![BARCHART_API_KEY]);
    }

    #[test]
    fn empty_environment_is_missing_every_key() {
        let credentials = ExportCredentials::default();
        assert_eq!(credentials.missing(), REQUIRED_API_KEYS);
    }

    #[test]
    fn missing_names_every_absent_key() {
        let credentials = ExportCredentials::from_lookup(|key| {
            (key == CMC_PRO_API_KEY).then(|| "key".to_string())
        });

        assert_eq!(
            credentials.missing(),
            vec![
                ALPHAVANTAGE_API_KEY,
                BARCHART_API_KEY,
                BARCHART_EQUITIES_API_KEY
            ]
        );
    }
}
