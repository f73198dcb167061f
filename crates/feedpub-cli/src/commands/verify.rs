use serde::Serialize;

use feedpub_core::{FeedRegistry, RegistrySource};

use crate::cli::{RegistrySelector, VerifyArgs};
use crate::error::CliError;

use super::CommandResult;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RegistryReport {
    registry: String,
    entries_verified: usize,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct VerifyResponseData {
    reports: Vec<RegistryReport>,
}

pub fn run(args: &VerifyArgs) -> Result<CommandResult, CliError> {
    let mut reports = Vec::new();

    if let Some(path) = &args.registry {
        let registry = FeedRegistry::from_path(path)?;
        reports.push(RegistryReport {
            registry: path.clone(),
            entries_verified: registry.verify_all()?,
        });
    } else {
        for source in selected(args.which) {
            let registry = FeedRegistry::builtin(source)?;
            reports.push(RegistryReport {
                registry: source.to_string(),
                entries_verified: registry.verify_all()?,
            });
        }
    }

    let data = serde_json::to_value(VerifyResponseData { reports })?;
    Ok(CommandResult::ok(data))
}

fn selected(selector: RegistrySelector) -> Vec<RegistrySource> {
    match selector {
        RegistrySelector::Production => vec![RegistrySource::Production],
        RegistrySelector::Test => vec![RegistrySource::Test],
        RegistrySelector::All => RegistrySource::ALL.to_vec(),
    }
}
