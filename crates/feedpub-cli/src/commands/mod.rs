mod export;
mod verify;

use feedpub_core::{Envelope, EnvelopeMeta};
use serde_json::Value;
use uuid::Uuid;

use crate::cli::{Cli, Command};
use crate::error::CliError;

pub struct CommandResult {
    pub data: Value,
    pub warnings: Vec<String>,
    pub errors: Vec<feedpub_core::EnvelopeError>,
}

impl CommandResult {
    pub fn ok(data: Value) -> Self {
        Self {
            data,
            warnings: Vec::new(),
            errors: Vec::new(),
        }
    }

    pub fn with_warning(mut self, warning: impl Into<String>) -> Self {
        self.warnings.push(warning.into());
        self
    }
}

pub async fn run(cli: &Cli) -> Result<Envelope<Value>, CliError> {
    let command_result = match &cli.command {
        Command::Verify(args) => verify::run(args)?,
        Command::Export => export::run().await?,
    };

    let CommandResult {
        data,
        warnings,
        errors,
    } = command_result;

    let mut meta = EnvelopeMeta::new(Uuid::new_v4().to_string(), "v1.0.0")?;
    for warning in warnings {
        meta.push_warning(warning);
    }

    Envelope::with_errors(meta, data, errors).map_err(CliError::from)
}
