use std::sync::Arc;

use serde_json::Value;

use confusion::{ConfigLoader, Options};

use crate::interaction::TerminalInteraction;
use crate::usecases::{ConfusionError, LocateConfigUseCase};

pub fn execute(name: &str, options: &Options<Value>, trace: bool) -> Result<(), ConfusionError> {
    let usecase = LocateConfigUseCase::new(ConfigLoader::os(), Arc::new(TerminalInteraction::new()));
    usecase.execute(name, options, trace)?;
    Ok(())
}
