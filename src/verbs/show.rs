use std::sync::Arc;

use serde_json::Value;

use confusion::{ConfigLoader, Options};

use crate::interaction::TerminalInteraction;
use crate::usecases::{ConfusionError, ShowConfigUseCase};

pub fn execute(name: &str, options: &Options<Value>) -> Result<(), ConfusionError> {
    let usecase = ShowConfigUseCase::new(ConfigLoader::os(), Arc::new(TerminalInteraction::new()));
    usecase.execute(name, options)?;
    Ok(())
}
