use std::sync::Arc;

use serde_json::Value;

use confusion::{ConfigLoader, Options};

use crate::interaction::UserInteraction;
use crate::usecases::ConfusionError;

pub struct ShowConfigUseCase {
    loader: ConfigLoader,
    ui: Arc<dyn UserInteraction>,
}

impl ShowConfigUseCase {
    pub fn new(loader: ConfigLoader, ui: Arc<dyn UserInteraction>) -> Self {
        Self { loader, ui }
    }

    /// Load `name` and print the document as pretty-printed JSON
    pub fn execute(&self, name: &str, options: &Options<Value>) -> Result<Value, ConfusionError> {
        let loaded = self.loader.load(name, options)?;
        tracing::info!(path = %loaded.path.display(), "Loaded config");

        self.ui.print(&serde_json::to_string_pretty(&loaded.value)?);
        Ok(loaded.value)
    }
}
