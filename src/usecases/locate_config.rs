use std::path::PathBuf;
use std::sync::Arc;

use serde_json::Value;

use confusion::{Candidate, ConfigLoader, Options, Outcome};

use crate::interaction::UserInteraction;
use crate::usecases::ConfusionError;

pub struct LocateConfigUseCase {
    loader: ConfigLoader,
    ui: Arc<dyn UserInteraction>,
}

impl LocateConfigUseCase {
    pub fn new(loader: ConfigLoader, ui: Arc<dyn UserInteraction>) -> Self {
        Self { loader, ui }
    }

    /// Find the file that a load of `name` would use and print its path
    ///
    /// With `trace`, every examined candidate is reported on the error
    /// stream before the result, including when the search fails.
    pub fn execute(
        &self,
        name: &str,
        options: &Options<Value>,
        trace: bool,
    ) -> Result<PathBuf, ConfusionError> {
        let (result, report) = self.loader.load_traced(name, options);

        if trace {
            for candidate in &report.candidates {
                self.ui.print_error(&describe(candidate));
            }
        }

        let loaded = result?;
        self.ui.print(&loaded.path.display().to_string());
        Ok(loaded.path)
    }
}

fn describe(candidate: &Candidate) -> String {
    let path = candidate.path.display();
    match &candidate.outcome {
        Outcome::Absent => format!("{path}: not present"),
        Outcome::Directory => format!("{path}: directory, skipped"),
        Outcome::DecoderMissing { extension } => {
            format!("{path}: no decoder for '{extension}'")
        }
        Outcome::Unreadable(e) => format!("{path}: unreadable ({e})"),
        Outcome::DecodeFailed(e) => format!("{path}: skipped ({e})"),
        Outcome::Loaded => format!("{path}: loaded"),
    }
}
