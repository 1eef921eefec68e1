//! Load options
//!
//! `Options` tells a loader where to look and which formats it may decode.
//! Templates are tried in the order they were added.
//!
//! # Standard search order
//!
//! 1. `$XDG_CONFIG_HOME/<prefix>`, when the variable holds an absolute path
//! 2. `$HOME/.config/<prefix>`, when `HOME` holds an absolute path
//! 3. The platform config directory, when it is not one of the above
//! 4. `/etc/<prefix>`
//!
//! Every standard template expands to an absolute directory, so the current
//! working directory is never searched unless a caller adds it explicitly.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use crate::adapters::ProcessEnv;
use crate::core::ports::Environment;
use crate::core::resolver;
use crate::core::{Decoder, DecoderRegistry};

/// User-scope templates and the variable each one depends on
const USER_TEMPLATES: [(&str, &str); 2] = [
    ("$XDG_CONFIG_HOME", "XDG_CONFIG_HOME"),
    ("$HOME/.config", "HOME"),
];
const SYSTEM_TEMPLATES: [&str; 1] = ["/etc"];

pub struct Options<T> {
    prefix: String,
    templates: Vec<String>,
    registry: DecoderRegistry<T>,
}

impl<T> Options<T> {
    /// Empty options: no templates, no decoders
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            templates: Vec::new(),
            registry: DecoderRegistry::new(),
        }
    }

    /// Replace the subdirectory prefix
    #[must_use]
    pub fn prefix_dir(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Append one path template
    #[must_use]
    pub fn path(mut self, template: impl Into<String>) -> Self {
        self.templates.push(template.into());
        self
    }

    /// Append several path templates, keeping their order
    #[must_use]
    pub fn paths<I, S>(mut self, templates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.templates.extend(templates.into_iter().map(Into::into));
        self
    }

    /// Register a decoder for `extension` (including the leading dot)
    #[must_use]
    pub fn decoder(
        mut self,
        extension: impl Into<String>,
        decoder: impl Decoder<T> + 'static,
    ) -> Self {
        self.registry.register(extension, decoder);
        self
    }

    /// Replace the whole decoder registry
    #[must_use]
    pub fn with_registry(mut self, registry: DecoderRegistry<T>) -> Self {
        self.registry = registry;
        self
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn templates(&self) -> &[String] {
        &self.templates
    }

    pub fn registry(&self) -> &DecoderRegistry<T> {
        &self.registry
    }
}

impl<T: DeserializeOwned> Options<T> {
    /// Standard search order with JSON and TOML decoders
    pub fn standard(prefix: impl Into<String>) -> Self {
        Self::new(prefix)
            .paths(standard_templates())
            .with_registry(DecoderRegistry::standard())
    }
}

impl<T> fmt::Debug for Options<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Options")
            .field("prefix", &self.prefix)
            .field("templates", &self.templates)
            .field("registry", &self.registry)
            .finish()
    }
}

/// Templates of the standard search order, user scope first
pub fn standard_templates() -> Vec<String> {
    templates_for(&ProcessEnv::new(), dirs::config_dir())
}

fn templates_for(env: &dyn Environment, platform_dir: Option<PathBuf>) -> Vec<String> {
    let user: Vec<&str> = USER_TEMPLATES
        .iter()
        .filter(|(_, var)| {
            env.var(var)
                .is_some_and(|value| Path::new(&value).is_absolute())
        })
        .map(|(template, _)| *template)
        .collect();

    let mut templates: Vec<String> = user.iter().map(ToString::to_string).collect();

    if let Some(dir) = platform_dir.and_then(|d| d.to_str().map(str::to_string)) {
        // Directories containing `$` would be expanded again; leave them out.
        let covered = user.iter().any(|t| resolver::expand(t, env) == dir);
        if !covered && !dir.contains('$') && Path::new(&dir).is_absolute() {
            templates.push(dir);
        }
    }

    templates.extend(SYSTEM_TEMPLATES.iter().map(ToString::to_string));
    templates
}
