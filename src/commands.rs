use clap::{Args, CommandFactory, Parser, Subcommand};
use serde_json::Value;

use confusion::{DecoderRegistry, Options};
use confusion::options::standard_templates;

use crate::{usecases::ConfusionError, verbs};

#[derive(Debug, Parser)]
#[command(name = "confusion", about = "Locate and load configuration files", long_about = None)]
pub struct Cli {
    #[arg(short, long, global = true, help = "Log every probed candidate")]
    pub verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl Cli {
    pub fn execute(&self) -> Result<(), ConfusionError> {
        match &self.command {
            Some(Commands::Locate {
                name,
                search,
                trace,
            }) => verbs::locate::execute(name, &search.options(), *trace),
            Some(Commands::Show { name, search }) => verbs::show::execute(name, &search.options()),
            None => {
                Cli::command().print_help()?;
                Ok(())
            }
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(about = "Print the path of the config file that would be loaded")]
    Locate {
        #[arg(help = "Config file name, e.g. config.toml")]
        name: String,

        #[command(flatten)]
        search: SearchArgs,

        #[arg(long, help = "Print every examined candidate to stderr")]
        trace: bool,
    },

    #[command(about = "Load a config file and print it as JSON")]
    Show {
        #[arg(help = "Config file name, e.g. config.toml")]
        name: String,

        #[command(flatten)]
        search: SearchArgs,
    },
}

#[derive(Args, Debug)]
struct SearchArgs {
    #[arg(long, default_value = "", help = "Subdirectory under each search path")]
    prefix: String,

    #[arg(
        long = "path",
        value_name = "TEMPLATE",
        help = "Directory to search, may reference $VARS (repeatable, tried in order)"
    )]
    paths: Vec<String>,
}

impl SearchArgs {
    /// Options for the given flags, falling back to the standard search order
    fn options(&self) -> Options<Value> {
        let templates = if self.paths.is_empty() {
            standard_templates()
        } else {
            self.paths.clone()
        };

        Options::new(self.prefix.as_str())
            .paths(templates)
            .with_registry(DecoderRegistry::standard())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_locate_with_paths() {
        let cli = Cli::try_parse_from([
            "confusion",
            "locate",
            "config.toml",
            "--prefix",
            "app",
            "--path",
            "/etc",
            "--path",
            "$HOME/.config",
            "--trace",
        ])
        .unwrap();

        match cli.command {
            Some(Commands::Locate {
                name,
                search,
                trace,
            }) => {
                assert_eq!(name, "config.toml");
                assert!(trace);
                let options = search.options();
                assert_eq!(options.prefix(), "app");
                assert_eq!(options.templates(), ["/etc", "$HOME/.config"]);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_show_defaults_to_standard_paths() {
        let cli = Cli::try_parse_from(["confusion", "show", "config.json", "-v"]).unwrap();

        assert!(cli.verbose);
        match cli.command {
            Some(Commands::Show { search, .. }) => {
                let options = search.options();
                assert_eq!(options.prefix(), "");
                assert_eq!(options.templates(), standard_templates().as_slice());
                assert_eq!(options.registry().extensions(), vec![".json", ".toml"]);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
