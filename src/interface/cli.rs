use crate::interface::config::GenerateConfig;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "decomp-stubgen")]
#[command(about = "Generate C++ class stubs from reverse-engineered bindings", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate headers, stub sources and the aggregate header
    Generate {
        /// Binding tree JSON (default: ./bindings.json)
        #[arg(short = 'i', long = "input", default_value = "./bindings.json")]
        input_path: PathBuf,

        /// Output root receiving headers/ and src/ (default: .)
        #[arg(short = 'o', long = "output", default_value = ".")]
        output_path: PathBuf,

        /// Bindings version the tree was parsed from
        #[arg(short = 'v', long = "schema-version", default_value = "2.2074")]
        schema_version: String,

        /// Proxy used when fetching bindings
        #[arg(short = 'p', long = "proxy")]
        proxy: Option<String>,

        /// Verbose output
        #[arg(long, action = clap::ArgAction::SetTrue)]
        verbose: bool,

        /// Configuration file path; command line flags take precedence
        #[arg(short = 'c', long = "config")]
        config_file: Option<PathBuf>,
    },
}

impl Commands {
    pub fn config_file(&self) -> Option<&PathBuf> {
        match self {
            Commands::Generate { config_file, .. } => config_file.as_ref(),
        }
    }
}

impl From<&Commands> for GenerateConfig {
    fn from(cmd: &Commands) -> Self {
        match cmd {
            Commands::Generate {
                input_path,
                output_path,
                schema_version,
                proxy,
                verbose,
                ..
            } => GenerateConfig {
                input_path: input_path.to_string_lossy().to_string(),
                output_path: output_path.to_string_lossy().to_string(),
                schema_version: schema_version.clone(),
                proxy: proxy.clone(),
                // an unset flag must not override a config file
                verbose: verbose.then_some(true),
            },
        }
    }
}
