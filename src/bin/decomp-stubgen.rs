use clap::Parser;
use decomp_stubgen::interface::cli::{Cli, Commands};
use decomp_stubgen::interface::config::GenerateConfig;
use decomp_stubgen::interface::generate_from_config;
use decomp_stubgen::interface::output::{print_usage_info, Logger};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        ref cmd @ Commands::Generate { .. } => run_generate(cmd),
    };
    if let Err(e) = result {
        Logger::new(false, false).error(&format!("Error: {}", e));
        std::process::exit(1);
    }
}

fn run_generate(cmd: &Commands) -> Result<(), Box<dyn std::error::Error>> {
    let from_cli = GenerateConfig::from(cmd);
    let config = match cmd.config_file() {
        Some(path) => {
            let mut config = GenerateConfig::from_file(path)?;
            config.merge(&from_cli);
            config
        }
        None => from_cli,
    };

    let logger = Logger::new(config.is_verbose(), false);
    logger.verbose(&format!("Reading bindings from {}", config.input_path));

    let written = generate_from_config(&config)?;
    let class_count = written
        .iter()
        .filter(|file| file.starts_with("src/"))
        .count();
    print_usage_info(&config.output_path, &written, class_count);

    Ok(())
}
