pub mod cli;
pub mod config;
pub mod output;

use crate::analysis::load_binding_tree;
use crate::generators::cpp::walker::SkipReason;
use crate::generators::generate;

pub use cli::*;
pub use config::*;
pub use output::*;

/// Load the binding tree named by `config`, generate every file and write
/// it below the configured output root. Returns the written paths relative
/// to that root.
pub fn generate_from_config(
    config: &config::GenerateConfig,
) -> Result<Vec<String>, Box<dyn std::error::Error>> {
    let logger = output::Logger::new(config.is_verbose(), false);

    config
        .validate()
        .map_err(|e| Box::new(e) as Box<dyn std::error::Error>)?;

    logger.verbose(&format!("Bindings version: {}", config.schema_version));
    if let Some(ref proxy) = config.proxy {
        logger.verbose(&format!("Proxy {} is not used for local bindings", proxy));
    }

    let mut reporter = output::ProgressReporter::new(logger.clone(), 3);

    reporter.start_step("Loading binding tree");
    let tree = match load_binding_tree(&config.input_path) {
        Ok(tree) => tree,
        Err(e) => {
            reporter.fail_step(&e.to_string());
            return Err(e.into());
        }
    };
    reporter.complete_step(Some(&format!(
        "{} classes from {}",
        tree.classes.len(),
        config.input_path
    )));

    if tree.is_empty() {
        logger.warning("Binding tree has no classes; only the aggregate header will be written");
    }

    reporter.start_step("Generating stubs");
    let generated = generate(&tree)?;
    for (name, category) in &generated.classified {
        reporter.update_progress(&format!("  {} → {}", name, category));
    }
    for (name, reason) in &generated.skipped {
        if *reason == SkipReason::Denylisted {
            logger.debug(&format!("Discarded {} (legacy library)", name));
        }
    }
    reporter.complete_step(Some(&format!(
        "{} classes, {} delegates",
        generated.class_count(),
        generated.delegates.len()
    )));

    reporter.start_step("Writing files");
    let written = match generated.write_to(&config.output_path) {
        Ok(written) => written,
        Err(e) => {
            reporter.fail_step(&e.to_string());
            return Err(e.into());
        }
    };
    for file in &written {
        reporter.update_progress(&format!("  📄 {}/{}", config.output_path, file));
    }
    reporter.complete_step(None);
    reporter.finish(&format!("Wrote {} files", written.len()));

    Ok(written)
}
