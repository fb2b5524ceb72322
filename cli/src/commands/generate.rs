//! Generate command - writes model accessors for the requested types

use std::path::Path;

use graft_codegen::{GeneratedSource, generate_source};

use crate::config::Config;
use crate::error::CliError;
use crate::output;

/// Generates accessors for `types` (every declared model when empty) and
/// writes them to `output_override` or the configured output path.
pub fn run(
    config: &Config,
    types: &[String],
    output_override: Option<&Path>,
) -> Result<(), CliError> {
    let requested: Vec<String> = if types.is_empty() {
        config
            .schema()
            .models()
            .iter()
            .map(|m| m.type_name.clone())
            .collect()
    } else {
        types.iter().map(|t| t.trim().to_string()).collect()
    };

    let generated = render(config, &requested);
    for warning in &generated.warnings {
        eprintln!("{}", output::warn_line(warning));
    }
    if generated.models.is_empty() {
        return Err(CliError::NothingGenerated(requested.join(", ")));
    }

    let path = output_override
        .map(Path::to_path_buf)
        .unwrap_or_else(|| config.output_path());
    write_output(&path, &generated.code)?;

    println!(
        "{}",
        output::success(&format!(
            "Generated {} model(s) into {}",
            generated.models.len(),
            path.display()
        ))
    );
    for model in &generated.models {
        println!("  {}", model);
    }
    Ok(())
}

pub fn render(config: &Config, types: &[String]) -> GeneratedSource {
    generate_source(config.schema(), types, &config.codegen_options())
}

fn write_output(path: &Path, code: &str) -> Result<(), CliError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| CliError::IoError(e.to_string()))?;
    }
    std::fs::write(path, code).map_err(|e| CliError::IoError(e.to_string()))
}
