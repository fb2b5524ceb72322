//! Check command - validates configuration and lists the declared models

use crate::config::Config;
use crate::error::CliError;
use crate::output;

pub fn run(config: &Config) -> Result<(), CliError> {
    let schema = config.schema();

    println!("{}", output::heading("Checking configuration..."));
    println!();
    println!("  {}: {}", output::label("Output"), config.output_path().display());
    println!("  {}: {}", output::label("Crate path"), config.crate_path);
    println!("  {}: {}", output::label("Models"), schema.len());

    for model in schema.models() {
        println!();
        println!(
            "  {} {}",
            model.type_name,
            output::muted(&format!("({})", model.model_name))
        );
        for field in &model.fields {
            let kind = if field.kind.is_relation() {
                " relation"
            } else {
                ""
            };
            println!(
                "    {}: {}{}",
                field.column,
                field.type_text,
                output::muted(kind)
            );
        }
    }

    if schema.is_empty() {
        println!();
        println!("{}", output::warn_line("no models declared"));
    }

    println!();
    println!("  {} {}", output::label("Configuration"), output::status_ok());
    Ok(())
}
