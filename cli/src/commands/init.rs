//! Init command - writes a starter `graft.toml`

use std::path::Path;

use colored::Colorize;

use crate::error::CliError;
use crate::output;

const STARTER_CONFIG: &str = r#"# Graft configuration
# Accessors are written to `output`; include! the file next to your structs.
output = "src/generated.rs"
crate_path = "graft"

[[model]]
type = "User"
name = "users"

[[model.field]]
ident = "id"
type = "i64"

[[model.field]]
ident = "name"
type = "String"

[[model.field]]
ident = "settings"
type = "Option<serde_json::Value>"
json = true
"#;

pub fn run(path: &Path) -> Result<(), CliError> {
    if path.exists() {
        return Err(CliError::Other(format!(
            "{} already exists. Delete it first to reinitialize.",
            path.display()
        )));
    }

    std::fs::write(path, STARTER_CONFIG).map_err(|e| CliError::IoError(e.to_string()))?;

    println!("{}", output::success(&format!("Created {}", path.display())));
    println!();
    println!("Next steps:");
    println!("  1. Describe your models under [[model]] in {}", path.display());
    println!("  2. Run {} to write the accessors", "graft generate".bright_cyan());
    Ok(())
}
