//! Category listing command.

use colored::Colorize;

use scrub_engine::REGISTRY;

use crate::output::CliError;

/// Prints the category registry.
pub fn run() -> Result<(), CliError> {
    println!(
        "{:<10} {:<8} {}",
        "CATEGORY".bold(),
        "STRENGTH".bold(),
        "FIELD ALIASES".bold()
    );
    for spec in REGISTRY {
        // Pad before coloring so ANSI codes do not skew the columns.
        let strength = format!("{:<8}", spec.category.strength().as_str());
        let strength = if spec.category.is_strong() {
            strength.red()
        } else {
            strength.yellow()
        };
        println!(
            "{:<10} {} {}",
            spec.category.as_str(),
            strength,
            spec.aliases.join(", ")
        );
    }
    Ok(())
}
