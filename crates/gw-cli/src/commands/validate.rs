use std::path::Path;

use colored::Colorize;

use gw_mechanics::validate::has_errors;
use gw_mechanics::validate_character;

pub fn run(file: &Path, catalog: Option<&Path>) -> Result<(), String> {
    let character = super::load_character(file)?;
    let catalog = super::load_catalog(catalog)?;
    let issues = validate_character(&character, &catalog);

    if issues.is_empty() {
        println!("  {} {}", "✓".green(), file.display());
        return Ok(());
    }

    for issue in &issues {
        if issue.is_error {
            eprintln!("  {} {}: {}", "error".red(), issue.field, issue.message);
        } else {
            eprintln!("  {} {}: {}", "warning".yellow(), issue.field, issue.message);
        }
    }

    let errors = issues.iter().filter(|i| i.is_error).count();
    let warnings = issues.len() - errors;
    if has_errors(&issues) {
        Err(format!(
            "{errors} error{}, {warnings} warning{}",
            if errors == 1 { "" } else { "s" },
            if warnings == 1 { "" } else { "s" },
        ))
    } else {
        println!(
            "  {} with {warnings} warning{}",
            file.display(),
            if warnings == 1 { "" } else { "s" },
        );
        Ok(())
    }
}
