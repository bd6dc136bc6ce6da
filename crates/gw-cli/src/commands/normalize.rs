use std::fs;
use std::path::Path;

use gw_mechanics::CharacterEngine;

pub fn run(file: &Path, write: bool) -> Result<(), String> {
    let mut character = super::load_character(file)?;
    let changed = character.ensure_defaults();
    let json = character
        .to_json()
        .map_err(|e| format!("cannot serialize character: {e}"))?;

    if !write {
        println!("{json}");
        return Ok(());
    }

    if !changed {
        println!("  {} already normalized", file.display());
        return Ok(());
    }

    fs::write(file, format!("{json}\n"))
        .map_err(|e| format!("cannot write {}: {e}", file.display()))?;
    println!("  normalized {}", file.display());
    Ok(())
}
