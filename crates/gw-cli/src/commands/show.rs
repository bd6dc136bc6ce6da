use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use gw_core::Character;
use gw_mechanics::{CharacterEngine, DerivedView, EngineContext};

use super::SetupPaths;

pub fn run(file: &Path, paths: &SetupPaths, json: bool) -> Result<(), String> {
    let character = super::load_character(file)?;
    let setup = paths.load()?;
    let ctx = EngineContext::new(&setup.catalog, setup.localizer.as_ref());

    if json {
        let data = character.roll_data(&ctx).to_value();
        let out = serde_json::to_string_pretty(&data)
            .map_err(|e| format!("cannot serialize roll data: {e}"))?;
        println!("{out}");
        return Ok(());
    }

    let view = character.prepare_derived_data(&ctx);
    print_header(&character, &view);
    print_stats(&view);
    print_status(&character, &view);
    print_narrative(&view);

    Ok(())
}

fn print_header(character: &Character, view: &DerivedView) {
    let name = if view.name.is_empty() {
        "(unnamed)"
    } else {
        view.name.as_str()
    };
    if character.class.is_empty() {
        println!("  {}", name.bold());
    } else {
        println!("  {} [{}]", name.bold(), character.class.dimmed());
    }
    println!("  level {}  ({} xp)", view.level, view.experience);
    println!();
}

fn print_stats(view: &DerivedView) {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Stat", "Abbr", "Value", "Marked", "Domain"]);

    for stat in view.ordered_stats() {
        let domain = stat
            .domain
            .map(|d| d.to_string())
            .unwrap_or_else(|| "—".to_string());
        table.add_row(vec![
            stat.label.clone(),
            stat.abbr.clone(),
            format!("{}d", stat.value),
            if stat.marked { "yes" } else { "" }.to_string(),
            domain,
        ]);
    }

    println!("{table}");
    println!();
}

fn print_status(character: &Character, view: &DerivedView) {
    let bloodied = format!("bloodied {}", character.bloodied);
    let rattled = format!("rattled {}", character.rattled);
    println!(
        "  {}  {}",
        if view.is_bloodied {
            bloodied.red().to_string()
        } else {
            bloodied.dimmed().to_string()
        },
        if view.is_rattled {
            rattled.yellow().to_string()
        } else {
            rattled.dimmed().to_string()
        },
    );
    println!(
        "  spark {}/{}  story {}/{}",
        view.spark,
        character.spark.steps.len(),
        view.story,
        character.story.steps.len()
    );

    if !character.conditions.is_empty() {
        println!();
        println!("  {} ({} active)", "Conditions".bold(), view.active_conditions);
        for condition in &character.conditions {
            let line = format!(
                "{} {} [{}]",
                condition.name, condition.pool, condition.severity
            );
            if condition.is_active() {
                println!("    {line}");
            } else {
                println!("    {}", line.dimmed());
            }
        }
    }
    println!();
}

fn print_narrative(view: &DerivedView) {
    println!("  {}", "Traits".bold());
    for entry in &view.traits {
        let verb = if entry.are { "are" } else { "are not" };
        println!("    {verb} {}", blank(&entry.value));
    }

    println!("  {}", "Desires".bold());
    for entry in &view.desires {
        let verb = if entry.are { "are" } else { "are not" };
        println!("    {verb} {}", blank(&entry.value));
    }

    println!("  {}", "Backgrounds".bold());
    for background in &view.backgrounds {
        let wises: Vec<&str> = background.wises.iter().map(String::as_str).map(blank).collect();
        println!("    {}: {}", blank(&background.name), wises.join(", "));
    }

    if !view.bonds.is_empty() {
        println!("  {}", "Bonds".bold());
        for bond in &view.bonds {
            println!("    {}: {}", bond.name, bond.description);
        }
    }
}

fn blank(s: &str) -> &str {
    if s.is_empty() { "—" } else { s }
}
