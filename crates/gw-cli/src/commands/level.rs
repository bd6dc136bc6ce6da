use colored::Colorize;

use gw_mechanics::level_of;
use gw_mechanics::progression::{thresholds, xp_pip_layout};

pub fn run(xp: u32, pips: bool) -> Result<(), String> {
    let level = level_of(xp);
    println!("  level {level}");

    if let Some(next) = thresholds().find(|&t| t > u64::from(xp)) {
        println!("  {} xp to level {}", next - u64::from(xp), level + 1);
    }

    if pips {
        println!();
        for (row, values) in xp_pip_layout().iter().enumerate() {
            let cells: Vec<String> = values
                .iter()
                .map(|&v| if v <= xp { "●".to_string() } else { "○".to_string() })
                .collect();
            println!("  {} {}", format!("lvl {}", row + 2).dimmed(), cells.join(" "));
        }
    }

    Ok(())
}
