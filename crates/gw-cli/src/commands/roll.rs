use std::io::Write;
use std::path::Path;

use async_trait::async_trait;
use colored::Colorize;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info};

use gw_mechanics::roll::aggregate_thorns;
use gw_mechanics::{
    Assist, CharacterEngine, DiceTag, EngineContext, HighestDie, InteractionCollector,
    InteractionResponse, MechError, Outcome, Reading, RollOptions, RollPrompt, RollRequest,
    RollResult,
};

use super::SetupPaths;

/// Largest value accepted for an assist, the difficulty or the condition count.
pub const MAX_DICE_INPUT: u32 = 12;

/// Parse an assist given as `NAME=DICE`.
pub fn parse_assist(s: &str) -> Result<Assist, String> {
    let (name, dice) = s
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=DICE, got '{s}'"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("assist '{s}' has no name"));
    }
    let dice = dice
        .trim()
        .parse::<u32>()
        .map_err(|_| format!("assist '{s}' needs a whole number of dice"))?;
    if dice > MAX_DICE_INPUT {
        return Err(format!("assist '{s}' adds more than {MAX_DICE_INPUT} dice"));
    }
    Ok(Assist::new(name, dice))
}

/// Changes the player makes to the prompt's defaults.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub check: Vec<String>,
    pub uncheck: Vec<String>,
    pub conditions: Option<u32>,
}

impl Overrides {
    fn apply(&self, prompt: &RollPrompt) -> InteractionResponse {
        let mut response = prompt.accept();
        for label in &self.check {
            response.set_check(label, true);
        }
        for label in &self.uncheck {
            response.set_check(label, false);
        }
        if let Some(conditions) = self.conditions {
            response.active_conditions = conditions;
        }
        response
    }
}

/// Answers the prompt from command-line flags alone.
struct FlagCollector(Overrides);

#[async_trait]
impl InteractionCollector for FlagCollector {
    async fn collect(&self, prompt: &RollPrompt) -> Option<InteractionResponse> {
        Some(self.0.apply(prompt))
    }
}

/// Shows the prompt and asks for confirmation on stdin.
struct StdinCollector(Overrides);

#[async_trait]
impl InteractionCollector for StdinCollector {
    async fn collect(&self, prompt: &RollPrompt) -> Option<InteractionResponse> {
        let response = self.0.apply(prompt);
        print_prompt(prompt, &response);

        let mut line = String::new();
        let mut stdin = BufReader::new(tokio::io::stdin());
        match stdin.read_line(&mut line).await {
            Ok(0) | Err(_) => return None,
            Ok(_) => {}
        }
        match line.trim().to_ascii_lowercase().as_str() {
            "" | "y" | "yes" => Some(response),
            _ => None,
        }
    }
}

fn print_prompt(prompt: &RollPrompt, response: &InteractionResponse) {
    println!("  {} ({})", prompt.stat_label.bold(), prompt.stat);
    if prompt.mark_ignored {
        println!("  {}", "mark ignored: the wound already costs a thorn".dimmed());
    }
    let boxes: Vec<String> = response
        .checklist
        .iter()
        .map(|c| format!("[{}] {}", if c.checked { "x" } else { " " }, c.label))
        .collect();
    println!("  thorns:     {}", boxes.join("  "));
    println!(
        "  difficulty: {}  conditions: {}",
        response.difficulty, response.active_conditions
    );
    for assist in &response.assists {
        println!("  assist:     {} +{}d", assist.name, assist.dice);
    }

    let thorns = aggregate_thorns(
        &response.checklist,
        response.difficulty,
        response.active_conditions,
    );
    print!("  roll {}d6 against {thorns}d8? [Y/n] ", prompt.dice_default);
    let _ = std::io::stdout().flush();
}

/// Everything the `roll` command takes besides the files.
#[derive(Debug)]
pub struct RollArgs {
    pub stat: String,
    pub difficulty: u32,
    pub assists: Vec<Assist>,
    pub overrides: Overrides,
    pub interactive: bool,
    pub seed: Option<u64>,
    pub json: bool,
}

pub async fn run(file: &Path, paths: &SetupPaths, args: RollArgs) -> Result<(), String> {
    let character = super::load_character(file)?;
    let setup = paths.load()?;
    let ctx = EngineContext::new(&setup.catalog, setup.localizer.as_ref());

    let options = RollOptions {
        difficulty: args.difficulty,
        assists: args.assists,
    };
    let collector: Box<dyn InteractionCollector> = if args.interactive {
        Box::new(StdinCollector(args.overrides))
    } else {
        Box::new(FlagCollector(args.overrides))
    };

    let request = match character
        .roll(&args.stat, &options, &ctx, collector.as_ref())
        .await
    {
        Ok(request) => request,
        Err(MechError::Cancelled) => {
            println!("  roll cancelled");
            return Ok(());
        }
        Err(MechError::InvalidStat(key)) => {
            info!(stat = %key, "no such stat, nothing rolled");
            return Ok(());
        }
    };

    if args.json {
        let out = serde_json::to_string_pretty(&request)
            .map_err(|e| format!("cannot serialize roll: {e}"))?;
        println!("{out}");
        return Ok(());
    }

    let (roll, reading) = evaluate(&request, args.seed);
    print_roll(&request, &roll, &reading);
    Ok(())
}

/// Roll the request's pools and read the result.
fn evaluate(request: &RollRequest, seed: Option<u64>) -> (RollResult, Reading) {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let roll = request.dice_pool().roll(&mut rng);
    debug!(seed = ?seed, roll = %roll, "evaluated roll");
    let reading = HighestDie::default().read(&roll);
    (roll, reading)
}

fn print_roll(request: &RollRequest, roll: &RollResult, reading: &Reading) {
    let context = &request.context;
    println!();
    println!(
        "  {} ({})  {}",
        context.stat_label.bold(),
        context.stat,
        request.resolved_formula().dimmed()
    );
    println!("  stat:   {}", join(&roll.values(DiceTag::Stat)));
    println!("  thorns: {}", join(&roll.values(DiceTag::Thorn)));
    if !context.thorn_sources.is_empty() {
        println!("  {}", format!("from {}", context.thorn_sources.join(", ")).dimmed());
    }

    let cuts = match reading.cuts {
        0 => String::new(),
        1 => ", 1 cut".to_string(),
        n => format!(", {n} cuts"),
    };
    println!(
        "  {} (highest {}{cuts})",
        colorize_outcome(reading.outcome),
        reading.highest
    );
}

fn join(values: &[u32]) -> String {
    if values.is_empty() {
        return "—".to_string();
    }
    let parts: Vec<String> = values.iter().map(u32::to_string).collect();
    parts.join(" ")
}

fn colorize_outcome(outcome: Outcome) -> String {
    let label = outcome.to_string();
    match outcome {
        Outcome::Critical => label.green().bold().to_string(),
        Outcome::Perfect => label.green().to_string(),
        Outcome::Messy => label.yellow().to_string(),
        Outcome::Grim => label.red().to_string(),
        Outcome::Disaster => label.red().bold().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gw_core::{Character, Stat, StatCatalog, StatusPool};
    use gw_mechanics::roll::THORN_MARKED;

    #[test]
    fn assist_parses_name_and_dice() {
        assert_eq!(parse_assist("Ana=2").unwrap(), Assist::new("Ana", 2));
        assert_eq!(parse_assist(" Bo = 1 ").unwrap(), Assist::new("Bo", 1));
        assert!(parse_assist("Ana").is_err());
        assert!(parse_assist("=2").is_err());
        assert!(parse_assist("Ana=-1").is_err());
        assert_eq!(
            parse_assist("Ana=12").unwrap(),
            Assist::new("Ana", MAX_DICE_INPUT)
        );
        assert!(parse_assist("Ana=13").is_err());
        assert!(parse_assist("Ana=4294967295").is_err());
    }

    #[tokio::test]
    async fn flags_override_the_checklist() {
        let catalog = StatCatalog::grimwild();
        let ctx = EngineContext::unlocalized(&catalog);
        let mut c = Character::new("Vesna", &catalog);
        c.stats.insert(
            "bra".to_string(),
            Stat {
                value: 2,
                marked: true,
            },
        );
        let collector = FlagCollector(Overrides {
            check: vec!["cursed ground".to_string()],
            uncheck: vec![THORN_MARKED.to_string()],
            conditions: Some(2),
        });
        let request = c
            .roll("bra", &RollOptions::default(), &ctx, &collector)
            .await
            .unwrap();
        assert_eq!(request.context.thorn_sources, vec!["cursed ground"]);
        assert_eq!(request.context.thorns, 3);
    }

    #[test]
    fn seeded_evaluation_is_reproducible() {
        let catalog = StatCatalog::grimwild();
        let ctx = EngineContext::unlocalized(&catalog);
        let mut c = Character::new("Vesna", &catalog);
        c.bloodied = StatusPool::new(2);
        let rt = tokio::runtime::Builder::new_current_thread()
            .build()
            .unwrap();
        let request = rt
            .block_on(c.roll(
                "bra",
                &RollOptions::default(),
                &ctx,
                &FlagCollector(Overrides::default()),
            ))
            .unwrap();

        let (first, a) = evaluate(&request, Some(7));
        let (second, b) = evaluate(&request, Some(7));
        assert_eq!(first, second);
        assert_eq!(a, b);
        assert_eq!(first.values(DiceTag::Stat).len(), 1);
        assert_eq!(first.values(DiceTag::Thorn).len(), 1);
    }
}
