//! Gangster headless runner
//!
//! Usage:
//!   gangster simulate [--ticks N] [--seed N] [--slot N] [--fast] [--quiet]
//!   gangster slots
//!   gangster reset <slot>

use chrono::Utc;
use gangster::actions::{check_action, start_action, ActionId};
use gangster::choices::{dismiss_choice, resolve_choice, ChoiceCategory, ChoiceOption};
use gangster::core::config::{load_config, GameConfig};
use gangster::core::constants::TICK_INTERVAL_MS;
use gangster::core::offline::process_offline_progression;
use gangster::core::tick::{game_tick, TickEvent};
use gangster::crew::idle_count;
use gangster::save::SaveSlots;
use gangster::GameState;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io;

// ── CLI Configuration ────────────────────────────────────────────────

struct SimOptions {
    ticks: u64,
    seed: u64,
    slot: Option<u8>,
    fast: bool,
    quiet: bool,
}

impl Default for SimOptions {
    fn default() -> Self {
        Self {
            ticks: 6_000,
            seed: 42,
            slot: None,
            fast: false,
            quiet: false,
        }
    }
}

fn parse_number<T: std::str::FromStr>(flag: &str, value: Option<&String>) -> T {
    match value.and_then(|v| v.parse().ok()) {
        Some(n) => n,
        None => {
            eprintln!("{} requires a number", flag);
            std::process::exit(1);
        }
    }
}

fn parse_sim_options(args: &[String]) -> SimOptions {
    let mut options = SimOptions::default();
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--ticks" => {
                i += 1;
                options.ticks = parse_number("--ticks", args.get(i));
            }
            "--seed" => {
                i += 1;
                options.seed = parse_number("--seed", args.get(i));
            }
            "--slot" => {
                i += 1;
                options.slot = Some(parse_number("--slot", args.get(i)));
            }
            "--fast" => options.fast = true,
            "--quiet" => options.quiet = true,
            other => {
                eprintln!("Unknown argument: {}", other);
                eprintln!("Run 'gangster --help' for usage.");
                std::process::exit(1);
            }
        }
        i += 1;
    }
    options
}

fn print_usage() {
    println!("Gangster - card-driven idle crime management\n");
    println!("Usage: gangster [command]\n");
    println!("Commands:");
    println!("  simulate   Run the game headless with a greedy crew boss");
    println!("     --ticks N   Ticks of 100ms to run (default: 6000)");
    println!("     --seed N    RNG seed (default: 42)");
    println!("     --slot N    Continue from a save slot and save back to it");
    println!("     --fast      Short income and heat cycles");
    println!("     --quiet     Only print the summary");
    println!("  slots      List save slots");
    println!("  reset N    Delete save slot N");
    println!("  --version  Show version information");
    println!("  --help     Show this help message");
}

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().collect();

    match args.get(1).map(String::as_str) {
        Some("simulate") => run_simulation(parse_sim_options(&args[2..])),
        Some("slots") => list_slots(),
        Some("reset") => {
            let slot = parse_number("reset", args.get(2));
            SaveSlots::new()?.delete_slot(slot)?;
            println!("Slot {} cleared.", slot);
            Ok(())
        }
        Some("--version") | Some("-v") => {
            println!("gangster {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Some("--help") | Some("-h") | None => {
            print_usage();
            Ok(())
        }
        Some(other) => {
            eprintln!("Unknown command: {}", other);
            eprintln!("Run 'gangster --help' for usage.");
            std::process::exit(1);
        }
    }
}

fn list_slots() -> io::Result<()> {
    let slots = SaveSlots::new()?;
    let listed = slots.list_slots();
    if listed.is_empty() {
        println!("No saves in {}", slots.dir().display());
        return Ok(());
    }
    for info in listed {
        if info.is_corrupted {
            println!("Slot {}: [CORRUPTED]", info.slot);
            continue;
        }
        println!(
            "Slot {}: ${}  heat {}  crew {}  businesses {}  played {}s",
            info.slot,
            info.money,
            info.heat,
            info.crew,
            info.businesses,
            info.play_time_ms / 1000
        );
    }
    Ok(())
}

// ── Simulation ───────────────────────────────────────────────────────

fn run_simulation(options: SimOptions) -> io::Result<()> {
    let config = if options.fast {
        GameConfig::fast()
    } else {
        load_config()
    };
    let mut rng = StdRng::seed_from_u64(options.seed);

    let slots = match options.slot {
        Some(_) => Some(SaveSlots::new()?),
        None => None,
    };
    let mut state = match (&slots, options.slot) {
        (Some(slots), Some(slot)) if slots.slot_exists(slot) => {
            let mut state = slots.load(slot)?;
            let report = process_offline_progression(&mut state, &config, &mut rng);
            if report.simulated_seconds > 0 && !options.quiet {
                println!(
                    "While you were away ({}s): ${} -> ${}, {} jobs done, {} raids",
                    report.simulated_seconds,
                    report.money_before,
                    report.money_after,
                    report.actions_completed,
                    report.raids
                );
            }
            state
        }
        _ => GameState::with_config(Utc::now().timestamp(), &config),
    };

    for _ in 0..options.ticks {
        boss_decisions(&mut state, &config, options.quiet);
        let result = game_tick(&mut state, &config, &mut rng);
        if !options.quiet {
            print_events(&state, &result.events);
        }
    }

    print_summary(&state, options.ticks);

    if let (Some(slots), Some(slot)) = (&slots, options.slot) {
        state.last_save_time = Utc::now().timestamp();
        slots.save(slot, &state)?;
        println!("Saved to slot {}.", slot);
    }
    Ok(())
}

fn print_events(state: &GameState, events: &[TickEvent]) {
    let clock = state.play_time_ms / 1000;
    for event in events {
        if let Some(message) = event.message() {
            println!("[{:>5}s] {}", clock, message);
        }
    }
}

fn print_summary(state: &GameState, ticks: u64) {
    let totals = &state.totals;
    println!(
        "After {}s: ${} (earned {}, spent {}), heat {}, crew {}, businesses {}, \
         {} jobs, {} cards drawn, {} raids",
        ticks * TICK_INTERVAL_MS / 1000,
        state.money,
        totals.money_earned,
        totals.money_spent,
        state.heat,
        state.gangsters.len(),
        state.businesses.len(),
        totals.actions_completed,
        totals.cards_drawn,
        totals.raids
    );
}

// ── Greedy crew boss ─────────────────────────────────────────────────

/// Answer open prompts and put every idle gangster to work
fn boss_decisions(state: &mut GameState, config: &GameConfig, quiet: bool) {
    let mut events = Vec::new();
    answer_choices(state, config, &mut events);

    if idle_count(state) > 0 {
        let idle: Vec<u64> = state
            .gangsters
            .iter()
            .filter(|g| !g.is_busy())
            .map(|g| g.id)
            .collect();
        for actor in idle {
            if let Some((action, target)) = pick_job(state, config, actor) {
                if let Err(e) = start_action(state, config, actor, action, target, &mut events) {
                    tracing::debug!("Could not start {:?}: {}", action, e);
                }
            }
        }
    }

    if !quiet {
        print_events(state, &events);
    }
}

fn answer_choices(state: &mut GameState, config: &GameConfig, events: &mut Vec<TickEvent>) {
    // Build the priciest business we can afford; wait for cash otherwise
    let business_pick = state
        .choices
        .active(ChoiceCategory::BusinessType)
        .and_then(|choice| {
            choice
                .options
                .iter()
                .enumerate()
                .filter_map(|(i, option)| match option {
                    ChoiceOption::Business(kind) if kind.build_cost() <= state.money => {
                        Some((i, kind.build_cost()))
                    }
                    _ => None,
                })
                .max_by_key(|(_, cost)| *cost)
                .map(|(i, _)| i)
        });
    if let Some(index) = business_pick {
        if let Err(e) = resolve_choice(state, config, ChoiceCategory::BusinessType, index, events) {
            tracing::debug!("Dropping business prompt: {}", e);
            let _ = dismiss_choice(state, ChoiceCategory::BusinessType, events);
        }
    }

    let recruit_pick = state.choices.active(ChoiceCategory::Recruit).map(|choice| {
        choice
            .options
            .iter()
            .enumerate()
            .max_by_key(|(_, option)| match option {
                ChoiceOption::Recruit(p) => p.muscle + p.brains + p.charm,
                _ => 0,
            })
            .map(|(i, _)| i)
    });
    match recruit_pick {
        Some(Some(index)) => {
            if resolve_choice(state, config, ChoiceCategory::Recruit, index, events).is_err() {
                let _ = dismiss_choice(state, ChoiceCategory::Recruit, events);
            }
        }
        Some(None) => {
            let _ = dismiss_choice(state, ChoiceCategory::Recruit, events);
        }
        None => {}
    }
}

/// First job in priority order that the actor can start right now
fn pick_job(state: &GameState, config: &GameConfig, actor: u64) -> Option<(ActionId, u64)> {
    let hot = state.heat >= config.raid_heat_threshold.saturating_sub(15);
    let priorities: &[ActionId] = if hot {
        &[
            ActionId::Bribe,
            ActionId::LayLow,
            ActionId::Collect,
            ActionId::Explore,
        ]
    } else {
        &[
            ActionId::Collect,
            ActionId::BuildBusiness,
            ActionId::Explore,
            ActionId::Recruit,
            ActionId::Extort,
        ]
    };

    priorities.iter().find_map(|action| {
        state
            .table
            .iter()
            .find(|card| check_action(state, config, actor, *action, card.uid).is_ok())
            .map(|card| (*action, card.uid))
    })
}
