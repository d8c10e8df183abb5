//! fare-settlement CLI
//!
//! Replay a recorded calculation round and print who owes what.
//!
//! # Usage
//!
//! ```bash
//! # Settle a session script
//! fare-settlement settle --input ride.json
//!
//! # Output as JSON
//! fare-settlement settle --input ride.json --format json
//!
//! # Generate random session scripts for testing
//! fare-settlement generate --rides 5
//! ```

use fare_settlement::settlement::instruction::HandoffInstruction;
use fare_settlement::settlement::script::SessionScript;
use fare_settlement::simulation::random_ride::{generate_rides, RideConfig};
use log::debug;
use std::fs;
use std::process;

fn print_usage() {
    eprintln!(
        r#"fare-settlement — shared ride fare splitting

USAGE:
    fare-settlement <COMMAND> [OPTIONS]

COMMANDS:
    settle      Replay a session script and print the settlement
    generate    Generate random session scripts (for testing)
    help        Show this message

OPTIONS (settle):
    --input <FILE>      Path to JSON session script
    --format <FORMAT>   Output format: text (default) or json

OPTIONS (generate):
    --rides <N>         Number of rides (default: 1)
    --edits <N>         Edits per ride (default: 20)
    --output <FILE>     Write to file instead of stdout

ENVIRONMENT:
    RUST_LOG            Log filter, e.g. debug (default: warn)

EXAMPLES:
    fare-settlement settle --input ride.json
    fare-settlement settle --input ride.json --format json
    fare-settlement generate --rides 10 --output rides.json"#
    );
}

/// A script file holds one ride or a list of rides.
#[derive(serde::Deserialize)]
#[serde(untagged)]
enum ScriptFile {
    One(SessionScript),
    Many(Vec<SessionScript>),
}

impl ScriptFile {
    fn into_scripts(self) -> Vec<SessionScript> {
        match self {
            ScriptFile::One(script) => vec![script],
            ScriptFile::Many(scripts) => scripts,
        }
    }
}

fn load_scripts(path: &str) -> Vec<SessionScript> {
    let content = fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file '{}': {}", path, e);
        process::exit(1);
    });

    let file: ScriptFile = serde_json::from_str(&content).unwrap_or_else(|e| {
        eprintln!("Error parsing JSON: {}", e);
        eprintln!("Expected format:");
        eprintln!(
            r#"{{
  "fare": "10",
  "row": "not-last",
  "seats": 3,
  "edits": [
    {{ "op": "select_seat", "index": 0 }},
    {{ "op": "set_paid", "value": "20" }},
    {{ "op": "set_taken", "value": "10" }}
  ]
}}"#
        );
        process::exit(1);
    });
    file.into_scripts()
}

fn require_value(args: &[String], i: usize, flag: &str, hint: &str) -> String {
    args.get(i).cloned().unwrap_or_else(|| {
        eprintln!("Error: {} requires {}", flag, hint);
        process::exit(1);
    })
}

fn cmd_settle(args: &[String]) {
    let mut input_path = None;
    let mut format = "text".to_string();
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--input" => {
                i += 1;
                input_path = Some(require_value(args, i, "--input", "a file path"));
            }
            "--format" => {
                i += 1;
                format = require_value(args, i, "--format", "'text' or 'json'");
            }
            _ => {
                eprintln!("Error: Unknown option: {}", args[i]);
                process::exit(1);
            }
        }
        i += 1;
    }

    let path = input_path.unwrap_or_else(|| {
        eprintln!("Error: --input <FILE> is required");
        process::exit(1);
    });

    let scripts = load_scripts(&path);
    debug!("loaded {} rides from '{}'", scripts.len(), path);

    let mut snapshots = Vec::with_capacity(scripts.len());
    for (n, script) in scripts.iter().enumerate() {
        let settlement = script.run().unwrap_or_else(|e| {
            eprintln!("Error: Invalid ride #{}: {}", n + 1, e);
            process::exit(1);
        });
        snapshots.push(settlement.snapshot());
    }

    if format == "json" {
        let json = if snapshots.len() == 1 {
            serde_json::to_string_pretty(&snapshots[0])
        } else {
            serde_json::to_string_pretty(&snapshots)
        }
        .unwrap_or_else(|e| {
            eprintln!("Error serializing settlement: {}", e);
            process::exit(1);
        });
        println!("{}", json);
    } else {
        for snapshot in &snapshots {
            println!("{}", snapshot);
            println!("{}\n", HandoffInstruction::from_aggregate(&snapshot.aggregate));
        }
    }
}

fn cmd_generate(args: &[String]) {
    let mut rides = 1usize;
    let mut config = RideConfig::default();
    let mut output_path: Option<String> = None;
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--rides" => {
                i += 1;
                rides = args.get(i).and_then(|s| s.parse().ok()).unwrap_or_else(|| {
                    eprintln!("Error: --rides requires a number");
                    process::exit(1);
                });
            }
            "--edits" => {
                i += 1;
                config.edits_per_ride =
                    args.get(i).and_then(|s| s.parse().ok()).unwrap_or_else(|| {
                        eprintln!("Error: --edits requires a number");
                        process::exit(1);
                    });
            }
            "--output" => {
                i += 1;
                output_path = Some(require_value(args, i, "--output", "a file path"));
            }
            _ => {
                eprintln!("Error: Unknown option: {}", args[i]);
                process::exit(1);
            }
        }
        i += 1;
    }

    let scripts = generate_rides(&config, rides);
    let json = if scripts.len() == 1 {
        serde_json::to_string_pretty(&scripts[0])
    } else {
        serde_json::to_string_pretty(&scripts)
    }
    .unwrap_or_else(|e| {
        eprintln!("Error serializing rides: {}", e);
        process::exit(1);
    });

    if let Some(path) = output_path {
        fs::write(&path, &json).unwrap_or_else(|e| {
            eprintln!("Error writing to '{}': {}", path, e);
            process::exit(1);
        });
        eprintln!("Generated {} rides → {}", scripts.len(), path);
    } else {
        println!("{}", json);
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    let command = args[1].as_str();
    let rest = &args[2..];

    match command {
        "settle" => cmd_settle(rest),
        "generate" => cmd_generate(rest),
        "help" | "--help" | "-h" => print_usage(),
        _ => {
            eprintln!("Error: Unknown command: {}", command);
            print_usage();
            process::exit(1);
        }
    }
}
