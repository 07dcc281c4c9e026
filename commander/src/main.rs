//! # Commander Host Binary
//!
//! Runs the program browser against a host directory.

use std::env;
use std::fs;
use std::path::PathBuf;
use std::process;

use commander::host::{HostDisplay, HostExecutor, HostStorage, LineInput, StderrLog};
use commander::{Board, Commander};
use hal::InputDevice;
use services_logger::LevelFilter;
use services_settings::{persistence, CommanderSettings};
use sim_hal::ScriptedInput;

/// Host binary configuration
#[derive(Debug, Clone, Default)]
struct HostConfig {
    /// Directory standing in for the medium
    root: PathBuf,
    /// Settings file
    config: Option<PathBuf>,
    /// Input script text
    script: Option<String>,
    /// Maximum steps to run (0 = unlimited)
    max_steps: usize,
}

fn main() {
    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("commander");

    let config = parse_args(&args).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        print_usage(program);
        process::exit(1);
    });

    let settings = load_settings(&config).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        process::exit(1);
    });

    let result = match &config.script {
        Some(text) => {
            let input = ScriptedInput::from_text(text).unwrap_or_else(|e| {
                eprintln!("Script error: {}", e);
                process::exit(1);
            });
            run(&config, &settings, input)
        }
        None => run(&config, &settings, LineInput::stdin()),
    };

    if let Err(e) = result {
        eprintln!("Commander error: {}", e);
        process::exit(1);
    }
}

fn run<I: InputDevice>(
    config: &HostConfig,
    settings: &CommanderSettings,
    input: I,
) -> Result<(), commander::CommanderError> {
    let board = Board::new(
        HostStorage::new(&config.root),
        HostDisplay::stdout(),
        input,
        HostExecutor::new(&config.root),
    );
    let log = LevelFilter::new(StderrLog, settings.log_level);

    let mut commander = Commander::new(settings, board, log)?;
    commander.start()?;
    commander.run(config.max_steps);
    Ok(())
}

fn load_settings(config: &HostConfig) -> Result<CommanderSettings, String> {
    match &config.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .map_err(|e| format!("Failed to read config file: {}", e))?;
            persistence::from_json(&text).map_err(|e| e.to_string())
        }
        None => Ok(CommanderSettings::default()),
    }
}

fn parse_args(args: &[String]) -> Result<HostConfig, String> {
    let mut config = HostConfig {
        root: PathBuf::from("."),
        ..Default::default()
    };
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "--root" | "-r" => {
                i += 1;
                if i >= args.len() {
                    return Err("Missing value for --root".to_string());
                }
                config.root = PathBuf::from(&args[i]);
            }
            "--config" | "-c" => {
                i += 1;
                if i >= args.len() {
                    return Err("Missing value for --config".to_string());
                }
                config.config = Some(PathBuf::from(&args[i]));
            }
            "--script" | "-s" => {
                i += 1;
                if i >= args.len() {
                    return Err("Missing value for --script".to_string());
                }
                let script_text = fs::read_to_string(&args[i])
                    .map_err(|e| format!("Failed to read script file: {}", e))?;
                config.script = Some(script_text);
            }
            "--max-steps" => {
                i += 1;
                if i >= args.len() {
                    return Err("Missing value for --max-steps".to_string());
                }
                config.max_steps = args[i]
                    .parse()
                    .map_err(|_| format!("Invalid max-steps value: {}", args[i]))?;
            }
            "--help" | "-h" => {
                print_usage(&args[0]);
                process::exit(0);
            }
            other => {
                return Err(format!("Unknown option: {}", other));
            }
        }
        i += 1;
    }

    Ok(config)
}

fn print_usage(program: &str) {
    eprintln!("Usage: {} [OPTIONS]", program);
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -r, --root <DIR>         Directory used as the medium (default: .)");
    eprintln!("  -c, --config <FILE>      Settings file (JSON)");
    eprintln!("  -s, --script <FILE>      Input script instead of stdin");
    eprintln!("  --max-steps <N>          Maximum button events to handle (0 = unlimited)");
    eprintln!("  -h, --help               Show this help message");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  {} --root /media/sdcard", program);
    eprintln!("  {} --config demos/commander.json --script demos/browse.cmdr", program);
}
