mod config;
mod error;
mod generate;
mod palette;
mod render;

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use crate::config::Config;
use crate::generate::Generator;

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn print_help() {
    println!(
        "themegen {} - Generates per-application theme files from JSON color palettes",
        VERSION
    );
    println!();
    println!("USAGE:");
    println!("    themegen [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help              Print help information");
    println!("        --version           Print version information");
    println!("    -t, --theme <NAME>      Generate only the specified theme");
    println!("    -l, --list              List available palette files");
    println!("        --validate          Validate palettes without generating themes");
    println!("    -v, --verbose           Verbose output");
    println!("        --config-dir <DIR>  Use DIR instead of ~/.config/theme-switcher");
}

fn print_version() {
    println!("themegen {}", VERSION);
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();

    let mut theme: Option<String> = None;
    let mut list = false;
    let mut validate = false;
    let mut verbose = false;
    let mut config_dir: Option<PathBuf> = None;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => {
                print_help();
                return ExitCode::SUCCESS;
            }
            "--version" => {
                print_version();
                return ExitCode::SUCCESS;
            }
            "-t" | "--theme" => {
                i += 1;
                match args.get(i) {
                    Some(name) => theme = Some(name.clone()),
                    None => {
                        eprintln!("Error: --theme requires a name argument");
                        return ExitCode::from(2);
                    }
                }
            }
            "-l" | "--list" => list = true,
            "--validate" => validate = true,
            "-v" | "--verbose" => verbose = true,
            "--config-dir" => {
                i += 1;
                match args.get(i) {
                    Some(dir) => config_dir = Some(PathBuf::from(dir)),
                    None => {
                        eprintln!("Error: --config-dir requires a path argument");
                        return ExitCode::from(2);
                    }
                }
            }
            other => {
                eprintln!("Unknown option: {}", other);
                eprintln!("Use --help for usage information");
                return ExitCode::from(2);
            }
        }
        i += 1;
    }

    let Some(root) = config_dir.or_else(Config::default_root) else {
        eprintln!("Error: could not determine config directory");
        return ExitCode::FAILURE;
    };
    let config = Config::new(root);
    if let Err(err) = config.ensure_config_exists() {
        eprintln!(
            "Error: failed to prepare {}: {}",
            config.root().display(),
            err
        );
        return ExitCode::FAILURE;
    }

    if list {
        return match palette::discover_palettes(&config) {
            Ok(names) => {
                println!("Available palettes:");
                for name in &names {
                    println!("  {}", name);
                }
                println!();
                println!("Total: {} palettes", names.len());
                ExitCode::SUCCESS
            }
            Err(err) => {
                eprintln!("Error: {}", err);
                ExitCode::FAILURE
            }
        };
    }

    let themes = match theme {
        Some(name) => vec![name],
        None => match palette::discover_palettes(&config) {
            Ok(names) if names.is_empty() => {
                eprintln!(
                    "Error: no palette files found in {}",
                    config.palettes_dir().display()
                );
                return ExitCode::FAILURE;
            }
            Ok(names) => names,
            Err(err) => {
                eprintln!("Error: {}", err);
                return ExitCode::FAILURE;
            }
        },
    };

    let generator = Generator::new(&config, verbose);

    if validate {
        let summary = generator.validate_all(&themes);
        return if summary.all_succeeded() {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        };
    }

    let summary = generator.generate_all(&themes);
    println!("Generated {}/{} themes", summary.succeeded, themes.len());
    if summary.all_succeeded() {
        ExitCode::SUCCESS
    } else {
        eprintln!("Failed: {} themes", summary.failed);
        ExitCode::FAILURE
    }
}
