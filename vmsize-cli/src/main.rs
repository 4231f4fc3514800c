//! Command-line interface for vmsize
//! This binary decodes a VM size identifier and prints a diagram explaining each part.
//!
//! Usage:
//!   vmsize `<VM_SIZE>` [--format `<format>`] [--config `<path>`] [--no-disclaimer]
//!   vmsize --list-formats                                 - List all available formats
//!
//! Running without an identifier, or with too many arguments, prints the usage and exits
//! successfully.

use clap::error::ErrorKind;
use clap::{Arg, ArgAction, ArgMatches, Command};
use tracing::debug;
use tracing_subscriber::EnvFilter;
use vmsize_config::{Loader, VmsizeConfig};
use vmsize_parser::PipelineExecutor;

fn cli() -> Command {
    Command::new("vmsize")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Explain the parts of a VM size identifier such as Standard_D2s_v3")
        .arg(
            Arg::new("vm-size")
                .value_name("VM_SIZE")
                .help("The VM size identifier to explain")
                .index(1),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format (default from config: 'diagram')"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .value_name("PATH")
                .help("TOML file layered over the built-in defaults"),
        )
        .arg(
            Arg::new("no-disclaimer")
                .long("no-disclaimer")
                .help("Do not print the disclaimer and reference links")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available output formats")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log more to stderr (repeat for more detail, RUST_LOG overrides)")
                .action(ArgAction::Count),
        )
}

fn main() {
    let mut command = cli();
    let matches = match command.try_get_matches_from_mut(std::env::args_os()) {
        Ok(matches) => matches,
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit(),
            _ => {
                print_usage(&mut command);
                return;
            }
        },
    };

    init_tracing(matches.get_count("verbose"));

    if matches.get_flag("list-formats") {
        handle_list_formats_command();
        return;
    }

    let Some(vm_size) = matches.get_one::<String>("vm-size") else {
        print_usage(&mut command);
        return;
    };

    let config = load_config(&matches).unwrap_or_else(|e| {
        eprintln!("Error loading configuration: {}", e);
        std::process::exit(1);
    });

    handle_explain_command(vm_size, &config);
}

fn print_usage(command: &mut Command) {
    // Writing usage to a closed stdout is not worth reporting
    let _ = command.print_help();
    println!();
}

fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(matches: &ArgMatches) -> Result<VmsizeConfig, vmsize_config::ConfigError> {
    let mut loader = Loader::new();
    if let Some(path) = matches.get_one::<String>("config") {
        debug!(path, "layering config file");
        loader = loader.with_file(path);
    }
    if let Some(format) = matches.get_one::<String>("format") {
        loader = loader.set_override("output.format", format.as_str())?;
    }
    if matches.get_flag("no-disclaimer") {
        loader = loader.set_override("output.show_disclaimer", false)?;
    }
    loader.build()
}

/// Decode the identifier and print it in the configured format
fn handle_explain_command(vm_size: &str, config: &VmsizeConfig) {
    let executor = PipelineExecutor::new();
    let format = config.output.format.as_str();

    let output = executor
        .execute_and_serialize(vm_size, format)
        .unwrap_or_else(|e| {
            eprintln!("Error: {}", e);
            if matches!(e, vmsize_parser::ExecutionError::Format(_)) {
                eprintln!("\nAvailable formats:");
                for (name, description) in executor.list_formats() {
                    eprintln!("  {} - {}", name, description);
                }
            }
            std::process::exit(1);
        });

    print!("{}", output);

    // The disclaimer only accompanies the human-readable diagram
    if format == "diagram" && config.output.show_disclaimer {
        println!();
        println!("{}", config.output.disclaimer);
        for reference in &config.output.references {
            println!("  {}", reference);
        }
    }
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    let executor = PipelineExecutor::new();
    println!("Available output formats:\n");

    for (name, description) in executor.list_formats() {
        println!("  {}", name);
        println!("    {}", description);
        println!();
    }
}
