#![deny(clippy::all, warnings)]

use atty::Stream;
use clap::{ArgAction, Parser, Subcommand};
use color_eyre::{eyre::eyre, Result};
use dpx_core::{ExecutionOutcome, Operation, SystemRunner};
use serde_json::Value;

mod style;

use style::Style;

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = DpxCli::parse();
    init_tracing(cli.trace, cli.verbose);

    let operation = operation_for(&cli.command);
    let outcome = dpx_core::execute(operation, &SystemRunner).map_err(|err| eyre!("{err:?}"))?;
    let code = emit_output(&cli, operation, &outcome);

    if code == 0 {
        Ok(())
    } else {
        std::process::exit(code);
    }
}

fn init_tracing(trace: bool, verbose: u8) {
    let level = if trace {
        "trace"
    } else {
        match verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter = format!("dpx={level},dpx_core={level},dpx_cli={level}");
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}

fn emit_output(cli: &DpxCli, operation: Operation, outcome: &ExecutionOutcome) -> i32 {
    let code = dpx_core::process_exit_code(outcome);
    let style = Style::new(cli.no_color, atty::is(Stream::Stdout));

    if cli.json {
        let payload = dpx_core::to_json_response(operation.name(), outcome);
        println!("{payload:#}");
    } else if !cli.quiet {
        let message = dpx_core::format_status_message(operation.name(), &outcome.message);
        println!("{}", style.status(&outcome.status, &message));
        if let Some(hint) = hint_from_details(&outcome.details) {
            let hint_line = format!("Hint: {hint}");
            println!("{}", style.info(&hint_line));
        }
    }

    code
}

fn hint_from_details(details: &Value) -> Option<&str> {
    details
        .as_object()
        .and_then(|map| map.get("hint"))
        .and_then(Value::as_str)
}

fn operation_for(command: &OperationCli) -> Operation {
    match command {
        OperationCli::Build => Operation::Build,
        OperationCli::Publish => Operation::Publish,
        OperationCli::Install => Operation::Install,
        OperationCli::Test => Operation::Test,
        OperationCli::Clean => Operation::Clean,
    }
}

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Dual-interpreter build and test orchestrator for Python packages",
    long_about = "Drives setup.py and pytest across the python2 and python3 interpreters found on PATH.",
    after_help = "Examples:\n  dpx build\n  dpx test\n  dpx --json install\n"
)]
struct DpxCli {
    #[arg(
        short,
        long,
        help = "Suppress human output (child process output still streams through)"
    )]
    quiet: bool,
    #[arg(short, long, action = ArgAction::Count, help = "Increase logging (-vv reaches trace)")]
    verbose: u8,
    #[arg(long, help = "Force trace logging regardless of -v/-q")]
    trace: bool,
    #[arg(long, help = "Emit {status,message,details} JSON envelopes")]
    json: bool,
    #[arg(long, help = "Disable colored human output")]
    no_color: bool,
    #[command(subcommand)]
    command: OperationCli,
}

#[derive(Subcommand, Debug)]
enum OperationCli {
    #[command(about = "Build a source distribution with the primary interpreter")]
    Build,
    #[command(about = "Register and upload the package with the primary interpreter")]
    Publish,
    #[command(about = "Install the package under both interpreters (best effort)")]
    Install,
    #[command(about = "Run the pytest suite under both interpreters (best effort)")]
    Test,
    #[command(about = "Run setup.py clean, then sweep bytecode caches")]
    Clean,
}
