use std::path::{Path, PathBuf};

use clap::Parser;
use color_eyre::Result;
use serde_json::Value;

use boss_core::{
    install, manifest_error_outcome, uninstall, CommandStatus, ExecutionOutcome, InstallRequest,
    ManifestError, UninstallRequest, BOSS_MANIFEST_FILE,
};

mod cli;

use cli::{BossCli, BossCommand};

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = BossCli::parse();
    init_tracing(cli.trace, cli.verbose);

    let manifest_path = manifest_path(cli.dir.as_deref());
    let outcome = match run_command(&cli, manifest_path) {
        Ok(outcome) => outcome,
        Err(err) => manifest_error_outcome(&err),
    };
    let code = emit_output(&cli, &outcome)?;

    if code == 0 {
        Ok(())
    } else {
        std::process::exit(code);
    }
}

fn run_command(
    cli: &BossCli,
    manifest_path: PathBuf,
) -> Result<ExecutionOutcome, ManifestError> {
    match &cli.command {
        BossCommand::Install(args) => install(&InstallRequest {
            manifest_path,
            packages: args.packages.clone(),
            no_save: args.no_save,
        }),
        BossCommand::Uninstall(args) => uninstall(&UninstallRequest {
            manifest_path,
            packages: args.packages.clone(),
            no_save: args.no_save,
        }),
    }
}

fn manifest_path(dir: Option<&Path>) -> PathBuf {
    match dir {
        Some(dir) => dir.join(BOSS_MANIFEST_FILE),
        None => PathBuf::from(BOSS_MANIFEST_FILE),
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

    let filter = format!("boss={level},boss_core={level},boss_domain={level}");
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}

fn emit_output(cli: &BossCli, outcome: &ExecutionOutcome) -> Result<i32> {
    let code = match outcome.status {
        CommandStatus::Ok => 0,
        CommandStatus::UserError => 1,
        CommandStatus::Failure => 2,
    };

    if cli.json {
        let payload = serde_json::json!({
            "status": outcome.status,
            "message": outcome.message,
            "details": outcome.details,
            "code": code,
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else if !cli.quiet {
        if outcome.status == CommandStatus::Failure {
            eprintln!("{}", outcome.message);
        } else {
            println!("{}", outcome.message);
            if let Some(hint) = hint_from_details(&outcome.details) {
                println!("Hint: {hint}");
            }
        }
    } else if outcome.status == CommandStatus::Failure {
        eprintln!("{}", outcome.message);
    }

    Ok(code)
}

fn hint_from_details(details: &Value) -> Option<&str> {
    details
        .as_object()
        .and_then(|map| map.get("hint"))
        .and_then(Value::as_str)
}
