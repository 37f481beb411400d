use ballot_finder::{cli, config, context, dispatcher, error, finder, locator, logging, selector};
use clap::Parser;
use cli::{Cli, Commands};
use config::Config;
use context::{AppContext, AppPaths};
use dispatcher::{system_dispatcher, DispatchAction};
use error::{BallotFinderError, Result};
use finder::{FindOutcome, FindRequest};
use indexmap::IndexMap;
use log::{debug, error, info};
use std::path::Path;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            error!("Fatal error: {}", e);
            eprintln!("✗ {}", e);
            ExitCode::from(2)
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let config = Config::load(cli.config.as_deref())?;
    let paths = AppPaths::discover(cli.config.as_deref());
    let ctx = AppContext::new(config, paths);

    let log_path = ctx.log_path();
    if let Err(e) = logging::init_logging(&log_path, cli.verbose) {
        eprintln!("{}", log_file_warning(&log_path, &e));
    }
    info!("Config loaded.");

    match cli.command {
        Commands::Find { precinct, language, ballot_type, print } => {
            let precinct_input = match precinct {
                Some(p) => p,
                None => selector::prompt_precinct(ctx.load_state().last_precinct())?,
            };
            let language = match language {
                Some(l) => l,
                None => selector::select_name("Language", ctx.config.languages.keys())?,
            };
            let ballot_type = match ballot_type {
                Some(b) => b,
                None => selector::select_name("Ballot Type", ctx.config.ballot_types.keys())?,
            };

            let request = FindRequest {
                precinct_input,
                language,
                ballot_type,
                action: cli::find_action(print),
            };

            let dispatcher = system_dispatcher();
            debug!("Dispatcher platform: {:?}", dispatcher.platform());
            return match finder::find_ballot(&ctx, &request, &selector::PromptChooser, dispatcher.as_ref()) {
                Ok(outcome) => Ok(report(&outcome)),
                Err(e @ BallotFinderError::PrintHandlerMissing(_)) => {
                    eprintln!("✗ Print Error: {}", e);
                    Ok(ExitCode::from(1))
                }
                Err(e) => Err(e),
            };
        }

        Commands::TestPaths => {
            let languages: Vec<&str> = ctx.config.languages.values().map(String::as_str).collect();

            info!("[Test Paths]");
            for tier in ctx.tiers() {
                let summary = locator::summarize_root(
                    &tier.root,
                    languages.iter().copied(),
                    &ctx.config.document_extension,
                );
                info!("{} -> {}", tier.name, summary);
                println!("{:<8}-> {}", tier.name, summary);
            }
        }

        Commands::OpenLog => {
            info!("Opening log: {}", log_path.display());
            let dispatcher = system_dispatcher();
            debug!("Dispatcher platform: {:?}", dispatcher.platform());
            if let Err(e) = dispatcher.reveal(&log_path) {
                error!("Failed to open log: {}", e);
                eprintln!("✗ Failed to open log: {}", e);
                return Ok(ExitCode::from(1));
            }
        }

        Commands::Last => match ctx.load_state().last_precinct() {
            Some(last) => println!("{}", last),
            None => println!("(none)"),
        },

        Commands::Config { show } => {
            if show {
                print!("{}", settings_report(&ctx, &log_path));
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn log_file_warning(log_path: &Path, err: &BallotFinderError) -> String {
    format!("⚠ Could not create log file ({}): {}", log_path.display(), err)
}

fn settings_report(ctx: &AppContext, log_path: &Path) -> String {
    let c = &ctx.config;
    let mut lines = vec![
        "Settings:".to_string(),
        format!("  primary_dir: {}", c.primary_dir),
        format!("  backup_dir: {}", c.backup_dir),
    ];
    for tier in ctx.tiers() {
        lines.push(format!("    {} -> {}", tier.name, tier.root.display()));
    }
    lines.push(format!("  languages: {}", join_pairs(&c.languages)));
    lines.push(format!("  ballot_types: {}", join_pairs(&c.ballot_types)));
    lines.push(format!("  case_insensitive: {}", c.case_insensitive));
    lines.push(format!("  document_extension: {}", c.document_extension));
    lines.push(format!("  log: {}", log_path.display()));
    lines.push(format!("  state: {}", ctx.paths.state_file().display()));
    lines.join("\n") + "\n"
}

fn report(outcome: &FindOutcome) -> ExitCode {
    match outcome {
        FindOutcome::InvalidPrecinct(hint) => {
            eprintln!("✗ Invalid Input: {}", hint);
            ExitCode::from(1)
        }
        FindOutcome::NotFound { precinct, ballot_type, language } => {
            eprintln!("⚠ No PDF found for {} ({}, {}).", precinct, ballot_type, language);
            ExitCode::from(1)
        }
        FindOutcome::Cancelled => {
            println!("User cancelled.");
            ExitCode::SUCCESS
        }
        FindOutcome::Dispatched { path, tier, action } => {
            println!("✔ Found ({}): {}", tier, path.display());
            match action {
                DispatchAction::Open => println!("✔ Opened."),
                DispatchAction::Print => println!("✔ Sent to printer / print command issued."),
            }
            ExitCode::SUCCESS
        }
    }
}

fn join_pairs(map: &IndexMap<String, String>) -> String {
    map.iter()
        .map(|(k, v)| format!("{} → {}", k, v))
        .collect::<Vec<_>>()
        .join(", ")
}
