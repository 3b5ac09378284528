use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde_json::json;

use plinth_core::app::constants;
use plinth_core::{AppOptions, Application, InitOptions};

/// Plinth: a minimal plugin-lifecycle orchestrator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct CliArgs {
    /// Simple ping command for smoke testing
    #[arg(long)]
    ping: bool,

    /// Base directory the application provisions into
    #[arg(long)]
    root: Option<PathBuf>,

    /// Configuration file handed to the config plugin
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Manage plugins
    Plugin {
        #[command(subcommand)]
        command: PluginCommand,
    },
}

#[derive(Subcommand, Debug)]
enum PluginCommand {
    /// List registered plugins
    List {},
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = CliArgs::parse();

    if args.ping {
        println!("pong");
        return ExitCode::SUCCESS;
    }

    let mut options = InitOptions::new();
    if let Some(config) = &args.config {
        options.insert(
            constants::CONFIG_PLUGIN.to_string(),
            json!({"file": config}),
        );
    }

    let mut app = match Application::new(AppOptions {
        root: args.root,
        plugins: Vec::new(),
        options,
    }) {
        Ok(app) => app,
        Err(e) => {
            eprintln!("Failed to create application: {e}");
            return ExitCode::FAILURE;
        }
    };

    match args.command {
        Some(Commands::Plugin {
            command: PluginCommand::List {},
        }) => {
            let mut names = app.registry().names();
            names.sort();
            println!("Registered plugins:");
            for name in names {
                println!("  - {name}");
            }
            ExitCode::SUCCESS
        }
        None => {
            println!("Initializing application...");
            if let Err(e) = app.init(InitOptions::new()).await {
                eprintln!("Application init failed: {e}");
                return ExitCode::FAILURE;
            }
            println!("Application ready");
            ExitCode::SUCCESS
        }
    }
}
