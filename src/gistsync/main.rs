use clap::{CommandFactory, Parser};
use colored::*;
use gistsync::api::GistSyncApi;
use gistsync::commands::{CmdMessage, ConfigAction, MessageLevel};
use gistsync::config::GistSyncConfig;
use gistsync::error::Result;
use gistsync::model::TrackedGist;
use gistsync::runner::system::SystemRunner;
use gistsync::store::fs::FileStore;
use std::path::PathBuf;

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: GistSyncApi<FileStore, SystemRunner>,
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Sync { ref files }) => {
            let files = files.clone();
            handle_sync(&mut init_context(&cli)?, &files)
        }
        Some(Commands::Status) => handle_status(&init_context(&cli)?),
        Some(Commands::Config { ref key, ref value }) => {
            let (key, value) = (key.clone(), value.clone());
            handle_config(&mut init_context(&cli)?, key, value)
        }
        None if cli.files.is_empty() => usage(),
        None => {
            let files = cli.files.clone();
            handle_sync(&mut init_context(&cli)?, &files)
        }
    }
}

fn usage() -> ! {
    let mut cmd = Cli::command();
    eprintln!("{}", cmd.render_usage());
    eprintln!("For more information, try '--help'.");
    std::process::exit(2);
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    // A missing config file already yields defaults; anything else (e.g. a
    // typo in .gistsync.json) is a real error the user should see.
    let mut config = GistSyncConfig::load(&cwd)?;
    if let Some(tool) = &cli.tool {
        config.gist_bin = tool.clone();
    }
    if let Some(id_dir) = &cli.id_dir {
        config.id_dir = id_dir.clone();
    }

    // The dotfolder is resolved relative to the working directory, so
    // diagnostics show the same paths the user sees.
    let store = FileStore::new(PathBuf::from(&config.id_dir));
    let api = GistSyncApi::new(store, SystemRunner::new(), config, cwd);

    Ok(AppContext { api })
}

fn handle_sync(ctx: &mut AppContext, files: &[String]) -> Result<()> {
    let result = ctx.api.sync_files(files)?;
    print_messages(&result.messages);
    // Per-file failures were reported above; the run itself succeeded.
    Ok(())
}

fn handle_status(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.status()?;
    print_tracked(&result.tracked);
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key.as_deref(), value) {
        (None, _) => ConfigAction::ShowAll,
        (Some("tool"), None) => ConfigAction::ShowKey("tool".to_string()),
        (Some("tool"), Some(v)) => ConfigAction::SetTool(v),
        (Some("id-dir"), None) => ConfigAction::ShowKey("id-dir".to_string()),
        (Some("id-dir"), Some(v)) => ConfigAction::SetIdDir(v),
        (Some(other), _) => {
            println!("Unknown config key: {}", other);
            return Ok(());
        }
    };

    let show_all = matches!(action, ConfigAction::ShowAll);
    let result = ctx.api.config(action)?;
    if show_all {
        if let Some(config) = &result.config {
            println!("tool = {}", config.gist_bin);
            println!("id-dir = {}", config.id_dir);
        }
    }
    print_messages(&result.messages);
    Ok(())
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => eprintln!("{}", message.content.red()),
        }
    }
}

fn print_tracked(tracked: &[TrackedGist]) {
    let width = tracked
        .iter()
        .map(|t| t.filename.len())
        .max()
        .unwrap_or(0);
    for gist in tracked {
        println!(
            "{:<width$}  {}",
            gist.filename,
            gist.remote_id.dimmed(),
            width = width
        );
    }
}
