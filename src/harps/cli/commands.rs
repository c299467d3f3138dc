use super::input::StdinInput;
use super::print::{print_harps, print_messages};
use super::setup::{Cli, Commands, OffsetFlags};
use clap::Parser;
use directories::ProjectDirs;
use harps::api::{CmdResult, ConfigAction, HarpsApi, SetSearch};
use harps::config::{HarpsConfig, CONFIG_KEYS};
use harps::error::{HarpsError, Result};
use harps::model::Section;
use harps::store::fs::FileStore;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

const HOME_ENV: &str = "HARPS_HOME";

struct AppContext {
    api: HarpsApi<FileStore>,
    config: HarpsConfig,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut ctx = init_context()?;

    match cli.command {
        Commands::Set {
            register,
            pattern,
            offset,
        } => handle_set(&mut ctx, &register, pattern, &offset),
        Commands::Get {
            register,
            backwards,
        } => handle_get(&ctx, &register, backwards),
        Commands::SetGlobal {
            register,
            path,
            pattern,
            offset,
        } => handle_set_global(&mut ctx, &register, &path, pattern, &offset),
        Commands::GetGlobal {
            register,
            backwards,
        } => handle_get_global(&ctx, &register, backwards),
        Commands::List { global } => handle_list(&ctx, global),
        Commands::Clear { global, registers } => handle_clear(&mut ctx, global, &registers),
        Commands::Config { key, value } => handle_config(&ctx, key, value),
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .finish();
    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("Warning: logging was already initialised");
    }
}

fn data_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "harps", "harps")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| {
            HarpsError::Store(format!(
                "Could not determine a data directory; set {}",
                HOME_ENV
            ))
        })
}

fn init_context() -> Result<AppContext> {
    let root = data_dir()?;
    tracing::debug!(root = %root.display(), "using harps home");

    let config = HarpsConfig::load_or_default(&root);
    let store = FileStore::new(root.clone());
    Ok(AppContext {
        api: HarpsApi::new(store, root),
        config,
    })
}

/// CLI flags can only switch behaviour on; config supplies the defaults.
fn set_options(config: &HarpsConfig, pattern: String, flags: &OffsetFlags) -> SetSearch {
    SetSearch::new(pattern)
        .infer_offset(flags.infer_offset || config.infer_offset)
        .ask_offset(flags.ask_offset || config.ask_offset)
}

fn handle_set(ctx: &mut AppContext, register: &str, pattern: String, flags: &OffsetFlags) -> Result<()> {
    let opts = set_options(&ctx.config, pattern, flags);
    let result = ctx.api.set_search(register, &opts, &mut StdinInput)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_get(ctx: &AppContext, register: &str, backwards: bool) -> Result<()> {
    let result = ctx.api.get_search(register, backwards)?;
    print_search(&result);
    Ok(())
}

fn handle_set_global(
    ctx: &mut AppContext,
    register: &str,
    path: &str,
    pattern: String,
    flags: &OffsetFlags,
) -> Result<()> {
    let opts = set_options(&ctx.config, pattern, flags);
    let result = ctx
        .api
        .set_global_search(register, path, &opts, &mut StdinInput)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_get_global(ctx: &AppContext, register: &str, backwards: bool) -> Result<()> {
    let result = ctx.api.get_global_search(register, backwards)?;
    if let Some(path) = &result.path {
        println!("{}", path.display());
    }
    print_search(&result);
    Ok(())
}

fn print_search(result: &CmdResult) {
    if let Some(command) = result.command() {
        println!("{}", command);
    }
    print_messages(&result.messages);
}

fn handle_list(ctx: &AppContext, global: bool) -> Result<()> {
    let result = ctx.api.list(Section::from_global(global))?;
    print_harps(&result.listed);
    print_messages(&result.messages);
    Ok(())
}

fn handle_clear(ctx: &mut AppContext, global: bool, registers: &[String]) -> Result<()> {
    let result = ctx.api.clear(Section::from_global(global), registers)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };
    let show_all = action == ConfigAction::ShowAll;

    let result = ctx.api.config(action)?;
    if show_all {
        if let Some(config) = &result.config {
            for key in CONFIG_KEYS {
                println!("{} = {}", key, config.get(key)?);
            }
        }
    }
    print_messages(&result.messages);
    Ok(())
}
