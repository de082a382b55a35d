//! # CLI Layer
//!
//! One possible client of [`TickpadApi`]. This is the only place that reads
//! the environment, prints to the terminal or blocks on stdin.
//!
//! Every invocation opens the widget from disk, applies one action, and prints
//! either the resulting list or the command messages. The search field is not
//! persisted, so `search` and `list --search` only affect that invocation.
//!
//! Positions given to `toggle` and `rm` are the numbers `list` prints: 1-based
//! and counted over the whole list, so they stay valid under a search.

use super::prompt::TerminalConfirm;
use super::render::{ListScreen, TermRenderer};
use super::setup::{Cli, Commands};
use clap::Parser;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use tickpad::api::{ConfigAction, TickpadApi};
use tickpad::commands::{self, CmdResult};
use tickpad::config::TickpadConfig;
use tickpad::confirm::AlwaysConfirm;
use tickpad::error::{Result, TickpadError};
use tickpad::model::{Tab, Theme};
use tickpad::store::fs::FileStore;
use tracing::debug;
use tracing_subscriber::EnvFilter;

const HOME_ENV: &str = "TICKPAD_HOME";
const LOG_ENV: &str = "TICKPAD_LOG";

struct AppContext {
    api: TickpadApi<FileStore>,
    config: TickpadConfig,
    data_dir: PathBuf,
    use_color: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::List { search }) => handle_list(&mut ctx, search),
        Some(Commands::Add { text }) => handle_add(&mut ctx, Tab::Todo, text),
        Some(Commands::Note { text }) => handle_add(&mut ctx, Tab::Notes, text),
        Some(Commands::Toggle { index }) => handle_toggle(&mut ctx, index),
        Some(Commands::Rm { index, yes }) => handle_delete(&mut ctx, index, yes),
        Some(Commands::Tab { tab }) => handle_tab(&mut ctx, tab),
        Some(Commands::Theme { theme }) => handle_theme(&mut ctx, theme),
        Some(Commands::Search { term }) => handle_list(&mut ctx, Some(term.join(" "))),
        Some(Commands::Html { output }) => handle_html(&ctx, output),
        Some(Commands::Config { key, value }) => handle_config(&mut ctx, key, value),
        None => handle_list(&mut ctx, None),
    }
}

/// Logs go to stderr so they never mix with list output. Returns whether the
/// subscriber was installed; the command still runs without one.
fn init_logging(verbose: bool) -> bool {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    match tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
    {
        Ok(()) => true,
        Err(e) => {
            eprintln!("Warning: logging disabled: {}", e);
            false
        }
    }
}

fn data_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "tickpad", "tickpad")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| TickpadError::Config("Could not determine data directory".into()))
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = data_dir()?;
    debug!(dir = %data_dir.display(), "data directory");

    let config = TickpadConfig::load(&data_dir)?;
    let api = TickpadApi::open(FileStore::new(&data_dir))?;
    let use_color = !cli.no_color && console::colors_enabled();

    Ok(AppContext {
        api,
        config,
        data_dir,
        use_color,
    })
}

fn renderer(ctx: &AppContext) -> Result<TermRenderer> {
    TermRenderer::new(ctx.api.ui().theme, ctx.use_color, ctx.config.line_width)
}

fn handle_list(ctx: &mut AppContext, search: Option<String>) -> Result<()> {
    if let Some(term) = search {
        ctx.api.search(term)?;
    }
    print_list(ctx)
}

fn handle_add(ctx: &mut AppContext, tab: Tab, words: Vec<String>) -> Result<()> {
    let text = words.join(" ");
    let result = match tab {
        Tab::Todo => {
            ctx.api.set_task_input(text);
            ctx.api.submit_task_input()?
        }
        Tab::Notes => {
            ctx.api.set_note_input(text);
            ctx.api.submit_note_input()?
        }
    };
    print_messages(ctx, &result)
}

fn handle_toggle(ctx: &mut AppContext, index: usize) -> Result<()> {
    let id = ctx.api.resolve(Tab::Todo, index)?;
    let result = ctx.api.toggle_task(id)?;
    print_messages(ctx, &result)
}

fn handle_delete(ctx: &mut AppContext, index: usize, yes: bool) -> Result<()> {
    let tab = ctx.api.ui().active;
    let id = ctx.api.resolve(tab, index)?;
    let result = if yes || !ctx.config.confirm_delete {
        ctx.api.delete(tab, id, &mut AlwaysConfirm)?
    } else {
        ctx.api.delete(tab, id, &mut TerminalConfirm)?
    };
    print_messages(ctx, &result)
}

fn handle_tab(ctx: &mut AppContext, tab: Tab) -> Result<()> {
    let result = ctx.api.switch_tab(tab)?;
    print_messages(ctx, &result)?;
    print_list(ctx)
}

fn handle_theme(ctx: &mut AppContext, theme: Option<Theme>) -> Result<()> {
    let result = match theme {
        Some(theme) => ctx.api.set_theme(theme)?,
        None => ctx.api.toggle_theme()?,
    };
    print_messages(ctx, &result)
}

fn handle_html(ctx: &AppContext, output: Option<PathBuf>) -> Result<()> {
    let page = ctx.api.render_page(&ctx.config.page_title)?;
    match output {
        Some(path) => {
            write_page(&path, &page)?;
            println!("Wrote {}", path.display());
        }
        None => print!("{}", page),
    }
    Ok(())
}

fn write_page(path: &Path, page: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, page)?;
    Ok(())
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let result = commands::config::run(&ctx.data_dir, action)?;
    if let Some(config) = &result.config {
        if result.messages.is_empty() {
            for key in TickpadConfig::KEYS {
                println!("{} = {}", key, config.get(key)?);
            }
        }
        ctx.config = config.clone();
    }
    print_messages(ctx, &result)
}

fn print_list(ctx: &AppContext) -> Result<()> {
    let screen = ListScreen {
        view: ctx.api.active_view(),
        task_count: ctx.api.tasks().len(),
        note_count: ctx.api.notes().len(),
    };
    print!("{}", renderer(ctx)?.list(&screen)?);
    Ok(())
}

fn print_messages(ctx: &AppContext, result: &CmdResult) -> Result<()> {
    if result.messages.is_empty() {
        return Ok(());
    }
    print!("{}", renderer(ctx)?.messages(&result.messages)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_logging_init_is_reported_not_fatal() {
        init_logging(false);
        assert!(!init_logging(true));
    }
}
