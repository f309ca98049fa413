mod app;
mod cli;
mod ui;

use simply_path::category;
use simply_path::config;
use simply_path::storage;
use simply_path::task;
use simply_path::utils;

use anyhow::{Result, anyhow, bail};
use category::{CATEGORIES, Category};
use chrono::Local;
use clap::Parser;
use cli::{Cli, Commands};
use config::Config;
use std::fs;
use std::io::Write;
use std::panic;
use storage::UiCache;
use storage::file::{load_board, save_board};
use task::{Subtask, Task};
use ui::theme::Theme;
use utils::paths::{get_board_path, get_crash_log_path, get_logs_dir};

/// Install a panic hook that writes crash information to a log file
fn install_crash_handler() {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        if let Ok(crash_log_path) = get_crash_log_path() {
            let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
            let mut crash_report = format!("=== CRASH at {} ===\n", timestamp);

            if let Some(message) = panic_info.payload().downcast_ref::<&str>() {
                crash_report.push_str(&format!("Message: {}\n", message));
            } else if let Some(message) = panic_info.payload().downcast_ref::<String>() {
                crash_report.push_str(&format!("Message: {}\n", message));
            }

            if let Some(location) = panic_info.location() {
                crash_report.push_str(&format!(
                    "Location: {}:{}:{}\n",
                    location.file(),
                    location.line(),
                    location.column()
                ));
            }

            crash_report.push_str(&format!(
                "\nBacktrace:\n{}\n\n",
                std::backtrace::Backtrace::force_capture()
            ));

            if let Ok(mut file) = fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(&crash_log_path)
            {
                let _ = file.write_all(crash_report.as_bytes());
                eprintln!("\nCrash logged to: {}", crash_log_path.display());
            }
        }

        default_hook(panic_info);
    }));
}

/// Initialize file-based logging for the TUI mode.
///
/// Logs are written to ~/.simply-path/logs/simpath.log so they never land
/// on the alternate screen. Log level is controlled with RUST_LOG
/// (default: info).
fn init_file_logging() -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let logs_dir = get_logs_dir().ok()?;

    if let Err(e) = fs::create_dir_all(&logs_dir) {
        eprintln!("Warning: Could not create logs directory: {}", e);
        return None;
    }

    let file_appender = tracing_appender::rolling::daily(&logs_dir, "simpath.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true)
        .init();

    Some(guard)
}

fn main() -> Result<()> {
    install_crash_handler();

    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Some(Commands::Add {
            title,
            category,
            description,
            subtasks,
        }) => {
            handle_add(title, category, description, subtasks, &config)?;
        }
        Some(Commands::Show { category }) => {
            handle_show(category)?;
        }
        Some(Commands::Delete { position, category }) => {
            handle_delete(position, category, &config)?;
        }
        None => {
            // Guard must be kept alive for the duration of the app
            let _log_guard = init_file_logging();

            tracing::info!("simpath starting");

            let board_path = get_board_path()?;
            let board = load_board(&board_path);
            let ui_cache = UiCache::load().ok();
            let theme = Theme::from_config(&config);

            let state = app::AppState::new(board, board_path, theme, ui_cache);
            let state = ui::run_tui(state)?;

            if let Err(err) = state.ui_cache().save() {
                tracing::warn!(%err, "failed to save ui cache");
            }

            tracing::info!("simpath exiting gracefully");
        }
    }

    Ok(())
}

/// Category named on the command line, or the configured default.
fn resolve_category(arg: Option<&str>, config: &Config) -> Result<&'static Category> {
    let id = arg.unwrap_or(&config.default_category);
    category::find(id).ok_or_else(|| {
        anyhow!("Unknown category '{id}'. Valid categories: belief, core, permissible")
    })
}

fn handle_add(
    title: String,
    category: Option<String>,
    description: Option<String>,
    subtasks: Vec<String>,
    config: &Config,
) -> Result<()> {
    let category = resolve_category(category.as_deref(), config)?;

    let title = title.trim().to_string();
    if title.is_empty() {
        bail!("A priority needs a non-empty title");
    }
    let description = description.unwrap_or_default().trim().to_string();
    let subtasks: Vec<Subtask> = subtasks
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(Subtask::new)
        .collect();

    let board_path = get_board_path()?;
    let mut board = load_board(&board_path);
    board.prepend(category.id, Task::new(title, description, subtasks));
    save_board(&board_path, &board)?;

    println!("✓ Added to {}", category.title);
    Ok(())
}

fn handle_show(category: Option<String>) -> Result<()> {
    let board = load_board(&get_board_path()?);

    let selected: Vec<&'static Category> = match category.as_deref() {
        Some(id) => vec![
            category::find(id).ok_or_else(|| {
                anyhow!("Unknown category '{id}'. Valid categories: belief, core, permissible")
            })?,
        ],
        None => CATEGORIES.iter().collect(),
    };

    for cat in selected {
        println!("\n{} - {}", cat.title, cat.priority_label);

        let tasks = board.tasks(cat.id);
        if tasks.is_empty() {
            println!("  {}", ui::components::EMPTY_STATE);
            continue;
        }

        for (idx, task) in tasks.iter().enumerate() {
            println!("  {}. {} {}", idx + 1, checkbox(task.completed), task.title);
            if !task.description.is_empty() {
                println!("         {}", task.description);
            }
            for subtask in &task.subtasks {
                println!("       {} {}", checkbox(subtask.completed), subtask.text);
            }
        }
    }

    println!();
    Ok(())
}

fn handle_delete(position: usize, category: Option<String>, config: &Config) -> Result<()> {
    let category = resolve_category(category.as_deref(), config)?;

    let board_path = get_board_path()?;
    let mut board = load_board(&board_path);

    let tasks = board.tasks(category.id);
    if position == 0 || position > tasks.len() {
        bail!(
            "No priority at position {position} in {} ({} listed)",
            category.title,
            tasks.len()
        );
    }
    let task = &tasks[position - 1];
    let task_id = task.id.clone();
    let task_title = task.title.clone();

    let confirmed = dialoguer::Confirm::new()
        .with_prompt(format!("Remove '{}'?", task_title))
        .default(false)
        .interact()?;
    if !confirmed {
        println!("Cancelled.");
        return Ok(());
    }

    board.remove(category.id, &task_id);
    save_board(&board_path, &board)?;

    println!("✓ Removed '{}' from {}", task_title, category.title);
    Ok(())
}

fn checkbox(completed: bool) -> &'static str {
    if completed { "[x]" } else { "[ ]" }
}
