//! Terminal front end for the tasklist core.
//!
//! # Responsibility
//! - Build the screen's element set and wire the coordinator to it.
//! - Turn typed commands into view interactions and print the result.

mod command;
mod screen;

use clap::Parser;
use command::Command;
use log::info;
use std::error::Error;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tasklist_core::db::{open_db, open_db_in_memory};
use tasklist_core::view::selectors;
use tasklist_core::{
    core_version, init_logging, AppConfig, Coordinator, ListState, SqliteKeyValueStore,
    ViewDocument,
};

#[derive(Debug, Parser)]
#[command(name = "tasklist", version, about = "Manage named lists of checkable tasks")]
struct Args {
    /// Database file holding the persisted lists.
    #[arg(long, value_name = "PATH", conflicts_with = "memory")]
    db: Option<PathBuf>,

    /// Keep everything in memory; nothing survives the session.
    #[arg(long)]
    memory: bool,

    /// trace|debug|info|warn|error
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,

    /// Directory for rotated log files; logging is off when omitted.
    #[arg(long, value_name = "DIR")]
    log_dir: Option<PathBuf>,
}

impl Args {
    fn into_config(self) -> io::Result<AppConfig> {
        let mut config = if self.memory {
            AppConfig::ephemeral()
        } else {
            AppConfig::default()
        };
        if let Some(db) = self.db {
            config.db_path = Some(db);
        }
        if let Some(level) = self.log_level {
            config.log_level = level;
        }
        config.log_dir = match self.log_dir {
            Some(dir) if dir.is_relative() => Some(std::env::current_dir()?.join(dir)),
            other => other,
        };
        Ok(config)
    }
}

fn main() -> ExitCode {
    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("tasklist: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let config = args.into_config()?;
    if let Some(log_dir) = config.log_dir.as_deref() {
        init_logging(&config.log_level, log_dir)?;
    }

    let conn = match config.db_path.as_deref() {
        Some(path) => open_db(path)?,
        None => open_db_in_memory()?,
    };
    let state = ListState::load(SqliteKeyValueStore::new(&conn));
    let mut coordinator = Coordinator::new(state, ViewDocument::standard());
    coordinator.init()?;
    info!(
        "event=app_start module=cli status=ok version={}",
        core_version()
    );

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    writeln!(stdout, "{}", screen::render(coordinator.view()))?;
    write!(stdout, "> ")?;
    stdout.flush()?;

    for line in stdin.lock().lines() {
        match Command::parse(&line?) {
            Ok(Command::Quit) => break,
            Ok(Command::Help) => writeln!(stdout, "{}", command::HELP)?,
            Ok(Command::Show) => writeln!(stdout, "{}", screen::render(coordinator.view()))?,
            Ok(command) => {
                interact(coordinator.view_mut(), &command);
                coordinator.run_pending()?;
                writeln!(stdout, "{}", screen::render(coordinator.view()))?;
            }
            Err(message) => writeln!(stdout, "{message}")?,
        }
        write!(stdout, "> ")?;
        stdout.flush()?;
    }

    info!("event=app_exit module=cli status=ok");
    Ok(())
}

/// Performs the view interaction a command stands for.
fn interact(doc: &mut ViewDocument, command: &Command) {
    match command {
        Command::NewList(name) => {
            doc.type_into(selectors::NEW_LIST_INPUT, name);
            doc.submit(selectors::NEW_LIST_FORM);
        }
        Command::NewTask(name) => {
            doc.type_into(selectors::NEW_TASK_INPUT, name);
            doc.submit(selectors::NEW_TASK_FORM);
        }
        Command::Select(row) => {
            doc.click_child(selectors::LIST_CONTAINER, row.saturating_sub(1));
        }
        Command::ClickBlank => {
            doc.click(selectors::LIST_CONTAINER);
        }
        Command::Delete => {
            doc.click(selectors::DELETE_LIST_BUTTON);
        }
        Command::Show | Command::Help | Command::Quit => {}
    }
}
