// ABOUTME: Interactive permission checker built on permgate.
// ABOUTME: Loads a principal's permission list and answers queries against it.

mod session;

use std::path::PathBuf;

use anyhow::Result;
use rustyline::DefaultEditor;
use tracing_subscriber::EnvFilter;

use session::{Command, HELP, Session, load_permissions};

/// Environment variable naming a JSON file of permissions to load at start.
const PERMISSIONS_FILE_VAR: &str = "PERMCHECK_FILE";

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn initial_session() -> Result<Session> {
    match std::env::var_os(PERMISSIONS_FILE_VAR) {
        Some(path) => {
            let path = PathBuf::from(path);
            let held = load_permissions(&path)?;
            println!("Loaded {} permissions from {}", held.len(), path.display());
            Ok(Session::new(held))
        }
        None => Ok(Session::default()),
    }
}

fn run_repl(session: &mut Session) -> Result<()> {
    let mut rl = DefaultEditor::new()?;

    println!("Permission Checker - Type 'help' for commands, 'quit' to exit.\n");

    loop {
        let line = match rl.readline("> ") {
            Ok(line) => line,
            Err(_) => break,
        };

        let command = match Command::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                println!("{}\n{}\n", e, HELP);
                continue;
            }
        };

        let _ = rl.add_history_entry(line.trim());
        if command == Command::Quit {
            break;
        }

        match session.execute(command) {
            Ok(output) if output.is_empty() => {}
            Ok(output) => println!("{}\n", output),
            Err(e) => println!("Error: {:#}\n", e),
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();
    init_tracing();

    let mut session = initial_session()?;
    run_repl(&mut session)
}
