//! Maze client binary.
//!
//! ```bash
//! MAZE_ROWS=8 MAZE_COLS=8 MAZE_TREASURE=key cargo run -p maze-client
//! ```

use std::io::{self, BufRead, Write};

use anyhow::Result;
use maze_client::{ClientConfig, Command, Session, logging};
use maze_core::{EngineError, MazeConfig, MazeEngine, PcgRng};

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = ClientConfig::from_env();
    let _guard = logging::setup_logging(config.log_dir.as_deref())?;

    let seed = config.seed.unwrap_or_else(rand::random);
    tracing::info!(seed, "Starting maze session");

    let mut engine = MazeEngine::new(PcgRng::seeded(seed));
    engine.set_portal_arrangement(config.portals());
    engine.set_treasure_mode(config.treasure());
    let mut session = Session::new(engine);

    let first = Command::New {
        rows: config.maze.rows,
        cols: config.maze.cols,
    };
    let greeting = match session.execute(first) {
        Ok(reply) => reply,
        Err(err) => {
            tracing::warn!("Configured size rejected: {err}. Using defaults.");
            session.execute(Command::New {
                rows: MazeConfig::DEFAULT_ROWS,
                cols: MazeConfig::DEFAULT_COLS,
            })?
        }
    };
    println!("{greeting}");
    println!("type `help` for commands");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(err) => {
                tracing::warn!(input = %line.trim(), "Rejected command: {err}");
                println!("{err}");
                continue;
            }
        };
        if command == Command::Quit {
            break;
        }

        match session.execute(command) {
            Ok(reply) => println!("{reply}"),
            Err(err) => {
                tracing::warn!(code = err.error_code(), severity = err.severity().as_str(), "{err}");
                println!("{err}");
            }
        }
        stdout.flush()?;
    }

    tracing::info!(
        exited = session.engine().has_reached_exit(),
        "Session ended"
    );
    Ok(())
}
