//! Line-oriented game session over [`MazeEngine`].
//!
//! Parsing turns one input line into a [`Command`]; [`Session::execute`] runs
//! it against the engine and renders the reply text. All maze rules stay in
//! `maze-core`.

use std::fmt::Write as _;
use std::str::FromStr;

use maze_core::{
    CellFlags, CellView, Coord, Direction, MazeEngine, MazeError, MazeRng, MoveEffects,
    MoveOutcome, PortalArrangement, PortalKind, TreasureMode,
};
use tracing::{debug, info};

/// One parsed input line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Move(Direction),
    New { rows: usize, cols: usize },
    Portals(PortalArrangement),
    Treasure(TreasureMode),
    Crumbs(bool),
    Export { footer: bool },
    Status,
    Help,
    Quit,
}

/// Reasons an input line is not a command.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("empty command")]
    Empty,

    #[error("unknown command `{0}`; type `help` for the list")]
    Unknown(String),

    #[error("`{command}` needs {expected}")]
    MissingArgument {
        command: &'static str,
        expected: &'static str,
    },

    #[error("`{value}` is not a valid {expected}")]
    InvalidArgument {
        value: String,
        expected: &'static str,
    },

    #[error("`{command}` takes no further arguments")]
    TrailingArguments { command: &'static str },
}

const HELP: &str = "\
commands:
  up | down | left | right     move one cell (also n/s/w/e)
  new <rows> <cols>            generate a maze, both within 2..=15
  portals <mode>               corners_fixed, corners_random_exit_side, both_random, exit_only
  treasure <mode>              none, hidden, key
  crumbs on|off                show cells you have already left
  export [footer]              print the cell buffer as hex
  status                       describe the current cell
  quit";

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(head) = words.next() else {
            return Err(CommandError::Empty);
        };
        let head = head.to_ascii_lowercase();

        let command = match head.as_str() {
            "new" => {
                let rows = parse_arg(words.next(), "new", "<rows> <cols>")?;
                let cols = parse_arg(words.next(), "new", "<rows> <cols>")?;
                Self::New { rows, cols }
            }
            "portals" => Self::Portals(parse_arg(words.next(), "portals", "a portal arrangement")?),
            "treasure" => Self::Treasure(parse_arg(words.next(), "treasure", "a treasure mode")?),
            "crumbs" => match words.next().map(str::to_ascii_lowercase).as_deref() {
                Some("on") => Self::Crumbs(true),
                Some("off") => Self::Crumbs(false),
                Some(other) => {
                    return Err(CommandError::InvalidArgument {
                        value: other.to_string(),
                        expected: "crumbs setting (on|off)",
                    });
                }
                None => {
                    return Err(CommandError::MissingArgument {
                        command: "crumbs",
                        expected: "on|off",
                    });
                }
            },
            "export" => match words.next() {
                None => Self::Export { footer: false },
                Some(word) if word.eq_ignore_ascii_case("footer") => Self::Export { footer: true },
                Some(other) => {
                    return Err(CommandError::InvalidArgument {
                        value: other.to_string(),
                        expected: "export option (footer)",
                    });
                }
            },
            "status" | "look" => Self::Status,
            "help" | "?" => Self::Help,
            "quit" | "exit" | "q" => Self::Quit,
            other => match other.parse() {
                Ok(direction) => Self::Move(direction),
                Err(_) => return Err(CommandError::Unknown(other.to_string())),
            },
        };

        if words.next().is_some() {
            return Err(CommandError::TrailingArguments {
                command: command.name(),
            });
        }
        Ok(command)
    }
}

impl Command {
    fn name(&self) -> &'static str {
        match self {
            Self::Move(_) => "move",
            Self::New { .. } => "new",
            Self::Portals(_) => "portals",
            Self::Treasure(_) => "treasure",
            Self::Crumbs(_) => "crumbs",
            Self::Export { .. } => "export",
            Self::Status => "status",
            Self::Help => "help",
            Self::Quit => "quit",
        }
    }
}

fn parse_arg<T: FromStr>(
    word: Option<&str>,
    command: &'static str,
    expected: &'static str,
) -> Result<T, CommandError> {
    let word = word.ok_or(CommandError::MissingArgument { command, expected })?;
    word.parse().map_err(|_| CommandError::InvalidArgument {
        value: word.to_string(),
        expected,
    })
}

/// Interactive session state: the engine plus nothing else.
pub struct Session<R: MazeRng> {
    engine: MazeEngine<R>,
}

impl<R: MazeRng> Session<R> {
    pub fn new(engine: MazeEngine<R>) -> Self {
        Self { engine }
    }

    pub fn engine(&self) -> &MazeEngine<R> {
        &self.engine
    }

    /// Runs `command` and returns the text to show the player.
    ///
    /// `Quit` is left to the caller and yields an empty reply.
    ///
    /// # Errors
    ///
    /// Propagates engine errors: rejected dimensions, or moving or
    /// describing the player before any maze exists.
    pub fn execute(&mut self, command: Command) -> Result<String, MazeError> {
        match command {
            Command::Move(direction) => self.move_player(direction),
            Command::New { rows, cols } => self.new_maze(rows, cols),
            Command::Portals(arrangement) => {
                self.engine.set_portal_arrangement(arrangement);
                Ok(format!("portals set to {arrangement}; applies to the next maze"))
            }
            Command::Treasure(mode) => {
                self.engine.set_treasure_mode(mode);
                Ok(format!("treasure set to {mode}; applies to the next maze"))
            }
            Command::Crumbs(show) => {
                self.engine.set_show_breadcrumbs(show);
                Ok(format!("breadcrumbs {}", if show { "on" } else { "off" }))
            }
            Command::Export { footer } => {
                let bytes = self
                    .engine
                    .export_buffer(footer)
                    .ok_or(MazeError::NoActiveMaze)?;
                debug!(len = bytes.len(), footer, "Exported cell buffer");
                Ok(hex::encode(bytes))
            }
            Command::Status => self.describe_position(),
            Command::Help => Ok(HELP.to_string()),
            Command::Quit => Ok(String::new()),
        }
    }

    fn new_maze(&mut self, rows: usize, cols: usize) -> Result<String, MazeError> {
        let report = self.engine.new_maze(rows, cols)?;
        info!(
            rows,
            cols,
            portals = %self.engine.portal_arrangement(),
            treasure = %self.engine.treasure_mode(),
            "Generated maze"
        );
        debug!(
            steps = report.steps,
            rejected_draws = report.rejected_draws,
            "Walk statistics"
        );

        let mut reply = format!("new {rows}x{cols} maze\n");
        reply.push_str(&self.describe_position()?);
        Ok(reply)
    }

    fn move_player(&mut self, direction: Direction) -> Result<String, MazeError> {
        let report = self.engine.move_player(direction)?;
        debug!(%direction, outcome = ?report.outcome, effects = ?report.effects, "Move");

        let mut reply = String::new();
        match report.outcome {
            MoveOutcome::Blocked { side } => {
                let _ = write!(reply, "bump! a wall blocks the way {side}");
                return Ok(reply);
            }
            MoveOutcome::Exited { to } => {
                info!(exit = %to, treasure = self.engine.player_has_treasure(), "Player reached the exit");
                reply.push_str("you found the exit!\n");
            }
            MoveOutcome::Moved { .. } => {}
        }
        if report.effects.contains(MoveEffects::TREASURE_TAKEN) {
            info!("Treasure collected");
            reply.push_str("you picked up the treasure\n");
        }
        reply.push_str(&self.describe_position()?);
        Ok(reply)
    }

    fn describe_position(&self) -> Result<String, MazeError> {
        let position = self
            .engine
            .current_position()
            .ok_or(MazeError::NoActiveMaze)?;
        let view = self
            .engine
            .cell_view(position)
            .ok_or(MazeError::NoActiveMaze)?;
        Ok(describe_cell(position, &view, self.engine.player_has_treasure()))
    }
}

/// Renders one cell as a single status line.
pub fn describe_cell(position: Coord, view: &CellView, carrying_treasure: bool) -> String {
    let open: Vec<String> = Direction::ALL
        .into_iter()
        .filter(|&side| !view.walls.contains(CellFlags::wall(side)))
        .map(|side| side.to_string())
        .collect();

    let mut line = format!("at {position}");
    match view.portal {
        PortalKind::Entrance => line.push_str(" (entrance)"),
        PortalKind::Exit => line.push_str(" (exit)"),
        PortalKind::ExitThreshold | PortalKind::None => {}
    }
    if open.is_empty() {
        line.push_str(": no way out");
    } else {
        let _ = write!(line, ": open {}", open.join(", "));
    }
    if view.treasure {
        line.push_str("; treasure here");
    }
    if view.breadcrumb {
        line.push_str("; breadcrumb");
    }
    if carrying_treasure {
        line.push_str("; carrying treasure");
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use maze_core::PcgRng;

    fn session() -> Session<PcgRng> {
        Session::new(MazeEngine::new(PcgRng::seeded(5)))
    }

    #[test]
    fn parses_moves_and_aliases() {
        assert_eq!("up".parse(), Ok(Command::Move(Direction::Up)));
        assert_eq!("  East ".parse(), Ok(Command::Move(Direction::Right)));
        assert_eq!("s".parse(), Ok(Command::Move(Direction::Down)));
    }

    #[test]
    fn parses_setup_commands() {
        assert_eq!("new 4 12".parse(), Ok(Command::New { rows: 4, cols: 12 }));
        assert_eq!(
            "portals both_random".parse(),
            Ok(Command::Portals(PortalArrangement::BothRandom))
        );
        assert_eq!("treasure KEY".parse(), Ok(Command::Treasure(TreasureMode::Key)));
        assert_eq!("crumbs on".parse(), Ok(Command::Crumbs(true)));
        assert_eq!("export footer".parse(), Ok(Command::Export { footer: true }));
        assert_eq!("q".parse(), Ok(Command::Quit));
    }

    #[test]
    fn reports_bad_input() {
        assert_eq!("".parse::<Command>(), Err(CommandError::Empty));
        assert_eq!(
            "jump".parse::<Command>(),
            Err(CommandError::Unknown("jump".to_string()))
        );
        assert_eq!(
            "new 4".parse::<Command>(),
            Err(CommandError::MissingArgument {
                command: "new",
                expected: "<rows> <cols>",
            })
        );
        assert!(matches!(
            "treasure gold".parse::<Command>(),
            Err(CommandError::InvalidArgument { .. })
        ));
        assert_eq!(
            "status now".parse::<Command>(),
            Err(CommandError::TrailingArguments { command: "status" })
        );
    }

    #[test]
    fn commands_before_a_maze_fail() {
        let mut session = session();
        assert_eq!(session.execute(Command::Status), Err(MazeError::NoActiveMaze));
        assert_eq!(
            session.execute(Command::Export { footer: false }),
            Err(MazeError::NoActiveMaze)
        );
        assert!(session.execute(Command::Help).is_ok());
    }

    #[test]
    fn new_maze_describes_entrance() {
        let mut session = session();
        let reply = session.execute(Command::New { rows: 3, cols: 5 }).unwrap();
        assert!(reply.starts_with("new 3x5 maze\n"));
        assert!(reply.ends_with("at (0, -1) (entrance): open right"));
    }

    #[test]
    fn blocked_move_reports_wall() {
        let mut session = session();
        session.execute(Command::New { rows: 3, cols: 3 }).unwrap();
        let reply = session.execute(Command::Move(Direction::Up)).unwrap();
        assert_eq!(reply, "bump! a wall blocks the way up");
    }

    #[test]
    fn export_is_hex_encoded() {
        let mut session = session();
        session.execute(Command::New { rows: 4, cols: 4 }).unwrap();
        let plain = session.execute(Command::Export { footer: false }).unwrap();
        let framed = session.execute(Command::Export { footer: true }).unwrap();
        assert_eq!(plain.len(), 16 * 2);
        assert!(framed.starts_with(&plain));
        assert!(framed.ends_with("040400"));
    }

    #[test]
    fn describe_cell_lists_open_sides_and_markers() {
        let view = CellView {
            walls: CellFlags::TOP_WALL | CellFlags::RIGHT_WALL,
            portal: PortalKind::None,
            breadcrumb: true,
            treasure: true,
        };
        assert_eq!(
            describe_cell(Coord::new(2, 3), &view, false),
            "at (2, 3): open down, left; treasure here; breadcrumb"
        );
    }
}
