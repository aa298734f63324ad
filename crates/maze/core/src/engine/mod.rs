//! Game context and movement pipeline.
//!
//! [`MazeEngine`] owns the staged setup, the current maze and the player. It
//! is the only type hosts need to drive a game; [`BoundaryQuery`] and
//! [`PlayerNavigator`] are exposed for callers that assemble the pieces
//! themselves.

mod boundary;
mod navigator;

pub use boundary::BoundaryQuery;
pub use navigator::{MoveEffects, MoveOutcome, MoveReport, PlayerNavigator};

use crate::config::{MazeConfig, PortalArrangement, TreasureMode};
use crate::env::MazeRng;
use crate::error::MazeError;
use crate::generate::{GeneratedMaze, GenerationReport, MazeGenerator};
use crate::state::{
    CellFlags, Coord, Direction, MazeFooter, MazeGrid, PortalKind, PortalModel, TreasureState,
    export_cells,
};

/// Everything a host needs to draw one cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellView {
    /// Blocked sides with portal rules applied.
    pub walls: CellFlags,
    pub portal: PortalKind,
    /// True when breadcrumb display is on and the player has left this cell.
    pub breadcrumb: bool,
    /// True while the treasure lies here untaken.
    pub treasure: bool,
}

/// One generated maze and the player walking it.
#[derive(Clone, Debug)]
struct MazeGame {
    config: MazeConfig,
    grid: MazeGrid,
    portals: PortalModel,
    treasure: TreasureState,
    player: PlayerNavigator,
}

impl MazeGame {
    fn new(config: MazeConfig, maze: GeneratedMaze) -> Self {
        Self {
            config,
            grid: maze.grid,
            portals: maze.portals,
            treasure: maze.treasure,
            player: PlayerNavigator::new(maze.start),
        }
    }

    fn boundaries(&self) -> BoundaryQuery<'_> {
        BoundaryQuery::new(&self.grid, &self.portals, &self.treasure)
    }

    /// Grid cells plus the two off-grid portals.
    fn is_addressable(&self, coord: Coord) -> bool {
        self.grid.contains(coord)
            || matches!(
                self.portals.classify(coord),
                PortalKind::Entrance | PortalKind::Exit
            )
    }
}

/// Single-player maze game.
///
/// Portal arrangement and treasure mode are staged: setters record the value
/// and the next [`MazeEngine::new_maze`] applies it. Queries issued before the
/// first maze report "nothing" (`None` or `false`).
pub struct MazeEngine<R: MazeRng> {
    generator: MazeGenerator<R>,
    portals: PortalArrangement,
    treasure: TreasureMode,
    show_breadcrumbs: bool,
    game: Option<MazeGame>,
}

impl<R: MazeRng> MazeEngine<R> {
    /// Creates an engine with default setup and no maze.
    pub fn new(rng: R) -> Self {
        Self {
            generator: MazeGenerator::new(rng),
            portals: PortalArrangement::default(),
            treasure: TreasureMode::default(),
            show_breadcrumbs: false,
            game: None,
        }
    }

    /// Replaces the current maze with a freshly generated one.
    ///
    /// Applies the staged setup, turns breadcrumb display off and puts the
    /// player on the start coordinate.
    ///
    /// # Errors
    ///
    /// Returns `MazeError::Grid` if either dimension is outside `[2, 15]`.
    /// The previous maze, if any, is left untouched.
    pub fn new_maze(&mut self, rows: usize, cols: usize) -> Result<GenerationReport, MazeError> {
        let config = MazeConfig::new(rows, cols)
            .with_portals(self.portals)
            .with_treasure(self.treasure);
        let maze = self.generator.generate(&config)?;
        let report = maze.report;

        self.game = Some(MazeGame::new(config, maze));
        self.show_breadcrumbs = false;
        Ok(report)
    }

    /// Moves the player one cell.
    ///
    /// # Errors
    ///
    /// Returns `MazeError::NoActiveMaze` before the first maze exists.
    pub fn move_player(&mut self, direction: Direction) -> Result<MoveReport, MazeError> {
        let game = self.game.as_mut().ok_or(MazeError::NoActiveMaze)?;
        Ok(game.player.step(
            direction,
            &mut game.grid,
            &game.portals,
            &mut game.treasure,
        ))
    }

    /// Stages the portal arrangement for the next maze.
    pub fn set_portal_arrangement(&mut self, arrangement: PortalArrangement) {
        self.portals = arrangement;
    }

    /// Stages the treasure mode for the next maze.
    pub fn set_treasure_mode(&mut self, mode: TreasureMode) {
        self.treasure = mode;
    }

    pub fn portal_arrangement(&self) -> PortalArrangement {
        self.portals
    }

    pub fn treasure_mode(&self) -> TreasureMode {
        self.treasure
    }

    /// Setup the current maze was generated with.
    pub fn active_config(&self) -> Option<&MazeConfig> {
        self.game.as_ref().map(|game| &game.config)
    }

    pub fn player_has_treasure(&self) -> bool {
        self.game
            .as_ref()
            .is_some_and(|game| game.treasure.is_taken())
    }

    pub fn has_reached_exit(&self) -> bool {
        self.game
            .as_ref()
            .is_some_and(|game| game.player.has_exited())
    }

    pub fn current_position(&self) -> Option<Coord> {
        self.game.as_ref().map(|game| game.player.position())
    }

    pub fn is_showing_breadcrumbs(&self) -> bool {
        self.show_breadcrumbs
    }

    pub fn set_show_breadcrumbs(&mut self, show: bool) {
        self.show_breadcrumbs = show;
    }

    /// True if the player has left the grid cell at `coord` at least once.
    ///
    /// Portals and coordinates outside the grid never carry a breadcrumb.
    pub fn has_breadcrumb(&self, coord: Coord) -> bool {
        self.game.as_ref().is_some_and(|game| {
            game.grid
                .flags_at(coord)
                .is_some_and(|flags| !flags.contains(CellFlags::VISIT_MARK))
        })
    }

    /// Blocked sides of `coord`, or `None` without a maze or for a coordinate
    /// that is neither a grid cell nor a portal.
    pub fn walls(&self, coord: Coord) -> Option<CellFlags> {
        let game = self.game.as_ref()?;
        game.is_addressable(coord)
            .then(|| game.boundaries().walls(coord))
    }

    /// Render data for `coord`; `None` under the same conditions as
    /// [`Self::walls`].
    pub fn cell_view(&self, coord: Coord) -> Option<CellView> {
        let game = self.game.as_ref()?;
        if !game.is_addressable(coord) {
            return None;
        }
        let treasure = game
            .grid
            .flags_at(coord)
            .is_some_and(|flags| flags.contains(CellFlags::TREASURE));
        Some(CellView {
            walls: game.boundaries().walls(coord),
            portal: game.portals.classify(coord),
            breadcrumb: self.show_breadcrumbs && self.has_breadcrumb(coord),
            treasure,
        })
    }

    /// Copy of the cell buffer, optionally followed by the setup footer.
    ///
    /// Returns `None` before the first maze.
    pub fn export_buffer(&self, footer: bool) -> Option<Vec<u8>> {
        let game = self.game.as_ref()?;
        let footer = footer.then(|| MazeFooter::from_config(&game.config));
        Some(export_cells(&game.grid, footer))
    }

    pub fn grid(&self) -> Option<&MazeGrid> {
        self.game.as_ref().map(|game| &game.grid)
    }

    pub fn portals(&self) -> Option<&PortalModel> {
        self.game.as_ref().map(|game| &game.portals)
    }

    pub fn treasure(&self) -> Option<&TreasureState> {
        self.game.as_ref().map(|game| &game.treasure)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::PcgRng;

    fn engine() -> MazeEngine<PcgRng> {
        MazeEngine::new(PcgRng::seeded(42))
    }

    #[test]
    fn queries_before_first_maze_are_empty() {
        let mut engine = engine();
        assert_eq!(engine.current_position(), None);
        assert!(!engine.player_has_treasure());
        assert!(!engine.has_reached_exit());
        assert_eq!(engine.export_buffer(true), None);
        assert_eq!(engine.cell_view(Coord::ORIGIN), None);
        assert_eq!(
            engine.move_player(Direction::Right),
            Err(MazeError::NoActiveMaze)
        );
    }

    #[test]
    fn new_maze_starts_at_entrance_with_crumbs_hidden() {
        let mut engine = engine();
        engine.set_show_breadcrumbs(true);

        let report = engine.new_maze(4, 6).unwrap();

        assert_eq!(report.cells, 24);
        assert!(!engine.is_showing_breadcrumbs());
        assert_eq!(engine.current_position(), Some(Coord::new(0, -1)));
        assert_eq!(engine.export_buffer(false).map(|bytes| bytes.len()), Some(24));
    }

    #[test]
    fn rejected_dimensions_keep_previous_maze() {
        let mut engine = engine();
        engine.new_maze(3, 3).unwrap();
        engine.move_player(Direction::Right).unwrap();
        let before = engine.export_buffer(true);
        let position = engine.current_position();

        assert!(engine.new_maze(16, 3).is_err());
        assert!(engine.new_maze(3, 1).is_err());

        assert_eq!(engine.export_buffer(true), before);
        assert_eq!(engine.current_position(), position);
    }

    #[test]
    fn staged_setup_applies_on_next_maze() {
        let mut engine = engine();
        engine.new_maze(5, 5).unwrap();
        engine.set_portal_arrangement(PortalArrangement::ExitOnly);
        engine.set_treasure_mode(TreasureMode::Key);

        let config = engine.active_config().copied().unwrap();
        assert_eq!(config.portals, PortalArrangement::CornersFixed);
        assert_eq!(config.treasure, TreasureMode::None);

        engine.new_maze(5, 5).unwrap();
        let config = engine.active_config().copied().unwrap();
        assert_eq!(config.portals, PortalArrangement::ExitOnly);
        assert_eq!(config.treasure, TreasureMode::Key);

        let start = engine.current_position().unwrap();
        assert!(engine.grid().unwrap().contains(start));
        assert_ne!(Some(start), engine.treasure().map(TreasureState::location));
    }

    #[test]
    fn breadcrumbs_show_only_when_enabled() {
        let mut engine = engine();
        engine.new_maze(2, 2).unwrap();
        let doorstep = Coord::new(0, 0);

        engine.move_player(Direction::Right).unwrap();
        let open = engine
            .walls(doorstep)
            .and_then(|walls| {
                Direction::ALL
                    .into_iter()
                    .find(|&side| side != Direction::Left && !walls.contains(CellFlags::wall(side)))
            });
        let Some(side) = open else {
            panic!("doorstep of a perfect 2x2 maze has an interior opening");
        };
        engine.move_player(side).unwrap();

        assert!(engine.has_breadcrumb(doorstep));
        assert!(!engine.cell_view(doorstep).unwrap().breadcrumb);
        engine.set_show_breadcrumbs(true);
        assert!(engine.cell_view(doorstep).unwrap().breadcrumb);
    }

    #[test]
    fn cell_view_covers_portals_but_not_outside() {
        let mut engine = engine();
        engine.new_maze(3, 4).unwrap();
        let portals = engine.portals().copied().unwrap();

        let entrance = engine.cell_view(Coord::new(0, -1)).unwrap();
        assert_eq!(entrance.portal, PortalKind::Entrance);
        assert_eq!(entrance.walls, CellFlags::WALLS - CellFlags::RIGHT_WALL);

        let exit = engine.cell_view(portals.exit()).unwrap();
        assert_eq!(exit.portal, PortalKind::Exit);

        assert_eq!(engine.cell_view(Coord::new(-1, -1)), None);
        assert_eq!(engine.walls(Coord::new(7, 0)), None);
    }
}
