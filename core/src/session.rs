use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::*;

/// Player commands accepted by a [`GameSession`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    NewGame,
    ApplyDifficulty(Difficulty),
    Reveal(Coord2),
    ToggleFlag(Coord2),
}

/// What an accepted command did.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    NoOp,
    Revealed,
    Flagged,
    Unflagged,
    GameWon,
    GameLost,
    Reset,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellChange {
    pub coords: Coord2,
    pub view: CellView,
}

/// Notification sent after every accepted command.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateChanged {
    pub outcome: Outcome,
    pub status: GameStatus,
    pub flag_budget: i32,
    pub changed: Vec<CellChange>,
}

impl StateChanged {
    pub fn is_noop(&self) -> bool {
        self.outcome == Outcome::NoOp
    }
}

/// Front-end hook receiving every [`StateChanged`] of a session.
pub trait SessionObserver {
    fn on_state_changed(&mut self, event: &StateChanged);
}

impl<F: FnMut(&StateChanged)> SessionObserver for F {
    fn on_state_changed(&mut self, event: &StateChanged) {
        self(event)
    }
}

/// A game from start to finish, and every game after it.
///
/// The session owns the board and its random source; all commands run
/// to completion before returning.
pub struct GameSession<R = SmallRng> {
    engine: RevealEngine,
    placer: RandomMinePlacer,
    rng: R,
    flag_budget: i32,
    observers: Vec<Box<dyn SessionObserver>>,
}

impl GameSession<SmallRng> {
    /// Session whose every layout is reproducible from `seed`.
    pub fn seeded(config: GameConfig, seed: u64) -> Self {
        Self::new(config, SmallRng::seed_from_u64(seed))
    }
}

impl<R: Rng> GameSession<R> {
    pub fn new(config: GameConfig, rng: R) -> Self {
        Self::with_placer(config, RandomMinePlacer::default(), rng)
    }

    pub fn with_placer(config: GameConfig, placer: RandomMinePlacer, mut rng: R) -> Self {
        let mines = placer.place(config, &mut rng);
        Self::from_parts(config, &mines, placer, rng)
    }

    /// Starts with an explicit layout; later games are drawn from `rng`.
    pub fn with_mines(config: GameConfig, mines: &MineSet, rng: R) -> Self {
        Self::from_parts(config, mines, RandomMinePlacer::default(), rng)
    }

    pub fn from_difficulty(difficulty: Difficulty, rng: R) -> Self {
        Self::new(difficulty.config(), rng)
    }

    fn from_parts(config: GameConfig, mines: &MineSet, placer: RandomMinePlacer, rng: R) -> Self {
        log::debug!(
            "New session: {}x{} with {} mines",
            config.rows(),
            config.cols(),
            config.mines()
        );
        Self {
            engine: RevealEngine::new(Board::new(config, mines)),
            placer,
            rng,
            flag_budget: i32::from(config.mines()),
            observers: Vec::new(),
        }
    }

    pub fn subscribe(&mut self, observer: impl SessionObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    pub fn handle(&mut self, command: Command) -> Result<StateChanged> {
        match command {
            Command::NewGame => Ok(self.new_game()),
            Command::ApplyDifficulty(difficulty) => Ok(self.apply_difficulty(difficulty)),
            Command::Reveal(coords) => self.reveal(coords),
            Command::ToggleFlag(coords) => self.toggle_flag(coords),
        }
    }

    pub fn reveal(&mut self, coords: Coord2) -> Result<StateChanged> {
        let mut changes = Vec::new();
        let outcome = match self.engine.reveal(coords, &mut changes)? {
            RevealOutcome::NoChange => Outcome::NoOp,
            RevealOutcome::Revealed => Outcome::Revealed,
            RevealOutcome::HitMine => Outcome::GameLost,
            RevealOutcome::Won => Outcome::GameWon,
        };
        Ok(self.emit(outcome, changes))
    }

    /// Flags or unflags a covered cell. The budget is not clamped and goes
    /// negative when more flags than mines are placed.
    pub fn toggle_flag(&mut self, coords: Coord2) -> Result<StateChanged> {
        let mut changes = Vec::new();
        let outcome = match self.engine.toggle_flag(coords, &mut changes)? {
            MarkOutcome::NoChange => Outcome::NoOp,
            MarkOutcome::Flagged => {
                self.flag_budget -= 1;
                Outcome::Flagged
            }
            MarkOutcome::Unflagged => {
                self.flag_budget += 1;
                Outcome::Unflagged
            }
        };
        Ok(self.emit(outcome, changes))
    }

    /// Re-randomises the mines with the current dimensions.
    pub fn new_game(&mut self) -> StateChanged {
        let config = self.config();
        let mines = self.placer.place(config, &mut self.rng);

        let mut changes = Vec::new();
        self.engine.reset(&mines, &mut changes);
        self.flag_budget = i32::from(config.mines());
        log::debug!("New game on {}x{} board", config.rows(), config.cols());

        self.emit(Outcome::Reset, changes)
    }

    /// Replaces the board with the preset's dimensions and starts a new game.
    pub fn apply_difficulty(&mut self, difficulty: Difficulty) -> StateChanged {
        let config = difficulty.config();
        let mines = self.placer.place(config, &mut self.rng);

        self.engine = RevealEngine::new(Board::new(config, &mines));
        self.flag_budget = i32::from(config.mines());
        log::debug!("Applied difficulty {}", difficulty);

        let changes = self.engine.board().iter().map(Cell::coords).collect();
        self.emit(Outcome::Reset, changes)
    }

    pub fn apply_difficulty_named(&mut self, name: &str) -> Result<StateChanged> {
        let difficulty = Difficulty::from_name(name)?;
        Ok(self.apply_difficulty(difficulty))
    }

    fn emit(&mut self, outcome: Outcome, changes: Vec<Coord2>) -> StateChanged {
        let game_over = self.is_finished();
        let board = self.engine.board();
        let changed = changes
            .into_iter()
            .map(|coords| CellChange {
                coords,
                view: board[coords].view(game_over),
            })
            .collect();

        let event = StateChanged {
            outcome,
            status: self.status(),
            flag_budget: self.flag_budget,
            changed,
        };
        for observer in &mut self.observers {
            observer.on_state_changed(&event);
        }
        event
    }
}

impl<R> GameSession<R> {
    pub fn dimensions(&self) -> Coord2 {
        self.engine.board().size()
    }

    pub fn config(&self) -> GameConfig {
        self.engine.board().config()
    }

    pub fn status(&self) -> GameStatus {
        self.engine.status()
    }

    pub fn is_finished(&self) -> bool {
        self.engine.is_finished()
    }

    /// Mines left to flag, negative once the player over-flags.
    pub fn flag_budget(&self) -> i32 {
        self.flag_budget
    }

    pub fn revealed_count(&self) -> CellCount {
        self.engine.revealed_count()
    }

    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.engine.triggered_mine()
    }

    pub fn board(&self) -> &Board {
        self.engine.board()
    }

    pub fn cell_view(&self, coords: Coord2) -> Result<CellView> {
        Ok(self.engine.board().cell(coords)?.view(self.is_finished()))
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::from_session(self)
    }
}

impl<R> fmt::Debug for GameSession<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameSession")
            .field("engine", &self.engine)
            .field("placer", &self.placer)
            .field("flag_budget", &self.flag_budget)
            .field("observers", &self.observers.len())
            .finish_non_exhaustive()
    }
}
