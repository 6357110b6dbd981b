//! Game state and core simulation types
//!
//! Everything that must be persisted for replay/determinism lives here.

use std::collections::VecDeque;

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::food;
use crate::config::Config;
use crate::consts::START_DIRECTION;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay, ticks advance the snake
    Running,
    /// Tick processing suspended, direction changes still buffered
    Paused,
    /// Snake ran into its own body; only restart leaves this phase
    GameOver,
    /// Snake occupies every grid cell, nowhere left to place food.
    /// The win condition, terminal like `GameOver`.
    BoardFull,
}

impl GamePhase {
    /// Terminal phases accept no operation except restart
    pub fn is_terminal(self) -> bool {
        matches!(self, GamePhase::GameOver | GamePhase::BoardFull)
    }
}

/// A grid cell coordinate, each axis in `[0, grid_size)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: u8,
    pub y: u8,
}

impl Position {
    pub fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    /// The neighboring cell one step in `dir`, wrapping both axes modulo
    /// `grid_size` (toroidal topology: leaving one edge re-enters opposite).
    pub fn step(self, dir: Direction, grid_size: u8) -> Self {
        let g = i16::from(grid_size);
        let (dx, dy) = dir.delta();
        Self {
            x: (i16::from(self.x) + i16::from(dx)).rem_euclid(g) as u8,
            y: (i16::from(self.y) + i16::from(dy)).rem_euclid(g) as u8,
        }
    }
}

/// Snake heading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Per-axis cell delta; y grows downward as in the grid coordinates
    pub fn delta(self) -> (i8, i8) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// The heading that would reverse this one into the snake's own neck
    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Parse a DOM-style key name at the input-adapter boundary.
    /// Unrecognized keys are rejected here so the engine never sees them.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowUp" => Some(Direction::Up),
            "ArrowDown" => Some(Direction::Down),
            "ArrowLeft" => Some(Direction::Left),
            "ArrowRight" => Some(Direction::Right),
            _ => None,
        }
    }
}

/// What a raw key event means to the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyIntent {
    Steer(Direction),
    TogglePause,
}

impl KeyIntent {
    /// Map a key name to an intent; keys the engine does not recognize
    /// yield `None` and should be passed through by the adapter.
    pub fn from_key(key: &str) -> Option<Self> {
        if key == " " {
            return Some(KeyIntent::TogglePause);
        }
        Direction::from_key(key).map(KeyIntent::Steer)
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Grid side length; the board is `grid_size * grid_size` cells
    pub grid_size: u8,
    /// Body segments, head first (front = head, back = tail)
    pub snake: VecDeque<Position>,
    /// Current food cell, disjoint from the snake at placement time
    pub food: Position,
    /// Committed heading, applied on each tick
    pub direction: Direction,
    /// Most recent valid direction request since the last tick
    /// (last-write-wins; committed at the top of the next tick)
    pub pending_direction: Option<Direction>,
    /// Foods eaten this run
    pub score: u32,
    /// Effective ticks processed this run
    pub time_ticks: u64,
    /// Current phase
    pub phase: GamePhase,
    /// Food placement RNG, serialized so a saved state replays identically
    rng: Pcg32,
}

impl GameState {
    /// Create a new game with the default configuration
    pub fn new(seed: u64) -> Self {
        Self::with_config(seed, &Config::default())
    }

    /// Create a new game on a `config.grid_size` board
    pub fn with_config(seed: u64, config: &Config) -> Self {
        let grid_size = config.grid_size;
        let start = Position::new(grid_size / 2, grid_size / 2);
        let mut rng = Pcg32::seed_from_u64(seed);
        let snake = VecDeque::from([start]);

        // A 2x2 board or larger always has a free cell here, but the
        // placement contract is honored rather than assumed.
        let (food, phase) = match food::place(&mut rng, &snake, grid_size) {
            Some(food) => (food, GamePhase::Running),
            None => (start, GamePhase::BoardFull),
        };

        Self {
            seed,
            grid_size,
            snake,
            food,
            direction: START_DIRECTION,
            pending_direction: None,
            score: 0,
            time_ticks: 0,
            phase,
            rng,
        }
    }

    /// The leading segment
    pub fn head(&self) -> Position {
        // Snake is non-empty by invariant
        self.snake[0]
    }

    /// Reset to the canonical start state, valid in any phase.
    ///
    /// The live RNG stream is reused so an entire session (across restarts)
    /// stays reproducible from the run seed.
    pub fn restart(&mut self) {
        let start = Position::new(self.grid_size / 2, self.grid_size / 2);
        self.snake.clear();
        self.snake.push_back(start);
        self.direction = START_DIRECTION;
        self.pending_direction = None;
        self.score = 0;
        self.time_ticks = 0;
        self.phase = if self.place_food() {
            GamePhase::Running
        } else {
            GamePhase::BoardFull
        };
    }

    /// Place a fresh food on a free cell; `false` means the board is full.
    pub(crate) fn place_food(&mut self) -> bool {
        match food::place(&mut self.rng, &self.snake, self.grid_size) {
            Some(food) => {
                self.food = food;
                true
            }
            None => false,
        }
    }

    /// Request a heading change, effective on the next tick.
    ///
    /// Silently ignored when the game is over or when `requested` would
    /// reverse the committed heading into the snake's own neck. Multiple
    /// requests between ticks overwrite each other, so at most one turn
    /// takes effect per tick and the reversal guard cannot be skipped by
    /// chaining two quick turns inside one tick window.
    pub fn set_direction(&mut self, requested: Direction) {
        if self.phase.is_terminal() {
            return;
        }
        if requested == self.direction.opposite() {
            return;
        }
        self.pending_direction = Some(requested);
    }

    /// Flip between `Running` and `Paused`; a no-op in terminal phases.
    pub fn toggle_pause(&mut self) {
        match self.phase {
            GamePhase::Running => self.phase = GamePhase::Paused,
            GamePhase::Paused => self.phase = GamePhase::Running,
            GamePhase::GameOver | GamePhase::BoardFull => {}
        }
    }

}
