use super::engine::Outcome;
use super::food::{self, BoardFull, Food};
use super::grid::{Cell, Direction};
use super::snake::Snake;
use crate::consts;
use rand::Rng;
use std::time::Duration;

/// The tunable rules of a game
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Rules {
    /// Length of each side of the (square) board, in cells
    pub(crate) board_size: u16,

    /// Time between steps at the start of a game
    pub(crate) initial_speed: Duration,

    /// How much the time between steps shrinks each time food is eaten
    pub(crate) speed_step: Duration,

    /// The time between steps never shrinks below this
    pub(crate) min_speed: Duration,

    /// Points awarded for each piece of food eaten
    pub(crate) food_reward: u32,
}

impl Rules {
    /// Return the time between steps after eating food at `speed`.  The
    /// result is never greater than `speed`.
    pub(crate) fn accelerate(&self, speed: Duration) -> Duration {
        speed
            .saturating_sub(self.speed_step)
            .max(self.min_speed.min(speed))
    }

    fn start_cell(&self) -> Cell {
        Cell::new(self.board_size / 2, self.board_size / 2)
    }
}

impl Default for Rules {
    fn default() -> Rules {
        Rules {
            board_size: consts::BOARD_SIZE,
            initial_speed: consts::INITIAL_SPEED,
            speed_step: consts::SPEED_STEP,
            min_speed: consts::MIN_SPEED,
            food_reward: consts::FOOD_REWARD,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Phase {
    /// No game has been started yet
    Idle,
    Running,
    Paused,
    /// The game has ended; only starting a new game leaves this phase
    Over,
}

/// The state of a game of snake: the snake, its food, and the score
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Session<R = rand::rngs::ThreadRng> {
    pub(super) rng: R,
    pub(super) rules: Rules,
    pub(super) snake: Snake,
    pub(super) food: Option<Food>,
    pub(super) score: u32,
    pub(super) speed: Duration,
    pub(super) phase: Phase,
}

impl<R: Rng> Session<R> {
    /// Create an idle session laid out as a new game would be
    pub(crate) fn new(rules: Rules, rng: R) -> Session<R> {
        let mut session = Session {
            rng,
            rules,
            snake: Snake::new(rules.start_cell(), consts::START_DIRECTION),
            food: None,
            score: 0,
            speed: rules.initial_speed,
            phase: Phase::Idle,
        };
        if let Err(e) = session.reset() {
            log::warn!("Could not place food on new board: {e}");
        }
        session
    }

    /// Reset the snake, food, score, and speed to their initial values.  The
    /// phase is left unchanged.
    fn reset(&mut self) -> Result<(), BoardFull> {
        let previous = self.food.map(|f| f.critter);
        self.snake = Snake::new(self.rules.start_cell(), consts::START_DIRECTION);
        self.score = 0;
        self.speed = self.rules.initial_speed;
        self.food = None;
        let food = food::place(
            &mut self.rng,
            &self.snake.occupied(),
            self.rules.board_size,
            previous,
        )?;
        self.food = Some(food);
        Ok(())
    }

    /// Start a new game, discarding any game in progress
    pub(crate) fn start(&mut self) {
        match self.reset() {
            Ok(()) => {
                self.phase = Phase::Running;
                log::info!(
                    "Started new game on {size}x{size} board",
                    size = self.rules.board_size
                );
            }
            Err(e) => {
                self.phase = Phase::Over;
                log::warn!("Could not start new game: {e}");
            }
        }
    }

    /// Advance the game by one step if it is running.  Returns `None` if the
    /// game is not running.
    pub(crate) fn tick(&mut self) -> Option<Outcome> {
        if self.phase != Phase::Running {
            return None;
        }
        let outcome = self.step();
        match outcome {
            Outcome::Continue => (),
            Outcome::Ate => log::debug!(
                "Ate food; score = {}, speed = {:?}",
                self.score,
                self.speed
            ),
            Outcome::Collided => log::info!(
                "Game over: collided at length {}, score {}",
                self.snake.len(),
                self.score
            ),
            Outcome::BoardFull => log::info!("Game over: board full, score {}", self.score),
        }
        Some(outcome)
    }
}

impl<R> Session<R> {
    /// Pause a running game or resume a paused one.  Does nothing in any
    /// other phase.
    pub(crate) fn toggle_pause(&mut self) {
        self.phase = match self.phase {
            Phase::Running => Phase::Paused,
            Phase::Paused => Phase::Running,
            other => other,
        };
        log::debug!("Phase is now {:?}", self.phase);
    }

    /// Ask the snake to turn.  Attempts to reverse straight back onto the
    /// current direction are ignored, as is all input once the game is over.
    pub(crate) fn handle_direction_input(&mut self, direction: Direction) {
        if self.phase == Phase::Over {
            return;
        }
        if !self.snake.steer(direction) {
            log::trace!("Ignoring reversal to {direction:?}");
        }
    }

    pub(crate) fn phase(&self) -> Phase {
        self.phase
    }

    pub(crate) fn speed(&self) -> Duration {
        self.speed
    }

    pub(crate) fn snapshot(&self, progress: f64) -> Snapshot {
        Snapshot {
            board_size: self.rules.board_size,
            snake: self.snake.cells().iter().copied().collect(),
            direction: self.snake.direction(),
            food: self.food,
            score: self.score,
            speed: self.speed,
            phase: self.phase,
            progress,
        }
    }
}

/// Everything needed to draw a game
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Snapshot {
    pub(crate) board_size: u16,

    /// The cells of the snake, head first
    pub(crate) snake: Vec<Cell>,

    pub(crate) direction: Direction,
    pub(crate) food: Option<Food>,
    pub(crate) score: u32,
    pub(crate) speed: Duration,
    pub(crate) phase: Phase,

    /// How far the game has progressed towards its next step, in `[0, 1)`.
    /// Only useful for animation.
    pub(crate) progress: f64,
}

impl Snapshot {
    /// Test whether the game ended because the snake filled the board
    pub(crate) fn board_full(&self) -> bool {
        self.phase == Phase::Over && self.food.is_none()
    }
}
