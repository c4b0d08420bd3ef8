use super::food;
use super::session::{Phase, Session};
use rand::Rng;

/// The result of advancing a game by one step
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Outcome {
    /// The snake moved into an empty cell
    Continue,

    /// The snake ate the food and grew by one cell
    Ate,

    /// The snake hit a wall or itself.  The game is over.
    Collided,

    /// The snake ate the food, but there is nowhere left to put a new one.
    /// The game is over.
    BoardFull,
}

impl<R: Rng> Session<R> {
    /// Move the snake one cell in its pending direction, regardless of the
    /// current phase.
    ///
    /// On collision, nothing other than the snake's direction and the phase
    /// is changed.  The cell the tail currently occupies counts as a
    /// collision even though the tail would move out of it.
    pub(super) fn step(&mut self) -> Outcome {
        let direction = self.snake.adopt_pending();
        let next = self
            .snake
            .head()
            .offset(direction, self.rules.board_size)
            .filter(|&cell| !self.snake.occupies(cell));
        let Some(head) = next else {
            self.phase = Phase::Over;
            return Outcome::Collided;
        };
        self.snake.push_head(head);
        log::trace!("Snake moved {direction:?} to {head:?}");
        let Some(eaten) = self.food.filter(|f| f.cell == head) else {
            self.snake.drop_tail();
            return Outcome::Continue;
        };
        self.score = self.score.saturating_add(self.rules.food_reward);
        self.speed = self.rules.accelerate(self.speed);
        match food::place(
            &mut self.rng,
            &self.snake.occupied(),
            self.rules.board_size,
            Some(eaten.critter),
        ) {
            Ok(food) => {
                self.food = Some(food);
                Outcome::Ate
            }
            Err(e) => {
                log::warn!("{e}");
                self.food = None;
                self.phase = Phase::Over;
                Outcome::BoardFull
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::food::{Critter, Food};
    use crate::game::grid::{Cell, Direction};
    use crate::game::session::Rules;
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;
    use std::collections::VecDeque;
    use std::time::Duration;

    const RNG_SEED: u64 = 0x0123456789ABCDEF;

    fn running(
        rules: Rules,
        cells: &[Cell],
        direction: Direction,
        food: Cell,
    ) -> Session<ChaCha12Rng> {
        let mut session = Session::new(rules, ChaCha12Rng::seed_from_u64(RNG_SEED));
        session.start();
        session.snake.cells = cells.iter().copied().collect();
        session.snake.direction = direction;
        session.snake.pending = direction;
        session.food = Some(Food {
            cell: food,
            critter: Critter::Mouse,
        });
        session
    }

    #[test]
    fn eat_adjacent_food() {
        let mut session = running(
            Rules::default(),
            &[Cell::new(10, 10)],
            Direction::Right,
            Cell::new(11, 10),
        );
        assert_eq!(session.step(), Outcome::Ate);
        assert_eq!(
            session.snake.cells,
            VecDeque::from([Cell::new(11, 10), Cell::new(10, 10)])
        );
        assert_eq!(session.score, 10);
        assert_eq!(session.speed, Duration::from_millis(195));
        assert_eq!(session.phase, Phase::Running);
        let food = session.food.unwrap();
        assert!(!session.snake.occupies(food.cell));
        assert_ne!(food.critter, Critter::Mouse);
    }

    #[test]
    fn move_without_eating() {
        let mut session = running(
            Rules::default(),
            &[Cell::new(5, 5), Cell::new(5, 6), Cell::new(5, 7)],
            Direction::Up,
            Cell::new(0, 0),
        );
        assert_eq!(session.step(), Outcome::Continue);
        assert_eq!(
            session.snake.cells,
            VecDeque::from([Cell::new(5, 4), Cell::new(5, 5), Cell::new(5, 6)])
        );
        assert_eq!(session.score, 0);
        assert_eq!(session.speed, Duration::from_millis(200));
    }

    #[test]
    fn wall_collision() {
        let mut session = running(
            Rules::default(),
            &[Cell::new(0, 5), Cell::new(1, 5)],
            Direction::Left,
            Cell::new(7, 7),
        );
        let before = session.snake.cells.clone();
        assert_eq!(session.step(), Outcome::Collided);
        assert_eq!(session.phase, Phase::Over);
        assert_eq!(session.snake.cells, before);
        assert_eq!(session.score, 0);
        assert_eq!(session.food.map(|f| f.cell), Some(Cell::new(7, 7)));
    }

    #[test]
    fn self_collision() {
        let mut session = running(
            Rules::default(),
            &[
                Cell::new(5, 5),
                Cell::new(6, 5),
                Cell::new(6, 6),
                Cell::new(5, 6),
                Cell::new(4, 6),
                Cell::new(4, 5),
            ],
            Direction::Down,
            Cell::new(0, 0),
        );
        session.snake.pending = Direction::Right;
        let before = session.snake.cells.clone();
        assert_eq!(session.step(), Outcome::Collided);
        assert_eq!(session.snake.cells, before);
        assert_eq!(session.snake.direction, Direction::Right);
    }

    #[test]
    fn moving_into_tail_collides() {
        // A 2x2 loop whose head is about to move onto the tail's cell
        let mut session = running(
            Rules::default(),
            &[
                Cell::new(3, 3),
                Cell::new(4, 3),
                Cell::new(4, 4),
                Cell::new(3, 4),
            ],
            Direction::Down,
            Cell::new(0, 0),
        );
        assert_eq!(session.step(), Outcome::Collided);
        assert_eq!(session.phase, Phase::Over);
        assert_eq!(session.snake.len(), 4);
    }

    #[test]
    fn fill_the_board() {
        let rules = Rules {
            board_size: 2,
            ..Rules::default()
        };
        let mut session = running(
            rules,
            &[Cell::new(0, 1), Cell::new(0, 0), Cell::new(1, 0)],
            Direction::Right,
            Cell::new(1, 1),
        );
        assert_eq!(session.step(), Outcome::BoardFull);
        assert_eq!(session.phase, Phase::Over);
        assert_eq!(session.food, None);
        assert_eq!(session.score, 10);
        assert_eq!(session.snake.len(), 4);
    }

    #[test]
    fn speed_floor() {
        let mut session = running(
            Rules::default(),
            &[Cell::new(0, 0)],
            Direction::Right,
            Cell::new(1, 0),
        );
        session.speed = Duration::from_millis(52);
        assert_eq!(session.step(), Outcome::Ate);
        assert_eq!(session.speed, Duration::from_millis(50));
        session.food = Some(Food {
            cell: Cell::new(2, 0),
            critter: Critter::Ant,
        });
        assert_eq!(session.step(), Outcome::Ate);
        assert_eq!(session.speed, Duration::from_millis(50));
        assert_eq!(session.score, 20);
    }
}
