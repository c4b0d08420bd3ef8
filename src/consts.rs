//! Assorted constants & hard-coded configuration
use crate::game::Direction;
use ratatui::style::{Color, Modifier, Style};
use std::time::Duration;

/// Default length of each side of the board, in cells
pub(crate) const BOARD_SIZE: u16 = 20;

/// Largest board that fits in a standard 80×24 terminal
pub(crate) const MAX_BOARD_SIZE: u16 = 22;

/// Default time between steps at the start of a game
pub(crate) const INITIAL_SPEED: Duration = Duration::from_millis(200);

/// Default amount by which the time between steps shrinks after eating
pub(crate) const SPEED_STEP: Duration = Duration::from_millis(5);

/// Default floor for the time between steps
pub(crate) const MIN_SPEED: Duration = Duration::from_millis(50);

/// Default points awarded per piece of food
pub(crate) const FOOD_REWARD: u32 = 10;

/// Default number of frames per second drawn with smooth pacing
pub(crate) const FRAME_RATE: u16 = 60;

/// Direction the snake faces at the start of a game
pub(crate) const START_DIRECTION: Direction = Direction::Right;

/// How many random cells to try when placing food before falling back to
/// choosing among the free cells directly
pub(crate) const MAX_PLACEMENT_ATTEMPTS: usize = 1000;

/// Width of the panel to the right of the board
pub(crate) const SIDEBAR_WIDTH: u16 = 24;

/// Glyph for the snake's head when it is moving up
pub(crate) const SNAKE_HEAD_UP_SYMBOL: &str = "/\\";

/// Glyph for the snake's head when it is moving down
pub(crate) const SNAKE_HEAD_DOWN_SYMBOL: &str = "\\/";

/// Glyph for the snake's head when it is moving left
pub(crate) const SNAKE_HEAD_LEFT_SYMBOL: &str = "<:";

/// Glyph for the snake's head when it is moving right
pub(crate) const SNAKE_HEAD_RIGHT_SYMBOL: &str = ":>";

/// Glyph for the parts of the snake's body
pub(crate) const SNAKE_BODY_SYMBOL: &str = "██";

/// Glyph for food when emoji are disabled
pub(crate) const FOOD_SYMBOL: &str = "()";

/// Glyph for the snake's head when it's collided with a wall or itself
pub(crate) const COLLISION_SYMBOL: &str = "××";

/// Glyph drawn ahead of the snake's head once it is more than halfway to its
/// next cell
pub(crate) const MOTION_SYMBOL: &str = "··";

/// Style for the snake's head and body
pub(crate) const SNAKE_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);

/// Style for the food
pub(crate) const FOOD_STYLE: Style = Style::new().fg(Color::LightRed);

/// Style for [`COLLISION_SYMBOL`]
pub(crate) const COLLISION_STYLE: Style = Style::new()
    .fg(Color::LightRed)
    .add_modifier(Modifier::REVERSED);

/// Style for [`MOTION_SYMBOL`]
pub(crate) const MOTION_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::DIM);

/// Style for key codes shown in the interface
pub(crate) const KEY_STYLE: Style = Style::new().fg(Color::Yellow);

/// Style for the score line in the sidebar
pub(crate) const SCORE_STYLE: Style = Style::new().add_modifier(Modifier::BOLD);

/// Style for the game's status message
pub(crate) const STATUS_STYLE: Style = Style::new().add_modifier(Modifier::REVERSED);
