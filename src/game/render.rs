use super::grid::{Cell, Direction};
use super::session::{Phase, Snapshot};
use crate::consts;
use crate::util::center_rect;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Margin, Rect, Size},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Widget},
};
use unicode_width::UnicodeWidthStr;

/// Number of terminal columns used to draw one cell of the board
const CELL_WIDTH: u16 = 2;

/// A widget that draws a [`Snapshot`] of a game: the board on the left, and
/// the score and other information on the right
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct GameView<'a> {
    snapshot: &'a Snapshot,

    /// Whether to draw food as an emoji of the creature it is
    emoji: bool,
}

impl<'a> GameView<'a> {
    pub(crate) fn new(snapshot: &'a Snapshot, emoji: bool) -> GameView<'a> {
        GameView { snapshot, emoji }
    }

    fn food_symbol(&self) -> Option<(Cell, &'static str)> {
        let food = self.snapshot.food?;
        let emoji = food.critter.emoji();
        // Only use the emoji if it fills a cell exactly
        if self.emoji && emoji.width() == usize::from(CELL_WIDTH) {
            Some((food.cell, emoji))
        } else {
            Some((food.cell, consts::FOOD_SYMBOL))
        }
    }

    /// Return the cell the head will move into next, if the snake is more
    /// than halfway there and the cell is free
    fn motion_hint(&self) -> Option<Cell> {
        let snap = self.snapshot;
        if snap.phase != Phase::Running || snap.progress < 0.5 {
            return None;
        }
        let next = snap
            .snake
            .first()?
            .offset(snap.direction, snap.board_size)?;
        (!snap.snake.contains(&next) && snap.food.map(|f| f.cell) != Some(next)).then_some(next)
    }

    fn sidebar(&self) -> [Line<'static>; 10] {
        let snap = self.snapshot;
        [
            Line::from_iter([
                Span::raw(" "),
                Span::styled(format!("Score: {}", snap.score), consts::SCORE_STYLE),
            ]),
            Line::raw(format!(" Speed: {} ms", snap.speed.as_millis())),
            Line::raw(format!(" Length: {}", snap.snake.len())),
            Line::raw(format!(
                " Prey: {}",
                snap.food.map_or("none", |f| f.critter.name())
            )),
            Line::default(),
            status_line(snap),
            Line::default(),
            key_line("Enter", "new game"),
            key_line("Space", "pause"),
            key_line("q", "quit"),
        ]
    }
}

impl Widget for GameView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let snap = self.snapshot;
        let board_width = snap
            .board_size
            .saturating_mul(CELL_WIDTH)
            .saturating_add(2);
        let board_height = snap.board_size.saturating_add(2);
        let display = center_rect(
            area,
            Size {
                width: board_width.saturating_add(consts::SIDEBAR_WIDTH),
                height: board_height,
            },
        );
        let [board_area, sidebar_area] = Layout::horizontal([
            Constraint::Length(board_width),
            Constraint::Length(consts::SIDEBAR_WIDTH),
        ])
        .areas(display);

        Block::bordered().render(board_area, buf);
        let mut board = Canvas {
            area: board_area.inner(Margin::new(1, 1)),
            buf,
        };
        for &cell in snap.snake.iter().skip(1) {
            board.draw_cell(cell, consts::SNAKE_BODY_SYMBOL, consts::SNAKE_STYLE);
        }
        if let Some((cell, symbol)) = self.food_symbol() {
            board.draw_cell(cell, symbol, consts::FOOD_STYLE);
        }
        if let Some(cell) = self.motion_hint() {
            board.draw_cell(cell, consts::MOTION_SYMBOL, consts::MOTION_STYLE);
        }
        // Draw the head last so that it's never hidden
        if let Some(&head) = snap.snake.first() {
            if snap.phase == Phase::Over && !snap.board_full() {
                board.draw_cell(head, consts::COLLISION_SYMBOL, consts::COLLISION_STYLE);
            } else {
                board.draw_cell(head, head_symbol(snap.direction), consts::SNAKE_STYLE);
            }
        }

        for (line, row) in self.sidebar().into_iter().zip(sidebar_area.rows()) {
            line.render(row, buf);
        }
    }
}

fn head_symbol(direction: Direction) -> &'static str {
    match direction {
        Direction::Up => consts::SNAKE_HEAD_UP_SYMBOL,
        Direction::Down => consts::SNAKE_HEAD_DOWN_SYMBOL,
        Direction::Left => consts::SNAKE_HEAD_LEFT_SYMBOL,
        Direction::Right => consts::SNAKE_HEAD_RIGHT_SYMBOL,
    }
}

fn status_line(snap: &Snapshot) -> Line<'static> {
    let status = match snap.phase {
        Phase::Idle => return Line::raw(" Press Enter to start"),
        Phase::Running => return Line::default(),
        Phase::Paused => " PAUSED ",
        Phase::Over if snap.board_full() => " BOARD FULL ",
        Phase::Over => " GAME OVER ",
    };
    Line::from_iter([Span::raw(" "), Span::styled(status, consts::STATUS_STYLE)])
}

fn key_line(key: &'static str, action: &'static str) -> Line<'static> {
    Line::from_iter([
        Span::raw(" "),
        Span::styled(key, consts::KEY_STYLE),
        Span::raw(format!(
            "{:pad$}{action}",
            "",
            pad = 7usize.saturating_sub(key.len())
        )),
    ])
}

/// A region of a buffer onto which board cells are drawn
#[derive(Debug, Eq, PartialEq)]
struct Canvas<'a> {
    area: Rect,
    buf: &'a mut Buffer,
}

impl Canvas<'_> {
    fn draw_cell(&mut self, cell: Cell, symbol: &str, style: Style) {
        let Some(x) = cell
            .x
            .checked_mul(CELL_WIDTH)
            .and_then(|x| self.area.x.checked_add(x))
        else {
            return;
        };
        let Some(y) = self.area.y.checked_add(cell.y) else {
            return;
        };
        if x.saturating_add(CELL_WIDTH) > self.area.right() || y >= self.area.bottom() {
            return;
        }
        let _ = self
            .buf
            .set_stringn(x, y, symbol, usize::from(CELL_WIDTH), style);
    }
}
