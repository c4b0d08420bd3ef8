mod clock;
mod engine;
mod food;
mod grid;
mod render;
mod session;
mod snake;
pub(crate) use self::clock::Pacing;
pub(crate) use self::grid::Direction;
pub(crate) use self::session::Rules;
use self::clock::PacingClock;
use self::engine::Outcome;
use self::render::GameView;
use self::session::{Phase, Session};
use crate::app::Screen;
use crate::command::Command;
use crate::config::Config;
use crossterm::event::{poll, read, Event};
use rand::Rng;
use ratatui::Frame;
use std::time::Instant;

/// The game screen: a [`Session`] paced by a [`PacingClock`] and driven by
/// terminal input
#[derive(Clone, Debug)]
pub(crate) struct Game<R = rand::rngs::ThreadRng> {
    session: Session<R>,
    clock: PacingClock,
    emoji: bool,
}

impl Game<rand::rngs::ThreadRng> {
    pub(crate) fn new(config: &Config) -> Self {
        Game::new_with_rng(config, rand::rng())
    }
}

impl<R: Rng> Game<R> {
    pub(crate) fn new_with_rng(config: &Config, rng: R) -> Game<R> {
        let clock = PacingClock::new(config.pacing, config.frame_rate);
        log::info!(
            "Using {} pacing at {} frames per second",
            clock.pacing(),
            config.frame_rate
        );
        Game {
            session: Session::new(config.rules(), rng),
            clock,
            emoji: config.emoji,
        }
    }

    pub(crate) fn process_input(&mut self) -> std::io::Result<Option<Screen>> {
        if self.session.phase() == Phase::Running {
            let wait = self.clock.timeout(Instant::now(), self.session.speed());
            if wait.is_zero() || !poll(wait)? {
                self.on_clock(Instant::now());
                return Ok(None);
            }
        }
        Ok(self.handle_event(read()?, Instant::now()))
    }

    /// Let the clock know that it's now `now`, and advance the game if it's
    /// time
    fn on_clock(&mut self, now: Instant) -> Option<Outcome> {
        if self.clock.advance(now, self.session.speed()) {
            self.session.tick()
        } else {
            None
        }
    }

    fn handle_event(&mut self, event: Event, now: Instant) -> Option<Screen> {
        if event == Event::FocusLost {
            if self.session.phase() == Phase::Running {
                self.on_pause_toggle(now);
            }
            return None;
        }
        match Command::from_key_event(event.as_key_press_event()?)? {
            Command::Quit => return Some(Screen::Quit),
            Command::Up => self.on_direction_input(Direction::Up),
            Command::Down => self.on_direction_input(Direction::Down),
            Command::Left => self.on_direction_input(Direction::Left),
            Command::Right => self.on_direction_input(Direction::Right),
            Command::Pause => self.on_pause_toggle(now),
            Command::Start => self.on_start_requested(now),
        }
        None
    }

    fn on_start_requested(&mut self, now: Instant) {
        self.session.start();
        self.clock.reset(now);
    }
}

impl<R> Game<R> {
    pub(crate) fn draw(&self, frame: &mut Frame<'_>) {
        let snapshot = self.session.snapshot(self.clock.progress());
        frame.render_widget(GameView::new(&snapshot, self.emoji), frame.area());
    }

    fn on_direction_input(&mut self, direction: Direction) {
        self.session.handle_direction_input(direction);
    }

    fn on_pause_toggle(&mut self, now: Instant) {
        self.session.toggle_pause();
        match self.session.phase() {
            Phase::Paused => self.clock.pause(),
            Phase::Running => self.clock.resume(now),
            Phase::Idle | Phase::Over => (),
        }
    }
}
