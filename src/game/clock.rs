use serde::Deserialize;
use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};
use thiserror::Error;

/// How the passage of time is turned into steps of the game
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub(crate) enum Pacing {
    /// Step once every `speed`, scheduling each step when the previous one
    /// fires.  The snake moves in discrete jumps.
    Fixed,

    /// Run at a steady frame rate, accumulating frame time and stepping each
    /// time a full `speed` has accumulated.  Between steps, the fraction of
    /// the next step that has elapsed is available for animation.
    #[default]
    Smooth,
}

impl Pacing {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Pacing::Fixed => "fixed",
            Pacing::Smooth => "smooth",
        }
    }
}

impl fmt::Display for Pacing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Pacing {
    type Err = ParsePacingError;

    fn from_str(s: &str) -> Result<Pacing, ParsePacingError> {
        match s {
            "fixed" => Ok(Pacing::Fixed),
            "smooth" => Ok(Pacing::Smooth),
            _ => Err(ParsePacingError),
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
#[error(r#"invalid pacing; expected "fixed" or "smooth""#)]
pub(crate) struct ParsePacingError;

/// Decides when the game should take its next step.
///
/// The clock never reads the system time itself; every method that needs the
/// current time takes it as an argument.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct PacingClock {
    pacing: Pacing,

    /// Time between frames when using [`Pacing::Smooth`]
    frame_period: Duration,

    /// When the next step is due ([`Pacing::Fixed`] only).  `None` if no step
    /// is currently scheduled.
    next_tick: Option<Instant>,

    /// When the previous frame was processed ([`Pacing::Smooth`] only).
    /// `None` while paused.
    last_frame: Option<Instant>,

    /// Time elapsed since the last step, less any whole steps already taken
    accumulator: Duration,

    progress: f64,
}

impl PacingClock {
    pub(crate) fn new(pacing: Pacing, frame_rate: u16) -> PacingClock {
        let frame_period = Duration::from_secs(1) / u32::from(frame_rate.max(1));
        PacingClock {
            pacing,
            frame_period,
            next_tick: None,
            last_frame: None,
            accumulator: Duration::ZERO,
            progress: 0.0,
        }
    }

    pub(crate) fn pacing(&self) -> Pacing {
        self.pacing
    }

    /// Start timing a new game from `now`, discarding any time accumulated
    /// so far
    pub(crate) fn reset(&mut self, now: Instant) {
        self.next_tick = None;
        self.last_frame = Some(now);
        self.accumulator = Duration::ZERO;
        self.progress = 0.0;
    }

    /// Stop timing.  Any scheduled step is cancelled.
    pub(crate) fn pause(&mut self) {
        self.next_tick = None;
        self.last_frame = None;
    }

    /// Resume timing from `now`.  The time spent paused does not count
    /// towards the next step.
    pub(crate) fn resume(&mut self, now: Instant) {
        self.next_tick = None;
        self.last_frame = Some(now);
    }

    /// Return how long the caller may wait (e.g., for input) before it next
    /// needs to call [`PacingClock::advance()`]
    pub(crate) fn timeout(&mut self, now: Instant, speed: Duration) -> Duration {
        match self.pacing {
            Pacing::Fixed => self
                .next_tick
                .get_or_insert(now + speed)
                .saturating_duration_since(now),
            Pacing::Smooth => match self.last_frame {
                Some(last) => (last + self.frame_period).saturating_duration_since(now),
                None => Duration::ZERO,
            },
        }
    }

    /// Let the clock observe that it is now `now`.  Returns `true` if the
    /// game should take exactly one step.
    ///
    /// `speed` is the current time between steps; it is read afresh on every
    /// call, so it may change from one step to the next.
    pub(crate) fn advance(&mut self, now: Instant, speed: Duration) -> bool {
        match self.pacing {
            Pacing::Fixed => match self.next_tick {
                Some(when) if now >= when => {
                    // The next step is scheduled by `timeout()`, after the
                    // caller has had a chance to change the speed.
                    self.next_tick = None;
                    true
                }
                Some(_) => false,
                None => {
                    self.next_tick = Some(now + speed);
                    false
                }
            },
            Pacing::Smooth => {
                let Some(last) = self.last_frame.replace(now) else {
                    return false;
                };
                self.accumulator += now.saturating_duration_since(last);
                let mut stepped = false;
                if !speed.is_zero() && self.accumulator >= speed {
                    while self.accumulator >= speed {
                        self.accumulator -= speed;
                    }
                    stepped = true;
                }
                self.progress = if speed.is_zero() {
                    0.0
                } else {
                    let ratio = self.accumulator.as_secs_f64() / speed.as_secs_f64();
                    ratio.min(1.0 - f64::EPSILON)
                };
                stepped
            }
        }
    }

    /// Return how far the game is towards its next step, in `[0, 1)`.  Always
    /// zero for [`Pacing::Fixed`].
    pub(crate) fn progress(&self) -> f64 {
        match self.pacing {
            Pacing::Fixed => 0.0,
            Pacing::Smooth => self.progress,
        }
    }
}
