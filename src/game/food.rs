use super::grid::Cell;
use crate::consts;
use enum_map::Enum;
use rand::{seq::IteratorRandom, Rng};
use std::collections::HashSet;
use thiserror::Error;

/// A piece of food on the board
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Food {
    pub(crate) cell: Cell,

    /// What kind of creature the food is.  Purely cosmetic.
    pub(crate) critter: Critter,
}

/// The creatures that can appear as food
#[derive(Clone, Copy, Debug, Enum, Eq, PartialEq)]
pub(crate) enum Critter {
    Mouse,
    Rat,
    Rabbit,
    Frog,
    Lizard,
    Bird,
    Chick,
    Cricket,
    Beetle,
    Mosquito,
    Ant,
    Snail,
    Hedgehog,
    Hamster,
}

impl Critter {
    pub(crate) fn name(self) -> &'static str {
        match self {
            Critter::Mouse => "mouse",
            Critter::Rat => "rat",
            Critter::Rabbit => "rabbit",
            Critter::Frog => "frog",
            Critter::Lizard => "lizard",
            Critter::Bird => "bird",
            Critter::Chick => "chick",
            Critter::Cricket => "cricket",
            Critter::Beetle => "beetle",
            Critter::Mosquito => "mosquito",
            Critter::Ant => "ant",
            Critter::Snail => "snail",
            Critter::Hedgehog => "hedgehog",
            Critter::Hamster => "hamster",
        }
    }

    pub(crate) fn emoji(self) -> &'static str {
        match self {
            Critter::Mouse => "🐁",
            Critter::Rat => "🐀",
            Critter::Rabbit => "🐇",
            Critter::Frog => "🐸",
            Critter::Lizard => "🦎",
            Critter::Bird => "🐦",
            Critter::Chick => "🐣",
            Critter::Cricket => "🦗",
            Critter::Beetle => "🐞",
            Critter::Mosquito => "🦟",
            Critter::Ant => "🐜",
            Critter::Snail => "🐌",
            Critter::Hedgehog => "🦔",
            Critter::Hamster => "🐹",
        }
    }

    /// Pick a critter uniformly at random, resampling until it differs from
    /// `previous` (unless there is only one kind of critter to choose from)
    pub(crate) fn choose<R: Rng>(rng: &mut R, previous: Option<Critter>) -> Critter {
        loop {
            let critter = Critter::from_usize(rng.random_range(0..Critter::LENGTH));
            if Critter::LENGTH <= 1 || Some(critter) != previous {
                return critter;
            }
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
#[error("no free cell is left on the board for food")]
pub(crate) struct BoardFull;

/// Place a new piece of food on a random cell of the board that is not in
/// `occupied`.
///
/// Cells are first rejection-sampled up to
/// [`MAX_PLACEMENT_ATTEMPTS`][consts::MAX_PLACEMENT_ATTEMPTS] times; if every
/// attempt lands on an occupied cell, a random choice is made among the
/// remaining free cells instead.
///
/// # Errors
///
/// Returns `Err(BoardFull)` if every cell of the board is occupied.
pub(crate) fn place<R: Rng>(
    rng: &mut R,
    occupied: &HashSet<Cell>,
    board_size: u16,
    previous: Option<Critter>,
) -> Result<Food, BoardFull> {
    let area = usize::from(board_size) * usize::from(board_size);
    if occupied.len() >= area {
        return Err(BoardFull);
    }
    let sampled = std::iter::repeat_with(|| {
        Cell::new(
            rng.random_range(0..board_size),
            rng.random_range(0..board_size),
        )
    })
    .take(consts::MAX_PLACEMENT_ATTEMPTS)
    .find(|c| !occupied.contains(c));
    let cell = match sampled {
        Some(cell) => cell,
        None => {
            log::debug!(
                "Food placement fell back to a scan after {} attempts; {} of {} cells occupied",
                consts::MAX_PLACEMENT_ATTEMPTS,
                occupied.len(),
                area
            );
            (0..board_size)
                .flat_map(|y| (0..board_size).map(move |x| Cell::new(x, y)))
                .filter(|c| !occupied.contains(c))
                .choose(rng)
                .ok_or(BoardFull)?
        }
    };
    Ok(Food {
        cell,
        critter: Critter::choose(rng, previous),
    })
}
