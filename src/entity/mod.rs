//! Creatures and scenery. Each type owns its position and motion state and
//! knows how to step itself; drawing goes through [`Sprite::spans`].

mod bubble;
mod chest;
mod crab;
mod fish;
mod jellyfish;
mod scenery;
mod shark;
mod submarine;

pub use bubble::{Bubble, BUBBLE_GLYPHS};
pub use chest::TreasureChest;
pub use crab::Crab;
pub use fish::{Fish, Heading, FISH_LEFT, FISH_RIGHT};
pub use jellyfish::Jellyfish;
pub use scenery::{Castle, SeaFloor, SeaPlant, Starfish, CASTLE};
pub use shark::Shark;
pub use submarine::Submarine;

use crossterm::style::Color;
use rand::Rng;

/// One row of a sprite.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Span {
    pub x: i32,
    pub y: i32,
    pub text: &'static str,
    pub color: Color,
}

pub trait Sprite {
    /// Rows currently on screen. Empty when the sprite is hidden.
    fn spans(&self) -> Vec<Span>;
}

/// The 15 non-black console foreground colours.
pub const FOREGROUND_COLORS: [Color; 15] = [
    Color::DarkBlue,
    Color::DarkGreen,
    Color::DarkCyan,
    Color::DarkRed,
    Color::DarkMagenta,
    Color::DarkYellow,
    Color::Grey,
    Color::DarkGrey,
    Color::Blue,
    Color::Green,
    Color::Cyan,
    Color::Red,
    Color::Magenta,
    Color::Yellow,
    Color::White,
];

pub fn random_color<R: Rng + ?Sized>(rng: &mut R) -> Color {
    FOREGROUND_COLORS[rng.gen_range(0..FOREGROUND_COLORS.len())]
}

/// Uniform draw from `[lo, hi)`, collapsing to `lo` when the range is empty.
pub fn pick<R: Rng + ?Sized>(rng: &mut R, lo: i32, hi: i32) -> i32 {
    if hi <= lo {
        lo
    } else {
        rng.gen_range(lo..hi)
    }
}

/// Counts down the ticks until an entity is allowed to move again.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Throttle {
    period: u32,
    remaining: u32,
}

impl Throttle {
    pub fn new(period: u32) -> Self {
        let period = period.max(1);
        Self {
            period,
            remaining: period,
        }
    }

    /// Advances one tick; true on the ticks the entity should move.
    pub fn tick(&mut self) -> bool {
        self.remaining -= 1;
        if self.remaining == 0 {
            self.remaining = self.period;
            true
        } else {
            false
        }
    }
}

/// One step of back-and-forth motion inside `[lo, hi]`.
///
/// At a limit the direction flips and the step goes the other way, so the
/// coordinate never leaves the band it started in.
pub(crate) fn bounce_step(pos: &mut i32, toward_lo: &mut bool, lo: i32, hi: i32) {
    if *toward_lo {
        if *pos > lo {
            *pos -= 1;
        } else {
            *toward_lo = false;
            *pos += 1;
        }
    } else if *pos < hi {
        *pos += 1;
    } else {
        *toward_lo = true;
        *pos -= 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn throttle_fires_on_every_period() {
        let mut t = Throttle::new(3);
        let fired: Vec<bool> = (0..9).map(|_| t.tick()).collect();
        assert_eq!(
            fired,
            [false, false, true, false, false, true, false, false, true]
        );
    }

    #[test]
    fn bounce_stays_in_band() {
        let (mut pos, mut down) = (3, true);
        for _ in 0..50 {
            bounce_step(&mut pos, &mut down, 2, 6);
            assert!((2..=6).contains(&pos));
        }
    }

    #[test]
    fn bounce_flips_at_the_limit() {
        let (mut pos, mut toward_lo) = (2, true);
        bounce_step(&mut pos, &mut toward_lo, 2, 6);
        assert!(!toward_lo);
        assert_eq!(pos, 3);
    }

    #[test]
    fn pick_collapses_empty_ranges() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(pick(&mut rng, 10, 4), 10);
        assert_eq!(pick(&mut rng, 5, 5), 5);
        let v = pick(&mut rng, 5, 8);
        assert!((5..8).contains(&v));
    }
}
