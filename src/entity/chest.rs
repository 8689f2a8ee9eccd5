use super::{Bubble, Span, Sprite};
use crossterm::style::Color;
use rand::Rng;

const CLOSED: &str = "[_____]";
const OPEN: &str = "[_###_]";

/// Ticks the lid stays put before it may toggle.
const MIN_DWELL: u32 = 50;
/// One chance in this many, per eligible tick, of toggling.
const TOGGLE_ODDS: u32 = 20;
/// An open chest releases a bubble on every n-th tick.
const SPAWN_EVERY: u32 = 5;

#[derive(Clone, Debug)]
pub struct TreasureChest {
    pub x: i32,
    pub y: i32,
    open: bool,
    timer: u32,
}

impl TreasureChest {
    pub fn new(x: i32, y: i32) -> Self {
        Self {
            x,
            y,
            open: false,
            timer: 0,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Advances the lid timer and, while open, pushes new bubbles onto
    /// `spawned` as long as it holds fewer than `cap`.
    pub fn step<R: Rng + ?Sized>(&mut self, rng: &mut R, spawned: &mut Vec<Bubble>, cap: usize) {
        self.timer += 1;
        if self.timer > MIN_DWELL && rng.gen_range(0..TOGGLE_ODDS) == 0 {
            self.open = !self.open;
            self.timer = 0;
            log::trace!(
                "chest at ({}, {}) {}",
                self.x,
                self.y,
                if self.open { "opened" } else { "closed" }
            );
        }

        if self.open && self.timer % SPAWN_EVERY == 0 && spawned.len() < cap {
            spawned.push(Bubble::new(self.x + 3, self.y, "o", Color::Yellow));
        }
    }
}

impl Sprite for TreasureChest {
    fn spans(&self) -> Vec<Span> {
        vec![Span {
            x: self.x,
            y: self.y,
            text: if self.open { OPEN } else { CLOSED },
            color: Color::DarkYellow,
        }]
    }
}
