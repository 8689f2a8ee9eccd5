use super::{Span, Sprite, Throttle};
use crate::bounds::Bounds;
use crossterm::style::Color;

const HULL: [&str; 4] = ["   _|_   ", "  |___|  ", "<|_____|>", "  (o)(o) "];
const HULL_COLORS: [Color; 4] = [Color::Cyan, Color::Yellow, Color::Yellow, Color::DarkGrey];

/// Column the submarine re-enters from after leaving on the right.
pub const SUB_REENTRY: i32 = -15;

#[derive(Clone, Debug)]
pub struct Submarine {
    pub x: i32,
    pub y: i32,
    throttle: Throttle,
}

impl Submarine {
    pub const PERIOD: u32 = 5;

    pub fn new(x: i32, y: i32) -> Self {
        Self {
            x,
            y,
            throttle: Throttle::new(Self::PERIOD),
        }
    }

    /// Cruises right one column every fifth tick and wraps back in from the
    /// left once it passes the window edge.
    pub fn step(&mut self, bounds: Bounds) {
        if !self.throttle.tick() {
            return;
        }
        self.x += 1;
        if self.x > bounds.width {
            self.x = SUB_REENTRY;
        }
    }
}

impl Sprite for Submarine {
    fn spans(&self) -> Vec<Span> {
        HULL.into_iter()
            .zip(HULL_COLORS)
            .enumerate()
            .map(|(i, (text, color))| Span {
                x: self.x,
                y: self.y + i as i32,
                text,
                color,
            })
            .collect()
    }
}
