use super::{pick, Span, Sprite};
use crate::bounds::{Bounds, BORDER_BUFFER};
use crossterm::style::Color;
use rand::Rng;

const BODY: [&str; 8] = [
    "          /|            ",
    "         / |            ",
    "        /  |            ",
    "  _____/   |__________  ",
    " /                    \\ ",
    "/   O  |||             \\",
    "\\_____________________  \\",
    "                      \\_/",
];
const BODY_COLORS: [Color; 8] = [
    Color::Grey,
    Color::Grey,
    Color::Grey,
    Color::DarkGrey,
    Color::DarkGrey,
    Color::DarkGrey,
    Color::DarkGrey,
    Color::Grey,
];

/// One chance in this many per dormant tick of a shark showing up.
const APPEAR_ODDS: u32 = 200;
const SPEED: i32 = 2;
/// Once the shark's left edge is past this column it is fully gone.
const EXIT_COLUMN: i32 = -30;

#[derive(Clone, Debug)]
pub struct Shark {
    pub x: i32,
    pub y: i32,
    active: bool,
}

impl Shark {
    pub fn new(x: i32, y: i32) -> Self {
        Self {
            x,
            y,
            active: false,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn step<R: Rng + ?Sized>(&mut self, bounds: Bounds, rng: &mut R) {
        if !self.active {
            if rng.gen_range(0..APPEAR_ODDS) == 0 {
                self.active = true;
                self.x = bounds.width;
                self.y = pick(rng, BORDER_BUFFER, bounds.height - 12);
                log::trace!("shark entering on row {}", self.y);
            }
            return;
        }

        self.x -= SPEED;
        if self.x < EXIT_COLUMN {
            self.active = false;
        }
    }
}

impl Sprite for Shark {
    fn spans(&self) -> Vec<Span> {
        if !self.active {
            return Vec::new();
        }
        BODY.into_iter()
            .zip(BODY_COLORS)
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
