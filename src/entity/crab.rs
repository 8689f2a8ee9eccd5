use super::{bounce_step, Span, Sprite, Throttle};
use crate::bounds::{Bounds, BORDER_BUFFER};
use crossterm::style::Color;

const GLYPH: &str = "(\\_/)";

#[derive(Clone, Debug)]
pub struct Crab {
    pub x: i32,
    pub y: i32,
    moving_left: bool,
    throttle: Throttle,
}

impl Crab {
    pub const PERIOD: u32 = 4;

    pub fn new(x: i32, y: i32, moving_left: bool) -> Self {
        Self {
            x,
            y,
            moving_left,
            throttle: Throttle::new(Self::PERIOD),
        }
    }

    pub fn moving_left(&self) -> bool {
        self.moving_left
    }

    pub fn rightmost_column(bounds: Bounds) -> i32 {
        bounds.width - 7
    }

    /// Scuttles one column every fourth tick between column 2 and
    /// `width - 7`.
    pub fn step(&mut self, bounds: Bounds) {
        if !self.throttle.tick() {
            return;
        }
        bounce_step(
            &mut self.x,
            &mut self.moving_left,
            BORDER_BUFFER,
            Self::rightmost_column(bounds),
        );
    }
}

impl Sprite for Crab {
    fn spans(&self) -> Vec<Span> {
        vec![Span {
            x: self.x,
            y: self.y,
            text: GLYPH,
            color: Color::Red,
        }]
    }
}
