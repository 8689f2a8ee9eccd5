use super::{bounce_step, Span, Sprite, Throttle};
use crate::bounds::Bounds;
use crossterm::style::Color;

const BELL: &str = "(:)";
const TENTACLES: &str = " | ";
const COLOR: Color = Color::Magenta;

/// Highest row a jellyfish drifts up to.
pub const JELLY_TOP: i32 = 5;

#[derive(Clone, Debug)]
pub struct Jellyfish {
    pub x: i32,
    pub y: i32,
    moving_up: bool,
    throttle: Throttle,
}

impl Jellyfish {
    pub const PERIOD: u32 = 3;

    pub fn new(x: i32, y: i32, moving_up: bool) -> Self {
        Self {
            x,
            y,
            moving_up,
            throttle: Throttle::new(Self::PERIOD),
        }
    }

    pub fn moving_up(&self) -> bool {
        self.moving_up
    }

    pub fn lowest_row(bounds: Bounds) -> i32 {
        bounds.height - 10
    }

    /// Drifts one row every third tick, bouncing between row 5 and
    /// `height - 10`.
    pub fn step(&mut self, bounds: Bounds) {
        if !self.throttle.tick() {
            return;
        }
        bounce_step(
            &mut self.y,
            &mut self.moving_up,
            JELLY_TOP,
            Self::lowest_row(bounds),
        );
    }
}

impl Sprite for Jellyfish {
    fn spans(&self) -> Vec<Span> {
        vec![
            Span {
                x: self.x,
                y: self.y,
                text: BELL,
                color: COLOR,
            },
            Span {
                x: self.x,
                y: self.y + 1,
                text: TENTACLES,
                color: COLOR,
            },
        ]
    }
}
