use super::{bounce_step, Span, Sprite};
use crate::bounds::{Bounds, BORDER_BUFFER};
use crossterm::style::Color;

pub const FISH_LEFT: [&str; 7] = [
    "<')))><",
    "<====>",
    "  _><<_ ",
    "<(0)^^^>",
    "<°)))><",
    "><>",
    "<:::<",
];

pub const FISH_RIGHT: [&str; 7] = [
    "><((('>",
    "<====>",
    " _>><_  ",
    "<^^^(0)>",
    "><(((°>",
    "<><",
    ">:::>",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Heading {
    Left,
    Right,
}

impl Heading {
    pub fn glyphs(self) -> &'static [&'static str] {
        match self {
            Heading::Left => &FISH_LEFT,
            Heading::Right => &FISH_RIGHT,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Fish {
    pub x: i32,
    pub y: i32,
    pub glyph: &'static str,
    pub color: Color,
    pub speed: i32,
    pub bob_range: i32,
    pub heading: Heading,
    bob_up: bool,
}

impl Fish {
    pub fn new(
        x: i32,
        y: i32,
        glyph: &'static str,
        color: Color,
        speed: i32,
        bob_range: i32,
        heading: Heading,
    ) -> Self {
        Self {
            x,
            y,
            glyph,
            color,
            speed,
            bob_range,
            heading,
            bob_up: true,
        }
    }

    pub fn bobbing_up(&self) -> bool {
        self.bob_up
    }

    /// Swims one tick: horizontal wrap inside `[2, width - 12]`, vertical bob
    /// inside `[bob_range, height - 8 - bob_range]`.
    pub fn step(&mut self, bounds: Bounds) {
        let right = bounds.fish_right_limit();
        match self.heading {
            Heading::Left => {
                self.x -= self.speed;
                if self.x < BORDER_BUFFER {
                    self.x = right;
                }
            }
            Heading::Right => {
                self.x += self.speed;
                if self.x > right {
                    self.x = BORDER_BUFFER;
                }
            }
        }

        let floor = bounds.fish_bob_floor(self.bob_range);
        bounce_step(&mut self.y, &mut self.bob_up, self.bob_range, floor);
    }
}

impl Sprite for Fish {
    fn spans(&self) -> Vec<Span> {
        vec![Span {
            x: self.x,
            y: self.y,
            text: self.glyph,
            color: self.color,
        }]
    }
}
