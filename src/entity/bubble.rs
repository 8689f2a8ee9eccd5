use super::{Span, Sprite};
use crate::bounds::{Bounds, BORDER_BUFFER};
use crossterm::style::Color;

pub const BUBBLE_GLYPHS: [&str; 3] = ["o", "oo", "ooo"];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bubble {
    pub x: i32,
    pub y: i32,
    pub glyph: &'static str,
    pub color: Color,
}

impl Bubble {
    pub fn new(x: i32, y: i32, glyph: &'static str, color: Color) -> Self {
        Self { x, y, glyph, color }
    }

    /// Rises one row; above row 2 it starts over just above the sea floor.
    pub fn rise(&mut self, bounds: Bounds) {
        self.y -= 1;
        if self.y < BORDER_BUFFER {
            self.y = bounds.bubble_reset_row().max(BORDER_BUFFER);
        }
    }
}

impl Sprite for Bubble {
    fn spans(&self) -> Vec<Span> {
        vec![Span {
            x: self.x,
            y: self.y,
            text: self.glyph,
            color: self.color,
        }]
    }
}
