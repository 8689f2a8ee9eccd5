use super::{Span, Sprite};
use crate::bounds::Bounds;
use crossterm::style::Color;
use rand::Rng;

pub const CASTLE: [&str; 5] = [
    "      /^\\      ",
    "     |   |     ",
    "     |   |     ",
    "    _|___|_    ",
    "   [_______]   ",
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeaPlant {
    pub x: i32,
    /// Row of the lowest segment; the plant grows upward from here.
    pub y: i32,
    pub height: i32,
    pub color: Color,
}

impl Sprite for SeaPlant {
    fn spans(&self) -> Vec<Span> {
        (0..self.height)
            .map(|j| Span {
                x: self.x,
                y: self.y - j,
                text: if j % 2 == 0 { "(" } else { ")" },
                color: self.color,
            })
            .collect()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Castle {
    pub x: i32,
    pub y: i32,
}

impl Sprite for Castle {
    fn spans(&self) -> Vec<Span> {
        CASTLE
            .into_iter()
            .enumerate()
            .map(|(i, text)| Span {
                x: self.x,
                y: self.y + i as i32,
                text,
                color: Color::Grey,
            })
            .collect()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Starfish {
    pub x: i32,
    pub y: i32,
    pub color: Color,
}

impl Sprite for Starfish {
    fn spans(&self) -> Vec<Span> {
        vec![Span {
            x: self.x,
            y: self.y,
            text: "*",
            color: self.color,
        }]
    }
}

/// The `~` waterline and the sand below it, rolled once per window size.
#[derive(Clone, Debug)]
pub struct SeaFloor {
    pub top: i32,
    rows: Vec<String>,
}

impl SeaFloor {
    const WATERLINE: Color = Color::Blue;
    const SAND: Color = Color::DarkYellow;

    pub fn generate<R: Rng + ?Sized>(bounds: Bounds, rng: &mut R) -> Self {
        let top = bounds.visible_sea_floor_row();
        let width = bounds.width.max(0) as usize;

        let mut rows = vec!["~".repeat(width)];
        for _ in top + 1..bounds.height {
            let sand: String = (0..width)
                .map(|_| if rng.gen_range(0..3) > 0 { '\'' } else { '.' })
                .collect();
            rows.push(sand);
        }
        Self { top, rows }
    }

    /// (row, text, colour) for every line of the floor, top first.
    pub fn lines(&self) -> impl Iterator<Item = (i32, &str, Color)> + '_ {
        self.rows.iter().enumerate().map(move |(i, text)| {
            let color = if i == 0 { Self::WATERLINE } else { Self::SAND };
            (self.top + i as i32, text.as_str(), color)
        })
    }
}
