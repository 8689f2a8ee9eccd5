/// Leftmost column and topmost row wrapped creatures are kept inside.
pub const BORDER_BUFFER: i32 = 2;
/// Fish never start or wrap further right than `width - FISH_BUFFER`.
pub const FISH_BUFFER: i32 = 12;
/// Distance of the sea floor line from the bottom of the window.
pub const BOTTOM_BUFFER: i32 = 7;

/// Snapshot of the terminal size taken once per tick.
///
/// Signed so that coordinate math for sprites partly off-screen never has to
/// worry about underflow.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bounds {
    pub width: i32,
    pub height: i32,
}

impl Bounds {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    pub fn from_size((cols, rows): (u16, u16)) -> Self {
        Self::new(cols as i32, rows as i32)
    }

    /// True when there is nothing sensible to draw into.
    pub fn is_degenerate(&self) -> bool {
        self.width < 1 || self.height < 1
    }

    pub fn contains_row(&self, row: i32) -> bool {
        row >= 0 && row < self.height
    }

    /// Row of the `~` line.
    pub fn sea_floor_row(&self) -> i32 {
        self.height - BOTTOM_BUFFER
    }

    /// Same as [`Bounds::sea_floor_row`] but kept on screen for tiny windows.
    pub fn visible_sea_floor_row(&self) -> i32 {
        self.sea_floor_row().min(self.height - 1).max(0)
    }

    /// Row a bubble respawns on after reaching the surface.
    pub fn bubble_reset_row(&self) -> i32 {
        self.sea_floor_row() - 1
    }

    pub fn fish_right_limit(&self) -> i32 {
        self.width - FISH_BUFFER
    }

    /// Lowest row a fish with the given bob range may reach.
    pub fn fish_bob_floor(&self, bob_range: i32) -> i32 {
        self.height - 8 - bob_range
    }
}
