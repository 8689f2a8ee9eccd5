//! Bounds-safe drawing. Every write to a [`Surface`] goes through here.

use crate::bounds::Bounds;
use crate::error::{SurfaceError, SurfaceResult};
use crate::surface::Surface;
use crossterm::style::Color;

/// What a single draw call ended up doing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Paint {
    Written { column: u16, row: u16, chars: usize },
    Skipped,
}

/// Clips `text` placed at column `x` to `[0, width)`.
///
/// Returns the start column and the visible slice, or `None` when nothing of
/// the text would be on screen. Works on chars, not bytes.
pub fn clip_span(text: &str, x: i32, width: i32) -> Option<(u16, &str)> {
    let len = text.chars().count() as i32;
    if len == 0 || width <= 0 {
        return None;
    }

    let skip = if x < 0 { -x } else { 0 };
    if skip >= len {
        return None;
    }
    let start = x.max(0);
    let room = width - start;
    if room <= 0 {
        return None;
    }
    let take = (len - skip).min(room);

    let lo = byte_offset(text, skip as usize);
    let hi = byte_offset(text, (skip + take) as usize);
    Some((start as u16, &text[lo..hi]))
}

fn byte_offset(text: &str, chars: usize) -> usize {
    text.char_indices()
        .nth(chars)
        .map(|(i, _)| i)
        .unwrap_or(text.len())
}

/// Draws `text` at (`x`, `y`) in `color`, clipped to `bounds`.
///
/// Rows outside the snapshot are skipped. If the live surface turned out
/// smaller than the snapshot, or rejects the cursor position, the call is
/// skipped rather than failed. I/O errors are passed up.
pub fn draw_str<S: Surface + ?Sized>(
    surface: &mut S,
    bounds: Bounds,
    x: i32,
    y: i32,
    text: &str,
    color: Color,
) -> SurfaceResult<Paint> {
    if !bounds.contains_row(y) {
        return Ok(Paint::Skipped);
    }
    let Some((column, visible)) = clip_span(text, x, bounds.width) else {
        return Ok(Paint::Skipped);
    };
    let row = y as u16;

    let (live_cols, live_rows) = surface.size()?;
    if column >= live_cols || row >= live_rows {
        return Ok(Paint::Skipped);
    }
    match surface.move_to(column, row) {
        Ok(()) => {}
        Err(SurfaceError::OutOfRange { .. }) => return Ok(Paint::Skipped),
        Err(e) => return Err(e),
    }

    surface.set_fg(color)?;
    surface.write(visible)?;
    Ok(Paint::Written {
        column,
        row,
        chars: visible.chars().count(),
    })
}

/// Blanks `len` cells starting at (`x`, `y`).
pub fn clear_str<S: Surface + ?Sized>(
    surface: &mut S,
    bounds: Bounds,
    x: i32,
    y: i32,
    len: usize,
) -> SurfaceResult<Paint> {
    if len == 0 {
        return Ok(Paint::Skipped);
    }
    let blank = " ".repeat(len);
    draw_str(surface, bounds, x, y, &blank, Color::Reset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::BufferSurface;
    use rstest::rstest;

    #[rstest]
    #[case("<')))><", 0, 80, Some((0, "<')))><")))]
    #[case("<')))><", -3, 80, Some((0, "))><")))]
    #[case("<')))><", -7, 80, None)]
    #[case("<')))><", 76, 80, Some((76, "<'))")))]
    #[case("<')))><", 80, 80, None)]
    #[case("", 3, 80, None)]
    fn clips_to_the_window(
        #[case] text: &str,
        #[case] x: i32,
        #[case] width: i32,
        #[case] expected: Option<(u16, &str)>,
    ) {
        assert_eq!(clip_span(text, x, width), expected);
    }

    #[test]
    fn clipping_respects_multibyte_glyphs() {
        assert_eq!(clip_span("<°)))><", -1, 80), Some((0, "°)))><")));
        assert_eq!(clip_span("><(((°>", 4, 10), Some((4, "><(((°")));
    }

    #[test]
    fn left_clip_keeps_the_tail() {
        let glyph = "<(0)^^^>";
        for k in 1..glyph.len() as i32 {
            let (col, visible) = clip_span(glyph, -k, 40).unwrap();
            assert_eq!(col, 0);
            assert_eq!(visible, &glyph[k as usize..]);
        }
    }

    #[test]
    fn right_overrun_truncates_to_remaining_width() {
        let glyph = "<:::<";
        let width = 20;
        for start in 16..20 {
            let (_, visible) = clip_span(glyph, start, width).unwrap();
            assert_eq!(visible.len() as i32, width - start);
        }
    }

    #[test]
    fn draws_clipped_text() {
        let mut s = BufferSurface::new(10, 3);
        let bounds = Bounds::new(10, 3);
        let painted = draw_str(&mut s, bounds, -2, 1, "><>", Color::Cyan).unwrap();
        assert_eq!(
            painted,
            Paint::Written {
                column: 0,
                row: 1,
                chars: 1
            }
        );
        assert_eq!(s.row_text(1), ">         ");
    }

    #[test]
    fn rows_outside_bounds_are_skipped() {
        let mut s = BufferSurface::new(10, 3);
        let bounds = Bounds::new(10, 3);
        assert_eq!(
            draw_str(&mut s, bounds, 0, 3, "x", Color::Red).unwrap(),
            Paint::Skipped
        );
        assert_eq!(
            draw_str(&mut s, bounds, 0, -1, "x", Color::Red).unwrap(),
            Paint::Skipped
        );
    }

    #[test]
    fn stale_snapshot_is_skipped_not_failed() {
        let mut s = BufferSurface::new(10, 10);
        let stale = Bounds::new(40, 40);
        assert_eq!(
            draw_str(&mut s, stale, 20, 20, "ooo", Color::Blue).unwrap(),
            Paint::Skipped
        );

        // Size still reports 10x10 but the buffer already shrank.
        s.shrink_buffer(4, 4);
        assert_eq!(
            draw_str(&mut s, Bounds::new(10, 10), 6, 6, "ooo", Color::Blue).unwrap(),
            Paint::Skipped
        );
    }

    #[test]
    fn io_failures_surface_as_errors() {
        let mut s = BufferSurface::new(10, 10);
        s.set_failing(true);
        let res = draw_str(&mut s, Bounds::new(10, 10), 1, 1, "o", Color::Blue);
        assert!(matches!(res, Err(SurfaceError::Io(_))));
    }

    #[test]
    fn clear_paints_spaces() {
        let mut s = BufferSurface::new(6, 1);
        let bounds = Bounds::new(6, 1);
        draw_str(&mut s, bounds, 0, 0, "(\\_/)", Color::Red).unwrap();
        clear_str(&mut s, bounds, 1, 0, 3).unwrap();
        assert_eq!(s.row_text(0), "(   ) ");
    }
}
