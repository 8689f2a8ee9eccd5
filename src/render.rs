use crate::bounds::Bounds;
use crate::draw::{clear_str, draw_str};
use crate::entity::{SeaFloor, Sprite};
use crate::error::SurfaceResult;
use crate::generate::Population;
use crate::surface::Surface;

pub fn draw_sprite<S, T>(surface: &mut S, bounds: Bounds, sprite: &T) -> SurfaceResult<()>
where
    S: Surface + ?Sized,
    T: Sprite + ?Sized,
{
    for span in sprite.spans() {
        draw_str(surface, bounds, span.x, span.y, span.text, span.color)?;
    }
    Ok(())
}

/// Blanks the cells the sprite covers right now.
pub fn erase_sprite<S, T>(surface: &mut S, bounds: Bounds, sprite: &T) -> SurfaceResult<()>
where
    S: Surface + ?Sized,
    T: Sprite + ?Sized,
{
    for span in sprite.spans() {
        clear_str(surface, bounds, span.x, span.y, span.text.chars().count())?;
    }
    Ok(())
}

pub fn draw_all<S, T>(surface: &mut S, bounds: Bounds, sprites: &[T]) -> SurfaceResult<()>
where
    S: Surface + ?Sized,
    T: Sprite,
{
    for sprite in sprites {
        draw_sprite(surface, bounds, sprite)?;
    }
    Ok(())
}

/// Erase, step, draw for every sprite in `sprites`.
pub fn animate<S, T, F>(
    surface: &mut S,
    bounds: Bounds,
    sprites: &mut [T],
    mut step: F,
) -> SurfaceResult<()>
where
    S: Surface + ?Sized,
    T: Sprite,
    F: FnMut(&mut T),
{
    for sprite in sprites {
        erase_sprite(surface, bounds, sprite)?;
        step(sprite);
        draw_sprite(surface, bounds, sprite)?;
    }
    Ok(())
}

pub fn draw_sea_floor<S: Surface + ?Sized>(
    surface: &mut S,
    bounds: Bounds,
    floor: &SeaFloor,
) -> SurfaceResult<()> {
    for (row, text, color) in floor.lines() {
        draw_str(surface, bounds, 0, row, text, color)?;
    }
    Ok(())
}

/// Castle, plants and starfish. They never move, so they are simply painted
/// again on top of whatever swam through them.
pub fn draw_scenery<S: Surface + ?Sized>(
    surface: &mut S,
    bounds: Bounds,
    pop: &Population,
) -> SurfaceResult<()> {
    draw_sprite(surface, bounds, &pop.castle)?;
    draw_all(surface, bounds, &pop.plants)?;
    draw_all(surface, bounds, &pop.starfish)
}

/// Clears the screen and paints the whole tank, back to front.
pub fn draw_tank<S: Surface + ?Sized>(
    surface: &mut S,
    bounds: Bounds,
    pop: &Population,
) -> SurfaceResult<()> {
    surface.clear()?;
    draw_all(surface, bounds, &pop.fish_left)?;
    draw_all(surface, bounds, &pop.fish_right)?;
    draw_all(surface, bounds, &pop.bubbles)?;
    draw_sea_floor(surface, bounds, &pop.sea_floor)?;
    draw_sprite(surface, bounds, &pop.castle)?;
    draw_all(surface, bounds, &pop.plants)?;
    draw_all(surface, bounds, &pop.jellyfish)?;
    draw_all(surface, bounds, &pop.crabs)?;
    draw_sprite(surface, bounds, &pop.chest)?;
    draw_sprite(surface, bounds, &pop.submarine)?;
    draw_all(surface, bounds, &pop.starfish)?;
    draw_sprite(surface, bounds, &pop.shark)
}
