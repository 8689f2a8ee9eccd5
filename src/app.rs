use crate::bounds::Bounds;
use crate::config::Settings;
use crate::error::{SurfaceError, SurfaceResult};
use crate::generate::Population;
use crate::render::{animate, draw_scenery, draw_sea_floor, draw_sprite, draw_tank};
use crate::surface::{Surface, TerminalSurface};
use anyhow::Context;
use rand::{rngs::StdRng, SeedableRng};
use std::slice;
use std::time::Instant;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkipReason {
    /// Width or height below one.
    Degenerate,
    OutOfBounds,
    Io,
}

impl From<&SurfaceError> for SkipReason {
    fn from(e: &SurfaceError) -> Self {
        match e {
            SurfaceError::OutOfRange { .. } => SkipReason::OutOfBounds,
            SurfaceError::Io(_) => SkipReason::Io,
        }
    }
}

/// What one pass of the loop did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// Window size changed (or first tick): fresh tank, full redraw.
    Regenerated,
    /// Everything moved one step.
    Stepped,
    /// Frame dropped; the next tick starts over.
    Skipped(SkipReason),
}

pub struct Aquarium {
    settings: Settings,
    seed: u64,
    rng: StdRng,
    bounds: Option<Bounds>,
    population: Option<Population>,
    sea_floor_drawn: bool,
}

impl Aquarium {
    /// Seeds the tank from `settings.seed`, or randomly when that is unset.
    pub fn new(settings: Settings) -> Self {
        let seed = settings.seed.unwrap_or_else(rand::random);
        Self {
            settings,
            seed,
            rng: StdRng::seed_from_u64(seed),
            bounds: None,
            population: None,
            sea_floor_drawn: false,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn population(&self) -> Option<&Population> {
        self.population.as_ref()
    }

    pub fn bounds(&self) -> Option<Bounds> {
        self.bounds
    }

    pub fn sea_floor_drawn(&self) -> bool {
        self.sea_floor_drawn
    }

    /// Runs one tick against `surface`. Never fails: surface errors drop the
    /// frame and are reported through the outcome.
    pub fn tick<S: Surface + ?Sized>(&mut self, surface: &mut S) -> TickOutcome {
        let bounds = match surface.size() {
            Ok(size) => Bounds::from_size(size),
            Err(e) => return self.skip(&e),
        };
        if bounds.is_degenerate() {
            log::debug!("dropping frame: {}x{} window", bounds.width, bounds.height);
            return TickOutcome::Skipped(SkipReason::Degenerate);
        }

        let result = if self.bounds != Some(bounds) || self.population.is_none() {
            self.regenerate(bounds);
            self.redraw(surface, bounds).map(|()| TickOutcome::Regenerated)
        } else {
            self.step(surface, bounds).map(|()| TickOutcome::Stepped)
        };

        match result.and_then(|outcome| surface.flush().map(|()| outcome)) {
            Ok(outcome) => outcome,
            Err(e) => self.skip(&e),
        }
    }

    fn skip(&self, e: &SurfaceError) -> TickOutcome {
        log::debug!("dropping frame: {e}");
        TickOutcome::Skipped(SkipReason::from(e))
    }

    fn regenerate(&mut self, bounds: Bounds) {
        log::debug!("new tank for {}x{}", bounds.width, bounds.height);
        self.population = Some(Population::generate(
            bounds,
            &self.settings.counts,
            &mut self.rng,
        ));
        self.bounds = Some(bounds);
        self.sea_floor_drawn = false;
    }

    fn redraw<S: Surface + ?Sized>(&mut self, surface: &mut S, bounds: Bounds) -> SurfaceResult<()> {
        let Some(pop) = self.population.as_ref() else {
            return Ok(());
        };
        draw_tank(surface, bounds, pop)?;
        self.sea_floor_drawn = true;
        Ok(())
    }

    fn step<S: Surface + ?Sized>(&mut self, surface: &mut S, bounds: Bounds) -> SurfaceResult<()> {
        let Self {
            settings,
            rng,
            population,
            sea_floor_drawn,
            ..
        } = self;
        let Some(pop) = population.as_mut() else {
            return Ok(());
        };

        // A failed full redraw may have left the floor unpainted.
        if !*sea_floor_drawn {
            draw_sea_floor(surface, bounds, &pop.sea_floor)?;
            *sea_floor_drawn = true;
        }

        animate(surface, bounds, &mut pop.fish_left, |f| f.step(bounds))?;
        animate(surface, bounds, &mut pop.fish_right, |f| f.step(bounds))?;
        animate(surface, bounds, &mut pop.bubbles, |b| b.rise(bounds))?;
        animate(surface, bounds, &mut pop.jellyfish, |j| j.step(bounds))?;
        animate(surface, bounds, &mut pop.crabs, |c| c.step(bounds))?;
        animate(surface, bounds, slice::from_mut(&mut pop.submarine), |s| {
            s.step(bounds)
        })?;
        animate(surface, bounds, slice::from_mut(&mut pop.shark), |s| {
            s.step(bounds, rng)
        })?;

        // After the bubble pass, so new bubbles first move next tick.
        pop.chest.step(rng, &mut pop.bubbles, settings.max_bubbles);
        draw_sprite(surface, bounds, &pop.chest)?;

        draw_scenery(surface, bounds, pop)
    }
}

/// Runs the aquarium on the real terminal until the process is killed.
pub fn run(settings: Settings) -> anyhow::Result<()> {
    let mut surface = TerminalSurface::begin().context("could not prepare the terminal")?;
    surface
        .set_cursor_visible(false)
        .context("could not hide the cursor")?;
    let tick = settings.tick;
    let mut aquarium = Aquarium::new(settings);
    log::info!("seed {}", aquarium.seed());

    loop {
        let started = Instant::now();
        aquarium.tick(&mut surface);

        let spent = started.elapsed();
        if spent < tick {
            std::thread::sleep(tick - spent);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Counts;
    use crate::surface::BufferSurface;

    fn is_sand(row: &str) -> bool {
        row.chars().all(|c| c == '\'' || c == '.')
    }

    fn aquarium() -> Aquarium {
        Aquarium::new(Settings {
            seed: Some(7),
            ..Settings::default()
        })
    }

    #[test]
    fn seed_comes_from_the_settings() {
        assert_eq!(aquarium().seed(), 7);
    }

    #[test]
    fn chest_bubbles_first_rise_on_the_next_tick() {
        // No starting bubbles, so anything in the list came out of the chest.
        let mut aq = Aquarium::new(Settings {
            seed: Some(31),
            counts: Counts {
                bubbles: 0,
                ..Counts::default()
            },
            ..Settings::default()
        });
        let mut s = BufferSurface::new(80, 24);
        let bounds = Bounds::new(80, 24);

        assert_eq!(aq.tick(&mut s), TickOutcome::Regenerated);
        let mut ticks = 0;
        while aq.population().map_or(true, |p| p.bubbles.is_empty()) {
            assert_eq!(aq.tick(&mut s), TickOutcome::Stepped);
            ticks += 1;
            assert!(ticks < 10_000, "chest never opened");
        }

        let pop = aq.population().unwrap();
        let (chest_x, born) = (pop.chest.x, pop.bubbles[0].clone());
        assert_eq!(pop.bubbles.len(), 1);
        assert_eq!((born.x, born.y), (chest_x + 3, bounds.sea_floor_row()));

        assert_eq!(aq.tick(&mut s), TickOutcome::Stepped);
        let risen = aq.population().unwrap().bubbles[0].clone();
        assert_eq!((risen.x, risen.y), (chest_x + 3, bounds.sea_floor_row() - 1));
    }

    #[test]
    fn first_tick_builds_and_paints_the_tank() {
        let mut s = BufferSurface::new(80, 24);
        let mut aq = aquarium();
        assert_eq!(aq.tick(&mut s), TickOutcome::Regenerated);
        assert!(aq.sea_floor_drawn());
        assert_eq!(s.clears(), 1);
        assert_eq!(s.flushes(), 1);
        assert!(s.row_text(17).contains('~'));
        assert!(is_sand(&s.row_text(23)));
    }

    #[test]
    fn later_ticks_step_without_clearing() {
        let mut s = BufferSurface::new(80, 24);
        let mut aq = aquarium();
        aq.tick(&mut s);
        for _ in 0..10 {
            assert_eq!(aq.tick(&mut s), TickOutcome::Stepped);
        }
        assert_eq!(s.clears(), 1);
    }

    #[test]
    fn degenerate_window_is_skipped_untouched() {
        let mut s = BufferSurface::new(0, 24);
        let mut aq = aquarium();
        assert_eq!(
            aq.tick(&mut s),
            TickOutcome::Skipped(SkipReason::Degenerate)
        );
        assert!(aq.population().is_none());
        assert_eq!(s.flushes(), 0);
    }

    #[test]
    fn size_query_failure_is_a_skip() {
        struct Gone;
        impl Surface for Gone {
            fn size(&self) -> SurfaceResult<(u16, u16)> {
                Err(std::io::Error::new(std::io::ErrorKind::Other, "no tty").into())
            }
            fn move_to(&mut self, _: u16, _: u16) -> SurfaceResult<()> {
                unreachable!()
            }
            fn set_fg(&mut self, _: crossterm::style::Color) -> SurfaceResult<()> {
                unreachable!()
            }
            fn write(&mut self, _: &str) -> SurfaceResult<()> {
                unreachable!()
            }
            fn clear(&mut self) -> SurfaceResult<()> {
                unreachable!()
            }
            fn set_cursor_visible(&mut self, _: bool) -> SurfaceResult<()> {
                unreachable!()
            }
            fn flush(&mut self) -> SurfaceResult<()> {
                unreachable!()
            }
        }

        let mut aq = aquarium();
        assert_eq!(aq.tick(&mut Gone), TickOutcome::Skipped(SkipReason::Io));
    }

    #[test]
    fn io_failure_drops_the_frame_only() {
        let mut s = BufferSurface::new(80, 24);
        let mut aq = aquarium();
        aq.tick(&mut s);

        s.set_failing(true);
        assert_eq!(aq.tick(&mut s), TickOutcome::Skipped(SkipReason::Io));

        s.set_failing(false);
        assert_eq!(aq.tick(&mut s), TickOutcome::Stepped);
    }

    #[test]
    fn resize_regenerates() {
        let mut s = BufferSurface::new(80, 24);
        let mut aq = aquarium();
        aq.tick(&mut s);
        aq.tick(&mut s);

        s.resize(100, 30);
        assert_eq!(aq.tick(&mut s), TickOutcome::Regenerated);
        assert_eq!(aq.bounds(), Some(Bounds::new(100, 30)));
        assert!(s.row_text(23).contains('~'));
        assert!(is_sand(&s.row_text(29)));
    }
}
