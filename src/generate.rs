//! Builds fresh populations sized to the current window.

use crate::bounds::{Bounds, BORDER_BUFFER};
use crate::config::Counts;
use crate::entity::{
    pick, random_color, Bubble, Castle, Crab, Fish, Heading, Jellyfish, SeaFloor, SeaPlant,
    Shark, Starfish, Submarine, TreasureChest, BUBBLE_GLYPHS,
};
use crossterm::style::Color;
use rand::Rng;

const PLANT_COLORS: [Color; 3] = [Color::Green, Color::DarkGreen, Color::DarkCyan];

/// Every entity in the tank. Replaced wholesale whenever the window size
/// changes.
#[derive(Clone, Debug)]
pub struct Population {
    pub fish_left: Vec<Fish>,
    pub fish_right: Vec<Fish>,
    pub bubbles: Vec<Bubble>,
    pub plants: Vec<SeaPlant>,
    pub castle: Castle,
    pub jellyfish: Vec<Jellyfish>,
    pub crabs: Vec<Crab>,
    pub chest: TreasureChest,
    pub submarine: Submarine,
    pub starfish: Vec<Starfish>,
    pub shark: Shark,
    pub sea_floor: SeaFloor,
}

impl Population {
    pub fn generate<R: Rng + ?Sized>(bounds: Bounds, counts: &Counts, rng: &mut R) -> Self {
        Self {
            fish_left: fishes(bounds, Heading::Left, counts.fish_per_heading, rng),
            fish_right: fishes(bounds, Heading::Right, counts.fish_per_heading, rng),
            bubbles: bubbles(bounds, counts.bubbles, rng),
            plants: sea_plants(bounds, rng),
            castle: castle(bounds, rng),
            jellyfish: jellyfish(bounds, counts.jellyfish, rng),
            crabs: crabs(bounds, counts.crabs, rng),
            chest: treasure_chest(bounds, rng),
            submarine: Submarine::new(-10, 3),
            starfish: starfish(bounds, counts.starfish, rng),
            shark: Shark::new(bounds.width, 10),
            sea_floor: SeaFloor::generate(bounds, rng),
        }
    }
}

/// Fish start somewhere in `[2, width - 12]` and inside their own bob band.
pub fn fishes<R: Rng + ?Sized>(
    bounds: Bounds,
    heading: Heading,
    count: usize,
    rng: &mut R,
) -> Vec<Fish> {
    let glyphs = heading.glyphs();
    (0..count)
        .map(|_| {
            let bob_range = rng.gen_range(1..4);
            let speed = rng.gen_range(1..4);
            let x = pick(rng, BORDER_BUFFER, bounds.fish_right_limit() + 1);
            let top = bob_range.max(BORDER_BUFFER);
            let y = pick(rng, top, bounds.fish_bob_floor(bob_range) + 1);
            let glyph = glyphs[rng.gen_range(0..glyphs.len())];
            Fish::new(x, y, glyph, random_color(rng), speed, bob_range, heading)
        })
        .collect()
}

pub fn bubbles<R: Rng + ?Sized>(bounds: Bounds, count: usize, rng: &mut R) -> Vec<Bubble> {
    let lowest = bounds.bubble_reset_row().max(BORDER_BUFFER);
    (0..count)
        .map(|_| {
            let x = pick(rng, BORDER_BUFFER, bounds.width - 2);
            let y = pick(rng, BORDER_BUFFER, lowest);
            let glyph = BUBBLE_GLYPHS[rng.gen_range(0..BUBBLE_GLYPHS.len())];
            Bubble::new(x, y, glyph, random_color(rng))
        })
        .collect()
}

/// One plant every 2 to 9 columns across the whole width.
pub fn sea_plants<R: Rng + ?Sized>(bounds: Bounds, rng: &mut R) -> Vec<SeaPlant> {
    let y = bounds.sea_floor_row();
    let mut plants = Vec::new();
    let mut x = 0;
    while x < bounds.width {
        plants.push(SeaPlant {
            x,
            y,
            height: rng.gen_range(2..7),
            color: PLANT_COLORS[rng.gen_range(0..PLANT_COLORS.len())],
        });
        x += rng.gen_range(2..10);
    }
    plants
}

/// Sits on the sea floor.
pub fn castle<R: Rng + ?Sized>(bounds: Bounds, rng: &mut R) -> Castle {
    Castle {
        x: pick(rng, 10, bounds.width - 20),
        y: bounds.sea_floor_row() - 5,
    }
}

pub fn jellyfish<R: Rng + ?Sized>(bounds: Bounds, count: usize, rng: &mut R) -> Vec<Jellyfish> {
    (0..count)
        .map(|_| {
            let x = pick(rng, 5, bounds.width - 5);
            let y = pick(rng, 5, Jellyfish::lowest_row(bounds));
            Jellyfish::new(x, y, rng.gen_bool(0.5))
        })
        .collect()
}

pub fn crabs<R: Rng + ?Sized>(bounds: Bounds, count: usize, rng: &mut R) -> Vec<Crab> {
    let y = bounds.sea_floor_row();
    (0..count)
        .map(|_| {
            let x = pick(rng, BORDER_BUFFER, bounds.width - 10);
            Crab::new(x, y, rng.gen_bool(0.5))
        })
        .collect()
}

pub fn treasure_chest<R: Rng + ?Sized>(bounds: Bounds, rng: &mut R) -> TreasureChest {
    TreasureChest::new(pick(rng, 10, bounds.width - 20), bounds.sea_floor_row())
}

/// Starfish lie in the sand, below the waterline.
pub fn starfish<R: Rng + ?Sized>(bounds: Bounds, count: usize, rng: &mut R) -> Vec<Starfish> {
    let sand_top = bounds.sea_floor_row() + 1;
    (0..count)
        .map(|_| Starfish {
            x: pick(rng, 5, bounds.width - 5),
            y: pick(rng, sand_top, bounds.height - 1),
            color: random_color(rng),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::FOREGROUND_COLORS;
    use rand::{rngs::StdRng, SeedableRng};

    fn rng() -> StdRng {
        StdRng::seed_from_u64(0xA11CE)
    }

    #[test]
    fn population_sizes_follow_counts() {
        let bounds = Bounds::new(100, 40);
        let pop = Population::generate(bounds, &Counts::default(), &mut rng());
        assert_eq!(pop.fish_left.len(), 10);
        assert_eq!(pop.fish_right.len(), 10);
        assert_eq!(pop.bubbles.len(), 30);
        assert_eq!(pop.jellyfish.len(), 3);
        assert_eq!(pop.crabs.len(), 2);
        assert_eq!(pop.starfish.len(), 5);
        assert!(!pop.plants.is_empty());
        assert!(!pop.shark.is_active());
        assert_eq!((pop.submarine.x, pop.submarine.y), (-10, 3));
    }

    #[test]
    fn fish_start_inside_their_lanes() {
        let bounds = Bounds::new(90, 30);
        let mut rng = rng();
        for heading in [Heading::Left, Heading::Right] {
            for f in fishes(bounds, heading, 50, &mut rng) {
                assert!((2..=78).contains(&f.x), "x = {}", f.x);
                assert!(f.y >= f.bob_range.max(2));
                assert!(f.y <= bounds.fish_bob_floor(f.bob_range));
                assert!((1..=3).contains(&f.speed));
                assert!(heading.glyphs().contains(&f.glyph));
                assert!(FOREGROUND_COLORS.contains(&f.color));
            }
        }
    }

    #[test]
    fn bubbles_start_above_the_floor() {
        let bounds = Bounds::new(60, 30);
        for b in bubbles(bounds, 100, &mut rng()) {
            assert!((2..58).contains(&b.x));
            assert!(b.y >= 2 && b.y < bounds.sea_floor_row());
        }
    }

    #[test]
    fn plants_span_the_width_on_the_floor() {
        let bounds = Bounds::new(80, 24);
        let plants = sea_plants(bounds, &mut rng());
        assert_eq!(plants[0].x, 0);
        for pair in plants.windows(2) {
            let gap = pair[1].x - pair[0].x;
            assert!((2..10).contains(&gap));
        }
        for p in &plants {
            assert!(p.x < 80);
            assert_eq!(p.y, 17);
            assert!((2..7).contains(&p.height));
        }
    }

    #[test]
    fn bottom_dwellers_sit_on_or_below_the_floor() {
        let bounds = Bounds::new(80, 24);
        let mut rng = rng();
        for c in crabs(bounds, 10, &mut rng) {
            assert_eq!(c.y, 17);
            assert!((2..70).contains(&c.x));
        }
        for s in starfish(bounds, 20, &mut rng) {
            assert!((18..23).contains(&s.y));
        }
        let chest = treasure_chest(bounds, &mut rng);
        assert_eq!(chest.y, 17);
        assert_eq!(castle(bounds, &mut rng).y, 12);
    }

    #[test]
    fn narrow_windows_do_not_panic() {
        let bounds = Bounds::new(8, 6);
        let pop = Population::generate(bounds, &Counts::default(), &mut rng());
        assert_eq!(pop.castle.x, 10);
        assert_eq!(pop.chest.x, 10);
    }
}
