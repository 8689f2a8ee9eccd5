use clap::Parser;
use std::time::Duration;

#[derive(Parser, Debug, Clone)]
#[command(name = "ascii_aquarium")]
#[command(about = "ASCII aquarium that swims in your terminal until killed", long_about = None)]
pub struct Args {
    /// Seed for a reproducible tank (random when omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Milliseconds between ticks
    #[arg(long, default_value_t = 50)]
    pub tick_ms: u64,
}

/// How many of each creature a fresh tank gets.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Counts {
    pub fish_per_heading: usize,
    pub bubbles: usize,
    pub jellyfish: usize,
    pub crabs: usize,
    pub starfish: usize,
}

impl Default for Counts {
    fn default() -> Self {
        Self {
            fish_per_heading: 10,
            bubbles: 30,
            jellyfish: 3,
            crabs: 2,
            starfish: 5,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Settings {
    pub tick: Duration,
    pub seed: Option<u64>,
    pub counts: Counts,
    /// The chest stops releasing bubbles once the tank holds this many.
    pub max_bubbles: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tick: Duration::from_millis(50),
            seed: None,
            counts: Counts::default(),
            max_bubbles: 150,
        }
    }
}

impl From<Args> for Settings {
    fn from(args: Args) -> Self {
        Self {
            tick: Duration::from_millis(args.tick_ms.max(1)),
            seed: args.seed,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_gives_the_defaults() {
        let settings = Settings::from(Args::parse_from(["ascii_aquarium"]));
        assert_eq!(settings.tick, Duration::from_millis(50));
        assert_eq!(settings.seed, None);
        assert_eq!(settings.counts, Counts::default());
    }

    #[test]
    fn flags_override_seed_and_tick() {
        let args = Args::parse_from(["ascii_aquarium", "--seed", "42", "--tick-ms", "0"]);
        let settings = Settings::from(args);
        assert_eq!(settings.seed, Some(42));
        assert_eq!(settings.tick, Duration::from_millis(1));
    }
}
