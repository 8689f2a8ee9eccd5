//! ASCII aquarium for the terminal.
//!
//! Fish, bubbles, jellyfish, crabs, a submarine and the odd shark swim over
//! a castle, sea plants and a sandy floor. Everything is redrawn on a fixed
//! tick and regenerated whenever the window changes size. Drawing goes
//! through [`draw`], which clips against the window and turns resize races
//! into dropped frames instead of errors.

pub mod app;
pub mod bounds;
pub mod config;
pub mod draw;
pub mod entity;
pub mod error;
pub mod generate;
pub mod logging;
pub mod render;
pub mod surface;

pub use app::{Aquarium, SkipReason, TickOutcome};
pub use bounds::Bounds;
pub use config::{Args, Counts, Settings};
pub use error::{SurfaceError, SurfaceResult};
pub use generate::Population;
pub use surface::{BufferSurface, Surface, TerminalSurface};
