use std::io;
use thiserror::Error;

/// Failures a [`Surface`](crate::surface::Surface) can raise while drawing.
///
/// Neither variant is fatal: the tick loop drops the current frame and tries
/// again on the next one.
#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("cell ({column}, {row}) is outside the terminal buffer")]
    OutOfRange { column: u16, row: u16 },
    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type SurfaceResult<T> = std::result::Result<T, SurfaceError>;
