// Error types for the two facades. Window errors are fatal-ish (init
// kills the program, update ends the run); scene errors are the
// per-cell / per-iteration recoverable kind.

use crate::scene::SceneError;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Creating the window failed; the demo exits with status 1.
    #[error("window init error: {0}")]
    WindowInit(String),

    /// Pushing a frame to the window failed.
    #[error("window update error: {0}")]
    WindowUpdate(String),

    #[error(transparent)]
    Scene(#[from] SceneError),
}
