use thiserror::Error;

/// Renderer-level failures surfaced to the frontends.
///
/// Context loss is terminal for the renderer but must never unwind across
/// the frame loop; frontends report it once and degrade to an inert view.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("no GPU surface or adapter available")]
    ContextUnavailable,
    #[error("shader compilation failed: {0}")]
    ShaderCompileFailed(String),
    #[error("point upload failed: {0}")]
    UploadFailed(#[from] PointDataError),
}

/// Problems with an incoming point byte buffer.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PointDataError {
    #[error("buffer length {0} is not a whole number of (x, y, energy) triples")]
    Malformed(usize),
    #[error("dataset has {0} points, maximum is {1}")]
    TooManyPoints(usize, usize),
}
