use thiserror::Error;

/// Failures raised while constructing geometry. Most settings degrade
/// silently to empty output; these are the cases where a construction step
/// depends on a point that does not exist.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    #[error("expected {expected} intersection(s) but found {found}")]
    IntersectionCount { expected: usize, found: usize },

    #[error("point index {index} out of range for {len} constructed point(s)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("no point named '{0}' in the construction ledger")]
    UnknownPoint(String),

    #[error("boolean operations need closed paths")]
    OpenPath,
}

#[derive(Debug, Error)]
pub enum SketchError {
    #[error("sketch drawn before setup()")]
    NotReady,

    #[error("svg generation error: {0}")]
    SvgGenerationError(String),

    #[error(transparent)]
    Geometry(#[from] GeometryError),
}
