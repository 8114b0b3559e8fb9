use thiserror::Error;

/// Errors from building or sampling noise trees. Evaluating a tree never fails.
#[derive(Error, Debug)]
pub enum NoiseError {
    #[error("unknown blend function: {0:?}")]
    UnknownBlend(String),
    #[error("invalid value for {name}: {value}")]
    InvalidParameter { name: &'static str, value: f64 },
    #[error("cannot sample an empty {width}x{height} grid")]
    EmptyGrid { width: usize, height: usize },
    #[error("a {width}x{height} grid does not fit in memory")]
    GridTooLarge { width: usize, height: usize },
    #[error("cannot fold an empty list of noise producers")]
    EmptyFold,
    #[error("malformed noise configuration: {0}")]
    Json(#[from] serde_json::Error),
}
