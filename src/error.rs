use thiserror::Error;

pub type Result<T> = std::result::Result<T, ModelError>;

#[derive(Error, Debug)]
pub enum ModelError {
    #[error("LEDs per edge must be zero or more, got {got}")]
    NegativeLedsPerEdge { got: i64 },

    #[error("{got} LEDs per edge is more than the model can hold")]
    TooManyLeds { got: i64 },

    #[error("frame rate must be positive, got {got}")]
    NonPositiveFrameRate { got: f32 },

    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    #[error("could not read configuration: {0}")]
    Io(#[from] std::io::Error),
}
