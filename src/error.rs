use thiserror::Error;

pub type PlotResult<T> = Result<T, PlotError>;

#[derive(Debug, Error)]
pub enum PlotError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("too many series to display: {count} (max is {max})")]
    TooManySeries { count: usize, max: usize },

    #[error("empty input: {0}")]
    EmptyInput(&'static str),

    #[error("resource unavailable: {0}")]
    ResourceUnavailable(String),

    #[error("backend failure: {0}")]
    Backend(String),

    #[error("invalid configuration: {0}")]
    Config(String),
}
