/// Out-of-range or malformed sector parameters, rejected before any geometry is computed.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ParamsError {
    #[error("angle must be within 10..=360 degrees, got {0}")]
    Angle(f64),

    #[error("segment count must be within 2..=100, got {0}")]
    Segments(usize),

    #[error("radius must be within 1..=10, got {0}")]
    Radius(f64),
}

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Params(#[from] ParamsError),

    #[error("at least 2 samples per arc are required, got {0}")]
    Samples(usize),

    #[error("invalid log level: {0}")]
    LogLevel(String),
}
