use thiserror::Error;

use crate::scan::ScanState;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Invalid frame dimensions: {width}x{height}")]
    InvalidFrame { width: u32, height: u32 },

    #[error("Pixel buffer length {actual} does not match expected RGBA length {expected}")]
    BufferSizeMismatch { expected: usize, actual: usize },

    #[error("No frame could be captured")]
    CaptureUnavailable,

    #[error("Accelerated backend error: {0}")]
    AcceleratedBackend(String),

    #[error("Scan already in progress (state: {state:?})")]
    ScanInProgress { state: ScanState },
}

pub type Result<T> = std::result::Result<T, ScanError>;
