//! Error types for histogram widget operations.

use std::io;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building, mounting or drawing a widget.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error (file operations, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// PNG encoding error.
    #[error("PNG encoding error: {0}")]
    PngEncoding(#[from] png::EncodingError),

    /// Configuration could not be parsed.
    #[error("Configuration error: {0}")]
    Config(#[from] serde_yaml_ng::Error),

    /// Invalid dimensions for a canvas or framebuffer.
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },

    /// A histogram needs at least one bin.
    #[error("Histogram requires at least one bin label")]
    EmptyBins,

    /// No page element carries the requested anchor id.
    #[error("Anchor element not found: #{0}")]
    AnchorNotFound(String),

    /// A value was supplied for a bin that does not exist.
    #[error("Bin index {index} out of range for {len} bins")]
    IndexOutOfRange {
        /// Offending index.
        index: usize,
        /// Number of bins.
        len: usize,
    },

    /// A value was NaN or infinite.
    #[error("Invalid value {value} for bin {index}")]
    InvalidValue {
        /// Bin index.
        index: usize,
        /// Offending value.
        value: f64,
    },

    /// Histogram bin edges were too few or not strictly increasing.
    #[error("Invalid bin edges: {0}")]
    InvalidBinEdges(String),

    /// The chart was used after `destroy()`.
    #[error("Chart has been destroyed")]
    ChartDestroyed,

    /// Rendering error.
    #[error("Rendering error: {0}")]
    Rendering(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidDimensions {
            width: 0,
            height: 100,
        };
        assert!(err.to_string().contains("Invalid dimensions"));
    }

    #[test]
    fn test_index_out_of_range() {
        let err = Error::IndexOutOfRange { index: 7, len: 3 };
        assert!(err.to_string().contains('7'));
        assert!(err.to_string().contains('3'));
    }

    #[test]
    fn test_anchor_not_found() {
        let err = Error::AnchorNotFound("elements".to_string());
        assert_eq!(err.to_string(), "Anchor element not found: #elements");
    }
}
