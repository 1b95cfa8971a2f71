//! Error type shared by all samplers.

use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SamplingError {
    InvalidParams { reason: String },
    BufferTooSmall { needed: usize, got: usize },
}

impl SamplingError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidParams {
            reason: reason.into(),
        }
    }

    /// Checks both output buffers against the number of points a sampler emits.
    pub(crate) fn check_buffers(needed: usize, re: &[f64], im: &[f64]) -> Result<(), Self> {
        let got = re.len().min(im.len());
        if got < needed {
            return Err(Self::BufferTooSmall { needed, got });
        }
        Ok(())
    }
}

impl fmt::Display for SamplingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParams { reason } => write!(f, "invalid sampler params: {reason}"),
            Self::BufferTooSmall { needed, got } => {
                write!(f, "output buffers too small: need {needed} points, got {got}")
            }
        }
    }
}

impl std::error::Error for SamplingError {}
