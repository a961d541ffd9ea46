use crate::diagnostics::Severity;
use thiserror::Error;

/// Why a logical `transform` declaration could not be rewritten.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RewriteError {
    /// The value produced no usable tokens.
    #[error("could not parse {value}")]
    Unparsable { value: String },
    /// A function whose direction cannot be derived, such as `matrix()`.
    #[error("logical flips cannot be performed on transforms that use {function}()")]
    DisallowedFunction { function: String },
    /// A rotation whose angle argument is not a plain `<angle>`.
    #[error("could not parse rotation value in {function}")]
    InvalidRotation { function: String },
}

impl RewriteError {
    /// Unparsable values only warn; everything else fails the declaration.
    pub const fn severity(&self) -> Severity {
        match self {
            Self::Unparsable { .. } => Severity::Warning,
            Self::DisallowedFunction { .. } | Self::InvalidRotation { .. } => Severity::Error,
        }
    }
}
