//! Error type definitions for cryptographic operations

use thiserror::Error as ThisError;

/// Primary error type for every btcrypt operation
///
/// Each variant carries the name of the operation that detected the problem.
/// Nothing in this workspace retries or repairs a failed operation: every
/// error is returned to the caller at the point of detection.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// A value lies outside the range its type admits
    #[error("{context}: value out of range: {message}")]
    Range {
        context: &'static str,
        message: String,
    },

    /// A field was requested over a modulus that is not prime
    #[error("{context}: modulus {modulus} is not prime")]
    InvalidModulus {
        context: &'static str,
        modulus: String,
    },

    /// Two field elements with different moduli were combined
    #[error("{context}: field elements belong to different fields")]
    IncompatibleField { context: &'static str },

    /// Division by the additive identity
    #[error("{context}: division by zero")]
    Division { context: &'static str },

    /// Curve coefficients give a zero discriminant
    #[error("{context}: curve is singular (4a^3 + 27b^2 = 0)")]
    SingularCurve { context: &'static str },

    /// Coordinates do not satisfy the curve equation
    #[error("{context}: point is not on the curve")]
    PointNotOnCurve { context: &'static str },

    /// Points on different curves were combined
    #[error("{context}: points lie on different curves")]
    CurveMismatch { context: &'static str },

    /// Scalar multiplier is negative
    #[error("{context}: invalid scalar: {message}")]
    InvalidScalar {
        context: &'static str,
        message: String,
    },

    /// Private key secret outside [1, n-1]
    #[error("{context}: invalid secret: {message}")]
    InvalidSecret {
        context: &'static str,
        message: String,
    },

    /// DER signature violates the expected layout
    #[error("{context}: malformed signature: {message}")]
    MalformedSignature {
        context: &'static str,
        message: String,
    },

    /// Base58Check checksum does not match the payload
    #[error("{context}: checksum mismatch")]
    ChecksumMismatch { context: &'static str },

    /// Input of the wrong size
    #[error("{context}: invalid length (expected {expected}, got {actual})")]
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// SEC point encoding with a bad tag or size
    #[error("{context}: malformed point encoding: {message}")]
    MalformedPoint {
        context: &'static str,
        message: String,
    },

    /// Text or byte encoding that cannot be decoded
    #[error("{context}: invalid encoding: {message}")]
    InvalidEncoding {
        context: &'static str,
        message: String,
    },
}

/// Result type for btcrypt operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Shorthand to create a Range error
    pub fn range(context: &'static str, message: impl Into<String>) -> Self {
        Self::Range {
            context,
            message: message.into(),
        }
    }

    /// Shorthand to create a MalformedSignature error
    pub fn malformed_signature(context: &'static str, message: impl Into<String>) -> Self {
        Self::MalformedSignature {
            context,
            message: message.into(),
        }
    }

    /// Shorthand to create a MalformedPoint error
    pub fn malformed_point(context: &'static str, message: impl Into<String>) -> Self {
        Self::MalformedPoint {
            context,
            message: message.into(),
        }
    }

    /// Shorthand to create an InvalidEncoding error
    pub fn encoding(context: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidEncoding {
            context,
            message: message.into(),
        }
    }

    /// Shorthand to create an InvalidSecret error
    pub fn secret(context: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidSecret {
            context,
            message: message.into(),
        }
    }

    /// The operation that raised this error
    pub fn context(&self) -> &'static str {
        match self {
            Self::Range { context, .. }
            | Self::InvalidModulus { context, .. }
            | Self::IncompatibleField { context }
            | Self::Division { context }
            | Self::SingularCurve { context }
            | Self::PointNotOnCurve { context }
            | Self::CurveMismatch { context }
            | Self::InvalidScalar { context, .. }
            | Self::InvalidSecret { context, .. }
            | Self::MalformedSignature { context, .. }
            | Self::ChecksumMismatch { context }
            | Self::InvalidLength { context, .. }
            | Self::MalformedPoint { context, .. }
            | Self::InvalidEncoding { context, .. } => context,
        }
    }

    /// Replace the context of an existing error, keeping its kind and details
    pub fn with_context(mut self, new_context: &'static str) -> Self {
        match &mut self {
            Self::Range { context, .. }
            | Self::InvalidModulus { context, .. }
            | Self::IncompatibleField { context }
            | Self::Division { context }
            | Self::SingularCurve { context }
            | Self::PointNotOnCurve { context }
            | Self::CurveMismatch { context }
            | Self::InvalidScalar { context, .. }
            | Self::InvalidSecret { context, .. }
            | Self::MalformedSignature { context, .. }
            | Self::ChecksumMismatch { context }
            | Self::InvalidLength { context, .. }
            | Self::MalformedPoint { context, .. }
            | Self::InvalidEncoding { context, .. } => *context = new_context,
        }
        self
    }
}
