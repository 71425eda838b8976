//! Error types for the `krishi-advisor` crate.
//!
//! The engines are total over their documented input domains. The only
//! failures are inputs outside those domains and pixel buffers that cannot
//! describe an image, and each surfaces as a typed [`AdvisorError`].

use validator::ValidationErrors;

/// Errors returned by the advisory engines.
#[derive(Debug, thiserror::Error)]
pub enum AdvisorError {
    /// An input record failed its range checks.
    #[error("invalid {record}: {source}")]
    InvalidInput {
        /// Name of the rejected record type.
        record: &'static str,
        /// Per-field validation failures.
        #[source]
        source: ValidationErrors,
    },

    /// The pixel buffer contained no pixels.
    #[error("image contains no pixels")]
    EmptyImage,

    /// The pixel buffer length is not a whole number of RGBA pixels.
    #[error("pixel buffer of {len} bytes is not a multiple of 4 (RGBA)")]
    MalformedPixelBuffer {
        /// Length of the rejected buffer in bytes.
        len: usize,
    },

    /// An intermediate value could not be represented (NaN, infinite, or
    /// outside the decimal range).
    #[error("unrepresentable value while computing {context}")]
    NonFiniteValue {
        /// What was being computed.
        context: &'static str,
    },
}

/// Run the record's range checks, tagging failures with the record name.
pub(crate) fn validate_input<T: validator::Validate>(
    record: &T,
    name: &'static str,
) -> Result<(), AdvisorError> {
    record
        .validate()
        .map_err(|source| AdvisorError::InvalidInput {
            record: name,
            source,
        })
}
