//! # Error Types — Structured Error Hierarchy
//!
//! Errors for the Kiln model layer. All errors use `thiserror` for
//! derive-based `Display` and `Error` implementations.
//!
//! ## Design
//!
//! - Enum-value errors carry the enum's type name and, for unknown values,
//!   the offending input, so a decode failure names the exact field type
//!   that rejected the payload.
//! - Identifier errors echo the rejected string.
//! - Builder errors name the shape and the missing field.
//!
//! All of these are non-recoverable at this layer. Whether a caller treats
//! an [`EnumValueError`] as a hard parse failure or logs and drops the
//! record for forward compatibility is the caller's policy, not ours.

use thiserror::Error;

/// Top-level error type for the Kiln model layer.
#[derive(Error, Debug)]
pub enum ModelError {
    /// A wire-string enum rejected its input.
    #[error("enum value error: {0}")]
    EnumValue(#[from] EnumValueError),

    /// An identifier newtype rejected its input.
    #[error("identifier error: {0}")]
    Identifier(#[from] IdentifierError),

    /// A request builder was finalized without a required field.
    #[error("missing required field {field:?} for {shape}")]
    MissingField {
        /// The shape under construction.
        shape: &'static str,
        /// The wire name of the absent field.
        field: &'static str,
    },

    /// JSON serialization or deserialization failed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Failure converting a wire string into a closed-enum constant.
///
/// The two cases are deliberately distinct: an empty input is malformed
/// regardless of the enum's declared set, while an unknown input is
/// well-formed but outside the closed set.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EnumValueError {
    /// The input was empty. Empty is invalid for every closed enum, even
    /// if some declared constant were to map to the empty string.
    #[error("{type_name} does not accept an empty value")]
    InvalidEnumValue {
        /// The enum type that rejected the input.
        type_name: &'static str,
    },

    /// The input was non-empty but matched no declared constant. Matching
    /// is exact and case-sensitive; no trimming or folding is applied.
    #[error("unknown value {value:?} for {type_name}")]
    UnknownEnumValue {
        /// The enum type that rejected the input.
        type_name: &'static str,
        /// The rejected input, verbatim.
        value: String,
    },
}

/// Failure validating an identifier newtype at construction.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IdentifierError {
    /// Not a well-formed ARN.
    #[error("invalid ARN: {0:?}")]
    InvalidArn(String),

    /// Not a well-formed resource name.
    #[error("invalid resource name: {0:?}")]
    InvalidResourceName(String),
}
